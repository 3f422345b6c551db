use std::{fmt::Display, io::Read, sync::Arc, time::Duration};

use druid::{
    im::Vector,
    image::{self, ImageFormat},
    ImageBuf,
};
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use serde_json::json;
use ureq::{http::Response, Agent, Body};
use url::Url;

use crate::{
    data::{Game, GameList, GameSummary, ListGames, ListLink},
    error::Error,
};

use super::cache::ImageCache;

pub struct WebApi {
    agent: Agent,
    base_url: String,
    images: ImageCache,
}

static WEBAPI: OnceCell<Arc<WebApi>> = OnceCell::new();

/// Process-wide instance, installed at startup.
impl WebApi {
    pub fn install_global(self) {
        WEBAPI
            .set(Arc::new(self))
            .map_err(|_| "Web API installed twice")
            .unwrap();
    }

    pub fn global() -> Arc<Self> {
        WEBAPI.get().expect("Web API not installed").clone()
    }
}

impl WebApi {
    pub fn new(base_url: &str, proxy_url: Option<&str>) -> Self {
        let mut agent = Agent::config_builder().timeout_global(Some(Duration::from_secs(5)));
        if let Some(proxy_url) = proxy_url {
            match ureq::Proxy::new(proxy_url) {
                Ok(proxy) => {
                    agent = agent.proxy(Some(proxy));
                }
                Err(err) => {
                    log::error!("failed to parse proxy url: {:?}", err);
                }
            }
        }
        Self {
            agent: agent.build().into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            images: ImageCache::default(),
        }
    }

    fn request(&self, endpoint: &Endpoint) -> Result<Response<Body>, Error> {
        let url = endpoint.url(&self.base_url);
        let response = match endpoint.method {
            Method::Get => self.agent.get(&url).call()?,
            Method::Post => self.agent.post(&url).send_json(endpoint.body.as_ref())?,
        };
        Ok(response)
    }

    /// Sends a request for its side effect, dropping the response body.
    fn send(&self, endpoint: &Endpoint) -> Result<(), Error> {
        self.request(endpoint).map(|_| ())
    }

    /// Sends a request and deserializes the JSON response body.
    fn load<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, Error> {
        let mut response = self.request(endpoint)?;
        Ok(response.body_mut().read_json()?)
    }
}

/// List endpoints.
impl WebApi {
    pub fn get_lists(&self) -> Result<Vector<GameList>, Error> {
        self.load(&Endpoint::get("lists"))
    }

    pub fn get_list_games(&self, link: &ListLink) -> Result<ListGames, Error> {
        let games: Vector<Arc<GameSummary>> =
            self.load(&Endpoint::get(format!("lists/{}/games", link.id)))?;
        Ok(ListGames {
            list: link.to_owned(),
            games,
        })
    }

    /// Persist a single-element move inside a list. The indices refer to the
    /// ordering the server knew before the move.
    pub fn move_game(
        &self,
        list_id: u64,
        source_index: usize,
        destination_index: usize,
    ) -> Result<(), Error> {
        self.send(&Endpoint::post(
            format!("lists/{}/replacement", list_id),
            json!({
                "sourceIndex": source_index,
                "destinationIndex": destination_index,
            }),
        ))
    }
}

/// Game endpoints.
impl WebApi {
    pub fn get_game(&self, id: u64) -> Result<Arc<Game>, Error> {
        let game: Option<Arc<Game>> = self.load(&Endpoint::get(format!("games/{}", id)))?;
        game.ok_or(Error::NotFound)
    }
}

/// Cover images.
impl WebApi {
    pub fn cached_image(&self, url: &Arc<str>) -> Option<ImageBuf> {
        self.images.lookup(url)
    }

    pub fn load_image(&self, url: Arc<str>) -> Result<ImageBuf, Error> {
        if let Some(cached) = self.images.lookup(&url) {
            return Ok(cached);
        }
        let target = Url::parse(&self.base_url)?.join(&url)?;
        let response = self.agent.get(target.as_str()).call()?;
        let mut body = Vec::new();
        response.into_body().into_reader().read_to_end(&mut body)?;
        let image_buf = Self::decode_image(&body)?;
        self.images.store(url, image_buf.clone());
        Ok(image_buf)
    }

    /// Decodes in the sniffed format, falling back to guessing from the
    /// content when the sniff comes up empty.
    fn decode_image(body: &[u8]) -> Result<ImageBuf, Error> {
        let sniffed = infer::get(body).and_then(|kind| match kind.mime_type() {
            "image/jpeg" => Some(ImageFormat::Jpeg),
            "image/png" => Some(ImageFormat::Png),
            _ => None,
        });
        let image = match sniffed {
            Some(format) => image::load_from_memory_with_format(body, format)?,
            None => image::load_from_memory(body)?,
        };
        Ok(ImageBuf::from_dynamic_image(image))
    }
}

#[derive(Debug, Clone)]
enum Method {
    Get,
    Post,
}

/// Path and payload of a catalog API call, relative to the base URL.
#[derive(Debug, Clone)]
struct Endpoint {
    path: String,
    method: Method,
    body: Option<serde_json::Value>,
}

impl Endpoint {
    fn get(path: impl Display) -> Self {
        Self {
            path: path.to_string(),
            method: Method::Get,
            body: None,
        }
    }

    fn post(path: impl Display, body: serde_json::Value) -> Self {
        Self {
            path: path.to_string(),
            method: Method::Post,
            body: Some(body),
        }
    }

    fn url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_joins_base_and_path() {
        let endpoint = Endpoint::get(format!("lists/{}/games", 5));
        assert_eq!(
            endpoint.url("http://localhost:8080"),
            "http://localhost:8080/lists/5/games"
        );
    }
}
