use std::sync::Arc;

use druid::{im::Vector, Data, Lens};
use serde::{Deserialize, Serialize};

use crate::data::fetch::Fetch;

#[derive(Clone, Data, Lens, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub id: u64,
    pub title: Arc<str>,
    pub short_description: Arc<str>,
    pub img_url: Arc<str>,
}

impl GameSummary {
    pub fn link(&self) -> GameLink {
        GameLink {
            id: self.id,
            title: self.title.clone(),
        }
    }
}

#[derive(Clone, Data, Lens, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: u64,
    pub title: Arc<str>,
    pub year: u32,
    pub genre: Arc<str>,
    pub platforms: Vector<Arc<str>>,
    pub img_url: Arc<str>,
    pub long_description: Arc<str>,
}

#[derive(Clone, Debug, Data, Lens, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct GameLink {
    pub id: u64,
    pub title: Arc<str>,
}

#[derive(Clone, Data, Lens, Default)]
pub struct OpenGame {
    pub record: Fetch<Arc<Game>, GameLink>,
}
