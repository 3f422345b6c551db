use std::sync::Arc;

use druid::{AppDelegate, Command, DelegateCtx, Env, ExtEventSink, Handled, ImageBuf, Target};
use threadpool::ThreadPool;

use crate::{data::AppState, webapi::WebApi, widget::web_image};

pub struct Delegate {
    image_pool: ThreadPool,
}

impl Delegate {
    pub fn new() -> Self {
        const MAX_IMAGE_THREADS: usize = 32;

        Self {
            image_pool: ThreadPool::with_name("image_loading".into(), MAX_IMAGE_THREADS),
        }
    }

    /// Serves the image requests of `WebImage` widgets. Cached images are
    /// answered straight away, the rest is downloaded on the image pool.
    /// Failed downloads are logged and leave the placeholder up.
    fn command_image(&mut self, ctx: &mut DelegateCtx, target: Target, cmd: &Command) -> Handled {
        let url = match cmd.get(web_image::LOAD_IMAGE) {
            Some(url) => url.clone(),
            None => return Handled::No,
        };
        let sink = ctx.get_external_handle();
        if let Some(image) = WebApi::global().cached_image(&url) {
            Self::deliver(&sink, target, url, image);
        } else {
            self.image_pool
                .execute(move || match WebApi::global().load_image(url.clone()) {
                    Ok(image) => Self::deliver(&sink, target, url, image),
                    Err(err) => log::error!("failed to load image {}: {:?}", url, err),
                });
        }
        Handled::Yes
    }

    fn deliver(sink: &ExtEventSink, target: Target, url: Arc<str>, image: ImageBuf) {
        let loaded = web_image::LoadedImage { url, image };
        sink.submit_command(web_image::IMAGE_LOADED, loaded, target)
            .unwrap();
    }
}

impl AppDelegate<AppState> for Delegate {
    fn command(
        &mut self,
        ctx: &mut DelegateCtx,
        target: Target,
        cmd: &Command,
        _data: &mut AppState,
        _env: &Env,
    ) -> Handled {
        self.command_image(ctx, target, cmd)
    }
}
