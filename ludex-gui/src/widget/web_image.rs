use std::sync::Arc;

use druid::{
    widget::{prelude::*, Image},
    Data, ImageBuf, Point, Selector, WidgetPod,
};

pub const LOAD_IMAGE: Selector<Arc<str>> = Selector::new("app.image.load");
pub const IMAGE_LOADED: Selector<LoadedImage> = Selector::new("app.image.loaded");

/// A downloaded image, delivered back to the widget that asked for it.
#[derive(Clone)]
pub struct LoadedImage {
    pub url: Arc<str>,
    pub image: ImageBuf,
}

type Pod<T> = WidgetPod<T, Box<dyn Widget<T>>>;

/// Image fetched from a URL derived from the data, with a placeholder shown
/// until the download finishes. The download itself is performed by the
/// application delegate.
pub struct WebImage<T> {
    placeholder: Pod<T>,
    image: Option<Pod<T>>,
    url_of: Box<dyn Fn(&T, &Env) -> Option<Arc<str>>>,
    url: Option<Arc<str>>,
}

impl<T: Data> WebImage<T> {
    pub fn new(
        placeholder: impl Widget<T> + 'static,
        url_of: impl Fn(&T, &Env) -> Option<Arc<str>> + 'static,
    ) -> Self {
        Self {
            placeholder: WidgetPod::new(placeholder).boxed(),
            image: None,
            url_of: Box::new(url_of),
            url: None,
        }
    }

    fn shown(&mut self) -> &mut Pod<T> {
        self.image.as_mut().unwrap_or(&mut self.placeholder)
    }

    /// Notes the URL the data points to now, dropping a stale image.
    /// Returns true if it changed and a new download should be requested.
    fn update_url(&mut self, data: &T, env: &Env) -> bool {
        let url = (self.url_of)(data, env);
        if url == self.url {
            false
        } else {
            self.image = None;
            self.url = url;
            true
        }
    }
}

impl<T: Data> Widget<T> for WebImage<T> {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut T, env: &Env) {
        if let Event::Command(cmd) = event {
            if let Some(loaded) = cmd.get(IMAGE_LOADED) {
                if self.url.as_ref() == Some(&loaded.url) {
                    self.image = Some(WidgetPod::new(Image::new(loaded.image.clone())).boxed());
                    ctx.children_changed();
                }
                return;
            }
        }
        self.shown().event(ctx, event, data, env);
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, data: &T, env: &Env) {
        if let LifeCycle::WidgetAdded = event {
            if self.update_url(data, env) {
                if let Some(url) = self.url.clone() {
                    ctx.submit_command(LOAD_IMAGE.with(url).to(ctx.widget_id()));
                }
            }
        }
        self.shown().lifecycle(ctx, event, data, env);
    }

    fn update(&mut self, ctx: &mut UpdateCtx, _old_data: &T, data: &T, env: &Env) {
        if self.update_url(data, env) {
            if let Some(url) = self.url.clone() {
                ctx.submit_command(LOAD_IMAGE.with(url).to(ctx.widget_id()));
            }
            ctx.children_changed();
        }
        self.shown().update(ctx, data, env);
    }

    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints, data: &T, env: &Env) -> Size {
        let shown = self.shown();
        let size = shown.layout(ctx, bc, data, env);
        shown.set_origin(ctx, Point::ORIGIN);
        size
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &T, env: &Env) {
        self.shown().paint(ctx, data, env);
    }
}
