pub mod icons;

mod drag_reorder;
mod fetch;
mod highlight;
pub mod web_image;

use std::sync::Arc;

use druid::{widget::ControllerHost, Data, EventCtx, Selector, Widget, WidgetExt};

pub use drag_reorder::DragReorder;
pub use fetch::{FetchView, Resolver};
pub use highlight::Highlight;
pub use web_image::WebImage;

use crate::controller::{OnCommand, OnCommandAsync};

pub trait MyWidgetExt<T: Data>: Widget<T> + Sized + 'static {
    fn highlight(self) -> Highlight<T> {
        Highlight::new(self)
    }

    fn on_command<P, F>(
        self,
        selector: Selector<P>,
        action: F,
    ) -> ControllerHost<Self, OnCommand<P, F>>
    where
        P: 'static,
        F: Fn(&mut EventCtx, &P, &mut T),
    {
        self.controller(OnCommand::new(selector, action))
    }

    fn on_command_async<U: Send + Clone + 'static, V: Send + 'static>(
        self,
        selector: Selector<U>,
        request: impl Fn(U) -> V + Sync + Send + 'static,
        response: impl Fn(&mut EventCtx, &mut T, (U, V)) + 'static,
    ) -> ControllerHost<Self, OnCommandAsync<T, U, V>> {
        self.controller(OnCommandAsync::new(
            selector,
            Arc::new(request),
            Box::new(response),
        ))
    }
}

impl<T: Data, W: Widget<T> + 'static> MyWidgetExt<T> for W {}
