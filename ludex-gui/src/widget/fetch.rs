use std::{
    sync::Arc,
    thread::{self, JoinHandle},
};

use druid::{
    widget::{prelude::*, Controller},
    Data, ExtEventSink, Point, Selector, SingleUse, Target, WidgetExt, WidgetId, WidgetPod,
};

use crate::data::Fetch;

type Maker<U> = Box<dyn Fn() -> Box<dyn Widget<U>>>;
type Pod<U> = WidgetPod<U, Box<dyn Widget<U>>>;
type FetchFn<T, K, E> = Arc<dyn Fn(&K) -> Result<T, E> + Sync + Send>;

/// Shows one of three widgets depending on the phase of a `Fetch`: a
/// loading indicator while the request is pending, the content once it is
/// ready, and a failure widget if it failed.
pub struct FetchView<T, K, E> {
    pending_maker: Maker<K>,
    ready_maker: Maker<T>,
    failed_maker: Maker<E>,
    shown: Shown<T, K, E>,
}

#[allow(clippy::large_enum_variant)]
enum Shown<T, K, E> {
    Nothing,
    Pending(Pod<K>),
    Ready(Pod<T>),
    Failed(Pod<E>),
}

impl<T: Data, K: Data, E: Data> FetchView<T, K, E> {
    pub fn new<WK, WT, WE>(
        pending: impl Fn() -> WK + 'static,
        ready: impl Fn() -> WT + 'static,
        failed: impl Fn() -> WE + 'static,
    ) -> Self
    where
        WK: Widget<K> + 'static,
        WT: Widget<T> + 'static,
        WE: Widget<E> + 'static,
    {
        Self {
            pending_maker: Box::new(move || pending().boxed()),
            ready_maker: Box::new(move || ready().boxed()),
            failed_maker: Box::new(move || failed().boxed()),
            shown: Shown::Nothing,
        }
    }

    fn shows(&self, fetch: &Fetch<T, K, E>) -> bool {
        matches!(
            (&self.shown, fetch),
            (Shown::Nothing, Fetch::Empty)
                | (Shown::Pending(_), Fetch::Pending(_))
                | (Shown::Ready(_), Fetch::Ready(_))
                | (Shown::Failed(_), Fetch::Failed(_))
        )
    }

    fn rebuild(&mut self, fetch: &Fetch<T, K, E>) {
        self.shown = match fetch {
            Fetch::Empty => Shown::Nothing,
            Fetch::Pending(_) => Shown::Pending(WidgetPod::new((self.pending_maker)())),
            Fetch::Ready(_) => Shown::Ready(WidgetPod::new((self.ready_maker)())),
            Fetch::Failed(_) => Shown::Failed(WidgetPod::new((self.failed_maker)())),
        };
    }
}

impl<T: Data, K: Data, E: Data> Widget<Fetch<T, K, E>> for FetchView<T, K, E> {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut Fetch<T, K, E>, env: &Env) {
        // The shown widget lags behind the data until the next update pass.
        match (&mut self.shown, &mut *data) {
            (Shown::Pending(widget), Fetch::Pending(k)) => widget.event(ctx, event, k, env),
            (Shown::Ready(widget), Fetch::Ready(t)) => widget.event(ctx, event, t, env),
            (Shown::Failed(widget), Fetch::Failed(e)) => widget.event(ctx, event, e, env),
            _ => {}
        }
    }

    fn lifecycle(
        &mut self,
        ctx: &mut LifeCycleCtx,
        event: &LifeCycle,
        data: &Fetch<T, K, E>,
        env: &Env,
    ) {
        if !self.shows(data) {
            // Happens on WidgetAdded, or when an event has changed the
            // fetch and no update has run yet.
            self.rebuild(data);
        }
        match (&mut self.shown, data) {
            (Shown::Pending(widget), Fetch::Pending(k)) => widget.lifecycle(ctx, event, k, env),
            (Shown::Ready(widget), Fetch::Ready(t)) => widget.lifecycle(ctx, event, t, env),
            (Shown::Failed(widget), Fetch::Failed(e)) => widget.lifecycle(ctx, event, e, env),
            _ => {}
        }
    }

    fn update(
        &mut self,
        ctx: &mut UpdateCtx,
        _old_data: &Fetch<T, K, E>,
        data: &Fetch<T, K, E>,
        env: &Env,
    ) {
        if !self.shows(data) {
            self.rebuild(data);
            ctx.children_changed();
            return;
        }
        match (&mut self.shown, data) {
            (Shown::Pending(widget), Fetch::Pending(k)) => widget.update(ctx, k, env),
            (Shown::Ready(widget), Fetch::Ready(t)) => widget.update(ctx, t, env),
            (Shown::Failed(widget), Fetch::Failed(e)) => widget.update(ctx, e, env),
            _ => {}
        }
    }

    fn layout(
        &mut self,
        ctx: &mut LayoutCtx,
        bc: &BoxConstraints,
        data: &Fetch<T, K, E>,
        env: &Env,
    ) -> Size {
        let size = match (&mut self.shown, data) {
            (Shown::Pending(widget), Fetch::Pending(k)) => {
                let size = widget.layout(ctx, bc, k, env);
                widget.set_origin(ctx, Point::ORIGIN);
                Some(size)
            }
            (Shown::Ready(widget), Fetch::Ready(t)) => {
                let size = widget.layout(ctx, bc, t, env);
                widget.set_origin(ctx, Point::ORIGIN);
                Some(size)
            }
            (Shown::Failed(widget), Fetch::Failed(e)) => {
                let size = widget.layout(ctx, bc, e, env);
                widget.set_origin(ctx, Point::ORIGIN);
                Some(size)
            }
            _ => None,
        };
        size.unwrap_or_else(|| bc.min())
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &Fetch<T, K, E>, env: &Env) {
        match (&mut self.shown, data) {
            (Shown::Pending(widget), Fetch::Pending(k)) => widget.paint(ctx, k, env),
            (Shown::Ready(widget), Fetch::Ready(t)) => widget.paint(ctx, t, env),
            (Shown::Failed(widget), Fetch::Failed(e)) => widget.paint(ctx, e, env),
            _ => {}
        }
    }
}

/// Controller for a `FetchView` that runs a pending request on a worker
/// thread and settles the fetch with the outcome. Results of requests the
/// fetch no longer waits for are dropped.
pub struct Resolver<T, K, E> {
    fetch: FetchFn<T, K, E>,
    worker: Option<JoinHandle<()>>,
}

impl<T, K, E> Resolver<T, K, E>
where
    T: Send + 'static,
    K: Send + 'static,
    E: Send + 'static,
{
    const RESULT: Selector<SingleUse<(K, Result<T, E>)>> = Selector::new("fetch.result");

    pub fn new(fetch: impl Fn(&K) -> Result<T, E> + Sync + Send + 'static) -> Self {
        Self {
            fetch: Arc::new(fetch),
            worker: None,
        }
    }

    fn spawn(&mut self, widget_id: WidgetId, sink: ExtEventSink, key: K) {
        let previous = self.worker.replace(thread::spawn({
            let fetch = self.fetch.clone();
            move || {
                let result = fetch(&key);
                sink.submit_command(
                    Self::RESULT,
                    SingleUse::new((key, result)),
                    Target::Widget(widget_id),
                )
                .unwrap();
            }
        }));
        if previous.is_some() {
            log::warn!("fetch already pending");
        }
    }
}

impl<T, K, E, W> Controller<Fetch<T, K, E>, W> for Resolver<T, K, E>
where
    T: Send + Data,
    K: Send + Data + PartialEq,
    E: Send + Data,
    W: Widget<Fetch<T, K, E>>,
{
    fn event(
        &mut self,
        child: &mut W,
        ctx: &mut EventCtx,
        event: &Event,
        data: &mut Fetch<T, K, E>,
        env: &Env,
    ) {
        if let Event::Command(cmd) = event {
            if let Some(payload) = cmd.get(Self::RESULT) {
                data.settle(payload.take().unwrap());
                self.worker.take();
                ctx.set_handled();
                return;
            }
        }
        child.event(ctx, event, data, env);
    }

    fn lifecycle(
        &mut self,
        child: &mut W,
        ctx: &mut LifeCycleCtx,
        event: &LifeCycle,
        data: &Fetch<T, K, E>,
        env: &Env,
    ) {
        if let (LifeCycle::WidgetAdded, Fetch::Pending(key)) = (event, data) {
            self.spawn(ctx.widget_id(), ctx.get_external_handle(), key.to_owned());
        }
        child.lifecycle(ctx, event, data, env);
    }

    fn update(
        &mut self,
        child: &mut W,
        ctx: &mut UpdateCtx,
        old_data: &Fetch<T, K, E>,
        data: &Fetch<T, K, E>,
        env: &Env,
    ) {
        if let Fetch::Pending(key) = data {
            if !old_data.same(data) {
                self.spawn(ctx.widget_id(), ctx.get_external_handle(), key.to_owned());
            }
        }
        child.update(ctx, old_data, data, env);
    }
}
