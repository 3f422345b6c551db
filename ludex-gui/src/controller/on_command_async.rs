use std::{
    sync::Arc,
    thread::{self, JoinHandle},
};

use druid::{widget::Controller, Data, Env, Event, EventCtx, Selector, SingleUse, Target, Widget};

type RequestFn<U, V> = Arc<dyn Fn(U) -> V + Sync + Send>;
type ResponseFn<T, U, V> = Box<dyn Fn(&mut EventCtx, &mut T, (U, V))>;

/// Runs a request on a worker thread when a command with the matching
/// selector arrives, then hands the response back to the widget on the
/// main thread.
pub struct OnCommandAsync<T, U, V> {
    selector: Selector<U>,
    request_fn: RequestFn<U, V>,
    response_fn: ResponseFn<T, U, V>,
    thread: Option<JoinHandle<()>>,
}

impl<T, U, V> OnCommandAsync<T, U, V> {
    const RESPONSE: Selector<SingleUse<(U, V)>> = Selector::new("on_command_async.response");

    pub fn new(
        selector: Selector<U>,
        request_fn: RequestFn<U, V>,
        response_fn: ResponseFn<T, U, V>,
    ) -> Self {
        Self {
            selector,
            request_fn,
            response_fn,
            thread: None,
        }
    }
}

impl<T, U, V, W> Controller<T, W> for OnCommandAsync<T, U, V>
where
    T: Data,
    U: Send + Clone + 'static,
    V: Send + 'static,
    W: Widget<T>,
{
    fn event(&mut self, child: &mut W, ctx: &mut EventCtx, event: &Event, data: &mut T, env: &Env) {
        match event {
            Event::Command(cmd) if cmd.is(self.selector) => {
                let request = cmd.get_unchecked(self.selector).to_owned();
                let pending = self.thread.replace(thread::spawn({
                    let request_fn = self.request_fn.clone();
                    let sink = ctx.get_external_handle();
                    let widget_id = ctx.widget_id();
                    move || {
                        let response = request_fn(request.clone());
                        sink.submit_command(
                            Self::RESPONSE,
                            SingleUse::new((request, response)),
                            Target::Widget(widget_id),
                        )
                        .unwrap();
                    }
                }));
                if pending.is_some() {
                    log::warn!("async command still pending");
                }
                ctx.set_handled();
            }
            Event::Command(cmd) if cmd.is(Self::RESPONSE) => {
                let response = cmd.get_unchecked(Self::RESPONSE).take().unwrap();
                (self.response_fn)(ctx, data, response);
                self.thread.take();
                ctx.set_handled();
            }
            _ => {
                child.event(ctx, event, data, env);
            }
        }
    }
}
