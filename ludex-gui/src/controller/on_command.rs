use druid::{widget::Controller, Data, Env, Event, EventCtx, Selector, Widget};

/// Runs an action when a command with the matching selector arrives. The
/// command is passed on to the child widget afterwards.
pub struct OnCommand<P, F> {
    selector: Selector<P>,
    action: F,
}

impl<P, F> OnCommand<P, F> {
    pub fn new(selector: Selector<P>, action: F) -> Self {
        Self { selector, action }
    }
}

impl<T, P, F, W> Controller<T, W> for OnCommand<P, F>
where
    T: Data,
    P: 'static,
    F: Fn(&mut EventCtx, &P, &mut T),
    W: Widget<T>,
{
    fn event(&mut self, child: &mut W, ctx: &mut EventCtx, event: &Event, data: &mut T, env: &Env) {
        if let Event::Command(cmd) = event {
            if let Some(payload) = cmd.get(self.selector) {
                (self.action)(ctx, payload, data);
            }
        }
        child.event(ctx, event, data, env);
    }
}
