use druid::{widget::prelude::*, Color, Data, KeyOrValue, Point, RoundedRectRadii, WidgetPod};

use crate::ui::theme;

/// Paints a highlight behind its child while the pointer hovers over it.
/// Used together with `on_click` for anything tappable.
pub struct Highlight<T> {
    child: WidgetPod<T, Box<dyn Widget<T>>>,
    radius: KeyOrValue<RoundedRectRadii>,
}

impl<T: Data> Highlight<T> {
    pub fn new(child: impl Widget<T> + 'static) -> Self {
        Self {
            child: WidgetPod::new(child).boxed(),
            radius: RoundedRectRadii::from(0.0).into(),
        }
    }

    pub fn rounded(mut self, radius: impl Into<KeyOrValue<RoundedRectRadii>>) -> Self {
        self.radius = radius.into();
        self
    }

    fn tint(&self, ctx: &PaintCtx, env: &Env) -> Color {
        if ctx.is_hot() {
            env.get(theme::HIGHLIGHT_HOT_COLOR)
        } else {
            env.get(theme::HIGHLIGHT_COLD_COLOR)
        }
    }
}

impl<T: Data> Widget<T> for Highlight<T> {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut T, env: &Env) {
        self.child.event(ctx, event, data, env)
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, data: &T, env: &Env) {
        if matches!(event, LifeCycle::HotChanged(_)) {
            ctx.request_paint();
        }
        self.child.lifecycle(ctx, event, data, env)
    }

    fn update(&mut self, ctx: &mut UpdateCtx, _old_data: &T, data: &T, env: &Env) {
        self.child.update(ctx, data, env)
    }

    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints, data: &T, env: &Env) -> Size {
        let size = self.child.layout(ctx, bc, data, env);
        self.child.set_origin(ctx, Point::ORIGIN);
        size
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &T, env: &Env) {
        let tint = self.tint(ctx, env);
        if tint.as_rgba_u32() & 0xFF > 0 {
            let shape = ctx
                .size()
                .to_rect()
                .to_rounded_rect(self.radius.resolve(env));
            ctx.fill(shape, &tint);
        }
        self.child.paint(ctx, data, env)
    }
}
