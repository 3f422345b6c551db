use std::f64::consts::{FRAC_PI_2, PI};

use druid::{
    kurbo::Circle,
    widget::{prelude::*, Flex, Label, SizedBox},
    Data, Vec2, Widget, WidgetExt,
};

use crate::{
    cmd,
    error::Error,
    widget::{icons, MyWidgetExt},
};

use super::theme;

const SPIN_PERIOD: f64 = 1.2;
const DOT_COUNT: usize = 8;

struct Spinner {
    phase: f64,
}

impl Spinner {
    pub fn new() -> Self {
        Self { phase: 0.0 }
    }
}

impl<T: Data> Widget<T> for Spinner {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, _data: &mut T, _env: &Env) {
        if let Event::AnimFrame(interval) = event {
            let elapsed = (*interval as f64) * 1e-9;
            self.phase = (self.phase + elapsed / SPIN_PERIOD).fract();
            ctx.request_anim_frame();
            ctx.request_paint();
        }
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, _data: &T, _env: &Env) {
        if let LifeCycle::WidgetAdded = event {
            ctx.request_anim_frame();
            ctx.request_paint();
        }
    }

    fn update(&mut self, _ctx: &mut UpdateCtx, _old_data: &T, _data: &T, _env: &Env) {}

    fn layout(
        &mut self,
        _layout_ctx: &mut LayoutCtx,
        bc: &BoxConstraints,
        _data: &T,
        _env: &Env,
    ) -> Size {
        bc.constrain(Size::new(theme::grid(7.0), theme::grid(7.0)))
    }

    fn paint(&mut self, ctx: &mut PaintCtx, _data: &T, env: &Env) {
        let center = ctx.size().to_rect().center();
        let ring = env.get(theme::GREY_500);
        let leader = env.get(theme::GREY_400);
        let lead_dot = (self.phase * DOT_COUNT as f64) as usize % DOT_COUNT;
        for dot in 0..DOT_COUNT {
            let turn = dot as f64 / DOT_COUNT as f64;
            // Clockwise, starting at the top.
            let offset = Vec2::from_angle(turn * 2.0 * PI - FRAC_PI_2) * theme::grid(2.5);
            if dot == lead_dot {
                ctx.fill(Circle::new(center + offset, theme::grid(0.9)), &leader);
            } else {
                ctx.fill(Circle::new(center + offset, theme::grid(0.6)), &ring);
            }
        }
    }
}

pub fn cover_placeholder_widget<T: Data>() -> impl Widget<T> {
    SizedBox::empty().background(theme::BACKGROUND_DARK)
}

pub fn loading_widget<T: Data>() -> impl Widget<T> {
    Spinner::new().center()
}

/// Failure view shown for a fetch that went wrong. Clicking it reloads the
/// displayed screen.
pub fn error_widget() -> impl Widget<Error> {
    let icon = icons::SAD_FACE
        .scaled((theme::grid(3.0), theme::grid(3.0)))
        .with_color(theme::PLACEHOLDER_COLOR);
    let heading = Label::new("Error:")
        .with_font(theme::UI_FONT_MEDIUM)
        .with_text_color(theme::PLACEHOLDER_COLOR);
    let message = Label::dynamic(|err: &Error, _| err.to_string())
        .with_text_size(theme::TEXT_SIZE_SMALL)
        .with_text_color(theme::PLACEHOLDER_COLOR);
    let hint = Label::new("Click to try again.")
        .with_text_size(theme::TEXT_SIZE_SMALL)
        .with_text_color(theme::PLACEHOLDER_COLOR);
    Flex::column()
        .with_child(icon)
        .with_default_spacer()
        .with_child(heading)
        .with_child(message)
        .with_default_spacer()
        .with_child(hint)
        .padding(theme::grid(4.0))
        .highlight()
        .rounded(theme::CORNER_RADIUS)
        .on_click(|ctx, _, _| {
            ctx.submit_command(cmd::RELOAD);
        })
        .center()
}
