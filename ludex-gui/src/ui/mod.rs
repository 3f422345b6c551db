use druid::{
    widget::{CrossAxisAlignment, Either, Flex, Label, Scroll, SizedBox, ViewSwitcher},
    Env, Widget, WidgetExt, WindowDesc,
};

use crate::{
    cmd,
    controller::ScreenController,
    data::{AppState, Screen, ScreenKind},
    widget::{icons, MyWidgetExt},
};

pub mod game;
pub mod home;
pub mod list;
pub mod theme;
pub mod utils;

pub fn main_window() -> WindowDesc<AppState> {
    WindowDesc::new(root_widget())
        .title(compute_window_title)
        .with_min_size((theme::grid(40.0), theme::grid(50.0)))
        .window_size((theme::grid(60.0), theme::grid(80.0)))
}

fn compute_window_title(data: &AppState, _env: &Env) -> String {
    match &data.screen {
        Screen::Home => "Ludex".to_string(),
        screen => format!("Ludex: {}", screen.title()),
    }
}

fn root_widget() -> impl Widget<AppState> {
    let topbar = Flex::row()
        .must_fill_main_axis(true)
        .with_child(back_button_widget())
        .with_default_spacer()
        .with_child(title_widget());

    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(topbar)
        .with_flex_child(screen_widget(), 1.0)
        .controller(ScreenController)
}

fn screen_widget() -> impl Widget<AppState> {
    let switcher = ViewSwitcher::new(
        |data: &AppState, _| data.screen.kind(),
        |kind: &ScreenKind, _, _| match kind {
            ScreenKind::Home => home::home_widget().boxed(),
            ScreenKind::List => list::detail_widget().boxed(),
            ScreenKind::Game => game::detail_widget().boxed(),
        },
    )
    .padding(theme::grid(1.0));

    Scroll::new(switcher).vertical().expand()
}

fn back_button_widget() -> impl Widget<AppState> {
    let icon_width = 10.0;
    let icon_height = theme::grid(2.0);
    let back_icon = icons::BACK
        .scaled((icon_width, icon_height))
        .padding(theme::grid(1.0))
        .highlight()
        .rounded(theme::CORNER_RADIUS)
        .on_click(|ctx, _, _| {
            ctx.submit_command(cmd::GO_BACK.with(1));
        });
    Either::new(
        |data: &AppState, _| data.history.is_empty(),
        SizedBox::empty(),
        back_icon,
    )
    .padding(theme::grid(1.0))
}

fn title_widget() -> impl Widget<AppState> {
    Label::dynamic(|data: &AppState, _| data.screen.title()).with_font(theme::UI_FONT_MEDIUM)
}
