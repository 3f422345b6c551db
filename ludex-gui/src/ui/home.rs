use druid::{
    im::Vector,
    widget::{Label, LineBreaking, List},
    LensExt, Widget, WidgetExt,
};

use crate::{
    cmd,
    data::{AppState, Catalog, GameList, Screen},
    webapi::WebApi,
    widget::{FetchView, MyWidgetExt, Resolver},
};

use super::{
    theme,
    utils::{error_widget, loading_widget},
};

pub fn home_widget() -> impl Widget<AppState> {
    FetchView::new(loading_widget, catalog_widget, error_widget)
        .controller(Resolver::new(|_: &()| WebApi::global().get_lists()))
        .lens(AppState::catalog.then(Catalog::lists))
}

fn catalog_widget() -> impl Widget<Vector<GameList>> {
    List::new(list_widget)
}

fn list_widget() -> impl Widget<GameList> {
    Label::raw()
        .with_font(theme::UI_FONT_MEDIUM)
        .with_line_break_mode(LineBreaking::Clip)
        .lens(GameList::name)
        .padding(theme::grid(1.0))
        .expand_width()
        .highlight()
        .rounded(theme::CORNER_RADIUS)
        .on_click(|ctx, list: &mut GameList, _| {
            ctx.submit_command(cmd::OPEN.with(Screen::List(list.link())));
        })
}
