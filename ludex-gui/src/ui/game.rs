use std::sync::Arc;

use druid::{
    widget::{CrossAxisAlignment, Either, Flex, Label, LineBreaking},
    Env, LensExt, Widget, WidgetExt,
};
use itertools::Itertools;

use crate::{
    data::{AppState, Game, GameLink, OpenGame},
    error::Error,
    webapi::WebApi,
    widget::{FetchView, Resolver, WebImage},
};

use super::{
    theme,
    utils::{cover_placeholder_widget, error_widget, loading_widget},
};

pub fn detail_widget() -> impl Widget<AppState> {
    FetchView::new(loading_widget, game_widget, not_found_widget)
        .controller(Resolver::new(|link: &GameLink| {
            WebApi::global().get_game(link.id)
        }))
        .lens(AppState::open_game.then(OpenGame::record))
}

fn not_found_widget() -> impl Widget<Error> {
    Either::new(
        |err: &Error, _| matches!(err, Error::NotFound),
        Label::new("Game not found.")
            .with_text_color(theme::PLACEHOLDER_COLOR)
            .padding(theme::grid(2.0))
            .center(),
        error_widget(),
    )
}

fn game_widget() -> impl Widget<Arc<Game>> {
    let game_cover = cover_widget(theme::grid(20.0));

    let game_title = Label::raw()
        .with_font(theme::UI_FONT_MEDIUM)
        .with_text_size(theme::TEXT_SIZE_LARGE)
        .with_line_break_mode(LineBreaking::WordWrap)
        .lens(Game::title.in_arc());

    let game_year = attribute_widget("Year:", |game: &Arc<Game>, _| game.year.to_string());
    let game_genre = attribute_widget("Genre:", |game: &Arc<Game>, _| game.genre.to_string());
    let game_platforms = attribute_widget("Platforms:", |game: &Arc<Game>, _| {
        game.platforms.iter().map(|platform| platform.as_ref()).join(", ")
    });

    let game_description = Label::raw()
        .with_line_break_mode(LineBreaking::WordWrap)
        .lens(Game::long_description.in_arc());

    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(game_cover)
        .with_default_spacer()
        .with_child(game_title)
        .with_default_spacer()
        .with_child(game_year)
        .with_child(game_genre)
        .with_child(game_platforms)
        .with_default_spacer()
        .with_child(game_description)
        .padding(theme::grid(1.0))
}

fn attribute_widget(
    name: &'static str,
    value: impl Fn(&Arc<Game>, &Env) -> String + 'static,
) -> impl Widget<Arc<Game>> {
    Flex::row()
        .with_child(
            Label::new(name)
                .with_font(theme::UI_FONT_MEDIUM)
                .with_text_size(theme::TEXT_SIZE_SMALL),
        )
        .with_spacer(theme::grid(0.5))
        .with_child(
            Label::dynamic(value)
                .with_text_size(theme::TEXT_SIZE_SMALL)
                .with_text_color(theme::PLACEHOLDER_COLOR),
        )
}

fn cover_widget(size: f64) -> impl Widget<Arc<Game>> {
    WebImage::new(cover_placeholder_widget(), |game: &Arc<Game>, _| {
        (!game.img_url.is_empty()).then(|| game.img_url.clone())
    })
    .fix_size(size, size)
}
