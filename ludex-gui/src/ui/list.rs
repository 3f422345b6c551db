use std::sync::Arc;

use druid::{
    widget::{CrossAxisAlignment, Either, Flex, Label, LineBreaking, List},
    LensExt, Selector, Widget, WidgetExt,
};

use crate::{
    cmd,
    data::{AppState, GameLink, GameSummary, ListGames, ListLink, OpenList, ReorderMove, Screen},
    webapi::WebApi,
    widget::{DragReorder, FetchView, MyWidgetExt, Resolver, WebImage},
};

use super::{
    theme,
    utils::{cover_placeholder_widget, error_widget, loading_widget},
};

const GO_TO_GAME: Selector<GameLink> = Selector::new("app.list.go-to-game");
const REORDER_GAME: Selector<(GameLink, GameLink)> = Selector::new("app.list.reorder-game");
const CONFIRM_REORDER: Selector<ReorderMove> = Selector::new("app.list.confirm-reorder");

pub fn detail_widget() -> impl Widget<AppState> {
    FetchView::new(loading_widget, loaded_widget, error_widget)
        .controller(Resolver::new(|link: &ListLink| {
            WebApi::global().get_list_games(link)
        }))
        .lens(AppState::open_list.then(OpenList::games))
        .on_command(GO_TO_GAME, |ctx, link, _| {
            ctx.submit_command(cmd::OPEN.with(Screen::Game(link.to_owned())));
        })
        .on_command(REORDER_GAME, |ctx, (active, over), data: &mut AppState| {
            if let Some(mov) = data.open_list.move_game(active.id, over.id) {
                ctx.submit_command(CONFIRM_REORDER.with(mov));
            }
        })
        .on_command_async(
            CONFIRM_REORDER,
            |mov| WebApi::global().move_game(mov.list.id, mov.source_index, mov.destination_index),
            |_, data, (mov, result)| {
                if let Err(err) = result {
                    log::error!(
                        "failed to save the new order of list {}: {:?}",
                        mov.list.id,
                        err
                    );
                    data.open_list.revert_move(&mov);
                }
            },
        )
}

fn loaded_widget() -> impl Widget<ListGames> {
    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(reorder_hint_widget())
        .with_default_spacer()
        .with_child(games_widget())
}

fn reorder_hint_widget() -> impl Widget<ListGames> {
    Label::new("Drag and drop to reorder.")
        .with_text_size(theme::TEXT_SIZE_SMALL)
        .with_text_color(theme::PLACEHOLDER_COLOR)
        .padding((theme::grid(1.0), 0.0))
}

fn games_widget() -> impl Widget<ListGames> {
    Either::new(
        |games: &ListGames, _| games.games.is_empty(),
        Label::new("No games found.")
            .with_text_color(theme::PLACEHOLDER_COLOR)
            .padding(theme::grid(2.0))
            .center(),
        DragReorder::new(
            List::new(game_widget),
            theme::grid(8.0),
            |game: &Arc<GameSummary>| game.link(),
            GO_TO_GAME,
            REORDER_GAME,
        )
        .lens(ListGames::games),
    )
}

fn game_widget() -> impl Widget<Arc<GameSummary>> {
    let game_cover = cover_widget(theme::grid(6.0));

    let game_title = Label::raw()
        .with_font(theme::UI_FONT_MEDIUM)
        .with_line_break_mode(LineBreaking::Clip)
        .lens(GameSummary::title.in_arc());

    let game_description = Label::raw()
        .with_text_size(theme::TEXT_SIZE_SMALL)
        .with_text_color(theme::PLACEHOLDER_COLOR)
        .with_line_break_mode(LineBreaking::Clip)
        .lens(GameSummary::short_description.in_arc());

    let game_info = Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(game_title)
        .with_spacer(1.0)
        .with_child(game_description);

    Flex::row()
        .with_child(game_cover)
        .with_default_spacer()
        .with_flex_child(game_info, 1.0)
        .padding(theme::grid(1.0))
        .fix_height(theme::grid(8.0))
        .highlight()
        .rounded(theme::CORNER_RADIUS)
}

fn cover_widget(size: f64) -> impl Widget<Arc<GameSummary>> {
    WebImage::new(cover_placeholder_widget(), |game: &Arc<GameSummary>, _| {
        (!game.img_url.is_empty()).then(|| game.img_url.clone())
    })
    .fix_size(size, size)
}
