pub mod config;
pub mod fetch;
pub mod game;
pub mod list;
pub mod screen;

use std::mem;

use druid::{im::Vector, Data, Lens};

pub use crate::data::{
    config::{Config, Theme},
    fetch::Fetch,
    game::{Game, GameLink, GameSummary, OpenGame},
    list::{GameList, ListGames, ListLink, OpenList, ReorderMove},
    screen::{Screen, ScreenKind},
};

#[derive(Clone, Data, Lens)]
pub struct AppState {
    pub screen: Screen,
    pub history: Vector<Screen>,
    pub config: Config,
    pub catalog: Catalog,
    pub open_list: OpenList,
    pub open_game: OpenGame,
}

impl AppState {
    pub fn default_with_config(config: Config) -> AppState {
        AppState {
            screen: Screen::Home,
            history: Vector::new(),
            config,
            catalog: Catalog::default(),
            open_list: OpenList::default(),
            open_game: OpenGame::default(),
        }
    }
}

impl AppState {
    pub fn open(&mut self, screen: &Screen) {
        if &self.screen != screen {
            let departed = mem::replace(&mut self.screen, screen.to_owned());
            self.drop_screen_data(&departed);
            self.history.push_back(departed);
            self.config.last_screen.replace(screen.to_owned());
        }
    }

    pub fn go_back(&mut self) {
        if let Some(screen) = self.history.pop_back() {
            let departed = mem::replace(&mut self.screen, screen);
            self.drop_screen_data(&departed);
            self.config.last_screen.replace(self.screen.to_owned());
        }
    }

    pub fn reload(&mut self) {
        let screen = self.screen.clone();
        self.drop_screen_data(&screen);
    }

    /// Drops the fetched snapshot of a screen that is no longer displayed.
    /// Coming back to it starts a fresh fetch.
    fn drop_screen_data(&mut self, screen: &Screen) {
        match screen {
            Screen::Home => self.catalog.lists.clear(),
            Screen::List(_) => self.open_list.games.clear(),
            Screen::Game(_) => self.open_game.record.clear(),
        }
    }
}

#[derive(Clone, Data, Lens, Default)]
pub struct Catalog {
    pub lists: Fetch<Vector<GameList>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::default_with_config(Config::default())
    }

    fn list_link() -> ListLink {
        ListLink {
            id: 1,
            name: "Favorites".into(),
        }
    }

    #[test]
    fn open_discards_the_departed_screen() {
        let mut state = state();
        state.catalog.lists = Fetch::Ready(Vector::new());

        state.open(&Screen::List(list_link()));
        assert_eq!(state.screen, Screen::List(list_link()));
        assert!(state.catalog.lists.is_empty());
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.config.last_screen, Some(state.screen.clone()));
    }

    #[test]
    fn open_on_the_displayed_screen_is_a_no_op() {
        let mut state = state();
        state.catalog.lists = Fetch::Ready(Vector::new());

        state.open(&Screen::Home);
        assert!(matches!(state.catalog.lists, Fetch::Ready(_)));
        assert!(state.history.is_empty());
    }

    #[test]
    fn go_back_pops_history_and_discards() {
        let mut state = state();
        state.open(&Screen::List(list_link()));
        state.open_list.games.begin(list_link());

        state.go_back();
        assert_eq!(state.screen, Screen::Home);
        assert!(state.open_list.games.is_empty());
        assert!(state.history.is_empty());

        state.go_back();
        assert_eq!(state.screen, Screen::Home);
    }

    #[test]
    fn reload_discards_the_current_screen() {
        let mut state = state();
        state.catalog.lists = Fetch::Ready(Vector::new());

        state.reload();
        assert!(state.catalog.lists.is_empty());
    }
}
