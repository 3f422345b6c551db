use druid::Data;
use serde::{Deserialize, Serialize};

use crate::data::{game::GameLink, list::ListLink};

#[derive(Clone, Debug, Data, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Screen {
    Home,
    List(ListLink),
    Game(GameLink),
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Home => ScreenKind::Home,
            Screen::List(_) => ScreenKind::List,
            Screen::Game(_) => ScreenKind::Game,
        }
    }

    pub fn title(&self) -> String {
        match self {
            Screen::Home => "Game Lists".to_string(),
            Screen::List(link) => link.name.to_string(),
            Screen::Game(link) => link.title.to_string(),
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Home
    }
}

/// Discriminant of `Screen`, used to pick the widget tree to show.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Data)]
pub enum ScreenKind {
    Home,
    List,
    Game,
}
