use druid::Selector;

use crate::data::Screen;

pub const OPEN: Selector<Screen> = Selector::new("app.screen.open");
pub const GO_BACK: Selector<usize> = Selector::new("app.screen.go-back");
pub const RELOAD: Selector = Selector::new("app.screen.reload");
