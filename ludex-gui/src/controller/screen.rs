use druid::{widget::Controller, Env, Event, EventCtx, LifeCycle, LifeCycleCtx, Widget};

use crate::{
    cmd,
    data::{AppState, Screen},
};

/// Switches between screens on the routing commands, kicks off the fetch of
/// the entering screen, and persists the place the user ends up at.
pub struct ScreenController;

impl ScreenController {
    /// Applies a routing event to the state. Returns false for events that
    /// do not route anywhere.
    fn handle_screen_event(&self, event: &Event, data: &mut AppState) -> bool {
        match event {
            Event::Command(cmd) if cmd.is(cmd::OPEN) => {
                data.open(cmd.get_unchecked(cmd::OPEN));
            }
            Event::Command(cmd) if cmd.is(cmd::GO_BACK) => {
                let count = cmd.get_unchecked(cmd::GO_BACK);
                for _ in 0..*count {
                    data.go_back();
                }
            }
            Event::Command(cmd) if cmd.is(cmd::RELOAD) => {
                data.reload();
            }
            Event::MouseDown(mouse) if mouse.button.is_x1() => {
                data.go_back();
            }
            _ => return false,
        }
        true
    }

    /// Starts loading the data of the displayed screen unless it is already
    /// loading or loaded. Only a freshly entered screen has an empty fetch.
    fn fetch_screen_data(&self, data: &mut AppState) {
        match &data.screen {
            Screen::Home => {
                if data.catalog.lists.is_empty() {
                    data.catalog.lists.begin_default();
                }
            }
            Screen::List(link) => {
                if data.open_list.games.is_empty() {
                    data.open_list.games.begin(link.to_owned());
                }
            }
            Screen::Game(link) => {
                if data.open_game.record.is_empty() {
                    data.open_game.record.begin(link.to_owned());
                }
            }
        }
    }
}

impl<W> Controller<AppState, W> for ScreenController
where
    W: Widget<AppState>,
{
    fn event(
        &mut self,
        child: &mut W,
        ctx: &mut EventCtx,
        event: &Event,
        data: &mut AppState,
        env: &Env,
    ) {
        if self.handle_screen_event(event, data) {
            ctx.set_handled();
            self.fetch_screen_data(data);
            data.config.save();
        } else {
            child.event(ctx, event, data, env);
        }
    }

    fn lifecycle(
        &mut self,
        child: &mut W,
        ctx: &mut LifeCycleCtx,
        event: &LifeCycle,
        data: &AppState,
        env: &Env,
    ) {
        if let LifeCycle::WidgetAdded = event {
            let screen = data.config.last_screen.clone().unwrap_or_default();
            ctx.submit_command(cmd::OPEN.with(screen));
        }
        child.lifecycle(ctx, event, data, env);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Config, Fetch, ListLink};
    use druid::im::Vector;

    #[test]
    fn fetching_starts_only_for_fresh_screens() {
        let controller = ScreenController;
        let mut data = AppState::default_with_config(Config::default());

        controller.fetch_screen_data(&mut data);
        assert!(matches!(data.catalog.lists, Fetch::Pending(())));

        data.catalog.lists = Fetch::Ready(Vector::new());
        controller.fetch_screen_data(&mut data);
        assert!(matches!(data.catalog.lists, Fetch::Ready(_)));
    }

    #[test]
    fn fetches_are_keyed_by_the_screen_link() {
        let controller = ScreenController;
        let mut data = AppState::default_with_config(Config::default());
        let link = ListLink {
            id: 4,
            name: "Backlog".into(),
        };

        data.open(&Screen::List(link.clone()));
        controller.fetch_screen_data(&mut data);
        assert!(data.open_list.games.is_pending(&link));
    }
}
