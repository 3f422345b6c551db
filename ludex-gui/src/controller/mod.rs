mod on_command;
mod on_command_async;
mod screen;

pub use on_command::OnCommand;
pub use on_command_async::OnCommandAsync;
pub use screen::ScreenController;
