#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![allow(clippy::new_without_default, clippy::type_complexity)]

mod cmd;
mod controller;
mod data;
mod delegate;
mod error;
mod ui;
mod webapi;
mod widget;

use druid::AppLauncher;
use env_logger::{Builder, Env};

use crate::{
    data::{AppState, Config},
    delegate::Delegate,
    webapi::WebApi,
};

const ENV_LOG: &str = "LUDEX_LOG";
const ENV_LOG_STYLE: &str = "LUDEX_LOG_STYLE";

fn main() {
    init_logging();

    let config = Config::load().unwrap_or_default();
    WebApi::new(&config.api_url, Config::proxy().as_deref()).install_global();

    let state = AppState::default_with_config(config);
    AppLauncher::with_window(ui::main_window())
        .configure_env(ui::theme::setup)
        .delegate(Delegate::new())
        .launch(state)
        .expect("Application launch");
}

/// Logs at info level unless the env variables say otherwise.
fn init_logging() {
    let env = Env::new()
        .filter_or(ENV_LOG, "info")
        .write_style(ENV_LOG_STYLE);
    Builder::from_env(env).init();
}
