use druid::{Color, Env, FontDescriptor, FontFamily, FontWeight, Key, RoundedRectRadii};

use crate::data::{AppState, Theme};

pub use druid::theme::*;

pub const GRID: f64 = 8.0;

pub const UI_FONT_MEDIUM: Key<FontDescriptor> = Key::new("app.ui-font-medium");
pub const TEXT_SIZE_SMALL: Key<f64> = Key::new("app.text-size-small");

pub const CORNER_RADIUS: Key<RoundedRectRadii> = Key::new("app.corner-radius");

pub const ICON_COLOR: Key<Color> = Key::new("app.icon-color");
pub const HIGHLIGHT_HOT_COLOR: Key<Color> = Key::new("app.highlight-hot-color");
pub const HIGHLIGHT_COLD_COLOR: Key<Color> = Key::new("app.highlight-cold-color");
pub const GREY_400: Key<Color> = Key::new("app.grey-400");
pub const GREY_500: Key<Color> = Key::new("app.grey-500");

pub fn grid(m: f64) -> f64 {
    GRID * m
}

pub fn setup(env: &mut Env, state: &AppState) {
    match state.config.theme {
        Theme::Light => setup_light_theme(env),
        Theme::Dark => setup_dark_theme(env),
    };
    setup_common(env);
}

fn setup_light_theme(env: &mut Env) {
    env.set(WINDOW_BACKGROUND_COLOR, Color::WHITE);
    env.set(TEXT_COLOR, Color::grey8(0x1E));
    env.set(PLACEHOLDER_COLOR, Color::grey8(0x76));
    env.set(PRIMARY_LIGHT, Color::rgb8(0x2F, 0x80, 0xED));
    env.set(PRIMARY_DARK, Color::rgb8(0x1B, 0x59, 0xAD));
    env.set(BACKGROUND_LIGHT, Color::WHITE);
    env.set(BACKGROUND_DARK, Color::grey8(0xF0));
    env.set(SCROLLBAR_COLOR, Color::grey8(0x60));
    env.set(SCROLLBAR_BORDER_COLOR, Color::grey8(0x60));
    env.set(ICON_COLOR, Color::grey8(0x60));
    env.set(HIGHLIGHT_HOT_COLOR, Color::rgba8(0x00, 0x00, 0x00, 0x10));
    env.set(HIGHLIGHT_COLD_COLOR, Color::rgba8(0x00, 0x00, 0x00, 0x00));
    env.set(GREY_400, Color::grey8(0x93));
    env.set(GREY_500, Color::grey8(0xB2));
}

fn setup_dark_theme(env: &mut Env) {
    env.set(WINDOW_BACKGROUND_COLOR, Color::grey8(0x1A));
    env.set(TEXT_COLOR, Color::grey8(0xF2));
    env.set(PLACEHOLDER_COLOR, Color::grey8(0x8C));
    env.set(PRIMARY_LIGHT, Color::rgb8(0x5C, 0x98, 0xE6));
    env.set(PRIMARY_DARK, Color::rgb8(0x8A, 0xB4, 0xF0));
    env.set(BACKGROUND_LIGHT, Color::grey8(0x26));
    env.set(BACKGROUND_DARK, Color::grey8(0x22));
    env.set(SCROLLBAR_COLOR, Color::grey8(0x8C));
    env.set(SCROLLBAR_BORDER_COLOR, Color::grey8(0x8C));
    env.set(ICON_COLOR, Color::grey8(0xB0));
    env.set(HIGHLIGHT_HOT_COLOR, Color::rgba8(0xFF, 0xFF, 0xFF, 0x1A));
    env.set(HIGHLIGHT_COLD_COLOR, Color::rgba8(0xFF, 0xFF, 0xFF, 0x00));
    env.set(GREY_400, Color::grey8(0x82));
    env.set(GREY_500, Color::grey8(0x57));
}

fn setup_common(env: &mut Env) {
    env.set(
        UI_FONT,
        FontDescriptor::new(FontFamily::SYSTEM_UI).with_size(14.0),
    );
    env.set(
        UI_FONT_MEDIUM,
        FontDescriptor::new(FontFamily::SYSTEM_UI)
            .with_weight(FontWeight::MEDIUM)
            .with_size(14.0),
    );
    env.set(TEXT_SIZE_SMALL, 12.0);
    env.set(CORNER_RADIUS, RoundedRectRadii::from(4.0));
    env.set(BASIC_WIDGET_HEIGHT, grid(3.0));
    env.set(WIDGET_PADDING_VERTICAL, grid(1.0));
    env.set(WIDGET_PADDING_HORIZONTAL, grid(1.0));
}
