use std::{
    env::{self, VarError},
    fs::{self, File},
    io::{BufReader, BufWriter},
    path::PathBuf,
};

use druid::{Data, Lens};
use platform_dirs::AppDirs;
use serde::{Deserialize, Serialize};

use crate::data::screen::Screen;

const APP_NAME: &str = "Ludex";
const CONFIG_FILENAME: &str = "config.json";
const PROXY_ENV_VAR: &str = "HTTPS_PROXY";
const USE_XDG_ON_MACOS: bool = false;

#[derive(Clone, Debug, Data, Lens, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub theme: Theme,
    pub last_screen: Option<Screen>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_string(),
            theme: Theme::default(),
            last_screen: None,
        }
    }
}

impl Config {
    fn app_dirs() -> Option<AppDirs> {
        AppDirs::new(Some(APP_NAME), USE_XDG_ON_MACOS)
    }

    fn config_dir() -> Option<PathBuf> {
        Self::app_dirs().map(|dirs| dirs.config_dir)
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(CONFIG_FILENAME))
    }

    pub fn load() -> Option<Config> {
        let path = Self::config_path().expect("Failed to get config path");
        if path.exists() {
            log::info!("loading config: {:?}", &path);
            let file = File::open(&path).expect("Failed to open config");
            let reader = BufReader::new(file);
            Some(serde_json::from_reader(reader).expect("Failed to read config"))
        } else {
            None
        }
    }

    pub fn save(&self) {
        let path = Self::config_path().expect("Failed to get config path");
        let dir = path.parent().expect("Failed to get config dir");
        fs::create_dir_all(dir).expect("Failed to create config dir");
        let file = File::create(&path).expect("Failed to create config");
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self).expect("Failed to write config");
        log::info!("saved config: {:?}", &path);
    }

    pub fn proxy() -> Option<String> {
        env::var(PROXY_ENV_VAR)
            .map(Some)
            .unwrap_or_else(|err| match err {
                VarError::NotPresent => None,
                VarError::NotUnicode(_) => {
                    log::error!("proxy url is not a valid unicode");
                    None
                }
            })
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Data, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Light
    }
}
