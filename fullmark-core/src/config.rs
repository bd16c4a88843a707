use std::{fs, fs::File, path::PathBuf};

use platform_dirs::AppDirs;
use serde::{Deserialize, Serialize};
use url::Url;

const APP_NAME: &str = "FullMark";
const CONFIG_FILENAME: &str = "config.json";

/// Published location of the platform's content document.
pub const DEFAULT_ENDPOINT: &str = "https://uploadi.vercel.app/data.json";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
        }
    }
}

impl Config {
    fn app_dirs() -> Option<AppDirs> {
        const USE_XDG_ON_MACOS: bool = false;

        AppDirs::new(Some(APP_NAME), USE_XDG_ON_MACOS)
    }

    pub fn config_dir() -> Option<PathBuf> {
        Self::app_dirs().map(|dirs| dirs.config_dir)
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(CONFIG_FILENAME))
    }

    pub fn load() -> Option<Config> {
        let path = Self::config_path().expect("Failed to get config path");
        if let Ok(file) = File::open(&path) {
            log::info!("loading config: {:?}", &path);
            Some(serde_json::from_reader(file).expect("Failed to read config"))
        } else {
            None
        }
    }

    pub fn save(&self) {
        let dir = Self::config_dir().expect("Failed to get config dir");
        let path = Self::config_path().expect("Failed to get config path");
        fs::create_dir_all(&dir).expect("Failed to create config dir");
        let file = File::create(path).expect("Failed to create config");
        serde_json::to_writer_pretty(file, self).expect("Failed to write config");
    }

    /// Endpoint as a checked URL. A broken value in the config file falls
    /// back to the default instead of taking the whole app down.
    pub fn endpoint_url(&self) -> Url {
        Url::parse(&self.endpoint).unwrap_or_else(|err| {
            log::error!("invalid content endpoint {:?}: {}", self.endpoint, err);
            Url::parse(DEFAULT_ENDPOINT).unwrap()
        })
    }
}
