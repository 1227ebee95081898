use crate::core::session::MapSettings;
use crate::errors::{AppError, AppResult};
use crate::models::coords::Coords;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_zoom_level")]
    pub map_zoom_level: u8,
    #[serde(default = "default_center")]
    pub default_center: [f64; 2],
    #[serde(default = "default_newest_first")]
    pub newest_first: bool,
}

fn default_zoom_level() -> u8 {
    12
}
fn default_center() -> [f64; 2] {
    [35.7114346, 51.3529667]
}
fn default_newest_first() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            map_zoom_level: default_zoom_level(),
            default_center: default_center(),
            newest_first: default_newest_first(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rworkoutmap")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rworkoutmap")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworkoutmap.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rworkoutmap.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let mut cfg: Config = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("invalid configuration file: {}", e)))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Map settings for a session; a non-finite center falls back to the default.
    pub fn map_settings(&self) -> MapSettings {
        let [lat, lng] = self.default_center;
        let default_center = Coords::new(lat, lng).unwrap_or_else(|_| {
            let [lat, lng] = default_center();
            Coords { lat, lng }
        });

        MapSettings {
            zoom: self.map_zoom_level,
            default_center,
        }
    }

    /// Write the configuration file pointing at `database`
    /// (skipped in test mode). Returns the config file path when written.
    pub fn init_all(database: &str, is_test: bool) -> AppResult<Option<PathBuf>> {
        if is_test {
            return Ok(None);
        }

        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config {
            database: database.to_string(),
            ..Config::default()
        };
        let yaml = config.to_yaml()?;

        let path = Self::config_file();
        let mut file = fs::File::create(&path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        Ok(Some(path))
    }
}
