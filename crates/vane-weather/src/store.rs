//! Saved default city.
//!
//! A single TOML file under the platform config directory. Loads never fail
//! the UI: a missing or malformed file yields the built-in default.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

/// The city the Home screen shows on launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedCity {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for SavedCity {
    fn default() -> Self {
        Self {
            name: "London".to_owned(),
            latitude: 51.5072,
            longitude: -0.1276,
        }
    }
}

pub struct CityStore {
    path: PathBuf,
}

impl CityStore {
    /// Store at the platform config location, or `None` when the platform
    /// reports no config directory.
    pub fn new() -> Option<Self> {
        let path = dirs::config_dir()?.join("vane").join("city.toml");
        Some(Self { path })
    }

    /// Store at an explicit path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved city, falling back to the default on any problem.
    pub fn load(&self) -> SavedCity {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return SavedCity::default(),
            Err(err) => {
                warn!("could not read {}: {err}", self.path.display());
                return SavedCity::default();
            }
        };
        match toml::from_str(&text) {
            Ok(city) => city,
            Err(err) => {
                warn!("ignoring malformed {}: {err}", self.path.display());
                SavedCity::default()
            }
        }
    }

    pub fn save(&self, city: &SavedCity) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = toml::to_string_pretty(city).map_err(io::Error::other)?;
        fs::write(&self.path, text)
    }
}
