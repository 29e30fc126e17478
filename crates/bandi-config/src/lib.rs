//! Configuration persistence.
//!
//! One small TOML file under the platform config directory holds the
//! selected theme name and the particle count. Loading never fails: a
//! missing or unparseable file yields the defaults, and an unrecognized
//! theme name is kept as-is and rejected later at apply time. Saving is
//! fire-and-forget from the caller's side; the in-memory state stays
//! authoritative when the write is refused.

use std::fs;
use std::io;
use std::path::PathBuf;

use bandi_core::{DEFAULT_PARTICLE_COUNT, DEFAULT_THEME};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Persisted settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Saved theme name.
    pub theme: String,
    /// Number of particles in the field.
    pub particles: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.as_str().to_string(),
            particles: DEFAULT_PARTICLE_COUNT,
        }
    }
}

/// Location of the config file under the platform config directory.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bandi").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Loads and saves [`Config`] at a fixed path.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: Option<PathBuf>,
}

impl ConfigStore {
    /// Store at the platform config path.
    pub fn new() -> Self {
        Self {
            path: config_path(),
        }
    }

    /// Store at an explicit path.
    pub fn at(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// Store that never reads or writes anything.
    pub fn disabled() -> Self {
        Self { path: None }
    }

    /// Read the config, silently falling back to defaults when the file
    /// is missing or invalid.
    pub fn load(&self) -> Config {
        self.path
            .as_deref()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Write the config. Callers that only care about the in-memory
    /// state may discard the result.
    pub fn save(&self, config: &Config) -> io::Result<()> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string(config).map_err(io::Error::other)?;
        fs::write(path, content)
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_store(name: &str) -> ConfigStore {
        let path = env::temp_dir().join(format!("bandi-{}-{}.toml", name, std::process::id()));
        let _ = fs::remove_file(&path);
        ConfigStore::at(path)
    }

    fn cleanup(store: &ConfigStore) {
        if let Some(path) = &store.path {
            let _ = fs::remove_file(path);
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.theme, "gold");
        assert_eq!(config.particles, 80);
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let store = temp_store("missing");
        assert_eq!(store.load(), Config::default());
    }

    #[test]
    fn test_load_invalid_file_yields_defaults() {
        let store = temp_store("invalid");
        fs::write(store.path.as_ref().unwrap(), "theme = [not toml").unwrap();
        assert_eq!(store.load(), Config::default());
        cleanup(&store);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let store = temp_store("partial");
        fs::write(store.path.as_ref().unwrap(), "theme = \"blue\"\n").unwrap();
        let config = store.load();
        assert_eq!(config.theme, "blue");
        assert_eq!(config.particles, 80);
        cleanup(&store);
    }

    #[test]
    fn test_save_then_load() {
        let store = temp_store("roundtrip");
        let config = Config {
            theme: "teal".to_string(),
            particles: 40,
        };
        store.save(&config).unwrap();
        assert_eq!(store.load(), config);
        cleanup(&store);
    }

    #[test]
    fn test_unrecognized_theme_is_passed_through() {
        // Validity is the applier's concern, not the store's
        let store = temp_store("unknown-theme");
        fs::write(store.path.as_ref().unwrap(), "theme = \"mauve\"\n").unwrap();
        assert_eq!(store.load().theme, "mauve");
        cleanup(&store);
    }

    #[test]
    fn test_disabled_store() {
        let store = ConfigStore::disabled();
        assert_eq!(store.load(), Config::default());
        store.save(&Config::default()).unwrap();
    }
}
