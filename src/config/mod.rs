use dirs::home_dir;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::{
    errors::ConfigError, ledger::LoadPolicy, storage::DEFAULT_STORAGE_FILE,
    utils::persistence::write_atomic,
};

const DEFAULT_DIR_NAME: &str = ".expense_tracker";
const CONFIG_FILE: &str = "config.json";

/// Overrides the configuration directory.
pub const HOME_ENV: &str = "EXPENSE_TRACKER_HOME";
/// Overrides the ledger file regardless of the stored configuration.
pub const STORAGE_FILE_ENV: &str = "EXPENSE_TRACKER_FILE";

/// User preferences for the expense shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Ledger file location. Defaults to `expenses.json` in the working directory.
    pub storage_path: Option<PathBuf>,
    #[serde(default)]
    pub load_policy: LoadPolicy,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: None,
            load_policy: LoadPolicy::default(),
            ui_color_enabled: Self::default_ui_color_enabled(),
        }
    }
}

impl Config {
    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Ledger file to open, honoring `EXPENSE_TRACKER_FILE` first.
    pub fn resolve_storage_path(&self) -> PathBuf {
        self.resolve_storage_path_with(env::var_os(STORAGE_FILE_ENV).map(PathBuf::from))
    }

    pub fn resolve_storage_path_with(&self, env_override: Option<PathBuf>) -> PathBuf {
        env_override
            .filter(|path| !path.as_os_str().is_empty())
            .or_else(|| self.storage_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_FILE))
    }
}

/// Returns the configuration directory, defaulting to `~/.expense_tracker`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Loads and saves [`Config`] as JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            path: base.join(CONFIG_FILE),
        }
    }

    /// Reads the stored configuration, falling back to defaults when absent.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        write_atomic(&self.path, json.as_bytes())?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf());
        let config = manager.load().expect("load");
        assert_eq!(config, Config::default());
        assert!(!manager.path().exists());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let temp = TempDir::new().expect("temp dir");
        let manager = ConfigManager::with_base_dir(temp.path().join("nested"));
        let config = Config {
            storage_path: Some(PathBuf::from("/tmp/mine.json")),
            load_policy: LoadPolicy::SkipMalformed,
            ui_color_enabled: false,
        };
        manager.save(&config).expect("save");
        assert_eq!(manager.load().expect("load"), config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf());
        fs::write(manager.path(), r#"{"load_policy": "strict"}"#).expect("seed");
        let config = manager.load().expect("load");
        assert_eq!(config.load_policy, LoadPolicy::Strict);
        assert!(config.ui_color_enabled);
        assert!(config.storage_path.is_none());
    }

    #[test]
    fn invalid_file_is_reported() {
        let temp = TempDir::new().expect("temp dir");
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf());
        fs::write(manager.path(), "nope").expect("seed");
        assert!(matches!(manager.load(), Err(ConfigError::Serde(_))));
    }

    #[test]
    fn storage_path_precedence() {
        let mut config = Config::default();
        assert_eq!(
            config.resolve_storage_path_with(None),
            PathBuf::from("expenses.json")
        );
        config.storage_path = Some(PathBuf::from("stored.json"));
        assert_eq!(
            config.resolve_storage_path_with(None),
            PathBuf::from("stored.json")
        );
        assert_eq!(
            config.resolve_storage_path_with(Some(PathBuf::from("env.json"))),
            PathBuf::from("env.json")
        );
        assert_eq!(
            config.resolve_storage_path_with(Some(PathBuf::new())),
            PathBuf::from("stored.json")
        );
    }
}
