use crate::commands::birthday::DEFAULT_WINDOW_DAYS;
use crate::error::{AssistantError, Result};
use crate::store::fs::DEFAULT_DATA_FILE;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const HOME_ENV: &str = "DESKMATE_HOME";

/// Configuration for deskmate, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssistantConfig {
    /// Name of the state file inside the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Days ahead `birthdays` looks when no count is given
    #[serde(default = "default_birthday_window")]
    pub birthday_window: i64,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_birthday_window() -> i64 {
    DEFAULT_WINDOW_DAYS
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            birthday_window: default_birthday_window(),
        }
    }
}

impl AssistantConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AssistantError::Io)?;
        let config: AssistantConfig =
            serde_json::from_str(&content).map_err(AssistantError::Serialization)?;
        Ok(config)
    }
}

/// Picks the data directory: explicit flag, then `DESKMATE_HOME`, then the
/// platform data directory.
pub fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "deskmate", "deskmate")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| AssistantError::Store("Could not determine data dir".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AssistantConfig::default();
        assert_eq!(config.data_file, "assistant.json");
        assert_eq!(config.birthday_window, 7);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = AssistantConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, AssistantConfig::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"birthday_window": 30}"#,
        )
        .unwrap();

        let config = AssistantConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.birthday_window, 30);
        assert_eq!(config.data_file, "assistant.json");
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{").unwrap();
        assert!(AssistantConfig::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_flag_wins_over_everything() {
        let dir = PathBuf::from("/tmp/deskmate-flag");
        assert_eq!(resolve_data_dir(Some(dir.clone())).unwrap(), dir);
    }
}
