use log::{LevelFilter, debug};
use serde::{Deserialize, Serialize};
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV: &str = "XCLIP_WRAPPER_CONFIG";

const CONFIG_DIR: &str = "xclip-wrapper";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    /// Tried in order; the first one found wins.
    #[serde(default = "default_candidates")]
    pub candidates: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default values
fn default_candidates() -> Vec<String> {
    vec!["win32yank.exe".to_string(), "win32yoink.exe".to_string()]
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            candidates: default_candidates(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from `XCLIP_WRAPPER_CONFIG` or the user config directory
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = env::var_os(CONFIG_ENV).map(PathBuf::from);
        let standard = standard_config_path(env::var_os("XDG_CONFIG_HOME"), env::var_os("HOME"));
        Self::load_from(explicit.as_deref(), standard.as_deref())
    }

    /// An explicit path must exist; a missing standard path falls back to defaults.
    pub fn load_from(explicit: Option<&Path>, standard: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            debug!("Loading config from {}: {}", CONFIG_ENV, path.display());
            return Self::load_from_file(path);
        }

        match standard {
            Some(path) if path.exists() => {
                debug!("Loading config from: {}", path.display());
                Self::load_from_file(path)
            }
            _ => Ok(Config::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let name = path.display().to_string();
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::FileRead(name.clone(), e.to_string()))?;

        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(name.clone(), e.to_string()))?;
        config.level_filter().map_err(|value| {
            ConfigError::Parse(name, format!("unknown log level '{}'", value))
        })?;
        Ok(config)
    }

    /// The configured log level, or the rejected text.
    pub fn level_filter(&self) -> Result<LevelFilter, String> {
        self.logging
            .level
            .parse::<LevelFilter>()
            .map_err(|_| self.logging.level.clone())
    }
}

/// `$XDG_CONFIG_HOME/xclip-wrapper/config.toml`, else `$HOME/.config/...`
pub fn standard_config_path(xdg_config_home: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    let base = match xdg_config_home.filter(|dir| !dir.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from(home.filter(|dir| !dir.is_empty())?).join(".config"),
    };
    Some(base.join(CONFIG_DIR).join(CONFIG_FILE))
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{0}': {1}")]
    FileRead(String, String),

    #[error("Failed to parse config file '{0}': {1}")]
    Parse(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{NamedTempFile, tempdir};

    #[test]
    fn test_config_default_values() {
        let config = Config::default();

        assert_eq!(
            config.backend.candidates,
            vec!["win32yank.exe".to_string(), "win32yoink.exe".to_string()]
        );
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.level_filter(), Ok(LevelFilter::Warn));
    }

    #[test]
    fn test_config_serialization() {
        let toml_str = toml::to_string_pretty(&Config::default()).unwrap();

        assert!(toml_str.contains("[backend]"));
        assert!(toml_str.contains("[logging]"));
        assert!(toml_str.contains("win32yoink.exe"));
        assert!(toml_str.contains("level = \"warn\""));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_content = r#"
[backend]
candidates = ["/mnt/c/tools/win32yank.exe"]

[logging]
level = "debug"
        "#;

        let config: Config = toml::from_str(toml_content).unwrap();

        assert_eq!(config.backend.candidates, vec!["/mnt/c/tools/win32yank.exe"]);
        assert_eq!(config.level_filter(), Ok(LevelFilter::Debug));
    }

    #[test]
    fn test_config_partial_deserialization() {
        let toml_content = r#"
[logging]
level = "info"
        "#;

        let config: Config = toml::from_str(toml_content).unwrap();

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.backend, BackendConfig::default());
    }

    #[test]
    fn test_config_load_from_file() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "[backend]\ncandidates = [\"yank\"]\n").unwrap();

        let config = Config::load_from_file(temp_file.path()).unwrap();
        assert_eq!(config.backend.candidates, vec!["yank"]);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_config_load_from_nonexistent_file() {
        let result = Config::load_from_file(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result.unwrap_err(), ConfigError::FileRead(_, _)));
    }

    #[test]
    fn test_config_load_invalid_toml() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "invalid toml content [[[").unwrap();

        let result = Config::load_from_file(temp_file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Parse(_, _)));
    }

    #[test]
    fn test_config_rejects_unknown_log_level() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "[logging]\nlevel = \"loud\"\n").unwrap();

        let err = Config::load_from_file(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("unknown log level 'loud'"));
    }

    #[test]
    fn test_load_from_missing_standard_path_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("xclip-wrapper/config.toml");

        let config = Config::load_from(None, Some(&missing)).unwrap();
        assert_eq!(config, Config::default());

        let config = Config::load_from(None, None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_missing_explicit_path_fails() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("nope.toml");

        let result = Config::load_from(Some(&missing), None);
        assert!(matches!(result.unwrap_err(), ConfigError::FileRead(_, _)));
    }

    #[test]
    fn test_explicit_path_wins_over_standard() {
        let temp_dir = tempdir().unwrap();
        let explicit = temp_dir.path().join("explicit.toml");
        let standard = temp_dir.path().join("standard.toml");
        fs::write(&explicit, "[logging]\nlevel = \"error\"\n").unwrap();
        fs::write(&standard, "[logging]\nlevel = \"trace\"\n").unwrap();

        let config = Config::load_from(Some(&explicit), Some(&standard)).unwrap();
        assert_eq!(config.logging.level, "error");

        let config = Config::load_from(None, Some(&standard)).unwrap();
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    fn test_standard_config_path() {
        assert_eq!(
            standard_config_path(Some("/xdg".into()), Some("/home/me".into())),
            Some(PathBuf::from("/xdg/xclip-wrapper/config.toml"))
        );
        assert_eq!(
            standard_config_path(None, Some("/home/me".into())),
            Some(PathBuf::from("/home/me/.config/xclip-wrapper/config.toml"))
        );
        assert_eq!(
            standard_config_path(Some("".into()), Some("/home/me".into())),
            Some(PathBuf::from("/home/me/.config/xclip-wrapper/config.toml"))
        );
        assert_eq!(standard_config_path(None, None), None);
    }

    #[test]
    fn test_config_error_display() {
        let errors = vec![
            ConfigError::FileRead("test.toml".to_string(), "Not found".to_string()),
            ConfigError::Parse("test.toml".to_string(), "Invalid syntax".to_string()),
        ];

        for error in errors {
            let error_string = format!("{}", error);
            assert!(error_string.contains("test.toml"));
        }
    }
}
