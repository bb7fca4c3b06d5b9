use crate::error::Result;
use crate::format::OutputMode;
use crate::import::DEFAULT_MAX_DEPTH;
use crate::tree::TreeKeying;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
///
/// Every field is optional in the file; missing fields take their defaults.
/// Command-line flags override whatever is loaded here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Presentation used when no mode flag is given
    pub mode: OutputMode,
    /// How the tree matches records to their folder
    pub keying: TreeKeying,
    /// Nesting guard for parsing and rendering
    pub max_depth: usize,
    /// Continue with the next profile after a failure
    pub keep_going: bool,
    /// Home directories to scan instead of every user's home
    pub search_homes: Vec<PathBuf>,
    /// Colored profile headers
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: OutputMode::default(),
            keying: TreeKeying::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            keep_going: false,
            search_homes: Vec::new(),
            color: true,
        }
    }
}

impl Config {
    /// Default location (~/.config/meteor/config.yml)
    pub fn default_path() -> PathBuf {
        crate::utils::get_config_dir().join("config.yml")
    }

    /// Load configuration from a file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from the default location
    /// Falls back to default config if the file is missing or invalid
    pub fn load() -> Self {
        let config_path = Self::default_path();

        if !config_path.exists() {
            return Self::default();
        }
        match Self::load_from_path(&config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}; using defaults",
                    config_path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeteorError;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.mode, OutputMode::Tree);
        assert_eq!(config.keying, TreeKeying::ById);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert!(!config.keep_going);
        assert!(config.search_homes.is_empty());
        assert!(config.color);
    }

    #[test]
    fn test_load_full_config() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(
            temp_file.path(),
            "mode: json\n\
             keying: name\n\
             max_depth: 12\n\
             keep_going: true\n\
             search_homes:\n  - /home/alice\n\
             color: false\n",
        )
        .unwrap();

        let expected = Config {
            mode: OutputMode::Json,
            keying: TreeKeying::ByName,
            max_depth: 12,
            keep_going: true,
            search_homes: vec![PathBuf::from("/home/alice")],
            color: false,
        };

        let loaded = Config::load_from_path(temp_file.path()).unwrap();
        assert_eq!(loaded, expected);
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "invalid: yaml: content:").unwrap();

        let result = Config::load_from_path(temp_file.path());
        assert!(matches!(result, Err(MeteorError::Config(_))));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "mode: yaml\n").unwrap();

        assert!(Config::load_from_path(temp_file.path()).is_err());
    }

    #[test]
    fn test_load_partial_config() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "keying: name\nmax_depth: 5\n").unwrap();

        let config = Config::load_from_path(temp_file.path()).unwrap();
        assert_eq!(config.keying, TreeKeying::ByName);
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.mode, OutputMode::Tree);
        assert!(config.color);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let result = Config::load_from_path(&dir.path().join("absent.yml"));
        assert!(matches!(result, Err(MeteorError::Io(_))));
    }
}
