//! Configuration management module.
//!
//! This module handles loading the configuration file, which selects the
//! theme, an optional replacement content file and whether the log panel
//! starts open. A default file is written on first run.

mod error;

pub use error::ConfigError;

use crate::error::AppResult;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/portfolio-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub theme_name: String,
    pub content_file: Option<PathBuf>,
    pub show_log: bool,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_file: Option<PathBuf>,
    #[serde(default)]
    pub show_log: bool,
}

fn default_theme_name() -> String {
    "ink".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance with default settings.
    ///
    pub fn new() -> Config {
        Config {
            theme_name: default_theme_name(),
            content_file: None,
            show_log: false,
            file_path: None,
        }
    }

    /// Load the configuration from the default directory or the custom one if
    /// provided. A missing file is created with the current settings. A
    /// relative `content_file` is resolved against the configuration
    /// directory and must exist.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> AppResult<()> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(FILE_NAME);
        self.file_path = Some(file_path.clone());

        if !file_path.exists() {
            return self.save();
        }

        let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
            path: file_path.clone(),
            source: e,
        })?;
        let data: FileSpec =
            serde_yaml::from_str(&contents).map_err(|e| ConfigError::DeserializationFailed {
                path: file_path.clone(),
                message: e.to_string(),
            })?;
        self.theme_name = data.theme_name;
        self.show_log = data.show_log;
        self.content_file = match data.content_file {
            Some(path) => {
                let path = dir_path.join(path);
                if !path.is_file() {
                    return Err(ConfigError::ContentFileMissing(path).into());
                }
                Some(path)
            }
            None => None,
        };

        Ok(())
    }

    /// Serialize the current configuration and write it to disk.
    ///
    pub fn save(&self) -> AppResult<()> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::NotLoaded)?;
        let data = FileSpec {
            theme_name: self.theme_name.clone(),
            content_file: self.content_file.clone(),
            show_log: self.show_log,
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        let save_failed = |e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        };
        let mut file = fs::File::create(file_path).map_err(save_failed)?;
        write!(file, "{}", content).map_err(save_failed)?;
        file.flush().map_err(save_failed)?;
        Ok(())
    }

    /// Path of the file `load` read or created.
    ///
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> AppResult<PathBuf> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "portfolio-tui-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.theme_name, "ink");
        assert!(config.content_file.is_none());
        assert!(!config.show_log);
        assert!(config.file_path().is_none());
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = scratch_dir("create");
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();

        let file_path = dir.join(FILE_NAME);
        assert!(file_path.exists());
        assert_eq!(config.file_path(), Some(file_path.as_path()));
        let written: FileSpec =
            serde_yaml::from_str(&fs::read_to_string(&file_path).unwrap()).unwrap();
        assert_eq!(written.theme_name, "ink");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_reads_existing_file() {
        let dir = scratch_dir("read");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("me.yml"), "identity: {}\n").unwrap();
        fs::write(
            dir.join(FILE_NAME),
            "theme_name: paper\ncontent_file: me.yml\nshow_log: true\n",
        )
        .unwrap();

        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(config.theme_name, "paper");
        assert_eq!(config.content_file, Some(dir.join("me.yml")));
        assert!(config.show_log);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = scratch_dir("partial");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "show_log: true\n").unwrap();

        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(config.theme_name, "ink");
        assert!(config.show_log);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = scratch_dir("malformed");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "show_log: [not a bool\n").unwrap();

        let mut config = Config::new();
        let result = config.load(dir.to_str());
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::DeserializationFailed { .. }))
        ));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_save_without_path() {
        let config = Config::new();
        assert!(matches!(
            config.save(),
            Err(AppError::Config(ConfigError::NotLoaded))
        ));
    }

    #[test]
    fn test_absolute_content_file_is_kept() {
        let dir = scratch_dir("absolute");
        fs::create_dir_all(&dir).unwrap();
        let content = dir.join("elsewhere.yml");
        fs::write(&content, "identity: {}\n").unwrap();
        fs::write(
            dir.join(FILE_NAME),
            format!("content_file: {}\n", content.display()),
        )
        .unwrap();

        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(config.content_file, Some(content));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_content_file_is_error() {
        let dir = scratch_dir("missing-content");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "content_file: gone.yml\n").unwrap();

        let mut config = Config::new();
        match config.load(dir.to_str()) {
            Err(AppError::Config(ConfigError::ContentFileMissing(path))) => {
                assert_eq!(path, dir.join("gone.yml"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unreadable_file_is_load_error() {
        // A directory where the file should be exists but cannot be read.
        let dir = scratch_dir("unreadable");
        fs::create_dir_all(dir.join(FILE_NAME)).unwrap();

        let mut config = Config::new();
        match config.load(dir.to_str()) {
            Err(AppError::Config(ConfigError::LoadFailed { path, .. })) => {
                assert_eq!(path, dir.join(FILE_NAME));
            }
            other => panic!("unexpected result: {:?}", other),
        }
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_directory_under_a_file_is_create_error() {
        let dir = scratch_dir("blocked");
        fs::create_dir_all(&dir).unwrap();
        let blocker = dir.join("not-a-dir");
        fs::write(&blocker, "").unwrap();
        let target = blocker.join("portfolio-tui");

        let mut config = Config::new();
        match config.load(target.to_str()) {
            Err(AppError::Config(ConfigError::CreateDirectoryFailed { path, .. })) => {
                assert_eq!(path, target);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        let _ = fs::remove_dir_all(&dir);
    }
}
