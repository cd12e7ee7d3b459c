//! Generator configuration persistence.
//!
//! The default configuration file lives in the platform-specific config
//! directory:
//! - Linux: ~/.config/actionorm/generator.yml
//! - macOS: ~/Library/Application Support/actionorm/generator.yml
//! - Windows: %APPDATA%/actionorm/generator.yml

use std::path::{Path, PathBuf};

use tokio::fs;

use super::GeneratorConfig;
use crate::serialization::{SerializationError, from_json, from_yaml};

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error during file operations.
    #[error("IO error reading {path}: {source}")]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// The file contents could not be parsed.
    #[error("invalid configuration in {path}: {source}")]
    Parse {
        /// The file being parsed.
        path: PathBuf,
        /// The underlying error.
        source: SerializationError,
    },

    /// The file extension is neither YAML nor JSON.
    #[error("unsupported configuration format: {0}")]
    UnsupportedFormat(PathBuf),
}

/// Configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.yml` / `.yaml`
    Yaml,
    /// `.json`
    Json,
}

impl ConfigFormat {
    /// Detects the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yml" | "yaml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Loads generator configuration from YAML or JSON files.
#[derive(Debug, Clone, Default)]
pub struct ConfigRepository;

impl ConfigRepository {
    /// Creates a new configuration repository.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the path of the default configuration file, if a config
    /// directory is available on this platform.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("actionorm").join("generator.yml"))
    }

    /// Loads configuration from `path`.
    ///
    /// Returns the default configuration if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is unsupported, the file cannot be
    /// read, or its contents are invalid.
    pub async fn load(&self, path: &Path) -> Result<GeneratorConfig, ConfigError> {
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;

        match fs::try_exists(path).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!(path = %path.display(), "no configuration file, using defaults");
                return Ok(GeneratorConfig::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }

        let content = fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let config = match format {
            ConfigFormat::Yaml => from_yaml(&content),
            ConfigFormat::Json => from_json(&content),
        }
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Loads configuration from the default location.
    ///
    /// Returns the default configuration if there is no config directory
    /// or no file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load_default(&self) -> Result<GeneratorConfig, ConfigError> {
        match Self::default_path() {
            Some(path) => self.load(&path).await,
            None => Ok(GeneratorConfig::default()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("generator.yml")),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("generator.YAML")),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("generator.json")),
            Some(ConfigFormat::Json)
        );
        assert_eq!(ConfigFormat::from_path(Path::new("generator.toml")), None);
        assert_eq!(ConfigFormat::from_path(Path::new("generator")), None);
    }

    #[test]
    fn test_default_path() {
        if let Some(path) = ConfigRepository::default_path() {
            assert!(path.ends_with("actionorm/generator.yml"));
        }
    }

    #[tokio::test]
    async fn test_load_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("generator.yml");
        std::fs::write(&path, "orm: data_mapper\nmodel: Post\nreceiver: \"@entry\"\n").unwrap();

        let config = ConfigRepository::new().load(&path).await.unwrap();
        assert_eq!(config.orm, "data_mapper");
        assert_eq!(config.model.as_deref(), Some("Post"));
        assert_eq!(config.receiver.as_deref(), Some("@entry"));
        assert!(config.id_params.is_none());
    }

    #[tokio::test]
    async fn test_load_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("generator.json");
        std::fs::write(&path, r#"{"id_params": "params[:slug]"}"#).unwrap();

        let config = ConfigRepository::new().load(&path).await.unwrap();
        assert_eq!(config.orm, "active_record");
        assert_eq!(config.id_params.as_deref(), Some("params[:slug]"));
    }

    #[tokio::test]
    async fn test_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.yml");

        let config = ConfigRepository::new().load(&path).await.unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_unreadable_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("generator.yml");
        std::os::unix::fs::symlink(&path, &path).unwrap();

        let result = ConfigRepository::new().load(&path).await;
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[tokio::test]
    async fn test_path_through_file_is_an_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("not_a_dir");
        std::fs::write(&file, "").unwrap();

        let result = ConfigRepository::new()
            .load(&file.join("generator.yml"))
            .await;
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[tokio::test]
    async fn test_unsupported_format() {
        let result = ConfigRepository::new()
            .load(Path::new("generator.toml"))
            .await;
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[tokio::test]
    async fn test_invalid_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("generator.yml");
        std::fs::write(&path, "orm: [data_mapper").unwrap();

        let result = ConfigRepository::new().load(&path).await;
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("generator.yml"));
    }
}
