use std::path::{Path, PathBuf};

#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_or_default};

/// Default directory for collection files, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "./db";

/// JSON file store configuration
///
/// # Example
///
/// ```ignore
/// use database::json::JsonStoreConfig;
///
/// // Manual construction
/// let config = JsonStoreConfig::new("/var/lib/products-api");
///
/// // From environment variables (requires `config` feature)
/// let config = JsonStoreConfig::from_env()?;
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonStoreConfig {
    /// Directory holding one `<collection>.json` file per collection
    pub data_dir: PathBuf,
}

impl JsonStoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// File path for `collection`.
    pub fn collection_path(&self, collection: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", collection))
    }
}

impl Default for JsonStoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

/// Load JsonStoreConfig from environment variables
///
/// Environment variables:
/// - `DATA_DIR` (optional, default: `./db`)
#[cfg(feature = "config")]
impl FromEnv for JsonStoreConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let data_dir = env_or_default("DATA_DIR", DEFAULT_DATA_DIR);
        if data_dir.trim().is_empty() {
            return Err(ConfigError::ParseError {
                key: "DATA_DIR".to_string(),
                details: "must not be empty".to_string(),
            });
        }

        Ok(Self::new(data_dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_path() {
        let config = JsonStoreConfig::new("/tmp/data");
        assert_eq!(
            config.collection_path("products"),
            PathBuf::from("/tmp/data/products.json")
        );
    }

    #[test]
    fn test_default_data_dir() {
        assert_eq!(JsonStoreConfig::default().data_dir(), Path::new("./db"));
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env() {
        temp_env::with_var("DATA_DIR", Some("/srv/data"), || {
            let config = JsonStoreConfig::from_env().unwrap();
            assert_eq!(config.data_dir, PathBuf::from("/srv/data"));
        });

        temp_env::with_var_unset("DATA_DIR", || {
            let config = JsonStoreConfig::from_env().unwrap();
            assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
        });

        temp_env::with_var("DATA_DIR", Some("  "), || {
            assert!(JsonStoreConfig::from_env().is_err());
        });
    }
}
