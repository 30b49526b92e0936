//! # Configuration
//!
//! Runtime settings with sensible defaults and environment overrides.
//!
//! | Variable                  | Default              | Meaning                     |
//! |---------------------------|----------------------|-----------------------------|
//! | `WARUNG_STORE_NAME`       | `BAWANG GORENG STORE`| Name printed on CSV reports |
//! | `WARUNG_DATA_DIR`         | `./data`             | Blob store directory        |
//! | `WARUNG_EXPORT_DIR`       | `./exports`          | Where CSV files land        |
//! | `WARUNG_POLL_INTERVAL_MS` | `2000`               | Change poller interval      |

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

/// Configuration failed to load.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {variable}: {value}")]
    InvalidValue { variable: String, value: String },
}

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Store name, printed in the CSV report header.
    pub store_name: String,
    /// Directory holding the JSON collection files.
    pub data_dir: PathBuf,
    /// Directory where exported reports are written.
    pub export_dir: PathBuf,
    /// How often the change poller re-checks the blobs.
    pub poll_interval: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            store_name: "BAWANG GORENG STORE".to_string(),
            data_dir: PathBuf::from("./data"),
            export_dir: PathBuf::from("./exports"),
            poll_interval: Duration::from_secs(2),
        }
    }
}

impl StoreConfig {
    /// Loads configuration from the environment, falling back to defaults.
    ///
    /// ## Errors
    /// * `ConfigError::InvalidValue` - `WARUNG_POLL_INTERVAL_MS` is set but
    ///   is not a positive integer
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = StoreConfig::default();

        if let Ok(name) = std::env::var("WARUNG_STORE_NAME") {
            if !name.trim().is_empty() {
                config.store_name = name;
            }
        }
        if let Ok(dir) = std::env::var("WARUNG_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("WARUNG_EXPORT_DIR") {
            config.export_dir = PathBuf::from(dir);
        }
        if let Ok(raw) = std::env::var("WARUNG_POLL_INTERVAL_MS") {
            let millis: u64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
                variable: "WARUNG_POLL_INTERVAL_MS".to_string(),
                value: raw.clone(),
            })?;
            if millis == 0 {
                return Err(ConfigError::InvalidValue {
                    variable: "WARUNG_POLL_INTERVAL_MS".to_string(),
                    value: raw,
                });
            }
            config.poll_interval = Duration::from_millis(millis);
        }

        debug!(
            store_name = %config.store_name,
            data_dir = %config.data_dir.display(),
            "Configuration loaded"
        );
        Ok(config)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.store_name, "BAWANG GORENG STORE");
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.export_dir, PathBuf::from("./exports"));
        assert_eq!(config.poll_interval, Duration::from_secs(2));
    }
}
