//! Configuration for the car records pipeline.

use crate::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default cap on the number of valid records kept in memory.
pub const DEFAULT_MAX_RECORDS: usize = 100;

/// Default car ID length.
pub const DEFAULT_ID_LENGTH: usize = 6;

/// Default minimum model name length.
pub const DEFAULT_MIN_MODEL_LENGTH: usize = 4;

/// Default price floor; prices must be strictly above it.
pub const DEFAULT_PRICE_FLOOR: f64 = 11400.00;

/// Default input file name.
pub const DEFAULT_INPUT_FILE: &str = "car_records.txt";

/// Default error log file name.
pub const DEFAULT_ERROR_FILE: &str = "invalid_records.txt";

/// Limits and file locations used by the validator and partitioner.
///
/// Every field has a default, so a TOML file only needs to list the values it
/// overrides:
///
/// ```toml
/// max_records = 250
/// price_floor = 9999.99
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RecordsConfig {
    /// Maximum number of valid records to keep; reading stops once reached
    pub max_records: usize,

    /// Exact length required of a car ID
    pub id_length: usize,

    /// Minimum length of a model name
    pub min_model_length: usize,

    /// Prices must be strictly greater than this amount
    pub price_floor: f64,

    /// Input file with one record per line
    pub input_file: PathBuf,

    /// Error log, truncated on every run
    pub error_file: PathBuf,
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            max_records: DEFAULT_MAX_RECORDS,
            id_length: DEFAULT_ID_LENGTH,
            min_model_length: DEFAULT_MIN_MODEL_LENGTH,
            price_floor: DEFAULT_PRICE_FLOOR,
            input_file: PathBuf::from(DEFAULT_INPUT_FILE),
            error_file: PathBuf::from(DEFAULT_ERROR_FILE),
        }
    }
}

impl RecordsConfig {
    /// Creates a new builder for `RecordsConfig`.
    pub fn builder() -> RecordsConfigBuilder {
        RecordsConfigBuilder::default()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_records == 0 {
            return Err(ConfigError::invalid("max_records must be greater than 0"));
        }

        // The positional ID rules inspect characters 1 through 6.
        if self.id_length < DEFAULT_ID_LENGTH {
            return Err(ConfigError::invalid(format!(
                "id_length must be at least {}",
                DEFAULT_ID_LENGTH
            )));
        }

        if self.min_model_length == 0 {
            return Err(ConfigError::invalid(
                "min_model_length must be greater than 0",
            ));
        }

        if !self.price_floor.is_finite() {
            return Err(ConfigError::invalid("price_floor must be a finite number"));
        }

        if self.input_file.as_os_str().is_empty() || self.error_file.as_os_str().is_empty() {
            return Err(ConfigError::invalid("file paths cannot be empty"));
        }

        Ok(())
    }

    /// Parses and validates a configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: RecordsConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML configuration file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

/// Builder for `RecordsConfig`.
///
/// Unset values fall back to the defaults.
///
/// # Example
///
/// ```rust
/// use records_core::RecordsConfig;
///
/// let config = RecordsConfig::builder()
///     .max_records(10)
///     .error_file("rejects.txt")
///     .build()
///     .unwrap();
/// assert_eq!(config.max_records, 10);
/// assert_eq!(config.id_length, 6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordsConfigBuilder {
    base: Option<RecordsConfig>,
    max_records: Option<usize>,
    id_length: Option<usize>,
    min_model_length: Option<usize>,
    price_floor: Option<f64>,
    input_file: Option<PathBuf>,
    error_file: Option<PathBuf>,
}

impl RecordsConfigBuilder {
    /// Starts from an existing configuration instead of the defaults.
    pub fn from_config(config: RecordsConfig) -> Self {
        Self {
            base: Some(config),
            ..Default::default()
        }
    }

    /// Sets the maximum number of valid records.
    pub fn max_records(mut self, max_records: usize) -> Self {
        self.max_records = Some(max_records);
        self
    }

    /// Sets the required car ID length.
    pub fn id_length(mut self, id_length: usize) -> Self {
        self.id_length = Some(id_length);
        self
    }

    /// Sets the minimum model name length.
    pub fn min_model_length(mut self, min_model_length: usize) -> Self {
        self.min_model_length = Some(min_model_length);
        self
    }

    /// Sets the price floor.
    pub fn price_floor(mut self, price_floor: f64) -> Self {
        self.price_floor = Some(price_floor);
        self
    }

    /// Sets the input file path.
    pub fn input_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_file = Some(path.into());
        self
    }

    /// Sets the error log path.
    pub fn error_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.error_file = Some(path.into());
        self
    }

    /// Builds the `RecordsConfig`.
    ///
    /// Returns an error if any value is out of range.
    pub fn build(self) -> Result<RecordsConfig, ConfigError> {
        let base = self.base.unwrap_or_default();
        let config = RecordsConfig {
            max_records: self.max_records.unwrap_or(base.max_records),
            id_length: self.id_length.unwrap_or(base.id_length),
            min_model_length: self.min_model_length.unwrap_or(base.min_model_length),
            price_floor: self.price_floor.unwrap_or(base.price_floor),
            input_file: self.input_file.unwrap_or(base.input_file),
            error_file: self.error_file.unwrap_or(base.error_file),
        };

        config.validate()?;
        Ok(config)
    }
}
