//! Configuration management for walletledger
//!
//! This module handles loading, validation, and defaults of the
//! walletledger configuration from YAML files.

pub mod error;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use error::{ConfigError, ConfigErrorSeverity, ConfigResult};

/// Largest page size accepted anywhere in the configuration
pub const MAX_PAGE_SIZE: usize = 500;

// ==================== Configuration Types ====================

/// Transaction data settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Optional JSON file with transactions; the built-in fixture is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Currency assigned to generated fixture transactions
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: None,
            currency: default_currency(),
        }
    }
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Pagination settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Rows per page when a session starts or is reset
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    /// Page sizes offered by the "Show:" selector
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            page_size_options: default_page_size_options(),
        }
    }
}

fn default_page_size() -> usize {
    10
}

fn default_page_size_options() -> Vec<usize> {
    vec![10, 25, 50, 100]
}

/// Where summary card values come from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryMode {
    /// Computed from the transaction collection
    Derived,
    /// Taken verbatim from `summary.fixed`
    Fixed,
}

impl Default for SummaryMode {
    fn default() -> Self {
        SummaryMode::Derived
    }
}

impl std::str::FromStr for SummaryMode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "derived" => Ok(SummaryMode::Derived),
            "fixed" => Ok(SummaryMode::Fixed),
            _ => Err(format!("Invalid summary mode: {}", s)),
        }
    }
}

impl std::fmt::Display for SummaryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryMode::Derived => write!(f, "derived"),
            SummaryMode::Fixed => write!(f, "fixed"),
        }
    }
}

/// Hard-coded summary card values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedSummaryConfig {
    pub total_balance: Decimal,
    pub total_credits: Decimal,
    pub total_debits: Decimal,
    pub transaction_count: usize,
    pub balance_change: i64,
    pub credits_change: i64,
    pub debits_change: i64,
    pub transaction_change: i64,
}

impl Default for FixedSummaryConfig {
    fn default() -> Self {
        Self {
            total_balance: Decimal::from(12345),
            total_credits: Decimal::from(7890),
            total_debits: Decimal::from(4455),
            transaction_count: 150,
            balance_change: 5,
            credits_change: 3,
            debits_change: -2,
            transaction_change: 10,
        }
    }
}

/// Summary card settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SummaryConfig {
    #[serde(default)]
    pub mode: SummaryMode,
    #[serde(default)]
    pub fixed: FixedSummaryConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Transaction data settings
    #[serde(default)]
    pub data: DataConfig,
    /// Pagination settings
    #[serde(default)]
    pub pagination: PaginationConfig,
    /// Summary card settings
    #[serde(default)]
    pub summary: SummaryConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::IoError(e),
        })?;

        Self::from_yaml(&content)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> ConfigResult<Self> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::InvalidYaml { message: e.to_string() })?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.data.currency.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "data.currency".to_string(),
                reason: "Currency code must not be empty".to_string(),
            });
        }

        validate_page_size("pagination.default_page_size", self.pagination.default_page_size)?;

        if self.pagination.page_size_options.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "pagination.page_size_options".to_string(),
                reason: "At least one page size option is required".to_string(),
            });
        }
        for size in &self.pagination.page_size_options {
            validate_page_size("pagination.page_size_options", *size)?;
        }

        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" | "off" => {}
            other => {
                return Err(ConfigError::InvalidValue {
                    field: "logging.level".to_string(),
                    reason: format!(
                        "Unknown log level '{}', expected trace, debug, info, warn, error or off",
                        other
                    ),
                });
            }
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }
}

fn validate_page_size(field: &str, size: usize) -> ConfigResult<()> {
    if size == 0 || size > MAX_PAGE_SIZE {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: format!("Page size must be between 1 and {}", MAX_PAGE_SIZE),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config.data.currency, "USD");
        assert!(config.data.path.is_none());
        assert_eq!(config.pagination.default_page_size, 10);
        assert_eq!(config.pagination.page_size_options, vec![10, 25, 50, 100]);
        assert_eq!(config.summary.mode, SummaryMode::Derived);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_default_template_parses() {
        let config = Config::from_yaml(Config::generate_default()).unwrap();
        assert_eq!(config.pagination.default_page_size, 10);
        assert_eq!(config.summary.fixed, FixedSummaryConfig::default());
    }

    #[test]
    fn test_fixed_summary_section() {
        let yaml = r#"
summary:
  mode: fixed
  fixed:
    total_balance: 100
    total_credits: 250
    total_debits: 150
    transaction_count: 3
    balance_change: 1
    credits_change: 2
    debits_change: -3
    transaction_change: 0
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.summary.mode, SummaryMode::Fixed);
        assert_eq!(config.summary.fixed.total_credits, Decimal::from(250));
        assert_eq!(config.summary.fixed.debits_change, -3);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = Config::from_yaml("pagination:\n  default_page_size: 0\n").unwrap_err();
        match err {
            ConfigError::InvalidValue { field, .. } => {
                assert_eq!(field, "pagination.default_page_size")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_page_size_options_rejected() {
        let err = Config::from_yaml("pagination:\n  page_size_options: []\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let err = Config::from_yaml("logging:\n  level: loud\n").unwrap_err();
        assert!(err.to_string().contains("logging.level"));
    }

    #[test]
    fn test_malformed_yaml() {
        let err = Config::from_yaml("pagination: [").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidYaml { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load("/nonexistent/walletledger.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }

    #[test]
    fn test_unreadable_path_reports_io_source() {
        // A directory exists but cannot be read as a file
        let err = Config::load(std::env::temp_dir()).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
        assert_eq!(err.severity(), ConfigErrorSeverity::Error);
        assert!(err.to_string().len() > "IO error: ".len());
    }

    #[test]
    fn test_summary_mode_from_str() {
        assert_eq!("Fixed".parse::<SummaryMode>().unwrap(), SummaryMode::Fixed);
        assert_eq!("derived".parse::<SummaryMode>().unwrap(), SummaryMode::Derived);
        assert!("static".parse::<SummaryMode>().is_err());
    }
}
