//! Configuration system for RiskLedger.
//!
//! Load scoring configuration from TOML or YAML files to adjust impact
//! weights and severity thresholds without code changes. Defaults implement
//! the canonical rubric: weights {0.30, 0.30, 0.20, 0.20} and tier bounds
//! Critical >= 20, High >= 13, Medium >= 6.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use riskledger_config::ScoringConfig;
//!
//! let config = ScoringConfig::from_toml_str(r#"
//!     [weights]
//!     financial = 0.40
//!     reputational = 0.30
//!     operational = 0.20
//!     regulatory = 0.10
//!
//!     [thresholds]
//!     medium = 6.0
//!     high = 13.0
//!     critical = 20.0
//! "#).unwrap();
//!
//! assert_eq!(config.weights.financial, 0.40);
//! ```
//!
//! Use defaults when the file is missing:
//!
//! ```
//! use riskledger_config::ScoringConfig;
//!
//! let config = ScoringConfig::load("riskledger.toml").unwrap_or_default();
//! assert!(config.validate().is_ok());
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use riskledger_core::{ImpactWeights, RiskThresholds};

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Scoring configuration: impact weights and severity thresholds.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ScoringConfig {
    /// Weights applied to the four impact dimensions.
    #[serde(default)]
    pub weights: ImpactWeights,

    /// Lower bounds of the Medium/High/Critical tiers.
    #[serde(default)]
    pub thresholds: RiskThresholds,
}

impl ScoringConfig {
    /// Creates the canonical default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Replaces the impact weights.
    pub fn with_weights(mut self, weights: ImpactWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Replaces the severity thresholds.
    pub fn with_thresholds(mut self, thresholds: RiskThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Checks that weights sum to 1.0 and thresholds ascend.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        self.thresholds
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(())
    }

    /// Parses and validates in one step.
    pub fn from_toml_str_validated(s: &str) -> Result<Self, ConfigError> {
        let config = Self::from_toml_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
