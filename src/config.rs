use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::models::{AxisWeights, WeightTiers};

/// Configuration error
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ConfigError),
    #[error("invalid scoring configuration: {0}")]
    InvalidScoring(String),
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Scoring tuning: axis weights and weight tiers
///
/// The tier thresholds are coupled to the axis weights - with the defaults
/// (both axes 50, thresholds 50/25) a single-axis match already reaches
/// the top tier and a double match stays there. Changing one side without
/// the other silently shifts ranking behavior, so `validate` rejects the
/// combinations that cannot have been intended.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ScoringSettings {
    #[serde(default)]
    pub axes: AxesConfig,
    #[serde(default)]
    pub tiers: TiersConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AxesConfig {
    #[serde(default = "default_axis_weight")]
    pub expertise: u32,
    #[serde(default = "default_axis_weight")]
    pub interest: u32,
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            expertise: default_axis_weight(),
            interest: default_axis_weight(),
        }
    }
}

fn default_axis_weight() -> u32 { 50 }

#[derive(Debug, Clone, Deserialize)]
pub struct TiersConfig {
    #[serde(default = "default_high_threshold")]
    pub high_threshold: u32,
    #[serde(default = "default_mid_threshold")]
    pub mid_threshold: u32,
    #[serde(default = "default_high_weight")]
    pub high_weight: u32,
    #[serde(default = "default_mid_weight")]
    pub mid_weight: u32,
    #[serde(default = "default_base_weight")]
    pub base_weight: u32,
}

impl Default for TiersConfig {
    fn default() -> Self {
        Self {
            high_threshold: default_high_threshold(),
            mid_threshold: default_mid_threshold(),
            high_weight: default_high_weight(),
            mid_weight: default_mid_weight(),
            base_weight: default_base_weight(),
        }
    }
}

fn default_high_threshold() -> u32 { 50 }
fn default_mid_threshold() -> u32 { 25 }
fn default_high_weight() -> u32 { 3 }
fn default_mid_weight() -> u32 { 2 }
fn default_base_weight() -> u32 { 1 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl ScoringSettings {
    /// Reject tunings that break the scoring/tiering contract
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.axes.expertise == 0 || self.axes.interest == 0 {
            return Err(SettingsError::InvalidScoring(
                "axis weights must be positive".to_string(),
            ));
        }
        if self.tiers.high_threshold <= self.tiers.mid_threshold {
            return Err(SettingsError::InvalidScoring(format!(
                "high threshold ({}) must exceed mid threshold ({})",
                self.tiers.high_threshold, self.tiers.mid_threshold
            )));
        }
        if self.tiers.base_weight == 0 {
            return Err(SettingsError::InvalidScoring(
                "base weight must be at least 1".to_string(),
            ));
        }
        if self.tiers.high_weight < self.tiers.mid_weight
            || self.tiers.mid_weight < self.tiers.base_weight
        {
            return Err(SettingsError::InvalidScoring(
                "tier weights must be monotone: high >= mid >= base".to_string(),
            ));
        }
        Ok(())
    }
}

impl From<&ScoringSettings> for AxisWeights {
    fn from(scoring: &ScoringSettings) -> Self {
        Self {
            expertise: scoring.axes.expertise,
            interest: scoring.axes.interest,
        }
    }
}

impl From<&ScoringSettings> for WeightTiers {
    fn from(scoring: &ScoringSettings) -> Self {
        Self {
            high_threshold: scoring.tiers.high_threshold,
            mid_threshold: scoring.tiers.mid_threshold,
            high_weight: scoring.tiers.high_weight,
            mid_weight: scoring.tiers.mid_weight,
            base_weight: scoring.tiers.base_weight,
        }
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with MENTOR_)
    pub fn load() -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., MENTOR_SCORING__TIERS__HIGH_WEIGHT -> scoring.tiers.high_weight
            .add_source(
                Environment::with_prefix("MENTOR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.scoring.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("MENTOR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.scoring.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring() {
        let scoring = ScoringSettings::default();
        assert_eq!(scoring.axes.expertise, 50);
        assert_eq!(scoring.axes.interest, 50);
        assert_eq!(scoring.tiers.high_threshold, 50);
        assert_eq!(scoring.tiers.mid_threshold, 25);
        assert_eq!(scoring.tiers.high_weight, 3);
        assert_eq!(scoring.tiers.mid_weight, 2);
        assert_eq!(scoring.tiers.base_weight, 1);
        assert!(scoring.validate().is_ok());
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_validate_rejects_zero_axis_weight() {
        let mut scoring = ScoringSettings::default();
        scoring.axes.interest = 0;
        assert!(matches!(
            scoring.validate(),
            Err(SettingsError::InvalidScoring(_))
        ));
    }

    #[test]
    fn test_validate_rejects_unordered_thresholds() {
        let mut scoring = ScoringSettings::default();
        scoring.tiers.high_threshold = 25;
        scoring.tiers.mid_threshold = 50;
        assert!(scoring.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_base_weight() {
        let mut scoring = ScoringSettings::default();
        scoring.tiers.base_weight = 0;
        assert!(scoring.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_monotone_tier_weights() {
        let mut scoring = ScoringSettings::default();
        scoring.tiers.mid_weight = 5;
        assert!(scoring.validate().is_err());
    }

    #[test]
    fn test_conversion_into_engine_weights() {
        let mut scoring = ScoringSettings::default();
        scoring.axes.expertise = 40;
        scoring.tiers.high_weight = 4;

        let axes = AxisWeights::from(&scoring);
        let tiers = WeightTiers::from(&scoring);
        assert_eq!(axes.expertise, 40);
        assert_eq!(axes.interest, 50);
        assert_eq!(tiers.high_weight, 4);
        assert_eq!(tiers.base_weight, 1);
    }
}
