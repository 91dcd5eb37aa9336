use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use prx_risk::GUIDELINE;
use prx_vcf::ValidationOptions;

pub const DEFAULT_CONFIDENCE_SCORE: f64 = 0.95;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Reported with every risk assessment; the tables carry no per-call confidence.
    pub confidence_score: f64,
    pub guideline: String,
    pub validation: ValidationOptions,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            confidence_score: DEFAULT_CONFIDENCE_SCORE,
            guideline: GUIDELINE.to_string(),
            validation: ValidationOptions::default(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("confidence_score must be within [0, 1], got {0}")]
    InvalidConfidence(f64),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl AnalysisConfig {
    pub fn from_toml_str(toml_str: &str) -> ConfigResult<Self> {
        let config: AnalysisConfig = toml::from_str(toml_str)?;
        if !(0.0..=1.0).contains(&config.confidence_score) {
            return Err(ConfigError::InvalidConfidence(config.confidence_score));
        }
        Ok(config)
    }
}

impl TryFrom<&Path> for AnalysisConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        AnalysisConfig::from_toml_str(&toml_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use std::path::PathBuf;

    #[rstest]
    fn test_try_from_toml() {
        let path = PathBuf::from("../tests/data/config/analysis.toml");
        let config = AnalysisConfig::try_from(path.as_path()).unwrap();

        assert_eq!(config.confidence_score, 0.9);
        assert_eq!(config.guideline, "CPIC");
        assert_eq!(config.validation.max_file_bytes, 1048576);
        assert_eq!(config.validation.require_extension, false);
    }

    #[rstest]
    fn test_empty_toml_is_default() {
        let config = AnalysisConfig::from_toml_str("").unwrap();
        assert_eq!(config, AnalysisConfig::default());
    }

    #[rstest]
    fn test_reject_out_of_range_confidence() {
        let result = AnalysisConfig::from_toml_str("confidence_score = 1.5");
        assert_eq!(matches!(result, Err(ConfigError::InvalidConfidence(_))), true);
    }

    #[rstest]
    fn test_reject_malformed_toml() {
        let result = AnalysisConfig::from_toml_str("confidence_score = ");
        assert_eq!(matches!(result, Err(ConfigError::Toml(_))), true);
    }

    #[rstest]
    fn test_missing_file_is_io_error() {
        let result = AnalysisConfig::try_from(PathBuf::from("missing.toml").as_path());
        assert_eq!(matches!(result, Err(ConfigError::Io(_))), true);
    }
}
