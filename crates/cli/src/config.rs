//! Configuration file support for scoring jobs

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Options for one scoring job
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreJobConfig {
    /// Field holding the text to score
    pub field: String,
    /// Field name for the attached weight
    pub weight_field: String,
    /// Also attach the four sub-scores
    pub breakdown: bool,
    /// Weight for records whose quality cannot be assessed
    pub undefined_weight: f64,
    /// Word-per-line dictionary file; None uses the embedded list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dictionary: Option<PathBuf>,
}

impl Default for ScoreJobConfig {
    fn default() -> Self {
        Self {
            field: "text".to_string(),
            weight_field: "quality_weight".to_string(),
            breakdown: false,
            undefined_weight: 1.0,
            dictionary: None,
        }
    }
}

impl ScoreJobConfig {
    /// Load a job config from a file (YAML or TOML)
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

        let config: Self = match extension {
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?,
            "toml" => toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?,
            _ => anyhow::bail!(
                "Unsupported config file format: {}. Use .yaml, .yml, or .toml",
                extension
            ),
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject values the scorer cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.field.is_empty() {
            anyhow::bail!("field must not be empty");
        }
        if self.weight_field.is_empty() {
            anyhow::bail!("weight_field must not be empty");
        }
        if !(0.0..=1.0).contains(&self.undefined_weight) {
            anyhow::bail!(
                "undefined_weight {} outside [0,1]",
                self.undefined_weight
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = ScoreJobConfig::default();
        assert_eq!(config.field, "text");
        assert_eq!(config.weight_field, "quality_weight");
        assert_eq!(config.undefined_weight, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_yaml() {
        let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
        writeln!(file, "field: body\nundefined_weight: 0.5").unwrap();
        file.flush().unwrap();

        let config = ScoreJobConfig::load(file.path()).unwrap();
        assert_eq!(config.field, "body");
        assert_eq!(config.undefined_weight, 0.5);
        // Unspecified fields fall back to defaults
        assert_eq!(config.weight_field, "quality_weight");
    }

    #[test]
    fn test_load_toml() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "weight_field = \"sample_weight\"\nbreakdown = true").unwrap();
        file.flush().unwrap();

        let config = ScoreJobConfig::load(file.path()).unwrap();
        assert_eq!(config.weight_field, "sample_weight");
        assert!(config.breakdown);
    }

    #[test]
    fn test_rejects_unknown_extension() {
        let mut file = NamedTempFile::with_suffix(".ini").unwrap();
        writeln!(file, "field = text").unwrap();
        assert!(ScoreJobConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_weight() {
        let config = ScoreJobConfig {
            undefined_weight: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
