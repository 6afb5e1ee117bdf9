use std::{fs, path::{Path, PathBuf}};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// On-disk encoding of the corpus artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactFormat {
    Cbor,
    Json,
}

/// Runtime settings of the recommender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// path of the corpus artifact
    pub artifact_path: PathBuf,
    pub format: ArtifactFormat,
    /// results returned when the caller does not ask for a count
    pub default_top_n: usize,
    /// upper bound for any requested count
    pub max_top_n: usize,
    pub log_level: String,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            artifact_path: PathBuf::from("recipe_recommender.cbor"),
            format: ArtifactFormat::Cbor,
            default_top_n: 5,
            max_top_n: 10,
            log_level: "info".to_string(),
        }
    }
}

impl RecommenderConfig {
    /// Read a JSON config file; missing fields take their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_top_n == 0 {
            return Err(ConfigError::Invalid("default_top_n must be at least 1".to_string()));
        }
        if self.default_top_n > self.max_top_n {
            return Err(ConfigError::Invalid(format!(
                "default_top_n {} exceeds max_top_n {}",
                self.default_top_n, self.max_top_n
            )));
        }
        Ok(())
    }

    /// Requested result count limited to `1..=max_top_n`, default when absent
    pub fn clamp_top_n(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_top_n)
            .clamp(1, self.max_top_n.max(1))
    }
}
