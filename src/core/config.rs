use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{Result, ReviewError};
use crate::pipelines::utils::DeviceRequest;

/// Hugging Face repository of the emotion classifier used by default.
pub const DEFAULT_MODEL_ID: &str = "j-hartmann/emotion-english-distilroberta-base";

/// Where and how the emotion classifier is loaded.
///
/// Every field has a default, so an empty JSON object is a valid config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Model repository on the Hugging Face hub.
    pub model_id: String,
    /// Git revision (branch, tag, commit hash) of the repository.
    pub revision: String,
    /// Device the model runs on, `"cpu"` or `"cuda:N"`.
    pub device: DeviceRequest,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            model_id: DEFAULT_MODEL_ID.to_string(),
            revision: "main".to_string(),
            device: DeviceRequest::Cpu,
        }
    }
}

impl ClassifierConfig {
    /// Reads a JSON config file. Missing fields keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ReviewError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&content)
            .map_err(|e| ReviewError::Config(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Stable key identifying the loaded weights, used in log lines.
    pub fn cache_key(&self) -> String {
        format!("{}@{}-{}", self.model_id, self.revision, self.device)
    }
}
