use std::fmt;
use std::str::FromStr;

use candle_core::Device;
use hf_hub::api::sync::Api;
use hf_hub::{Repo, RepoType};
use serde::{Deserialize, Serialize};
use tokenizers::Tokenizer;

use crate::core::{Result, ReviewError};

/// Which device a pipeline should load its model on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DeviceRequest {
    #[default]
    Cpu,
    Cuda(usize),
}

impl DeviceRequest {
    pub fn resolve(self) -> Result<Device> {
        match self {
            DeviceRequest::Cpu => Ok(Device::Cpu),
            DeviceRequest::Cuda(i) => Device::new_cuda(i).map_err(|e| {
                ReviewError::Device(format!(
                    "Failed to init CUDA device {i}: {e}. Try CPU as fallback."
                ))
            }),
        }
    }
}

impl fmt::Display for DeviceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceRequest::Cpu => write!(f, "cpu"),
            DeviceRequest::Cuda(i) => write!(f, "cuda:{i}"),
        }
    }
}

impl FromStr for DeviceRequest {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "cpu" => Ok(DeviceRequest::Cpu),
            "cuda" | "gpu" => Ok(DeviceRequest::Cuda(0)),
            _ => s
                .strip_prefix("cuda:")
                .and_then(|index| index.parse().ok())
                .map(DeviceRequest::Cuda)
                .ok_or_else(|| {
                    ReviewError::InvalidInput(format!(
                        "unknown device '{s}', expected 'cpu' or 'cuda:N'"
                    ))
                }),
        }
    }
}

impl TryFrom<String> for DeviceRequest {
    type Error = ReviewError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<DeviceRequest> for String {
    fn from(value: DeviceRequest) -> Self {
        value.to_string()
    }
}

pub(crate) fn hub_repo(model_id: &str, revision: &str) -> Result<hf_hub::api::sync::ApiRepo> {
    let api = Api::new()?;
    Ok(api.repo(Repo::with_revision(
        model_id.to_string(),
        RepoType::Model,
        revision.to_string(),
    )))
}

pub(crate) fn load_tokenizer(model_id: &str, revision: &str) -> Result<Tokenizer> {
    let tokenizer_path = hub_repo(model_id, revision)?.get("tokenizer.json")?;
    let path_str = tokenizer_path.display().to_string();
    Tokenizer::from_file(&tokenizer_path).map_err(|e| {
        ReviewError::Tokenization(format!(
            "Failed to load tokenizer from '{}': {}",
            path_str, e
        ))
    })
}
