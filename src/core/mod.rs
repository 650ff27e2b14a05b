pub mod config;
pub mod error;
pub mod gateway;

pub use config::{ClassifierConfig, DEFAULT_MODEL_ID};
pub use error::{Result, ReviewError};
pub use gateway::{ClassificationResult, ClassifierGateway, LabelScores, TextClassifier};
