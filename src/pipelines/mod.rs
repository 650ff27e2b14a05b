// Pipeline modules organized by functionality
pub mod emotion_classification_pipeline;
pub mod utils;

pub use emotion_classification_pipeline::*;
pub use utils::DeviceRequest;
