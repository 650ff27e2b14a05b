//! Emotion classification pipeline for short texts such as product reviews.
//!
//! ## Main Types
//!
//! - [`EmotionClassificationPipeline`] - Ranks emotion labels for a text
//! - [`EmotionClassificationPipelineBuilder`] - Builder pattern for pipeline configuration
//! - [`EmotionClassificationModel`] - Trait for emotion model implementations
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use review_emotion::pipelines::emotion_classification_pipeline::*;
//! use review_emotion::core::DEFAULT_MODEL_ID;
//!
//! # fn main() -> review_emotion::core::Result<()> {
//! let pipeline = EmotionClassificationPipelineBuilder::roberta(DEFAULT_MODEL_ID).build()?;
//!
//! let result = pipeline.predict("I love this product!")?;
//! println!("Emotion: {} (confidence: {:.4})", result.label, result.score);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod model;
pub mod pipeline;

pub use builder::EmotionClassificationPipelineBuilder;
pub use model::EmotionClassificationModel;
pub use pipeline::{EmotionClassificationPipeline, Prediction};
