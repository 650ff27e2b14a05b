pub mod app;
pub mod core;
pub mod models;
pub mod pipelines;

// Re-export core types
pub use crate::core::{
    ClassificationResult, ClassifierConfig, ClassifierGateway, Result, ReviewError,
    TextClassifier,
};

// Re-export the interaction layer for easier access
pub use app::{Action, Category, DisplayState, FormInput, InteractionController, Rating};

pub use models::RobertaEmotionModel;
pub use pipelines::{EmotionClassificationPipeline, EmotionClassificationPipelineBuilder};
