use tokenizers::Tokenizer;

use super::model::EmotionClassificationModel;
use crate::core::{LabelScores, Result, ReviewError, TextClassifier};

/// An emotion prediction with label and confidence score.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// The predicted emotion as named by the model (e.g., "joy", "anger").
    pub label: String,
    /// Confidence score (0.0 to 1.0).
    pub score: f32,
}

/// Classifies the emotion expressed by a piece of text.
///
/// Construct with [`EmotionClassificationPipelineBuilder`](super::EmotionClassificationPipelineBuilder).
pub struct EmotionClassificationPipeline<M: EmotionClassificationModel> {
    pub(crate) model: M,
    pub(crate) tokenizer: Tokenizer,
}

impl<M: EmotionClassificationModel> EmotionClassificationPipeline<M> {
    /// Most likely emotion for `text`.
    pub fn predict(&self, text: &str) -> Result<Prediction> {
        let (label, score) = self
            .predict_scores(text)?
            .into_iter()
            .next()
            .ok_or_else(|| ReviewError::Unexpected("No predictions returned".into()))?;
        Ok(Prediction { label, score })
    }

    /// All emotions for `text`, highest probability first.
    pub fn predict_scores(&self, text: &str) -> Result<LabelScores> {
        self.model.predict_scores(&self.tokenizer, text)
    }

    /// Returns the device (CPU/GPU) the model is running on.
    pub fn device(&self) -> &candle_core::Device {
        self.model.device()
    }
}

impl<M> TextClassifier for EmotionClassificationPipeline<M>
where
    M: EmotionClassificationModel + Send + Sync,
{
    fn classify(&self, text: &str) -> Result<LabelScores> {
        self.predict_scores(text)
    }
}
