use tokenizers::Tokenizer;

use crate::core::{LabelScores, Result};

pub trait EmotionClassificationModel {
    type Options: std::fmt::Debug + Clone;

    fn new(options: Self::Options, device: candle_core::Device) -> Result<Self>
    where
        Self: Sized;

    /// Every label with its probability, highest first.
    fn predict_scores(&self, tokenizer: &Tokenizer, text: &str) -> Result<LabelScores>;

    fn get_tokenizer(options: Self::Options) -> Result<Tokenizer>;

    fn device(&self) -> &candle_core::Device;
}
