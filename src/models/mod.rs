pub mod roberta_emotion;

pub use roberta_emotion::{RobertaEmotionModel, RobertaOptions};
