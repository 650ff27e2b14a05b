use std::collections::HashMap;

use candle_core::{DType, Device, Tensor, D};
use candle_nn::{ops::softmax, VarBuilder};
use candle_transformers::models::xlm_roberta::{Config, XLMRobertaForSequenceClassification};
use serde::Deserialize;
use tokenizers::Tokenizer;

use crate::core::{LabelScores, Result, ReviewError, DEFAULT_MODEL_ID};
use crate::pipelines::emotion_classification_pipeline::EmotionClassificationModel;
use crate::pipelines::utils::{hub_repo, load_tokenizer};

/// Which RoBERTa emotion checkpoint to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobertaOptions {
    pub model_id: String,
    pub revision: String,
}

impl Default for RobertaOptions {
    fn default() -> Self {
        Self {
            model_id: DEFAULT_MODEL_ID.to_string(),
            revision: "main".to_string(),
        }
    }
}

/// RoBERTa-family sequence classifier fine-tuned on emotion labels.
pub struct RobertaEmotionModel {
    model: XLMRobertaForSequenceClassification,
    device: Device,
    id2label: Vec<String>,
}

impl RobertaEmotionModel {
    pub fn new(options: RobertaOptions, device: Device) -> Result<Self> {
        tracing::info!(
            model_id = %options.model_id,
            revision = %options.revision,
            device = ?device.location(),
            "loading emotion model"
        );
        let repo = hub_repo(&options.model_id, &options.revision)?;

        let config_path = repo.get("config.json")?;
        let weights_path = repo
            .get("model.safetensors")
            .or_else(|_| repo.get("pytorch_model.bin"))?;

        let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&config_path)?)?;
        let id2label = parse_id2label(&raw)?;
        let config = parse_config(raw)?;

        let vb = if weights_path.extension().is_some_and(|e| e == "safetensors") {
            unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, &device)? }
        } else if weights_path.extension().is_some_and(|e| e == "bin") {
            VarBuilder::from_pth(&weights_path, DType::F32, &device)?
        } else {
            return Err(ReviewError::Unexpected(format!(
                "Unsupported weight file format: {:?}",
                weights_path
            )));
        };

        let model = XLMRobertaForSequenceClassification::new(id2label.len(), &config, vb)?;
        tracing::debug!(labels = ?id2label, "emotion model loaded");

        Ok(Self {
            model,
            device,
            id2label,
        })
    }

    pub fn labels(&self) -> &[String] {
        &self.id2label
    }
}

impl EmotionClassificationModel for RobertaEmotionModel {
    type Options = RobertaOptions;

    fn new(options: Self::Options, device: Device) -> Result<Self> {
        RobertaEmotionModel::new(options, device)
    }

    fn predict_scores(&self, tokenizer: &Tokenizer, text: &str) -> Result<LabelScores> {
        let encoding = tokenizer.encode(text, true).map_err(|e| {
            ReviewError::Tokenization(format!(
                "Tokenization failed on '{}': {}",
                &text.chars().take(50).collect::<String>(),
                e
            ))
        })?;

        let input_ids = Tensor::new(encoding.get_ids(), &self.device)?.unsqueeze(0)?;
        let attention_mask =
            Tensor::new(encoding.get_attention_mask(), &self.device)?.unsqueeze(0)?;
        let token_type_ids = input_ids.zeros_like()?;

        let logits = self
            .model
            .forward(&input_ids, &attention_mask, &token_type_ids)?;
        let probs = softmax(&logits.squeeze(0)?, D::Minus1)?.to_vec1::<f32>()?;

        rank_labels(&self.id2label, &probs)
    }

    fn get_tokenizer(options: Self::Options) -> Result<Tokenizer> {
        load_tokenizer(&options.model_id, &options.revision)
    }

    fn device(&self) -> &Device {
        &self.device
    }
}

#[derive(Deserialize)]
struct ClassifierConfigJson {
    #[serde(default)]
    id2label: HashMap<String, String>,
}

/// Labels ordered by class index. Indices must cover `0..n` exactly.
fn parse_id2label(raw: &serde_json::Value) -> Result<Vec<String>> {
    let parsed = ClassifierConfigJson::deserialize(raw)?;
    if parsed.id2label.is_empty() {
        return Err(ReviewError::Unexpected(
            "Model config has no id2label mapping".into(),
        ));
    }

    let mut labels = vec![None; parsed.id2label.len()];
    for (id, label) in parsed.id2label {
        let index = id
            .parse::<usize>()
            .ok()
            .filter(|i| *i < labels.len())
            .ok_or_else(|| {
                ReviewError::Unexpected(format!("Invalid class index '{id}' in id2label"))
            })?;
        labels[index] = Some(label);
    }

    labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            label.ok_or_else(|| {
                ReviewError::Unexpected(format!("Class index {i} missing from id2label"))
            })
        })
        .collect()
}

/// Fill the fields older RoBERTa configs omit, then deserialize.
fn parse_config(mut raw: serde_json::Value) -> Result<Config> {
    if let Some(fields) = raw.as_object_mut() {
        let defaults = [
            ("position_embedding_type", serde_json::json!("absolute")),
            ("type_vocab_size", serde_json::json!(1)),
            ("pad_token_id", serde_json::json!(1)),
            ("layer_norm_eps", serde_json::json!(1e-5)),
            ("hidden_dropout_prob", serde_json::json!(0.1)),
            ("attention_probs_dropout_prob", serde_json::json!(0.1)),
        ];
        for (key, value) in defaults {
            fields.entry(key).or_insert(value);
        }
    }
    Ok(serde_json::from_value(raw)?)
}

fn rank_labels(labels: &[String], probs: &[f32]) -> Result<LabelScores> {
    if labels.len() != probs.len() {
        return Err(ReviewError::Unexpected(format!(
            "Model produced {} scores for {} labels",
            probs.len(),
            labels.len()
        )));
    }

    let mut ranked: LabelScores = labels.iter().cloned().zip(probs.iter().copied()).collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    Ok(ranked)
}
