use super::model::EmotionClassificationModel;
use super::pipeline::EmotionClassificationPipeline;
use crate::core::{ClassifierConfig, Result};
use crate::models::{RobertaEmotionModel, RobertaOptions};
use crate::pipelines::utils::DeviceRequest;

pub struct EmotionClassificationPipelineBuilder<M: EmotionClassificationModel> {
    options: M::Options,
    device_request: DeviceRequest,
}

impl<M: EmotionClassificationModel> EmotionClassificationPipelineBuilder<M> {
    pub fn new(options: M::Options) -> Self {
        Self {
            options,
            device_request: DeviceRequest::Cpu,
        }
    }

    /// Use CPU for inference (default).
    pub fn cpu(mut self) -> Self {
        self.device_request = DeviceRequest::Cpu;
        self
    }

    /// Use a specific CUDA GPU for inference.
    pub fn cuda(mut self, index: usize) -> Self {
        self.device_request = DeviceRequest::Cuda(index);
        self
    }

    pub fn device_request(mut self, request: DeviceRequest) -> Self {
        self.device_request = request;
        self
    }

    /// Load the model and tokenizer. Downloads assets on first use.
    pub fn build(self) -> Result<EmotionClassificationPipeline<M>> {
        let device = self.device_request.resolve()?;
        let model = M::new(self.options.clone(), device)?;
        let tokenizer = M::get_tokenizer(self.options)?;
        Ok(EmotionClassificationPipeline { model, tokenizer })
    }
}

impl EmotionClassificationPipelineBuilder<RobertaEmotionModel> {
    /// RoBERTa emotion classifier from the given hub repository.
    pub fn roberta(model_id: impl Into<String>) -> Self {
        Self::new(RobertaOptions {
            model_id: model_id.into(),
            ..RobertaOptions::default()
        })
    }

    /// Sets the git revision (branch, tag, commit hash) to use.
    pub fn revision(mut self, revision: impl Into<String>) -> Self {
        self.options.revision = revision.into();
        self
    }

    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::roberta(config.model_id.clone())
            .revision(config.revision.clone())
            .device_request(config.device)
    }
}
