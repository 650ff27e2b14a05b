//! Lazily initialized, process-lifetime access to the emotion classifier.
//!
//! Loading a classifier downloads weights and allocates a large model, so the
//! [`ClassifierGateway`] builds it at most once and hands out shared
//! references afterwards. The gateway is an ordinary value: the composition
//! root creates it and lends it to whoever needs to classify text.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::error::{Result, ReviewError};

/// Labels paired with their scores, highest score first.
pub type LabelScores = Vec<(String, f32)>;

/// Anything that can rank emotion labels for a piece of text.
pub trait TextClassifier: Send + Sync {
    fn classify(&self, text: &str) -> Result<LabelScores>;
}

/// Top-ranked prediction for one classification query.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    /// Native label as reported by the model, e.g. `"joy"`.
    pub raw_label: String,
    /// Confidence in `[0, 1]`.
    pub score: f32,
}

type Loader<C> = Box<dyn Fn() -> Result<C> + Send + Sync>;

/// Owns the single classifier instance of the running process.
pub struct ClassifierGateway<C> {
    loader: Loader<C>,
    instance: OnceCell<Arc<C>>,
}

impl<C: TextClassifier> ClassifierGateway<C> {
    /// Create a gateway that will call `loader` the first time a classifier is needed.
    pub fn new<F>(loader: F) -> Self
    where
        F: Fn() -> Result<C> + Send + Sync + 'static,
    {
        Self {
            loader: Box::new(loader),
            instance: OnceCell::new(),
        }
    }

    /// Create a gateway around an already constructed classifier.
    pub fn with_classifier(classifier: C) -> Self
    where
        C: 'static,
    {
        let gateway = Self::new(|| {
            Err(ReviewError::Unexpected(
                "classifier was provided up front".into(),
            ))
        });
        let _ = gateway.instance.set(Arc::new(classifier));
        gateway
    }

    /// Return the classifier, constructing it on the first call.
    ///
    /// Concurrent first callers block until a single construction finishes
    /// and all receive the same instance. A failed construction is not
    /// remembered; the next call tries again.
    pub fn initialize(&self) -> Result<Arc<C>> {
        self.instance
            .get_or_try_init(|| {
                tracing::info!("initializing emotion classifier");
                let classifier = (self.loader)()?;
                tracing::info!("emotion classifier ready");
                Ok::<_, ReviewError>(Arc::new(classifier))
            })
            .map(Arc::clone)
    }

    /// Whether the classifier has been constructed yet.
    pub fn is_initialized(&self) -> bool {
        self.instance.get().is_some()
    }

    /// Classify `text` and return the highest-scoring label.
    ///
    /// Every failure, including a failed first initialization, is reported
    /// as [`ReviewError::Inference`]. Nothing is retried here.
    pub fn classify(&self, text: &str) -> Result<ClassificationResult> {
        let classifier = self.initialize().map_err(ReviewError::inference)?;
        let ranked = classifier.classify(text).map_err(ReviewError::inference)?;

        let (raw_label, score) = top_ranked(ranked).ok_or_else(|| {
            ReviewError::inference(ReviewError::Unexpected(
                "classifier returned no labels".into(),
            ))
        })?;
        tracing::debug!(%raw_label, score, "top prediction");

        Ok(ClassificationResult { raw_label, score })
    }
}

/// Highest score wins; on ties the earlier entry is kept.
fn top_ranked(scores: LabelScores) -> Option<(String, f32)> {
    scores
        .into_iter()
        .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best })
}
