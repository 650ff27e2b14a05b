//! Error types for this crate.
//!
//! All fallible operations return [`Result<T>`] which uses [`ReviewError`] as the error type.

use thiserror::Error;

/// A [`Result`](std::result::Result) alias using [`ReviewError`] as the error type.
pub type Result<T> = std::result::Result<T, ReviewError>;

/// The unified error type for all crate errors.
///
/// Only [`ReviewError::Inference`] is produced by a submission; the other
/// variants describe the failure it wraps or problems at the form boundary.
///
/// ```rust,no_run
/// use review_emotion::core::ReviewError;
///
/// fn handle_error(e: ReviewError) {
///     match &e {
///         ReviewError::Inference(source) => {
///             // The current interaction failed, the next submit may succeed
///             eprintln!("Classification failed: {source}");
///         }
///         ReviewError::InvalidInput(msg) => {
///             // Fix the form field and try again
///             eprintln!("{msg}");
///         }
///         _ => eprintln!("{e}"),
///     }
/// }
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReviewError {
    /// The classifier failed on the current submission. Carries the cause.
    #[error("classification failed: {0}")]
    Inference(#[source] Box<ReviewError>),

    /// A form field could not be parsed (unknown category, rating outside 1..=5).
    #[error("{0}")]
    InvalidInput(String),

    /// Network or download failure. Retry may help.
    #[error("{0}")]
    Download(String),

    /// Tokenization failure. Check input text.
    #[error("{0}")]
    Tokenization(String),

    /// Device initialization failure. Fall back to CPU.
    #[error("{0}")]
    Device(String),

    /// Query template could not be rendered.
    #[error("query template error: {0}")]
    Template(String),

    /// Configuration file missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal error. Report if seen.
    #[error("{0}")]
    Unexpected(String),
}

impl ReviewError {
    /// Wraps any error as the failure of the current classification.
    ///
    /// An error that is already an inference failure is returned unchanged.
    pub fn inference(source: ReviewError) -> Self {
        match source {
            ReviewError::Inference(_) => source,
            other => ReviewError::Inference(Box::new(other)),
        }
    }
}

impl From<hf_hub::api::sync::ApiError> for ReviewError {
    fn from(value: hf_hub::api::sync::ApiError) -> Self {
        ReviewError::Download(format!("HuggingFace API error: {}", value))
    }
}

impl From<candle_core::Error> for ReviewError {
    fn from(value: candle_core::Error) -> Self {
        ReviewError::Unexpected(value.to_string())
    }
}

impl From<std::io::Error> for ReviewError {
    fn from(value: std::io::Error) -> Self {
        ReviewError::Unexpected(value.to_string())
    }
}

impl From<serde_json::Error> for ReviewError {
    fn from(value: serde_json::Error) -> Self {
        ReviewError::Unexpected(value.to_string())
    }
}

impl From<minijinja::Error> for ReviewError {
    fn from(value: minijinja::Error) -> Self {
        ReviewError::Template(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inference_wraps_cause_once() {
        let err = ReviewError::inference(ReviewError::Tokenization("bad input".into()));
        assert_eq!(err.to_string(), "classification failed: bad input");

        let rewrapped = ReviewError::inference(err);
        match rewrapped {
            ReviewError::Inference(inner) => {
                assert!(matches!(*inner, ReviewError::Tokenization(_)))
            }
            other => panic!("expected inference error, got {other:?}"),
        }
    }
}
