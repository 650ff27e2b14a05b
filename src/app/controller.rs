use std::fmt;

use super::form::FormInput;
use super::mapping::display_emotion;
use super::query::QueryComposer;
use crate::core::{ClassifierGateway, Result, TextClassifier};

/// Shown when Submit is pressed without a review.
pub const EMPTY_REVIEW_WARNING: &str = "Please enter a review before submitting.";

/// What the page currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayState {
    Idle,
    Warning(String),
    Result { emotion: String, score: f32 },
}

impl DisplayState {
    /// The confidence with exactly four decimals, for `Result` states.
    pub fn formatted_score(&self) -> Option<String> {
        match self {
            DisplayState::Result { score, .. } => Some(format_score(*score)),
            _ => None,
        }
    }
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayState::Idle => Ok(()),
            DisplayState::Warning(message) => write!(f, "{message}"),
            DisplayState::Result { emotion, score } => write!(
                f,
                "Predicted Emotion: {emotion}\nModel Confidence: {}",
                format_score(*score)
            ),
        }
    }
}

pub fn format_score(score: f32) -> String {
    format!("{score:.4}")
}

/// Discrete user actions.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Submit(FormInput),
    Refresh,
}

/// Turns user actions into display states.
///
/// Borrows the gateway so the classifier outlives any number of
/// interactions, including failed ones.
pub struct InteractionController<'g, C> {
    gateway: &'g ClassifierGateway<C>,
    composer: QueryComposer,
    state: DisplayState,
}

impl<'g, C: TextClassifier> InteractionController<'g, C> {
    pub fn new(gateway: &'g ClassifierGateway<C>) -> Result<Self> {
        Ok(Self {
            gateway,
            composer: QueryComposer::new()?,
            state: DisplayState::Idle,
        })
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> Result<&DisplayState> {
        match action {
            Action::Submit(form) => self.submit(&form),
            Action::Refresh => Ok(self.reset()),
        }
    }

    /// Classify the form's review.
    ///
    /// A blank review yields a warning without touching the gateway. On an
    /// inference error the state falls back to `Idle` and the error is
    /// returned unchanged.
    pub fn submit(&mut self, form: &FormInput) -> Result<&DisplayState> {
        if !form.has_review() {
            tracing::warn!("submit without review text");
            self.state = DisplayState::Warning(EMPTY_REVIEW_WARNING.to_string());
            return Ok(&self.state);
        }

        self.state = DisplayState::Idle;
        let query = self.composer.compose(form)?;
        tracing::debug!(query = %query, "classifying review");

        let result = self.gateway.classify(query.as_str()).map_err(|e| {
            tracing::warn!(error = %e, "classification failed");
            e
        })?;

        self.state = DisplayState::Result {
            emotion: display_emotion(&result.raw_label).to_string(),
            score: result.score,
        };
        Ok(&self.state)
    }

    /// Back to `Idle`. Never classifies and keeps the gateway as is.
    pub fn reset(&mut self) -> &DisplayState {
        self.state = DisplayState::Idle;
        &self.state
    }
}
