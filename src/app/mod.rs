//! Interaction layer between a review form and the emotion classifier.
//!
//! ## Main Types
//!
//! - [`FormInput`] - Category, rating and review text for one interaction
//! - [`InteractionController`] - State machine driven by [`Action`]s
//! - [`DisplayState`] - What the page shows: nothing, a warning, or a result
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use review_emotion::app::*;
//! use review_emotion::core::{ClassifierConfig, ClassifierGateway};
//! use review_emotion::pipelines::EmotionClassificationPipelineBuilder;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = ClassifierConfig::default();
//! let gateway = ClassifierGateway::new(move || {
//!     EmotionClassificationPipelineBuilder::from_config(&config).build()
//! });
//! let mut controller = InteractionController::new(&gateway)?;
//!
//! let form = FormInput::parse("mobile", "5", "The product is extremely good.")?;
//! let state = controller.dispatch(Action::Submit(form))?;
//! println!("{state}");
//! # Ok(())
//! # }
//! ```

pub mod controller;
pub mod form;
pub mod mapping;
pub mod query;

pub use controller::{Action, DisplayState, InteractionController, EMPTY_REVIEW_WARNING};
pub use form::{Category, FormInput, Rating};
pub use mapping::{display_emotion, UNKNOWN_EMOTION};
pub use query::{ClassificationQuery, QueryComposer};
