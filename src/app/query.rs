use std::fmt;

use minijinja::{context, Environment};

use super::form::FormInput;
use crate::core::Result;

const QUERY_TEMPLATE_NAME: &str = "classification_query";

/// Fixed layout of the text sent to the classifier.
pub const QUERY_TEMPLATE: &str =
    "Category: {{ category }}, Rating: {{ rating }}, Review: {{ review }}";

/// Formatted classifier input combining category, rating and review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationQuery(String);

impl ClassificationQuery {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ClassificationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Renders [`ClassificationQuery`] values from form input.
pub struct QueryComposer {
    env: Environment<'static>,
}

impl QueryComposer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template(QUERY_TEMPLATE_NAME, QUERY_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Interpolate the form verbatim. The review is not trimmed; callers
    /// check [`FormInput::has_review`] first.
    pub fn compose(&self, form: &FormInput) -> Result<ClassificationQuery> {
        let template = self.env.get_template(QUERY_TEMPLATE_NAME)?;
        let rendered = template.render(context! {
            category => form.category.as_str(),
            rating => form.rating.get(),
            review => form.review_text.as_str(),
        })?;
        Ok(ClassificationQuery(rendered))
    }
}
