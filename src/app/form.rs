//! Form fields collected for one interaction.

use std::fmt;
use std::str::FromStr;

use crate::core::{Result, ReviewError};

/// Product category of the reviewed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Books,
    Mobile,
    SmartTv,
    Refrigerator,
    MobileAccessories,
}

impl Category {
    /// Every category in the order the form offers them.
    pub const ALL: [Category; 5] = [
        Category::Books,
        Category::Mobile,
        Category::SmartTv,
        Category::Refrigerator,
        Category::MobileAccessories,
    ];

    /// Name shown in the form and interpolated into the classification query.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Books => "books",
            Category::Mobile => "mobile",
            Category::SmartTv => "smartTv",
            Category::Refrigerator => "refrigerator",
            Category::MobileAccessories => "mobile accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ReviewError;

    /// Case-insensitive; `_` and `-` count as spaces.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace(['_', '-'], " ");
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().to_lowercase() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
                ReviewError::InvalidInput(format!(
                    "unknown category '{}', expected one of: {}",
                    s.trim(),
                    names.join(", ")
                ))
            })
    }
}

/// Star rating between 1 and 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(stars: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&stars) {
            Ok(Self(stars))
        } else {
            Err(ReviewError::InvalidInput(format!(
                "rating must be between {} and {}, got {stars}",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Rating {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self> {
        let stars = s.trim().parse::<u8>().map_err(|_| {
            ReviewError::InvalidInput(format!("rating must be a number from 1 to 5, got '{}'", s.trim()))
        })?;
        Self::new(stars)
    }
}

/// Everything the user has entered for the current interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub category: Category,
    pub rating: Rating,
    /// Free text, possibly empty or whitespace-only.
    pub review_text: String,
}

impl FormInput {
    pub fn new(category: Category, rating: Rating, review_text: impl Into<String>) -> Self {
        Self {
            category,
            rating,
            review_text: review_text.into(),
        }
    }

    /// Parse the raw strings a form submits.
    pub fn parse(category: &str, rating: &str, review_text: impl Into<String>) -> Result<Self> {
        Ok(Self::new(category.parse()?, rating.parse()?, review_text))
    }

    /// True when the review has something besides whitespace.
    pub fn has_review(&self) -> bool {
        !self.review_text.trim().is_empty()
    }
}

impl Default for FormInput {
    fn default() -> Self {
        Self::new(Category::Books, Rating::default(), String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_names_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn category_accepts_loose_spelling() {
        assert_eq!("SMARTTV".parse::<Category>().unwrap(), Category::SmartTv);
        assert_eq!(
            "mobile_accessories".parse::<Category>().unwrap(),
            Category::MobileAccessories
        );
        assert_eq!(
            " Mobile-Accessories ".parse::<Category>().unwrap(),
            Category::MobileAccessories
        );
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = "laptops".parse::<Category>().unwrap_err();
        assert!(matches!(err, ReviewError::InvalidInput(_)));
        assert!(err.to_string().contains("laptops"));
    }

    #[test]
    fn rating_bounds() {
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(6).is_err());
        assert_eq!(Rating::new(5).unwrap().get(), 5);
        assert_eq!("3".parse::<Rating>().unwrap().get(), 3);
        assert!("five".parse::<Rating>().is_err());
        assert!("-1".parse::<Rating>().is_err());
    }

    #[test]
    fn blank_reviews_are_detected() {
        for text in ["", " ", "\t\n  "] {
            let form = FormInput::new(Category::Books, Rating::default(), text);
            assert!(!form.has_review(), "{text:?} should count as blank");
        }
        assert!(FormInput::new(Category::Books, Rating::default(), " ok ").has_review());
    }

    #[test]
    fn parse_builds_form() {
        let form = FormInput::parse("mobile", "5", "Great phone").unwrap();
        assert_eq!(form.category, Category::Mobile);
        assert_eq!(form.rating.get(), 5);
        assert_eq!(form.review_text, "Great phone");
    }
}
