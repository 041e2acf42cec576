//! The requester's stated preferences.
//!
//! Every dimension is optional. An absent value means "not stated" and earns
//! the neutral partial credit during scoring; it is never read as zero or as
//! an empty string.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::Tag;

/// Preferences submitted for a single matching request.
///
/// # Examples
/// ```
/// use giftmatch_core::Criteria;
///
/// let criteria = Criteria::new()
///     .with_age(25)
///     .with_budget(150.0)
///     .with_interests(["Gaming", "music"])
///     .with_occasion("Birthday");
/// assert_eq!(criteria.age, Some(25));
/// assert_eq!(criteria.occasion.as_ref().map(|tag| tag.as_str()), Some("birthday"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Criteria {
    /// Recipient age in whole years.
    pub age: Option<u32>,
    /// Spending limit; always finite and non-negative when present.
    pub budget: Option<f64>,
    /// Recipient interests; an empty set means "not stated".
    pub interests: BTreeSet<Tag>,
    /// Recipient gender label.
    pub gender: Option<Tag>,
    /// Occasion for the gift.
    pub occasion: Option<Tag>,
    /// Recipient personality type.
    pub personality_type: Option<Tag>,
    /// Relationship between requester and recipient. Recorded, not scored.
    pub relationship: Option<Tag>,
}

/// Errors returned by [`Criteria::require_age_and_budget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CriteriaError {
    /// A field the calling layer treats as mandatory was absent.
    #[error("{field} is required")]
    MissingRequired {
        /// Name of the missing field.
        field: &'static str,
    },
}

impl Criteria {
    /// Construct criteria with every dimension absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the recipient age.
    #[must_use]
    pub const fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Set the budget. Negative or non-finite values leave it absent.
    #[must_use]
    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = valid_budget(budget);
        self
    }

    /// Replace the interests, normalising each label.
    #[must_use]
    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.interests = crate::tag_set(interests);
        self
    }

    /// Set the gender label; blank labels leave it absent.
    #[must_use]
    pub fn with_gender(mut self, gender: &str) -> Self {
        self.gender = Tag::parse(gender);
        self
    }

    /// Set the occasion; blank labels leave it absent.
    #[must_use]
    pub fn with_occasion(mut self, occasion: &str) -> Self {
        self.occasion = Tag::parse(occasion);
        self
    }

    /// Set the personality type; blank labels leave it absent.
    #[must_use]
    pub fn with_personality_type(mut self, personality: &str) -> Self {
        self.personality_type = Tag::parse(personality);
        self
    }

    /// Set the relationship; blank labels leave it absent.
    #[must_use]
    pub fn with_relationship(mut self, relationship: &str) -> Self {
        self.relationship = Tag::parse(relationship);
        self
    }

    /// Reject criteria lacking an age or a budget.
    ///
    /// The engine scores such criteria with neutral credit; request handlers
    /// call this when they want to refuse them up front instead.
    ///
    /// # Errors
    /// Returns [`CriteriaError::MissingRequired`] naming the first missing
    /// field.
    pub const fn require_age_and_budget(&self) -> Result<(), CriteriaError> {
        if self.age.is_none() {
            return Err(CriteriaError::MissingRequired { field: "age" });
        }
        if self.budget.is_none() {
            return Err(CriteriaError::MissingRequired { field: "budget" });
        }
        Ok(())
    }
}

pub(crate) fn valid_budget(budget: f64) -> Option<f64> {
    (budget.is_finite() && budget >= 0.0).then_some(budget)
}
