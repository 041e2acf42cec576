//! Catalog items: the gift records the engine ranks.
//!
//! Every matching attribute is resolved into a typed field when the item is
//! built, so scoring never has to guess at missing data. Display-only
//! attributes (names, descriptions, images, store references) travel in an
//! opaque [`DisplayFields`] map and are handed back untouched.

use std::collections::BTreeSet;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::{Gender, Tag};

/// Youngest age assumed when an item does not state one.
pub const DEFAULT_MIN_AGE: u32 = 0;
/// Oldest age assumed when an item does not state one.
pub const DEFAULT_MAX_AGE: u32 = 100;

/// Opaque display attributes passed through to callers.
pub type DisplayFields = Map<String, Value>;

/// Errors returned when constructing an [`AgeRange`] or [`BudgetRange`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RangeError {
    /// The lower bound exceeds the upper bound.
    #[error("range minimum {min} exceeds maximum {max}")]
    Inverted {
        /// Lower bound supplied.
        min: f64,
        /// Upper bound supplied.
        max: f64,
    },
    /// A budget bound was negative or not a number.
    #[error("budget bound {value} must be a non-negative number")]
    InvalidBound {
        /// Offending bound.
        value: f64,
    },
}

/// Inclusive recipient age range in whole years.
///
/// # Examples
/// ```
/// use giftmatch_core::AgeRange;
///
/// let range = AgeRange::new(8, 14).expect("ordered range");
/// assert!(range.contains(8));
/// assert!(!range.contains(15));
/// assert!(AgeRange::new(14, 8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeRange {
    /// Youngest suitable age.
    pub min: u32,
    /// Oldest suitable age.
    pub max: u32,
}

impl AgeRange {
    /// Validates and constructs an [`AgeRange`].
    ///
    /// # Errors
    /// Returns [`RangeError::Inverted`] when `min > max`.
    pub fn new(min: u32, max: u32) -> Result<Self, RangeError> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// Check the ordering invariant on a possibly hand-built range.
    ///
    /// # Errors
    /// Returns [`RangeError::Inverted`] when `min > max`.
    pub fn validate(self) -> Result<(), RangeError> {
        if self.min > self.max {
            return Err(RangeError::Inverted {
                min: f64::from(self.min),
                max: f64::from(self.max),
            });
        }
        Ok(())
    }

    /// Report whether `age` lies inside the range, bounds included.
    #[must_use]
    pub const fn contains(self, age: u32) -> bool {
        self.min <= age && age <= self.max
    }

    /// Distance in years from `age` to the closer of the two bounds.
    #[must_use]
    pub const fn nearest_boundary_distance(self, age: u32) -> u32 {
        let to_min = age.abs_diff(self.min);
        let to_max = age.abs_diff(self.max);
        if to_min < to_max { to_min } else { to_max }
    }
}

impl Default for AgeRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_AGE,
            max: DEFAULT_MAX_AGE,
        }
    }
}

/// Inclusive price band in the store's currency.
///
/// The upper bound may be `f64::INFINITY` for open-ended items.
///
/// # Examples
/// ```
/// use giftmatch_core::BudgetRange;
///
/// let range = BudgetRange::new(20.0, 100.0).expect("ordered range");
/// assert!(range.contains(20.0));
/// assert!(BudgetRange::new(-1.0, 10.0).is_err());
/// assert!(BudgetRange::default().contains(1_000_000.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetRange {
    /// Cheapest price point.
    pub min: f64,
    /// Most expensive price point.
    pub max: f64,
}

impl BudgetRange {
    /// Validates and constructs a [`BudgetRange`].
    ///
    /// # Errors
    /// Returns [`RangeError::InvalidBound`] for negative or `NaN` bounds (and
    /// an infinite minimum), and [`RangeError::Inverted`] when `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Self, RangeError> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// Check the bound invariants on a possibly hand-built range.
    ///
    /// # Errors
    /// See [`BudgetRange::new`].
    pub fn validate(self) -> Result<(), RangeError> {
        if !self.min.is_finite() || self.min < 0.0 {
            return Err(RangeError::InvalidBound { value: self.min });
        }
        if self.max.is_nan() || self.max < 0.0 {
            return Err(RangeError::InvalidBound { value: self.max });
        }
        if self.min > self.max {
            return Err(RangeError::Inverted {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Report whether `budget` lies inside the range, bounds included.
    #[must_use]
    pub fn contains(self, budget: f64) -> bool {
        self.min <= budget && budget <= self.max
    }
}

impl Default for BudgetRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: f64::INFINITY,
        }
    }
}

/// A gift record with the attributes used for matching.
///
/// # Examples
/// ```
/// use giftmatch_core::{AgeRange, CatalogItem, Gender, Tag};
///
/// let item = CatalogItem::new(7)
///     .with_age_range(AgeRange::new(12, 30).expect("range"))
///     .with_interests(["Gaming", "technology"])
///     .with_occasion("birthday");
/// assert_eq!(item.gender, Gender::Unisex);
/// assert!(item.interests.contains(&Tag::parse("gaming").expect("tag")));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogItem {
    /// Identifier assigned by the owning store.
    pub id: u64,
    /// Suitable recipient ages.
    pub age_range: AgeRange,
    /// Price band.
    pub budget_range: BudgetRange,
    /// Interest tags; may be empty.
    pub interests: BTreeSet<Tag>,
    /// Intended recipient gender.
    pub gender: Gender,
    /// Occasion the gift suits, such as `birthday`, `general` or `any`.
    pub occasion: Option<Tag>,
    /// Personality the gift suits, such as `gamer` or `reader`.
    pub personality_type: Option<Tag>,
    /// Display attributes, never inspected by scoring.
    pub display: DisplayFields,
}

impl CatalogItem {
    /// Construct an item with default matching attributes.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Replace the age range.
    #[must_use]
    pub const fn with_age_range(mut self, range: AgeRange) -> Self {
        self.age_range = range;
        self
    }

    /// Replace the budget range.
    #[must_use]
    pub const fn with_budget_range(mut self, range: BudgetRange) -> Self {
        self.budget_range = range;
        self
    }

    /// Replace the interest tags, normalising each label.
    #[must_use]
    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.interests = crate::tag_set(interests);
        self
    }

    /// Replace the gender.
    #[must_use]
    pub const fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// Replace the occasion; blank labels clear it.
    #[must_use]
    pub fn with_occasion(mut self, occasion: &str) -> Self {
        self.occasion = Tag::parse(occasion);
        self
    }

    /// Replace the personality type; blank labels clear it.
    #[must_use]
    pub fn with_personality_type(mut self, personality: &str) -> Self {
        self.personality_type = Tag::parse(personality);
        self
    }

    /// Insert a display attribute.
    #[must_use]
    pub fn with_display(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.display.insert(key.to_owned(), value.into());
        self
    }

    /// Serialisable projection handed back alongside each score.
    ///
    /// Display attributes come first; the matching attributes are then
    /// written under their store keys, overriding any display attribute with
    /// the same name. An open-ended budget maximum is written as `null`.
    ///
    /// ```
    /// use giftmatch_core::CatalogItem;
    ///
    /// let projection = CatalogItem::new(3).with_display("name_en", "Chess set").projection();
    /// assert_eq!(projection["id"], 3);
    /// assert_eq!(projection["name_en"], "Chess set");
    /// assert!(projection["max_budget"].is_null());
    /// ```
    #[must_use]
    pub fn projection(&self) -> Value {
        let mut fields = self.display.clone();
        fields.insert("id".to_owned(), Value::from(self.id));
        fields.insert("min_age".to_owned(), Value::from(self.age_range.min));
        fields.insert("max_age".to_owned(), Value::from(self.age_range.max));
        fields.insert("min_budget".to_owned(), finite_or_null(self.budget_range.min));
        fields.insert("max_budget".to_owned(), finite_or_null(self.budget_range.max));
        fields.insert("gender".to_owned(), Value::from(self.gender.as_str()));
        fields.insert("occasion".to_owned(), optional_tag(self.occasion.as_ref()));
        fields.insert(
            "personality_type".to_owned(),
            optional_tag(self.personality_type.as_ref()),
        );
        fields.insert(
            "interests".to_owned(),
            self.interests
                .iter()
                .map(|tag| Value::from(tag.as_str()))
                .collect(),
        );
        Value::Object(fields)
    }
}

fn finite_or_null(value: f64) -> Value {
    serde_json::Number::from_f64(value).map_or(Value::Null, Value::Number)
}

fn optional_tag(tag: Option<&Tag>) -> Value {
    tag.map_or(Value::Null, |value| Value::from(value.as_str()))
}
