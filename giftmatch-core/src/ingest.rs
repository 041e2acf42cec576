//! Lenient ingestion of catalog items and criteria from JSON payloads.
//!
//! Payloads come from an external store or request body and may be missing
//! keys or carry values of the wrong type. Each attribute is resolved once
//! here: anything unusable becomes the documented default (for items) or an
//! absent dimension (for criteria). Only a payload that is not a JSON object
//! at all is rejected.
//!
//! # Examples
//! ```
//! use giftmatch_core::{CatalogItem, Criteria};
//! use serde_json::json;
//!
//! let item = CatalogItem::from_json(&json!({
//!     "id": 1,
//!     "min_age": 12,
//!     "max_age": "30",
//!     "interests": ["Gaming", "technology"],
//!     "name_en": "Gaming headset",
//! }))
//! .expect("object payload");
//! assert_eq!(item.age_range.max, 30);
//! assert_eq!(item.display["name_en"], "Gaming headset");
//!
//! let criteria = Criteria::from_json(&json!({ "age": 20, "budget": "oops" }));
//! assert_eq!(criteria.age, Some(20));
//! assert!(criteria.budget.is_none());
//! ```

use std::collections::BTreeSet;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::criteria::valid_budget;
use crate::{
    AgeRange, BudgetRange, CatalogItem, Criteria, DEFAULT_MAX_AGE, DEFAULT_MIN_AGE, Gender, Tag,
};

/// Keys consumed as matching attributes; everything else is display data.
const MATCHING_KEYS: [&str; 12] = [
    "id",
    "min_age",
    "max_age",
    "ageRange",
    "min_budget",
    "max_budget",
    "budgetRange",
    "interests",
    "gender",
    "occasion",
    "personality_type",
    "personalityType",
];

/// Interest vocabulary offered to requesters by the gift finder.
pub const KNOWN_INTERESTS: [&str; 19] = [
    "gaming",
    "sports",
    "reading",
    "music",
    "technology",
    "fashion",
    "cooking",
    "travel",
    "art",
    "fitness",
    "photography",
    "movies",
    "nature",
    "beauty",
    "home",
    "education",
    "business",
    "crafts",
    "collectibles",
];

/// Errors raised while ingesting a catalog payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    /// The payload was not a JSON object.
    #[error("catalog entry {index} is a JSON {found}, expected an object")]
    NotAnObject {
        /// Position of the entry in the catalog.
        index: usize,
        /// JSON type that was found instead.
        found: &'static str,
    },
}

impl CatalogItem {
    /// Build an item from a JSON object, defaulting unusable attributes.
    ///
    /// # Errors
    /// Returns [`IngestError::NotAnObject`] when `value` is not an object.
    pub fn from_json(value: &Value) -> Result<Self, IngestError> {
        Self::from_json_at(0, value)
    }

    fn from_json_at(index: usize, value: &Value) -> Result<Self, IngestError> {
        let Some(object) = value.as_object() else {
            return Err(IngestError::NotAnObject {
                index,
                found: json_type(value),
            });
        };

        let (pair_min_age, pair_max_age) = pair(object.get("ageRange"));
        let given_min_age = first_age(&[object.get("min_age"), pair_min_age]);
        let given_max_age = first_age(&[object.get("max_age"), pair_max_age]);
        // A missing bound never lands on the wrong side of the one given.
        let age_range = AgeRange {
            min: given_min_age.unwrap_or_else(|| {
                given_max_age.map_or(DEFAULT_MIN_AGE, |max| max.min(DEFAULT_MIN_AGE))
            }),
            max: given_max_age.unwrap_or_else(|| {
                given_min_age.map_or(DEFAULT_MAX_AGE, |min| min.max(DEFAULT_MAX_AGE))
            }),
        };

        let (pair_min_budget, pair_max_budget) = pair(object.get("budgetRange"));
        let defaults = BudgetRange::default();
        let budget_range = BudgetRange {
            min: first_number(&[object.get("min_budget"), pair_min_budget])
                .unwrap_or(defaults.min),
            max: first_number(&[object.get("max_budget"), pair_max_budget])
                .unwrap_or(defaults.max),
        };

        Ok(Self {
            id: object.get("id").and_then(as_u64).unwrap_or(0),
            age_range,
            budget_range,
            interests: object.get("interests").map(as_tag_set).unwrap_or_default(),
            gender: Gender::resolve(object.get("gender").and_then(Value::as_str)),
            occasion: object.get("occasion").and_then(as_tag),
            personality_type: object
                .get("personality_type")
                .or_else(|| object.get("personalityType"))
                .and_then(as_tag),
            display: display_fields(object),
        })
    }
}

impl Criteria {
    /// Build criteria from a request payload.
    ///
    /// Never fails: keys that are missing or carry unusable values leave the
    /// dimension absent, and a non-object payload yields empty criteria.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };
        Self {
            age: object.get("age").and_then(as_age),
            budget: object.get("budget").and_then(as_number).and_then(valid_budget),
            interests: object.get("interests").map(as_tag_set).unwrap_or_default(),
            gender: object.get("gender").and_then(as_tag),
            occasion: object.get("occasion").and_then(as_tag),
            personality_type: object
                .get("personality_type")
                .or_else(|| object.get("personalityType"))
                .and_then(as_tag),
            relationship: object.get("relationship").and_then(as_tag),
        }
    }
}

/// Ingest every entry of a catalog payload, preserving order.
///
/// ```
/// use giftmatch_core::ingest_catalog;
/// use serde_json::json;
///
/// let entries = [json!({ "id": 1 }), json!("junk"), json!({ "id": 3 })];
/// let items = ingest_catalog(&entries);
/// assert!(items[0].is_ok());
/// assert!(items[1].is_err());
/// assert!(items[2].is_ok());
/// ```
#[must_use]
pub fn ingest_catalog(entries: &[Value]) -> Vec<Result<CatalogItem, IngestError>> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| CatalogItem::from_json_at(index, entry))
        .collect()
}

/// Return the interest vocabulary offered to requesters.
#[must_use]
pub fn known_interests() -> BTreeSet<Tag> {
    crate::tag_set(KNOWN_INTERESTS)
}

/// Collect the distinct interests present across `items`.
#[must_use]
pub fn catalog_interests<'a, I>(items: I) -> BTreeSet<Tag>
where
    I: IntoIterator<Item = &'a CatalogItem>,
{
    items
        .into_iter()
        .flat_map(|item| item.interests.iter().cloned())
        .collect()
}

fn display_fields(object: &Map<String, Value>) -> Map<String, Value> {
    object
        .iter()
        .filter(|(key, _)| !MATCHING_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

fn pair(value: Option<&Value>) -> (Option<&Value>, Option<&Value>) {
    match value.and_then(Value::as_array).map(Vec::as_slice) {
        Some([low, high]) => (Some(low), Some(high)),
        _ => (None, None),
    }
}

fn first_age(candidates: &[Option<&Value>]) -> Option<u32> {
    candidates.iter().flatten().find_map(|value| as_age(value))
}

fn first_number(candidates: &[Option<&Value>]) -> Option<f64> {
    candidates
        .iter()
        .flatten()
        .find_map(|value| as_number(value).filter(|number| *number >= 0.0))
}

fn as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn as_age(value: &Value) -> Option<u32> {
    as_u64(value).and_then(|age| u32::try_from(age).ok())
}

fn as_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

fn as_tag(value: &Value) -> Option<Tag> {
    value.as_str().and_then(Tag::parse)
}

fn as_tag_set(value: &Value) -> BTreeSet<Tag> {
    match value {
        Value::Array(entries) => entries.iter().filter_map(as_tag).collect(),
        Value::String(text) => crate::tag_set(text.split(',')),
        _ => BTreeSet::new(),
    }
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn missing_fields_take_defaults() {
        let item = CatalogItem::from_json(&json!({ "id": 4 })).expect("object");
        assert_eq!(item, CatalogItem::new(4));
    }

    #[rstest]
    fn wrong_types_take_defaults() {
        let item = CatalogItem::from_json(&json!({
            "id": "12",
            "min_age": -3,
            "max_age": "old",
            "min_budget": "cheap",
            "interests": 7,
            "gender": 1,
            "occasion": ["birthday"],
        }))
        .expect("object");
        assert_eq!(item.id, 12);
        assert_eq!(item.age_range, AgeRange::default());
        assert_eq!(item.budget_range.min, 0.0);
        assert!(item.interests.is_empty());
        assert_eq!(item.gender, Gender::Unisex);
        assert!(item.occasion.is_none());
    }

    #[rstest]
    fn camel_case_ranges_are_accepted() {
        let item = CatalogItem::from_json(&json!({
            "ageRange": [8, 14],
            "budgetRange": [20, "75.5"],
            "personalityType": "Reader",
        }))
        .expect("object");
        assert_eq!(item.age_range, AgeRange { min: 8, max: 14 });
        assert_eq!(item.budget_range, BudgetRange { min: 20.0, max: 75.5 });
        assert_eq!(
            item.personality_type.as_ref().map(Tag::as_str),
            Some("reader")
        );
    }

    #[rstest]
    fn inverted_ranges_are_kept_for_the_scorer_to_reject() {
        let item = CatalogItem::from_json(&json!({ "min_age": 40, "max_age": 10 }))
            .expect("object");
        assert!(item.age_range.validate().is_err());
    }

    #[rstest]
    #[case::min_above_default_max(json!({ "id": 7, "min_age": 120 }), 120, 120)]
    #[case::min_below_default_max(json!({ "id": 7, "min_age": 30 }), 30, DEFAULT_MAX_AGE)]
    #[case::max_only(json!({ "id": 7, "max_age": 12 }), DEFAULT_MIN_AGE, 12)]
    #[case::pair(json!({ "id": 7, "ageRange": [110, 130] }), 110, 130)]
    fn missing_age_bound_follows_the_given_one(
        #[case] payload: Value,
        #[case] min: u32,
        #[case] max: u32,
    ) {
        let item = CatalogItem::from_json(&payload).expect("object");
        assert_eq!(item.age_range, AgeRange { min, max });
        assert!(item.age_range.validate().is_ok());
    }

    #[rstest]
    fn display_fields_exclude_matching_keys() {
        let item = CatalogItem::from_json(&json!({
            "id": 1,
            "min_age": 1,
            "name_en": "Kite",
            "store": { "name_en": "Toy Town" },
        }))
        .expect("object");
        assert_eq!(item.display.len(), 2);
        assert_eq!(item.display["store"]["name_en"], "Toy Town");
        assert!(!item.display.contains_key("min_age"));
    }

    #[rstest]
    #[case(json!(null), "null")]
    #[case(json!([1, 2]), "array")]
    #[case(json!(3), "number")]
    fn non_objects_are_rejected(#[case] value: Value, #[case] found: &'static str) {
        assert_eq!(
            CatalogItem::from_json(&value),
            Err(IngestError::NotAnObject { index: 0, found })
        );
    }

    #[rstest]
    fn interests_accept_comma_separated_text() {
        let criteria = Criteria::from_json(&json!({ "interests": "Music, art,, " }));
        let names: Vec<&str> = criteria.interests.iter().map(Tag::as_str).collect();
        assert_eq!(names, ["art", "music"]);
    }

    #[rstest]
    #[case(json!({ "age": 30.5 }), None)]
    #[case(json!({ "age": "31" }), Some(31))]
    #[case(json!({ "age": -1 }), None)]
    #[case(json!({ "age": null }), None)]
    fn criteria_age_parsing(#[case] payload: Value, #[case] expected: Option<u32>) {
        assert_eq!(Criteria::from_json(&payload).age, expected);
    }

    #[rstest]
    #[case(json!({ "budget": 150 }), Some(150.0))]
    #[case(json!({ "budget": "99.5" }), Some(99.5))]
    #[case(json!({ "budget": -10 }), None)]
    #[case(json!({ "budget": true }), None)]
    fn criteria_budget_parsing(#[case] payload: Value, #[case] expected: Option<f64>) {
        assert_eq!(Criteria::from_json(&payload).budget, expected);
    }

    #[rstest]
    fn criteria_from_non_object_is_empty() {
        assert_eq!(Criteria::from_json(&json!("age=3")), Criteria::default());
    }

    #[rstest]
    fn criteria_keeps_relationship() {
        let criteria = Criteria::from_json(&json!({ "relationship": "Sister" }));
        assert_eq!(
            criteria.relationship.as_ref().map(Tag::as_str),
            Some("sister")
        );
    }

    #[rstest]
    fn ingest_reports_entry_position() {
        let results = ingest_catalog(&[json!({}), json!(false)]);
        assert_eq!(
            results.get(1),
            Some(&Err(IngestError::NotAnObject {
                index: 1,
                found: "boolean",
            }))
        );
    }

    #[rstest]
    fn catalog_interests_are_distinct() {
        let items = [
            CatalogItem::new(1).with_interests(["gaming", "music"]),
            CatalogItem::new(2).with_interests(["Music", "art"]),
        ];
        let names: Vec<String> = catalog_interests(&items)
            .into_iter()
            .map(|tag| tag.to_string())
            .collect();
        assert_eq!(names, ["art", "gaming", "music"]);
    }

    #[rstest]
    fn known_interests_are_normalised() {
        let known = known_interests();
        assert_eq!(known.len(), KNOWN_INTERESTS.len());
        assert!(known.contains(&Tag::parse("gaming").expect("tag")));
    }
}
