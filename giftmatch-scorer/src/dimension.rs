//! Per-dimension scoring rules.
//!
//! Each rule returns partial credit in `0.0..=1.0`. Missing information is
//! never punished harshly: when a dimension cannot be evaluated the rule
//! falls back to a neutral score, and near misses keep a floor of credit.
#![forbid(unsafe_code)]

use std::collections::BTreeSet;

use giftmatch_core::{AgeRange, BudgetRange, Gender, Tag};

/// Credit for a dimension that matches outright.
pub const FULL_MATCH: f64 = 1.0;

/// Credit when the requester stated no interests.
pub const NEUTRAL_INTEREST: f64 = 0.6;

/// Credit when either side lacks a personality type.
pub const NEUTRAL_PERSONALITY: f64 = 0.6;
/// Credit for personality types that do not overlap.
pub const PERSONALITY_MISMATCH: f64 = 0.4;

/// Credit when the requester stated no occasion.
pub const NEUTRAL_OCCASION: f64 = 0.7;
/// Credit for items that suit any occasion.
pub const GENERAL_OCCASION: f64 = 0.7;
/// Credit for a different, specific occasion.
pub const OCCASION_MISMATCH: f64 = 0.4;
/// Item occasions treated as suiting every occasion.
pub const GENERAL_OCCASIONS: [&str; 2] = ["general", "any"];

/// Credit when the requester stated no age.
pub const NEUTRAL_AGE: f64 = 0.6;
/// Lowest credit for an age outside the item's range.
pub const AGE_FLOOR: f64 = 0.4;
/// Years outside the range at which age credit reaches zero before flooring.
pub const AGE_DISTANCE_DIVISOR: f64 = 20.0;

/// Credit when the requester stated no budget.
pub const NEUTRAL_BUDGET: f64 = 0.6;
/// Lowest credit for a budget outside the item's range.
pub const BUDGET_FLOOR: f64 = 0.4;
/// Flat overage at which over-budget credit reaches zero before flooring.
pub const BUDGET_OVERAGE_DIVISOR: f64 = 100.0;

/// Credit when the requester stated no gender for a gendered item.
pub const NEUTRAL_GENDER: f64 = 0.7;
/// Credit for a gendered item aimed at a different gender.
pub const GENDER_MISMATCH: f64 = 0.3;

/// Fraction of the requested interests the item covers.
///
/// Returns the score together with the shared interests. An empty request
/// scores [`NEUTRAL_INTEREST`] and shares nothing.
#[must_use]
pub fn interest_score(item: &BTreeSet<Tag>, requested: &BTreeSet<Tag>) -> (f64, Vec<Tag>) {
    if requested.is_empty() {
        return (NEUTRAL_INTEREST, Vec::new());
    }
    let common: Vec<Tag> = requested.intersection(item).cloned().collect();
    (ratio(common.len(), requested.len()), common)
}

/// Personality fit: full credit when one type contains the other.
#[must_use]
pub fn personality_score(item: Option<&Tag>, requested: Option<&Tag>) -> f64 {
    match (item, requested) {
        (Some(offered), Some(wanted)) if offered.overlaps(wanted) => FULL_MATCH,
        (Some(_), Some(_)) => PERSONALITY_MISMATCH,
        _ => NEUTRAL_PERSONALITY,
    }
}

/// Occasion fit: exact match, an any-occasion item, or a mismatch.
///
/// An item without an occasion counts as a mismatch once the requester has
/// named one.
#[must_use]
pub fn occasion_score(item: Option<&Tag>, requested: Option<&Tag>) -> f64 {
    let Some(wanted) = requested else {
        return NEUTRAL_OCCASION;
    };
    match item {
        Some(offered) if offered == wanted => FULL_MATCH,
        Some(offered) if GENERAL_OCCASIONS.contains(&offered.as_str()) => GENERAL_OCCASION,
        _ => OCCASION_MISMATCH,
    }
}

/// Age fit: full credit inside the range, decaying with distance outside.
#[expect(
    clippy::float_arithmetic,
    reason = "age credit decays linearly with distance from the range"
)]
#[must_use]
pub fn age_score(range: AgeRange, age: Option<u32>) -> f64 {
    let Some(years) = age else {
        return NEUTRAL_AGE;
    };
    if range.contains(years) {
        return FULL_MATCH;
    }
    let distance = f64::from(range.nearest_boundary_distance(years));
    AGE_FLOOR.max(FULL_MATCH - distance / AGE_DISTANCE_DIVISOR)
}

/// Budget fit: full credit inside the range, decaying with the shortfall or
/// overage outside it.
///
/// A shortfall is measured relative to the item's minimum price; an overage
/// is measured against the flat [`BUDGET_OVERAGE_DIVISOR`].
#[expect(
    clippy::float_arithmetic,
    reason = "budget credit decays linearly with distance from the range"
)]
#[must_use]
pub fn budget_score(range: BudgetRange, budget: Option<f64>) -> f64 {
    let Some(amount) = budget else {
        return NEUTRAL_BUDGET;
    };
    if range.contains(amount) {
        return FULL_MATCH;
    }
    let penalty = if amount < range.min {
        (range.min - amount) / range.min.max(1.0)
    } else {
        (amount - range.max) / BUDGET_OVERAGE_DIVISOR
    };
    BUDGET_FLOOR.max(FULL_MATCH - penalty)
}

/// Gender fit, used only by weight tables that give gender a weight.
///
/// Unisex items suit everyone; a gendered item earns neutral credit when the
/// requester stated no gender.
#[must_use]
pub fn gender_score(item: Gender, requested: Option<&Tag>) -> f64 {
    if item == Gender::Unisex {
        return FULL_MATCH;
    }
    match requested {
        None => NEUTRAL_GENDER,
        Some(wanted) if wanted.as_str() == item.as_str() => FULL_MATCH,
        Some(_) => GENDER_MISMATCH,
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "tag counts are small enough to convert exactly"
)]
fn ratio(part: usize, whole: usize) -> f64 {
    part as f64 / whole as f64
}
