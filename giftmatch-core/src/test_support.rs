//! Test-only fixtures shared by unit and behaviour tests.

use std::collections::HashMap;

use crate::{
    AgeRange, BudgetRange, CatalogItem, Criteria, Evaluation, Gender, MatchDetails, ScoreError,
    Scorer,
};

/// `Scorer` returning pre-assigned totals keyed by item id.
///
/// Items without an assigned total score `0.0`. Items whose id is listed as
/// broken fail with [`ScoreError::InvalidAgeRange`], which lets ranking tests
/// exercise the skip path without hand-building malformed records.
#[derive(Debug, Clone, Default)]
pub struct FixedScorer {
    totals: HashMap<u64, f64>,
    broken: Vec<u64>,
}

impl FixedScorer {
    /// Assign `total` to the item with `id`.
    #[must_use]
    pub fn with_total(mut self, id: u64, total: f64) -> Self {
        self.totals.insert(id, total);
        self
    }

    /// Make scoring fail for the item with `id`.
    #[must_use]
    pub fn with_broken(mut self, id: u64) -> Self {
        self.broken.push(id);
        self
    }
}

impl Scorer for FixedScorer {
    fn evaluate(&self, item: &CatalogItem, _criteria: &Criteria) -> Result<Evaluation, ScoreError> {
        if self.broken.contains(&item.id) {
            return Err(ScoreError::InvalidAgeRange {
                item_id: item.id,
                source: crate::RangeError::Inverted { min: 1.0, max: 0.0 },
            });
        }
        let total = self.totals.get(&item.id).copied().unwrap_or(0.0);
        Ok(Evaluation {
            total,
            details: MatchDetails::default(),
        })
    }
}

/// Small catalog modelled on the gift finder's seed data.
///
/// Ids run from `1` to `6` in catalog order.
#[must_use]
pub fn sample_catalog() -> Vec<CatalogItem> {
    vec![
        gift(1, "Gaming Platform Gift Card", (13, 25), (20.0, 100.0))
            .with_occasion("birthday")
            .with_personality_type("gamer")
            .with_interests(["gaming", "technology"]),
        gift(2, "Professional Gaming Headset", (13, 30), (50.0, 200.0))
            .with_occasion("any")
            .with_personality_type("gamer")
            .with_interests(["gaming", "music", "technology"]),
        gift(3, "Ergonomic Gaming Chair", (15, 35), (150.0, 500.0))
            .with_occasion("graduation")
            .with_personality_type("gamer")
            .with_interests(["gaming", "comfort"]),
        gift(4, "Beauty Care Set", (15, 35), (30.0, 100.0))
            .with_gender(Gender::Female)
            .with_occasion("birthday")
            .with_personality_type("fashionista")
            .with_interests(["beauty", "fashion", "self-care"]),
        gift(5, "Premium Trendy Hoodie", (13, 30), (40.0, 120.0))
            .with_occasion("any")
            .with_personality_type("fashionista")
            .with_interests(["fashion", "style"]),
        gift(6, "Professional Sports Shoes", (13, 30), (50.0, 200.0))
            .with_occasion("any")
            .with_personality_type("athlete")
            .with_interests(["sports", "fitness", "running"]),
    ]
}

/// Criteria for a twenty-year-old gamer shopping for a birthday.
#[must_use]
pub fn gamer_criteria() -> Criteria {
    Criteria::new()
        .with_age(20)
        .with_budget(80.0)
        .with_interests(["gaming", "technology"])
        .with_occasion("birthday")
        .with_personality_type("gamer")
}

fn gift(id: u64, name: &str, ages: (u32, u32), budget: (f64, f64)) -> CatalogItem {
    CatalogItem::new(id)
        .with_age_range(AgeRange {
            min: ages.0,
            max: ages.1,
        })
        .with_budget_range(BudgetRange {
            min: budget.0,
            max: budget.1,
        })
        .with_display("name_en", name)
}
