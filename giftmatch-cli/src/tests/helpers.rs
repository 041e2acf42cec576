//! Test helpers for writing catalog and criteria fixtures to disk.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;

/// Write `contents` to `path`, panicking on failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Serialise `value` as JSON into `path`.
pub(super) fn write_json_file(path: &Utf8Path, value: &Value) {
    let payload = serde_json::to_vec_pretty(value).expect("serialise fixture");
    write_utf8(path, &payload);
}

/// Temporary directory holding a catalog and criteria file.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn catalog_path(&self) -> Utf8PathBuf {
        self.root.join("catalog.json")
    }

    pub(super) fn criteria_path(&self) -> Utf8PathBuf {
        self.root.join("criteria.json")
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write the sample catalog used across CLI tests.
    pub(super) fn write_sample_catalog(&self) {
        write_json_file(&self.catalog_path(), &sample_catalog_json());
    }

    /// Write criteria for a twenty-year-old gamer.
    pub(super) fn write_gamer_criteria(&self) {
        write_json_file(&self.criteria_path(), &gamer_criteria_json());
    }
}

/// A small catalog in the wire format, including one malformed entry.
pub(super) fn sample_catalog_json() -> Value {
    json!([
        {
            "id": 1,
            "name_en": "Gaming Platform Gift Card",
            "min_age": 13,
            "max_age": 25,
            "min_budget": 20,
            "max_budget": 100,
            "occasion": "birthday",
            "personality_type": "gamer",
            "interests": ["gaming", "technology"]
        },
        {
            "id": 2,
            "name_en": "Beauty Care Set",
            "ageRange": [15, 35],
            "budgetRange": [30, 100],
            "gender": "female",
            "occasion": "birthday",
            "personalityType": "fashionista",
            "interests": "beauty, fashion, self-care"
        },
        "not a gift",
        {
            "id": 3,
            "name_en": "Professional Sports Shoes",
            "min_age": 13,
            "max_age": 30,
            "min_budget": 50,
            "max_budget": 200,
            "occasion": "any",
            "personality_type": "athlete",
            "interests": ["sports", "fitness", "running"]
        }
    ])
}

/// Criteria matching the gift card exactly.
pub(super) fn gamer_criteria_json() -> Value {
    json!({
        "age": 20,
        "budget": 80,
        "interests": ["gaming", "technology"],
        "occasion": "birthday",
        "personalityType": "gamer"
    })
}
