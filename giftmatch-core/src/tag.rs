//! Normalised free-form tags and the closed gender vocabulary.
//!
//! Tags compare case-insensitively: construction trims surrounding
//! whitespace and lowercases the text once, so later comparisons are plain
//! string equality.
//!
//! # Examples
//! ```
//! use giftmatch_core::Tag;
//!
//! let tag = Tag::parse("  Gaming ").expect("non-blank tag");
//! assert_eq!(tag.as_str(), "gaming");
//! assert!(Tag::parse("   ").is_none());
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A trimmed, lowercase label such as an interest, occasion or personality.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

impl Tag {
    /// Normalise `raw`, returning `None` when nothing but whitespace remains.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_lowercase()))
        }
    }

    /// Borrow the normalised text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Report whether either tag contains the other.
    ///
    /// ```
    /// use giftmatch_core::Tag;
    ///
    /// let gamer = Tag::parse("gamer").expect("tag");
    /// let casual = Tag::parse("casual gamer").expect("tag");
    /// assert!(gamer.overlaps(&casual));
    /// assert!(casual.overlaps(&gamer));
    /// ```
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.0.contains(other.as_str()) || other.0.contains(self.as_str())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).ok_or_else(|| serde::de::Error::custom("tag must not be blank"))
    }
}

/// Normalise a sequence of raw labels into a de-duplicated tag set.
///
/// Blank entries are dropped.
///
/// ```
/// use giftmatch_core::tag_set;
///
/// let tags = tag_set(["Music", "music ", "", "Art"]);
/// let names: Vec<&str> = tags.iter().map(|tag| tag.as_str()).collect();
/// assert_eq!(names, ["art", "music"]);
/// ```
#[must_use]
pub fn tag_set<I, S>(raw: I) -> BTreeSet<Tag>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|label| Tag::parse(label.as_ref()))
        .collect()
}

/// Intended recipient gender of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gender {
    /// Aimed at male recipients.
    Male,
    /// Aimed at female recipients.
    Female,
    /// Suitable for anyone.
    #[default]
    Unisex,
}

/// Error returned when parsing an unknown gender label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown gender '{0}'")]
pub struct UnknownGender(pub String);

impl Gender {
    /// Return the gender as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Unisex => "unisex",
        }
    }

    /// Resolve an optional raw label, treating absent or unknown labels as
    /// [`Gender::Unisex`].
    #[must_use]
    pub fn resolve(raw: Option<&str>) -> Self {
        raw.and_then(|label| label.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "unisex" => Ok(Self::Unisex),
            _ => Err(UnknownGender(s.to_owned())),
        }
    }
}

impl Serialize for Gender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
