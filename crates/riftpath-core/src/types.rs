//! Core domain types shared across the Riftpath crates.

use serde::{Deserialize, Serialize};

/// A single champion entry from the dataset: a unique id plus the ordered
/// list of categorical tags the similarity edges are derived from.
///
/// Tag order matters. The builder's edge rules compare tag positions, and
/// the observed datasets carry one or two tags per champion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChampionRecord {
    pub id: String,
    pub tags: Vec<String>,
}

impl ChampionRecord {
    pub fn new(id: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            tags,
        }
    }

    /// The champion's primary tag, if any.
    pub fn primary_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }

    /// The secondary tag, present only on two-tag champions.
    pub fn secondary_tag(&self) -> Option<&str> {
        self.tags.get(1).map(String::as_str)
    }
}
