//! Relation Table
//!
//! Symmetric, signed strength between pairs of labels (for example how one
//! ability fares against another). Each pair is stored once under its
//! lexicographically ordered key; looking it up in the other order negates
//! the value.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::ModelError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationTable {
    relations: BTreeMap<String, BTreeMap<String, i32>>,
}

impl RelationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `strength` for the ordered pair of `first` and `second`.
    ///
    /// The labels are sorted before storing, so `strength` always belongs to
    /// the lexicographically smaller label. Blank labels are rejected.
    pub fn add_relationship(
        &mut self,
        first: &str,
        second: &str,
        strength: i32,
    ) -> Result<(), ModelError> {
        if first.trim().is_empty() || second.trim().is_empty() {
            return Err(ModelError::BlankRelationLabel {
                first: first.to_string(),
                second: second.to_string(),
            });
        }
        let (low, high) = if first > second {
            (second, first)
        } else {
            (first, second)
        };
        self.relations
            .entry(low.to_string())
            .or_default()
            .insert(high.to_string(), strength);
        Ok(())
    }

    /// Strength of `first` against `second`; 0 for unknown pairs
    pub fn relationship(&self, first: &str, second: &str) -> i32 {
        let (low, high, sign) = if first > second {
            (second, first, -1)
        } else {
            (first, second, 1)
        };
        self.relations
            .get(low)
            .and_then(|row| row.get(high))
            .map(|strength| strength * sign)
            .unwrap_or(0)
    }

    /// Every label that takes part in at least one relation
    pub fn labels(&self) -> BTreeSet<&str> {
        let mut labels = BTreeSet::new();
        for (low, row) in &self.relations {
            labels.insert(low.as_str());
            labels.extend(row.keys().map(String::as_str));
        }
        labels
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}
