use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::EntityLabel;

/// A single "<subject> <filler> <object>" match from the relation primitive
///
/// Subject and object texts are tag-encoded (`word/TAG word/TAG`) and must be
/// decoded back to plain words before use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationMatch {
    pub subject_label: EntityLabel,
    pub subject_text: String,
    /// Tag-encoded tokens between subject and object
    pub filler: String,
    pub object_label: EntityLabel,
    pub object_text: String,
}

/// Mapping from speaker fingerprint to firm name
///
/// The first firm recorded for a fingerprint is kept; later writes are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationMap {
    firms: HashMap<String, String>,
}

impl RelationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a firm unless the fingerprint already has one.
    /// Returns true when the entry was written.
    pub fn insert_if_absent(&mut self, fingerprint: String, firm: String) -> bool {
        if self.firms.contains_key(&fingerprint) {
            return false;
        }
        self.firms.insert(fingerprint, firm);
        true
    }

    /// Fill fingerprints missing here from `other`, never overwriting.
    /// Returns the number of entries added.
    pub fn merge_missing(&mut self, other: RelationMap) -> usize {
        let mut added = 0;
        for (fingerprint, firm) in other.firms {
            if self.insert_if_absent(fingerprint, firm) {
                added += 1;
            }
        }
        added
    }

    pub fn get(&self, fingerprint: &str) -> Option<&str> {
        self.firms.get(fingerprint).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.firms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.firms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.firms.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
