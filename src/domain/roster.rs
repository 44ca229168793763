use serde::{Deserialize, Serialize};

/// One person eligible for the currently selected part and fee type.
///
/// The identifier is an opaque registration-number or phone token; display
/// names are not guaranteed unique by the source data.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterEntry {
    pub display_name: String,
    pub identifier: String,
}

impl RosterEntry {
    pub fn new(display_name: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            identifier: identifier.into(),
        }
    }
}

/// Ordered roster cache for the active (part, fee type) selection.
///
/// Replaced wholesale on every fetch; there is no incremental update.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    /// Replaces the cache with a freshly fetched roster.
    pub fn replace(&mut self, entries: Vec<RosterEntry>) {
        self.entries = entries;
    }

    /// Entries whose display name contains `prefix` case-insensitively, in
    /// roster order. An empty prefix matches nothing.
    pub fn matches(&self, prefix: &str) -> Vec<&RosterEntry> {
        if prefix.is_empty() {
            return Vec::new();
        }
        let needle = prefix.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.display_name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Identifier of the first entry whose display name equals `name`.
    /// First match wins when duplicates exist.
    pub fn identifier_for(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.display_name == name)
            .map(|entry| entry.identifier.as_str())
    }
}
