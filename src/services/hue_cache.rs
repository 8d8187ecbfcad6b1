//! Per-hue memo of fetched colors.
//!
//! Entries are only valid for one saturation/lightness configuration; the
//! owner is responsible for clearing the cache when that changes.

use std::collections::HashMap;

use crate::models::{ColorRecord, Hue};

/// Cache of color records keyed by hue
#[derive(Debug, Clone, Default)]
pub struct HueCache {
    entries: HashMap<Hue, ColorRecord>,
}

impl HueCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the record cached for a hue
    pub fn get(&self, hue: Hue) -> Option<&ColorRecord> {
        self.entries.get(&hue)
    }

    pub fn contains(&self, hue: Hue) -> bool {
        self.entries.contains_key(&hue)
    }

    /// Store a record for a hue.
    ///
    /// An existing entry is never overwritten; the stored record is returned
    /// either way.
    pub fn insert(&mut self, hue: Hue, record: ColorRecord) -> &ColorRecord {
        self.entries.entry(hue).or_insert(record)
    }

    /// True when every hue has a cached record
    pub fn contains_all(&self, hues: &[Hue]) -> bool {
        hues.iter().all(|hue| self.entries.contains_key(hue))
    }

    /// Records for all hues in order, or `None` if any hue is missing
    pub fn get_all(&self, hues: &[Hue]) -> Option<Vec<ColorRecord>> {
        hues.iter()
            .map(|hue| self.entries.get(hue).cloned())
            .collect()
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        tracing::debug!(removed = removed, "Hue cache cleared");
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
