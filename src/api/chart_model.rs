use indexmap::IndexMap;

use crate::core::NameEntry;

/// Names currently plotted on the chart, in the order they were first added.
///
/// Keys are the entries' original-case names. Re-adding a name swaps in the new
/// entry without moving it, so its color and draw order stay put.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartModel {
    entries: IndexMap<String, NameEntry>,
}

impl ChartModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `entry`, or replaces the entry with the same name in its slot.
    ///
    /// Returns `true` when an existing entry was replaced.
    pub fn add_entry(&mut self, entry: NameEntry) -> bool {
        self.entries
            .insert(entry.name().to_owned(), entry)
            .is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in insertion order; this order drives color and draw order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &NameEntry> {
        self.entries.values()
    }

    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
