use std::collections::BTreeMap;

use debugdraw_common::FrameIndex;

use crate::entry::TimedEntry;

/// Keyed on-screen text with per-key expiration.
///
/// BTreeMap keeps iteration (and therefore render order) sorted by key.
#[derive(Debug, Clone, Default)]
pub struct TextTable {
    entries: BTreeMap<String, TimedEntry<String>>,
}

impl TextTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `key`, resetting its expiration.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>, expires_at: FrameIndex) {
        self.entries
            .insert(key.into(), TimedEntry::new(value.into(), expires_at));
    }

    pub fn get(&self, key: &str) -> Option<&TimedEntry<String>> {
        self.entries.get(key)
    }

    /// Drop every entry whose expiration frame has been reached.
    pub fn evict_expired(&mut self, frame: FrameIndex) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, e| !e.is_expired(frame));
        before - self.entries.len()
    }

    /// Key/value pairs in render order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, e)| (k.as_str(), e.value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_twice_keeps_one_entry() {
        let mut t = TextTable::new();
        t.set("fps", "60", 5);
        t.set("fps", "60", 9);
        assert_eq!(t.len(), 1);
        assert_eq!(t.get("fps").unwrap().expires_at, 9);
    }

    #[test]
    fn overwrite_changes_value() {
        let mut t = TextTable::new();
        t.set("state", "idle", 5);
        t.set("state", "running", 5);
        assert_eq!(t.get("state").unwrap().value, "running");
    }

    #[test]
    fn evicts_at_expiration_frame() {
        let mut t = TextTable::new();
        t.set("a", "1", 3);
        t.set("b", "2", 5);
        assert_eq!(t.evict_expired(2), 0);
        assert_eq!(t.evict_expired(3), 1);
        assert!(t.get("a").is_none());
        assert_eq!(t.evict_expired(5), 1);
        assert!(t.is_empty());
    }

    #[test]
    fn iterates_sorted_by_key() {
        let mut t = TextTable::new();
        t.set("zeta", "1", 5);
        t.set("alpha", "2", 5);
        t.set("mid", "3", 5);
        let keys: Vec<&str> = t.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["alpha", "mid", "zeta"]);
    }
}
