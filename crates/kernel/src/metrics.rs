use std::collections::BTreeMap;

use parking_lot::Mutex;

/// Per-frame counters accumulated from any thread.
///
/// The sweeper drains the table once per frame and folds the totals into text.
#[derive(Debug, Default)]
pub struct MetricsTable {
    totals: Mutex<BTreeMap<String, i64>>,
}

impl MetricsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the counter for `key`, creating it at zero if needed.
    pub fn increment(&self, key: &str, amount: i64) {
        let mut totals = self.totals.lock();
        match totals.get_mut(key) {
            Some(total) => *total += amount,
            None => {
                totals.insert(key.to_owned(), amount);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<i64> {
        self.totals.lock().get(key).copied()
    }

    /// Take all totals and leave the table empty.
    pub fn drain(&self) -> Vec<(String, i64)> {
        std::mem::take(&mut *self.totals.lock()).into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.totals.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increments_accumulate() {
        let m = MetricsTable::new();
        m.increment("x", 3);
        m.increment("x", 2);
        assert_eq!(m.get("x"), Some(5));
    }

    #[test]
    fn drain_clears() {
        let m = MetricsTable::new();
        m.increment("b", 1);
        m.increment("a", 4);
        assert_eq!(m.drain(), vec![("a".to_owned(), 4), ("b".to_owned(), 1)]);
        assert!(m.is_empty());
        assert_eq!(m.get("a"), None);
    }

    #[test]
    fn concurrent_increments_sum() {
        let m = MetricsTable::new();
        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for _ in 0..1000 {
                        m.increment("hits", 1);
                    }
                });
            }
        });
        assert_eq!(m.get("hits"), Some(8000));
    }
}
