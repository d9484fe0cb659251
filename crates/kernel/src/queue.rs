use std::collections::VecDeque;

use debugdraw_common::FrameIndex;
use parking_lot::Mutex;

use crate::entry::TimedEntry;

/// FIFO of values waiting for their expiration frame.
///
/// Any thread may push. Eviction pops one entry at a time and runs the
/// callback with the lock released, so the callback may push again.
#[derive(Debug)]
pub struct ExpiringQueue<T> {
    entries: Mutex<VecDeque<TimedEntry<T>>>,
}

impl<T> ExpiringQueue<T> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(VecDeque::new()),
        }
    }

    pub fn push(&self, entry: TimedEntry<T>) {
        self.entries.lock().push_back(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Pop expired entries from the head until the head is still live.
    ///
    /// Assumes expirations were pushed in non-decreasing order. An entry that
    /// expires earlier than something ahead of it stays until the head clears.
    /// Returns the number of entries evicted.
    pub fn evict_expired(&self, frame: FrameIndex, mut on_evict: impl FnMut(T)) -> usize {
        let mut evicted = 0;
        loop {
            let next = {
                let mut entries = self.entries.lock();
                let expired = entries.front().is_some_and(|head| head.is_expired(frame));
                if expired { entries.pop_front() } else { None }
            };
            let Some(entry) = next else {
                break;
            };
            on_evict(entry.value);
            evicted += 1;
        }
        evicted
    }

    /// Evict every expired entry regardless of its position in the queue.
    ///
    /// Exact expiry at the cost of a full pass per call. Relative order of
    /// surviving entries is preserved.
    pub fn evict_expired_full_scan(&self, frame: FrameIndex, mut on_evict: impl FnMut(T)) -> usize {
        let expired: Vec<T> = {
            let mut entries = self.entries.lock();
            let mut expired = Vec::new();
            let mut kept = VecDeque::with_capacity(entries.len());
            for entry in entries.drain(..) {
                if entry.is_expired(frame) {
                    expired.push(entry.value);
                } else {
                    kept.push_back(entry);
                }
            }
            *entries = kept;
            expired
        };
        let evicted = expired.len();
        for value in expired {
            on_evict(value);
        }
        evicted
    }

    /// Remove every entry, live or not.
    pub fn drain(&self) -> Vec<TimedEntry<T>> {
        self.entries.lock().drain(..).collect()
    }
}

impl<T: Clone> ExpiringQueue<T> {
    /// Snapshot of the queued values in FIFO order.
    pub fn values(&self) -> Vec<T> {
        self.entries.lock().iter().map(|e| e.value.clone()).collect()
    }
}

impl<T> Default for ExpiringQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue_with(expirations: &[(u32, FrameIndex)]) -> ExpiringQueue<u32> {
        let q = ExpiringQueue::new();
        for &(v, at) in expirations {
            q.push(TimedEntry::new(v, at));
        }
        q
    }

    #[test]
    fn entry_present_until_expiration_frame() {
        let q = ExpiringQueue::new();
        q.push(TimedEntry::lingering(1u32, 0, 10));
        for frame in 0..10 {
            assert_eq!(q.evict_expired(frame, |_| {}), 0, "frame {frame}");
            assert_eq!(q.len(), 1);
        }
        assert_eq!(q.evict_expired(10, |_| {}), 1);
        assert!(q.is_empty());
    }

    #[test]
    fn evicts_in_fifo_order() {
        let q = queue_with(&[(1, 3), (2, 3), (3, 4), (4, 9)]);
        let mut seen = Vec::new();
        let n = q.evict_expired(5, |v| seen.push(v));
        assert_eq!(n, 3);
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(q.values(), vec![4]);
    }

    /// A short linger pushed behind a long one is held back by the head.
    #[test]
    fn shorter_linger_behind_longer_stays_stale() {
        let q = queue_with(&[(1, 120), (2, 5)]);
        assert_eq!(q.evict_expired(10, |_| {}), 0);
        assert_eq!(q.values(), vec![1, 2]);

        let mut seen = Vec::new();
        q.evict_expired(120, |v| seen.push(v));
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn full_scan_evicts_out_of_order_entries() {
        let q = queue_with(&[(1, 120), (2, 5), (3, 130)]);
        let mut seen = Vec::new();
        assert_eq!(q.evict_expired_full_scan(10, |v| seen.push(v)), 1);
        assert_eq!(seen, vec![2]);
        assert_eq!(q.values(), vec![1, 3]);
    }

    #[test]
    fn callback_may_push_without_deadlock() {
        let q = queue_with(&[(1, 0)]);
        let n = q.evict_expired(0, |v| q.push(TimedEntry::new(v + 1, 50)));
        assert_eq!(n, 1);
        assert_eq!(q.values(), vec![2]);
    }

    #[test]
    fn drain_returns_everything() {
        let q = queue_with(&[(1, 100), (2, 200)]);
        let drained = q.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[1].expires_at, 200);
        assert!(q.is_empty());
    }

    #[test]
    fn concurrent_producers() {
        let q = ExpiringQueue::new();
        std::thread::scope(|s| {
            for t in 0..4u32 {
                let q = &q;
                s.spawn(move || {
                    for i in 0..100u32 {
                        q.push(TimedEntry::new(t * 1000 + i, 1));
                    }
                });
            }
        });
        assert_eq!(q.len(), 400);
        assert_eq!(q.evict_expired(1, |_| {}), 400);
    }
}
