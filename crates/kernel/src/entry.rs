use debugdraw_common::FrameIndex;

/// A value paired with the frame at which it stops being live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedEntry<T> {
    pub value: T,
    pub expires_at: FrameIndex,
}

impl<T> TimedEntry<T> {
    pub fn new(value: T, expires_at: FrameIndex) -> Self {
        Self { value, expires_at }
    }

    /// Entry created at `now` that lingers for `frames` frames.
    pub fn lingering(value: T, now: FrameIndex, frames: u32) -> Self {
        Self::new(value, now.saturating_add(u64::from(frames)))
    }

    /// True once `frame` has reached the expiration frame.
    pub fn is_expired(&self, frame: FrameIndex) -> bool {
        self.expires_at <= frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_for_exactly_linger_frames() {
        let e = TimedEntry::lingering("x", 10, 3);
        assert_eq!(e.expires_at, 13);
        assert!(!e.is_expired(10));
        assert!(!e.is_expired(12));
        assert!(e.is_expired(13));
        assert!(e.is_expired(14));
    }

    #[test]
    fn zero_linger_expires_immediately() {
        let e = TimedEntry::lingering((), 4, 0);
        assert!(e.is_expired(4));
    }

    #[test]
    fn linger_saturates() {
        let e = TimedEntry::lingering((), u64::MAX - 1, 5);
        assert_eq!(e.expires_at, u64::MAX);
    }
}
