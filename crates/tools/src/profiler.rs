use std::time::{Duration, Instant};

/// Rolling history of how long each sweep took.
#[derive(Debug)]
pub struct SweepProfiler {
    history: Vec<Duration>,
    capacity: usize,
    next: usize,
    filled: bool,
}

impl SweepProfiler {
    /// Keep the last `capacity` samples. A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            history: vec![Duration::ZERO; capacity],
            capacity,
            next: 0,
            filled: false,
        }
    }

    pub fn record(&mut self, sample: Duration) {
        self.history[self.next] = sample;
        self.next = (self.next + 1) % self.capacity;
        if self.next == 0 {
            self.filled = true;
        }
    }

    /// Run `f`, record its wall time, and pass its result through.
    pub fn measure<T>(&mut self, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        let elapsed = start.elapsed();
        self.record(elapsed);
        if elapsed > Duration::from_millis(2) {
            tracing::debug!(?elapsed, "slow debug draw sweep");
        }
        out
    }

    fn samples(&self) -> &[Duration] {
        &self.history[..self.count()]
    }

    pub fn count(&self) -> usize {
        if self.filled { self.capacity } else { self.next }
    }

    pub fn average(&self) -> Duration {
        let samples = self.samples();
        if samples.is_empty() {
            return Duration::ZERO;
        }
        samples.iter().sum::<Duration>() / samples.len() as u32
    }

    pub fn max(&self) -> Duration {
        self.samples().iter().copied().max().unwrap_or_default()
    }

    pub fn min(&self) -> Duration {
        self.samples().iter().copied().min().unwrap_or_default()
    }
}
