use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Source of the audio timeline, in seconds. All scheduling is expressed
/// against this clock so the sink can play events sample-accurately.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Reads the sample counter advanced by the output callback.
#[derive(Debug, Clone)]
pub struct SampleClock {
    counter: Arc<AtomicU64>,
    sample_rate: f64,
}

impl SampleClock {
    pub fn new(counter: Arc<AtomicU64>, sample_rate: u32) -> Self {
        Self {
            counter,
            sample_rate: sample_rate as f64,
        }
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }
}

impl Clock for SampleClock {
    fn now(&self) -> f64 {
        self.counter.load(Ordering::Relaxed) as f64 / self.sample_rate
    }
}

/// Wall-clock time since construction, for running without an audio device.
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    bits: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            bits: Arc::new(AtomicU64::new(start.to_bits())),
        }
    }

    pub fn set(&self, seconds: f64) {
        self.bits.store(seconds.to_bits(), Ordering::Relaxed);
    }

    pub fn advance(&self, seconds: f64) {
        self.set(self.now() + seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_clock_divides_by_rate() {
        let counter = Arc::new(AtomicU64::new(0));
        let clock = SampleClock::new(counter.clone(), 48_000);
        assert_eq!(clock.now(), 0.0);
        counter.fetch_add(24_000, Ordering::Relaxed);
        assert_eq!(clock.now(), 0.5);
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new(1.0);
        let other = clock.clone();
        clock.advance(0.25);
        assert_eq!(other.now(), 1.25);
        other.set(3.0);
        assert_eq!(clock.now(), 3.0);
    }

    #[test]
    fn system_clock_moves_forward() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
