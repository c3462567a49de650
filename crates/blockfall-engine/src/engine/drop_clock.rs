use std::time::Duration;

/// Gravity timer accumulating wall-clock time between automatic drops.
///
/// The clock fires only once the accumulated time strictly exceeds the
/// interval, and firing drains the whole accumulator instead of carrying
/// the excess over.
#[derive(Debug, Clone)]
pub struct DropClock {
    interval: Duration,
    accumulated: Duration,
}

impl DropClock {
    /// Interval between automatic drops when none is configured.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Adds `elapsed` to the accumulator and reports whether gravity
    /// fires. An accumulated time exactly equal to the interval does not
    /// fire yet.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.accumulated += elapsed;
        if self.accumulated > self.interval {
            self.accumulated = Duration::ZERO;
            return true;
        }
        false
    }

    /// Drains the accumulator, postponing the next automatic drop by a
    /// full interval.
    pub const fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

impl Default for DropClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_only_past_the_interval() {
        let mut clock = DropClock::new(Duration::from_millis(1000));
        assert!(!clock.advance(Duration::from_millis(600)));
        // Exactly at the interval: not yet.
        assert!(!clock.advance(Duration::from_millis(400)));
        assert!(clock.advance(Duration::from_millis(1)));
    }

    #[test]
    fn test_firing_drains_the_accumulator() {
        let mut clock = DropClock::new(Duration::from_millis(100));
        // Fires, and the 150ms excess is discarded rather than carried.
        assert!(clock.advance(Duration::from_millis(250)));
        assert!(!clock.advance(Duration::from_millis(100)));
        assert!(clock.advance(Duration::from_millis(1)));
    }

    #[test]
    fn test_reset_postpones_the_next_fire() {
        let mut clock = DropClock::new(Duration::from_millis(100));
        assert!(!clock.advance(Duration::from_millis(99)));
        clock.reset();
        assert!(!clock.advance(Duration::from_millis(100)));
        assert!(clock.advance(Duration::from_millis(1)));
    }
}
