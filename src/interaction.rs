//! Interaction time tracking.
//!
//! Accumulates the time an annotator actively spends on the current element.
//! Gaps between events longer than the idle threshold are assumed to be
//! breaks and contribute nothing, so walking away from the keyboard does not
//! inflate the reported effort. The accumulator is reported with each label
//! submission and zeroed once the submission sticks.
//!
//! The clock is always passed in explicitly; the `*_now` wrappers exist for
//! call sites, the explicit forms for tests.

use std::time::{Duration, Instant};

/// Gap length above which time is counted as idle rather than engagement.
pub const DEFAULT_IDLE_THRESHOLD: Duration = Duration::from_millis(15_000);

#[derive(Debug, Clone)]
pub struct InteractionTimer {
    last_event: Instant,
    accumulated: Duration,
    idle_threshold: Duration,
}

impl InteractionTimer {
    pub fn new(idle_threshold: Duration, now: Instant) -> Self {
        InteractionTimer {
            last_event: now,
            accumulated: Duration::ZERO,
            idle_threshold,
        }
    }

    pub fn start(idle_threshold: Duration) -> Self {
        Self::new(idle_threshold, Instant::now())
    }

    /// Record a click or key press. Gaps at or under the idle threshold are
    /// added to the accumulator; longer gaps are dropped. The last-event
    /// anchor always advances.
    pub fn record_activity_at(&mut self, now: Instant) {
        let gap = now.saturating_duration_since(self.last_event);
        if gap <= self.idle_threshold {
            self.accumulated += gap;
        }
        self.last_event = now;
    }

    pub fn record_activity(&mut self) {
        self.record_activity_at(Instant::now());
    }

    /// Zero the accumulator and re-anchor. Called after a successful label
    /// submission and when switching to a new element.
    pub fn reset_at(&mut self, now: Instant) {
        self.accumulated = Duration::ZERO;
        self.last_event = now;
    }

    pub fn reset(&mut self) {
        self.reset_at(Instant::now());
    }

    pub fn elapsed(&self) -> Duration {
        self.accumulated
    }

    /// Accumulated engagement in whole milliseconds, as sent to the server.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed().as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timer_at(start: Instant) -> InteractionTimer {
        InteractionTimer::new(DEFAULT_IDLE_THRESHOLD, start)
    }

    #[test]
    fn consecutive_short_gaps_sum() {
        let t0 = Instant::now();
        let mut timer = timer_at(t0);
        timer.record_activity_at(t0 + Duration::from_millis(2_000));
        timer.record_activity_at(t0 + Duration::from_millis(5_000));
        timer.record_activity_at(t0 + Duration::from_millis(5_500));
        assert_eq!(timer.elapsed_ms(), 5_500);
    }

    #[test]
    fn idle_gap_contributes_nothing() {
        let t0 = Instant::now();
        let mut timer = timer_at(t0);
        timer.record_activity_at(t0 + Duration::from_millis(1_000));
        // 20 s pause: the annotator walked away.
        timer.record_activity_at(t0 + Duration::from_millis(21_000));
        timer.record_activity_at(t0 + Duration::from_millis(22_000));
        assert_eq!(timer.elapsed_ms(), 2_000);
    }

    #[test]
    fn gap_exactly_at_threshold_counts() {
        let t0 = Instant::now();
        let mut timer = timer_at(t0);
        timer.record_activity_at(t0 + DEFAULT_IDLE_THRESHOLD);
        assert_eq!(timer.elapsed(), DEFAULT_IDLE_THRESHOLD);
    }

    #[test]
    fn idle_gap_still_advances_the_anchor() {
        let t0 = Instant::now();
        let mut timer = timer_at(t0);
        timer.record_activity_at(t0 + Duration::from_millis(60_000));
        assert_eq!(timer.elapsed_ms(), 0);
        // The next short gap is measured from the idle event, not from t0.
        timer.record_activity_at(t0 + Duration::from_millis(61_000));
        assert_eq!(timer.elapsed_ms(), 1_000);
    }

    #[test]
    fn reset_zeroes_regardless_of_accumulation() {
        let t0 = Instant::now();
        let mut timer = timer_at(t0);
        timer.record_activity_at(t0 + Duration::from_millis(9_000));
        assert!(timer.elapsed_ms() > 0);
        timer.reset_at(t0 + Duration::from_millis(9_000));
        assert_eq!(timer.elapsed_ms(), 0);
        // Accumulation resumes from the new anchor.
        timer.record_activity_at(t0 + Duration::from_millis(10_000));
        assert_eq!(timer.elapsed_ms(), 1_000);
    }

    #[test]
    fn accumulator_never_decreases_on_activity() {
        let t0 = Instant::now();
        let mut timer = timer_at(t0);
        let mut previous = Duration::ZERO;
        for ms in [100u64, 300, 16_000, 16_200, 40_000, 40_001] {
            timer.record_activity_at(t0 + Duration::from_millis(ms));
            assert!(timer.elapsed() >= previous);
            previous = timer.elapsed();
        }
    }
}
