//! Scroll event debouncing for wheel notches.
//!
//! Accumulates scroll deltas over a time window so bursts from
//! high-resolution devices (trackpads, precision mice) turn into a sane
//! number of one-item notches instead of spinning a wheel to its end.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut scroll_helper = ScrollHelper::default();
//!
//! // In event loop:
//! for direction in scroll_helper.notches(scroll_delta) {
//!     picker.discrete_scroll(axis, direction);
//! }
//! ```

use std::time::{Duration, Instant};

use crate::picker::ScrollDirection;

/// Helper for debouncing scroll events into notches.
#[derive(Debug, Clone)]
pub struct ScrollHelper {
    /// Accumulated scroll delta since last emission
    accumulated_delta: i32,
    /// Time of last scroll event
    last_event: Option<Instant>,
    /// Debounce duration in milliseconds
    debounce_ms: u64,
    /// Scroll delta per notch
    threshold: i32,
}

impl Default for ScrollHelper {
    fn default() -> Self {
        Self::new(50, 1)
    }
}

impl ScrollHelper {
    /// Create a new scroll helper with specified debounce time and threshold.
    ///
    /// # Arguments
    /// * `debounce_ms` - Time window for accumulating scroll events (milliseconds)
    /// * `threshold` - Accumulated delta that makes up one notch
    pub fn new(debounce_ms: u64, threshold: i32) -> Self {
        Self {
            accumulated_delta: 0,
            last_event: None,
            debounce_ms,
            threshold: threshold.max(1),
        }
    }

    /// Accumulate a scroll delta at `now` and return the whole notches it
    /// completes, as a signed count. Leftover delta carries over within the
    /// debounce window.
    pub fn accumulate_at(&mut self, delta: i32, now: Instant) -> i32 {
        let fresh = match self.last_event {
            Some(last) => now.duration_since(last) > Duration::from_millis(self.debounce_ms),
            None => true,
        };
        if fresh || delta.signum() != self.accumulated_delta.signum() {
            self.accumulated_delta = 0;
        }
        self.accumulated_delta += delta;
        self.last_event = Some(now);

        let notches = self.accumulated_delta / self.threshold;
        self.accumulated_delta -= notches * self.threshold;
        notches
    }

    /// Accumulate a delta and expand the completed notches into directions.
    pub fn notches(&mut self, delta: i32) -> Vec<ScrollDirection> {
        let count = self.accumulate_at(delta, Instant::now());
        let direction = if count < 0 {
            ScrollDirection::Previous
        } else {
            ScrollDirection::Next
        };
        vec![direction; count.unsigned_abs() as usize]
    }

    /// Reset the scroll helper state.
    pub fn reset(&mut self) {
        self.accumulated_delta = 0;
        self.last_event = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate_within_debounce() {
        let mut helper = ScrollHelper::new(100, 3);
        let t = Instant::now();

        // Below threshold
        assert_eq!(helper.accumulate_at(1, t), 0);
        assert_eq!(helper.accumulate_at(1, t + Duration::from_millis(10)), 0);

        // Third event completes a notch
        assert_eq!(helper.accumulate_at(1, t + Duration::from_millis(20)), 1);
    }

    #[test]
    fn test_accumulate_after_debounce() {
        let mut helper = ScrollHelper::new(10, 3);
        let t = Instant::now();

        assert_eq!(helper.accumulate_at(2, t), 0);

        // Partial delta is forgotten once the window expires
        assert_eq!(helper.accumulate_at(2, t + Duration::from_millis(20)), 0);
        assert_eq!(helper.accumulate_at(1, t + Duration::from_millis(25)), 1);
    }

    #[test]
    fn test_direction_change_restarts() {
        let mut helper = ScrollHelper::new(100, 2);
        let t = Instant::now();

        assert_eq!(helper.accumulate_at(1, t), 0);
        assert_eq!(helper.accumulate_at(-1, t), 0);
        assert_eq!(helper.accumulate_at(-1, t), -1);
    }

    #[test]
    fn test_notches_default_is_one_per_event() {
        let mut helper = ScrollHelper::default();
        assert_eq!(helper.notches(1), vec![ScrollDirection::Next]);
        assert_eq!(helper.notches(-1), vec![ScrollDirection::Previous]);
        assert_eq!(
            helper.notches(-3),
            vec![ScrollDirection::Previous; 3]
        );
    }

    #[test]
    fn test_reset() {
        let mut helper = ScrollHelper::new(1000, 5);
        helper.accumulate_at(4, Instant::now());
        helper.reset();
        assert_eq!(helper.accumulate_at(1, Instant::now()), 0);
    }
}
