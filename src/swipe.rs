//! Horizontal swipe classification for touch input.
//!
//! A swipe is the horizontal distance between touch start and touch end.
//! Only movement strictly beyond the threshold counts; shorter or mostly
//! vertical gestures fall in the dead zone and are ignored.

use serde::Serialize;

/// Default minimum horizontal travel, in CSS pixels.
pub const DEFAULT_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    /// Finger moved right to left: advance to the next slide.
    Left,
    /// Finger moved left to right: go back to the previous slide.
    Right,
}

/// Classify a completed gesture from its start and end x coordinates.
pub fn classify(start_x: f64, end_x: f64, threshold: f64) -> Option<SwipeDirection> {
    if start_x - end_x > threshold {
        Some(SwipeDirection::Left)
    } else if end_x - start_x > threshold {
        Some(SwipeDirection::Right)
    } else {
        None
    }
}

/// Tracks one touch gesture at a time.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f64,
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    pub fn touch_start(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Finish the gesture. A touch end with no recorded start is ignored.
    pub fn touch_end(&mut self, x: f64) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        classify(start, x, self.threshold)
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD_PX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dead_zone_at_49px() {
        assert_eq!(classify(200.0, 151.0, 50.0), None);
        assert_eq!(classify(151.0, 200.0, 50.0), None);
    }

    #[test]
    fn exactly_threshold_is_not_a_swipe() {
        assert_eq!(classify(200.0, 150.0, 50.0), None);
        assert_eq!(classify(150.0, 200.0, 50.0), None);
    }

    #[test]
    fn beyond_threshold_picks_direction() {
        assert_eq!(classify(200.0, 149.0, 50.0), Some(SwipeDirection::Left));
        assert_eq!(classify(149.0, 200.0, 50.0), Some(SwipeDirection::Right));
    }

    #[test]
    fn tracker_pairs_start_and_end() {
        let mut tracker = SwipeTracker::default();
        tracker.touch_start(300.0);
        assert_eq!(tracker.touch_end(100.0), Some(SwipeDirection::Left));
        // Start is consumed by the end event.
        assert_eq!(tracker.touch_end(0.0), None);
    }

    #[test]
    fn end_without_start_is_ignored() {
        let mut tracker = SwipeTracker::new(10.0);
        assert_eq!(tracker.touch_end(500.0), None);
    }
}
