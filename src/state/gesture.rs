/// Swipe gesture recognition
///
/// One `GestureSample` per touch (or drag) sequence: the start point and
/// timestamp, plus the latest point overwritten on every move. On
/// release the whole sample is classified at once; there is no
/// accumulation or smoothing.

use std::time::{Duration, Instant};

/// Direction of a recognized horizontal swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left (negative dx) — advance to the next image
    Left,
    /// Finger moved right (positive dx) — go back to the previous image
    Right,
}

/// Classification thresholds.
///
/// A swipe must be mostly horizontal, travel far enough to reject taps
/// and jitter, and finish fast enough to reject slow drags that are
/// likely scrolls. The values are configuration (see `ViewerConfig`),
/// not hard-coded law.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThresholds {
    /// Minimum horizontal travel, in the same units as the samples
    pub min_distance: f32,
    /// Maximum duration from touch start to release
    pub max_duration: Duration,
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        SwipeThresholds {
            min_distance: 36.0,
            max_duration: Duration::from_millis(600),
        }
    }
}

/// Ephemeral per-gesture state.
///
/// Created at touch start, replaced wholesale on the next touch start,
/// and dropped after classification. Owning start and latest position in
/// one value avoids the partial-update bugs of loose mutable variables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    x0: f32,
    y0: f32,
    started: Instant,
    x_last: f32,
    y_last: f32,
}

impl GestureSample {
    /// Start a new gesture at the given point
    pub fn begin(x: f32, y: f32, now: Instant) -> Self {
        GestureSample {
            x0: x,
            y0: y,
            started: now,
            // Until the first move, the latest point is the start point,
            // so an immediate release classifies as a tap
            x_last: x,
            y_last: y,
        }
    }

    /// Record the latest touch position (last-write-wins)
    pub fn track(&mut self, x: f32, y: f32) {
        self.x_last = x;
        self.y_last = y;
    }

    /// Classify the finished gesture.
    ///
    /// Returns the swipe direction when all three thresholds hold:
    /// more horizontal than vertical motion, enough distance, and fast
    /// enough. Anything else is a tap/no-op at this level.
    pub fn classify(&self, thresholds: &SwipeThresholds, now: Instant) -> Option<SwipeDirection> {
        let dx = self.x_last - self.x0;
        let dy = self.y_last - self.y0;
        let elapsed = now.saturating_duration_since(self.started);

        let horizontal = dx.abs() > dy.abs()
            && dx.abs() > thresholds.min_distance
            && elapsed < thresholds.max_duration;

        if !horizontal {
            return None;
        }

        if dx < 0.0 {
            Some(SwipeDirection::Left)
        } else {
            Some(SwipeDirection::Right)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished_gesture(dx: f32, dy: f32, elapsed_ms: u64) -> Option<SwipeDirection> {
        let start = Instant::now();
        let mut sample = GestureSample::begin(100.0, 50.0, start);
        sample.track(100.0 + dx, 50.0 + dy);
        sample.classify(
            &SwipeThresholds::default(),
            start + Duration::from_millis(elapsed_ms),
        )
    }

    #[test]
    fn test_fast_horizontal_flick_is_a_left_swipe() {
        // Just past both thresholds: dx = -37, elapsed = 599
        assert_eq!(finished_gesture(-37.0, 0.0, 599), Some(SwipeDirection::Left));
    }

    #[test]
    fn test_rightward_flick_is_a_right_swipe() {
        assert_eq!(finished_gesture(37.0, 0.0, 599), Some(SwipeDirection::Right));
    }

    #[test]
    fn test_short_travel_is_rejected_as_jitter() {
        assert_eq!(finished_gesture(-35.0, 0.0, 100), None);
    }

    #[test]
    fn test_slow_drag_is_rejected() {
        assert_eq!(finished_gesture(-50.0, 0.0, 601), None);
    }

    #[test]
    fn test_vertical_motion_dominating_is_rejected() {
        // Plenty of horizontal travel, but the gesture is mostly a scroll
        assert_eq!(finished_gesture(-40.0, 45.0, 200), None);
    }

    #[test]
    fn test_tap_without_movement_is_rejected() {
        let start = Instant::now();
        let sample = GestureSample::begin(100.0, 50.0, start);
        assert_eq!(
            sample.classify(&SwipeThresholds::default(), start + Duration::from_millis(50)),
            None
        );
    }

    #[test]
    fn test_only_last_position_counts() {
        // Wander far right, then settle back near the start: no swipe
        let start = Instant::now();
        let mut sample = GestureSample::begin(100.0, 50.0, start);
        sample.track(300.0, 50.0);
        sample.track(110.0, 50.0);
        assert_eq!(
            sample.classify(&SwipeThresholds::default(), start + Duration::from_millis(200)),
            None
        );
    }

    #[test]
    fn test_reference_swipe_scenario() {
        // Start (100, 50), move to (50, 52), release 300ms later:
        // dx = -50, dy = 2 -> left swipe
        let start = Instant::now();
        let mut sample = GestureSample::begin(100.0, 50.0, start);
        sample.track(50.0, 52.0);
        assert_eq!(
            sample.classify(&SwipeThresholds::default(), start + Duration::from_millis(300)),
            Some(SwipeDirection::Left)
        );
    }

    #[test]
    fn test_custom_thresholds_are_honored() {
        let start = Instant::now();
        let mut sample = GestureSample::begin(0.0, 0.0, start);
        sample.track(-20.0, 0.0);

        let loose = SwipeThresholds {
            min_distance: 10.0,
            max_duration: Duration::from_millis(2000),
        };
        assert_eq!(
            sample.classify(&loose, start + Duration::from_millis(1500)),
            Some(SwipeDirection::Left)
        );
    }
}
