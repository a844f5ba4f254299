//! Swipe classification for the item detail sheet.

/// Travel needed on the dominant axis before a release does anything.
pub const SWIPE_THRESHOLD_PX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Dismiss,
    Previous,
    Next,
    SnapBack,
}

/// Classify a finished drag by its dominant axis. Ties count as vertical.
#[must_use]
pub fn classify(dx: f64, dy: f64) -> SwipeOutcome {
    if dx.abs() > dy.abs() {
        if dx.abs() > SWIPE_THRESHOLD_PX {
            if dx > 0.0 {
                SwipeOutcome::Previous
            } else {
                SwipeOutcome::Next
            }
        } else {
            SwipeOutcome::SnapBack
        }
    } else if dy.abs() > SWIPE_THRESHOLD_PX {
        SwipeOutcome::Dismiss
    } else {
        SwipeOutcome::SnapBack
    }
}

/// Pointer bookkeeping for one drag at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwipeTracker {
    start: Option<(f64, f64)>,
    offset: (f64, f64),
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
        self.offset = (0.0, 0.0);
    }

    /// Record a move; returns the raw translation to apply, if a drag is active.
    pub fn move_to(&mut self, x: f64, y: f64) -> Option<(f64, f64)> {
        let (sx, sy) = self.start?;
        self.offset = (x - sx, y - sy);
        Some(self.offset)
    }

    /// Finish the drag. `None` when no drag was in progress.
    pub fn release(&mut self) -> Option<SwipeOutcome> {
        self.start.take()?;
        let (dx, dy) = std::mem::take(&mut self.offset);
        Some(classify(dx, dy))
    }

    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.start.is_some()
    }

    #[must_use]
    pub const fn offset(&self) -> (f64, f64) {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_swipes_step_items() {
        assert_eq!(classify(150.0, 20.0), SwipeOutcome::Previous);
        assert_eq!(classify(-150.0, -20.0), SwipeOutcome::Next);
        assert_eq!(classify(90.0, 10.0), SwipeOutcome::SnapBack);
    }

    #[test]
    fn vertical_threshold_is_strict() {
        assert_eq!(classify(0.0, 100.0), SwipeOutcome::SnapBack);
        assert_eq!(classify(0.0, 101.0), SwipeOutcome::Dismiss);
        assert_eq!(classify(0.0, -101.0), SwipeOutcome::Dismiss);
    }

    #[test]
    fn tracker_reports_raw_delta_and_resets() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.move_to(10.0, 10.0), None);
        assert_eq!(tracker.release(), None);

        tracker.begin(200.0, 300.0);
        assert!(tracker.is_active());
        assert_eq!(tracker.move_to(80.0, 310.0), Some((-120.0, 10.0)));
        assert_eq!(tracker.release(), Some(SwipeOutcome::Next));
        assert!(!tracker.is_active());
        assert_eq!(tracker.offset(), (0.0, 0.0));
    }
}
