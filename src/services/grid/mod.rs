// Time grid coordinate mapper
// Pure conversions between wall-clock times, discrete row indices, and
// percentage offsets within the fixed daily operating window.

use chrono::NaiveTime;

use crate::models::settings::PlannerSettings;
use crate::models::slot::{GridPosition, TimeSlot};
use crate::utils::time::{minutes_of, time_from_minutes};

/// The planner's day grid: the operating window `[start, end)` divided
/// into equal-duration slots. All conversions are pure; positions are
/// abstract percentages, row indices are slot ordinals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeGrid {
    window_start: i64,
    window_end: i64,
    slot_minutes: i64,
}

impl TimeGrid {
    /// Build a grid from validated settings.
    ///
    /// Precondition: `settings.validate()` has passed, so the window is
    /// non-empty and the slot duration tiles it exactly.
    pub fn new(settings: &PlannerSettings) -> Self {
        Self {
            window_start: settings.window_start_minutes(),
            window_end: settings.window_end_minutes(),
            slot_minutes: settings.slot_minutes as i64,
        }
    }

    pub fn window_start(&self) -> NaiveTime {
        time_from_minutes(self.window_start)
    }

    pub fn window_end(&self) -> NaiveTime {
        time_from_minutes(self.window_end)
    }

    pub fn slot_minutes(&self) -> i64 {
        self.slot_minutes
    }

    pub fn window_minutes(&self) -> i64 {
        self.window_end - self.window_start
    }

    pub fn row_count(&self) -> usize {
        (self.window_minutes() / self.slot_minutes) as usize
    }

    /// Whether a time falls inside the operating window.
    pub fn contains(&self, time: NaiveTime) -> bool {
        let m = minutes_of(time);
        m >= self.window_start && m < self.window_end
    }

    /// Vertical placement of a time range, clamped to the window.
    ///
    /// Ranges fully outside the window collapse to zero height but are
    /// still representable; whether to draw them is the renderer's call.
    pub fn position(&self, start: NaiveTime, end: NaiveTime) -> GridPosition {
        let clamped_start = minutes_of(start).clamp(self.window_start, self.window_end);
        let clamped_end = minutes_of(end).clamp(self.window_start, self.window_end);

        let total = self.window_minutes() as f64;
        GridPosition {
            top: (clamped_start - self.window_start) as f64 / total * 100.0,
            height: (clamped_end - clamped_start).max(0) as f64 / total * 100.0,
        }
    }

    /// Row index containing the given time, clamped to the grid.
    pub fn time_to_row(&self, time: NaiveTime) -> usize {
        let offset = minutes_of(time) - self.window_start;
        let row = offset.div_euclid(self.slot_minutes);
        row.clamp(0, self.row_count() as i64 - 1) as usize
    }

    /// The time interval a row index represents, the inverse mapping
    /// used by the selection machine to turn row gestures back into
    /// wall-clock times. Rows past the end clamp to the last slot.
    pub fn row_to_slot(&self, row: usize) -> TimeSlot {
        let row = row.min(self.row_count() - 1) as i64;
        let start = self.window_start + row * self.slot_minutes;
        TimeSlot::new(
            time_from_minutes(start),
            time_from_minutes(start + self.slot_minutes),
        )
    }

    /// Percentage offset of a single instant, or `None` when it lies
    /// outside the window. Used by the current-time indicator, which
    /// reports absence rather than clamping to an edge.
    pub fn offset_percent(&self, time: NaiveTime) -> Option<f64> {
        if !self.contains(time) {
            return None;
        }
        let offset = (minutes_of(time) - self.window_start) as f64;
        Some(offset / self.window_minutes() as f64 * 100.0)
    }
}
