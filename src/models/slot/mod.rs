// Derived time-grid value types
// Always recomputed from the current activity set, never stored

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::utils::time::minutes_of;

/// A maximal free interval within the operating window for one room/day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub duration_minutes: i64,
}

impl TimeSlot {
    pub fn new(start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            start_time,
            end_time,
            duration_minutes: minutes_of(end_time) - minutes_of(start_time),
        }
    }
}

/// Vertical placement of an activity within the grid, as percentages of
/// the operating window. Derived from a time range, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridPosition {
    pub top: f64,
    pub height: f64,
}
