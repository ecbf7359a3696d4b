// Activity module
// Unified scheduling unit covering all four bookable source kinds

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Originating entity kind of an activity: a closed set, never extended
/// dynamically. Downstream algorithms must not branch on it; it exists for
/// id namespacing and round-tripping to the right edit dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Class,
    Rental,
    Event,
    Reservation,
}

impl ActivityKind {
    /// Stable id prefix guaranteeing global uniqueness across sources.
    /// Two source types may otherwise reuse the same opaque ids.
    pub fn id_prefix(self) -> &'static str {
        match self {
            ActivityKind::Class => "class",
            ActivityKind::Rental => "rental",
            ActivityKind::Event => "event",
            ActivityKind::Reservation => "reservation",
        }
    }

    /// Namespace a source-local id into a globally unique activity id.
    pub fn namespaced_id(self, source_id: &str) -> String {
        format!("{}-{}", self.id_prefix(), source_id)
    }
}

/// Booking status carried through the pipeline. Cancelled activities are
/// still positioned by the layout engine but are visually suppressed by
/// the renderer and never occupy a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Confirmed,
    Pending,
    Cancelled,
}

/// Status→color table. Single source of truth so every consumer renders
/// identical visual semantics for the same status.
const STATUS_COLORS: &[(ActivityStatus, &str)] = &[
    (ActivityStatus::Confirmed, "#4A90D9"),
    (ActivityStatus::Pending, "#E8A33D"),
    (ActivityStatus::Cancelled, "#9E9E9E"),
];

impl ActivityStatus {
    pub fn is_cancelled(self) -> bool {
        self == ActivityStatus::Cancelled
    }

    /// Default render color hint for this status.
    pub fn default_color(self) -> &'static str {
        STATUS_COLORS
            .iter()
            .find(|(status, _)| *status == self)
            .map(|(_, color)| *color)
            .unwrap_or("#4A90D9")
    }
}

/// A normalized, time-bounded bookable unit regardless of originating
/// entity kind. Created fresh on every data refresh; all derived
/// structures are recomputed from the current activity set.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    /// Globally unique id, namespaced by kind (e.g. `class-118`).
    pub id: String,
    pub kind: ActivityKind,
    /// Absent for not-yet-placed activities; such activities are retained
    /// but excluded from room-scoped computations by filtering.
    pub room_id: Option<String>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    /// Strictly after `start_time`, same day. No cross-midnight activities.
    pub end_time: NaiveTime,
    pub title: String,
    pub subtitle: Option<String>,
    pub status: ActivityStatus,
    /// Render color hint; opaque to the algorithms.
    pub color: String,
    /// The source-specific record this activity was normalized from.
    /// Used only for round-tripping to edit dialogs.
    pub original: serde_json::Value,
}

impl Activity {
    /// Create a new activity with required fields.
    ///
    /// # Returns
    /// Returns `Result<Activity, String>` with validation: non-empty
    /// title and `end_time` strictly after `start_time`.
    pub fn new(
        kind: ActivityKind,
        source_id: &str,
        title: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<Self, String> {
        let title = title.into();

        if title.trim().is_empty() {
            return Err("Activity title cannot be empty".to_string());
        }

        if end_time <= start_time {
            return Err("Activity end time must be after start time".to_string());
        }

        Ok(Self {
            id: kind.namespaced_id(source_id),
            kind,
            room_id: None,
            date,
            start_time,
            end_time,
            title,
            subtitle: None,
            status: ActivityStatus::Confirmed,
            color: ActivityStatus::Confirmed.default_color().to_string(),
            original: serde_json::Value::Null,
        })
    }

    /// Validate the activity's invariants.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Activity title cannot be empty".to_string());
        }

        if self.end_time <= self.start_time {
            return Err("Activity end time must be after start time".to_string());
        }

        Ok(())
    }

    pub fn duration_minutes(&self) -> i64 {
        crate::utils::time::minutes_of(self.end_time) - crate::utils::time::minutes_of(self.start_time)
    }

    /// Half-open interval overlap with another activity on the same day.
    pub fn overlaps(&self, other: &Activity) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }

    /// Half-open interval overlap with an arbitrary time window.
    pub fn overlaps_window(&self, window_start: NaiveTime, window_end: NaiveTime) -> bool {
        self.start_time < window_end && window_start < self.end_time
    }

    /// Whether this activity occupies the given room on the given day.
    /// Unplaced and cancelled activities never occupy anything.
    pub fn occupies(&self, room_id: &str, date: NaiveDate) -> bool {
        !self.status.is_cancelled()
            && self.date == date
            && self.room_id.as_deref() == Some(room_id)
    }
}
