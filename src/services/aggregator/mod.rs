// Activity aggregation boundary
// Normalizes the four source-record shapes into the unified Activity
// model. This is the single place malformed upstream data is caught:
// every downstream engine assumes clean, validated input.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

use crate::models::activity::{Activity, ActivityKind, ActivityStatus};
use crate::models::source::{
    ClassSessionRecord, EventRecord, PlannerSnapshot, RentalRecord, ReservationRecord,
};
use crate::utils::time::{minutes_of, time_from_minutes};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregationError {
    #[error("malformed time value '{0}'")]
    MalformedTime(String),
    #[error("malformed date value '{0}'")]
    MalformedDate(String),
    #[error("activity '{id}' has non-positive duration ({start}..{end})")]
    NonPositiveDuration {
        id: String,
        start: NaiveTime,
        end: NaiveTime,
    },
    #[error("{0}")]
    Invalid(String),
}

/// Parse a time-of-day value as sent by the remote API: bare `HH:MM` or
/// `HH:MM:SS`, or an ISO-8601 datetime whose date component is discarded
/// in favor of the record's own `date` field.
///
/// Seconds are dropped here. Everything downstream compares full
/// `NaiveTime`s, so the boundary guarantees minute resolution.
fn parse_time_of_day(raw: &str) -> Result<NaiveTime, AggregationError> {
    let parsed = if let Ok(time) = NaiveTime::parse_from_str(raw, "%H:%M") {
        time
    } else if let Ok(time) = NaiveTime::parse_from_str(raw, "%H:%M:%S") {
        time
    } else if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        datetime.time()
    } else if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        datetime.naive_local().time()
    } else {
        return Err(AggregationError::MalformedTime(raw.to_string()));
    };

    Ok(time_from_minutes(minutes_of(parsed)))
}

fn parse_date(raw: &str) -> Result<NaiveDate, AggregationError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AggregationError::MalformedDate(raw.to_string()))
}

fn parse_status(raw: Option<&str>) -> ActivityStatus {
    match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        Some("cancelled") | Some("canceled") => ActivityStatus::Cancelled,
        Some("pending") => ActivityStatus::Pending,
        _ => ActivityStatus::Confirmed,
    }
}

/// Shared adapter core: parse, validate, and assemble one activity.
#[allow(clippy::too_many_arguments)]
fn build_activity(
    kind: ActivityKind,
    source_id: &str,
    title: &str,
    subtitle: Option<&str>,
    room_id: Option<&str>,
    raw_date: &str,
    raw_start: &str,
    raw_end: &str,
    status: ActivityStatus,
    color_override: Option<&str>,
    original: serde_json::Value,
) -> Result<Activity, AggregationError> {
    let date = parse_date(raw_date)?;
    let start_time = parse_time_of_day(raw_start)?;
    let end_time = parse_time_of_day(raw_end)?;

    let id = kind.namespaced_id(source_id);
    if end_time <= start_time {
        return Err(AggregationError::NonPositiveDuration {
            id,
            start: start_time,
            end: end_time,
        });
    }

    let mut activity = Activity::new(kind, source_id, title, date, start_time, end_time)
        .map_err(AggregationError::Invalid)?;
    activity.room_id = room_id.map(str::to_string);
    activity.subtitle = subtitle.map(str::to_string);
    activity.status = status;
    activity.color = color_override
        .unwrap_or_else(|| status.default_color())
        .to_string();
    activity.original = original;

    Ok(activity)
}

pub fn from_class_session(record: &ClassSessionRecord) -> Result<Activity, AggregationError> {
    build_activity(
        ActivityKind::Class,
        &record.id.to_string(),
        &record.class_name,
        record.instructor.as_deref(),
        record.room_id.as_deref(),
        &record.date,
        &record.start_time,
        &record.end_time,
        parse_status(record.status.as_deref()),
        record.color.as_deref(),
        serde_json::to_value(record).unwrap_or_default(),
    )
}

pub fn from_rental(record: &RentalRecord) -> Result<Activity, AggregationError> {
    build_activity(
        ActivityKind::Rental,
        &record.id.to_string(),
        &record.renter_name,
        record.purpose.as_deref(),
        record.room_id.as_deref(),
        &record.date,
        &record.start_time,
        &record.end_time,
        parse_status(record.status.as_deref()),
        None,
        serde_json::to_value(record).unwrap_or_default(),
    )
}

pub fn from_event(record: &EventRecord) -> Result<Activity, AggregationError> {
    build_activity(
        ActivityKind::Event,
        &record.id.to_string(),
        &record.name,
        record.description.as_deref(),
        record.room_id.as_deref(),
        &record.date,
        &record.start,
        &record.end,
        parse_status(record.status.as_deref()),
        None,
        serde_json::to_value(record).unwrap_or_default(),
    )
}

pub fn from_reservation(record: &ReservationRecord) -> Result<Activity, AggregationError> {
    build_activity(
        ActivityKind::Reservation,
        &record.id,
        &record.client_name,
        record.note.as_deref(),
        record.room_id.as_deref(),
        &record.date,
        &record.start_time,
        &record.end_time,
        parse_status(record.status.as_deref()),
        None,
        serde_json::to_value(record).unwrap_or_default(),
    )
}

/// Merge a snapshot's four record lists into one tagged activity list.
///
/// A record whose adapter fails is logged and omitted: one bad record
/// must not corrupt the pass for its siblings. Nothing else is dropped;
/// unplaced activities (no room) are retained and excluded later by the
/// room-scoped filters.
pub fn aggregate(snapshot: &PlannerSnapshot) -> Vec<Activity> {
    let mut activities = Vec::with_capacity(
        snapshot.class_sessions.len()
            + snapshot.rentals.len()
            + snapshot.events.len()
            + snapshot.reservations.len(),
    );

    for record in &snapshot.class_sessions {
        match from_class_session(record) {
            Ok(activity) => activities.push(activity),
            Err(err) => log::warn!("Skipping class session {}: {}", record.id, err),
        }
    }
    for record in &snapshot.rentals {
        match from_rental(record) {
            Ok(activity) => activities.push(activity),
            Err(err) => log::warn!("Skipping rental {}: {}", record.id, err),
        }
    }
    for record in &snapshot.events {
        match from_event(record) {
            Ok(activity) => activities.push(activity),
            Err(err) => log::warn!("Skipping event {}: {}", record.id, err),
        }
    }
    for record in &snapshot.reservations {
        match from_reservation(record) {
            Ok(activity) => activities.push(activity),
            Err(err) => log::warn!("Skipping reservation {}: {}", record.id, err),
        }
    }

    log::debug!("Aggregated {} activities from snapshot", activities.len());
    activities
}

/// Filter the activity set down to one room and one day, drop cancelled
/// activities, and sort ascending by start time (ties broken by end time,
/// then id, for deterministic layout).
///
/// This establishes the sorted precondition the free-slot sweep and the
/// overlap layout engine rely on.
pub fn room_day_activities(
    activities: &[Activity],
    room_id: &str,
    date: NaiveDate,
) -> Vec<Activity> {
    let mut filtered: Vec<Activity> = activities
        .iter()
        .filter(|a| a.occupies(room_id, date))
        .cloned()
        .collect();

    filtered.sort_by(|a, b| {
        a.start_time
            .cmp(&b.start_time)
            .then(a.end_time.cmp(&b.end_time))
            .then(a.id.cmp(&b.id))
    });

    filtered
}
