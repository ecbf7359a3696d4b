// Source record shapes
// Raw payloads supplied by the remote data collaborator, one shape per
// bookable entity kind. Times stay as strings until the aggregation
// boundary normalizes them.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::room::Room;

/// A scheduled class session. Ids are numeric in the upstream API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSessionRecord {
    pub id: i64,
    #[serde(default)]
    pub room_id: Option<String>,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, `HH:MM:SS`, or an ISO-8601 datetime
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub status: Option<String>,
    pub class_name: String,
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

/// A one-off room rental.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalRecord {
    pub id: i64,
    #[serde(default)]
    pub room_id: Option<String>,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub status: Option<String>,
    pub renter_name: String,
    #[serde(default)]
    pub purpose: Option<String>,
}

/// A special event. The upstream API sends full datetimes here; only the
/// time-of-day component is used, the record's own `date` field wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: i64,
    #[serde(default)]
    pub room_id: Option<String>,
    pub date: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub status: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// An ad-hoc reservation. Ids are opaque strings in the upstream API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationRecord {
    pub id: String,
    #[serde(default)]
    pub room_id: Option<String>,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub status: Option<String>,
    pub client_name: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// Everything the data collaborator hands over for one room-planner
/// query: four parallel record lists plus the room catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannerSnapshot {
    #[serde(default)]
    pub class_sessions: Vec<ClassSessionRecord>,
    #[serde(default)]
    pub rentals: Vec<RentalRecord>,
    #[serde(default)]
    pub events: Vec<EventRecord>,
    #[serde(default)]
    pub reservations: Vec<ReservationRecord>,
    #[serde(default)]
    pub rooms: Vec<Room>,
}

impl PlannerSnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse planner snapshot")
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read planner snapshot {:?}", path))?;
        Self::from_json(&content)
    }
}
