// Test fixtures - reusable test data
// Provides consistent snapshot and activity builders across test files

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};

use room_planner::models::activity::{Activity, ActivityKind};
use room_planner::models::room::Room;
use room_planner::models::source::{
    ClassSessionRecord, EventRecord, PlannerSnapshot, RentalRecord, ReservationRecord,
};

/// The planner day most fixtures are pinned to.
pub fn planning_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 16).unwrap()
}

pub fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

pub fn studio_a() -> Room {
    Room {
        id: "room-1".to_string(),
        name: "Studio A".to_string(),
        number: Some("1.02".to_string()),
    }
}

pub fn studio_b() -> Room {
    Room {
        id: "room-2".to_string(),
        name: "Studio B".to_string(),
        number: None,
    }
}

/// An activity already placed in a room, in the shape the aggregator
/// would produce.
pub fn placed_activity(
    kind: ActivityKind,
    source_id: &str,
    room_id: &str,
    start: NaiveTime,
    end: NaiveTime,
) -> Activity {
    let mut activity = Activity::new(
        kind,
        source_id,
        format!("{} {}", kind.id_prefix(), source_id),
        planning_day(),
        start,
        end,
    )
    .unwrap();
    activity.room_id = Some(room_id.to_string());
    activity
}

/// A realistic one-day snapshot: two rooms, all four activity kinds, one
/// cancelled class, one unplaced reservation, and one malformed rental.
pub fn busy_day_snapshot() -> PlannerSnapshot {
    PlannerSnapshot {
        class_sessions: vec![
            ClassSessionRecord {
                id: 1,
                room_id: Some("room-1".to_string()),
                date: "2026-03-16".to_string(),
                start_time: "09:00".to_string(),
                end_time: "10:00".to_string(),
                status: None,
                class_name: "Ballet I".to_string(),
                instructor: Some("A. Petrova".to_string()),
                color: Some("#7E57C2".to_string()),
            },
            ClassSessionRecord {
                id: 2,
                room_id: Some("room-1".to_string()),
                date: "2026-03-16".to_string(),
                start_time: "09:30".to_string(),
                end_time: "10:30".to_string(),
                status: None,
                class_name: "Modern Dance".to_string(),
                instructor: None,
                color: None,
            },
            ClassSessionRecord {
                id: 3,
                room_id: Some("room-2".to_string()),
                date: "2026-03-16".to_string(),
                start_time: "11:00".to_string(),
                end_time: "12:00".to_string(),
                status: Some("cancelled".to_string()),
                class_name: "Jazz (cancelled)".to_string(),
                instructor: None,
                color: None,
            },
        ],
        rentals: vec![
            RentalRecord {
                id: 10,
                room_id: Some("room-2".to_string()),
                date: "2026-03-16".to_string(),
                start_time: "14:00:00".to_string(),
                end_time: "16:00:00".to_string(),
                status: None,
                renter_name: "Local Theater Group".to_string(),
                purpose: Some("rehearsal".to_string()),
            },
            // Malformed on purpose: the aggregator must skip it
            RentalRecord {
                id: 11,
                room_id: Some("room-2".to_string()),
                date: "2026-03-16".to_string(),
                start_time: "late".to_string(),
                end_time: "16:00".to_string(),
                status: None,
                renter_name: "Bad Record".to_string(),
                purpose: None,
            },
        ],
        events: vec![EventRecord {
            id: 20,
            room_id: Some("room-1".to_string()),
            date: "2026-03-16".to_string(),
            start: "2026-03-16T18:00:00".to_string(),
            end: "2026-03-16T21:00:00".to_string(),
            status: None,
            name: "Open House".to_string(),
            description: Some("spring showcase".to_string()),
        }],
        reservations: vec![ReservationRecord {
            id: "res-77".to_string(),
            room_id: None,
            date: "2026-03-16".to_string(),
            start_time: "12:00".to_string(),
            end_time: "13:00".to_string(),
            status: Some("pending".to_string()),
            client_name: "K. Jansen".to_string(),
            note: Some("trial booking".to_string()),
        }],
        rooms: vec![studio_a(), studio_b()],
    }
}
