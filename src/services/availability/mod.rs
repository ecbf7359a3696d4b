// Availability search
// Per-room conflict detection for a candidate time window.

use chrono::{NaiveDate, NaiveTime};

use crate::models::activity::Activity;
use crate::models::room::Room;

/// One room's answer to "is it free in this window", with the specific
/// conflicting activities kept as the explanation.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomAvailability {
    pub room: Room,
    pub is_available: bool,
    pub conflicting: Vec<Activity>,
}

/// Report availability of every room for the candidate window
/// `[window_start, window_end)` on the given date.
///
/// Cancelled activities never block availability. The result always
/// covers all rooms; hiding unavailable ones is `only_available`'s job,
/// a post-processing step, so the conflict explanation survives.
pub fn search(
    date: NaiveDate,
    window_start: NaiveTime,
    window_end: NaiveTime,
    rooms: &[Room],
    activities: &[Activity],
) -> Vec<RoomAvailability> {
    rooms
        .iter()
        .map(|room| {
            let conflicting: Vec<Activity> = activities
                .iter()
                .filter(|a| {
                    a.occupies(&room.id, date) && a.overlaps_window(window_start, window_end)
                })
                .cloned()
                .collect();

            RoomAvailability {
                room: room.clone(),
                is_available: conflicting.is_empty(),
                conflicting,
            }
        })
        .collect()
}

/// Keep only the rooms that are free. Applied on top of a full `search`
/// result, never folded into the conflict computation.
pub fn only_available(results: Vec<RoomAvailability>) -> Vec<RoomAvailability> {
    results.into_iter().filter(|r| r.is_available).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use pretty_assertions::assert_eq;

    use crate::models::activity::{ActivityKind, ActivityStatus};

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 16).unwrap()
    }

    fn room(id: &str) -> Room {
        Room {
            id: id.to_string(),
            name: format!("Room {}", id),
            number: None,
        }
    }

    fn booking(id: &str, room_id: &str, start: NaiveTime, end: NaiveTime) -> Activity {
        let mut activity = Activity::new(
            ActivityKind::Rental,
            id,
            format!("Booking {}", id),
            date(),
            start,
            end,
        )
        .unwrap();
        activity.room_id = Some(room_id.to_string());
        activity
    }

    #[test]
    fn test_overlapping_booking_blocks_window() {
        // Window 14:00-15:00 against an existing booking 14:30-15:30
        let rooms = vec![room("r1")];
        let activities = vec![booking("1", "r1", t(14, 30), t(15, 30))];

        let results = search(date(), t(14, 0), t(15, 0), &rooms, &activities);
        assert_eq!(results.len(), 1);
        assert!(!results[0].is_available);
        assert_eq!(results[0].conflicting.len(), 1);
        assert_eq!(results[0].conflicting[0].id, "rental-1");
    }

    #[test]
    fn test_back_to_back_window_is_available() {
        let rooms = vec![room("r1")];
        let activities = vec![booking("1", "r1", t(15, 0), t(16, 0))];

        let results = search(date(), t(14, 0), t(15, 0), &rooms, &activities);
        assert!(results[0].is_available);
        assert!(results[0].conflicting.is_empty());
    }

    #[test]
    fn test_cancelled_booking_does_not_block() {
        let rooms = vec![room("r1")];
        let mut cancelled = booking("1", "r1", t(14, 0), t(15, 0));
        cancelled.status = ActivityStatus::Cancelled;

        let results = search(date(), t(14, 0), t(15, 0), &rooms, &[cancelled]);
        assert!(results[0].is_available);
    }

    #[test]
    fn test_other_room_and_other_day_are_ignored() {
        let rooms = vec![room("r1")];
        let mut other_day = booking("2", "r1", t(14, 0), t(15, 0));
        other_day.date = NaiveDate::from_ymd_opt(2026, 3, 17).unwrap();
        let activities = vec![booking("1", "r2", t(14, 0), t(15, 0)), other_day];

        let results = search(date(), t(14, 0), t(15, 0), &rooms, &activities);
        assert!(results[0].is_available);
    }

    #[test]
    fn test_result_covers_all_rooms_with_exact_conflict_sets() {
        let rooms = vec![room("r1"), room("r2"), room("r3")];
        let activities = vec![
            booking("1", "r1", t(9, 0), t(10, 0)),
            booking("2", "r1", t(9, 30), t(11, 0)),
            booking("3", "r2", t(12, 0), t(13, 0)),
        ];

        let results = search(date(), t(9, 0), t(10, 0), &rooms, &activities);
        assert_eq!(results.len(), 3);

        assert!(!results[0].is_available);
        let ids: Vec<&str> = results[0].conflicting.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["rental-1", "rental-2"]);

        assert!(results[1].is_available);
        assert!(results[2].is_available);
    }

    #[test]
    fn test_only_available_is_a_post_filter() {
        let rooms = vec![room("r1"), room("r2")];
        let activities = vec![booking("1", "r1", t(9, 0), t(10, 0))];

        let full = search(date(), t(9, 0), t(10, 0), &rooms, &activities);
        let filtered = only_available(full.clone());

        assert_eq!(full.len(), 2);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].room.id, "r2");
        // The full result still carries the explanation
        assert_eq!(full[0].conflicting.len(), 1);
    }
}
