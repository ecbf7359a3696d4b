// Free slot computation
// Cursor sweep over one room/day's activities, emitting the complementary
// free intervals within the operating window.

use crate::models::activity::Activity;
use crate::models::slot::TimeSlot;
use crate::services::grid::TimeGrid;
use crate::utils::time::{minutes_of, time_from_minutes};

/// Compute the free intervals of the operating window left open by the
/// given activities.
///
/// Preconditions (established by `aggregator::room_day_activities`, not
/// re-verified here): the input is filtered to one room and one day,
/// cancelled activities are excluded, every duration is positive, and
/// the list is sorted ascending by start time.
pub fn compute_free_slots(activities: &[Activity], grid: &TimeGrid) -> Vec<TimeSlot> {
    let window_start = minutes_of(grid.window_start());
    let window_end = minutes_of(grid.window_end());

    let mut free = Vec::new();
    let mut cursor = window_start;

    for activity in activities {
        let start = minutes_of(activity.start_time).clamp(window_start, window_end);
        let end = minutes_of(activity.end_time).clamp(window_start, window_end);

        if start > cursor {
            free.push(TimeSlot::new(
                time_from_minutes(cursor),
                time_from_minutes(start),
            ));
        }

        // max() keeps a contained activity from regressing the cursor
        cursor = cursor.max(end);
    }

    if cursor < window_end {
        free.push(TimeSlot::new(
            time_from_minutes(cursor),
            time_from_minutes(window_end),
        ));
    }

    free
}

/// The occupied intervals of the window, merged across overlapping
/// activities. Together with `compute_free_slots` this partitions the
/// window exactly; callers use it for the partition check and for
/// occupancy summaries.
pub fn occupied_intervals(activities: &[Activity], grid: &TimeGrid) -> Vec<TimeSlot> {
    let window_start = minutes_of(grid.window_start());
    let window_end = minutes_of(grid.window_end());

    let mut occupied: Vec<(i64, i64)> = Vec::new();
    for activity in activities {
        let start = minutes_of(activity.start_time).clamp(window_start, window_end);
        let end = minutes_of(activity.end_time).clamp(window_start, window_end);
        if end <= start {
            continue;
        }

        match occupied.last_mut() {
            Some((_, last_end)) if start <= *last_end => *last_end = (*last_end).max(end),
            _ => occupied.push((start, end)),
        }
    }

    occupied
        .into_iter()
        .map(|(start, end)| TimeSlot::new(time_from_minutes(start), time_from_minutes(end)))
        .collect()
}
