// Day plan composition
// Bundles the derivations the planner view renders for one room/day.

use chrono::NaiveDate;

use crate::models::activity::Activity;
use crate::models::room::Room;
use crate::models::slot::TimeSlot;
use crate::services::aggregator::room_day_activities;
use crate::services::free_slots::compute_free_slots;
use crate::services::grid::TimeGrid;
use crate::services::layout::{layout_overlapping, LayoutEntry};

/// Rendering-ready view of one room on one day: laid-out activities plus
/// the remaining free intervals. A pure function of the activity set,
/// recomputed on every refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct DayPlan {
    pub room: Room,
    pub date: NaiveDate,
    pub entries: Vec<LayoutEntry>,
    pub free_slots: Vec<TimeSlot>,
}

pub fn day_plan(
    room: &Room,
    date: NaiveDate,
    activities: &[Activity],
    grid: &TimeGrid,
) -> DayPlan {
    let occupying = room_day_activities(activities, &room.id, date);

    DayPlan {
        room: room.clone(),
        date,
        entries: layout_overlapping(&occupying),
        free_slots: compute_free_slots(&occupying, grid),
    }
}
