// Overlap layout engine
// Greedy interval coloring: assigns temporally-overlapping activities to
// side-by-side columns so the planner can render them without collision.

use chrono::NaiveTime;

use crate::models::activity::Activity;

/// An activity augmented with its lateral placement. `column` is the
/// assigned slot, `total_columns` the width of the activity's own
/// overlap cluster; disjoint clusters each render full-width.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEntry {
    pub activity: Activity,
    pub column: usize,
    pub total_columns: usize,
}

/// Lay out one room-or-day's activities into non-overlapping columns.
///
/// Activities are ordered by start time (ties broken by end time, then
/// id) so the assignment is stable across re-renders. Each activity
/// takes the lowest-indexed column that is free at its start; a new
/// column opens only when none is. `total_columns` is resolved per
/// overlap cluster, not globally.
///
/// Precondition: every activity has a positive duration (enforced at
/// the aggregation boundary).
pub fn layout_overlapping(activities: &[Activity]) -> Vec<LayoutEntry> {
    let mut ordered: Vec<&Activity> = activities.iter().collect();
    ordered.sort_by(|a, b| {
        a.start_time
            .cmp(&b.start_time)
            .then(a.end_time.cmp(&b.end_time))
            .then(a.id.cmp(&b.id))
    });

    let mut entries: Vec<LayoutEntry> = Vec::with_capacity(ordered.len());

    // Column end-times for the cluster currently being built, plus the
    // index of its first entry so widths can be back-filled on close.
    let mut column_ends: Vec<NaiveTime> = Vec::new();
    let mut cluster_start_index = 0;
    let mut cluster_max_end: Option<NaiveTime> = None;

    for activity in ordered {
        let starts_new_cluster = match cluster_max_end {
            Some(max_end) => activity.start_time >= max_end,
            None => false,
        };

        if starts_new_cluster {
            close_cluster(&mut entries, cluster_start_index, column_ends.len());
            column_ends.clear();
            cluster_start_index = entries.len();
            cluster_max_end = None;
        }

        let column = match column_ends
            .iter()
            .position(|end| *end <= activity.start_time)
        {
            Some(free) => {
                column_ends[free] = activity.end_time;
                free
            }
            None => {
                column_ends.push(activity.end_time);
                column_ends.len() - 1
            }
        };

        cluster_max_end = Some(match cluster_max_end {
            Some(max_end) => max_end.max(activity.end_time),
            None => activity.end_time,
        });

        entries.push(LayoutEntry {
            activity: activity.clone(),
            column,
            total_columns: 1,
        });
    }

    close_cluster(&mut entries, cluster_start_index, column_ends.len());
    entries
}

fn close_cluster(entries: &mut [LayoutEntry], start_index: usize, columns: usize) {
    if columns == 0 {
        return;
    }
    for entry in &mut entries[start_index..] {
        entry.total_columns = columns;
    }
}
