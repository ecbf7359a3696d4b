// Drag selection state machine
// Tracks a pointer gesture across grid cells so the user can sweep out a
// time interval for a new booking. Two states: Idle and Selecting.

use chrono::{NaiveDate, NaiveTime};

use crate::services::grid::TimeGrid;

/// The column a gesture is anchored to: a room in the planner view, a
/// date in the week view. The anchor column is sticky for the whole
/// gesture; drags into other columns are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SelectionTarget {
    Room(String),
    Date(NaiveDate),
}

/// In-flight gesture state. Lives only between press and release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub target: SelectionTarget,
    pub anchor_row: usize,
    pub cursor_row: usize,
}

/// The outcome of a completed gesture, translated to wall-clock times.
/// The consumer turns this into a create-activity request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedSelection {
    pub target: SelectionTarget,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// The gesture machine itself. Press begins a selection, pointer-enter
/// extends it within the anchor column, and any release (including one
/// outside the grid) completes it. The machine can never get stuck in
/// `Selecting`.
#[derive(Debug, Default)]
pub struct DragSelection {
    state: Option<SelectionState>,
}

impl DragSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selecting(&self) -> bool {
        self.state.is_some()
    }

    pub fn active(&self) -> Option<&SelectionState> {
        self.state.as_ref()
    }

    /// Press-down inside a grid cell: begin a gesture with the cell as
    /// both anchor and cursor. A press while already selecting replaces
    /// the stale gesture rather than wedging the machine.
    pub fn press(&mut self, target: SelectionTarget, row: usize) {
        if self.state.is_some() {
            log::debug!("Selection press while already selecting, restarting gesture");
        }
        self.state = Some(SelectionState {
            target,
            anchor_row: row,
            cursor_row: row,
        });
    }

    /// Pointer entered a cell. Extends the selection only when the cell
    /// belongs to the anchor column; cross-column drags are ignored.
    pub fn enter(&mut self, target: &SelectionTarget, row: usize) {
        if let Some(state) = &mut self.state {
            if state.target == *target {
                state.cursor_row = row;
            }
        }
    }

    /// Pointer released, anywhere. Completes the gesture using the last
    /// known cursor and returns to Idle; the selected rows are inclusive
    /// `[min, max]` regardless of drag direction. Returns `None` when no
    /// gesture was in flight.
    pub fn release(&mut self, grid: &TimeGrid) -> Option<CompletedSelection> {
        let state = self.state.take()?;

        let first = state.anchor_row.min(state.cursor_row);
        let last = state.anchor_row.max(state.cursor_row);

        Some(CompletedSelection {
            target: state.target,
            start_time: grid.row_to_slot(first).start_time,
            end_time: grid.row_to_slot(last).end_time,
        })
    }

    /// Discard any in-flight gesture without emitting a selection. Used
    /// by owners tearing the view down; there is no user-facing cancel
    /// gesture.
    pub fn reset(&mut self) {
        self.state = None;
    }

    /// Normalized `[min, max]` row bounds of the in-flight gesture, for
    /// highlight rendering.
    pub fn selected_rows(&self) -> Option<(usize, usize)> {
        self.state.as_ref().map(|state| {
            (
                state.anchor_row.min(state.cursor_row),
                state.anchor_row.max(state.cursor_row),
            )
        })
    }
}
