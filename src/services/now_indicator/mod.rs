// Current time indicator
// Computes where "now" sits in the grid and refreshes it once a minute.
// Absence (not today, or outside the operating window) is reported as
// None, never as a position clamped to an edge.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration as StdDuration;

use chrono::{DateTime, Local, NaiveDate, Timelike};

use crate::services::grid::TimeGrid;

/// Position of "now" in the grid for the displayed date, as a percentage
/// offset from the top of the operating window.
///
/// Returns `None` when the displayed date is not today, or when the
/// current time falls before opening or after closing.
pub fn position_at(
    displayed_date: NaiveDate,
    now: DateTime<Local>,
    grid: &TimeGrid,
) -> Option<f64> {
    if now.date_naive() != displayed_date {
        return None;
    }
    grid.offset_percent(now.time())
}

/// Convenience wrapper over `position_at` using the wall clock.
pub fn position_now(displayed_date: NaiveDate, grid: &TimeGrid) -> Option<f64> {
    position_at(displayed_date, Local::now(), grid)
}

/// One scheduler step: the indicator position (if any) and how long
/// until the next refresh is due.
#[derive(Debug, Clone, PartialEq)]
pub struct NowTick {
    pub position: Option<f64>,
    pub next_due_in: StdDuration,
}

/// Minute-cadence refresh scheduler with an injected clock, so the
/// cadence logic is testable without waiting. The owner drives `tick_at`
/// and applies the returned position.
#[derive(Debug, Default)]
pub struct NowIndicatorScheduler {
    last_tick_minute: Option<i64>,
}

impl NowIndicatorScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the indicator for `now` and the delay until the next
    /// minute boundary. Repeated calls within the same minute return the
    /// same position; the position only moves when the minute does.
    pub fn tick_at(
        &mut self,
        displayed_date: NaiveDate,
        now: DateTime<Local>,
        grid: &TimeGrid,
    ) -> NowTick {
        self.last_tick_minute = Some(now.timestamp() / 60);

        let seconds_into_minute = now.second() as u64;
        let next_due_in = StdDuration::from_secs(60 - seconds_into_minute.min(59));

        NowTick {
            position: position_at(displayed_date, now, grid),
            next_due_in,
        }
    }

    /// Whether a new minute has started since the last tick.
    pub fn is_due(&self, now: DateTime<Local>) -> bool {
        match self.last_tick_minute {
            Some(minute) => now.timestamp() / 60 > minute,
            None => true,
        }
    }
}

/// Background driver for the indicator: spawns a thread that invokes the
/// callback with a fresh position once a minute. The thread is released
/// deterministically when the handle drops, on every exit path.
pub struct NowIndicatorHandle {
    stop: Arc<AtomicBool>,
    join: Option<JoinHandle<()>>,
}

impl NowIndicatorHandle {
    pub fn spawn<F>(displayed_date: NaiveDate, grid: TimeGrid, on_tick: F) -> Self
    where
        F: Fn(Option<f64>) + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let join = std::thread::spawn(move || {
            let mut scheduler = NowIndicatorScheduler::new();
            while !stop_flag.load(Ordering::Relaxed) {
                let tick = scheduler.tick_at(displayed_date, Local::now(), &grid);
                on_tick(tick.position);

                // Sleep in short steps so a drop is honored promptly
                let mut remaining = tick.next_due_in;
                while !stop_flag.load(Ordering::Relaxed) && remaining > StdDuration::ZERO {
                    let step = remaining.min(StdDuration::from_millis(200));
                    std::thread::sleep(step);
                    remaining = remaining.saturating_sub(step);
                }
            }
            log::debug!("Now-indicator driver stopped");
        });

        Self {
            stop,
            join: Some(join),
        }
    }
}

impl Drop for NowIndicatorHandle {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(join) = self.join.take() {
            if join.join().is_err() {
                log::warn!("Now-indicator driver panicked before shutdown");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::atomic::AtomicUsize;

    use crate::models::settings::PlannerSettings;

    fn grid() -> TimeGrid {
        TimeGrid::new(&PlannerSettings::default())
    }

    fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_position_inside_window() {
        let now = local(2026, 3, 16, 15, 0, 0);
        let position = position_at(now.date_naive(), now, &grid()).unwrap();
        // 15:00 is halfway through 08:00-22:00
        assert!((position - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_indicator_for_other_dates() {
        let now = local(2026, 3, 16, 15, 0, 0);
        let other = NaiveDate::from_ymd_opt(2026, 3, 17).unwrap();
        assert!(position_at(other, now, &grid()).is_none());
    }

    #[test]
    fn test_no_indicator_outside_window() {
        let before_opening = local(2026, 3, 16, 7, 30, 0);
        assert!(position_at(before_opening.date_naive(), before_opening, &grid()).is_none());

        let after_closing = local(2026, 3, 16, 22, 30, 0);
        assert!(position_at(after_closing.date_naive(), after_closing, &grid()).is_none());
    }

    #[test]
    fn test_scheduler_reports_time_to_next_minute() {
        let mut scheduler = NowIndicatorScheduler::new();
        let now = local(2026, 3, 16, 12, 0, 45);
        let tick = scheduler.tick_at(now.date_naive(), now, &grid());

        assert_eq!(tick.next_due_in, StdDuration::from_secs(15));
        assert!(tick.position.is_some());
    }

    #[test]
    fn test_scheduler_due_only_on_minute_change() {
        let mut scheduler = NowIndicatorScheduler::new();
        let now = local(2026, 3, 16, 12, 0, 10);
        assert!(scheduler.is_due(now));

        scheduler.tick_at(now.date_naive(), now, &grid());
        assert!(!scheduler.is_due(local(2026, 3, 16, 12, 0, 50)));
        assert!(scheduler.is_due(local(2026, 3, 16, 12, 1, 0)));
    }

    #[test]
    fn test_identical_inputs_yield_identical_positions() {
        let mut scheduler = NowIndicatorScheduler::new();
        let now = local(2026, 3, 16, 9, 30, 0);
        let first = scheduler.tick_at(now.date_naive(), now, &grid());
        let second = scheduler.tick_at(now.date_naive(), now, &grid());
        assert_eq!(first.position, second.position);
    }

    #[test]
    fn test_handle_fires_and_stops_on_drop() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);

        let today = Local::now().date_naive();
        let handle = NowIndicatorHandle::spawn(today, grid(), move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        // The driver ticks once immediately on spawn
        std::thread::sleep(StdDuration::from_millis(100));
        drop(handle);

        let fired = count.load(Ordering::SeqCst);
        assert!(fired >= 1);

        // No further ticks after the drop released the thread
        std::thread::sleep(StdDuration::from_millis(300));
        assert_eq!(count.load(Ordering::SeqCst), fired);
    }
}
