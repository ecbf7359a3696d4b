// Room Planner inspection tool
// Loads a planner snapshot and prints per-room day plans and, optionally,
// an availability query for a candidate time window.

use anyhow::{anyhow, Context, Result};
use chrono::{NaiveDate, NaiveTime};

use room_planner::models::settings::PlannerSettings;
use room_planner::models::source::PlannerSnapshot;
use room_planner::services::aggregator;
use room_planner::services::availability;
use room_planner::services::grid::TimeGrid;
use room_planner::services::planner::day_plan;
use room_planner::utils::time::fmt_hhmm;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting room planner inspection");

    let mut args = std::env::args().skip(1);
    let snapshot_path = args
        .next()
        .ok_or_else(|| anyhow!("Usage: room-planner <snapshot.json> <YYYY-MM-DD> [HH:MM-HH:MM]"))?;
    let date_arg = args
        .next()
        .ok_or_else(|| anyhow!("Usage: room-planner <snapshot.json> <YYYY-MM-DD> [HH:MM-HH:MM]"))?;
    let window_arg = args.next();

    let date = NaiveDate::parse_from_str(&date_arg, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}'", date_arg))?;

    let settings = match PlannerSettings::default_config_path() {
        Some(path) => PlannerSettings::load_from_file(&path)?,
        None => PlannerSettings::default(),
    };
    let grid = TimeGrid::new(&settings);

    let snapshot = PlannerSnapshot::load_from_file(std::path::Path::new(&snapshot_path))?;
    let activities = aggregator::aggregate(&snapshot);
    log::info!(
        "Loaded {} activities across {} rooms",
        activities.len(),
        snapshot.rooms.len()
    );

    for room in &snapshot.rooms {
        let plan = day_plan(room, date, &activities, &grid);
        println!("{} | {}", room.display_name(), date);

        for entry in &plan.entries {
            println!(
                "  {}-{}  {} [{}] (column {}/{})",
                fmt_hhmm(entry.activity.start_time),
                fmt_hhmm(entry.activity.end_time),
                entry.activity.title,
                entry.activity.kind.id_prefix(),
                entry.column + 1,
                entry.total_columns,
            );
        }
        for slot in &plan.free_slots {
            println!(
                "  {}-{}  free ({} min)",
                fmt_hhmm(slot.start_time),
                fmt_hhmm(slot.end_time),
                slot.duration_minutes,
            );
        }
        println!();
    }

    if let Some(window) = window_arg {
        let (start, end) = parse_window(&window)?;
        println!("Availability {}-{}:", fmt_hhmm(start), fmt_hhmm(end));
        for result in availability::search(date, start, end, &snapshot.rooms, &activities) {
            if result.is_available {
                println!("  {}: available", result.room.display_name());
            } else {
                let conflicts: Vec<String> = result
                    .conflicting
                    .iter()
                    .map(|a| {
                        format!(
                            "{} {}-{}",
                            a.title,
                            fmt_hhmm(a.start_time),
                            fmt_hhmm(a.end_time)
                        )
                    })
                    .collect();
                println!(
                    "  {}: occupied ({})",
                    result.room.display_name(),
                    conflicts.join(", ")
                );
            }
        }
    }

    Ok(())
}

fn parse_window(raw: &str) -> Result<(NaiveTime, NaiveTime)> {
    let (start, end) = raw
        .split_once('-')
        .ok_or_else(|| anyhow!("Window must be HH:MM-HH:MM, got '{}'", raw))?;
    let start = NaiveTime::parse_from_str(start, "%H:%M")
        .with_context(|| format!("Invalid window start '{}'", start))?;
    let end = NaiveTime::parse_from_str(end, "%H:%M")
        .with_context(|| format!("Invalid window end '{}'", end))?;
    if end <= start {
        return Err(anyhow!("Window end must be after its start"));
    }
    Ok((start, end))
}
