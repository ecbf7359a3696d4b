// Service module exports

pub mod aggregator;
pub mod availability;
pub mod free_slots;
pub mod grid;
pub mod layout;
pub mod now_indicator;
pub mod planner;
pub mod selection;
