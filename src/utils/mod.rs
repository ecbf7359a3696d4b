// Utility module exports

pub mod time;
