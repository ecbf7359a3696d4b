// Module exports for models

pub mod activity;
pub mod room;
pub mod settings;
pub mod slot;
pub mod source;
