// Room catalog entry
// Decorates free-slot and availability output with human-readable identity

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    /// Optional room number (e.g. "2.04") shown alongside the name.
    #[serde(default)]
    pub number: Option<String>,
}

impl Room {
    pub fn display_name(&self) -> String {
        match &self.number {
            Some(number) => format!("{} ({})", self.name, number),
            None => self.name.clone(),
        }
    }
}
