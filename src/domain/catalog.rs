//! Reference data the server classifies complaints into.
//!
//! Both collections are read-only from the client's point of view and are only
//! used to populate filter option lists.

use serde::{Deserialize, Serialize};

/// A complaint category (e.g. `water_supply`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// A complaint priority (e.g. `high`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Priority {
    pub id: String,
    pub name: String,
    /// Display color code, if the server has one configured
    #[serde(default)]
    pub color: Option<String>,
}
