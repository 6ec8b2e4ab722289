//! Complaint records and their status lifecycle.
//!
//! Complaints are client-side projections of server data. The server is
//! authoritative: instances are created from API responses and replaced
//! wholesale, never patched field by field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque identifier assigned by the server when a complaint is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComplaintId(pub String);

impl From<String> for ComplaintId {
    fn from(id: String) -> Self {
        ComplaintId(id)
    }
}

impl From<&str> for ComplaintId {
    fn from(id: &str) -> Self {
        ComplaintId(id.to_string())
    }
}

impl std::ops::Deref for ComplaintId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for ComplaintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a complaint sits in its lifecycle.
///
/// Any value may be submitted from the client; the server decides which
/// transitions are valid. The server does not check the values it stores,
/// so anything outside the known set decodes as `Unknown` instead of failing
/// the whole response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
    #[serde(other)]
    Unknown,
}

impl ComplaintStatus {
    /// Every status a client may set, in lifecycle order.
    pub const ALL: [ComplaintStatus; 4] = [
        ComplaintStatus::Open,
        ComplaintStatus::InProgress,
        ComplaintStatus::Resolved,
        ComplaintStatus::Closed,
    ];

    /// Wire name, as sent to and received from the server.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Open => "open",
            ComplaintStatus::InProgress => "in_progress",
            ComplaintStatus::Resolved => "resolved",
            ComplaintStatus::Closed => "closed",
            ComplaintStatus::Unknown => "unknown",
        }
    }

    /// Whether this is one of the statuses in [`ComplaintStatus::ALL`].
    pub fn is_known(&self) -> bool {
        !matches!(self, ComplaintStatus::Unknown)
    }

    /// Human-readable label for option lists.
    pub fn label(&self) -> &'static str {
        match self {
            ComplaintStatus::Open => "Open",
            ComplaintStatus::InProgress => "In Progress",
            ComplaintStatus::Resolved => "Resolved",
            ComplaintStatus::Closed => "Closed",
            ComplaintStatus::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplaintStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(ComplaintStatus::Open),
            "in_progress" => Ok(ComplaintStatus::InProgress),
            "resolved" => Ok(ComplaintStatus::Resolved),
            "closed" => Ok(ComplaintStatus::Closed),
            _ => Err(format!("Invalid complaint status: {}", s)),
        }
    }
}

/// A user-submitted issue tracked through a status lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: ComplaintId,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Category reference, assigned by the server's classifier
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category_id: String,
    /// Priority reference, assigned by the server's classifier
    #[serde(default, deserialize_with = "null_as_empty")]
    pub priority_id: String,
    pub status: ComplaintStatus,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default, with = "super::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "super::timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Free-form server metadata (classifier confidence and the like)
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl Complaint {
    /// First eight characters of the identifier, for compact display.
    pub fn short_id(&self) -> &str {
        match self.id.0.char_indices().nth(8) {
            Some((end, _)) => &self.id.0[..end],
            None => &self.id.0,
        }
    }

    /// Whether the server has touched this complaint since it was created.
    pub fn was_updated(&self) -> bool {
        self.updated_at != self.created_at
    }
}

/// Nullable server columns read as empty strings.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComplaint {
    pub title: String,
    pub description: String,
    pub user_id: String,
}
