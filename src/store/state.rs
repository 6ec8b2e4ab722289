//! The canonical client-side snapshot of server data.

use serde::Serialize;

use crate::domain::{Category, Complaint, ComplaintFilter, Priority};

/// Application state for one session.
///
/// In well-behaved usage at most one of `loading` and `error` is set at a time,
/// but nothing here enforces it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppState {
    /// Complaints in server order, newly created ones prepended
    pub complaints: Vec<Complaint>,
    pub categories: Vec<Category>,
    pub priorities: Vec<Priority>,
    pub loading: bool,
    /// Last blocking error, shown in place of the list
    pub error: Option<String>,
    pub filters: ComplaintFilter,
}

impl AppState {
    /// Look up a loaded complaint by id.
    pub fn complaint(&self, id: &str) -> Option<&Complaint> {
        self.complaints.iter().find(|c| c.id.0 == id)
    }

    /// Display name for a category id, falling back to the id itself.
    pub fn category_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
            .unwrap_or(id)
    }

    /// Display name for a priority id, falling back to the id itself.
    pub fn priority_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.priorities
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.as_str())
            .unwrap_or(id)
    }
}
