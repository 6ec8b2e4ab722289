//! The closed set of state transitions.

use crate::domain::{Category, Complaint, ComplaintFilter, Priority};

/// A tagged description of a state change, dispatched by a view controller in
/// response to user input or an API result.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Set the loading flag. Leaves any error in place.
    SetLoading(bool),
    /// Record a blocking error and stop loading.
    SetError(String),
    /// Replace the complaint list wholesale and stop loading.
    SetComplaints(Vec<Complaint>),
    /// Prepend a complaint. No de-duplication by id.
    AddComplaint(Complaint),
    /// Replace the complaint with the same id. No-op if there is none.
    UpdateComplaint(Complaint),
    SetCategories(Vec<Category>),
    SetPriorities(Vec<Priority>),
    /// Merge the present fields into the current filters.
    SetFilters(ComplaintFilter),
}

impl Action {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetLoading(_) => "set_loading",
            Action::SetError(_) => "set_error",
            Action::SetComplaints(_) => "set_complaints",
            Action::AddComplaint(_) => "add_complaint",
            Action::UpdateComplaint(_) => "update_complaint",
            Action::SetCategories(_) => "set_categories",
            Action::SetPriorities(_) => "set_priorities",
            Action::SetFilters(_) => "set_filters",
        }
    }
}
