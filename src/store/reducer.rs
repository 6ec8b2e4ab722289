//! Pure state reduction.
//!
//! ```text
//! (AppState, Action) ──reduce()──> AppState
//! ```
//!
//! `reduce` performs no I/O. Network calls happen in the view controllers,
//! before and after dispatch.

use super::action::Action;
use super::state::AppState;

/// Compute the next state from the current one and an action.
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::SetLoading(loading) => {
            state.loading = loading;
        }
        Action::SetError(message) => {
            state.error = Some(message);
            state.loading = false;
        }
        Action::SetComplaints(complaints) => {
            state.complaints = complaints;
            state.loading = false;
        }
        Action::AddComplaint(complaint) => {
            state.complaints.insert(0, complaint);
        }
        Action::UpdateComplaint(complaint) => {
            if let Some(slot) = state.complaints.iter_mut().find(|c| c.id == complaint.id) {
                *slot = complaint;
            }
        }
        Action::SetCategories(categories) => {
            state.categories = categories;
        }
        Action::SetPriorities(priorities) => {
            state.priorities = priorities;
        }
        Action::SetFilters(patch) => {
            state.filters.merge(patch);
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Category, Complaint, ComplaintFilter, ComplaintId, ComplaintStatus, FilterField,
    };

    fn complaint(id: &str, title: &str) -> Complaint {
        Complaint {
            id: ComplaintId::from(id),
            user_id: Some("user123".to_string()),
            title: title.to_string(),
            description: format!("{title} description"),
            category_id: "general".to_string(),
            priority_id: "low".to_string(),
            status: ComplaintStatus::Open,
            assigned_to: None,
            created_at: None,
            updated_at: None,
            metadata: serde_json::Value::Null,
        }
    }

    fn apply(state: AppState, actions: impl IntoIterator<Item = Action>) -> AppState {
        actions.into_iter().fold(state, reduce)
    }

    #[test]
    fn test_set_complaints_replaces_wholesale_in_order() {
        let list = vec![complaint("b", "B"), complaint("a", "A"), complaint("c", "C")];
        let state = apply(
            AppState::default(),
            [
                Action::AddComplaint(complaint("z", "Z")),
                Action::SetLoading(true),
                Action::SetComplaints(list.clone()),
            ],
        );
        assert_eq!(state.complaints, list);
        assert!(!state.loading);
    }

    #[test]
    fn test_add_complaint_prepends() {
        let state = apply(
            AppState::default(),
            [Action::SetComplaints(vec![complaint("a", "A"), complaint("b", "B")])],
        );
        let before = state.complaints.len();

        let item = complaint("new", "Pothole on Main St");
        let state = reduce(state, Action::AddComplaint(item.clone()));
        assert_eq!(state.complaints[0], item);
        assert_eq!(state.complaints.len(), before + 1);
    }

    #[test]
    fn test_add_complaint_does_not_deduplicate() {
        let item = complaint("a", "A");
        let state = apply(
            AppState::default(),
            [
                Action::AddComplaint(item.clone()),
                Action::AddComplaint(item.clone()),
            ],
        );
        assert_eq!(state.complaints, vec![item.clone(), item]);
    }

    #[test]
    fn test_update_complaint_replaces_only_matching_entry() {
        let state = apply(
            AppState::default(),
            [Action::SetComplaints(vec![
                complaint("a", "A"),
                complaint("b", "B"),
                complaint("c", "C"),
            ])],
        );

        let mut updated = complaint("b", "B");
        updated.status = ComplaintStatus::Resolved;
        let next = reduce(state.clone(), Action::UpdateComplaint(updated.clone()));

        assert_eq!(next.complaints.len(), 3);
        assert_eq!(next.complaints[0], state.complaints[0]);
        assert_eq!(next.complaints[1], updated);
        assert_eq!(next.complaints[2], state.complaints[2]);
    }

    #[test]
    fn test_update_complaint_with_unknown_id_is_noop() {
        let state = apply(
            AppState::default(),
            [
                Action::SetComplaints(vec![complaint("a", "A")]),
                Action::SetCategories(vec![Category {
                    id: "general".to_string(),
                    name: "General".to_string(),
                }]),
            ],
        );
        let next = reduce(state.clone(), Action::UpdateComplaint(complaint("zzz", "Z")));
        assert_eq!(next, state);
    }

    #[test]
    fn test_set_filters_merges() {
        let state = apply(
            AppState::default(),
            [
                Action::SetFilters(ComplaintFilter::only(FilterField::Status, "open")),
                Action::SetFilters(ComplaintFilter::only(FilterField::Category, "water_supply")),
            ],
        );
        assert_eq!(
            state.filters,
            ComplaintFilter {
                status: Some("open".to_string()),
                category: Some("water_supply".to_string()),
                priority: None,
            }
        );
    }

    #[test]
    fn test_set_loading_keeps_error() {
        let state = apply(
            AppState::default(),
            [
                Action::SetError("db unavailable".to_string()),
                Action::SetLoading(true),
            ],
        );
        assert!(state.loading);
        assert_eq!(state.error.as_deref(), Some("db unavailable"));
    }

    #[test]
    fn test_set_error_stops_loading() {
        let state = apply(
            AppState::default(),
            [
                Action::SetLoading(true),
                Action::SetError("db unavailable".to_string()),
            ],
        );
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("db unavailable"));
    }

    #[test]
    fn test_catalog_lists_are_replaced() {
        let general = Category {
            id: "general".to_string(),
            name: "General".to_string(),
        };
        let water = Category {
            id: "water_supply".to_string(),
            name: "Water Supply".to_string(),
        };
        let state = apply(
            AppState::default(),
            [
                Action::SetCategories(vec![general]),
                Action::SetCategories(vec![water.clone()]),
                Action::SetPriorities(vec![]),
            ],
        );
        assert_eq!(state.categories, vec![water]);
        assert!(state.priorities.is_empty());
        assert_eq!(state.category_name("water_supply"), "Water Supply");
        assert_eq!(state.category_name("electrical"), "electrical");
    }
}
