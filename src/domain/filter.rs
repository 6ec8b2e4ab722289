//! Filter parameters for listing complaints.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the filterable complaint fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Status,
    Category,
    Priority,
}

impl FilterField {
    /// Query parameter name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::Status => "status",
            FilterField::Category => "category",
            FilterField::Priority => "priority",
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter parameters for listing complaints.
///
/// The same type doubles as a partial update: `None` means "leave as is" when
/// merging, while an empty string means "no filter on this field".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintFilter {
    /// Filter by status wire name (e.g. `open`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Filter by category id (e.g. `water_supply`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Filter by priority id (e.g. `high`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

impl ComplaintFilter {
    /// A patch that sets a single field.
    pub fn only(field: FilterField, value: impl Into<String>) -> Self {
        let mut filter = Self::default();
        *filter.slot_mut(field) = Some(value.into());
        filter
    }

    /// A patch that empties every field.
    pub fn cleared() -> Self {
        Self {
            status: Some(String::new()),
            category: Some(String::new()),
            priority: Some(String::new()),
        }
    }

    pub fn get(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Status => self.status.as_deref(),
            FilterField::Category => self.category.as_deref(),
            FilterField::Priority => self.priority.as_deref(),
        }
    }

    fn slot_mut(&mut self, field: FilterField) -> &mut Option<String> {
        match field {
            FilterField::Status => &mut self.status,
            FilterField::Category => &mut self.category,
            FilterField::Priority => &mut self.priority,
        }
    }

    /// Overwrite only the fields present in `patch`.
    pub fn merge(&mut self, patch: ComplaintFilter) {
        let ComplaintFilter {
            status,
            category,
            priority,
        } = patch;
        for (field, value) in [
            (FilterField::Status, status),
            (FilterField::Category, category),
            (FilterField::Priority, priority),
        ] {
            if value.is_some() {
                *self.slot_mut(field) = value;
            }
        }
    }

    /// Fields with a non-empty value, as query parameters.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        [FilterField::Status, FilterField::Category, FilterField::Priority]
            .into_iter()
            .filter_map(|field| match self.get(field) {
                Some(value) if !value.is_empty() => Some((field.as_str(), value.to_string())),
                _ => None,
            })
            .collect()
    }

    /// Whether any field actually narrows the listing.
    pub fn is_active(&self) -> bool {
        !self.query_pairs().is_empty()
    }
}
