//! Core domain types for the complaint client.
//!
//! This module contains pure data types with no transport dependencies:
//! - Complaints and their status lifecycle
//! - Category and priority reference data
//! - Listing filters

pub mod catalog;
pub mod complaint;
pub mod filter;
mod timestamp;

pub use catalog::{Category, Priority};
pub use complaint::{Complaint, ComplaintId, ComplaintStatus, NewComplaint};
pub use filter::{ComplaintFilter, FilterField};
