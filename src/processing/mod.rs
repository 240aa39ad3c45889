//! Prefix list processing logic.
//!
//! This module contains the business logic applied to fetched prefix lists:
//! - [`select`] - Owner/name filtering and name-ordered output construction

mod select;

// Re-export public types and functions
pub use select::{
    select_prefix_lists, LogObserver, SelectionCriteria, SelectionObserver, SelectionResult,
};
