//! Domain models for the AWS prefix list summary.
//!
//! This module contains the core data structures used throughout the application:
//! - [`PrefixList`] - one managed prefix list record from the API
//! - [`Tag`] - resource tag attached to a prefix list

mod prefix_list;

// Re-export public types
pub use prefix_list::{PrefixList, Tag, NAME_PLACEHOLDER};
