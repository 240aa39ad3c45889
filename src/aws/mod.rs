//! AWS CLI interaction.
//!
//! This module handles all AWS-related operations:
//! - [`cli`] - Command execution for the AWS CLI
//! - [`cache`] - Caching of prefix list data
//! - [`ec2`] - EC2 managed prefix list queries

mod cache;
mod cli;
mod ec2;

// Re-export public types and functions
pub use cache::read_prefix_list_cache;
pub use cli::run;
pub use ec2::{describe_managed_prefix_lists, parse_describe_output, Data};
