//! Output formatting for selected prefix lists.
//!
//! This module handles formatting and outputting selection results:
//! - [`table`] - Aligned CSV-style table on stdout

mod table;

pub use table::print_prefix_lists;
