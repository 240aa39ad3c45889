// cargo watch -x 'fmt' -x 'run'

//! Lists customer-managed EC2 prefix lists, filtered by owner and name,
//! sorted by name. The AWS CLI does the talking; this crate does the
//! filtering, ordering and display.

pub mod aws;
pub mod config;
pub mod models;
pub mod output;
pub mod processing;

pub use processing::{
    select_prefix_lists, LogObserver, SelectionCriteria, SelectionObserver, SelectionResult,
};

use aws::Data;
use std::error::Error;

/// Read prefix lists from cache, or from the AWS CLI when today's cache is
/// missing.
pub fn get_prefix_lists(cache_file: Option<&str>) -> Result<Data, Box<dyn Error>> {
    let data = aws::read_prefix_list_cache(cache_file)?;
    Ok(data)
}

/// Read prefix lists and apply the selection criteria in one step, reporting
/// through the default log-backed observer.
pub fn get_selected_prefix_lists(
    cache_file: Option<&str>,
    criteria: &SelectionCriteria,
) -> Result<SelectionResult, Box<dyn Error>> {
    let data = get_prefix_lists(cache_file)?;
    Ok(select_prefix_lists(
        &data.prefix_lists,
        criteria,
        &LogObserver,
    ))
}
