//! Cache management for prefix list data.
//!
//! Keeps one dated JSON snapshot of the describe response on disk so repeat
//! runs in a day do not hit the API again. Cache files hold the raw response
//! shape, so a file captured straight from the CLI works as-is.

use super::ec2::{describe_managed_prefix_lists, Data};
use std::error::Error;
use std::path::Path;

/// Cache file name for today's date (Pacific/Auckland).
fn default_cache_file() -> String {
    let today = chrono::Utc::now().with_timezone(&chrono_tz::Pacific::Auckland);
    format!("prefix_list_cache_{}.json", today.format("%Y-%m-%d"))
}

/// Read prefix list data from a cache file, or fetch from AWS if today's
/// default cache does not exist yet.
///
/// # Arguments
/// * `cache_file` - Optional explicit cache path. When given, the file must
///   exist; when `None`, the dated default name is used and a missing file
///   triggers a fetch plus write-back.
///
/// # Returns
/// * `Ok(Data)` - The prefix list data from cache or AWS
/// * `Err` - If an explicit cache file is missing, or parsing/fetching fails
pub fn read_prefix_list_cache(cache_file: Option<&str>) -> Result<Data, Box<dyn Error>> {
    let cache_file = match cache_file {
        Some(file) => {
            if !Path::new(file).exists() {
                return Err(format!("Cache file does not exist: {file}").into());
            }
            log::info!("Using provided cache file: {file}");
            file.to_string()
        }
        None => default_cache_file(),
    };

    let data = match std::fs::read_to_string(&cache_file) {
        Ok(json) => {
            log::info!("Reading from cache file: {cache_file}");
            serde_json::from_str(&json).map_err(|e| format!("Error parsing cache JSON: {e}"))?
        }
        Err(_) => {
            log::warn!("Cache file not found: {cache_file}");
            let data = describe_managed_prefix_lists()?;

            let json =
                serde_json::to_string(&data).map_err(|e| format!("Error serializing JSON: {e}"))?;
            log::warn!("Writing data to cache file: {cache_file}");
            std::fs::write(&cache_file, json)
                .map_err(|e| format!("Error writing cache file {cache_file}: {e}"))?;
            data
        }
    };

    Ok(data)
}
