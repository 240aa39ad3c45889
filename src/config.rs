//! Environment-driven configuration.
//!
//! The tool has no CLI argument surface; everything comes from environment
//! variables (a `.env` file is honoured via `dotenv` in `main`).

use crate::processing::SelectionCriteria;

/// Account id whose prefix lists should be kept. Empty or unset keeps all.
pub const ENV_ACCOUNT_ID: &str = "AWS_ACCOUNT_ID";
/// Case-insensitive substring a prefix list name must contain.
pub const ENV_NAME_FILTER: &str = "PL_FILTER";
/// Case-insensitive substring a prefix list name must not contain.
pub const ENV_NAME_EXCLUDE: &str = "PL_EXCLUDE";
/// Explicit cache file path, replacing the dated default.
pub const ENV_CACHE_FILE: &str = "PL_CACHE_FILE";

/// Build selection criteria from the environment.
///
/// Values pass through as-is: an exported-but-empty variable stays `Some("")`
/// and is treated as unset by the selection logic itself.
pub fn criteria_from_env() -> SelectionCriteria {
    SelectionCriteria {
        account_id: std::env::var(ENV_ACCOUNT_ID).ok(),
        name_filter: std::env::var(ENV_NAME_FILTER).ok(),
        name_exclude: std::env::var(ENV_NAME_EXCLUDE).ok(),
    }
}

/// Cache file override from the environment, if any.
pub fn cache_file_from_env() -> Option<String> {
    std::env::var(ENV_CACHE_FILE)
        .ok()
        .filter(|path| !path.is_empty())
}
