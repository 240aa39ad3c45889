//! EC2 managed prefix list queries.
//!
//! Fetches managed prefix lists through the AWS CLI and deserializes the
//! JSON response. The fetch is a single call: further pages signalled by a
//! `NextToken` are deliberately not requested.

use super::cli;
use crate::models::PrefixList;
use serde::{Deserialize, Serialize};
use std::error::Error;

/// CLI invocation listing every managed prefix list visible to the caller.
const DESCRIBE_CMD: &str = "aws ec2 describe-managed-prefix-lists --output json";

/// Response envelope of `describe-managed-prefix-lists`.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct Data {
    /// Prefix lists returned in this response.
    #[serde(rename = "PrefixLists", default)]
    pub prefix_lists: Vec<PrefixList>,
    /// Continuation token for further pages. Parsed and tolerated, never
    /// followed.
    #[serde(rename = "NextToken", default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Fetch managed prefix lists with a single CLI call.
///
/// # Returns
/// * `Ok(Data)` - The parsed response, first page only
/// * `Err` - If the CLI invocation or JSON parsing fails
pub fn describe_managed_prefix_lists() -> Result<Data, Box<dyn Error>> {
    let output = cli::run(DESCRIBE_CMD)?;
    let data = parse_describe_output(&output)?;

    if data.next_token.is_some() {
        log::warn!("Response carries a NextToken; further pages are not fetched");
    }
    log::info!(
        "Got {} prefix lists from '{DESCRIBE_CMD}'",
        data.prefix_lists.len()
    );

    Ok(data)
}

/// Parse the raw JSON output of the describe call.
///
/// Failures name the JSON path that broke, with the raw output dumped to the
/// error log for inspection.
pub fn parse_describe_output(output: &str) -> Result<Data, Box<dyn Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(output);
    let data: Data = serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::error!("OUTPUT START:\n\n{}\n\nOUTPUT END\n", output);
        format!(
            "Error parsing prefix list JSON: path={} error={}",
            e.path(),
            e
        )
    })?;
    Ok(data)
}
