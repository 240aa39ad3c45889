//! Table output for selected prefix lists.
//!
//! Prints the id -> name mapping as quoted, width-aligned CSV-style rows on
//! stdout; log lines stay on stderr so the table remains machine-readable.

use crate::processing::SelectionResult;
use colored::Colorize;
use std::error::Error;

/// Print the selection result as an aligned CSV table to stdout.
///
/// # Arguments
/// * `result` - The selected prefix lists, already in display order
pub async fn print_prefix_lists(result: &SelectionResult) -> Result<(), Box<dyn Error>> {
    log::info!("#Start print_prefix_lists()");
    log::info!("# Got prefix list count = {}", result.len());

    println!(r#" "cnt",         "prefix_list_id",       "prefix_list_name""#);

    for (i, (id, name)) in result.iter().enumerate() {
        println!(
            "{cnt},{id},{name}",
            cnt = format_field(i + 1, 6),
            id = format_field(id, 24),
            name = format_field(name, 26),
        );
    }

    println!(
        "#{}# {} customer-managed prefix lists",
        "NOTE".on_red(),
        result.len()
    );

    Ok(())
}

/// Format a value as a quoted, right-aligned field.
fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    if quoted.len() >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}
