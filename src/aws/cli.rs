//! AWS CLI command execution.
//!
//! Runs `aws` commands in a subprocess and hands back their stdout. The
//! caller is expected to be authenticated already (`aws sso login`, profile,
//! or instance role) - no credential handling happens here.

use colored::Colorize;
use regex::Regex;
use std::error::Error;
use std::process::Command;
use std::sync::OnceLock;

/// Hard cap on accepted stdout size. A describe call returns at most a few
/// hundred KB; anything beyond this indicates the wrong command was run.
const MAX_STDOUT_BYTES: usize = 500_000;

static COMMAND_REGEX: OnceLock<Regex> = OnceLock::new();

/// Regex splitting a command string on spaces while keeping quoted
/// substrings (single or double) together.
fn command_regex() -> &'static Regex {
    COMMAND_REGEX.get_or_init(|| {
        Regex::new(r#"'([^']*)'\s*|\"([^\"]*)\"\s*|([^'\s]*)\s*"#).expect("Invalid Regex")
    })
}

/// Run a command line and return its stdout.
///
/// # Arguments
/// * `cmd` - Full command string, e.g. `aws ec2 describe-managed-prefix-lists --output json`
///
/// # Returns
/// * `Ok(String)` - stdout of the command on success
/// * `Err` - spawn failure, non-zero exit (stderr captured in the message),
///   oversized or non-UTF-8 output
pub fn run(cmd: &str) -> Result<String, Box<dyn Error>> {
    log::debug!("run({cmd})", cmd = cmd.on_blue());

    let parts: Vec<&str> = split_and_strip(cmd);
    log::trace!("split parts={:?}", parts);

    let mut command = Command::new(parts[0]);
    command.args(parts.iter().skip(1));

    let output = command.output().map_err(|e| {
        log::error!("Command spawn failed: {}", e);
        format!("Failed to execute '{}': {}", parts[0], e)
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        log::trace!(
            "code={code:?}, status={status}\n┎######\nstderr=\n{stderr}\n┖######",
            code = output.status.code(),
            status = output.status,
            stderr = stderr.red()
        );
        log::warn!(
            "{failed} to run {cmd}",
            failed = "failed".on_red(),
            cmd = cmd.on_blue()
        );
        return Err(format!("ERROR running: {stderr}").into());
    }

    log::debug!("Success cmd: {cmd}");
    log::debug!("Success output.stdout.len(): {}", output.stdout.len());

    if output.stdout.len() > MAX_STDOUT_BYTES {
        return Err(format!(
            "Response too large: {} bytes from: {:?}",
            output.stdout.len(),
            parts
        )
        .into());
    }

    let stdout = String::from_utf8(output.stdout).map_err(|e| format!("Invalid UTF-8: {}", e))?;

    Ok(stdout)
}

/// Split a command string on spaces, preserving quoted substrings.
fn split_and_strip(input: &str) -> Vec<&str> {
    command_regex()
        .find_iter(input)
        .map(|m| m.as_str().trim().trim_matches('\'').trim_matches('"'))
        .collect()
}
