//! Host-shell execution of snippet bodies.

use crate::error::{Result, SnipzError};
use std::process::Command;

/// Runs a snippet body through the host shell: `sh -c <content> <name>
/// <extra_args...>`, so the script sees its own name as `$0` and the extra
/// arguments as `$1`, `$2`, ...
///
/// The child inherits stdin/stdout/stderr; output streams live and is never
/// captured. A non-zero exit is surfaced, not retried.
pub fn run_script(name: &str, content: &str, extra_args: &[String]) -> Result<()> {
    let status = Command::new("sh")
        .arg("-c")
        .arg(content)
        .arg(name)
        .args(extra_args)
        .status()?;

    if !status.success() {
        return Err(SnipzError::Execution {
            name: name.to_string(),
            status,
        });
    }
    Ok(())
}
