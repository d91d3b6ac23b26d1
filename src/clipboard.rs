use crate::error::{Result, SnipzError};
use std::io::Write;
use std::process::{Command, Stdio};

/// Copies text to the system clipboard in an OS-specific way.
/// - macOS: uses pbcopy
/// - Linux: uses xclip or xsel
/// - Windows: uses clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_through("pbcopy", &[], text)
    }

    #[cfg(target_os = "linux")]
    {
        // Try xclip first, then xsel
        pipe_through("xclip", &["-selection", "clipboard"], text).or_else(|_| {
            pipe_through("xsel", &["--clipboard", "--input"], text).map_err(|_| {
                SnipzError::Clipboard(
                    "No clipboard command found. Install xclip or xsel.".to_string(),
                )
            })
        })
    }

    #[cfg(target_os = "windows")]
    {
        pipe_through("clip", &[], text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        Err(SnipzError::Clipboard(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
fn pipe_through(cmd: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| SnipzError::Clipboard(format!("Failed to spawn {}: {}", cmd, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| SnipzError::Clipboard(format!("Failed to write to {}: {}", cmd, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| SnipzError::Clipboard(format!("Failed to wait for {}: {}", cmd, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(SnipzError::Clipboard(format!("{} exited with error", cmd)))
    }
}
