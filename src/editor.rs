use crate::config::{SnipzConfig, DEFAULT_EDITOR};
use crate::error::{Result, SnipzError};
use std::env;
use std::path::Path;
use std::process::Command;

/// Picks the editor command. `$EDITOR` wins over the default, but an editor
/// set explicitly in the config wins over `$EDITOR`.
pub fn resolve_editor(config: &SnipzConfig) -> String {
    resolve_from(&config.editor, env::var("EDITOR").ok().as_deref())
}

fn resolve_from(configured: &str, env_editor: Option<&str>) -> String {
    if configured == DEFAULT_EDITOR {
        if let Some(editor) = env_editor {
            if !editor.is_empty() {
                return editor.to_string();
            }
        }
    }
    configured.to_string()
}

/// Opens `path` in the user's editor, inheriting the terminal's streams, and
/// waits for it to close.
pub fn open<P: AsRef<Path>>(config: &SnipzConfig, path: P) -> Result<()> {
    let editor = resolve_editor(config);

    let status = Command::new(&editor)
        .arg(path.as_ref())
        .status()
        .map_err(|e| SnipzError::Editor(format!("Failed to launch '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(SnipzError::Editor(format!(
            "'{}' exited with non-zero status",
            editor
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_default() {
        assert_eq!(resolve_from(DEFAULT_EDITOR, Some("hx")), "hx");
    }

    #[test]
    fn configured_editor_beats_env() {
        assert_eq!(resolve_from("vi", Some("hx")), "vi");
    }

    #[test]
    fn default_without_env() {
        assert_eq!(resolve_from(DEFAULT_EDITOR, None), DEFAULT_EDITOR);
        assert_eq!(resolve_from(DEFAULT_EDITOR, Some("")), DEFAULT_EDITOR);
    }
}
