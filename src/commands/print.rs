use crate::commands::CmdResult;
use crate::error::{Result, SnipzError};
use crate::store::SnippetStore;

/// Reads a snippet and returns its content verbatim for the CLI to print.
pub fn run(store: &SnippetStore, name: &str) -> Result<CmdResult> {
    let content = store.read(name)?;
    if content.is_empty() {
        return Err(SnipzError::EmptySnippet(name.to_string()));
    }

    Ok(CmdResult::default().with_content(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn returns_content_verbatim() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = SnippetStore::new(temp_dir.path().to_path_buf());
        fs::write(store.path_of("greet"), "echo hi\necho bye\n").unwrap();

        let result = run(&store, "greet").unwrap();
        assert_eq!(result.content.as_deref(), Some("echo hi\necho bye\n"));
    }

    #[test]
    fn empty_snippet_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = SnippetStore::new(temp_dir.path().to_path_buf());
        fs::write(store.path_of("empty"), "").unwrap();

        assert!(matches!(
            run(&store, "empty"),
            Err(SnipzError::EmptySnippet(_))
        ));
    }

    #[test]
    fn missing_snippet_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = SnippetStore::new(temp_dir.path().to_path_buf());
        assert!(matches!(run(&store, "nope"), Err(SnipzError::Read { .. })));
    }
}
