use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SnippetStore;

/// Removes a snippet's backing file. Confirmation happens in the CLI layer
/// before this is called; a declined confirmation never reaches here.
pub fn run(store: &SnippetStore, name: &str) -> Result<CmdResult> {
    store.remove(name)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Snippet deleted successfully."));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SnipzError;
    use std::fs;

    #[test]
    fn removes_the_backing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = SnippetStore::new(temp_dir.path().to_path_buf());
        fs::write(store.path_of("gone"), "x").unwrap();

        run(&store, "gone").unwrap();
        assert!(!store.exists("gone"));
    }

    #[test]
    fn missing_snippet_fails_and_touches_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = SnippetStore::new(temp_dir.path().to_path_buf());
        fs::write(store.path_of("keep"), "k").unwrap();

        assert!(matches!(
            run(&store, "nope"),
            Err(SnipzError::Delete { .. })
        ));
        assert_eq!(store.list().unwrap(), vec!["keep"]);
    }
}
