//! Filesystem-backed snippet storage.
//!
//! A snippet is one regular file directly inside the snippets directory:
//! file name = snippet name, file content = raw script text. Nothing is
//! cached; every listing reads the directory fresh.

use crate::error::{Result, SnipzError};
use std::fs;
use std::path::{Path, PathBuf};

pub struct SnippetStore {
    dir: PathBuf,
}

impl SnippetStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Deterministic join of the snippets directory and `name`. Performs no
    /// existence check.
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Creates the snippets directory (and parents) if absent.
    pub fn ensure_dir(&self) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(SnipzError::DirectoryCreate)?;
        }
        Ok(())
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path_of(name).is_file()
    }

    /// Lists snippet names, sorted lexicographically. Directory entries that
    /// are themselves directories are excluded. An empty directory yields an
    /// empty vec, not an error.
    pub fn list(&self) -> Result<Vec<String>> {
        self.ensure_dir()?;

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                continue;
            }
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    pub fn read(&self, name: &str) -> Result<String> {
        fs::read_to_string(self.path_of(name)).map_err(|e| SnipzError::Read {
            name: name.to_string(),
            source: e,
        })
    }

    pub fn remove(&self, name: &str) -> Result<()> {
        fs::remove_file(self.path_of(name)).map_err(|e| SnipzError::Delete {
            name: name.to_string(),
            source: e,
        })
    }
}

/// Rejects names that would escape the snippets directory. Names are used
/// verbatim as file names, so they must not carry path components.
pub fn validate_name(name: &str) -> Result<()> {
    let escapes = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains(std::path::MAIN_SEPARATOR);
    if escapes {
        return Err(SnipzError::Usage(format!("Invalid snippet name: '{}'", name)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn store() -> (tempfile::TempDir, SnippetStore) {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = SnippetStore::new(temp_dir.path().join("snippets"));
        (temp_dir, store)
    }

    #[test]
    fn list_empty_directory_is_empty() {
        let (_tmp, store) = store();
        assert_eq!(store.list().unwrap(), Vec::<String>::new());
    }

    #[test]
    fn list_creates_directory_lazily() {
        let (_tmp, store) = store();
        assert!(!store.dir().exists());
        store.list().unwrap();
        assert!(store.dir().exists());
    }

    #[test]
    fn list_is_sorted_and_skips_directories() {
        let (_tmp, store) = store();
        store.ensure_dir().unwrap();
        fs::write(store.path_of("zeta"), "z").unwrap();
        fs::write(store.path_of("alpha"), "a").unwrap();
        fs::create_dir(store.path_of("subdir")).unwrap();

        assert_eq!(store.list().unwrap(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn path_of_joins_without_existence_check() {
        let (_tmp, store) = store();
        assert_eq!(store.path_of("greet"), store.dir().join("greet"));
    }

    #[test]
    fn read_missing_snippet_fails() {
        let (_tmp, store) = store();
        store.ensure_dir().unwrap();
        assert!(matches!(
            store.read("nope"),
            Err(SnipzError::Read { .. })
        ));
    }

    #[test]
    fn read_roundtrips_content() {
        let (_tmp, store) = store();
        store.ensure_dir().unwrap();
        fs::write(store.path_of("greet"), "echo hi\n").unwrap();
        assert_eq!(store.read("greet").unwrap(), "echo hi\n");
    }

    #[test]
    fn remove_missing_snippet_fails() {
        let (_tmp, store) = store();
        store.ensure_dir().unwrap();
        assert!(matches!(
            store.remove("nope"),
            Err(SnipzError::Delete { .. })
        ));
    }

    #[test]
    fn remove_leaves_other_snippets_alone() {
        let (_tmp, store) = store();
        store.ensure_dir().unwrap();
        fs::write(store.path_of("keep"), "k").unwrap();
        fs::write(store.path_of("gone"), "g").unwrap();

        store.remove("gone").unwrap();
        assert_eq!(store.list().unwrap(), vec!["keep"]);
    }

    #[test]
    fn validate_name_rejects_path_components() {
        assert!(validate_name("greet").is_ok());
        assert!(validate_name("greet.sh").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name(".").is_err());
        assert!(validate_name("..").is_err());
        assert!(validate_name("a/b").is_err());
    }
}
