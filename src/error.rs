use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnipzError {
    #[error("Failed to create snippets directory: {0}")]
    DirectoryCreate(#[source] std::io::Error),

    #[error("Failed to read snippet '{name}': {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Snippet '{0}' is empty")]
    EmptySnippet(String),

    #[error("Snippet '{name}' failed: {status}")]
    Execution { name: String, status: ExitStatus },

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("Failed to delete snippet '{name}': {source}")]
    Delete {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Usage(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SnipzError>;
