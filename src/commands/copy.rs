use crate::clipboard;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SnipzError};
use crate::store::SnippetStore;

/// Places a snippet's content on the system clipboard.
pub fn run(store: &SnippetStore, name: &str) -> Result<CmdResult> {
    let content = store.read(name)?;
    if content.is_empty() {
        // No clipboard write happens for an empty snippet
        return Err(SnipzError::EmptySnippet(name.to_string()));
    }

    clipboard::copy_to_clipboard(&content)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Snippet copied to clipboard."));
    Ok(result)
}
