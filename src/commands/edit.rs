use crate::commands::{CmdMessage, CmdResult};
use crate::config::SnipzConfig;
use crate::editor;
use crate::error::Result;
use crate::store::SnippetStore;

/// Opens a snippet in the configured editor. This is the sole creation path:
/// editing a name with no backing file lets the editor create it on save.
pub fn run(store: &SnippetStore, config: &SnipzConfig, name: &str) -> Result<CmdResult> {
    store.ensure_dir()?;
    let existed = store.exists(name);

    editor::open(config, store.path_of(name))?;

    let mut result = CmdResult::default();
    if !existed {
        if store.exists(name) {
            result.add_message(CmdMessage::success(format!("Snippet '{}' created.", name)));
        } else {
            result.add_message(CmdMessage::info(format!(
                "Snippet '{}' was not saved.",
                name
            )));
        }
    }
    Ok(result)
}
