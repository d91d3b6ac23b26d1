use crate::commands::CmdResult;
use crate::error::{Result, SnipzError};
use crate::shell;
use crate::store::SnippetStore;

/// Executes a snippet through the host shell, forwarding `extra_args` as the
/// script's positional arguments. Output streams to the terminal live.
pub fn run(store: &SnippetStore, name: &str, extra_args: &[String]) -> Result<CmdResult> {
    let content = store.read(name)?;
    if content.is_empty() {
        return Err(SnipzError::EmptySnippet(name.to_string()));
    }

    shell::run_script(name, &content, extra_args)?;
    Ok(CmdResult::default())
}
