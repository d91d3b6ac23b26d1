use crate::commands::{CmdMessage, CmdResult};
use crate::config::SnipzConfig;
use crate::error::{Result, SnipzError};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(root: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = SnipzConfig::load(root)?;
            Ok(CmdResult::default().with_entries(config.entries()))
        }
        ConfigAction::ShowKey(key) => {
            let config = SnipzConfig::load(root)?;
            let value = config
                .get(&key)
                .ok_or_else(|| SnipzError::Config(format!("Unknown config key: {}", key)))?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(value));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = SnipzConfig::load(root)?;
            config.set(&key, &value)?;
            config.save(root)?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
            Ok(result)
        }
    }
}
