use crate::error::{Result, SnipzError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.yaml";
const SNIPPETS_DIRNAME: &str = "snippets";

pub const DEFAULT_EDITOR: &str = "nano";

pub const KEY_SNIPPETS_DIR: &str = "snippets-dir";
pub const KEY_EDITOR: &str = "editor";

/// Configuration for snipz, stored as YAML in the config root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct SnipzConfig {
    /// Directory holding one file per snippet
    #[serde(default)]
    pub snippets_dir: PathBuf,

    /// Editor command used to create and edit snippets
    #[serde(default = "default_editor")]
    pub editor: String,
}

fn default_editor() -> String {
    DEFAULT_EDITOR.to_string()
}

impl SnipzConfig {
    pub fn defaults(root: &Path) -> Self {
        Self {
            snippets_dir: root.join(SNIPPETS_DIRNAME),
            editor: default_editor(),
        }
    }

    /// Load config from the given root directory. A missing file is first-run
    /// initialization: the defaults are written out and returned.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILENAME);

        if !path.exists() {
            let config = Self::defaults(root);
            config.save(root)?;
            return Ok(config);
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| SnipzError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let mut config: SnipzConfig = serde_yaml::from_str(&content)
            .map_err(|e| SnipzError::Config(format!("Failed to parse {}: {}", path.display(), e)))?;

        // A missing snippets-dir key deserializes to an empty path
        if config.snippets_dir.as_os_str().is_empty() {
            config.snippets_dir = root.join(SNIPPETS_DIRNAME);
        }

        Ok(config)
    }

    /// Save config to the given root directory.
    pub fn save(&self, root: &Path) -> Result<()> {
        if !root.exists() {
            fs::create_dir_all(root).map_err(SnipzError::DirectoryCreate)?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| SnipzError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(root.join(CONFIG_FILENAME), content)
            .map_err(|e| SnipzError::Config(format!("Failed to write config: {}", e)))?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_SNIPPETS_DIR => Some(self.snippets_dir.display().to_string()),
            KEY_EDITOR => Some(self.editor.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            KEY_SNIPPETS_DIR => self.snippets_dir = PathBuf::from(value),
            KEY_EDITOR => self.editor = value.to_string(),
            _ => return Err(SnipzError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }

    /// All key/value pairs, in the order `config` lists them.
    pub fn entries(&self) -> Vec<(String, String)> {
        vec![
            (KEY_SNIPPETS_DIR.to_string(), self.snippets_dir.display().to_string()),
            (KEY_EDITOR.to_string(), self.editor.clone()),
        ]
    }
}

/// Resolves the config root: `SNIPZ_HOME` when set, otherwise the platform
/// config directory.
pub fn config_root() -> Result<PathBuf> {
    if let Ok(home) = env::var("SNIPZ_HOME") {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }

    let proj_dirs = ProjectDirs::from("com", "snipz", "snipz")
        .ok_or_else(|| SnipzError::Config("Could not determine config directory".to_string()))?;
    Ok(proj_dirs.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_under_root() {
        let config = SnipzConfig::defaults(Path::new("/tmp/snipz-root"));
        assert_eq!(config.snippets_dir, Path::new("/tmp/snipz-root/snippets"));
        assert_eq!(config.editor, DEFAULT_EDITOR);
    }

    #[test]
    fn load_missing_writes_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().join("fresh");

        let config = SnipzConfig::load(&root).unwrap();
        assert_eq!(config, SnipzConfig::defaults(&root));
        assert!(root.join(CONFIG_FILENAME).exists());

        // Subsequent reads return the persisted defaults
        let reloaded = SnipzConfig::load(&root).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn save_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();

        let mut config = SnipzConfig::defaults(root);
        config.set(KEY_EDITOR, "vi").unwrap();
        config.save(root).unwrap();

        let loaded = SnipzConfig::load(root).unwrap();
        assert_eq!(loaded.editor, "vi");
    }

    #[test]
    fn missing_keys_fall_back() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        fs::write(root.join(CONFIG_FILENAME), "editor: hx\n").unwrap();

        let config = SnipzConfig::load(root).unwrap();
        assert_eq!(config.editor, "hx");
        assert_eq!(config.snippets_dir, root.join(SNIPPETS_DIRNAME));
    }

    #[test]
    fn set_unknown_key_fails() {
        let mut config = SnipzConfig::defaults(Path::new("/tmp"));
        assert!(config.set("no-such-key", "x").is_err());
    }

    #[test]
    fn get_known_keys() {
        let config = SnipzConfig::defaults(Path::new("/tmp/r"));
        assert_eq!(config.get(KEY_EDITOR).unwrap(), DEFAULT_EDITOR);
        assert_eq!(config.get(KEY_SNIPPETS_DIR).unwrap(), "/tmp/r/snippets");
        assert!(config.get("bogus").is_none());
    }

    #[test]
    fn config_root_honors_env_override() {
        let temp_dir = tempfile::tempdir().unwrap();
        env::set_var("SNIPZ_HOME", temp_dir.path());
        let root = config_root().unwrap();
        env::remove_var("SNIPZ_HOME");
        assert_eq!(root, temp_dir.path());
    }
}
