use crate::error::CatlrError;
use std::fs;
use std::path::{Path, PathBuf};
pub const DEFAULT_TREE_COMMAND: &str = "tree";
pub const DEFAULT_FILE_COMMAND: &str = "bat";
const TREE_KEY: &str = "treePrintCommand";
const FILE_KEY: &str = "filePrintCommand";
/// The external commands a run may delegate to, read from
/// `~/.config/catlr/catlr.conf`:
///
/// ```text
/// # external commands
/// treePrintCommand = lsd --tree
/// filePrintCommand = bat
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    pub tree_command: String,
    pub file_command: String,
}
impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            tree_command: DEFAULT_TREE_COMMAND.to_string(),
            file_command: DEFAULT_FILE_COMMAND.to_string(),
        }
    }
}
impl ToolConfig {
    /// Reads the user's config file, falling back to defaults when there is
    /// no home directory or the file is missing or unreadable.
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            return Self::default();
        };
        match Self::from_file(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::debug!("Using default tool config: {}", err);
                Self::default()
            }
        }
    }
    pub fn from_file(path: &Path) -> Result<Self, CatlrError> {
        let text = fs::read_to_string(path).map_err(|e| CatlrError::io(path, e))?;
        Ok(Self::parse(&text))
    }
    /// Parses `key = value` lines. Blank lines, `#` comments, lines without
    /// `=` and unknown keys are skipped; empty values keep the default.
    pub fn parse(text: &str) -> Self {
        let mut config = Self::default();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key.trim() {
                TREE_KEY => config.tree_command = value.to_string(),
                FILE_KEY => config.file_command = value.to_string(),
                other => tracing::debug!("Ignoring unknown config key '{}'", other),
            }
        }
        config
    }
}
/// Location of the config file under the user's home directory.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("catlr").join("catlr.conf"))
}
