use crate::error::CatlrError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
pub const IGNORE_FILE_NAME: &str = ".catlrignore";
/// Patterns from `<root>/.catlrignore`; empty when the file does not exist.
pub fn load_ignore_patterns(root: &Path) -> Result<Vec<String>, CatlrError> {
    let path = root.join(IGNORE_FILE_NAME);
    match fs::read_to_string(&path) {
        Ok(text) => Ok(parse_ignore_patterns(&text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(CatlrError::io(path, e)),
    }
}
/// One pattern per line; blank lines and `#` comments are skipped.
pub fn parse_ignore_patterns(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
