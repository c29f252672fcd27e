use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum CatlrError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not resolve path {path}: {source}")]
    Unresolvable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
impl CatlrError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatlrError::Io {
            path: path.into(),
            source,
        }
    }
    /// True for errors confined to a single scan root.
    pub fn is_root_level(&self) -> bool {
        matches!(
            self,
            CatlrError::Unresolvable { .. } | CatlrError::NotADirectory(_)
        )
    }
}
