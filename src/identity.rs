use std::fs::File;
use std::path::Path;
/// Device and file identifier of a regular file.
///
/// Captured once for standard output when it is redirected to a regular
/// file; every candidate is compared against it before its content is
/// emitted, so the report never reads itself while it grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutputIdentity {
    device: u64,
    inode: u64,
}
impl OutputIdentity {
    /// Identity of standard output, if it is redirected to a regular file.
    /// Terminals and pipes have none.
    pub fn of_stdout() -> Option<Self> {
        use std::io::IsTerminal;
        if std::io::stdout().is_terminal() {
            return None;
        }
        stdout_file().and_then(|file| Self::of_file(&file))
    }
    /// Identity of the regular file at `path`, following symlinks.
    pub fn of_path(path: impl AsRef<Path>) -> Option<Self> {
        let metadata = std::fs::metadata(path).ok()?;
        Self::from_metadata(&metadata)
    }
    /// Identity of an open regular file.
    pub fn of_file(file: &File) -> Option<Self> {
        let metadata = file.metadata().ok()?;
        Self::from_metadata(&metadata)
    }
    /// Whether `path` refers to the same underlying file.
    pub fn matches(&self, path: &Path) -> bool {
        Self::of_path(path).is_some_and(|other| other == *self)
    }
    #[cfg(unix)]
    fn from_metadata(metadata: &std::fs::Metadata) -> Option<Self> {
        use std::os::unix::fs::MetadataExt;
        if !metadata.file_type().is_file() {
            return None;
        }
        Some(Self {
            device: metadata.dev(),
            inode: metadata.ino(),
        })
    }
    #[cfg(not(unix))]
    fn from_metadata(_metadata: &std::fs::Metadata) -> Option<Self> {
        None
    }
}
#[cfg(unix)]
fn stdout_file() -> Option<File> {
    use std::os::fd::AsFd;
    let fd = std::io::stdout().as_fd().try_clone_to_owned().ok()?;
    Some(File::from(fd))
}
#[cfg(not(unix))]
fn stdout_file() -> Option<File> {
    None
}
