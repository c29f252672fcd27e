use std::path::PathBuf;
/// Where a root's tree drawing came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeSource {
    /// The configured external tree command.
    External,
    /// The built-in renderer.
    Native,
}
/// What the content scan of one root emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentScan {
    /// Relative paths (with `/` separators) whose content was emitted, in walk order.
    pub printed: Vec<String>,
    /// Files skipped because they are the report's own output.
    pub loop_skipped: Vec<String>,
    /// Entries that could not be read or enumerated.
    pub unreadable: usize,
}
/// The outcome of auditing one root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootReport {
    /// The canonicalized root.
    pub root: PathBuf,
    pub tree: TreeSource,
    pub contents: ContentScan,
}
/// A root that could not be audited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootFailure {
    /// The root as it was requested.
    pub path: PathBuf,
    pub message: String,
}
/// The outcome of a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditSummary {
    pub roots: Vec<RootReport>,
    pub failures: Vec<RootFailure>,
}
