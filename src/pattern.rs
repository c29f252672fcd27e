use std::path::{Component, Path, MAIN_SEPARATOR};
/// Separator used in every relative path handed to a pattern.
pub const SEPARATOR: char = '/';
const WILDCARD: char = '*';
/// Rewrites platform separators to [`SEPARATOR`].
pub fn normalize_separators(raw: &str) -> String {
    if MAIN_SEPARATOR == SEPARATOR {
        raw.to_string()
    } else {
        raw.replace(MAIN_SEPARATOR, "/")
    }
}
/// A path as seen by the pattern matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    relative: String,
    name: String,
}
impl Candidate {
    /// Builds a candidate from a path already relative to the scan root.
    pub fn new(relative: &str) -> Self {
        let relative = normalize_separators(relative)
            .trim_end_matches(SEPARATOR)
            .to_string();
        let name = relative
            .rsplit(SEPARATOR)
            .next()
            .unwrap_or_default()
            .to_string();
        Self { relative, name }
    }
    /// The scan root itself.
    pub fn root() -> Self {
        Self {
            relative: String::new(),
            name: String::new(),
        }
    }
    /// Reduces `path` to its form relative to `root`. Returns `None` when
    /// `path` is not under `root`.
    pub fn from_path(root: &Path, path: &Path) -> Option<Self> {
        let relative = path.strip_prefix(root).ok()?;
        let segments: Vec<String> = relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        Some(Self::new(&segments.join("/")))
    }
    pub fn child(&self, name: &str) -> Self {
        let relative = if self.relative.is_empty() {
            name.to_string()
        } else {
            format!("{}{}{}", self.relative, SEPARATOR, name)
        };
        Self {
            relative,
            name: name.to_string(),
        }
    }
    pub fn relative(&self) -> &str {
        &self.relative
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Proper ancestors below the root, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = Candidate> + '_ {
        self.relative
            .rmatch_indices(SEPARATOR)
            .map(|(index, _)| Candidate::new(&self.relative[..index]))
    }
}
/// One parsed include or exclude pattern, classified into its shape when
/// parsed so matching is a plain dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Only `*` characters: matches everything.
    Universal,
    /// `*text*`, or any other placement of `*` with every `*` removed.
    Contains(String),
    /// `*text`
    Suffix(String),
    /// `text*`
    Prefix(String),
    /// `dir/`: the directory itself and everything rooted under it.
    Directory(String),
    /// `dir/file`: the full relative path.
    Path(String),
    /// `file`: the base name only.
    Name(String),
}
impl Pattern {
    pub fn parse(raw: &str) -> Self {
        let pattern = normalize_separators(raw);
        if pattern.contains(WILDCARD) {
            return Self::classify_wildcard(&pattern);
        }
        if let Some(dir) = pattern.strip_suffix(SEPARATOR) {
            Pattern::Directory(dir.to_string())
        } else if pattern.contains(SEPARATOR) {
            Pattern::Path(pattern)
        } else {
            Pattern::Name(pattern)
        }
    }
    fn classify_wildcard(pattern: &str) -> Self {
        let stripped: String = pattern.chars().filter(|&c| c != WILDCARD).collect();
        if stripped.is_empty() {
            return Pattern::Universal;
        }
        let stars = pattern.matches(WILDCARD).count();
        let leading = pattern.starts_with(WILDCARD);
        let trailing = pattern.ends_with(WILDCARD);
        match (leading, trailing, stars) {
            (true, true, 2) => Pattern::Contains(pattern[1..pattern.len() - 1].to_string()),
            (true, false, 1) => Pattern::Suffix(pattern[1..].to_string()),
            (false, true, 1) => Pattern::Prefix(pattern[..pattern.len() - 1].to_string()),
            _ => Pattern::Contains(stripped),
        }
    }
    pub fn matches(&self, candidate: &Candidate) -> bool {
        self.matches_parts(candidate.relative(), candidate.name())
    }
    fn matches_parts(&self, relative: &str, name: &str) -> bool {
        match self {
            Pattern::Universal => true,
            Pattern::Contains(text) => relative.contains(text.as_str()),
            Pattern::Suffix(text) => relative.ends_with(text.as_str()),
            Pattern::Prefix(text) => relative.starts_with(text.as_str()),
            Pattern::Directory(dir) => {
                relative == dir
                    || relative
                        .strip_prefix(dir.as_str())
                        .is_some_and(|rest| rest.starts_with(SEPARATOR))
            }
            Pattern::Path(path) => relative == path,
            Pattern::Name(base) => name == base,
        }
    }
    /// Whether this pattern names a path strictly below the directory `dir`
    /// (a relative path). Only root-anchored shapes do; `Name`, `Suffix`,
    /// `Contains` and `Universal` never reach into a hidden directory.
    pub fn reaches_below(&self, dir: &str) -> bool {
        let below = format!("{dir}{SEPARATOR}");
        match self {
            Pattern::Directory(path) | Pattern::Path(path) => path.starts_with(&below),
            Pattern::Prefix(text) => text.starts_with(&below) || below.starts_with(text.as_str()),
            Pattern::Universal | Pattern::Contains(_) | Pattern::Suffix(_) | Pattern::Name(_) => {
                false
            }
        }
    }
    /// The literal relative path named by an anchored pattern.
    pub fn anchored_path(&self) -> Option<&str> {
        match self {
            Pattern::Directory(path) | Pattern::Path(path) => Some(path),
            _ => None,
        }
    }
}
impl From<&str> for Pattern {
    fn from(raw: &str) -> Self {
        Pattern::parse(raw)
    }
}
/// Tests one raw pattern against a relative path and its base name.
pub fn matches(pattern: &str, relative: &str, name: &str) -> bool {
    Pattern::parse(pattern).matches_parts(&normalize_separators(relative), name)
}
