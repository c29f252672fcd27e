use crate::filter::{ScopeFilter, Visibility};
use crate::output::root_display_name;
use crate::pattern::{Candidate, SEPARATOR};
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const VERTICAL: &str = "│   ";
const BLANK: &str = "    ";
struct Child {
    name: OsString,
    path: PathBuf,
    candidate: Candidate,
    is_dir: bool,
    descend: bool,
    rescued: bool,
}
/// Draws the tree of `root` in the style of the `tree` command.
///
/// Entries are filtered with `listing` first and the survivors sorted by
/// name (byte order), so hidden entries never affect the drawing.
/// Directories get a trailing `/`. Unreadable directories are drawn empty,
/// and symlinked directories are drawn but not entered. A directory kept
/// only for an include below it is left out when nothing inside it is
/// visible.
///
/// # Errors
///
/// Only failures to write to `out` are returned.
pub fn render_tree(root: &Path, listing: &ScopeFilter, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}{}", root_display_name(root), SEPARATOR)?;
    render_children(root, &Candidate::root(), "", listing, out)
}
fn render_children(
    dir: &Path,
    parent: &Candidate,
    prefix: &str,
    listing: &ScopeFilter,
    out: &mut dyn Write,
) -> io::Result<()> {
    let children = visible_children(dir, parent, listing);
    let last = children.len().saturating_sub(1);
    for (index, child) in children.iter().enumerate() {
        let is_last = index == last;
        let branch = if is_last { LAST_BRANCH } else { BRANCH };
        write!(out, "{}{}{}", prefix, branch, child.name.to_string_lossy())?;
        if !child.is_dir {
            writeln!(out)?;
            continue;
        }
        writeln!(out, "{}", SEPARATOR)?;
        if child.descend {
            let extension = if is_last { BLANK } else { VERTICAL };
            let nested = format!("{prefix}{extension}");
            render_children(&child.path, &child.candidate, &nested, listing, out)?;
        }
    }
    Ok(())
}
fn visible_children(dir: &Path, parent: &Candidate, listing: &ScopeFilter) -> Vec<Child> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Skipping unreadable directory {}: {}", dir.display(), e);
            return Vec::new();
        }
    };
    let mut children: Vec<Child> = entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let file_type = entry.file_type().ok()?;
            let path = entry.path();
            let is_link = file_type.is_symlink();
            let is_dir = file_type.is_dir() || (is_link && path.is_dir());
            let name = entry.file_name();
            let candidate = parent.child(&name.to_string_lossy());
            let visibility = listing.visibility(&candidate, is_dir);
            if !visibility.is_visible() {
                return None;
            }
            Some(Child {
                name,
                path,
                candidate,
                is_dir,
                descend: is_dir && !is_link,
                rescued: visibility == Visibility::Rescued,
            })
        })
        .collect();
    // A rescued directory is only drawn when something inside it survives.
    children.retain(|child| {
        !child.rescued
            || (child.descend
                && !visible_children(&child.path, &child.candidate, listing).is_empty())
    });
    children.sort_by(|a, b| a.name.cmp(&b.name));
    children
}
