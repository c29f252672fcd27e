use crate::error::CatlrError;
use crate::filter::{FilterSet, Scope, ScopeFilter};
use crate::gateway::{FilePrinter, Toolchain, print_file};
use crate::identity::OutputIdentity;
use crate::ignore_file::load_ignore_patterns;
use crate::options::CatlrOptions;
use crate::output;
use crate::pattern::Candidate;
use crate::tree::render_tree;
use crate::types::{AuditSummary, ContentScan, RootFailure, RootReport, TreeSource};
use ignore::{DirEntry, WalkBuilder};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};
struct ContentWalker {
    inner: ignore::Walk,
}
impl ContentWalker {
    fn new(root: &Path, listing: &ScopeFilter) -> Self {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));
        let prune_root = root.to_path_buf();
        let listing = listing.clone();
        builder.filter_entry(move |entry| descends_into(&prune_root, &listing, entry));
        Self {
            inner: builder.build(),
        }
    }
}
/// Directory entries hidden in listing scope are cut from the walk, so
/// nothing below them is enumerated. Files always pass.
fn descends_into(root: &Path, listing: &ScopeFilter, entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_dir()) {
        return true;
    }
    let Some(candidate) = Candidate::from_path(root, entry.path()) else {
        return true;
    };
    let keep = listing.visibility(&candidate, true).is_visible();
    if !keep {
        debug!("Pruning {}", candidate.relative());
    }
    keep
}
fn is_regular_file(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => fs::metadata(entry.path())
            .map(|metadata| metadata.is_file())
            .unwrap_or(false),
        _ => false,
    }
}
/// Walks `root` and emits every file that survives listing-scope pruning and
/// passes the printing scope: header, content, separator.
///
/// A file that is the report's own output (per `identity`) is replaced by a
/// warning on `diag`. Unreadable entries are skipped and counted; only
/// failures to write to `out` or `diag` abort the scan.
pub fn scan_contents(
    root: &Path,
    filters: &FilterSet,
    printer: &FilePrinter,
    identity: Option<OutputIdentity>,
    out: &mut dyn Write,
    diag: &mut dyn Write,
) -> Result<ContentScan, CatlrError> {
    let listing = filters.resolve(Scope::Listing);
    let printing = filters.resolve(Scope::Printing);
    let mut scan = ContentScan::default();
    for result in ContentWalker::new(root, &listing).inner {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry: {}", e);
                scan.unreadable += 1;
                continue;
            }
        };
        if entry.depth() == 0 || !is_regular_file(&entry) {
            continue;
        }
        let Some(candidate) = Candidate::from_path(root, entry.path()) else {
            continue;
        };
        if listing.excluded_by_ancestor(&candidate)
            || !printing.visibility(&candidate, false).is_visible()
        {
            continue;
        }
        emit_file(entry.path(), &candidate, printer, identity, out, diag, &mut scan)?;
    }
    Ok(scan)
}
fn emit_file(
    path: &Path,
    candidate: &Candidate,
    printer: &FilePrinter,
    identity: Option<OutputIdentity>,
    out: &mut dyn Write,
    diag: &mut dyn Write,
    scan: &mut ContentScan,
) -> Result<(), CatlrError> {
    let relative = candidate.relative();
    if identity.is_some_and(|id| id.matches(path)) {
        debug!("Skipping {}: it is the report output", relative);
        output::write_loop_warning(diag, relative)?;
        output::write_separator(out)?;
        scan.loop_skipped.push(relative.to_string());
        return Ok(());
    }
    output::write_file_header(out, relative)?;
    match print_file(printer, path, out) {
        Ok(()) => scan.printed.push(relative.to_string()),
        Err(CatlrError::Output(e)) => return Err(CatlrError::Output(e)),
        Err(e) => {
            debug!("Could not print {}: {}", relative, e);
            output::write_unopenable(diag, path)?;
            scan.unreadable += 1;
        }
    }
    output::write_separator(out)?;
    Ok(())
}
fn write_tree(
    root: &Path,
    filters: &FilterSet,
    toolchain: &Toolchain,
    out: &mut dyn Write,
) -> Result<TreeSource, CatlrError> {
    if let Some(command) = toolchain.tree_command(filters.is_listing_active()) {
        match command.run(root) {
            Ok(bytes) => {
                out.write_all(&bytes)?;
                return Ok(TreeSource::External);
            }
            Err(e) => debug!(
                "Tree command '{}' failed: {}; using built-in tree",
                command.program(),
                e
            ),
        }
    }
    render_tree(root, &filters.resolve(Scope::Listing), out)?;
    Ok(TreeSource::Native)
}
fn root_filters(root: &Path, options: &CatlrOptions) -> FilterSet {
    if !options.use_ignore_file {
        return options.filters.clone();
    }
    match load_ignore_patterns(root) {
        Ok(patterns) if patterns.is_empty() => options.filters.clone(),
        Ok(patterns) => {
            debug!(
                "Merging {} ignore patterns for {}",
                patterns.len(),
                root.display()
            );
            options.filters.with_ignored(&patterns)
        }
        Err(e) => {
            warn!("Ignore file not used: {}", e);
            options.filters.clone()
        }
    }
}
/// Audits one root: banner, tree, file contents, end marker.
pub fn audit_root(
    root: &Path,
    options: &CatlrOptions,
    out: &mut dyn Write,
    diag: &mut dyn Write,
) -> Result<RootReport, CatlrError> {
    let root = fs::canonicalize(root).map_err(|source| CatlrError::Unresolvable {
        path: root.to_path_buf(),
        source,
    })?;
    if !root.is_dir() {
        return Err(CatlrError::NotADirectory(root));
    }
    debug!("Auditing {}", root.display());
    let filters = root_filters(&root, options);
    output::write_root_banner(out, &root)?;
    let tree = write_tree(&root, &filters, &options.toolchain, out)?;
    output::write_contents_banner(out)?;
    let contents = scan_contents(
        &root,
        &filters,
        &options.toolchain.printer,
        options.output_identity,
        out,
        diag,
    )?;
    output::write_end_of_listing(out)?;
    out.flush()?;
    Ok(RootReport {
        root,
        tree,
        contents,
    })
}
/// Audits every root in order. A root that cannot be resolved is reported
/// on `diag` and skipped; the remaining roots still run.
pub fn audit(
    options: &CatlrOptions,
    out: &mut dyn Write,
    diag: &mut dyn Write,
) -> Result<AuditSummary, CatlrError> {
    let mut summary = AuditSummary::default();
    for root in &options.roots {
        match audit_root(root, options, out, diag) {
            Ok(report) => summary.roots.push(report),
            Err(e) if e.is_root_level() => {
                writeln!(diag, "Error: {}", e)?;
                summary.failures.push(RootFailure {
                    path: root.clone(),
                    message: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }
    Ok(summary)
}
