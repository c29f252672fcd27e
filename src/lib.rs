//! # Catlr
//!
//! `catlr` audits a directory: it draws a tree of its structure and prints
//! the contents of a filtered subset of its files, as one report suitable for
//! a terminal or a pipe.
//!
//! Two pattern scopes drive everything. The *listing* scope decides what
//! appears in the tree and which directories either walk enters; the
//! *printing* scope decides whose content is emitted. In each scope an
//! include always beats an exclude, so a directory can be excluded while one
//! file inside it is kept.
//!
//! # Patterns
//!
//! - `name`: a file or directory whose base name is exactly `name`.
//! - `dir/sub/file`: that exact path relative to the scanned root.
//! - `dir/`: the directory and everything under it.
//! - `*text*`, `*text`, `text*`: contains, ends with, starts with.
//!
//! # Example
//!
//! ```no_run
//! use catlr::{CatlrBuilder, FilterSet, audit};
//!
//! let filters = FilterSet::new()
//!     .exclude("build/")
//!     .include("build/main.js")
//!     .list_exclude(".git/");
//! let options = CatlrBuilder::new(".").filters(filters).build();
//!
//! let mut out = Vec::new();
//! let mut diag = Vec::new();
//! let summary = audit(&options, &mut out, &mut diag).expect("report could not be written");
//! for root in &summary.roots {
//!     println!("{}: {} files printed", root.root.display(), root.contents.printed.len());
//! }
//! ```

pub mod config;
mod engine;
mod error;
pub mod filter;
pub mod gateway;
mod identity;
pub mod ignore_file;
mod options;
pub mod output;
pub mod pattern;
mod tree;
mod types;

pub use config::ToolConfig;
pub use engine::{audit, audit_root, scan_contents};
pub use error::CatlrError;
pub use filter::{FilterSet, Scope, ScopeFilter, Visibility, should_show};
pub use gateway::{ExternalCommand, FilePrinter, SystemProbe, ToolProbe, Toolchain};
pub use identity::OutputIdentity;
pub use options::{CatlrBuilder, CatlrOptions};
pub use pattern::{Candidate, Pattern, matches};
pub use tree::render_tree;
pub use types::{AuditSummary, ContentScan, RootFailure, RootReport, TreeSource};
