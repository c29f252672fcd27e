//! Command-line interface for catlr.
//!
//! Renders the tree of each requested directory and prints the files that
//! pass the filters, as one report on standard output.

use catlr::{
    CatlrBuilder, CatlrOptions, FilterSet, OutputIdentity, SystemProbe, ToolConfig, Toolchain,
    audit,
};
use clap::{ArgAction, Parser, ValueEnum};
use std::ffi::OsString;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::exit;

/// catlr — print a directory tree and the contents of its files
#[derive(Parser)]
#[command(name = "catlr", version, about, long_about = None)]
#[command(after_help = "Examples:
  catlr                              # List and print all
  catlr . .txt .md                   # List all, print only .txt and .md
  catlr -e .git/ node_modules/       # Ignore .git and node_modules entirely
  catlr -e build/ -i build/main.js   # Exclude build/, but still show build/main.js
  catlr -le .git/ -pe README.md      # Hide .git from the tree, skip printing README.md")]
struct Cli {
    /// Directories to audit (default current dir). A bare `.ext` that is not a
    /// directory only prints files ending in `.ext`
    #[arg(value_name = "DIR")]
    roots: Vec<PathBuf>,

    /// Exclude from both the tree and the printed contents
    #[arg(short = 'e', long = "exclude", value_name = "PATTERN", num_args = 1.., action = ArgAction::Append)]
    exclude: Vec<String>,

    /// Include in both the tree and the printed contents; overrides excludes
    #[arg(short = 'i', long = "include", value_name = "PATTERN", num_args = 1.., action = ArgAction::Append)]
    include: Vec<String>,

    /// Exclude from the tree and from recursion only (-le, -el)
    #[arg(long = "list-exclude", value_name = "PATTERN", num_args = 1.., action = ArgAction::Append)]
    list_exclude: Vec<String>,

    /// Only list paths matching these patterns (-li, -il)
    #[arg(long = "list-include", value_name = "PATTERN", num_args = 1.., action = ArgAction::Append)]
    list_include: Vec<String>,

    /// Skip printing matching files (-pe, -ep)
    #[arg(long = "print-exclude", value_name = "PATTERN", num_args = 1.., action = ArgAction::Append)]
    print_exclude: Vec<String>,

    /// Only print files matching these patterns (-pi, -ip)
    #[arg(long = "print-include", value_name = "PATTERN", num_args = 1.., action = ArgAction::Append)]
    print_include: Vec<String>,

    /// Do not read `.catlrignore` from each directory
    #[arg(long)]
    no_ignore_file: bool,

    /// Never delegate to external tree or file printers
    #[arg(long)]
    native: bool,

    /// Diagnostic log level (RUST_LOG overrides)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn to_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Two-letter scoped flags and their long forms. Either letter order is accepted.
const SCOPED_FLAGS: &[(&[&str], &str)] = &[
    (&["-le", "-el"], "--list-exclude"),
    (&["-li", "-il"], "--list-include"),
    (&["-pe", "-ep"], "--print-exclude"),
    (&["-pi", "-ip"], "--print-include"),
];

/// Rewrites `-le`-style flags to their long forms, which clap can parse.
fn expand_scoped_flags(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut after_terminator = false;
    args.into_iter()
        .map(|arg| {
            if after_terminator {
                return arg;
            }
            if arg == "--" {
                after_terminator = true;
                return arg;
            }
            let long = arg.to_str().and_then(|flag| {
                SCOPED_FLAGS
                    .iter()
                    .find(|(shorts, _)| shorts.contains(&flag))
                    .map(|(_, long)| *long)
            });
            long.map(OsString::from).unwrap_or(arg)
        })
        .collect()
}

/// A legacy extension argument such as `.txt`: not a directory, a leading
/// dot and no separator.
fn legacy_extension(root: &Path) -> Option<String> {
    let text = root.to_str()?;
    let looks_like_extension =
        text.len() > 1 && text.starts_with('.') && !text[1..].contains(['.', '/', '\\']);
    (looks_like_extension && !root.is_dir()).then(|| format!("*{}", text))
}

impl Cli {
    fn into_options(self) -> CatlrOptions {
        let mut roots = Vec::new();
        let mut legacy = Vec::new();
        for root in self.roots {
            match legacy_extension(&root) {
                Some(pattern) => legacy.push(pattern),
                None => roots.push(root),
            }
        }
        if roots.is_empty() {
            roots.push(PathBuf::from("."));
        }

        let mut filters = FilterSet::new();
        for pattern in self.exclude {
            filters = filters.exclude(pattern);
        }
        for pattern in self.include {
            filters = filters.include(pattern);
        }
        filters.list_excludes.extend(self.list_exclude);
        filters.list_includes.extend(self.list_include);
        filters.print_excludes.extend(self.print_exclude);
        filters.print_includes.extend(self.print_include);
        filters.print_includes.extend(legacy);

        let toolchain = if self.native {
            Toolchain::native()
        } else {
            Toolchain::resolve(&ToolConfig::load(), &SystemProbe, io::stdout().is_terminal())
        };

        CatlrBuilder::new(".")
            .roots(roots)
            .filters(filters)
            .use_ignore_file(!self.no_ignore_file)
            .toolchain(toolchain)
            .output_identity(OutputIdentity::of_stdout())
            .build()
    }
}

fn init_tracing(level: LogLevel) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_tracing_level().to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse_from(expand_scoped_flags(std::env::args_os()));
    init_tracing(cli.log_level);
    let options = cli.into_options();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stderr = io::stderr();
    let mut diag = stderr.lock();

    if let Err(e) = audit(&options, &mut out, &mut diag) {
        eprintln!("Error: {}", e);
        exit(1);
    }
    if let Err(e) = out.flush() {
        eprintln!("Error: Failed to write report: {}", e);
        exit(1);
    }
}
