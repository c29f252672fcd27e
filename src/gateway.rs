use crate::config::ToolConfig;
use crate::error::CatlrError;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, info};
const CAT_COMMAND: &str = "cat";
const BAT_PROGRAM: &str = "bat";
const BAT_ARGS: &[&str] = &["--paging=never", "--style=full"];
const BAT_TERMINAL_ARGS: &[&str] = &["--color=always", "--decorations=always"];
/// Answers whether a command can be invoked on this system.
pub trait ToolProbe {
    fn is_available(&self, program: &str) -> bool;
}
/// Looks commands up on `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;
impl ToolProbe for SystemProbe {
    fn is_available(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}
/// A command line split into a program and its leading arguments; the
/// target path is appended as the last argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    program: String,
    args: Vec<String>,
}
impl ExternalCommand {
    /// Splits `command` on whitespace. `None` for a blank command.
    pub fn parse(command: &str) -> Option<Self> {
        let mut words = command.split_whitespace();
        let program = words.next()?.to_string();
        Some(Self {
            program,
            args: words.map(str::to_string).collect(),
        })
    }
    pub fn program(&self) -> &str {
        &self.program
    }
    pub fn args(&self) -> &[String] {
        &self.args
    }
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
    /// Runs the command against `target` and returns its standard output.
    /// A non-zero exit status is an error.
    pub fn run(&self, target: &Path) -> std::io::Result<Vec<u8>> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(target)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()?;
        if output.status.success() {
            Ok(output.stdout)
        } else {
            Err(std::io::Error::other(format!(
                "'{}' exited with {}",
                self.program, output.status
            )))
        }
    }
}
/// How file contents are emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilePrinter {
    External(ExternalCommand),
    /// Byte-for-byte copy.
    #[default]
    Native,
}
/// Delegation decisions for one run, resolved once and passed to the walks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toolchain {
    pub tree: Option<ExternalCommand>,
    pub printer: FilePrinter,
}
impl Toolchain {
    /// Built-in tree renderer and native copy only.
    pub fn native() -> Self {
        Self::default()
    }
    /// Checks the configured commands against `probe`. Printing falls back
    /// from the configured command to `cat`, then to the native copy.
    /// `terminal` asks `bat` for colours even though its output is captured.
    pub fn resolve(config: &ToolConfig, probe: &impl ToolProbe, terminal: bool) -> Self {
        let tree = ExternalCommand::parse(&config.tree_command)
            .filter(|command| probe.is_available(command.program()));
        if tree.is_none() {
            info!(
                "'{}' not found. Using built-in tree implementation.",
                config.tree_command
            );
        }
        let configured = ExternalCommand::parse(&config.file_command)
            .filter(|command| probe.is_available(command.program()));
        let printer = match configured {
            Some(command) if command.program() == BAT_PROGRAM => {
                let command = command.with_args(BAT_ARGS.iter().copied());
                FilePrinter::External(if terminal {
                    command.with_args(BAT_TERMINAL_ARGS.iter().copied())
                } else {
                    command
                })
            }
            Some(command) => FilePrinter::External(command),
            None => match ExternalCommand::parse(CAT_COMMAND)
                .filter(|command| probe.is_available(command.program()))
            {
                Some(cat) => FilePrinter::External(cat),
                None => FilePrinter::Native,
            },
        };
        debug!("Resolved toolchain: tree={:?} printer={:?}", tree, printer);
        Self { tree, printer }
    }
    /// The external tree command to use, unless listing filters are active:
    /// the external tool cannot apply them.
    pub fn tree_command(&self, listing_active: bool) -> Option<&ExternalCommand> {
        if listing_active {
            if self.tree.is_some() {
                info!("External tree command does not support filters. Using built-in tree.");
            }
            return None;
        }
        self.tree.as_ref()
    }
}
/// Emits the content of `path` with `printer`, falling back to the native
/// copy when the external command cannot be run or fails.
pub fn print_file(printer: &FilePrinter, path: &Path, out: &mut dyn Write) -> Result<(), CatlrError> {
    if let FilePrinter::External(command) = printer {
        match command.run(path) {
            Ok(bytes) => {
                out.write_all(&bytes)?;
                return Ok(());
            }
            Err(e) => debug!(
                "Delegation to '{}' failed for {}: {}; copying natively",
                command.program(),
                path.display(),
                e
            ),
        }
    }
    copy_native(path, out).map(|_| ())
}
/// Streams the raw bytes of `path` into `out`. Read failures are reported
/// against the file, write failures as [`CatlrError::Output`].
pub fn copy_native(path: &Path, out: &mut dyn Write) -> Result<u64, CatlrError> {
    let file = File::open(path).map_err(|e| CatlrError::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut copied = 0u64;
    loop {
        let chunk = reader.fill_buf().map_err(|e| CatlrError::io(path, e))?;
        if chunk.is_empty() {
            return Ok(copied);
        }
        let len = chunk.len();
        out.write_all(chunk)?;
        reader.consume(len);
        copied += len as u64;
    }
}
