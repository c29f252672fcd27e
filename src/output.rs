use std::io::{self, Write};
use std::path::Path;
pub const LOOP_WARNING: &str =
    "[Warning: Skipping file to avoid I/O loop (file is program output)]";
/// The name a root is presented under: its final component, or the whole
/// path for a filesystem root.
pub fn root_display_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}
pub(crate) fn write_root_banner(out: &mut dyn Write, root: &Path) -> io::Result<()> {
    writeln!(out, "--- Directory Tree for: {} ---", root_display_name(root))?;
    writeln!(out, "Located at: {}", root.display())?;
    writeln!(out)
}
pub(crate) fn write_contents_banner(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- File Contents (Recursive) ---")
}
pub(crate) fn write_file_header(out: &mut dyn Write, relative: &str) -> io::Result<()> {
    writeln!(out, "--- {} ---", relative)
}
pub(crate) fn write_separator(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out)
}
pub(crate) fn write_loop_warning(diag: &mut dyn Write, relative: &str) -> io::Result<()> {
    write_file_header(diag, relative)?;
    writeln!(diag, "{}", LOOP_WARNING)
}
pub(crate) fn write_unopenable(diag: &mut dyn Write, path: &Path) -> io::Result<()> {
    writeln!(diag, "[Could not open file: {}]", path.display())
}
pub(crate) fn write_end_of_listing(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "--- End of Listing ---")
}
