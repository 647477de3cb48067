//! Markdown rendering of errors for stderr.

use crate::error::Error;

/// ANSI bold, applied to heading lines.
const BOLD: &str = "\x1b[1m";
/// ANSI reset after a bold heading.
const RESET: &str = "\x1b[0m";

/// Render an error as valid markdown with bold headings and print to stderr.
pub fn print_error(e: &Error) {
    let md = render_error(e);
    for line in md.lines() {
        if line.starts_with('#') {
            eprintln!("{BOLD}{line}{RESET}");
        } else {
            eprintln!("{line}");
        }
    }
}

/// Render an error as a structured markdown diagnostic: what happened,
/// then how to fix it where there is a fix.
pub fn render_error(e: &Error) -> String {
    return match e {
        Error::ConfigExists { path } => render_config_exists(path),
        Error::ConfigNotFound { path } => render_config_not_found(path),
        Error::Io(e) => format!("\
# Error: I/O

{e}
"),
        Error::TomlDe(e) => format!("\
# Error: Invalid Config

{e}

## Expected format

    host = \"example.com\"
    port = 8080
"),
        Error::TomlSer(e) => format!("\
# Error: TOML Serialization

{e}
"),
    };
}

/// `init` refused to overwrite an existing file.
fn render_config_exists(path: &std::path::Path) -> String {
    return format!("\
# Error: Config Already Exists

`{}` is already present.

## Fix

Overwrite it explicitly:

    hostcfg init --host <HOST> --port <PORT> --force
", path.display());
}

/// No config file and no complete set of overrides.
fn render_config_not_found(path: &std::path::Path) -> String {
    return format!("\
# Error: Config Not Found

`{}` does not exist.

## Fix

Create one:

    hostcfg init --host <HOST> --port <PORT>

Or pass both values on the command line:

    hostcfg check --host <HOST> --port <PORT>
", path.display());
}
