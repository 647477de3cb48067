//! Core CLI commands for hostcfg: trim, check, address, init, info.

use std::io::Read as _;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::{self, Config};
use crate::error;
use crate::info;
use crate::text;

/// Print the resolved address without validating it.
///
/// # Errors
///
/// Returns errors from config resolution.
pub fn address(host: Option<String>, port: Option<u16>) -> Result<(), error::Error> {
    let root = PathBuf::from(".");
    let config = Config::resolve(&root, host, port)?;
    println!("{}", config.address());
    return Ok(());
}

/// Resolve the config and report whether it validates.
///
/// # Errors
///
/// Returns errors from config resolution. An invalid config is not an
/// error; it is reported through the exit code.
pub fn check(host: Option<String>, port: Option<u16>) -> Result<ExitCode, error::Error> {
    let root = PathBuf::from(".");
    let config = Config::resolve(&root, host, port)?;
    tracing::debug!(host = config.host(), port = config.port(), "validating config");

    if config.validate() {
        println!("VALID   {}", config.address());
        return Ok(ExitCode::SUCCESS);
    } else {
        println!("INVALID {} (host is empty)", config.address());
        return Ok(ExitCode::from(1));
    }
}

/// Print the reference document.
pub fn info(json: bool) {
    info::run(json);
}

/// Write `.hostcfg.toml` from the given values.
///
/// # Errors
///
/// Returns `Error::ConfigExists` if the file is present and `force` is off,
/// or errors from writing the file.
pub fn init(host: &str, port: u16, force: bool) -> Result<(), error::Error> {
    let root = PathBuf::from(".");
    let path = config::config_path(&root);

    if path.exists() && !force {
        return Err(error::Error::ConfigExists { path });
    }

    let config = Config::new(host, port);
    config.write(&path)?;
    println!("Wrote {} ({})", config::CONFIG_FILE, config.address());

    return Ok(());
}

/// Print `text` trimmed, or all of stdin trimmed when no text is given.
///
/// # Errors
///
/// Returns `Error::Io` if stdin cannot be read.
pub fn trim(input: Option<&str>) -> Result<(), error::Error> {
    let buffer;
    let data = match input {
        Some(s) => s,
        None => {
            let mut stdin = String::new();
            std::io::stdin().read_to_string(&mut stdin)?;
            buffer = stdin;
            buffer.as_str()
        },
    };

    println!("{}", text::process(data));
    return Ok(());
}
