//! The `info` reference document, as markdown or JSON.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{self, Config, MAX_RETRIES};

/// Output the hostcfg reference document.
pub fn run(json: bool) {
    let root = PathBuf::from(".");
    let state = gather_state(&root);

    if json {
        print_json(&state);
    } else {
        print_markdown(&state);
    }
}

// ── State gathering ───────────────────────────────────────────────────

/// What `info` reports about the working directory.
struct CurrentState {
    /// Whether `.hostcfg.toml` exists.
    config_found: bool,
    /// The parsed config, if it loaded.
    config: Option<Config>,
}

/// Inspect `root`. Load errors become `None`.
fn gather_state(root: &Path) -> CurrentState {
    let config_found = config::config_path(root).exists();
    let config = Config::load(root).ok();

    return CurrentState { config_found, config };
}

// ── Markdown output ───────────────────────────────────────────────────

/// Print the markdown document to stdout.
fn print_markdown(state: &CurrentState) {
    print!("{}", render_markdown(env!("CARGO_PKG_VERSION"), state));
}

/// Build the markdown document.
fn render_markdown(version: &str, state: &CurrentState) -> String {
    let mut out = format!(
        "\
# hostcfg {version}

Validate host/port connection configs and trim text.

## Workflow

    hostcfg init --host <HOST> --port <PORT>   Write .hostcfg.toml
    hostcfg check                              Validate the config (exit 0/1)
    hostcfg address                            Print host:port
    hostcfg trim [TEXT]                        Trim whitespace from TEXT or stdin

`check` and `address` accept `--host` and `--port` to override the file.

## Configuration (.hostcfg.toml)

    host = \"example.com\"    # required, must be non-empty to validate
    port = 8080             # required, 0-65535

## Constants

    MAX_RETRIES = {MAX_RETRIES}

## Current State

"
    );

    out.push_str(&render_markdown_state(state));
    out.push('\n');
    out.push_str(
        "\
## Exit Codes

| Code | Meaning |
|------|---------|
| 0    | Success / config valid |
| 1    | Config invalid (empty host) |
| 3    | Runtime error |
",
    );
    return out;
}

/// The "Current State" lines.
fn render_markdown_state(state: &CurrentState) -> String {
    let file_line = if state.config_found {
        "Config:   .hostcfg.toml (found)\n"
    } else {
        "Config:   .hostcfg.toml (not found)\n"
    };

    let status_line = match &state.config {
        Some(c) if c.validate() => format!("Address:  {} (valid)\n", c.address()),
        Some(c) => format!("Address:  {} (invalid: host is empty)\n", c.address()),
        None => "Address:  (unavailable)\n".to_owned(),
    };

    return format!("{file_line}{status_line}");
}

// ── JSON output ───────────────────────────────────────────────────────

/// Top-level `info --json` document.
#[derive(Serialize)]
struct InfoJson {
    /// Crate version.
    version: String,
    /// Value of `MAX_RETRIES`.
    max_retries: u32,
    /// Exit code table.
    exit_codes: Vec<ExitCodeInfo>,
    /// Working directory state.
    current_state: StateJson,
}

/// One row of the exit code table.
#[derive(Serialize)]
struct ExitCodeInfo {
    /// Process exit code.
    code: u8,
    /// What the code means.
    meaning: String,
}

/// JSON form of [`CurrentState`]. `address` and `valid` are null when the
/// config did not load.
#[derive(Serialize)]
struct StateJson {
    /// Whether `.hostcfg.toml` exists.
    config_found: bool,
    /// `host:port` of the loaded config.
    address: Option<String>,
    /// Result of `validate` on the loaded config.
    valid: Option<bool>,
}

/// Build the JSON document.
fn build_json(version: &str, state: &CurrentState) -> InfoJson {
    return InfoJson {
        version: version.to_owned(),
        max_retries: MAX_RETRIES,
        exit_codes: vec![
            ExitCodeInfo { code: 0, meaning: "Success / config valid".to_owned() },
            ExitCodeInfo { code: 1, meaning: "Config invalid (empty host)".to_owned() },
            ExitCodeInfo { code: 3, meaning: "Runtime error".to_owned() },
        ],
        current_state: StateJson {
            config_found: state.config_found,
            address: state.config.as_ref().map(Config::address),
            valid: state.config.as_ref().map(Config::validate),
        },
    };
}

/// Print the JSON document to stdout.
fn print_json(state: &CurrentState) {
    let info = build_json(env!("CARGO_PKG_VERSION"), state);
    match serde_json::to_string_pretty(&info) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("error: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_lists_constant_and_state() {
        let state = CurrentState {
            config_found: true,
            config: Some(Config::new("example.com", 8080)),
        };
        let md = render_markdown("0.0.0", &state);
        assert!(md.starts_with("# hostcfg 0.0.0"));
        assert!(md.contains("MAX_RETRIES = 3"));
        assert!(md.contains("Address:  example.com:8080 (valid)"));
    }

    #[test]
    fn markdown_reports_invalid_config() {
        let state = CurrentState { config_found: true, config: Some(Config::new("", 80)) };
        assert!(render_markdown("0.0.0", &state).contains("Address:  :80 (invalid: host is empty)"));
    }

    #[test]
    fn markdown_without_config() {
        let state = CurrentState { config_found: false, config: None };
        let md = render_markdown("0.0.0", &state);
        assert!(md.contains(".hostcfg.toml (not found)"));
        assert!(md.contains("Address:  (unavailable)"));
    }

    #[test]
    fn json_nulls_when_config_missing() {
        let state = CurrentState { config_found: false, config: None };
        let value = serde_json::to_value(build_json("1.2.3", &state)).unwrap();
        assert_eq!(value["version"], "1.2.3");
        assert_eq!(value["max_retries"], 3);
        assert!(value["current_state"]["address"].is_null());
        assert!(value["current_state"]["valid"].is_null());
        assert_eq!(value["exit_codes"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn json_reports_address_and_validity() {
        let state = CurrentState { config_found: true, config: Some(Config::new("h", 1)) };
        let value = serde_json::to_value(build_json("1.2.3", &state)).unwrap();
        assert_eq!(value["current_state"]["address"], "h:1");
        assert_eq!(value["current_state"]["valid"], true);
    }
}
