//! CLI entry point for hostcfg.
//!
//! Parses command-line arguments, sets up logging, and dispatches to the
//! appropriate command handler.

/// Command implementations for each CLI subcommand.
mod commands;
/// Host/port configuration and its config file.
mod config;
/// User-facing diagnostic formatting.
mod diagnostics;
/// Unified error type for the crate.
mod error;
/// Info command output generation.
mod info;
/// Whitespace trimming.
mod text;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

// ── Help text constants ───────────────────────────────────────────────

/// After-help text displayed for the top-level CLI.
const AFTER_HELP: &str = "\
Workflow:
  1. hostcfg init --host example.com --port 8080   # Write .hostcfg.toml
  2. hostcfg check                                 # Validate (CI gate)
  3. hostcfg address                               # Print host:port

Exit codes (check):  0=valid  1=invalid  3=error

Set RUST_LOG=debug (or pass --verbose) to trace config resolution.
Run `hostcfg info` for the full reference.";

/// After-help text for the `address` subcommand.
const ADDRESS_HELP: &str = "\
The address is printed even when the host is empty; use `check` to validate.

Examples:
  hostcfg address                        # From .hostcfg.toml
  hostcfg address --port 9090            # Override the port only";

/// After-help text for the `check` subcommand.
const CHECK_HELP: &str = "\
Exit codes:
  0  Host is non-empty
  1  Host is empty

Examples:
  hostcfg check                              # Validate .hostcfg.toml
  hostcfg check --host db.local --port 5432  # Validate without a file
  hostcfg check && echo 'Valid'              # CI gate pattern";

/// After-help text for the `info` subcommand.
const INFO_HELP: &str = "\
Examples:
  hostcfg info                       # Full markdown reference
  hostcfg info --json                # Structured JSON output";

/// After-help text for the `init` subcommand.
const INIT_HELP: &str = "\
Values are written as given; an empty host is accepted here and reported by `check`.

Examples:
  hostcfg init --host example.com --port 8080
  hostcfg init --host localhost --port 80 --force   # Overwrite";

/// After-help text for the `trim` subcommand.
const TRIM_HELP: &str = "\
Examples:
  hostcfg trim '  hello  '           # Prints 'hello'
  printf '  x\\n\\n' | hostcfg trim    # Reads stdin";

// ── CLI definition ────────────────────────────────────────────────────

/// Top-level CLI structure parsed by clap.
#[derive(Parser)]
#[command(name = "hostcfg", version, about = "Validate host/port configs and trim text")]
#[command(subcommand_required = true, after_help = AFTER_HELP)]
struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,
    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Print the configured address as host:port
    #[command(after_help = ADDRESS_HELP)]
    Address {
        /// Host override
        #[arg(long)]
        host: Option<String>,
        /// Port override
        #[arg(long)]
        port: Option<u16>,
    },
    /// Validate the configuration
    #[command(after_help = CHECK_HELP)]
    Check {
        /// Host override
        #[arg(long)]
        host: Option<String>,
        /// Port override
        #[arg(long)]
        port: Option<u16>,
    },
    /// Show the full hostcfg reference document
    #[command(after_help = INFO_HELP)]
    Info {
        /// Output as JSON instead of markdown
        #[arg(long)]
        json: bool,
    },
    /// Write .hostcfg.toml
    #[command(after_help = INIT_HELP)]
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
        /// Host name or IP address
        #[arg(long)]
        host: String,
        /// TCP port
        #[arg(long)]
        port: u16,
    },
    /// Trim leading and trailing whitespace
    #[command(after_help = TRIM_HELP)]
    Trim {
        /// Text to trim; stdin is read when omitted
        text: Option<String>,
    },
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
    if let Err(e) = result {
        eprintln!("warning: logging unavailable: {e}");
    }
}

/// Entry point that parses CLI arguments and dispatches to command handlers.
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Address { host, port } => {
            commands::address(host, port).map(|()| return ExitCode::SUCCESS)
        },
        Commands::Check { host, port } => commands::check(host, port),
        Commands::Info { json } => {
            commands::info(json);
            Ok(ExitCode::SUCCESS)
        },
        Commands::Init { host, port, force } => {
            commands::init(&host, port, force).map(|()| return ExitCode::SUCCESS)
        },
        Commands::Trim { text } => commands::trim(text.as_deref()).map(|()| return ExitCode::SUCCESS),
    };

    return match result {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            diagnostics::print_error(&e);
            ExitCode::from(3_u8)
        },
    };
}
