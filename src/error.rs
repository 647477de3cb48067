//! Crate-level error types for hostcfg diagnostics.
use std::path::PathBuf;

/// Every variant names the file or underlying cause so the rendered
/// diagnostic is actionable on its own.
#[allow(clippy::error_impl_error, reason = "crate-internal error type in binary")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `init` would overwrite a config file that is already there.
    #[error("config already exists: {}", path.display())]
    ConfigExists {
        /// Path to the existing config file.
        path: PathBuf,
    },

    /// No config file on disk and no complete set of overrides given.
    #[error("config not found: {}", path.display())]
    ConfigNotFound {
        /// Path where the config file was expected.
        path: PathBuf,
    },

    /// Underlying I/O error from the filesystem or stdin.
    #[error("io: {0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// TOML deserialization failed (malformed file, missing key, bad port).
    #[error("toml deserialize: {0}")]
    TomlDe(
        /// The wrapped TOML deserialization error.
        #[from]
        toml::de::Error,
    ),

    /// TOML serialization failed.
    #[error("toml serialize: {0}")]
    TomlSer(
        /// The wrapped TOML serialization error.
        #[from]
        toml::ser::Error,
    ),
}
