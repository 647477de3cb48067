//! Connection configuration: a host and port, loaded from `.hostcfg.toml`.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = ".hostcfg.toml";

/// Upper bound on connection retries. Exposed for callers; nothing in this
/// crate retries yet.
pub const MAX_RETRIES: u32 = 3;

/// A host and port pair. Nothing is checked at construction; call
/// [`Config::validate`] to find out whether the host is usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Host name or IP address, stored verbatim.
    host: String,
    /// TCP port.
    port: u16,
}

impl Config {
    /// Build a config from its parts without validating them.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        return Self { host: host.into(), port };
    }

    /// The configured host.
    pub fn host(&self) -> &str {
        return &self.host;
    }

    /// The configured port.
    pub const fn port(&self) -> u16 {
        return self.port;
    }

    /// `true` iff the host is non-empty. The port is not checked.
    pub fn validate(&self) -> bool {
        return !self.host.is_empty();
    }

    /// `host:port`, recomputed on every call.
    pub fn address(&self) -> String {
        return self.to_string();
    }

    /// Same config with the host replaced.
    #[must_use]
    pub fn with_host(self, host: impl Into<String>) -> Self {
        return Self { host: host.into(), ..self };
    }

    /// Same config with the port replaced.
    #[must_use]
    pub fn with_port(self, port: u16) -> Self {
        return Self { port, ..self };
    }

    /// Load `.hostcfg.toml` from the given root directory.
    /// Loading never validates: an empty host loads fine.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigNotFound` if the file doesn't exist,
    /// `Error::Io` for other read failures,
    /// or `Error::TomlDe` if the TOML is malformed, a key is missing,
    /// or the port is out of range.
    pub fn load(root: &Path) -> Result<Self, Error> {
        let path = config_path(root);
        let content = match std::fs::read_to_string(&path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::ConfigNotFound { path });
            },
            Err(e) => return Err(Error::Io(e)),
            Ok(c) => c,
        };

        let config: Self = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), address = %config, "loaded config");
        return Ok(config);
    }

    /// Build the effective config for a command.
    ///
    /// With both overrides present the file is never read. Otherwise the file
    /// is loaded and whichever override is present replaces its field.
    ///
    /// # Errors
    ///
    /// Returns errors from [`Config::load`] when the file is needed.
    pub fn resolve(root: &Path, host: Option<String>, port: Option<u16>) -> Result<Self, Error> {
        if let (Some(h), Some(p)) = (host.as_ref(), port) {
            tracing::debug!(host = %h, port = p, "config taken from overrides");
            return Ok(Self::new(h.as_str(), p));
        }

        let mut config = Self::load(root)?;
        if let Some(h) = host {
            config = config.with_host(h);
        }
        if let Some(p) = port {
            config = config.with_port(p);
        }
        return Ok(config);
    }

    /// Serialize to TOML.
    ///
    /// # Errors
    ///
    /// Returns `Error::TomlSer` if serialization fails.
    pub fn to_toml(&self) -> Result<String, Error> {
        return Ok(toml::to_string_pretty(self)?);
    }

    /// Write the config to disk.
    ///
    /// # Errors
    ///
    /// Returns `Error::TomlSer` if serialization fails,
    /// or `Error::Io` if the file cannot be written.
    pub fn write(&self, path: &Path) -> Result<(), Error> {
        let content = self.to_toml()?;
        std::fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "wrote config");
        return Ok(());
    }
}

impl fmt::Display for Config {
    /// Renders the address.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{}:{}", self.host, self.port);
    }
}

/// Location of the config file under `root`.
pub fn config_path(root: &Path) -> PathBuf {
    return root.join(CONFIG_FILE);
}
