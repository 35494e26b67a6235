//! Relay configuration parsed from environment variables.
//!
//! All keys are optional:
//! - `RELAY_ADDR`: listen address, default `0.0.0.0:8080`
//! - `RELAY_ROOT_PATH`: route prefix, default `/` (no prefix)
//! - `RELAY_SECRET_FILE`: bearer secret for the processor socket, default
//!   `/secret/token`; an unreadable or blank file disables auth
//! - `RELAY_REPLY_TIMEOUT_SECS`: default 10
//! - `RELAY_QUEUE_CAPACITY`: default 100
//! - `RELAY_REPLY_PREFIX`: prepended to every processor reply, default `Echo: `
//! - `RELAY_STATIC_DIR`: serve the widget bundle under `{root}/widget` when set

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{info, warn};

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_SECRET_FILE: &str = "/secret/token";
pub const DEFAULT_REPLY_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;
pub const DEFAULT_REPLY_PREFIX: &str = "Echo: ";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid RELAY_ADDR {value:?}: {source}")]
    InvalidAddr { value: String, source: std::net::AddrParseError },
    #[error("RELAY_QUEUE_CAPACITY must be greater than zero")]
    ZeroQueueCapacity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub addr: SocketAddr,
    /// Normalized prefix: empty, or `/segment` without a trailing slash.
    pub root_path: String,
    pub secret: Option<String>,
    pub reply_timeout: Duration,
    pub queue_capacity: usize,
    pub reply_prefix: String,
    pub static_dir: Option<PathBuf>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            root_path: String::new(),
            secret: None,
            reply_timeout: Duration::from_secs(DEFAULT_REPLY_TIMEOUT_SECS),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            reply_prefix: DEFAULT_REPLY_PREFIX.to_owned(),
            static_dir: None,
        }
    }
}

impl RelayConfig {
    /// Build config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup("RELAY_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_owned());
        let addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidAddr { value: raw_addr.clone(), source })?;

        let root_path = normalize_root_path(&lookup("RELAY_ROOT_PATH").unwrap_or_default());

        let secret_file = lookup("RELAY_SECRET_FILE").unwrap_or_else(|| DEFAULT_SECRET_FILE.to_owned());
        let secret = read_secret(Path::new(&secret_file));

        let reply_timeout =
            Duration::from_secs(parse_or(lookup("RELAY_REPLY_TIMEOUT_SECS"), DEFAULT_REPLY_TIMEOUT_SECS));

        let queue_capacity = parse_or(lookup("RELAY_QUEUE_CAPACITY"), DEFAULT_QUEUE_CAPACITY);
        if queue_capacity == 0 {
            return Err(ConfigError::ZeroQueueCapacity);
        }

        let reply_prefix = lookup("RELAY_REPLY_PREFIX").unwrap_or_else(|| DEFAULT_REPLY_PREFIX.to_owned());
        let static_dir = lookup("RELAY_STATIC_DIR").filter(|v| !v.trim().is_empty()).map(PathBuf::from);

        Ok(Self { addr, root_path, secret, reply_timeout, queue_capacity, reply_prefix, static_dir })
    }

    /// Absolute route for `suffix` (which must start with `/`) under the root.
    #[must_use]
    pub fn route(&self, suffix: &str) -> String {
        format!("{}{suffix}", self.root_path)
    }
}

/// Parse `raw`, falling back to `default` when absent or malformed.
pub(crate) fn parse_or<T>(raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr,
{
    raw.and_then(|v| v.trim().parse::<T>().ok()).unwrap_or(default)
}

/// `/` and blank mean "no prefix"; otherwise ensure one leading slash and no
/// trailing slash.
pub(crate) fn normalize_root_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

/// Read and trim the processor secret. Missing or blank files disable auth.
pub(crate) fn read_secret(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(raw) => {
            let secret = raw.trim();
            if secret.is_empty() {
                warn!(path = %path.display(), "secret file is empty; processor auth disabled");
                None
            } else {
                info!(path = %path.display(), "using processor secret from file");
                Some(secret.to_owned())
            }
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read secret; processor auth disabled");
            None
        }
    }
}
