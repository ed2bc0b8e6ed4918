//! Configuration and StorCLI Binary Discovery
//!
//! The collector has exactly two knobs: where the StorCLI binary lives
//! and where the exposition text goes. Both come from CLI flags (with
//! env-var fallbacks, see `main.rs`); this module holds the resolved
//! values and the binary discovery logic.

use crate::error::{ExporterError, Result};
use std::path::{Path, PathBuf};

/// Default install location of the vendor binary.
pub const DEFAULT_STORCLI_PATH: &str = "/opt/MegaRAID/storcli/storcli64";

/// Name looked up on `PATH` when the configured path is missing.
const PATH_FALLBACK_BINARY: &str = "storcli";

/// Resolved run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub storcli_path: PathBuf,
    /// Output file; `None` writes to stdout.
    pub output: Option<PathBuf>,
}

/// Resolves the StorCLI binary location.
///
/// Prefers the configured path when it exists. Otherwise, unless
/// `no_fallback` is set, each entry of `path_env` (the `PATH` value) is
/// scanned for a `storcli` binary. Spawning the child process resolves
/// the path itself rather than relying on shell lookup, so the scan is
/// done here explicitly.
///
/// # Errors
///
/// Returns [`ExporterError::Config`] if no candidate exists.
pub fn resolve_storcli(
    preferred: &Path,
    no_fallback: bool,
    path_env: Option<&str>,
) -> Result<PathBuf> {
    if preferred.exists() {
        return Ok(preferred.to_path_buf());
    }

    if no_fallback {
        return Err(ExporterError::Config(format!(
            "storcli binary not found at {}",
            preferred.display()
        )));
    }

    if let Some(path_env) = path_env {
        for folder in std::env::split_paths(path_env) {
            let candidate = folder.join(PATH_FALLBACK_BINARY);
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }

    Err(ExporterError::Config(
        "storcli not found, checked configured path and PATH".to_string(),
    ))
}
