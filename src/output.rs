//! Exposition Output
//!
//! Writes the fully rendered metrics blob to standard output or to a
//! textfile-collector target file. The blob is always computed before
//! the first byte is written; a fatal error earlier in the run produces
//! no output at all.

use crate::error::Result;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Writes rendered metrics to `path`, or to stdout when `path` is
/// `None`. Files are truncated and written whole, mode 0644, so a
/// scraping textfile collector never sees a partial update appended to
/// stale data.
pub fn write_metrics(rendered: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let mut options = OpenOptions::new();
            options.write(true).create(true).truncate(true);
            #[cfg(unix)]
            {
                use std::os::unix::fs::OpenOptionsExt;
                options.mode(0o644);
            }
            let mut file = options.open(path)?;
            file.write_all(rendered.as_bytes())?;
        }
        None => {
            io::stdout().write_all(rendered.as_bytes())?;
        }
    }
    Ok(())
}
