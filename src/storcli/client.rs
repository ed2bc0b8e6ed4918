//! StorCLI Process Client
//!
//! Runs the vendor StorCLI binary and decodes its JSON output into the
//! types of [`crate::storcli::types`].
//!
//! # Invocations
//!
//! - `<storcli> /cALL show all J` — controller summary, one typed
//!   [`ControllerData`] per run.
//! - `<storcli> /cALL/eALL/sALL show all J` — drive detail for all
//!   controllers at once, decoded into an open name→value map.
//!
//! The drive detail invocation is expensive, so it runs **at most once
//! per run** regardless of controller count: [`StorcliDetailSource`]
//! memoizes the payload and hands out per-controller slices through the
//! [`DetailSource`] trait. It is only invoked at all when some
//! controller reports physical drives.
//!
//! No timeouts are applied; a hung StorCLI hangs the run, which is
//! acceptable for a single-shot cron-invoked collector.

use crate::error::{ExporterError, Result};
use crate::storcli::quirks;
use crate::storcli::types::{Controller, ControllerData, DriveDetailData, ResponseMap};
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Command status value marking a successful StorCLI invocation.
pub const COMMAND_SUCCESS: &str = "Success";

/// Client for the StorCLI management binary.
pub struct StorcliClient {
    path: PathBuf,
}

impl StorcliClient {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn run(&self, args: &[&str]) -> Result<Vec<u8>> {
        debug!("running {} {}", self.path.display(), args.join(" "));
        let output = Command::new(&self.path).args(args).output().map_err(|e| {
            ExporterError::Storcli(format!("failed to run {}: {}", self.path.display(), e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExporterError::Storcli(format!(
                "{} {} exited with {}: {}",
                self.path.display(),
                args.join(" "),
                output.status,
                stderr.trim()
            )));
        }

        Ok(output.stdout)
    }

    /// Queries the controller summary for all controllers.
    ///
    /// Applies quirk normalization before decoding and validates the
    /// result with [`parse_controllers`].
    pub fn query_controllers(&self) -> Result<ControllerData> {
        let raw = self.run(&["/cALL", "show", "all", "J"])?;
        let text = String::from_utf8_lossy(&raw);
        parse_controllers(&quirks::normalize_controller_json(&text))
    }

    /// Queries drive detail for all controllers and drives in one shot.
    pub fn query_drive_details(&self) -> Result<DriveDetailData> {
        let raw = self.run(&["/cALL/eALL/sALL", "show", "all", "J"])?;
        Ok(serde_json::from_slice(&raw)?)
    }
}

/// Decodes and validates normalized controller JSON.
///
/// Fails if the document is not valid JSON, contains no controllers, or
/// the first controller's command status is not [`COMMAND_SUCCESS`].
/// The success check covers only the first entry: StorCLI reports one
/// command status per controller but they do not diverge in practice,
/// and controllers after the first are returned regardless.
pub fn parse_controllers(normalized: &str) -> Result<ControllerData> {
    let data: ControllerData = serde_json::from_str(normalized)?;

    let first: &Controller = data
        .controllers
        .first()
        .ok_or_else(|| ExporterError::Storcli("no controllers in storcli output".to_string()))?;

    if first.command_status.status != COMMAND_SUCCESS {
        return Err(ExporterError::Storcli(format!(
            "storcli command status was {:?}, expected {:?}",
            first.command_status.status, COMMAND_SUCCESS
        )));
    }

    Ok(data)
}

/// Source of per-controller drive detail maps.
///
/// The collectors pull detail through this seam so tests can substitute
/// fixture payloads for the external process. Implementations must be
/// cheap to call repeatedly for the same run.
pub trait DetailSource {
    /// Returns the detail map for the controller at `controller` index,
    /// or [`ExporterError::DriveDetail`] if the payload has no entry
    /// for it.
    fn detail_for(&mut self, controller: usize) -> Result<&ResponseMap>;
}

/// A pre-fetched detail payload is itself a valid source; used directly
/// by tests and by [`StorcliDetailSource`] once populated.
impl DetailSource for DriveDetailData {
    fn detail_for(&mut self, controller: usize) -> Result<&ResponseMap> {
        self.controllers
            .get(controller)
            .map(|c| &c.response_data)
            .ok_or_else(|| {
                ExporterError::DriveDetail(format!(
                    "no drive detail for controller {controller}"
                ))
            })
    }
}

/// Lazily fetched, memoized drive detail backed by [`StorcliClient`].
///
/// The external process is invoked on the first call to `detail_for`
/// and never again for the remainder of the run.
pub struct StorcliDetailSource<'a> {
    client: &'a StorcliClient,
    cached: Option<DriveDetailData>,
}

impl<'a> StorcliDetailSource<'a> {
    pub fn new(client: &'a StorcliClient) -> Self {
        Self {
            client,
            cached: None,
        }
    }
}

impl DetailSource for StorcliDetailSource<'_> {
    fn detail_for(&mut self, controller: usize) -> Result<&ResponseMap> {
        if self.cached.is_none() {
            self.cached = Some(self.client.query_drive_details()?);
        }
        let data = self
            .cached
            .as_mut()
            .ok_or_else(|| ExporterError::Storcli("drive detail cache empty".to_string()))?;
        data.detail_for(controller)
    }
}
