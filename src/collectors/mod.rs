//! Metric Mappers
//!
//! This module turns the decoded StorCLI model into gauge values. Each
//! submodule covers one entity: the controller itself, its virtual
//! drives, and its physical drives.
//!
//! # Architecture
//!
//! Mappers are pure functions over the decoded model plus the metrics
//! registry; the only external effect is the lazy drive-detail fetch,
//! reached through the [`DetailSource`](crate::storcli::DetailSource)
//! seam and triggered only when a controller reports physical drives.
//!
//! # Error Handling
//!
//! Failures resolving one drive's detail record are non-fatal: they log
//! a warning and skip that drive's detailed metrics, so one malformed
//! drive record cannot suppress metrics for every other drive and
//! controller. Malformed numeric sub-fields degrade to zero. Only
//! fetch/decode failures of whole payloads propagate as fatal.

pub mod controller;
pub mod physical_drive;
pub mod virtual_drive;

pub use controller::{collect_controller_metrics, collect_megaraid_metrics, MEGARAID_DRIVER};
pub use physical_drive::{collect_physical_drive_metrics, drive_identity, DriveIdentity};
pub use virtual_drive::{collect_virtual_drive_metrics, split_dg_vd};
