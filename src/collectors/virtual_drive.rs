//! Virtual Drive Metrics Mapper
//!
//! # Metrics Produced
//! - `megaraid_vd_info` - Virtual drive info marker (value is always 1)
//!   - Labels: controller, DG, VG, name, cache, type, state

use crate::metrics::MetricsCollector;
use crate::storcli::types::VirtualDriveSummary;

/// Splits a `DG/VD` composite into drive-group and volume-group labels.
///
/// An absent composite yields the `-1` sentinel for both sides. A
/// composite without a slash keeps its whole value as the drive group.
pub fn split_dg_vd(composite: &str) -> (String, String) {
    if composite.is_empty() {
        return ("-1".to_string(), "-1".to_string());
    }
    match composite.split_once('/') {
        Some((dg, vd)) => (dg.to_string(), vd.to_string()),
        None => (composite.to_string(), "-1".to_string()),
    }
}

/// Emits the info marker for one `VD LIST` entry.
pub fn collect_virtual_drive_metrics(
    controller_index: &str,
    virtual_drive: &VirtualDriveSummary,
    metrics: &MetricsCollector,
) {
    let (drive_group, volume_group) = split_dg_vd(&virtual_drive.dg_vd);

    metrics
        .vd_info
        .with_label_values(&[
            controller_index,
            &drive_group,
            &volume_group,
            &virtual_drive.name,
            &virtual_drive.cache,
            &virtual_drive.raid_type,
            &virtual_drive.state,
        ])
        .set(1.0);
}
