//! Physical Drive Metrics Mapper
//!
//! Resolves each `PD LIST` entry against the drive detail payload and
//! maps the result onto the per-drive gauges.
//!
//! # Metrics Produced
//! - `megaraid_pd_shield_counter`, `megaraid_pd_media_errors`,
//!   `megaraid_pd_other_errors`, `megaraid_pd_predictive_errors` -
//!   Error counters from the drive state map
//! - `megaraid_pd_smart_alerted` - SMART alert flagged by drive (0/1)
//! - `megaraid_pd_link_speed_gbps`, `megaraid_pd_device_speed_gbps` -
//!   Negotiated and device speeds in Gbps
//! - `megaraid_pd_commissioned_spare`, `megaraid_pd_emergency_spare` -
//!   Spare flags (0/1)
//! - `megaraid_pd_info` - Physical drive info marker (value is always 1)
//!   - Labels: controller, enclosure, slot, disk_id, interface, media,
//!     model, DG, state, firmware, serial
//!
//! # Detail Lookup
//!
//! The detail payload keys everything under a constructed identifier,
//! `Drive /c{controller}/e{enclosure}/s{slot}` (the enclosure segment
//! is omitted when the drive sits on no enclosure). Under
//! `{identifier} - Detailed Information` sit three fixed nested maps:
//! `{identifier} State`, `{identifier} Device attributes`, and
//! `{identifier} Policies/Settings`. A missing or mis-typed map is a
//! per-drive [`ExporterError::DriveDetail`]; the caller logs it and
//! skips the drive. Individual fields degrade to zero / empty string.

use crate::error::{ExporterError, Result};
use crate::metrics::MetricsCollector;
use crate::storcli::quirks::DRIVE_GROUP_NONE;
use crate::storcli::types::{PhysicalDriveSummary, ResponseMap};
use serde_json::Value;

/// Constructed drive identifier plus the labels derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveIdentity {
    /// Lookup key prefix, e.g. `Drive /c0/e5/s3`.
    pub identifier: String,
    /// Enclosure label; empty string when the drive has no enclosure.
    pub enclosure: String,
    /// Slot label.
    pub slot: String,
}

/// Builds the detail lookup identifier from an `EID:Slt` composite.
///
/// An enclosure of a single blank space means "no enclosure": the
/// identifier omits the enclosure segment and the label normalizes to
/// the empty string.
pub fn drive_identity(controller_index: &str, eid_slot: &str) -> Result<DriveIdentity> {
    let (enclosure, slot) = eid_slot.split_once(':').ok_or_else(|| {
        ExporterError::DriveDetail(format!("malformed EID:Slt value {eid_slot:?}"))
    })?;

    if enclosure == " " {
        Ok(DriveIdentity {
            identifier: format!("Drive /c{controller_index}/s{slot}"),
            enclosure: String::new(),
            slot: slot.to_string(),
        })
    } else {
        Ok(DriveIdentity {
            identifier: format!("Drive /c{controller_index}/e{enclosure}/s{slot}"),
            enclosure: enclosure.to_string(),
            slot: slot.to_string(),
        })
    }
}

fn sub_map<'a>(map: &'a ResponseMap, key: &str) -> Result<&'a ResponseMap> {
    map.get(key)
        .and_then(Value::as_object)
        .ok_or_else(|| ExporterError::DriveDetail(format!("missing or non-object key {key:?}")))
}

/// Numeric field, zero on absence or wrong type.
fn num_field(map: &ResponseMap, key: &str) -> f64 {
    map.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

fn str_field<'a>(map: &'a ResponseMap, key: &str) -> &'a str {
    map.get(key).and_then(Value::as_str).unwrap_or("")
}

/// `"Yes"` → 1, anything else → 0.
fn yes_flag(map: &ResponseMap, key: &str) -> f64 {
    if str_field(map, key) == "Yes" {
        1.0
    } else {
        0.0
    }
}

/// Speed strings look like `"12.0 Gb/s"`; the value before the first
/// dot is the whole number of Gbps. Unparsable values export as zero.
fn speed_gbps(map: &ResponseMap, key: &str) -> f64 {
    str_field(map, key)
        .split('.')
        .next()
        .unwrap_or("")
        .parse::<f64>()
        .unwrap_or(0.0)
}

/// StorCLI pads fixed-width fields with spaces.
fn strip_spaces(value: &str) -> String {
    value.replace(' ', "")
}

/// Resolves one physical drive against its controller's detail map and
/// emits all `pd_*` gauges for it.
pub fn collect_physical_drive_metrics(
    physical_drive: &PhysicalDriveSummary,
    detail: &ResponseMap,
    controller_index: &str,
    metrics: &MetricsCollector,
) -> Result<()> {
    let identity = drive_identity(controller_index, &physical_drive.eid_slot)?;
    let DriveIdentity {
        identifier,
        enclosure,
        slot,
    } = &identity;

    let info = sub_map(detail, &format!("{identifier} - Detailed Information"))?;
    let state = sub_map(info, &format!("{identifier} State"))?;
    let attributes = sub_map(info, &format!("{identifier} Device attributes"))?;
    let settings = sub_map(info, &format!("{identifier} Policies/Settings"))?;

    let labels = [controller_index, enclosure.as_str(), slot.as_str()];

    metrics
        .pd_shield_counter
        .with_label_values(&labels)
        .set(num_field(state, "Shield Counter"));
    metrics
        .pd_media_errors
        .with_label_values(&labels)
        .set(num_field(state, "Media Error Count"));
    metrics
        .pd_other_errors
        .with_label_values(&labels)
        .set(num_field(state, "Other Error Count"));
    metrics
        .pd_predictive_errors
        .with_label_values(&labels)
        .set(num_field(state, "Predictive Failure Count"));
    metrics
        .pd_smart_alerted
        .with_label_values(&labels)
        .set(yes_flag(state, "S.M.A.R.T alert flagged by drive"));

    metrics
        .pd_link_speed_gbps
        .with_label_values(&labels)
        .set(speed_gbps(attributes, "Link Speed"));
    metrics
        .pd_device_speed_gbps
        .with_label_values(&labels)
        .set(speed_gbps(attributes, "Device Speed"));

    metrics
        .pd_commissioned_spare
        .with_label_values(&labels)
        .set(yes_flag(settings, "Commissioned Spare"));
    metrics
        .pd_emergency_spare
        .with_label_values(&labels)
        .set(yes_flag(settings, "Emergency Spare"));

    let drive_group = if physical_drive.drive_group == DRIVE_GROUP_NONE {
        "-".to_string()
    } else {
        physical_drive.drive_group.to_string()
    };

    metrics
        .pd_info
        .with_label_values(&[
            controller_index,
            enclosure,
            slot,
            &physical_drive.disk_id.to_string(),
            &physical_drive.interface,
            &physical_drive.media,
            &strip_spaces(&physical_drive.model),
            &drive_group,
            &physical_drive.state,
            &strip_spaces(str_field(attributes, "Firmware Revision")),
            &strip_spaces(str_field(attributes, "SN")),
        ])
        .set(1.0);

    Ok(())
}
