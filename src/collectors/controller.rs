//! Controller Metrics Mapper
//!
//! Maps one decoded controller record onto its gauges.
//!
//! # Metrics Produced
//! - `megaraid_controller_info` - Controller info marker (value is always 1)
//!   - Labels: controller, model, serial, fwversion
//! - `megaraid_temperature` - ROC temperature in Celsius
//! - `megaraid_healthy` / `megaraid_degraded` / `megaraid_failed` -
//!   Health triple; exactly one is 1 for a recognized status string
//! - `megaraid_battery_backup_healthy` - BBU status code mapped to 0/1
//! - `megaraid_ports` - Backend port count
//! - `megaraid_scheduled_patrol_read` - Patrol read scheduled (0/1)
//! - `megaraid_bbu_temperature` / `megaraid_cv_temperature` - Per-unit
//!   temperatures, list position as `bbuidx`/`cvidx` label
//! - `megaraid_time_difference` - System clock minus controller clock
//! - Drive count gauges and per-drive metrics (see the sibling modules)
//!
//! The info and temperature gauges are emitted for every controller.
//! Everything else is MegaRAID-specific and emitted only when the
//! driver name is [`MEGARAID_DRIVER`].

use crate::error::{ExporterError, Result};
use crate::metrics::MetricsCollector;
use crate::storcli::types::{Controller, TempReading};
use crate::storcli::DetailSource;
use chrono::NaiveDateTime;
use prometheus::GaugeVec;
use tracing::warn;

use super::{collect_physical_drive_metrics, collect_virtual_drive_metrics};

/// Driver name of supported controllers. Controllers bound to any
/// other driver get only the common info/temperature metrics.
pub const MEGARAID_DRIVER: &str = "megaraid_sas";

/// Timestamp format used by StorCLI for both clock fields.
const STORCLI_TIME_FORMAT: &str = "%m/%d/%Y, %H:%M:%S";

/// BBU status codes that count as healthy. Everything else, including
/// the 9999 "no BBU" sentinel, counts as unhealthy.
const BBU_HEALTHY_CODES: [i64; 3] = [0, 8, 4096];

/// Maps the driver-independent gauges: the info marker and the ROC
/// temperature.
///
/// The temperature appears under two spellings of "Celsius" depending
/// on firmware; the misspelled variant wins when both are positive.
/// They describe the same sensor and are never summed.
pub fn collect_controller_metrics(controller: &Controller, metrics: &MetricsCollector) {
    let data = &controller.response_data;
    let controller_index = data.basics.controller.to_string();

    metrics
        .controller_info
        .with_label_values(&[
            &controller_index,
            &data.basics.model,
            &data.basics.serial_number,
            &data.version.firmware_version,
        ])
        .set(1.0);

    let temperature = if data.hw_cfg.roc_temp_celcius > 0 {
        data.hw_cfg.roc_temp_celcius as f64
    } else if data.hw_cfg.roc_temp_celsius > 0 {
        data.hw_cfg.roc_temp_celsius as f64
    } else {
        0.0
    };
    metrics
        .temperature
        .with_label_values(&[&controller_index])
        .set(temperature);
}

/// Maps all MegaRAID-specific gauges for one controller.
///
/// Per-drive detail resolution failures are logged and skipped; a
/// returned error means the drive detail payload itself could not be
/// fetched or decoded and the run should abort.
pub fn collect_megaraid_metrics(
    controller: &Controller,
    metrics: &MetricsCollector,
    details: &mut dyn DetailSource,
) -> Result<()> {
    let data = &controller.response_data;
    let controller_index = data.basics.controller.to_string();

    let bbu_healthy = if BBU_HEALTHY_CODES.contains(&data.status.bbu_status) {
        1.0
    } else {
        0.0
    };
    metrics
        .battery_backup_healthy
        .with_label_values(&[&controller_index])
        .set(bbu_healthy);

    // Unrecognized status strings leave all three at zero: unknown is
    // not healthy.
    let mut healthy = 0.0;
    let mut degraded = 0.0;
    let mut failed = 0.0;
    match data.status.controller_status.as_str() {
        "Optimal" => healthy = 1.0,
        "Degraded" => degraded = 1.0,
        "Failed" => failed = 1.0,
        _ => {}
    }
    metrics
        .healthy
        .with_label_values(&[&controller_index])
        .set(healthy);
    metrics
        .degraded
        .with_label_values(&[&controller_index])
        .set(degraded);
    metrics
        .failed
        .with_label_values(&[&controller_index])
        .set(failed);

    metrics
        .ports
        .with_label_values(&[&controller_index])
        .set(data.hw_cfg.backend_port_count as f64);

    // Coarse presence check on the reoccurrence descriptor, not a
    // parsed duration.
    let patrol_read = if data
        .scheduled_tasks
        .patrol_read_reoccurrence
        .contains("hrs")
    {
        1.0
    } else {
        0.0
    };
    metrics
        .scheduled_patrol_read
        .with_label_values(&[&controller_index])
        .set(patrol_read);

    collect_unit_temperatures(
        &metrics.cv_temperature,
        &controller_index,
        &data.cachevault_info,
    );
    collect_unit_temperatures(&metrics.bbu_temperature, &controller_index, &data.bbu_info);

    collect_time_difference(controller, metrics, &controller_index);

    if data.drive_groups > 0 {
        metrics
            .drive_groups
            .with_label_values(&[&controller_index])
            .set(data.drive_groups as f64);
        metrics
            .virtual_drives
            .with_label_values(&[&controller_index])
            .set(data.virtual_drives as f64);

        for virtual_drive in &data.vd_list {
            collect_virtual_drive_metrics(&controller_index, virtual_drive, metrics);
        }
    }

    metrics
        .physical_drives
        .with_label_values(&[&controller_index])
        .set(data.physical_drives as f64);

    if data.physical_drives > 0 {
        let detail = match usize::try_from(data.basics.controller) {
            Ok(index) => details.detail_for(index),
            Err(_) => Err(ExporterError::DriveDetail(format!(
                "negative controller index {}",
                data.basics.controller
            ))),
        };

        match detail {
            Ok(detail_map) => {
                for physical_drive in &data.pd_list {
                    if let Err(e) = collect_physical_drive_metrics(
                        physical_drive,
                        detail_map,
                        &controller_index,
                        metrics,
                    ) {
                        match e {
                            ExporterError::DriveDetail(msg) => {
                                warn!(
                                    "skipping detail metrics for drive {:?} on controller {}: {}",
                                    physical_drive.eid_slot, controller_index, msg
                                );
                            }
                            other => return Err(other),
                        }
                    }
                }
            }
            Err(ExporterError::DriveDetail(msg)) => {
                warn!(
                    "skipping drive detail for controller {}: {}",
                    controller_index, msg
                );
            }
            Err(other) => return Err(other),
        }
    }

    Ok(())
}

/// Maps one ordered temperature list (`Cachevault_Info` / `BBU_Info`).
///
/// List position is the only identifier the payload offers, so it
/// becomes the distinguishing label. Readings like `"23C"` have the
/// unit letter stripped; unparsable readings export as zero.
fn collect_unit_temperatures(gauge: &GaugeVec, controller_index: &str, readings: &[TempReading]) {
    for (idx, reading) in readings.iter().enumerate() {
        let celsius = reading
            .temp
            .replacen('C', "", 1)
            .parse::<f64>()
            .unwrap_or(0.0);
        gauge
            .with_label_values(&[controller_index, &idx.to_string()])
            .set(celsius);
    }
}

/// Emits the clock skew between host and controller in whole seconds.
///
/// Both timestamp fields must be non-empty, but only one has to parse:
/// a side that fails to parse contributes the epoch default. Tolerating
/// one malformed side is intentional.
fn collect_time_difference(
    controller: &Controller,
    metrics: &MetricsCollector,
    controller_index: &str,
) {
    let basics = &controller.response_data.basics;
    if basics.controller_date.is_empty() || basics.system_date.is_empty() {
        return;
    }

    let controller_time = NaiveDateTime::parse_from_str(&basics.controller_date, STORCLI_TIME_FORMAT);
    let system_time = NaiveDateTime::parse_from_str(&basics.system_date, STORCLI_TIME_FORMAT);

    if controller_time.is_ok() || system_time.is_ok() {
        let controller_secs = controller_time.unwrap_or_default().and_utc().timestamp();
        let system_secs = system_time.unwrap_or_default().and_utc().timestamp();
        metrics
            .time_difference
            .with_label_values(&[controller_index])
            .set((system_secs - controller_secs) as f64);
    }
}
