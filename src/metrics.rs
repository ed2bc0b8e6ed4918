//! Prometheus Metrics Definitions
//!
//! This module defines all gauges exported by the StorCLI collector.
//!
//! # Metric Categories
//!
//! ## Controller
//! - Info marker, temperature, health triple (healthy/degraded/failed)
//! - Backend port count, clock skew against the host, patrol read
//!
//! ## Battery Backup / CacheVault
//! - BBU health and per-unit temperatures
//!
//! ## Drives
//! - Drive group / virtual drive / physical drive counts
//! - Per-VD info markers
//! - Per-PD error counters, speeds, spare flags, and info markers
//!
//! All metrics are gauges in the `megaraid` namespace. Every metric is
//! registered exactly once at construction; collectors only ever set
//! values on the vectors defined here. The registry is owned by
//! [`MetricsCollector`] and rendered once at the end of the run — there
//! is no process-wide singleton.

use crate::error::Result;
use prometheus::{Encoder, GaugeVec, Opts, Registry, TextEncoder};

/// Namespace prefix shared by every exported metric.
pub const NAMESPACE: &str = "megaraid";

/// Per-run registry of all MegaRAID gauges.
pub struct MetricsCollector {
    registry: Registry,

    // Controller metrics
    pub controller_info: GaugeVec,
    pub temperature: GaugeVec,
    pub healthy: GaugeVec,
    pub degraded: GaugeVec,
    pub failed: GaugeVec,
    pub time_difference: GaugeVec,
    pub ports: GaugeVec,
    pub scheduled_patrol_read: GaugeVec,

    // Battery backup / CacheVault metrics
    pub battery_backup_healthy: GaugeVec,
    pub bbu_temperature: GaugeVec,
    pub cv_temperature: GaugeVec,

    // Drive topology counts
    pub drive_groups: GaugeVec,
    pub virtual_drives: GaugeVec,
    pub physical_drives: GaugeVec,

    // Virtual drive metrics
    pub vd_info: GaugeVec,

    // Physical drive metrics
    pub pd_shield_counter: GaugeVec,
    pub pd_media_errors: GaugeVec,
    pub pd_other_errors: GaugeVec,
    pub pd_predictive_errors: GaugeVec,
    pub pd_smart_alerted: GaugeVec,
    pub pd_link_speed_gbps: GaugeVec,
    pub pd_device_speed_gbps: GaugeVec,
    pub pd_commissioned_spare: GaugeVec,
    pub pd_emergency_spare: GaugeVec,
    pub pd_info: GaugeVec,
}

fn gauge(name: &str, help: &str, labels: &[&str]) -> Result<GaugeVec> {
    Ok(GaugeVec::new(
        Opts::new(name, help).namespace(NAMESPACE),
        labels,
    )?)
}

impl MetricsCollector {
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        let controller_info = gauge(
            "controller_info",
            "MegaRAID controller info",
            &["controller", "model", "serial", "fwversion"],
        )?;
        let temperature = gauge(
            "temperature",
            "MegaRAID controller temperature",
            &["controller"],
        )?;
        let healthy = gauge("healthy", "MegaRAID controller healthy", &["controller"])?;
        let degraded = gauge("degraded", "MegaRAID controller degraded", &["controller"])?;
        let failed = gauge("failed", "MegaRAID controller failed", &["controller"])?;
        let time_difference = gauge(
            "time_difference",
            "MegaRAID system time minus controller time in seconds",
            &["controller"],
        )?;
        let ports = gauge("ports", "MegaRAID ports", &["controller"])?;
        let scheduled_patrol_read = gauge(
            "scheduled_patrol_read",
            "MegaRAID scheduled patrol read",
            &["controller"],
        )?;

        let battery_backup_healthy = gauge(
            "battery_backup_healthy",
            "MegaRAID battery backup healthy",
            &["controller"],
        )?;
        let bbu_temperature = gauge(
            "bbu_temperature",
            "MegaRAID battery backup temperature",
            &["controller", "bbuidx"],
        )?;
        let cv_temperature = gauge(
            "cv_temperature",
            "MegaRAID CacheVault temperature",
            &["controller", "cvidx"],
        )?;

        let drive_groups = gauge("drive_groups", "MegaRAID drive groups", &["controller"])?;
        let virtual_drives = gauge(
            "virtual_drives",
            "MegaRAID virtual drives",
            &["controller"],
        )?;
        let physical_drives = gauge(
            "physical_drives",
            "MegaRAID physical drives",
            &["controller"],
        )?;

        let vd_info = gauge(
            "vd_info",
            "MegaRAID virtual drive info",
            &["controller", "DG", "VG", "name", "cache", "type", "state"],
        )?;

        let pd_labels = ["controller", "enclosure", "slot"];
        let pd_shield_counter = gauge(
            "pd_shield_counter",
            "MegaRAID physical drive shield counter",
            &pd_labels,
        )?;
        let pd_media_errors = gauge(
            "pd_media_errors",
            "MegaRAID physical drive media errors",
            &pd_labels,
        )?;
        let pd_other_errors = gauge(
            "pd_other_errors",
            "MegaRAID physical drive other errors",
            &pd_labels,
        )?;
        let pd_predictive_errors = gauge(
            "pd_predictive_errors",
            "MegaRAID physical drive predictive errors",
            &pd_labels,
        )?;
        let pd_smart_alerted = gauge(
            "pd_smart_alerted",
            "MegaRAID physical drive SMART alerted",
            &pd_labels,
        )?;
        let pd_link_speed_gbps = gauge(
            "pd_link_speed_gbps",
            "MegaRAID physical drive link speed in Gbps",
            &pd_labels,
        )?;
        let pd_device_speed_gbps = gauge(
            "pd_device_speed_gbps",
            "MegaRAID physical drive device speed in Gbps",
            &pd_labels,
        )?;
        let pd_commissioned_spare = gauge(
            "pd_commissioned_spare",
            "MegaRAID physical drive commissioned spare",
            &pd_labels,
        )?;
        let pd_emergency_spare = gauge(
            "pd_emergency_spare",
            "MegaRAID physical drive emergency spare",
            &pd_labels,
        )?;
        let pd_info = gauge(
            "pd_info",
            "MegaRAID physical drive info",
            &[
                "controller",
                "enclosure",
                "slot",
                "disk_id",
                "interface",
                "media",
                "model",
                "DG",
                "state",
                "firmware",
                "serial",
            ],
        )?;

        registry.register(Box::new(controller_info.clone()))?;
        registry.register(Box::new(temperature.clone()))?;
        registry.register(Box::new(healthy.clone()))?;
        registry.register(Box::new(degraded.clone()))?;
        registry.register(Box::new(failed.clone()))?;
        registry.register(Box::new(time_difference.clone()))?;
        registry.register(Box::new(ports.clone()))?;
        registry.register(Box::new(scheduled_patrol_read.clone()))?;
        registry.register(Box::new(battery_backup_healthy.clone()))?;
        registry.register(Box::new(bbu_temperature.clone()))?;
        registry.register(Box::new(cv_temperature.clone()))?;
        registry.register(Box::new(drive_groups.clone()))?;
        registry.register(Box::new(virtual_drives.clone()))?;
        registry.register(Box::new(physical_drives.clone()))?;
        registry.register(Box::new(vd_info.clone()))?;
        registry.register(Box::new(pd_shield_counter.clone()))?;
        registry.register(Box::new(pd_media_errors.clone()))?;
        registry.register(Box::new(pd_other_errors.clone()))?;
        registry.register(Box::new(pd_predictive_errors.clone()))?;
        registry.register(Box::new(pd_smart_alerted.clone()))?;
        registry.register(Box::new(pd_link_speed_gbps.clone()))?;
        registry.register(Box::new(pd_device_speed_gbps.clone()))?;
        registry.register(Box::new(pd_commissioned_spare.clone()))?;
        registry.register(Box::new(pd_emergency_spare.clone()))?;
        registry.register(Box::new(pd_info.clone()))?;

        Ok(Self {
            registry,
            controller_info,
            temperature,
            healthy,
            degraded,
            failed,
            time_difference,
            ports,
            scheduled_patrol_read,
            battery_backup_healthy,
            bbu_temperature,
            cv_temperature,
            drive_groups,
            virtual_drives,
            physical_drives,
            vd_info,
            pd_shield_counter,
            pd_media_errors,
            pd_other_errors,
            pd_predictive_errors,
            pd_smart_alerted,
            pd_link_speed_gbps,
            pd_device_speed_gbps,
            pd_commissioned_spare,
            pd_emergency_spare,
            pd_info,
        })
    }

    /// Render all gauges in Prometheus text format.
    ///
    /// The whole blob is computed in memory; nothing streams.
    pub fn render(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        // TextEncoder output is UTF-8 by construction.
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
