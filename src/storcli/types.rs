//! StorCLI JSON Type Definitions
//!
//! Rust struct definitions for the two JSON documents StorCLI emits:
//! the controller summary (`/cALL show all J`) and the per-drive detail
//! dump (`/cALL/eALL/sALL show all J`).
//!
//! # Design Notes
//!
//! - **Serde Defaults**: `#[serde(default)]` is used extensively because
//!   StorCLI omits whole sections depending on firmware, driver, and the
//!   hardware present (no BBU, no CacheVault, no drives, ...).
//! - **Field Renames**: JSON keys are matched verbatim, including the
//!   vendor's spelling mistakes. `HwCfg` carries the ROC temperature
//!   under both observed spellings of "Celsius"; only one is ever
//!   populated in a given payload.
//! - **Detail payload**: the drive detail document is kept as an open
//!   `serde_json::Map` because its keys are constructed from drive
//!   identifiers (e.g. `Drive /c0/e5/s3 - Detailed Information`) and
//!   cannot be expressed as a fixed struct.
//!
//! List order from the payload is preserved; for `Cachevault_Info` and
//! `BBU_Info` the position in the list is the only identifier we have.

use serde::Deserialize;

/// Open-ended name→value mapping used by the drive detail payload.
pub type ResponseMap = serde_json::Map<String, serde_json::Value>;

/// Top-level document from `storcli /cALL show all J`.
#[derive(Debug, Deserialize)]
pub struct ControllerData {
    #[serde(rename = "Controllers", default)]
    pub controllers: Vec<Controller>,
}

/// One controller entry, as reported by StorCLI.
#[derive(Debug, Deserialize)]
pub struct Controller {
    #[serde(rename = "Command Status", default)]
    pub command_status: CommandStatus,
    #[serde(rename = "Response Data", default)]
    pub response_data: ResponseData,
}

#[derive(Debug, Default, Deserialize)]
pub struct CommandStatus {
    #[serde(rename = "Status", default)]
    pub status: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponseData {
    #[serde(rename = "Basics", default)]
    pub basics: Basics,
    #[serde(rename = "Version", default)]
    pub version: VersionInfo,
    #[serde(rename = "Status", default)]
    pub status: StatusInfo,
    #[serde(rename = "HwCfg", default)]
    pub hw_cfg: HwCfg,
    #[serde(rename = "Scheduled Tasks", default)]
    pub scheduled_tasks: ScheduledTasks,
    #[serde(rename = "Drive Groups", default)]
    pub drive_groups: i64,
    #[serde(rename = "Virtual Drives", default)]
    pub virtual_drives: i64,
    #[serde(rename = "VD LIST", default)]
    pub vd_list: Vec<VirtualDriveSummary>,
    #[serde(rename = "Physical Drives", default)]
    pub physical_drives: i64,
    #[serde(rename = "PD LIST", default)]
    pub pd_list: Vec<PhysicalDriveSummary>,
    #[serde(rename = "Cachevault_Info", default)]
    pub cachevault_info: Vec<TempReading>,
    #[serde(rename = "BBU_Info", default)]
    pub bbu_info: Vec<TempReading>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Basics {
    /// Controller index assigned by StorCLI, stable for the run.
    #[serde(rename = "Controller", default)]
    pub controller: i64,
    #[serde(rename = "Model", default)]
    pub model: String,
    #[serde(rename = "Serial Number", default)]
    pub serial_number: String,
    #[serde(rename = "Current Controller Date/Time", default)]
    pub controller_date: String,
    // Note the lowercase "time" here; the vendor is not consistent.
    #[serde(rename = "Current System Date/time", default)]
    pub system_date: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct VersionInfo {
    #[serde(rename = "Driver Name", default)]
    pub driver_name: String,
    #[serde(rename = "Firmware Version", default)]
    pub firmware_version: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct StatusInfo {
    #[serde(rename = "Controller Status", default)]
    pub controller_status: String,
    /// Integer status code, or the 9999 sentinel substituted by the
    /// quirk normalizer when the CLI reports `"NA"` (no BBU fitted).
    #[serde(rename = "BBU Status", default)]
    pub bbu_status: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct HwCfg {
    #[serde(rename = "Backend Port Count", default)]
    pub backend_port_count: i64,
    /// ROC temperature, correctly spelled variant.
    #[serde(rename = "ROC temperature(Degree Celsius)", default)]
    pub roc_temp_celsius: i64,
    /// ROC temperature, misspelled variant seen on older firmware.
    #[serde(rename = "ROC temperature(Degree Celcius)", default)]
    pub roc_temp_celcius: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScheduledTasks {
    #[serde(rename = "Patrol Read Reoccurrence", default)]
    pub patrol_read_reoccurrence: String,
}

/// One entry of `VD LIST`.
#[derive(Debug, Default, Deserialize)]
pub struct VirtualDriveSummary {
    /// Drive-group/volume-group composite, e.g. `"0/1"`. May be empty.
    #[serde(rename = "DG/VD", default)]
    pub dg_vd: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Cache", default)]
    pub cache: String,
    #[serde(rename = "TYPE", default)]
    pub raid_type: String,
    #[serde(rename = "State", default)]
    pub state: String,
}

/// One entry of `PD LIST`.
#[derive(Debug, Default, Deserialize)]
pub struct PhysicalDriveSummary {
    /// Enclosure:slot composite, e.g. `"5:3"`. A single blank space on
    /// the enclosure side means the drive sits on no enclosure.
    #[serde(rename = "EID:Slt", default)]
    pub eid_slot: String,
    #[serde(rename = "DID", default)]
    pub disk_id: i64,
    #[serde(rename = "Intf", default)]
    pub interface: String,
    #[serde(rename = "Med", default)]
    pub media: String,
    #[serde(rename = "Model", default)]
    pub model: String,
    /// Drive group index, or the 9999 sentinel substituted by the quirk
    /// normalizer when the CLI reports `"-"` (not in any group).
    #[serde(rename = "DG", default)]
    pub drive_group: i64,
    #[serde(rename = "State", default)]
    pub state: String,
}

/// Temperature entry of `Cachevault_Info` / `BBU_Info`, e.g. `"23C"`.
#[derive(Debug, Default, Deserialize)]
pub struct TempReading {
    #[serde(rename = "Temp", default)]
    pub temp: String,
}

/// Top-level document from `storcli /cALL/eALL/sALL show all J`.
///
/// Indexed by controller position; entry N holds the detail map for
/// controller N.
#[derive(Debug, Deserialize)]
pub struct DriveDetailData {
    #[serde(rename = "Controllers", default)]
    pub controllers: Vec<DriveDetailResponse>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DriveDetailResponse {
    #[serde(rename = "Response Data", default)]
    pub response_data: ResponseMap,
}
