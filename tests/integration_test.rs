//! End-to-end pipeline tests: raw StorCLI text through quirk
//! normalization, decoding, collection, and text exposition.

use serde_json::json;
use storcli_exporter::collectors::{
    collect_controller_metrics, collect_megaraid_metrics, MEGARAID_DRIVER,
};
use storcli_exporter::metrics::MetricsCollector;
use storcli_exporter::storcli::client::parse_controllers;
use storcli_exporter::storcli::quirks::normalize_controller_json;
use storcli_exporter::storcli::types::{ControllerData, DriveDetailData};

fn run_pipeline(raw: &str, details: &mut DriveDetailData) -> (ControllerData, String) {
    let controllers =
        parse_controllers(&normalize_controller_json(raw)).expect("pipeline decode");
    let metrics = MetricsCollector::new().expect("metrics");

    for controller in &controllers.controllers {
        collect_controller_metrics(controller, &metrics);
        if controller.response_data.version.driver_name == MEGARAID_DRIVER {
            collect_megaraid_metrics(controller, &metrics, details).expect("collect");
        }
    }

    let rendered = metrics.render().expect("render");
    (controllers, rendered)
}

fn no_details() -> DriveDetailData {
    serde_json::from_value(json!({ "Controllers": [] })).expect("empty details")
}

#[test]
fn test_megaraid_controller_without_drives() {
    let raw = json!({
        "Controllers": [
            {
                "Command Status": { "Status": "Success" },
                "Response Data": {
                    "Basics": {
                        "Controller": 0,
                        "Model": "9361-8i",
                        "Serial Number": "SV1",
                        "Current Controller Date/Time": "06/05/2023, 09:00:00",
                        "Current System Date/time": "06/05/2023, 10:00:00"
                    },
                    "Version": { "Driver Name": "megaraid_sas", "Firmware Version": "4.680.00" },
                    "Status": { "Controller Status": "Optimal", "BBU Status": 0 },
                    "HwCfg": { "Backend Port Count": 8, "ROC temperature(Degree Celsius)": 58 }
                }
            }
        ]
    })
    .to_string();

    let (_, rendered) = run_pipeline(&raw, &mut no_details());

    assert!(rendered.contains(r#"megaraid_time_difference{controller="0"} 3600"#));
    assert!(rendered.contains(r#"megaraid_healthy{controller="0"} 1"#));
    assert!(rendered.contains(r#"megaraid_battery_backup_healthy{controller="0"} 1"#));
    assert!(rendered.contains(r#"megaraid_physical_drives{controller="0"} 0"#));
    // Zero physical drives: the detail payload is never consulted and
    // no pd_ series exist.
    assert!(!rendered.contains("megaraid_pd_"));
}

#[test]
fn test_unsupported_driver_gets_basic_metrics_only() {
    let raw = json!({
        "Controllers": [
            {
                "Command Status": { "Status": "Success" },
                "Response Data": {
                    "Basics": { "Controller": 0, "Model": "PERC H330", "Serial Number": "SV2" },
                    "Version": { "Driver Name": "megaraid_mbox", "Firmware Version": "1.0" },
                    "Status": { "Controller Status": "Optimal", "BBU Status": 0 },
                    "HwCfg": { "ROC temperature(Degree Celsius)": 40 }
                }
            }
        ]
    })
    .to_string();

    let (_, rendered) = run_pipeline(&raw, &mut no_details());

    assert!(rendered.contains("megaraid_controller_info"));
    assert!(rendered.contains(r#"megaraid_temperature{controller="0"} 40"#));
    assert!(!rendered.contains("megaraid_healthy"));
    assert!(!rendered.contains("megaraid_battery_backup_healthy"));
    assert!(!rendered.contains("megaraid_vd_info"));
    assert!(!rendered.contains("megaraid_pd_"));
}

#[test]
fn test_bbu_na_quirk_flows_to_unhealthy_gauge() {
    // Raw text exactly as StorCLI prints it, spaces around the colon
    // included.
    let raw = r#"{
        "Controllers": [
            {
                "Command Status" : { "Status" : "Success" },
                "Response Data" : {
                    "Basics" : { "Controller" : 0 },
                    "Version" : { "Driver Name" : "megaraid_sas" },
                    "Status" : { "Controller Status" : "Optimal", "BBU Status" : "NA" }
                }
            }
        ]
    }"#;

    let (controllers, rendered) = run_pipeline(raw, &mut no_details());

    assert_eq!(
        controllers.controllers[0].response_data.status.bbu_status,
        9999
    );
    assert!(rendered.contains(r#"megaraid_battery_backup_healthy{controller="0"} 0"#));
}

#[test]
fn test_dg_dash_quirk_flows_to_pd_info_label() {
    let raw = r#"{
        "Controllers": [
            {
                "Command Status" : { "Status" : "Success" },
                "Response Data" : {
                    "Basics" : { "Controller" : 0 },
                    "Version" : { "Driver Name" : "megaraid_sas" },
                    "Status" : { "Controller Status" : "Optimal", "BBU Status" : 0 },
                    "Physical Drives" : 1,
                    "PD LIST" : [
                        { "EID:Slt" : "8:0", "DID" : 10, "Intf" : "SAS", "Med" : "HDD",
                          "Model" : "HUS726060", "DG" : "-", "State" : "UGood" }
                    ]
                }
            }
        ]
    }"#;

    let mut details: DriveDetailData = serde_json::from_value(json!({
        "Controllers": [
            {
                "Response Data": {
                    "Drive /c0/e8/s0 - Detailed Information": {
                        "Drive /c0/e8/s0 State": {
                            "Shield Counter": 0,
                            "Media Error Count": 0,
                            "Other Error Count": 0,
                            "Predictive Failure Count": 0,
                            "S.M.A.R.T alert flagged by drive": "No"
                        },
                        "Drive /c0/e8/s0 Device attributes": {
                            "SN": "SN1",
                            "Firmware Revision": "A3Z4",
                            "Link Speed": "12.0 Gb/s",
                            "Device Speed": "6.0 Gb/s"
                        },
                        "Drive /c0/e8/s0 Policies/Settings": {
                            "Commissioned Spare": "No",
                            "Emergency Spare": "No"
                        }
                    }
                }
            }
        ]
    }))
    .expect("detail fixture");

    let (controllers, rendered) = run_pipeline(raw, &mut details);

    assert_eq!(
        controllers.controllers[0].response_data.pd_list[0].drive_group,
        9999
    );
    assert!(rendered.contains(r#"DG="-""#));
    assert!(rendered.contains(r#"megaraid_pd_link_speed_gbps{controller="0",enclosure="8",slot="0"} 12"#));
}
