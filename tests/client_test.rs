use serde_json::json;
use storcli_exporter::error::ExporterError;
use storcli_exporter::storcli::client::parse_controllers;
use storcli_exporter::storcli::types::DriveDetailData;
use storcli_exporter::storcli::DetailSource;

#[test]
fn test_parse_controllers_success() {
    let payload = json!({
        "Controllers": [
            {
                "Command Status": { "Status": "Success" },
                "Response Data": { "Basics": { "Controller": 0 } }
            }
        ]
    })
    .to_string();

    let data = parse_controllers(&payload).expect("valid payload");
    assert_eq!(data.controllers.len(), 1);
}

#[test]
fn test_parse_controllers_rejects_invalid_json() {
    let err = parse_controllers("not json").unwrap_err();
    assert!(matches!(err, ExporterError::Json(_)));
}

#[test]
fn test_parse_controllers_rejects_empty_list() {
    let payload = json!({ "Controllers": [] }).to_string();
    let err = parse_controllers(&payload).unwrap_err();
    assert!(matches!(err, ExporterError::Storcli(_)));
}

#[test]
fn test_parse_controllers_rejects_failed_first_entry() {
    let payload = json!({
        "Controllers": [
            { "Command Status": { "Status": "Failure" }, "Response Data": {} }
        ]
    })
    .to_string();

    let err = parse_controllers(&payload).unwrap_err();
    assert!(err.to_string().contains("Failure"));
}

#[test]
fn test_command_status_checked_on_first_controller_only() {
    // Deliberate policy: only the first entry gates the run. Later
    // controllers are returned even when their own status is not
    // Success.
    let payload = json!({
        "Controllers": [
            { "Command Status": { "Status": "Success" }, "Response Data": { "Basics": { "Controller": 0 } } },
            { "Command Status": { "Status": "Failure" }, "Response Data": { "Basics": { "Controller": 1 } } }
        ]
    })
    .to_string();

    let data = parse_controllers(&payload).expect("first entry gates the run");
    assert_eq!(data.controllers.len(), 2);
    assert_eq!(data.controllers[1].command_status.status, "Failure");
}

#[test]
fn test_detail_source_indexes_by_controller() {
    let mut detail: DriveDetailData = serde_json::from_value(json!({
        "Controllers": [
            { "Response Data": { "a": 1 } },
            { "Response Data": { "b": 2 } }
        ]
    }))
    .expect("valid detail payload");

    assert!(detail.detail_for(1).expect("present").contains_key("b"));

    let err = detail.detail_for(5).unwrap_err();
    assert!(matches!(err, ExporterError::DriveDetail(_)));
}
