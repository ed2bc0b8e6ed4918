use storcli_exporter::metrics::MetricsCollector;

#[test]
fn test_metrics_registration() {
    // All gauges register against a fresh registry without panicking
    // or colliding; registering the same name twice would error here.
    let metrics = MetricsCollector::new().expect("Failed to create metrics collector");

    // Vector metrics only render once a labeled child exists.
    let rendered = metrics.render().expect("Failed to render metrics");
    assert!(rendered.is_empty());
}

#[test]
fn test_metrics_render_with_values() {
    let metrics = MetricsCollector::new().expect("Failed to create metrics collector");

    metrics
        .controller_info
        .with_label_values(&["0", "9361-8i", "SV1", "4.680.00"])
        .set(1.0);
    metrics.temperature.with_label_values(&["0"]).set(61.0);

    let rendered = metrics.render().expect("render");
    assert!(rendered.contains("# TYPE megaraid_controller_info gauge"));
    assert!(rendered.contains(r#"model="9361-8i""#));
    assert!(rendered.contains(r#"megaraid_temperature{controller="0"} 61"#));
}

#[test]
fn test_all_metrics_share_namespace() {
    let metrics = MetricsCollector::new().expect("Failed to create metrics collector");

    metrics.temperature.with_label_values(&["0"]).set(1.0);
    metrics.healthy.with_label_values(&["0"]).set(1.0);
    metrics
        .pd_media_errors
        .with_label_values(&["0", "8", "3"])
        .set(0.0);

    let rendered = metrics.render().expect("render");
    for line in rendered.lines() {
        if line.starts_with('#') {
            continue;
        }
        assert!(
            line.starts_with("megaraid_"),
            "sample outside namespace: {line}"
        );
    }
}
