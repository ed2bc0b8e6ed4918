use std::fs;
use storcli_exporter::output::write_metrics;
use tempfile::tempdir;

#[test]
fn test_writes_file_contents() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("megaraid.prom");

    write_metrics("megaraid_temperature{controller=\"0\"} 61\n", Some(&path)).expect("write");

    let contents = fs::read_to_string(&path).expect("read back");
    assert_eq!(contents, "megaraid_temperature{controller=\"0\"} 61\n");
}

#[test]
fn test_truncates_previous_contents() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("megaraid.prom");

    // A longer stale blob must not leave a tail behind the new write.
    write_metrics(&"x".repeat(4096), Some(&path)).expect("first write");
    write_metrics("short\n", Some(&path)).expect("second write");

    let contents = fs::read_to_string(&path).expect("read back");
    assert_eq!(contents, "short\n");
}

#[cfg(unix)]
#[test]
fn test_file_mode_is_world_readable() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("megaraid.prom");
    write_metrics("data\n", Some(&path)).expect("write");

    let mode = fs::metadata(&path).expect("metadata").permissions().mode();
    // The requested mode is 0644; the process umask may clear group and
    // world bits, so only assert what is guaranteed.
    assert_eq!(mode & 0o600, 0o600);
    assert_eq!(mode & 0o133, 0);
}
