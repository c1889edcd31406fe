//! `FatalMode::Exit` terminates the process with status 1.
//!
//! The parent test re-runs this test binary filtered to the child test,
//! with an environment marker so the child actually performs the bad access.

use std::process::Command;

use dynarr::{ArrayConfig, DynArray, FatalMode};

const CHILD_MARKER: &str = "DYNARR_FATAL_EXIT_CHILD";

#[test]
fn out_of_bounds_child() {
    if std::env::var_os(CHILD_MARKER).is_none() {
        return;
    }
    let config = ArrayConfig::new().with_fatal_mode(FatalMode::Exit);
    let mut a = DynArray::with_config(config).unwrap();
    a.push(1u32);
    a.push(2);
    let _ = a.at(2);
    unreachable!("at() past len returned");
}

#[test]
fn exit_mode_reports_and_exits_with_status_one() {
    let exe = std::env::current_exe().unwrap();
    let output = Command::new(exe)
        .args(["out_of_bounds_child", "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_MARKER, "1")
        .output()
        .unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1), "stderr: {stderr}");
    assert!(
        stderr.contains("[dyn_array error]: index 2 is out of bounds (len = 2)"),
        "stderr: {stderr}"
    );
}
