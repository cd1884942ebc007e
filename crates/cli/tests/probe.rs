//! Process-level checks of the `entrycheck` binary: exit codes, the stdout
//! init-failure marker, and the JSON report.
//!
//! Fixtures are compiled with `rustc` into a temporary directory, as in the
//! host crate's smoke tests.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Compiles `source` as a cdylib into `dir` and returns the library path.
fn build_fixture(dir: &TempDir, name: &str, source: &str) -> PathBuf {
    let src = dir.path().join(format!("{name}.rs"));
    fs::write(&src, source).unwrap();

    let out = dir.path().join(format!("lib{name}.so"));
    let status = Command::new("rustc")
        .args(["--edition", "2021", "--crate-type", "cdylib", "-o"])
        .arg(&out)
        .arg(&src)
        .status()
        .expect("rustc must be available to build test fixtures");
    assert!(status.success(), "fixture '{name}' failed to compile");

    out
}

fn entrycheck() -> Command {
    Command::new(env!("CARGO_BIN_EXE_entrycheck"))
}

const ACCEPTING: &str = r#"
#[no_mangle]
pub extern "C" fn ModuleEntry(handle: *mut core::ffi::c_void) -> u8 {
    (!handle.is_null()) as u8
}
"#;

const DECLINING: &str = r#"
#[no_mangle]
pub extern "C" fn ModuleEntry(_handle: *mut core::ffi::c_void) -> u8 {
    0
}
"#;

const WRONG_EXPORT: &str = r#"
#[no_mangle]
pub extern "C" fn SomethingElse(_handle: *mut core::ffi::c_void) -> u8 {
    1
}
"#;

#[test]
fn initializing_module_exits_zero() {
    let dir = TempDir::new().unwrap();
    let library = build_fixture(&dir, "accepting", ACCEPTING);

    let output = entrycheck().arg(&library).output().unwrap();
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn declining_module_prints_the_marker_and_exits_one() {
    let dir = TempDir::new().unwrap();
    let library = build_fixture(&dir, "declining", DECLINING);

    let output = entrycheck().arg(&library).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("failed to init"));
    // The decline is a plain stdout message, not a diagnostic.
    assert!(output.stderr.is_empty());
}

#[test]
fn missing_module_exits_one_with_a_load_diagnostic() {
    let output = entrycheck()
        .arg("/does/not/exist/adelay.so")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("dlopen"));
}

#[test]
fn missing_entry_symbol_exits_one_with_a_resolve_diagnostic() {
    let dir = TempDir::new().unwrap();
    let library = build_fixture(&dir, "wrong_export", WRONG_EXPORT);

    let output = entrycheck().arg(&library).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("dlsym"));
    assert!(stderr.contains("ModuleEntry"));
}

#[test]
fn entry_flag_overrides_the_symbol_name() {
    let dir = TempDir::new().unwrap();
    let library = build_fixture(&dir, "renamed_entry", WRONG_EXPORT);

    let output = entrycheck()
        .arg(&library)
        .args(["--entry", "SomethingElse"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn json_report_records_full_progress() {
    let dir = TempDir::new().unwrap();
    let library = build_fixture(&dir, "accepting_json", ACCEPTING);

    let output = entrycheck().arg(&library).arg("--json").output().unwrap();
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\"stage\": \"closed\""));
    assert!(stdout.contains("\"initialized\": true"));
}

#[test]
fn json_report_stops_at_invoked_for_a_decline() {
    let dir = TempDir::new().unwrap();
    let library = build_fixture(&dir, "declining_json", DECLINING);

    let output = entrycheck().arg(&library).arg("--json").output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("failed to init"));
    assert!(stdout.contains("\"stage\": \"invoked\""));
    assert!(stdout.contains("\"initialized\": false"));
}
