//! Tests that spawn the `okto` binary on script files.

#![cfg(unix)]

use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};

/// okto binary path (set by cargo).
fn okto_bin() -> String {
    env!("CARGO_BIN_EXE_okto").to_string()
}

/// Command for running `script` with no user config.
fn okto(dir: &Path, script: &Path) -> Command {
    let mut cmd = Command::new(okto_bin());
    cmd.arg(script)
        .arg("--config")
        .arg(dir.join("absent.toml"))
        .stdin(Stdio::null());
    cmd
}

#[test]
fn exit_code_comes_from_script() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("exit.okto");
    fs::write(&script, "log \"before\"\nexit 7\nlog \"after\"\n").unwrap();

    let output = okto(dir.path(), &script).output().unwrap();

    assert_eq!(output.status.code(), Some(7));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "before\n");
}

#[test]
fn closed_stdout_does_not_crash() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("noisy.okto");
    // Far more than a pipe buffer, so writes hit the closed pipe.
    let line = format!("log \"{}\"\n", "x".repeat(64));
    fs::write(&script, line.repeat(4000)).unwrap();

    let mut child = okto(dir.path(), &script)
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    drop(child.stdout.take());
    let status = child.wait().unwrap();

    assert_eq!(status.code(), Some(0));
}

#[test]
fn strict_flag_stops_on_error() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("strict.okto");
    fs::write(&script, "log 1\nbogus\nlog 2\n").unwrap();

    let output = okto(dir.path(), &script).arg("--strict").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bogus is not a function or variable"));
}
