use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn gola(config_home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gola"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_home)
        .env("APPDATA", config_home)
        .env_remove("GOLA_LOG")
        .output()
        .unwrap()
}

#[test]
fn no_script_prints_usage() {
    let dir = tempdir().unwrap();
    let out = gola(dir.path(), &[]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("SCRIPT"));
}

#[test]
fn missing_script_exits_one() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.py");
    let out = gola(dir.path(), &[missing.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("is not a file"));
}

#[test]
fn unknown_interpreter_exits_one() {
    let dir = tempdir().unwrap();
    let script = dir.path().join("a.lua");
    fs::write(&script, "#!/usr/bin/env lua\n").unwrap();

    let out = gola(dir.path(), &[script.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("interpreter[lua]"));
}

#[cfg(unix)]
#[test]
fn child_exit_code_and_output_are_propagated() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("gola")).unwrap();
    fs::write(
        dir.path().join("gola").join("settings.json"),
        r#"{"map": {"sh": {"": "sh"}}}"#,
    )
    .unwrap();
    let script = dir.path().join("hello.sh");
    fs::write(&script, "#!/usr/bin/env sh\necho \"hello $1\"\nexit 5\n").unwrap();

    let out = gola(dir.path(), &[script.to_str().unwrap(), "world"]);
    assert_eq!(out.status.code(), Some(5));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "hello world\n");
}
