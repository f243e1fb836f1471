use std::fs::write;
use std::process::{Command, Output};

use assert_cmd::cargo::CommandCargoExt;
use tempfile::tempdir;

fn kiln(args: &[&str]) -> Output {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))
        .unwrap()
        .args(args)
        .output()
        .expect("Failed to run kiln")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn no_input_files_exits_with_one() {
    let output = kiln(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output).contains("no input file paths provided"),
        "unexpected stderr: {}",
        stderr(&output)
    );
}

#[test]
fn options_without_files_still_need_input() {
    let output = kiln(&["-v", "-o", "out.bin", "--color", "never"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("no input file paths provided"));
}

#[test]
fn help_exits_successfully() {
    let output = kiln(&["--help"]);

    assert!(output.status.success());
    let help = stdout(&output);
    assert!(help.contains("Usage: kiln"));
    assert!(help.contains("--color"));
    assert!(help.contains("-o <PATH>"));
}

#[test]
fn version_exits_successfully() {
    let output = kiln(&["--version"]);

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("kiln "));
}

#[test]
fn schema_errors_use_clap_exit_code() {
    for args in [
        &["a.kl", "--color", "sometimes"][..],
        &["a.kl", "--bogus"][..],
        &["a.kl", "-o"][..],
    ] {
        let output = kiln(args);
        assert_eq!(output.status.code(), Some(2), "args: {args:?}");
        assert!(stderr(&output).contains("error:"), "args: {args:?}");
    }
}

#[test]
fn quiet_run_prints_nothing() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("main.kl");
    write(&path, "fn main() {}\n").expect("Failed to write input");

    let output = kiln(&[path.to_str().unwrap()]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "");
    assert_eq!(stderr(&output), "");
}

#[test]
fn verbose_run_reports_each_file_in_order() {
    let dir = tempdir().expect("Failed to create temp dir");
    let first = dir.path().join("b.kl");
    let second = dir.path().join("a.kl");
    write(&first, "one\n").expect("Failed to write input");
    write(&second, "two\nthree\n").expect("Failed to write input");
    let first = first.to_str().unwrap();
    let second = second.to_str().unwrap();

    let output = kiln(&[first, second, "-v", "--color", "never", "-o", "out.bin"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("Verbose: true"));
    assert!(out.contains("Using colors: false"));
    let first_at = out.find(&format!("Path: {first}")).expect("first file reported");
    let second_at = out.find(&format!("Path: {second}")).expect("second file reported");
    assert!(first_at < second_at);

    let err = stderr(&output);
    assert!(err.contains("debug: output path: `out.bin`"));
    assert!(err.contains(&format!("debug: loaded 10 bytes (2 lines) from `{second}`")));
    assert!(!err.contains('\x1b'));
}

#[test]
fn colors_are_painted_by_default() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("main.kl");
    write(&path, "").expect("Failed to write input");

    let output = kiln(&[path.to_str().unwrap(), "-v"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("Using colors: true"));
    assert!(stderr(&output).contains('\x1b'));
}

#[test]
fn unreadable_input_is_an_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let missing = dir.path().join("missing.kl");
    let missing = missing.to_str().unwrap();

    let output = kiln(&[missing, "--color", "never"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(&format!("error: failed to read `{missing}`")));
}
