use std::fs;
use std::process::{Command, Output};

fn speedtest(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_speedtest"))
        .args(args)
        .current_dir(std::env::temp_dir())
        .output()
        .unwrap()
}

fn assert_usage_only(output: &Output) {
    assert!(output.status.success(), "exit status was {:?}", output.status);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("USAGE"), "stdout was {:?}", stdout);
    assert!(
        !stdout.lines().any(|line| line.starts_with("0 ")),
        "simulation ran: {:?}",
        stdout
    );
}

#[test]
fn no_arguments_prints_usage() {
    assert_usage_only(&speedtest(&[]));
}

#[test]
fn two_arguments_prints_usage() {
    assert_usage_only(&speedtest(&["a.log", "b.log"]));
}

#[test]
fn missing_log_fails() {
    let name = format!("speedtest-{}-absent.log", std::process::id());
    let output = speedtest(&[name.as_str()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains(&name));
}

#[test]
fn hyphen_leading_path_is_simulated() {
    let name = format!("-speedtest-{}.log", std::process::id());
    let path = std::env::temp_dir().join(&name);
    fs::write(&path, "header\n1 0.02\n2 0.0596\n").unwrap();
    let output = speedtest(&[name.as_str()]);
    fs::remove_file(&path).unwrap();

    assert!(output.status.success(), "exit status was {:?}", output.status);
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5000);
    assert_eq!(lines[0], "0 0 0");
}
