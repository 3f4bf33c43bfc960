// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Runs the `mention` binary end to end.

use assert_cmd::Command;

fn run_ok(args: &[&str], stdin: Option<&str>) -> String {
    let mut cmd = Command::cargo_bin("mention").unwrap();
    cmd.args(args);
    if let Some(stdin) = stdin {
        cmd.write_stdin(stdin);
    }
    let output = cmd.ok().unwrap();
    String::from_utf8_lossy(output.stdout.as_slice())
        .trim_end()
        .to_string()
}

#[test]
fn text_arg_with_two_prefixes() {
    let output = run_ok(&["Hi @alice and #bo", "-p", "@", "-p", "#"], None);
    pretty_assertions::assert_eq!(output, r##"prefix: "#", word: "#bo", range: [14, 17)"##);
}

#[test]
fn caret_and_json() {
    let output = run_ok(&["Hello @nathan how are", "--caret", "13", "--json"], None);
    pretty_assertions::assert_eq!(
        output,
        r#"{"prefix":"@","word":"@nathan","range":{"start":6,"len":7}}"#
    );
}

#[test]
fn whitespace_tolerance() {
    let output = run_ok(&["Hello @nathan how are", "-s", "1", "--json"], None);
    pretty_assertions::assert_eq!(
        output,
        r#"{"prefix":"@","word":"@nathan how are","range":{"start":6,"len":15}}"#
    );
}

#[test]
fn text_from_stdin() {
    let output = run_ok(&["--stdin", "-p", "#"], Some("see #rust"));
    pretty_assertions::assert_eq!(output, r##"prefix: "#", word: "#rust", range: [4, 9)"##);
}

#[test]
fn no_match_still_exits_ok() {
    pretty_assertions::assert_eq!(run_ok(&["Hello @nathan how are"], None), "no match");
    pretty_assertions::assert_eq!(
        run_ok(&["Hello @nathan how are", "--json"], None),
        "null"
    );
}

#[test]
fn bad_prefix_delimiters_fails() {
    Command::cargo_bin("mention")
        .unwrap()
        .args(["hi", "--prefix-delimiters", "#"])
        .assert()
        .failure();
}

#[test]
fn missing_config_file_fails() {
    Command::cargo_bin("mention")
        .unwrap()
        .args(["hi", "--config", "/this/file/does/not/exist.json"])
        .assert()
        .failure();
}
