use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    let mut c = assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_pubdoc")));
    c.env("NO_COLOR", "1");
    c
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

// -- stdin mode --

#[test]
fn stdin_mode_clean_source() {
    let input = std::fs::read_to_string(fixture_path("clean.rb")).unwrap();

    let assert = cmd().write_stdin(input).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output, "1 file inspected, no offenses found\n");
}

#[test]
fn stdin_mode_reports_offenses() {
    let input = std::fs::read_to_string(fixture_path("offenses.rb")).unwrap();

    let assert = cmd().write_stdin(input).assert().code(1);
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains(
        "(stdin):4:3: Missing public method documentation comment for `total`. [method-doc]"
    ));
    assert!(output.contains("1 file inspected, 1 offense found"));
}

#[test]
fn stdin_mode_class_offense() {
    let input = std::fs::read_to_string(fixture_path("class_doc.rb")).unwrap();

    let assert = cmd().write_stdin(input).assert().code(1);
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains(
        "(stdin):1:1: Class documentation should end with an empty line [class-doc]"
    ));
}

// -- file mode --

#[test]
fn file_mode_clean_file() {
    cmd()
        .arg(fixture_path("clean.rb"))
        .assert()
        .success()
        .stdout(predicate::str::contains("1 file inspected, no offenses found"));
}

#[test]
fn file_mode_reports_path_and_location() {
    let assert = cmd().arg(fixture_path("offenses.rb")).assert().code(1);
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("offenses.rb:4:3: Missing public method documentation comment"));
}

#[test]
fn file_mode_multiple_files() {
    let assert = cmd()
        .arg(fixture_path("clean.rb"))
        .arg(fixture_path("offenses.rb"))
        .assert()
        .code(1);
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("offenses.rb:4:3"));
    assert!(output.contains("2 files inspected, 1 offense found"));
}

#[test]
fn directory_scan_picks_up_ruby_files() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.rb"), "# doc\n#\nclass A\nend\n").unwrap();
    std::fs::write(dir.path().join("b.rb"), "class B\nend\n").unwrap();
    std::fs::write(dir.path().join("notes.txt"), "not ruby\n").unwrap();

    let assert = cmd().arg(dir.path().to_str().unwrap()).assert().code(1);
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("Missing class documentation"));
    assert!(output.contains("2 files inspected, 1 offense found"));
}

#[test]
fn glob_without_matches_warns() {
    let dir = TempDir::new().unwrap();
    let pattern = format!("{}/*.rb", dir.path().to_str().unwrap());

    cmd()
        .arg(&pattern)
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: no files matched"))
        .stdout(predicate::str::contains("0 files inspected, no offenses found"));
}

// -- output formats --

#[test]
fn json_output_document() {
    let input = std::fs::read_to_string(fixture_path("offenses.rb")).unwrap();

    let assert = cmd().args(["-f", "json"]).write_stdin(input).assert().code(1);
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let v: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(v["files"][0]["path"], "(stdin)");
    let offense = &v["files"][0]["offenses"][0];
    assert_eq!(offense["check"], "method-doc");
    assert_eq!(offense["kind"], "missing-documentation");
    assert_eq!(offense["location"]["line"], 4);
    assert_eq!(offense["location"]["column"], 3);
    assert_eq!(v["summary"]["offense_count"], 1);
    assert_eq!(v["summary"]["file_count"], 1);
}

#[test]
fn unknown_format_fails() {
    cmd()
        .args(["-f", "xml"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format: xml"));
}

// -- check selection --

#[test]
fn only_filter_limits_checks() {
    let assert = cmd()
        .args(["--only", "class-doc"])
        .write_stdin("class Admin\n  def xxx\n  end\nend\n")
        .assert()
        .code(1);
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("Missing class documentation"));
    assert!(!output.contains("method documentation"));
    assert!(output.contains("1 file inspected, 1 offense found"));
}

#[test]
fn unknown_check_fails() {
    cmd()
        .args(["--only", "style"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown check: style"));
}
