use assert_cmd::Command;
use predicates::prelude::*;

fn list_tidy() -> Command {
    Command::new(env!("CARGO_BIN_EXE_list_tidy"))
}

#[test]
fn shows_help() {
    list_tidy()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list_tidy"))
        .stdout(predicate::str::contains("--remove-empty"));
}

#[test]
fn processes_stdin_with_all_stages() {
    list_tidy()
        .args(["--case", "lowercase", "--sort", "asc", "--dedup", "--remove-empty"])
        .write_stdin("apple\nBanana\nApple\n\ncherry")
        .assert()
        .success()
        .stdout("apple\nbanana\ncherry\n");
}

#[test]
fn identity_run_echoes_input() {
    list_tidy().write_stdin("b\na\nb").assert().success().stdout("b\na\nb\n");
}

#[test]
fn json_output_carries_statistics() {
    let output = list_tidy()
        .args(["--format", "json", "--dedup", "--remove-empty", "-"])
        .write_stdin("x\n\nx\ny\n")
        .output()
        .expect("binary runs");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["output"], "x\ny");
    assert_eq!(json["inputLineCount"], 5);
    assert_eq!(json["outputLineCount"], 2);
    assert_eq!(json["duplicatesRemoved"], 1);
    assert_eq!(json["emptyLinesRemoved"], 2);
    assert_eq!(json["sorted"], false);
    assert_eq!(json["caseConversion"], "none");
}

#[test]
fn reads_input_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("list.txt");
    std::fs::write(&path, "hello world\nfoo-bar\n").expect("write input");

    list_tidy()
        .arg(&path)
        .args(["--case", "snakecase", "--remove-empty", "--sort", "desc"])
        .assert()
        .success()
        .stdout("hello_world\nfoo_bar\n");
}

#[test]
fn stats_flag_prints_summary_to_stderr() {
    list_tidy()
        .args(["--dedup", "--stats"])
        .write_stdin("a\na")
        .assert()
        .success()
        .stdout("a\n")
        .stderr(predicate::str::contains("2 -> 1 lines (1 duplicate, 0 empty removed)"));
}

#[test]
fn oversized_input_fails_without_output() {
    list_tidy()
        .args(["--max-size", "4", "--sort", "asc"])
        .write_stdin("banana\napple")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("exceeds the maximum"));
}

#[test]
fn missing_input_file_fails() {
    list_tidy()
        .arg("definitely/not/here.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("definitely/not/here.txt"));
}

#[test]
fn rejects_unknown_case_mode() {
    list_tidy().args(["--case", "kebab"]).assert().failure().stderr(predicate::str::contains("kebab"));
}
