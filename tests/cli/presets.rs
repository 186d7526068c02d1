use assert_cmd::Command;
use predicates::prelude::*;

fn write_preset(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, body).expect("write preset");
    path
}

#[test]
fn yaml_preset_drives_pipeline() {
    let dir = tempfile::tempdir().expect("temp dir");
    let preset = write_preset(&dir, "tidy.yaml", "caseConversion: titlecase\nsortDirection: asc\n");

    Command::new(env!("CARGO_BIN_EXE_list_tidy"))
        .arg("--preset")
        .arg(&preset)
        .write_stdin("pear tart\napple pie")
        .assert()
        .success()
        .stdout("Apple Pie\nPear Tart\n");
}

#[test]
fn flag_overrides_json_preset() {
    let dir = tempfile::tempdir().expect("temp dir");
    let preset = write_preset(&dir, "tidy.json", r#"{"sortDirection":"asc"}"#);

    Command::new(env!("CARGO_BIN_EXE_list_tidy"))
        .arg("--preset")
        .arg(&preset)
        .args(["--sort", "desc"])
        .write_stdin("a\nc\nb")
        .assert()
        .success()
        .stdout("c\nb\na\n");
}

#[test]
fn unsupported_preset_extension_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let preset = write_preset(&dir, "tidy.toml", "sort = 'asc'");

    Command::new(env!("CARGO_BIN_EXE_list_tidy"))
        .arg("--preset")
        .arg(&preset)
        .write_stdin("a")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported preset format"));
}
