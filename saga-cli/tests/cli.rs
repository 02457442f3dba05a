use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const OUTLINE: &str = "\u{feff}Season 1
*Pilot*
   Characters
      Bob
      Alice
   Locations
      Park
   Songs
      Opening
         Theme Song
      Scene Specific
         Rooftop
            Night Drive
Chapter Template
*Episode Name*
   Characters
      Someone
";

fn write_outline(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("outline.txt");
    fs::write(&path, OUTLINE).expect("outline to be written");
    path
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("artifact to exist")
}

#[test]
fn writes_every_artifact_next_to_the_input() {
    let dir = TempDir::new().unwrap();
    let input = write_outline(&dir);

    let mut cmd = cargo_bin_cmd!("saga");
    cmd.arg(&input);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Directory created"))
        .stdout(predicate::str::contains("Casual Roleplay Songs.txt"));

    let output = dir.path().join("Output");
    assert_eq!(read(&output.join("Casual Roleplay Characters.txt")), "Alice\nBob\n");
    assert_eq!(read(&output.join("Casual Roleplay Locations.txt")), "Park\n");
    assert_eq!(
        read(&output.join("Casual Roleplay Songs.txt")),
        "Night Drive\nTheme Song\n"
    );

    let json = read(&output.join("Casual Roleplay.json"));
    assert!(json.starts_with("{\n    \"Season 1\": {"));
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value.get("Chapter Template").is_none());
    assert_eq!(value["Season 1"]["Pilot"]["Songs"]["Opening"], "Theme Song");
}

#[test]
fn reuses_an_existing_output_directory() {
    let dir = TempDir::new().unwrap();
    let input = write_outline(&dir);
    fs::create_dir(dir.path().join("Output")).unwrap();

    let mut cmd = cargo_bin_cmd!("saga");
    cmd.arg(&input);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Directory created").not());

    assert!(dir.path().join("Output").join("Casual Roleplay.json").is_file());
}

#[test]
fn prints_a_single_artifact_without_writing_files() {
    let dir = TempDir::new().unwrap();
    let input = write_outline(&dir);

    let mut cmd = cargo_bin_cmd!("saga");
    cmd.arg(&input).arg("--print").arg("characters");
    cmd.assert().success().stdout("Alice\nBob\n");

    assert!(!dir.path().join("Output").exists());
}

#[test]
fn prompts_for_a_quoted_path() {
    let dir = TempDir::new().unwrap();
    let input = write_outline(&dir);

    let mut cmd = cargo_bin_cmd!("saga");
    cmd.write_stdin(format!("\"{}\"\n", input.display()));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ABSOLUTE file path"));

    assert!(dir.path().join("Output").join("Casual Roleplay.json").is_file());
}

#[test]
fn honours_name_output_dir_and_config() {
    let dir = TempDir::new().unwrap();
    let input = write_outline(&dir);
    let config = dir.path().join("saga.toml");
    fs::write(&config, "[output]\njson_indent = 2\n").unwrap();
    let out = dir.path().join("custom");

    let mut cmd = cargo_bin_cmd!("saga");
    cmd.arg(&input)
        .arg("--name")
        .arg("Notes")
        .arg("--output-dir")
        .arg(&out)
        .arg("--config")
        .arg(&config);
    cmd.assert().success();

    let json = read(&out.join("Notes.json"));
    assert!(json.starts_with("{\n  \"Season 1\": {"));
    assert!(out.join("Notes Characters.txt").is_file());
}

#[test]
fn missing_input_fails_with_an_error() {
    let mut cmd = cargo_bin_cmd!("saga");
    cmd.arg("/no/such/outline.txt");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: failed to read /no/such/outline.txt"));
}

#[test]
fn rejects_unknown_print_targets() {
    let mut cmd = cargo_bin_cmd!("saga");
    cmd.arg("outline.txt").arg("--print").arg("props");
    cmd.assert().failure();
}
