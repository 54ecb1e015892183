use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

fn aem_rename(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("aem-rename").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("AEM_RENAME_PREFIX")
        .env_remove("AEM_RENAME_OUTPUT")
        .env_remove("AEM_RENAME_LOG_FILE")
        .env_remove("AEM_RENAME_LOG_LEVEL")
        .env_remove("NO_COLOR");
    cmd
}

#[test]
fn test_help_command() {
    let mut cmd = Command::cargo_bin("aem-rename").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("<PATH_NAME>"))
        .stdout(predicate::str::contains("--output-folder"));
}

#[test]
fn test_version_flags() {
    for flag in ["-v", "--version"] {
        let mut cmd = Command::cargo_bin("aem-rename").unwrap();
        cmd.arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains("aem-rename 1.0.0"));
    }
}

#[test]
fn test_version_does_no_work() {
    let temp_dir = TempDir::new().unwrap();
    aem_rename(&temp_dir).arg("-v").assert().success();

    temp_dir.child("renamed").assert(predicate::path::missing());
    temp_dir.child("rename.log").assert(predicate::path::missing());
}

#[test]
fn test_missing_path_argument() {
    let temp_dir = TempDir::new().unwrap();
    aem_rename(&temp_dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_invalid_path_exits_one() {
    let temp_dir = TempDir::new().unwrap();
    aem_rename(&temp_dir)
        .arg("does-not-exist.jpg")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Please provide a valid file name or folder name.",
        ));

    temp_dir.child("renamed").assert(predicate::path::missing());
}

#[test]
fn test_rename_single_file_with_defaults() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir
        .child("My Photo (Final).jpg")
        .write_str("jpeg")
        .unwrap();

    aem_rename(&temp_dir)
        .arg("My Photo (Final).jpg")
        .assert()
        .success()
        .stderr(predicate::str::contains(" - aem_rename - INFO: Renamed 'My Photo (Final).jpg' to '"));

    temp_dir
        .child("renamed/sps-his-my-photo-final.jpg")
        .assert("jpeg");
    temp_dir
        .child("My Photo (Final).jpg")
        .assert(predicate::path::exists());
}

#[test]
fn test_log_file_records_lifecycle() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("In Box/First File.txt").write_str("1").unwrap();
    temp_dir.child("In Box/Second File.txt").write_str("2").unwrap();

    aem_rename(&temp_dir).arg("In Box").assert().success();

    let log = std::fs::read_to_string(temp_dir.child("rename.log").path()).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 4, "unexpected log:\n{log}");
    assert!(lines[0].contains(" - aem_rename - INFO: Processing 'In Box'"));
    assert!(lines[1].contains("INFO: Renamed 'First File.txt' to '"));
    assert!(lines[2].contains("INFO: Renamed 'Second File.txt' to '"));
    assert!(lines[3].contains("INFO: Duration: "));

    let shape = predicate::str::is_match(
        r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2},\d{3} - aem_rename - (INFO|WARNING|ERROR): ",
    )
    .unwrap();
    for line in lines {
        assert!(shape.eval(line), "bad log line: {line}");
    }
}

#[test]
fn test_empty_log_file_disables_file_logging() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("a.txt").write_str("a").unwrap();

    aem_rename(&temp_dir)
        .args(["a.txt", "--log-file", ""])
        .assert()
        .success()
        .stderr(predicate::str::contains("INFO: Renamed 'a.txt'"));

    temp_dir.child("rename.log").assert(predicate::path::missing());
    temp_dir.child("renamed/sps-his-a.txt").assert("a");
}

#[test]
fn test_custom_prefix_and_absolute_output_folder() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    temp_dir.child("Quarterly Report.PDF").write_str("pdf").unwrap();

    aem_rename(&temp_dir)
        .arg("Quarterly Report.PDF")
        .arg("-p")
        .arg("")
        .arg("-o")
        .arg(out_dir.path())
        .arg("-l")
        .arg("")
        .assert()
        .success();

    out_dir.child("quarterly-report.PDF").assert("pdf");
    temp_dir.child("renamed").assert(predicate::path::missing());
}

#[test]
fn test_prefix_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("a.txt").write_str("a").unwrap();

    aem_rename(&temp_dir)
        .env("AEM_RENAME_PREFIX", "env-")
        .args(["a.txt", "-l", ""])
        .assert()
        .success();

    temp_dir.child("renamed/env-a.txt").assert("a");
}

#[test]
fn test_second_run_warns_and_still_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("photos/One.jpg").write_str("1").unwrap();

    aem_rename(&temp_dir).args(["photos", "-l", ""]).assert().success();
    aem_rename(&temp_dir)
        .args(["photos", "-l", ""])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "WARNING: Skipping file 'One.jpg'. Destination file already exists:",
        ));
}

#[test]
fn test_failures_exit_zero_unless_strict() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("assets/already-normal.jpg").write_str("x").unwrap();

    // Output folder is the input folder and the name is already canonical,
    // so the only file would be copied onto itself.
    aem_rename(&temp_dir)
        .args(["assets", "-p", "", "-o", "assets", "-l", ""])
        .assert()
        .code(0)
        .stderr(predicate::str::contains(
            "ERROR: Trying to move a file to itself: 'already-normal.jpg'",
        ));

    aem_rename(&temp_dir)
        .args(["assets", "-p", "", "-o", "assets", "-l", "", "--strict"])
        .assert()
        .code(3);

    temp_dir.child("assets/already-normal.jpg").assert("x");
}

#[test]
fn test_json_output() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("in/B File.txt").write_str("b").unwrap();
    temp_dir.child("in/A File.txt").write_str("a").unwrap();

    let assert = aem_rename(&temp_dir)
        .args(["in", "-l", "", "--output", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["operation"], "rename");
    assert_eq!(value["prefix"], "sps-his-");
    assert_eq!(value["summary"]["renamed"], 2);
    assert_eq!(value["results"][0]["original_name"], "A File.txt");
    assert_eq!(value["results"][1]["original_name"], "B File.txt");
}

#[test]
fn test_summary_output() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("in/a.txt").write_str("a").unwrap();

    aem_rename(&temp_dir)
        .args(["in", "-l", "", "--output", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed: 1"))
        .stdout(predicate::str::contains("Skipped (already exists): 0"));
}

#[test]
fn test_no_report_by_default() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("a.txt").write_str("a").unwrap();

    aem_rename(&temp_dir)
        .args(["a.txt", "-l", ""])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_no_color_environment_value_is_accepted() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("a.txt").write_str("a").unwrap();

    aem_rename(&temp_dir)
        .env("NO_COLOR", "1")
        .args(["a.txt", "-l", ""])
        .assert()
        .success();

    temp_dir.child("renamed/sps-his-a.txt").assert("a");
}

#[test]
fn test_debug_log_level_reports_file_count() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("in/a.txt").write_str("a").unwrap();
    temp_dir.child("in/b.txt").write_str("b").unwrap();

    aem_rename(&temp_dir)
        .args(["in", "-l", "", "--log-level", "debug"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG: Found 2 file(s) to process"));
}

#[test]
fn test_default_log_level_hides_debug() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("in/a.txt").write_str("a").unwrap();

    aem_rename(&temp_dir)
        .args(["in", "-l", ""])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG").not());
}
