//! Integration tests for descriptor parsing and directory summaries
//!
//! Uses the descriptor fixtures under `tests/fixtures/` and exercises both
//! the library API and the `ctl-summary` binary.

use ctl_summary::{
    Summarizer, SummaryConfig, TableFormat, parse_descriptor_file, render_table,
};
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn ctl_summary_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_ctl-summary"))
}

#[test]
fn test_parse_forcing_fixture() {
    let metadata = parse_descriptor_file(fixture("input").join("forcing.ctl")).unwrap();

    assert_eq!(metadata.file_name(), "forcing.ctl");
    assert_eq!(metadata.title(), "Observed forcing 2001");
    assert_eq!(
        (metadata.x_def(), metadata.y_def(), metadata.z_def(), metadata.t_def()),
        (360, 180, 1, 365)
    );
    // Commented and three-token variable lines are not counted
    assert_eq!(metadata.variables(), vec!["pr", "tas"]);
    assert_eq!(
        metadata.variable_descriptions(),
        vec!["Precipitation rate", "Near-surface air temperature"]
    );
    assert_eq!(metadata.data_file(), "forcing_2001.bin");
}

#[test]
fn test_parse_lenient_fixtures() {
    let benchmark = parse_descriptor_file(fixture("output").join("benchmark.ctl")).unwrap();
    assert_eq!(benchmark.x_def(), 96);
    assert_eq!(benchmark.y_def(), 0);
    assert_eq!(benchmark.z_def(), 10);
    assert_eq!(benchmark.variable_count(), 2);

    // No endvars and a bare dset
    let bare = parse_descriptor_file(fixture("output").join("bare_dset.ctl")).unwrap();
    assert_eq!(bare.data_file(), "Unknown");
    assert_eq!(bare.title(), "Descriptor without data file");
    assert_eq!(bare.variables(), vec!["U"]);
}

#[test]
fn test_summarize_fixture_directory() {
    let summarizer = Summarizer::new(SummaryConfig::default().with_sorted_entries(true)).unwrap();
    let report = summarizer.summarize(fixture("input")).unwrap();

    assert_eq!(report.rows.len(), 2);
    assert!(report.failures.is_empty());
    assert_eq!(report.rows[0].file_name, "forcing.ctl");
    assert_eq!(report.rows[1].file_name, "topography.ctl");
    assert_eq!(report.rows[1].title, "Surface   elevation");
    assert_eq!(
        report.rows[1].variables,
        "elev (Elevation above sea level)"
    );

    let table = render_table(&report, TableFormat::Rst).unwrap();
    assert_eq!(table.lines().count(), 6);
    assert!(table.contains("forcing.ctl"));
    assert!(table.contains("topo.grd"));
}

#[test]
fn test_cli_prints_markdown_report() {
    let output = Command::new(ctl_summary_bin())
        .arg(fixture("input"))
        .args(["--format", "markdown", "--sort", "--heading", "Input Summary"])
        .output()
        .expect("failed to run ctl-summary");

    assert!(
        output.status.success(),
        "ctl-summary failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("# Input Summary\n\n| File"));
    assert!(stdout.contains("| forcing.ctl"));
    assert!(stdout.contains("| topography.ctl"));
    assert!(!stdout.contains("README.txt"));
}

#[test]
fn test_cli_writes_report_file() {
    let temp_dir = TempDir::new().unwrap();
    let report_path = temp_dir.path().join("reports").join("ctl_summary.rst");

    let output = Command::new(ctl_summary_bin())
        .arg(fixture("input"))
        .arg(fixture("output"))
        .args(["--heading", "Input Summary", "--heading", "Output Summary", "-o"])
        .arg(&report_path)
        .output()
        .expect("failed to run ctl-summary");

    assert!(
        output.status.success(),
        "ctl-summary failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let contents = fs::read_to_string(&report_path).unwrap();
    assert!(contents.starts_with("# Input Summary\n\n"));
    assert!(contents.contains("\n\n# Output Summary\n\n"));
    assert!(contents.contains("benchmark_pictrl.bin"));
    assert!(contents.contains("Unknown"));
}

#[test]
fn test_cli_json_output() {
    let output = Command::new(ctl_summary_bin())
        .arg(fixture("output"))
        .args(["--format", "json", "--heading", "Output Summary"])
        .output()
        .expect("failed to run ctl-summary");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout)
        .unwrap_or_else(|e| panic!("Invalid JSON output: {e}\n{stdout}"));
    assert_eq!(parsed["Output Summary"]["rows"].as_array().unwrap().len(), 2);
    assert!(parsed["Output Summary"]["failures"].as_array().unwrap().is_empty());
}

#[cfg(unix)]
#[test]
fn test_cli_quiet_still_reports_skipped_descriptors() {
    let temp_dir = TempDir::new().unwrap();
    fs::copy(
        fixture("input").join("forcing.ctl"),
        temp_dir.path().join("good.ctl"),
    )
    .unwrap();
    std::os::unix::fs::symlink(
        temp_dir.path().join("missing-target"),
        temp_dir.path().join("bad.ctl"),
    )
    .unwrap();

    let output = Command::new(ctl_summary_bin())
        .arg(temp_dir.path())
        .args(["--format", "markdown", "-q"])
        .output()
        .expect("failed to run ctl-summary");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.lines().filter(|l| l.contains("bad.ctl")).count(), 1);
    assert!(stderr.contains("1 of 2 descriptors could not be read"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("| good.ctl"));
    assert!(stdout.contains("Skipped files:"));
    assert!(stdout.contains("bad.ctl: File not found"));

    let output = Command::new(ctl_summary_bin())
        .arg(temp_dir.path())
        .args(["--format", "json", "--heading", "Mixed", "-q"])
        .output()
        .expect("failed to run ctl-summary");

    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(parsed["Mixed"]["rows"].as_array().unwrap().len(), 1);
    let failures = parsed["Mixed"]["failures"].as_array().unwrap();
    assert_eq!(failures.len(), 1);
    assert!(failures[0]["path"].as_str().unwrap().ends_with("bad.ctl"));
}

#[test]
fn test_cli_rejects_dotted_extension() {
    let output = Command::new(ctl_summary_bin())
        .arg(fixture("input"))
        .args(["--extension", "ctl.txt"])
        .output()
        .expect("failed to run ctl-summary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration error"));
}

#[test]
fn test_cli_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = Command::new(ctl_summary_bin())
        .arg(temp_dir.path().join("absent"))
        .output()
        .expect("failed to run ctl-summary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Directory not found"));
}
