//! End-to-end tests for the split workflow
//!
//! Drives the public API with terminal-style input: contacts.csv in a temp
//! directory → prompts → part files on disk.

use chrono::NaiveDate;
use clap::Parser;
use contact_splitter::cli::{Cli, Runner};
use contact_splitter::{
    Error, LoadOptions, OutputConfig, ScriptedOperator, SplitEngine, TerminalOperator,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tempfile::tempdir;

const CONTACTS: &str = "\
 Name , Phone ,  Date  ,Notes
Ann,555-0101,8/1/2025 12:47:28,first
Bob,555-0102,7/31/2025,\"likes, commas\"
Cid,555-0103,not a date,dropped
Dee,555-0104,8/1/2025,
Eve,555-0105,13/40/2025,dropped too
Fay,555-0106,07/15/2025 08:00,mid july
Gus,555-0107,8/1/2025,last
";

fn write_contacts(dir: &Path) {
    fs::write(dir.join("contacts.csv"), CONTACTS).unwrap();
}

fn engine_for(dir: &Path) -> SplitEngine {
    SplitEngine::new(
        dir.join("contacts.csv"),
        LoadOptions::default(),
        OutputConfig::new().with_dir(dir),
    )
    .with_today(NaiveDate::from_ymd_opt(2025, 8, 1).unwrap())
}

fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap()
}

// ============================================================================
// Terminal Session Tests
// ============================================================================

#[test]
fn test_terminal_session_today_two_parts() {
    let dir = tempdir().unwrap();
    write_contacts(dir.path());

    let input = Cursor::new("yes\n1\nfive\n2\n");
    let mut operator = TerminalOperator::new(input, Vec::new());

    let report = engine_for(dir.path()).run(&mut operator).unwrap();
    assert_eq!(report.load.rows_read, 7);
    assert_eq!(report.load.rows_rejected, 2);
    assert_eq!(report.rows_selected, 3);

    let (_, output) = operator.into_inner();
    let output = String::from_utf8(output).unwrap();
    assert!(output.starts_with("Filter contacts by date? (yes/no): "));
    assert!(output.contains("   4. Custom date range\n"));
    assert!(output.contains("3 contacts found for your selection.\n"));
    assert!(output.contains("Invalid number. Try again.\n"));
    assert!(output.contains("Saved: contacts_part_1.csv (2 contacts)\n"));
    assert!(output.contains("Saved: contacts_part_2.csv (1 contacts)\n"));
    assert!(output.ends_with("Done! Contacts successfully split.\n"));

    assert_eq!(
        read(dir.path(), "contacts_part_1.csv"),
        "Name,Phone,Date,Notes\n\
         Ann,555-0101,8/1/2025 12:47:28,first\n\
         Dee,555-0104,8/1/2025,\n"
    );
    assert_eq!(
        read(dir.path(), "contacts_part_2.csv"),
        "Name,Phone,Date,Notes\nGus,555-0107,8/1/2025,last\n"
    );
    assert!(!dir.path().join("contacts_part_3.csv").exists());
}

#[test]
fn test_terminal_session_custom_range() {
    let dir = tempdir().unwrap();
    write_contacts(dir.path());

    let input = Cursor::new("YES\n4\n7/1/2025\n7/31/2025\n1\n");
    let mut operator = TerminalOperator::new(input, Vec::new());

    let report = engine_for(dir.path()).run(&mut operator).unwrap();
    assert_eq!(report.files.len(), 1);
    assert_eq!(
        read(dir.path(), "contacts_part_1.csv"),
        "Name,Phone,Date,Notes\n\
         Bob,555-0102,7/31/2025,\"likes, commas\"\n\
         Fay,555-0106,07/15/2025 08:00,mid july\n"
    );
}

#[test]
fn test_terminal_closed_during_part_count() {
    let dir = tempdir().unwrap();
    write_contacts(dir.path());

    let input = Cursor::new("no\n-1\n");
    let mut operator = TerminalOperator::new(input, Vec::new());

    let err = engine_for(dir.path()).run(&mut operator).unwrap_err();
    assert!(matches!(err, Error::InputClosed { .. }));
    assert!(!dir.path().join("contacts_part_1.csv").exists());
}

// ============================================================================
// Failure Tests
// ============================================================================

#[test]
fn test_missing_date_column_reports_columns() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("contacts.csv"), "Name,Created\nAnn,8/1/2025\n").unwrap();

    let err = engine_for(dir.path())
        .run(&mut ScriptedOperator::new(["no", "1"]))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"No 'DATE' column found. Available columns: ["Name", "Created"]"#
    );
}

#[test]
fn test_yesterday_with_no_matches() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("contacts.csv"), "DATE\n8/1/2025\n").unwrap();

    let err = engine_for(dir.path())
        .run(&mut ScriptedOperator::new(["yes", "2", "1"]))
        .unwrap_err();
    assert!(matches!(err, Error::EmptyFilterResult));
    assert_eq!(err.to_string(), "No contacts match the selected date range");
}

#[test]
fn test_write_failure_stops_run() {
    let dir = tempdir().unwrap();
    write_contacts(dir.path());
    // a plain file where the output directory should be
    let blocked = dir.path().join("blocked");
    fs::write(&blocked, "").unwrap();

    let engine = SplitEngine::new(
        dir.path().join("contacts.csv"),
        LoadOptions::default(),
        OutputConfig::new().with_dir(&blocked),
    );
    let mut operator = ScriptedOperator::new(["no", "2"]);

    let err = engine.run(&mut operator).unwrap_err();
    assert!(matches!(err, Error::Output { .. }));
    assert!(!operator.messages().iter().any(|m| m.starts_with("Saved")));
}

#[test]
fn test_parts_written_before_failure_remain() {
    let dir = tempdir().unwrap();
    write_contacts(dir.path());
    // a directory where part 2 should land makes its rename fail
    fs::create_dir(dir.path().join("contacts_part_2.csv")).unwrap();

    let mut operator = ScriptedOperator::new(["no", "2"]);
    let err = engine_for(dir.path()).run(&mut operator).unwrap_err();
    assert!(matches!(err, Error::Output { .. }));

    let saved: Vec<_> = operator
        .messages()
        .into_iter()
        .filter(|m| m.starts_with("Saved"))
        .collect();
    assert_eq!(saved, vec!["Saved: contacts_part_1.csv (3 contacts)"]);
    assert!(!operator
        .messages()
        .contains(&"Done! Contacts successfully split."));
    assert_eq!(
        read(dir.path(), "contacts_part_1.csv"),
        "Name,Phone,Date,Notes\n\
         Ann,555-0101,8/1/2025 12:47:28,first\n\
         Bob,555-0102,7/31/2025,\"likes, commas\"\n\
         Dee,555-0104,8/1/2025,\n"
    );
}

#[test]
fn test_stale_higher_parts_left_untouched() {
    let dir = tempdir().unwrap();
    write_contacts(dir.path());
    fs::write(dir.path().join("contacts_part_5.csv"), "from an earlier run\n").unwrap();

    let report = engine_for(dir.path())
        .run(&mut ScriptedOperator::new(["no", "2"]))
        .unwrap();

    assert_eq!(report.files.len(), 2);
    assert!(!dir.path().join("contacts_part_3.csv").exists());
    assert_eq!(read(dir.path(), "contacts_part_5.csv"), "from an earlier run\n");
}

// ============================================================================
// CLI Tests
// ============================================================================

#[test]
fn test_cli_non_interactive_run() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("export.tsv"),
        "Name\tdate\nAnn\t8/1/2025\nBob\t8/2/2025\nCid\t8/3/2025\n",
    )
    .unwrap();
    let out = dir.path().join("parts");

    let cli = Cli::parse_from([
        "contact-splitter",
        "--input",
        dir.path().join("export.tsv").to_str().unwrap(),
        "--output-dir",
        out.to_str().unwrap(),
        "--prefix",
        "calls_",
        "--delimiter",
        "\t",
        "--filter",
        "range",
        "--start",
        "8/2/2025",
        "--end",
        "8/3/2025",
        "--parts",
        "5",
    ]);
    let mut operator = ScriptedOperator::default();
    let mut stdout = Vec::new();

    let report = Runner::new(cli).run_with(&mut operator, &mut stdout).unwrap();

    assert_eq!(report.rows_selected, 2);
    assert!(operator.prompts().is_empty());
    assert!(stdout.is_empty());
    assert_eq!(fs::read_to_string(out.join("calls_1.csv")).unwrap(), "Name\tdate\nBob\t8/2/2025\n");
    assert_eq!(fs::read_to_string(out.join("calls_2.csv")).unwrap(), "Name\tdate\nCid\t8/3/2025\n");
    assert!(!out.join("calls_3.csv").exists());
}
