use std::fs;

use crate::{NO_INIT_DESIGNER, SAMPLE_DESIGNER, formlens, stdout};

#[test]
fn scan_summarizes_designer_files_and_skips_others() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("ui");
    fs::create_dir(&nested).unwrap();
    fs::write(dir.path().join("Form1.Designer.cs"), SAMPLE_DESIGNER).unwrap();
    fs::write(nested.join("Orphan.Designer.cs"), NO_INIT_DESIGNER).unwrap();
    fs::write(dir.path().join("Program.cs"), "class Program { }").unwrap();

    let output = formlens(&["scan", "."], dir.path());

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("Form Form1, 1 controls, 1 event handlers"), "unexpected output: {out}");
    assert!(out.contains("no InitializeComponent method"));
    assert!(out.contains("Scanned 2 Designer files (1 ok, 1 without init method, 0 failed)"));
    assert!(!out.contains("Program.cs"));
}

#[test]
fn scan_empty_directory_reports_nothing_found() {
    let dir = tempfile::tempdir().unwrap();

    let output = formlens(&["scan", "."], dir.path());

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("No Designer files found"));
}

#[test]
fn scan_of_a_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Form1.Designer.cs"), SAMPLE_DESIGNER).unwrap();

    let output = formlens(&["scan", "Form1.Designer.cs"], dir.path());

    assert_eq!(output.status.code(), Some(2));
}
