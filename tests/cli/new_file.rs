use std::fs;

use crate::{formlens, stderr, stdout};

#[test]
fn new_without_path_prints_the_scaffold() {
    let dir = tempfile::tempdir().unwrap();

    let output = formlens(&["new"], dir.path());

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("partial class Form1"));
    assert!(out.contains("private void InitializeComponent()"));
}

#[test]
fn new_writes_a_named_form_that_reparses() {
    let dir = tempfile::tempdir().unwrap();

    let output = formlens(
        &["new", "--name", "MainForm", "MainForm.Designer.cs"],
        dir.path(),
    );
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Wrote"));

    let written = fs::read_to_string(dir.path().join("MainForm.Designer.cs")).unwrap();
    assert!(written.contains("partial class MainForm"));

    let parsed = formlens(&["parse", "MainForm.Designer.cs"], dir.path());
    assert_eq!(parsed.status.code(), Some(0));
    assert!(stdout(&parsed).contains("Form MainForm"));
}

#[test]
fn new_refuses_to_overwrite_without_force() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Form1.Designer.cs"), "existing").unwrap();

    let output = formlens(&["new", "Form1.Designer.cs"], dir.path());
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("already exists"));

    let forced = formlens(&["new", "--force", "Form1.Designer.cs"], dir.path());
    assert_eq!(forced.status.code(), Some(0));
    assert!(
        fs::read_to_string(dir.path().join("Form1.Designer.cs"))
            .unwrap()
            .contains("partial class Form1")
    );
}
