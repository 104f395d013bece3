use std::fs;

use formlens::model::FileModel;

use crate::{NO_INIT_DESIGNER, SAMPLE_DESIGNER, formlens, stderr, stdout};

#[test]
fn parse_prints_the_control_hierarchy() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Form1.Designer.cs"), SAMPLE_DESIGNER).unwrap();

    let output = formlens(&["parse", "Form1.Designer.cs"], dir.path());

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("Form Form1 (1 control, 1 event handler)"), "unexpected output: {out}");
    assert!(out.contains("button1 (Button)"));
}

#[test]
fn parse_verbose_includes_properties() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Form1.Designer.cs"), SAMPLE_DESIGNER).unwrap();

    let output = formlens(&["parse", "--verbose", "Form1.Designer.cs"], dir.path());

    let out = stdout(&output);
    assert!(out.contains(".Text = \"Hi\""));
    assert!(out.contains("Click -> button1_Click"));
}

#[test]
fn parse_json_emits_the_full_model() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Form1.Designer.cs"), SAMPLE_DESIGNER).unwrap();

    let output = formlens(&["parse", "--format", "json", "Form1.Designer.cs"], dir.path());

    assert_eq!(output.status.code(), Some(0));
    let model: FileModel = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(model.form_class_name, "Form1");
    assert_eq!(model.control_count(), 1);
    assert_eq!(model.controls[1].name, "button1");
    assert_eq!(model.controls[1].parent, "this");
}

#[test]
fn parse_rejects_non_designer_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Form1.cs"), SAMPLE_DESIGNER).unwrap();

    let output = formlens(&["parse", "Form1.cs"], dir.path());

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("not a Designer file"));
}

#[test]
fn parse_without_init_method_exits_with_failure() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Orphan.Designer.cs"), NO_INIT_DESIGNER).unwrap();

    let output = formlens(&["parse", "Orphan.Designer.cs"], dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("No InitializeComponent method found"));
}

#[test]
fn parse_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();

    let output = formlens(&["parse", "Nope.Designer.cs"], dir.path());

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read"));
}
