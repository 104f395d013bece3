//! CLI integration tests driving the built formlens binary.

mod new_file;
mod parse;
mod scan;

use std::path::Path;
use std::process::{Command, Output};

/// A small but realistic Designer file used across the tests.
pub const SAMPLE_DESIGNER: &str = r#"namespace WinFormsApp
{
    partial class Form1
    {
        private System.ComponentModel.IContainer components = null;

        private void InitializeComponent()
        {
            this.button1 = new System.Windows.Forms.Button();
            this.SuspendLayout();
            this.button1.Name = "button1";
            this.button1.Text = "Hi";
            this.button1.Click += new System.EventHandler(this.button1_Click);
            this.ClientSize = new System.Drawing.Size(800, 450);
            this.Controls.Add(this.button1);
            this.Text = "Form1";
            this.ResumeLayout(false);
        }
    }
}
"#;

/// A file that looks like a Designer file by name but has no init method.
pub const NO_INIT_DESIGNER: &str = r#"namespace WinFormsApp
{
    partial class Orphan
    {
        private void Setup()
        {
        }
    }
}
"#;

pub fn formlens(args: &[&str], dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_formlens"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run formlens")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
