//! New Designer file template generation.
//!
//! Emits the canonical minimal `*.Designer.cs` file for a fresh form: the
//! required `components` field, `Dispose`, and an `InitializeComponent`
//! carrying only the form's own scaling/size properties. The output is a
//! complete compilable file that round-trips through the extractor.

/// Form class name used when none is given.
pub const DEFAULT_FORM_NAME: &str = "Form1";

const TEMPLATE: &str = r#"namespace WinFormsApp
{
    partial class Form1
    {
        /// <summary>
        ///  Required designer variable.
        /// </summary>
        private System.ComponentModel.IContainer components = null;

        /// <summary>
        ///  Clean up any resources being used.
        /// </summary>
        /// <param name="disposing">true if managed resources should be disposed; otherwise, false.</param>
        protected override void Dispose(bool disposing)
        {
            if (disposing && (components != null))
            {
                components.Dispose();
            }
            base.Dispose(disposing);
        }

        #region Windows Form Designer generated code

        /// <summary>
        ///  Required method for Designer support - do not modify
        ///  the contents of this method with the code editor.
        /// </summary>
        private void InitializeComponent()
        {
            this.SuspendLayout();
            this.AutoScaleDimensions = new System.Drawing.SizeF(7F, 15F);
            this.AutoScaleMode = System.Windows.Forms.AutoScaleMode.Font;
            this.ClientSize = new System.Drawing.Size(800, 450);
            this.Name = "Form1";
            this.Text = "Form1";
            this.ResumeLayout(false);
        }

        #endregion
    }
}
"#;

/// Source text of a fresh Designer file for the given form class name.
pub fn new_designer_source(form_name: &str) -> String {
    TEMPLATE.replace(DEFAULT_FORM_NAME, form_name)
}
