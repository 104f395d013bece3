//! `formlens parse` — extract the control model from one Designer file.

use anyhow::Result;

use crate::cli::{ExitStatus, OutputFormat, ParseCommand};
use crate::{extract, report, utils};

pub fn parse(cmd: ParseCommand) -> Result<ExitStatus> {
    if !utils::is_designer_file(&cmd.file) {
        anyhow::bail!(
            "{} is not a Designer file (expected a *.Designer.cs name)",
            cmd.file.display()
        );
    }

    let model = extract::parse_file(&cmd.file)?;

    match cmd.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&model)?),
        OutputFormat::Text => report::report(&model, cmd.common.verbose),
    }

    // An empty controls list means the file had no usable InitializeComponent.
    if model.controls.is_empty() {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}
