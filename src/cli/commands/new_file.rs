//! `formlens new` — write a fresh minimal Designer file.

use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::cli::{ExitStatus, NewCommand};
use crate::report::SUCCESS_MARK;
use crate::scaffold;

pub fn new_file(cmd: NewCommand) -> Result<ExitStatus> {
    let source = scaffold::new_designer_source(&cmd.name);

    match &cmd.path {
        None => print!("{source}"),
        Some(path) => {
            if path.exists() && !cmd.force {
                anyhow::bail!("{} already exists (pass --force to overwrite)", path.display());
            }
            fs::write(path, &source)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("{} Wrote {}", SUCCESS_MARK.green(), path.display());
        }
    }

    Ok(ExitStatus::Success)
}
