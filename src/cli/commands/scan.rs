//! `formlens scan` — find and summarize every Designer file under a directory.

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::cli::{ExitStatus, ScanCommand};
use crate::model::FileModel;
use crate::report::{FAILURE_MARK, SUCCESS_MARK};
use crate::{extract, report, utils};

pub fn scan(cmd: ScanCommand) -> Result<ExitStatus> {
    if !cmd.dir.is_dir() {
        anyhow::bail!("{} is not a directory", cmd.dir.display());
    }

    let files: Vec<PathBuf> = WalkDir::new(&cmd.dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| utils::is_designer_file(path))
        .collect();

    if files.is_empty() {
        println!("No Designer files found under {}", cmd.dir.display());
        return Ok(ExitStatus::Success);
    }

    let mut results: Vec<(PathBuf, Result<FileModel>)> = files
        .par_iter()
        .map(|path| (path.clone(), extract::parse_file(path)))
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));

    let mut failed = 0;
    let mut skipped = 0;
    for (path, result) in &results {
        match result {
            Ok(model) if model.controls.is_empty() => {
                skipped += 1;
                println!(
                    "{} {}: {}",
                    FAILURE_MARK.yellow(),
                    path.display(),
                    "no InitializeComponent method".yellow()
                );
            }
            Ok(model) => {
                println!(
                    "{} {}: Form {}, {} controls, {} event handlers",
                    SUCCESS_MARK.green(),
                    path.display(),
                    model.form_class_name.bold(),
                    model.control_count(),
                    model.event_count()
                );
                if cmd.common.verbose {
                    report::report(model, true);
                }
            }
            Err(err) => {
                failed += 1;
                println!("{} {}: {:#}", FAILURE_MARK.red(), path.display(), err);
            }
        }
    }

    println!(
        "Scanned {} Designer {} ({} ok, {} without init method, {} failed)",
        results.len(),
        if results.len() == 1 { "file" } else { "files" },
        results.len() - failed - skipped,
        skipped,
        failed
    );

    if failed > 0 {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}
