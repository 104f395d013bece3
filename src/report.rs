//! Report formatting and printing utilities.
//!
//! Renders an extracted [`FileModel`] as a control hierarchy for the
//! terminal. Separate from the extraction core so formlens can be used as a
//! library.

use std::collections::HashSet;
use std::io::{self, Write};

use colored::Colorize;

use crate::model::{ControlInfo, FORM_NAME, FileModel};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the model to stdout.
pub fn report(model: &FileModel, verbose: bool) {
    report_to(model, verbose, &mut io::stdout().lock());
}

/// Print the model to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(model: &FileModel, verbose: bool, writer: &mut W) {
    if model.controls.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            "No InitializeComponent method found".red()
        );
        if !model.form_class_name.is_empty() {
            let _ = writeln!(writer, "  class: {}", model.form_class_name);
        }
        return;
    }

    let _ = writeln!(
        writer,
        "{} Form {} ({} {}, {} event {})",
        SUCCESS_MARK.green(),
        model.form_class_name.bold(),
        model.control_count(),
        if model.control_count() == 1 { "control" } else { "controls" },
        model.event_count(),
        if model.event_count() == 1 { "handler" } else { "handlers" },
    );

    if verbose {
        print_detail(&model.controls[0], 1, writer);
    }
    print_children(model, FORM_NAME, 1, verbose, writer);

    // Anything not reachable from the form goes in the unattached section:
    // controls never attached, and controls whose parent name resolves to
    // nothing registered.
    let mut attached = HashSet::new();
    collect_attached(model, FORM_NAME, &mut attached);
    let unattached: Vec<&ControlInfo> = model
        .controls
        .iter()
        .filter(|c| !c.is_form() && !attached.contains(c.name.as_str()))
        .collect();
    if !unattached.is_empty() {
        let _ = writeln!(writer, "{}", "unattached:".yellow());
        for control in unattached {
            print_control(control, 1, verbose, writer);
        }
    }
}

fn collect_attached<'a>(model: &'a FileModel, parent: &str, seen: &mut HashSet<&'a str>) {
    for control in model
        .controls
        .iter()
        .filter(|c| !c.is_form() && c.parent == parent && c.name != c.parent)
    {
        if seen.insert(control.name.as_str()) {
            collect_attached(model, &control.name, seen);
        }
    }
}

fn print_children<W: Write>(
    model: &FileModel,
    parent: &str,
    depth: usize,
    verbose: bool,
    writer: &mut W,
) {
    for control in model
        .controls
        .iter()
        .filter(|c| !c.is_form() && c.parent == parent && c.name != c.parent)
    {
        print_control(control, depth, verbose, writer);
        print_children(model, &control.name, depth + 1, verbose, writer);
    }
}

fn print_control<W: Write>(control: &ControlInfo, depth: usize, verbose: bool, writer: &mut W) {
    let indent = "  ".repeat(depth);
    let slot = match control.panel_slot {
        1 => " [Panel1]",
        2 => " [Panel2]",
        _ => "",
    };
    let _ = writeln!(
        writer,
        "{indent}{} {}{}",
        control.name.cyan(),
        format!("({})", control.class_name).dimmed(),
        slot
    );
    if verbose {
        print_detail(control, depth + 1, writer);
    }
}

fn print_detail<W: Write>(control: &ControlInfo, depth: usize, writer: &mut W) {
    let indent = "  ".repeat(depth);
    for property in &control.properties {
        let _ = writeln!(writer, "{indent}.{} = {}", property.name, property.value.dimmed());
    }
    for event in &control.events {
        let _ = writeln!(
            writer,
            "{indent}{} -> {}",
            event.name.yellow(),
            event.handler
        );
    }
}
