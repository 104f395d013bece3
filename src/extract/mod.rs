//! Core extraction engine.
//!
//! Turns the text of a Designer file into a [`FileModel`] in one pass:
//!
//! 1. **Header capture** (textual): the form class name and every raw line
//!    up to and including the `InitializeComponent` declaration line.
//! 2. **Statement classification** (structural): each top-level expression
//!    statement of the method body is classified into a [`StatementShape`]
//!    and folded into the control registry.
//!
//! Extraction is best-effort and never fails for recognized-but-unexpected
//! statement shapes: unmatched statements are skipped and mutations against
//! unknown control names are dropped. A file without the initialization
//! method (or with a bodyless one) yields an empty-but-valid model.

mod names;
mod registry;
mod statement;


use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub use statement::StatementShape;
pub use statement::classify;

use names::split_panel_slot;
use registry::ControlRegistry;

use crate::model::{ControlInfo, EventWiring, FileModel, Property};
use crate::syntax;

/// Conventional name of the generated initialization method.
pub const INIT_METHOD: &str = "InitializeComponent";

/// Read a Designer file and extract its control model.
pub fn parse_file(path: &Path) -> Result<FileModel> {
    let code = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_source(&code)
}

/// Extract the control model from Designer source text.
///
/// Returns an error only when the syntax source produces no tree at all.
/// Structural absence (no `InitializeComponent`, or no body) returns the
/// partial model captured so far.
pub fn parse_source(code: &str) -> Result<FileModel> {
    let tree = syntax::parse_csharp(code)?;
    let root = tree.root_node();

    let mut model = FileModel::default();

    if let Some(class_decl) = syntax::find_first(root, "class_declaration") {
        if let Some(name) = class_decl.child_by_field_name("name") {
            model.form_class_name = syntax::node_text(name, code).to_string();
        }
    }

    let Some(method) = syntax::find_method(root, code, INIT_METHOD) else {
        return Ok(model);
    };

    model.leading_source_lines = capture_leading_lines(code);

    let Some(body) = method.child_by_field_name("body") else {
        return Ok(model);
    };

    let mut registry = ControlRegistry::with_form();
    let mut cursor = body.walk();
    for stmt in body.named_children(&mut cursor) {
        if stmt.kind() != "expression_statement" {
            continue;
        }
        let Some(expr) = syntax::first_expression(stmt) else {
            continue;
        };
        apply(classify(expr, code), &mut registry);
    }

    model.controls = registry.into_controls();
    Ok(model)
}

/// Fold one classified statement into the registry.
///
/// Only `NewControl` creates entries; every other shape mutates an existing
/// entry or is dropped.
fn apply(shape: StatementShape, registry: &mut ControlRegistry) {
    match shape {
        StatementShape::NewControl { name, class_name } => {
            registry.register(ControlInfo::new(name, class_name));
        }
        StatementShape::PropertyAssign {
            target,
            property,
            value,
        } => {
            if let Some(control) = registry.get_mut(&target) {
                control.properties.push(Property {
                    name: property,
                    value,
                });
            }
        }
        StatementShape::EventSubscribe {
            target,
            event,
            handler,
        } => {
            if let Some(control) = registry.get_mut(&target) {
                control.events.push(EventWiring {
                    name: event,
                    handler,
                });
            }
        }
        StatementShape::ChildAttach { parent, child } => {
            let (parent, slot) = split_panel_slot(&parent);
            if let Some(control) = registry.get_mut(&child) {
                control.parent = parent.to_string();
                control.panel_slot = slot;
            }
        }
        StatementShape::Ignored => {}
    }
}

/// Raw lines from file start through the `InitializeComponent` declaration.
///
/// A deliberately textual match (the line must contain both the method name
/// and `void`) so surrounding comments and `#region` markers survive for
/// later regeneration. Empty when no such line exists.
fn capture_leading_lines(code: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for line in code.lines() {
        lines.push(line.to_string());
        if line.contains(INIT_METHOD) && line.contains("void") {
            return lines;
        }
    }
    Vec::new()
}
