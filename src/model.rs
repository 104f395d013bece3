//! Control model value types.
//!
//! These are the plain-data results of extraction: one [`FileModel`] per
//! Designer file, holding one [`ControlInfo`] per instantiated control plus
//! a synthetic entry for the form itself. Everything is serde-serializable
//! so the CLI can emit the model as JSON.

use serde::{Deserialize, Serialize};

/// The reserved name the generated code uses for the form itself.
pub const FORM_NAME: &str = "this";

/// Class-name marker carried by the synthetic form entry.
pub const FORM_CLASS: &str = "Form";

/// A single property assignment observed in source order.
///
/// `value` is the unparsed right-hand-side text, preserving literal
/// formatting exactly as written (`"Hi"`, `new System.Drawing.Size(800, 450)`,
/// `AutoScaleMode.Font`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub value: String,
}

/// One event subscription: event name and the handler method it is wired to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventWiring {
    pub name: String,
    pub handler: String,
}

/// One instantiated control, or the form itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlInfo {
    /// Identifier used to reference the control in source. Unique within a
    /// file; [`FORM_NAME`] denotes the form.
    pub name: String,
    /// Simple name of the instantiated type (last segment of a possibly
    /// qualified type name). [`FORM_CLASS`] for the synthetic form entry.
    pub class_name: String,
    /// Property assignments in source order. Repeated writes to the same
    /// property accumulate as separate entries; nothing is deduplicated.
    pub properties: Vec<Property>,
    /// Event subscriptions in source order.
    pub events: Vec<EventWiring>,
    /// Name of the containing control, or empty if never attached.
    pub parent: String,
    /// Split-container pane the control was added to: 1 or 2 when the parent
    /// reference ended in a `.Panel1`/`.Panel2` accessor, 0 otherwise.
    pub panel_slot: u8,
}

impl ControlInfo {
    pub fn new(name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class_name: class_name.into(),
            ..Default::default()
        }
    }

    /// The synthetic entry for the form, seeded before any statement is
    /// classified.
    pub fn form() -> Self {
        Self::new(FORM_NAME, FORM_CLASS)
    }

    pub fn is_form(&self) -> bool {
        self.name == FORM_NAME
    }
}

/// The extracted model of one Designer file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileModel {
    /// Identifier of the first class declaration found in the file.
    pub form_class_name: String,
    /// Raw source lines from file start through the line declaring the
    /// initialization method (inclusive). Preserved verbatim so headers and
    /// using directives survive regeneration.
    pub leading_source_lines: Vec<String>,
    /// All controls in registration order, synthetic form entry first
    /// whenever the initialization method body was found.
    pub controls: Vec<ControlInfo>,
}

impl FileModel {
    /// Total event subscriptions across all controls.
    pub fn event_count(&self) -> usize {
        self.controls.iter().map(|c| c.events.len()).sum()
    }

    /// Number of real controls, excluding the synthetic form entry.
    pub fn control_count(&self) -> usize {
        self.controls.iter().filter(|c| !c.is_form()).count()
    }
}
