//! Naming heuristics for the statement classifier.

use crate::model::FORM_NAME;

/// Type-name substrings that mark a struct-valued assignment.
///
/// The generated code has no semantic type information attached, so struct
/// detection is a fixed substring allow-list: an object creation whose type
/// name contains one of these markers is a property value, not a new
/// control. Known to misfire on user types whose names happen to contain a
/// marker (e.g. `ColorPickerButton`).
const STRUCT_TYPE_MARKERS: [&str; 5] = ["Point", "Size", "Font", "Color", "Padding"];

/// True iff the type name matches the struct allow-list.
pub fn is_struct_type(type_name: &str) -> bool {
    STRUCT_TYPE_MARKERS
        .iter()
        .any(|marker| type_name.contains(marker))
}

/// Resolve an access expression to a control name.
///
/// `this` stays `this`; a leading `this.` qualifier is stripped; anything
/// else is returned verbatim. Further dotted segments are not split here —
/// callers that need the final segment split it themselves.
pub fn resolve_control_name(access: &str) -> &str {
    if access == FORM_NAME {
        return FORM_NAME;
    }
    access.strip_prefix("this.").unwrap_or(access)
}

/// Last segment of a possibly-qualified type name.
pub fn simple_type_name(type_name: &str) -> &str {
    type_name.rsplit('.').next().unwrap_or(type_name)
}

/// Split a trailing split-container pane accessor off a parent reference.
///
/// Returns the parent name with the accessor removed and the pane number:
/// `splitContainer1.Panel1` → (`splitContainer1`, 1), no accessor → slot 0.
pub fn split_panel_slot(parent: &str) -> (&str, u8) {
    if let Some(prefix) = parent.strip_suffix(".Panel1") {
        (prefix, 1)
    } else if let Some(prefix) = parent.strip_suffix(".Panel2") {
        (prefix, 2)
    } else {
        (parent, 0)
    }
}
