//! Statement classification.
//!
//! Designer-generated `InitializeComponent` bodies follow a loose convention
//! rather than a grammar: a small closed set of statement shapes, each with
//! its own resolution rules. Every top-level expression statement is
//! classified into exactly one [`StatementShape`]; anything else (layout
//! suspend/resume calls, declarations, malformed code) is [`Ignored`].
//!
//! [`Ignored`]: StatementShape::Ignored

use tree_sitter::Node;

use super::names::{is_struct_type, resolve_control_name, simple_type_name};
use crate::model::FORM_NAME;
use crate::syntax::{first_argument, node_text};

/// One classified statement from the initialization method body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementShape {
    /// `target.Prop = value` — recorded against an already-known control.
    PropertyAssign {
        target: String,
        property: String,
        value: String,
    },
    /// `this.x = new T()` (or bare `x = new T()`) for a non-struct `T`.
    NewControl { name: String, class_name: String },
    /// `target.Event += new Handler(this.method)`.
    EventSubscribe {
        target: String,
        event: String,
        handler: String,
    },
    /// `parent.Controls.Add(child)` — parent may still carry a
    /// `.Panel1`/`.Panel2` accessor, split off when the shape is applied.
    ChildAttach { parent: String, child: String },
    /// Any statement outside the convention.
    Ignored,
}

/// Classify one top-level expression from the method body.
pub fn classify(expr: Node<'_>, source: &str) -> StatementShape {
    match expr.kind() {
        "assignment_expression" => classify_assignment(expr, source),
        "invocation_expression" => classify_invocation(expr, source),
        _ => StatementShape::Ignored,
    }
}

fn classify_assignment(expr: Node<'_>, source: &str) -> StatementShape {
    let (Some(left), Some(right)) = (
        expr.child_by_field_name("left"),
        expr.child_by_field_name("right"),
    ) else {
        return StatementShape::Ignored;
    };

    let operator = match expr.child_by_field_name("operator") {
        Some(op) => node_text(op, source),
        None => source[left.end_byte()..right.start_byte()].trim(),
    };

    match operator {
        "=" => classify_simple_assignment(left, right, source),
        "+=" => classify_event_subscription(left, right, source),
        _ => StatementShape::Ignored,
    }
}

/// `target = value`: either a property write or a control instantiation.
///
/// The ambiguous case is `this.X = new T()`: a struct-typed `T` (point,
/// size, font, ...) is a property value on the form, anything else
/// instantiates a new control named `X`.
fn classify_simple_assignment(left: Node<'_>, right: Node<'_>, source: &str) -> StatementShape {
    let value = node_text(right, source).to_string();

    match left.kind() {
        "member_access_expression" => {
            let (Some(object), Some(member)) = (
                left.child_by_field_name("expression"),
                left.child_by_field_name("name"),
            ) else {
                return StatementShape::Ignored;
            };
            let member = node_text(member, source);

            if object.kind() == "this" {
                if let Some(type_name) = instantiated_type(right, source) {
                    if !is_struct_type(type_name) {
                        return StatementShape::NewControl {
                            name: member.to_string(),
                            class_name: simple_type_name(type_name).to_string(),
                        };
                    }
                }
                StatementShape::PropertyAssign {
                    target: FORM_NAME.to_string(),
                    property: member.to_string(),
                    value,
                }
            } else {
                StatementShape::PropertyAssign {
                    target: resolve_control_name(node_text(object, source)).to_string(),
                    property: member.to_string(),
                    value,
                }
            }
        }
        "identifier" => {
            let name = node_text(left, source);
            match instantiated_type(right, source) {
                Some(type_name) if !is_struct_type(type_name) => StatementShape::NewControl {
                    name: name.to_string(),
                    class_name: simple_type_name(type_name).to_string(),
                },
                // A bare name without an instantiation is treated as a
                // property keyed by that name, implicitly on the form.
                _ => StatementShape::PropertyAssign {
                    target: FORM_NAME.to_string(),
                    property: name.to_string(),
                    value,
                },
            }
        }
        _ => StatementShape::Ignored,
    }
}

/// `target.Event += new Handler(this.method)`.
///
/// The handler name comes from the first argument of the delegate
/// instantiation on the right; without one the statement contributes
/// nothing.
fn classify_event_subscription(left: Node<'_>, right: Node<'_>, source: &str) -> StatementShape {
    let (target, event) = if left.kind() == "member_access_expression" {
        let (Some(object), Some(member)) = (
            left.child_by_field_name("expression"),
            left.child_by_field_name("name"),
        ) else {
            return StatementShape::Ignored;
        };
        let target = if object.kind() == "this" {
            FORM_NAME
        } else {
            resolve_control_name(node_text(object, source))
        };
        (target.to_string(), node_text(member, source).to_string())
    } else {
        (FORM_NAME.to_string(), node_text(left, source).to_string())
    };

    let Some(handler) = delegate_handler(right, source) else {
        return StatementShape::Ignored;
    };

    StatementShape::EventSubscribe {
        target,
        event,
        handler: handler.to_string(),
    }
}

/// `parent.Controls.Add(child)`: attach `child` to `parent`.
fn classify_invocation(expr: Node<'_>, source: &str) -> StatementShape {
    let Some(callee) = expr.child_by_field_name("function") else {
        return StatementShape::Ignored;
    };
    let Some(parent_access) = node_text(callee, source).strip_suffix(".Controls.Add") else {
        return StatementShape::Ignored;
    };
    let Some(arguments) = expr.child_by_field_name("arguments") else {
        return StatementShape::Ignored;
    };
    let Some(child) = first_argument(arguments) else {
        return StatementShape::Ignored;
    };

    StatementShape::ChildAttach {
        parent: resolve_control_name(parent_access).to_string(),
        child: resolve_control_name(node_text(child, source)).to_string(),
    }
}

/// Type name of an object creation expression, or `None` for any other
/// right-hand side.
fn instantiated_type<'a>(node: Node<'_>, source: &'a str) -> Option<&'a str> {
    if node.kind() != "object_creation_expression" {
        return None;
    }
    node.child_by_field_name("type")
        .map(|ty| node_text(ty, source))
}

/// Handler method referenced by the first argument of a delegate
/// instantiation, with a leading `this.` stripped.
fn delegate_handler<'a>(node: Node<'_>, source: &'a str) -> Option<&'a str> {
    if node.kind() != "object_creation_expression" {
        return None;
    }
    let arguments = node.child_by_field_name("arguments")?;
    let handler = first_argument(arguments)?;
    Some(resolve_control_name(node_text(handler, source)))
}
