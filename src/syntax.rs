//! C# syntax tree boundary.
//!
//! Thin wrapper over `tree-sitter` + `tree-sitter-c-sharp` plus the handful
//! of node-navigation helpers the extractor needs. The extractor never talks
//! to tree-sitter directly except through `Node`; everything
//! grammar-specific (node kinds, field names) lives here or in
//! `extract::statement`.

use anyhow::{Result, anyhow};
use tree_sitter::{Node, Parser, Tree};

/// Parse C# source text into a concrete syntax tree.
///
/// Tree-sitter is error-tolerant: malformed regions become error nodes
/// rather than failing the whole parse. The only hard failure is the parser
/// producing no tree at all.
pub fn parse_csharp(code: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_c_sharp::LANGUAGE.into())
        .map_err(|err| anyhow!("Failed to load C# grammar: {err}"))?;
    parser
        .parse(code, None)
        .ok_or_else(|| anyhow!("Failed to parse C# source"))
}

/// Source text covered by a node.
pub fn node_text<'a>(node: Node<'_>, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or_default()
}

/// Depth-first search for the first node of the given kind.
pub fn find_first<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    if node.kind() == kind {
        return Some(node);
    }
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if let Some(found) = find_first(child, kind) {
            return Some(found);
        }
    }
    None
}

/// Depth-first search for the first method declaration with the given name.
pub fn find_method<'t>(node: Node<'t>, source: &str, name: &str) -> Option<Node<'t>> {
    if node.kind() == "method_declaration" {
        if let Some(id) = node.child_by_field_name("name") {
            if node_text(id, source) == name {
                return Some(node);
            }
        }
    }
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if let Some(found) = find_method(child, source, name) {
            return Some(found);
        }
    }
    None
}

/// First non-comment named child of an expression statement.
pub fn first_expression(stmt: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = stmt.walk();
    stmt.named_children(&mut cursor)
        .find(|child| child.kind() != "comment")
}

/// First `argument` node of an argument list.
pub fn first_argument(args: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = args.walk();
    args.named_children(&mut cursor)
        .find(|child| child.kind() == "argument")
}
