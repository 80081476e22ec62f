#![deny(missing_docs)]

//! # Go Syntax
//!
//! Parses Go source with tree-sitter and lifts struct declarations into an
//! owned tree (`StructDecl` / `FieldNode` / `TypeExpr`) that can be inspected,
//! rebuilt and printed without holding on to the tree-sitter `Tree`.
//!
//! - **types**: Type expressions and their canonical rendering.
//! - **decl**: Struct field lists and their gofmt-style printing.

use crate::error::{AppError, AppResult};
use std::ops::Range;
use tree_sitter::{Node, Parser, Tree};

/// Struct field lists.
pub mod decl;

/// Type expressions.
pub mod types;

pub use decl::{FieldNode, StructDecl};
pub use types::{ChanDir, TypeExpr};

/// A parsed Go source file.
pub struct GoSource {
    text: String,
    tree: Tree,
}

/// A struct type declaration found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructSite {
    /// The declared type name.
    pub name: String,
    /// The owned field list.
    pub decl: StructDecl,
    /// Byte range of the `struct { ... }` type expression.
    pub span: Range<usize>,
    /// Leading whitespace of the line the declaration starts on.
    pub indent: String,
}

impl GoSource {
    /// Parses Go source text.
    ///
    /// Syntax errors do not fail the parse; tree-sitter recovers and the
    /// well-formed declarations remain available.
    pub fn parse(text: impl Into<String>) -> AppResult<Self> {
        let text = text.into();
        let tree = new_parser()?
            .parse(&text, None)
            .ok_or_else(|| AppError::Parse("tree-sitter produced no syntax tree".into()))?;

        if tree.root_node().has_error() {
            tracing::warn!("Go source contains syntax errors; continuing with recovered tree");
        }

        Ok(Self { text, tree })
    }

    /// The source text this tree was parsed from.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the parser had to recover from syntax errors.
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }

    /// Returns every struct type declaration, in source order.
    pub fn structs(&self) -> Vec<StructSite> {
        let mut specs = Vec::new();
        collect_type_specs(self.tree.root_node(), &mut specs);

        specs
            .into_iter()
            .filter_map(|spec| self.struct_site(spec))
            .collect()
    }

    /// Returns the names of every struct type declaration.
    pub fn struct_names(&self) -> Vec<String> {
        self.structs().into_iter().map(|site| site.name).collect()
    }

    /// Finds a struct type declaration by name.
    pub fn find_struct(&self, name: &str) -> AppResult<StructSite> {
        self.structs()
            .into_iter()
            .find(|site| site.name == name)
            .ok_or_else(|| AppError::StructNotFound(name.to_string()))
    }

    fn struct_site(&self, spec: Node<'_>) -> Option<StructSite> {
        let name = spec.child_by_field_name("name")?;
        let ty = spec.child_by_field_name("type")?;
        if ty.kind() != "struct_type" {
            return None;
        }

        Some(StructSite {
            name: node_text(name, &self.text).to_string(),
            decl: StructDecl::from_struct_type(ty, &self.text),
            span: ty.start_byte()..ty.end_byte(),
            indent: line_indent(&self.text, spec.start_byte()),
        })
    }
}

impl StructSite {
    /// Replaces this declaration's `struct { ... }` span in `source` with `decl`.
    ///
    /// `source` must be the text the site was found in.
    pub fn splice(&self, source: &str, decl: &StructDecl) -> String {
        let mut new_source = source.to_string();
        new_source.replace_range(self.span.clone(), &decl.render(&self.indent));
        new_source
    }
}

/// Creates a parser configured for Go.
pub(crate) fn new_parser() -> AppResult<Parser> {
    let mut parser = Parser::new();
    parser
        .set_language(tree_sitter_go::language())
        .map_err(|e| AppError::Parse(format!("Failed to load Go grammar: {:?}", e)))?;
    Ok(parser)
}

/// Source text covered by a node.
pub(crate) fn node_text<'s>(node: Node<'_>, src: &'s str) -> &'s str {
    src.get(node.start_byte()..node.end_byte()).unwrap_or_default()
}

/// Collapses every whitespace run to a single space.
pub(crate) fn collapse_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_type_specs<'t>(node: Node<'t>, out: &mut Vec<Node<'t>>) {
    if matches!(node.kind(), "type_spec" | "type_alias") {
        out.push(node);
    }
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        collect_type_specs(child, out);
    }
}

fn line_indent(text: &str, offset: usize) -> String {
    let before = text.get(..offset).unwrap_or_default();
    let line_start = before.rfind('\n').map_or(0, |pos| pos + 1);
    text.get(line_start..offset)
        .unwrap_or_default()
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .collect()
}
