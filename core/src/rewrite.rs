#![deny(missing_docs)]

//! # Declaration Rewriting
//!
//! Applies a merged `StructDef` back onto an owned `StructDecl`. The field
//! list is rebuilt from scratch in the merged order. Where a field of the same
//! name already existed, its doc lines and any tag or comment the merged
//! model leaves empty are carried over to the new node.

use crate::extract::strip_comment_markers;
use crate::model::{comment_literal, FieldDef, StructDef};
use crate::syntax::{FieldNode, StructDecl, TypeExpr};
use crate::tag::{parse_tag, quote_tag};
use std::collections::HashMap;

/// Rewrites `decl` so that its field list matches `merged`.
///
/// Type text is re-parsed into a `TypeExpr`; text that does not parse
/// becomes the placeholder identifier and only affects that field. Fields
/// absent from `merged`, embedded fields included, are removed.
///
/// Anonymous struct and interface field types are printed on one line, so
/// comments inside them are lost when their field is rewritten.
pub fn update_decl(decl: &mut StructDecl, merged: &StructDef) {
    let existing = std::mem::take(&mut decl.fields);

    // Same rule as the merge: the last declaration of a name wins.
    let mut by_name: HashMap<&str, &FieldNode> = HashMap::new();
    for node in &existing {
        for name in &node.names {
            by_name.insert(name.as_str(), node);
        }
    }

    let mut reused = 0usize;
    let fields: Vec<FieldNode> = merged
        .fields
        .iter()
        .map(|field| match by_name.get(field.name.as_str()) {
            Some(node) => {
                reused += 1;
                carry_forward(node, field)
            }
            None => new_node(field),
        })
        .collect();

    tracing::debug!(
        name = %merged.name,
        fields = fields.len(),
        reused,
        "Rewrote struct declaration"
    );

    decl.fields = fields;
}

/// A reused node keeps its raw literals whenever they still say what the
/// merged field says.
fn carry_forward(node: &FieldNode, field: &FieldDef) -> FieldNode {
    let tag = match &node.tag {
        Some(raw) if field.tag.is_empty() || parse_tag(raw) == field.tag => Some(raw.clone()),
        _ if field.tag.is_empty() => None,
        _ => Some(quote_tag(&field.tag)),
    };
    let comment = match &node.comment {
        Some(raw) if field.comment.is_empty() || strip_comment_markers(raw) == field.comment => {
            Some(raw.clone())
        }
        _ if field.comment.is_empty() => None,
        _ => Some(comment_literal(&field.comment)),
    };

    FieldNode {
        names: vec![field.name.clone()],
        ty: TypeExpr::parse_text(&field.ty),
        tag,
        comment,
        docs: node.docs.clone(),
    }
}

fn new_node(field: &FieldDef) -> FieldNode {
    let mut node = FieldNode::new(field.name.clone(), TypeExpr::parse_text(&field.ty));
    if !field.tag.is_empty() {
        node.tag = Some(quote_tag(&field.tag));
    }
    if !field.comment.is_empty() {
        node.comment = Some(comment_literal(&field.comment));
    }
    node
}
