#![deny(missing_docs)]

//! # Diff Calculation
//!
//! Compares the struct as it exists in source against the merged result and
//! lists what a rewrite would change.

use crate::model::{FieldDef, StructDef};
use std::collections::HashMap;
use std::fmt::Display;

/// Represents a specific difference between Source and Target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diff {
    /// The field exists in Target but is missing in Source.
    Added {
        /// Name of the new field.
        name: String,
        /// Its Go type.
        ty: String,
    },

    /// The field exists in both but the types differ.
    TypeChanged {
        /// Name of the field.
        field: String,
        /// Type found in Source.
        found: String,
        /// Type expected by Target.
        expected: String,
    },

    /// The field exists in both but the tags differ.
    TagChanged {
        /// Name of the field.
        field: String,
        /// Tag found in Source.
        found: String,
        /// Tag expected by Target.
        expected: String,
    },

    /// The field exists in both but the comments differ.
    CommentChanged {
        /// Name of the field.
        field: String,
        /// Comment found in Source.
        found: String,
        /// Comment expected by Target.
        expected: String,
    },

    /// The field exists in Source but not in Target.
    Removed {
        /// Name of the dropped field.
        name: String,
    },
}

impl Display for Diff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diff::Added { name, ty } => write!(f, "+ {} {}", name, ty),
            Diff::TypeChanged {
                field,
                found,
                expected,
            } => write!(f, "~ {}: type '{}' -> '{}'", field, found, expected),
            Diff::TagChanged {
                field,
                found,
                expected,
            } => write!(f, "~ {}: tag `{}` -> `{}`", field, found, expected),
            Diff::CommentChanged {
                field,
                found,
                expected,
            } => write!(f, "~ {}: comment '{}' -> '{}'", field, found, expected),
            Diff::Removed { name } => write!(f, "- {}", name),
        }
    }
}

/// Calculates the differences between the current and the target definition.
///
/// Entries follow the target's field order; removals come last, in the
/// order they appear in `current`. Types compare by exact text.
pub fn calculate_diff(current: &StructDef, target: &StructDef) -> Vec<Diff> {
    let source_by_name: HashMap<&str, &FieldDef> =
        current.fields.iter().map(|f| (f.name.as_str(), f)).collect();
    let target_by_name: HashMap<&str, &FieldDef> =
        target.fields.iter().map(|f| (f.name.as_str(), f)).collect();

    let mut diffs = Vec::new();

    for target_field in &target.fields {
        let Some(source_field) = source_by_name.get(target_field.name.as_str()) else {
            diffs.push(Diff::Added {
                name: target_field.name.clone(),
                ty: target_field.ty.clone(),
            });
            continue;
        };

        if source_field.ty != target_field.ty {
            diffs.push(Diff::TypeChanged {
                field: target_field.name.clone(),
                found: source_field.ty.clone(),
                expected: target_field.ty.clone(),
            });
        }
        if source_field.tag != target_field.tag {
            diffs.push(Diff::TagChanged {
                field: target_field.name.clone(),
                found: source_field.tag.clone(),
                expected: target_field.tag.clone(),
            });
        }
        if source_field.comment != target_field.comment {
            diffs.push(Diff::CommentChanged {
                field: target_field.name.clone(),
                found: source_field.comment.clone(),
                expected: target_field.comment.clone(),
            });
        }
    }

    for source_field in &current.fields {
        if !target_by_name.contains_key(source_field.name.as_str()) {
            diffs.push(Diff::Removed {
                name: source_field.name.clone(),
            });
        }
    }

    diffs
}
