#![deny(missing_docs)]

//! # Gostruct Core
//!
//! Extracts Go struct declarations into a normalized field-list model, merges
//! a current model with a desired one, and writes the result back into Go
//! source.

/// Shared error types.
pub mod error;

/// Normalized struct and field models.
pub mod model;

/// Go parsing on top of tree-sitter.
pub mod syntax;

/// Struct tag helpers.
pub mod tag;

/// String case conversion.
pub mod strcase;

/// Declaration -> model extraction.
pub mod extract;

/// Model merge.
pub mod merge;

/// Model -> declaration rewriting.
pub mod rewrite;

/// Diff calculation.
pub mod diff;

/// Source-level workflows.
pub mod patcher;

/// Merge plan files.
pub mod config;

pub use config::MergePlan;
pub use diff::{calculate_diff, Diff};
pub use error::{AppError, AppResult};
pub use extract::{extract_struct, extract_struct_names, extract_structs, parse_struct};
pub use merge::{merge_structs, PreservationSet};
pub use model::{FieldDef, FormatOptions, StructDef};
pub use patcher::{
    fill_missing_json_tags, merge_struct_in_source, update_struct_fields, MergeOutcome,
};
pub use rewrite::update_decl;
pub use syntax::{GoSource, StructSite};
