#![deny(missing_docs)]

//! # Code Patching
//!
//! Workflows that tie extraction, merge and rewriting together, either on an
//! already parsed declaration or directly on Go source text.

use crate::error::AppResult;
use crate::extract::parse_struct;
use crate::merge::{merge_structs, PreservationSet};
use crate::model::{FieldDef, StructDef};
use crate::rewrite::update_decl;
use crate::syntax::{GoSource, StructDecl};
use crate::tag::default_json_tag;

/// Result of merging a struct inside a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    /// The struct as it was in the source.
    pub current: StructDef,
    /// The merged definition.
    pub merged: StructDef,
    /// The source text with the struct rewritten.
    pub source: String,
}

/// Merges the fields of `decl` with the desired `fields`.
///
/// Returns the merged definition; `decl` is left untouched.
pub fn update_struct_fields(
    decl: &StructDecl,
    name: &str,
    fields: Vec<FieldDef>,
    preserve: Option<&PreservationSet>,
) -> StructDef {
    let current = parse_struct(decl, name);
    let desired = StructDef::new(name, fields);
    merge_structs(&current, &desired, preserve)
}

/// Merges `desired` into the struct named `struct_name` and rewrites it in the source.
///
/// Text outside the struct's `struct { ... }` span is left byte-for-byte
/// intact. When `desired` has a different name, only the field list changes;
/// the declared name in the source stays as it is.
///
/// # Examples
/// ```
/// use gostruct_core::model::{FieldDef, StructDef};
/// use gostruct_core::patcher::merge_struct_in_source;
///
/// let code = "package models\n\ntype User struct {\n\tID int `json:\"id\"`\n\tAge int\n}\n";
/// let desired = StructDef::new("User", vec![FieldDef::new("ID", "int64")]);
///
/// let outcome = merge_struct_in_source(code, "User", &desired, None).unwrap();
/// assert_eq!(
///     outcome.source,
///     "package models\n\ntype User struct {\n\tID int64 `json:\"id\"`\n}\n"
/// );
/// ```
pub fn merge_struct_in_source(
    source: &str,
    struct_name: &str,
    desired: &StructDef,
    preserve: Option<&PreservationSet>,
) -> AppResult<MergeOutcome> {
    let parsed = GoSource::parse(source)?;
    let site = parsed.find_struct(struct_name)?;

    let current = parse_struct(&site.decl, &site.name);
    let merged = merge_structs(&current, desired, preserve);

    let mut decl = site.decl.clone();
    update_decl(&mut decl, &merged);
    let source = site.splice(source, &decl);

    Ok(MergeOutcome {
        current,
        merged,
        source,
    })
}

/// Gives every field without a tag a `json:"snake_case"` tag.
pub fn fill_missing_json_tags(def: &mut StructDef) {
    for field in def.fields.iter_mut().filter(|f| f.tag.is_empty()) {
        field.tag = default_json_tag(&field.name);
    }
}
