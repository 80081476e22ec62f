#![deny(missing_docs)]

//! # Extraction Logic
//!
//! Converts parsed Go struct declarations into `StructDef` models.

use crate::error::AppResult;
use crate::model::{FieldDef, StructDef};
use crate::syntax::{GoSource, StructDecl};
use crate::tag::parse_tag;

/// Extracts a `StructDef` from a struct declaration.
///
/// Embedded fields are skipped. A declaration naming several fields
/// (`X, Y int`) yields one entry per name, all sharing the type, tag and
/// comment. Malformed tags degrade to empty.
pub fn parse_struct(decl: &StructDecl, name: &str) -> StructDef {
    let mut fields = Vec::with_capacity(decl.fields.len());

    for node in &decl.fields {
        let ty = node.ty.to_string();
        let tag = node.tag.as_deref().map(parse_tag).unwrap_or_default();
        let comment = node
            .comment
            .as_deref()
            .map(strip_comment_markers)
            .unwrap_or_default();

        for field_name in &node.names {
            fields.push(FieldDef {
                name: field_name.clone(),
                ty: ty.clone(),
                tag: tag.clone(),
                comment: comment.clone(),
            });
        }
    }

    StructDef {
        name: name.to_string(),
        fields,
    }
}

/// Parses Go source and extracts the struct with the given name.
///
/// # Examples
/// ```
/// use gostruct_core::extract::extract_struct;
///
/// let code = "package models\n\ntype User struct {\n\tID int `json:\"id\"` // Primary key\n}\n";
/// let user = extract_struct(code, "User").unwrap();
/// assert_eq!(user.fields[0].tag, r#"json:"id""#);
/// assert_eq!(user.fields[0].comment, "Primary key");
/// ```
pub fn extract_struct(code: &str, struct_name: &str) -> AppResult<StructDef> {
    let source = GoSource::parse(code)?;
    let site = source.find_struct(struct_name)?;
    Ok(parse_struct(&site.decl, &site.name))
}

/// Extracts every struct declared in the source, in source order.
pub fn extract_structs(code: &str) -> AppResult<Vec<StructDef>> {
    let source = GoSource::parse(code)?;
    Ok(source
        .structs()
        .iter()
        .map(|site| parse_struct(&site.decl, &site.name))
        .collect())
}

/// Extracts the names of all structs defined in the source.
pub fn extract_struct_names(code: &str) -> AppResult<Vec<String>> {
    Ok(GoSource::parse(code)?.struct_names())
}

/// Removes `//` or `/* */` markers and surrounding whitespace.
pub(crate) fn strip_comment_markers(raw: &str) -> String {
    let text = raw.strip_prefix("//").unwrap_or(raw);
    let text = text.strip_prefix("/*").unwrap_or(text);
    let text = text.strip_suffix("*/").unwrap_or(text);
    text.trim().to_string()
}
