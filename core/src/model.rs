#![deny(missing_docs)]

//! # Data Models
//!
//! The normalized, language-agnostic view of a Go struct: an ordered list of
//! fields, each reduced to name, type text, tag text and comment text.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A struct field in a simplified form.
///
/// All four parts are plain text. An empty `tag` or `comment` means "none".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Field type as written in Go syntax (e.g. `map[string][]int`).
    #[serde(rename = "type")]
    pub ty: String,
    /// Tag text without the surrounding backticks.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tag: String,
    /// Trailing comment text without the comment markers.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

impl FieldDef {
    /// Creates a field with no tag and no comment.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            tag: String::new(),
            comment: String::new(),
        }
    }

    /// Sets the tag text.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Sets the comment text.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

/// A struct definition in a simplified form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructDef {
    /// The declared identifier. Empty for anonymous struct literals.
    pub name: String,
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

/// Switches for the struct header emitted by [`StructDef::format`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Omit the leading `type ` keyword.
    pub no_prefix_type: bool,
    /// Omit the struct name.
    pub no_prefix_name: bool,
}

impl StructDef {
    /// Creates a struct definition from a name and its fields.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Returns the first field with the given name.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns the field names in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Renders the definition as Go source text.
    ///
    /// ```
    /// use gostruct_core::model::{FieldDef, FormatOptions, StructDef};
    ///
    /// let def = StructDef::new(
    ///     "User",
    ///     vec![FieldDef::new("ID", "int").with_tag(r#"json:"id""#).with_comment("Primary key")],
    /// );
    /// assert_eq!(
    ///     def.format(FormatOptions::default()),
    ///     "type User struct {\n\tID int `json:\"id\"` // Primary key\n}"
    /// );
    /// ```
    pub fn format(&self, opts: FormatOptions) -> String {
        let mut code = String::new();

        if !opts.no_prefix_type {
            code.push_str("type ");
        }
        if !opts.no_prefix_name {
            code.push_str(&format!("{} ", self.name));
        }
        code.push_str("struct {\n");

        for field in &self.fields {
            code.push_str(&format!("\t{} {}", field.name, field.ty));
            if !field.tag.is_empty() {
                code.push_str(&format!(" `{}`", field.tag));
            }
            if !field.comment.is_empty() {
                code.push(' ');
                code.push_str(&comment_literal(&field.comment));
            }
            code.push('\n');
        }

        code.push('}');
        code
    }
}

/// Writes comment text as a Go comment; text spanning lines needs `/* */`.
pub(crate) fn comment_literal(text: &str) -> String {
    if text.contains('\n') {
        format!("/* {} */", text)
    } else {
        format!("// {}", text)
    }
}

impl Display for StructDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format(FormatOptions::default()))
    }
}
