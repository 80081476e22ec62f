//! # Struct Tags
//!
//! Helpers for Go struct tag literals: stripping and restoring delimiters,
//! and reading `key:"value"` pairs the way `reflect.StructTag.Get` does.

use crate::model::FieldDef;
use crate::strcase::camel_to_snake;
use regex::Regex;
use std::sync::OnceLock;

/// Strips the delimiters from a raw tag literal.
///
/// Exactly one leading and one trailing delimiter are removed. Backtick
/// literals are taken as is; double-quoted literals have their escapes
/// resolved. Anything that is not wrapped in a matching pair, or is too
/// short to hold content, degrades to an empty tag.
pub fn parse_tag(raw: &str) -> String {
    if raw.len() <= 2 {
        return String::new();
    }
    if let Some(inner) = raw.strip_prefix('`').and_then(|rest| rest.strip_suffix('`')) {
        return inner.to_string();
    }
    if let Some(inner) = raw.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')) {
        return unescape(inner);
    }
    String::new()
}

/// Wraps tag text in the delimiters used when writing it back to source.
///
/// Backticks are used unless the text cannot live in a raw string; then it
/// becomes an escaped double-quoted literal.
pub fn quote_tag(tag: &str) -> String {
    if !tag.contains('`') && !tag.contains('\n') && !tag.contains('\r') {
        return format!("`{}`", tag);
    }

    let mut quoted = String::with_capacity(tag.len() + 2);
    quoted.push('"');
    for c in tag.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

// Resolves the escapes of a Go interpreted string; unknown ones are kept verbatim.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other @ ('"' | '\\')) => out.push(other),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Looks up the value stored under `key` in tag text such as `json:"id" db:"user_id"`.
///
/// Returns `None` when the key is absent. The first occurrence wins.
pub fn lookup(tag: &str, key: &str) -> Option<String> {
    static PAIR_RE: OnceLock<Regex> = OnceLock::new();
    let pair_re = PAIR_RE.get_or_init(|| {
        Regex::new(r#"([^\s:"]+):"((?:[^"\\]|\\.)*)""#).expect("Invalid regex")
    });

    pair_re
        .captures_iter(tag)
        .find(|caps| caps.get(1).is_some_and(|k| k.as_str() == key))
        .and_then(|caps| caps.get(2))
        .map(|v| v.as_str().replace("\\\"", "\""))
}

/// The property name JSON encoding would use for the field.
///
/// `None` means the field is excluded (`json:"-"`).
pub fn json_name(field: &FieldDef) -> Option<String> {
    let tag_name = lookup(&field.tag, "json")
        .map(|value| value.split(',').next().unwrap_or_default().to_string())
        .unwrap_or_default();

    match tag_name.as_str() {
        "-" => None,
        "" => Some(field.name.clone()),
        _ => Some(tag_name),
    }
}

/// Builds a `json:"snake_case"` tag for a Go field name.
pub fn default_json_tag(field_name: &str) -> String {
    format!("json:\"{}\"", camel_to_snake(field_name))
}
