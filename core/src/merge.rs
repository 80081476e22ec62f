#![deny(missing_docs)]

//! # Struct Merge
//!
//! Combines the struct as it currently exists in source with the shape it
//! should have. The desired model dictates which fields exist and in what
//! order; the current model contributes tags and comments the desired model
//! leaves empty, plus any fields the caller asks to preserve.

use crate::model::{FieldDef, StructDef};
use indexmap::IndexMap;
use std::collections::HashSet;

/// Names of fields that must survive a merge even when the desired model omits them.
pub type PreservationSet = HashSet<String>;

/// Merges `current` into `desired`.
///
/// - Output order follows `desired.fields`.
/// - A desired field that also exists in `current` keeps its own name and type;
///   an empty tag or comment is filled from the current field.
/// - Current fields absent from `desired` are dropped unless named in
///   `preserve`; preserved ones are appended unchanged, in the order they are
///   declared in `current`.
///
/// Neither input is modified.
///
/// # Examples
/// ```
/// use gostruct_core::merge::{merge_structs, PreservationSet};
/// use gostruct_core::model::{FieldDef, StructDef};
///
/// let current = StructDef::new("User", vec![
///     FieldDef::new("ID", "int").with_tag(r#"json:"id""#),
///     FieldDef::new("Age", "int"),
/// ]);
/// let desired = StructDef::new("User", vec![FieldDef::new("ID", "int64")]);
/// let preserve: PreservationSet = ["Age".to_string()].into();
///
/// let merged = merge_structs(&current, &desired, Some(&preserve));
/// assert_eq!(merged.fields[0].ty, "int64");
/// assert_eq!(merged.fields[0].tag, r#"json:"id""#);
/// assert_eq!(merged.fields[1].name, "Age");
/// ```
pub fn merge_structs(
    current: &StructDef,
    desired: &StructDef,
    preserve: Option<&PreservationSet>,
) -> StructDef {
    // Duplicate names: the last definition wins, the first position is kept.
    let current_by_name = index_by_name(&current.fields);
    let desired_by_name = index_by_name(&desired.fields);

    let mut fields = Vec::with_capacity(desired_by_name.len());
    for (name, field) in &desired_by_name {
        let merged = match current_by_name.get(name) {
            Some(existing) => merge_field(existing, field),
            None => (*field).clone(),
        };
        fields.push(merged);
    }

    let mut preserved = 0usize;
    if let Some(preserve) = preserve {
        for (name, field) in &current_by_name {
            if preserve.contains(*name) && !desired_by_name.contains_key(name) {
                fields.push((*field).clone());
                preserved += 1;
            }
        }
    }

    let current_only = current_by_name
        .keys()
        .filter(|name| !desired_by_name.contains_key(*name))
        .count();
    tracing::debug!(
        name = %desired.name,
        desired = desired_by_name.len(),
        preserved,
        dropped = current_only - preserved,
        "Merged struct definition"
    );

    StructDef {
        name: desired.name.clone(),
        fields,
    }
}

fn index_by_name(fields: &[FieldDef]) -> IndexMap<&str, &FieldDef> {
    let mut by_name = IndexMap::with_capacity(fields.len());
    for field in fields {
        by_name.insert(field.name.as_str(), field);
    }
    by_name
}

/// Field-level merge: name and type from `desired`, tag and comment from
/// `desired` unless empty there.
fn merge_field(current: &FieldDef, desired: &FieldDef) -> FieldDef {
    let mut merged = desired.clone();
    if merged.tag.is_empty() && !current.tag.is_empty() {
        merged.tag = current.tag.clone();
    }
    if merged.comment.is_empty() && !current.comment.is_empty() {
        merged.comment = current.comment.clone();
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn current() -> StructDef {
        StructDef::new(
            "User",
            vec![
                FieldDef::new("ID", "int").with_tag(r#"json:"id""#),
                FieldDef::new("Name", "string"),
                FieldDef::new("Age", "int"),
            ],
        )
    }

    fn desired() -> StructDef {
        StructDef::new(
            "User",
            vec![
                FieldDef::new("ID", "int64"),
                FieldDef::new("Name", "string"),
                FieldDef::new("Email", "string"),
            ],
        )
    }

    fn preserve(names: &[&str]) -> PreservationSet {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_end_to_end_example() {
        let merged = merge_structs(&current(), &desired(), Some(&preserve(&["Age"])));
        assert_eq!(
            merged,
            StructDef::new(
                "User",
                vec![
                    FieldDef::new("ID", "int64").with_tag(r#"json:"id""#),
                    FieldDef::new("Name", "string"),
                    FieldDef::new("Email", "string"),
                    FieldDef::new("Age", "int"),
                ]
            )
        );
    }

    #[test]
    fn test_type_changes_propagate() {
        let merged = merge_structs(&current(), &desired(), None);
        assert_eq!(merged.field("ID").unwrap().ty, "int64");
    }

    #[test]
    fn test_deletion_without_preserve() {
        let merged = merge_structs(&current(), &desired(), None);
        assert_eq!(merged.field_names(), vec!["ID", "Name", "Email"]);
        assert!(merged.field("Age").is_none());
    }

    #[test]
    fn test_empty_preserve_set_behaves_like_none() {
        let merged = merge_structs(&current(), &desired(), Some(&PreservationSet::new()));
        assert_eq!(merged, merge_structs(&current(), &desired(), None));
    }

    #[test]
    fn test_tag_and_comment_inheritance() {
        let current = StructDef::new(
            "User",
            vec![
                FieldDef::new("ID", "int")
                    .with_tag(r#"json:"id""#)
                    .with_comment("Primary key"),
                FieldDef::new("Name", "string")
                    .with_tag(r#"json:"name""#)
                    .with_comment("User's name"),
                FieldDef::new("Age", "int")
                    .with_tag(r#"json:"age,omitempty""#)
                    .with_comment("User's age"),
            ],
        );
        let desired = StructDef::new(
            "User",
            vec![
                FieldDef::new("ID", "int64"),
                FieldDef::new("Name", "string").with_tag(r#"json:"full_name""#),
                FieldDef::new("Email", "string")
                    .with_tag(r#"json:"email""#)
                    .with_comment("Email address"),
            ],
        );

        let merged = merge_structs(&current, &desired, None);

        assert_eq!(merged.fields.len(), 3);
        assert_eq!(
            merged.field("ID").unwrap(),
            &FieldDef::new("ID", "int64")
                .with_tag(r#"json:"id""#)
                .with_comment("Primary key")
        );
        let name = merged.field("Name").unwrap();
        assert_eq!(name.tag, r#"json:"full_name""#);
        assert_eq!(name.comment, "User's name");
        let email = merged.field("Email").unwrap();
        assert_eq!(email.tag, r#"json:"email""#);
        assert_eq!(email.comment, "Email address");
    }

    #[test]
    fn test_preserved_field_keeps_original_parts() {
        let current = StructDef::new(
            "User",
            vec![FieldDef::new("Age", "uint8")
                .with_tag(r#"json:"age""#)
                .with_comment("years")],
        );
        let desired = StructDef::new("User", vec![FieldDef::new("ID", "int")]);

        let merged = merge_structs(&current, &desired, Some(&preserve(&["Age"])));
        assert_eq!(merged.fields[1], current.fields[0]);
    }

    #[test]
    fn test_preserve_does_not_duplicate_desired_fields() {
        let merged = merge_structs(&current(), &desired(), Some(&preserve(&["ID", "Name"])));
        assert_eq!(merged.field_names(), vec!["ID", "Name", "Email"]);
    }

    #[test]
    fn test_preserved_fields_follow_current_order() {
        let current = StructDef::new(
            "T",
            vec![
                FieldDef::new("C", "int"),
                FieldDef::new("A", "int"),
                FieldDef::new("B", "int"),
            ],
        );
        let desired = StructDef::new("T", vec![FieldDef::new("Z", "int")]);

        let merged = merge_structs(&current, &desired, Some(&preserve(&["A", "B", "C"])));
        assert_eq!(merged.field_names(), vec!["Z", "C", "A", "B"]);
    }

    #[test]
    fn test_field_count_property() {
        let p = preserve(&["Age", "Missing"]);
        let merged = merge_structs(&current(), &desired(), Some(&p));
        let preserved_only = current()
            .fields
            .iter()
            .filter(|f| p.contains(&f.name) && desired().field(&f.name).is_none())
            .count();
        assert_eq!(merged.fields.len(), desired().fields.len() + preserved_only);
    }

    #[test]
    fn test_idempotent_when_reapplied() {
        let p = preserve(&["Age"]);
        let once = merge_structs(&current(), &desired(), Some(&p));
        let twice = merge_structs(&current(), &once, Some(&p));
        assert_eq!(twice, once);
    }

    #[test]
    fn test_inputs_are_untouched() {
        let (c, d) = (current(), desired());
        let _ = merge_structs(&c, &d, Some(&preserve(&["Age"])));
        assert_eq!(c, current());
        assert_eq!(d, desired());
    }

    #[test]
    fn test_result_name_comes_from_desired() {
        let desired = StructDef::new("Account", Vec::new());
        assert_eq!(merge_structs(&current(), &desired, None).name, "Account");
    }

    #[test]
    fn test_duplicate_current_names_last_wins() {
        let current = StructDef::new(
            "T",
            vec![
                FieldDef::new("A", "int").with_tag("first"),
                FieldDef::new("A", "int").with_tag("second"),
            ],
        );
        let desired = StructDef::new("T", vec![FieldDef::new("A", "int")]);
        assert_eq!(merge_structs(&current, &desired, None).fields[0].tag, "second");
    }

    #[test]
    fn test_duplicate_desired_names_last_wins() {
        let desired = StructDef::new(
            "User",
            vec![
                FieldDef::new("Name", "int"),
                FieldDef::new("ID", "int64"),
                FieldDef::new("Name", "string").with_comment("display"),
            ],
        );

        let merged = merge_structs(&current(), &desired, None);
        assert_eq!(merged.field_names(), vec!["Name", "ID"]);
        assert_eq!(
            merged.fields[0],
            FieldDef::new("Name", "string").with_comment("display")
        );
    }
}
