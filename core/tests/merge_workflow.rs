use gostruct_core::{
    extract_struct, merge_struct_in_source, merge_structs, FieldDef, FormatOptions, MergePlan,
    PreservationSet, StructDef,
};
use pretty_assertions::assert_eq;

const MODELS: &str = r#"package models

import "time"

// User is an account holder.
type User struct {
	// Database identifier.
	ID        int       `json:"id"` // Primary key
	Name      string    `json:"name"`
	Age       int       `json:"age,omitempty"`
	CreatedAt time.Time `json:"created_at"`
}

type Order struct {
	Items []string
}
"#;

fn preserve(names: &[&str]) -> PreservationSet {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_extraction_preserves_declaration_order() {
    let user = extract_struct(MODELS, "User").unwrap();
    assert_eq!(
        user.fields,
        vec![
            FieldDef::new("ID", "int")
                .with_tag(r#"json:"id""#)
                .with_comment("Primary key"),
            FieldDef::new("Name", "string").with_tag(r#"json:"name""#),
            FieldDef::new("Age", "int").with_tag(r#"json:"age,omitempty""#),
            FieldDef::new("CreatedAt", "time.Time").with_tag(r#"json:"created_at""#),
        ]
    );
}

#[test]
fn test_plan_driven_merge_rewrites_file() {
    let plan = MergePlan::from_yaml(
        r#"
fields:
  - name: ID
    type: int64
  - name: Name
    type: string
    tag: 'json:"full_name"'
  - name: Email
    type: string
    comment: Contact address
  - name: CreatedAt
    type: time.Time
preserve: [Age]
"#,
    )
    .unwrap();
    let desired = plan.desired("User");

    let outcome =
        merge_struct_in_source(MODELS, "User", &desired, Some(&plan.preservation_set())).unwrap();

    let expected = r#"package models

import "time"

// User is an account holder.
type User struct {
	// Database identifier.
	ID        int64     `json:"id"` // Primary key
	Name      string    `json:"full_name"`
	Email     string    // Contact address
	CreatedAt time.Time `json:"created_at"`
	Age       int       `json:"age,omitempty"`
}

type Order struct {
	Items []string
}
"#;
    assert_eq!(outcome.source, expected);

    let reparsed = extract_struct(&outcome.source, "User").unwrap();
    assert_eq!(reparsed, outcome.merged);
}

#[test]
fn test_preview_matches_serialized_model() {
    let current = extract_struct(MODELS, "Order").unwrap();
    let desired = StructDef::new(
        "Order",
        vec![
            FieldDef::new("Items", "[]string"),
            FieldDef::new("Scores", "map[string][]int").with_comment("per item"),
        ],
    );
    let merged = merge_structs(&current, &desired, None);

    let body = merged.format(FormatOptions {
        no_prefix_type: true,
        no_prefix_name: true,
    });
    assert_eq!(
        body,
        "struct {\n\tItems []string\n\tScores map[string][]int // per item\n}"
    );
}

#[test]
fn test_merge_is_idempotent_against_same_current() {
    let current = extract_struct(MODELS, "User").unwrap();
    let desired = StructDef::new(
        "User",
        vec![FieldDef::new("ID", "int64"), FieldDef::new("Email", "string")],
    );
    let p = preserve(&["Age", "Name"]);

    let once = merge_structs(&current, &desired, Some(&p));
    let twice = merge_structs(&current, &once, Some(&p));
    assert_eq!(twice, once);
    assert_eq!(once.field_names(), vec!["ID", "Email", "Name", "Age"]);
}
