#![deny(missing_docs)]

//! # Merge Plans
//!
//! A merge plan is the desired shape of one struct plus the fields to keep
//! when the shape omits them, stored as YAML or JSON:
//!
//! ```yaml
//! name: User
//! fields:
//!   - name: ID
//!     type: int64
//!   - name: Email
//!     type: string
//!     tag: 'json:"email"'
//!     comment: Email address
//! preserve: [Age]
//! ```

use crate::error::{AppError, AppResult};
use crate::merge::PreservationSet;
use crate::model::{FieldDef, StructDef};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The desired model of a struct, as read from a plan file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergePlan {
    /// Struct name. Empty means "use the name of the struct being updated".
    #[serde(default)]
    pub name: String,
    /// Desired fields in output order.
    #[serde(default)]
    pub fields: Vec<FieldDef>,
    /// Field names to keep even though `fields` omits them.
    #[serde(default)]
    pub preserve: Vec<String>,
}

impl MergePlan {
    /// Reads a plan, choosing the format from the file extension
    /// (`.json`, otherwise YAML).
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Parses a YAML plan.
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let plan: Self = serde_yaml::from_str(content)?;
        plan.validate()
    }

    /// Parses a JSON plan.
    pub fn from_json(content: &str) -> AppResult<Self> {
        let plan: Self = serde_json::from_str(content)?;
        plan.validate()
    }

    /// The desired struct model; `fallback_name` fills an empty name.
    pub fn desired(&self, fallback_name: &str) -> StructDef {
        let name = if self.name.is_empty() {
            fallback_name
        } else {
            &self.name
        };
        StructDef::new(name, self.fields.clone())
    }

    /// The preservation set declared by the plan.
    pub fn preservation_set(&self) -> PreservationSet {
        self.preserve.iter().cloned().collect()
    }

    fn validate(self) -> AppResult<Self> {
        if let Some(pos) = self.fields.iter().position(|f| f.name.trim().is_empty()) {
            return Err(AppError::General(format!(
                "Merge plan field #{} has an empty name",
                pos + 1
            )));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const YAML: &str = r#"
name: User
fields:
  - name: ID
    type: int64
  - name: Email
    type: string
    tag: 'json:"email"'
    comment: Email address
preserve: [Age]
"#;

    #[test]
    fn test_yaml_plan() {
        let plan = MergePlan::from_yaml(YAML).unwrap();
        let desired = plan.desired("Ignored");
        assert_eq!(desired.name, "User");
        assert_eq!(desired.fields[0], FieldDef::new("ID", "int64"));
        assert_eq!(desired.fields[1].tag, r#"json:"email""#);
        assert!(plan.preservation_set().contains("Age"));
    }

    #[test]
    fn test_json_plan_from_path() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"fields": [{{"name": "ID", "type": "int"}}]}}"#
        )
        .unwrap();

        let plan = MergePlan::from_path(file.path()).unwrap();
        assert_eq!(plan.desired("Account").name, "Account");
        assert!(plan.preserve.is_empty());
    }

    #[test]
    fn test_empty_field_name_rejected() {
        let err = MergePlan::from_yaml("fields:\n  - name: ''\n    type: int\n").unwrap_err();
        assert!(matches!(err, AppError::General(_)));
    }

    #[test]
    fn test_missing_type_is_yaml_error() {
        let err = MergePlan::from_yaml("fields:\n  - name: ID\n").unwrap_err();
        assert!(matches!(err, AppError::Yaml(_)));
    }
}
