//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Malformed JSON merge plan.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// Malformed YAML merge plan.
    #[display("YAML Error: {_0}")]
    Yaml(serde_yaml::Error),

    /// A struct searched for by name does not exist in the source.
    /// Created explicitly so that `From<String>` keeps mapping to `General`.
    #[from(ignore)]
    #[display("Struct '{_0}' not found")]
    StructNotFound(String),

    /// The Go parser could not produce a syntax tree at all.
    #[from(ignore)]
    #[display("Parse Error: {_0}")]
    Parse(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
