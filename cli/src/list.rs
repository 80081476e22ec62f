#![deny(missing_docs)]

//! # List Command
//!
//! Lists the structs declared in a Go file or in every `.go` file under a
//! directory.

use crate::error::{CliError, CliResult};
use gostruct_core::extract_struct_names;
use std::fs;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Arguments for the list command.
#[derive(clap::Args, Debug, Clone)]
pub struct ListArgs {
    /// A Go file or a directory to walk.
    pub path: PathBuf,
}

/// Executes the list command.
pub fn execute(args: &ListArgs) -> CliResult<()> {
    for line in collect(args)? {
        println!("{}", line);
    }
    Ok(())
}

/// Collects one `<file>: <Struct>` line per struct, files in name order.
pub fn collect(args: &ListArgs) -> CliResult<Vec<String>> {
    if !args.path.exists() {
        return Err(CliError::General(format!(
            "Path not found: {:?}",
            args.path
        )));
    }

    let mut lines = Vec::new();
    let walker = WalkDir::new(&args.path).sort_by_file_name().into_iter();

    for entry in walker.filter_map(|e| e.ok()) {
        let path = entry.path();
        if !entry.file_type().is_file() || !path.extension().is_some_and(|ext| ext == "go") {
            continue;
        }

        let code = fs::read_to_string(path)?;
        let names = extract_struct_names(&code)?;
        tracing::debug!("{}: {} structs", path.display(), names.len());

        for name in names {
            lines.push(format!("{}: {}", path.display(), name));
        }
    }

    Ok(lines)
}
