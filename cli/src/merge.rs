#![deny(missing_docs)]

//! # Merge Command
//!
//! Merges a desired model into a struct of a Go file.
//!
//! By default the patched file is printed to stdout. `--write` rewrites the
//! file in place and `--preview` prints only the merged model.

use crate::desired::DesiredArgs;
use crate::error::CliResult;
use gostruct_core::FormatOptions;
use std::fs;
use std::path::PathBuf;

/// Arguments for the merge command.
#[derive(clap::Args, Debug, Clone)]
pub struct MergeArgs {
    /// Go source file holding the struct.
    pub file: PathBuf,

    #[clap(flatten)]
    #[allow(missing_docs)]
    pub desired: DesiredArgs,

    /// Rewrite the file in place.
    #[clap(long, conflicts_with = "preview")]
    pub write: bool,

    /// Print only the merged struct model.
    #[clap(long)]
    pub preview: bool,
}

/// Executes the merge command.
pub fn execute(args: &MergeArgs) -> CliResult<()> {
    if let Some(output) = run(args)? {
        print!("{}", output);
    }
    Ok(())
}

/// Performs the merge. Returns the text to print, or `None` after `--write`.
pub fn run(args: &MergeArgs) -> CliResult<Option<String>> {
    let source = fs::read_to_string(&args.file)?;
    let outcome = args.desired.merge(&source)?;

    if args.preview {
        return Ok(Some(format!(
            "{}\n",
            outcome.merged.format(FormatOptions::default())
        )));
    }

    if args.write {
        if outcome.source == source {
            tracing::info!("{:?} already up to date", args.file);
        } else {
            fs::write(&args.file, &outcome.source)?;
            tracing::info!(
                "Updated struct '{}' in {:?}",
                args.desired.struct_name,
                args.file
            );
        }
        return Ok(None);
    }

    Ok(Some(outcome.source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desired::tests::{args, write_file, USER_GO};
    use pretty_assertions::assert_eq;

    const PLAN: &str = "fields:\n  - name: ID\n    type: int64\n  - name: Email\n    type: string\npreserve: [Age]\n";

    fn merge_args(file: PathBuf, plan: PathBuf) -> MergeArgs {
        MergeArgs {
            file,
            desired: args(plan),
            write: false,
            preview: false,
        }
    }

    #[test]
    fn test_merge_prints_patched_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_file(&dir, "user.go", USER_GO);
        let plan = write_file(&dir, "plan.yaml", PLAN);

        let output = run(&merge_args(file.clone(), plan)).unwrap().unwrap();
        assert_eq!(
            output,
            "package models\n\ntype User struct {\n\tID    int64 `json:\"id\"`\n\tEmail string\n\tAge   int\n}\n"
        );
        assert_eq!(fs::read_to_string(&file).unwrap(), USER_GO);
    }

    #[test]
    fn test_merge_write_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_file(&dir, "user.go", USER_GO);
        let plan = write_file(&dir, "plan.yaml", PLAN);
        let mut merge = merge_args(file.clone(), plan);
        merge.write = true;

        assert_eq!(run(&merge).unwrap(), None);
        let written = fs::read_to_string(&file).unwrap();
        assert!(written.contains("\tEmail string\n"));
        assert!(!written.contains("Name"));

        // A second run finds nothing to change.
        assert_eq!(run(&merge).unwrap(), None);
        assert_eq!(fs::read_to_string(&file).unwrap(), written);
    }

    #[test]
    fn test_merge_preview() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_file(&dir, "user.go", USER_GO);
        let plan = write_file(&dir, "plan.yaml", PLAN);
        let mut merge = merge_args(file, plan);
        merge.preview = true;

        assert_eq!(
            run(&merge).unwrap().unwrap(),
            "type User struct {\n\tID int64 `json:\"id\"`\n\tEmail string\n\tAge int\n}\n"
        );
    }

    #[test]
    fn test_merge_from_go_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_file(&dir, "user.go", USER_GO);
        let desired = write_file(
            &dir,
            "desired.go",
            "package api\n\ntype User struct {\n\tName string `json:\"name\"` // Display name\n}\n",
        );
        let mut merge = merge_args(file, desired);
        merge.desired.preserve = vec!["ID".into()];

        assert_eq!(
            run(&merge).unwrap().unwrap(),
            "package models\n\ntype User struct {\n\tName string `json:\"name\"` // Display name\n\tID   int    `json:\"id\"`\n}\n"
        );
    }
}
