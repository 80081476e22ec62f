#![deny(missing_docs)]

//! # Diff Command
//!
//! Shows what a merge would change in a struct without writing anything.

use crate::desired::DesiredArgs;
use crate::error::CliResult;
use gostruct_core::calculate_diff;
use std::fs;
use std::path::PathBuf;

/// Arguments for the diff command.
#[derive(clap::Args, Debug, Clone)]
pub struct DiffArgs {
    /// Go source file holding the struct.
    pub file: PathBuf,

    #[clap(flatten)]
    #[allow(missing_docs)]
    pub desired: DesiredArgs,
}

/// Executes the diff command.
pub fn execute(args: &DiffArgs) -> CliResult<()> {
    let lines = run(args)?;
    if lines.is_empty() {
        tracing::info!("No changes for struct '{}'", args.desired.struct_name);
    }
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

/// Computes one line per difference between the current and merged model.
pub fn run(args: &DiffArgs) -> CliResult<Vec<String>> {
    let source = fs::read_to_string(&args.file)?;
    let outcome = args.desired.merge(&source)?;

    Ok(calculate_diff(&outcome.current, &outcome.merged)
        .iter()
        .map(ToString::to_string)
        .collect())
}
