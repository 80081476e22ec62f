#![deny(missing_docs)]

//! # Show Command
//!
//! Prints the normalized model of one or all structs in a Go file.

use crate::error::CliResult;
use gostruct_core::{extract_struct, extract_structs, AppError, FormatOptions, StructDef};
use std::fs;
use std::path::PathBuf;

/// Arguments for the show command.
#[derive(clap::Args, Debug, Clone)]
pub struct ShowArgs {
    /// Go source file.
    pub file: PathBuf,

    /// Only show this struct.
    #[clap(long = "struct")]
    pub struct_name: Option<String>,

    /// Print the model as JSON.
    #[clap(long)]
    pub json: bool,

    /// Omit the leading `type` keyword.
    #[clap(long)]
    pub no_type: bool,

    /// Omit the struct name.
    #[clap(long)]
    pub no_name: bool,
}

/// Executes the show command.
pub fn execute(args: &ShowArgs) -> CliResult<()> {
    println!("{}", render(args)?);
    Ok(())
}

/// Renders the requested structs.
pub fn render(args: &ShowArgs) -> CliResult<String> {
    let code = fs::read_to_string(&args.file)?;
    let defs = match &args.struct_name {
        Some(name) => vec![extract_struct(&code, name)?],
        None => extract_structs(&code)?,
    };

    if args.json {
        return to_json(&defs, args.struct_name.is_some());
    }

    let opts = FormatOptions {
        no_prefix_type: args.no_type,
        no_prefix_name: args.no_name,
    };
    Ok(defs
        .iter()
        .map(|def| def.format(opts))
        .collect::<Vec<_>>()
        .join("\n\n"))
}

fn to_json(defs: &[StructDef], single: bool) -> CliResult<String> {
    let text = match defs {
        [def] if single => serde_json::to_string_pretty(def),
        _ => serde_json::to_string_pretty(defs),
    };
    Ok(text.map_err(AppError::from)?)
}
