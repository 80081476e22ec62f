#![deny(missing_docs)]

//! # Gostruct CLI
//!
//! Command Line Interface for inspecting and merging Go struct declarations.
//!
//! Supported Commands:
//! - `show`: Prints the normalized model of structs in a Go file.
//! - `list`: Lists the structs of a file or directory tree.
//! - `merge`: Merges a desired model into a struct and rewrites it.
//! - `diff`: Shows what `merge` would change.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::error::{CliError, CliResult};

mod desired;
mod diff;
mod error;
mod list;
mod merge;
mod show;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Go struct merge tool")]
struct Cli {
    /// Log debug diagnostics to stderr.
    #[clap(long, short, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the model of one or all structs in a Go file.
    Show(show::ShowArgs),
    /// List the structs declared in Go files.
    List(list::ListArgs),
    /// Merge a desired model into a struct.
    Merge(merge::MergeArgs),
    /// Show the differences a merge would introduce.
    Diff(diff::DiffArgs),
}

fn init_logging(verbose: bool) -> CliResult<()> {
    let directive = if verbose { "gostruct=debug" } else { "gostruct=info" };
    let directive = directive
        .parse()
        .map_err(|e| CliError::General(format!("Invalid log directive: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match &cli.command {
        Commands::Show(args) => show::execute(args)?,
        Commands::List(args) => list::execute(args)?,
        Commands::Merge(args) => merge::execute(args)?,
        Commands::Diff(args) => diff::execute(args)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_merge_flags() {
        let cli = Cli::try_parse_from([
            "gostruct",
            "merge",
            "user.go",
            "--struct",
            "User",
            "--desired",
            "plan.yaml",
            "--preserve",
            "Age,Name",
            "--write",
        ])
        .unwrap();

        match cli.command {
            Commands::Merge(args) => {
                assert_eq!(args.desired.struct_name, "User");
                assert_eq!(args.desired.preserve, vec!["Age", "Name"]);
                assert!(args.write);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_write_conflicts_with_preview() {
        let res = Cli::try_parse_from([
            "gostruct",
            "merge",
            "user.go",
            "--struct",
            "User",
            "--desired",
            "plan.yaml",
            "--write",
            "--preview",
        ]);
        assert!(res.is_err());
    }
}
