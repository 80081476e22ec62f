#![deny(missing_docs)]

//! # Desired Model Options
//!
//! Options shared by `merge` and `diff`: which struct to update, where the
//! desired model comes from, and which fields survive even when the desired
//! model omits them.

use crate::error::CliResult;
use gostruct_core::{
    extract_struct, fill_missing_json_tags, merge_struct_in_source, merge_structs, parse_struct,
    GoSource, MergeOutcome, MergePlan, PreservationSet, StructDef,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Arguments describing a merge against a desired model.
#[derive(clap::Args, Debug, Clone)]
pub struct DesiredArgs {
    /// Name of the struct to update.
    #[clap(long = "struct")]
    pub struct_name: String,

    /// Desired model: a merge plan (`.yaml`, `.yml`, `.json`) or a Go file (`.go`).
    #[clap(long)]
    pub desired: PathBuf,

    /// Struct to read from a `.go` desired file (defaults to `--struct`).
    #[clap(long)]
    pub desired_struct: Option<String>,

    /// Fields to keep even when the desired model omits them.
    #[clap(long, value_delimiter = ',', env = "GOSTRUCT_PRESERVE")]
    pub preserve: Vec<String>,

    /// Give every merged field without a tag a `json:"snake_case"` tag.
    #[clap(long)]
    pub json_tags: bool,
}

impl DesiredArgs {
    /// Loads the desired model and the preservation set.
    ///
    /// The set is the union of `--preserve` and the plan's `preserve` list.
    pub fn load(&self) -> CliResult<(StructDef, PreservationSet)> {
        let mut preserve: PreservationSet = self
            .preserve
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        let desired = if is_go_file(&self.desired) {
            let code = fs::read_to_string(&self.desired)?;
            let name = self.desired_struct.as_deref().unwrap_or(&self.struct_name);
            extract_struct(&code, name)?
        } else {
            let plan = MergePlan::from_path(&self.desired)?;
            preserve.extend(plan.preservation_set());
            plan.desired(&self.struct_name)
        };

        tracing::debug!(
            "Desired model '{}' has {} fields, {} preserved names",
            desired.name,
            desired.fields.len(),
            preserve.len()
        );
        Ok((desired, preserve))
    }

    /// Runs the merge against `source` without touching the filesystem.
    pub fn merge(&self, source: &str) -> CliResult<MergeOutcome> {
        let (desired, preserve) = self.load()?;

        if !self.json_tags {
            return Ok(merge_struct_in_source(
                source,
                &self.struct_name,
                &desired,
                Some(&preserve),
            )?);
        }

        // The merged model already holds every preserved field, so a second
        // pass with the tagged model reproduces it exactly.
        let site = GoSource::parse(source)?.find_struct(&self.struct_name)?;
        let current = parse_struct(&site.decl, &site.name);
        let mut tagged = merge_structs(&current, &desired, Some(&preserve));
        fill_missing_json_tags(&mut tagged);

        Ok(merge_struct_in_source(
            source,
            &self.struct_name,
            &tagged,
            None,
        )?)
    }
}

fn is_go_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "go")
}
