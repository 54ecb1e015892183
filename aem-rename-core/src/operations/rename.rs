use crate::config::{resolve_output_folder, RenameOptions};
use crate::copy::FsCopier;
use crate::logger::Logger;
use crate::output::RunSummary;
use crate::BatchRenamer;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Rename operation - copies `input` (a file, or every file in a folder) into
/// `output_folder` under normalized names and returns what happened to each.
///
/// A relative `output_folder` is resolved against `working_dir`, or the
/// process working directory when that is `None`.
pub fn rename_operation(
    input: &Path,
    output_folder: &Path,
    prefix: &str,
    working_dir: Option<&Path>,
    logger: &mut Logger,
) -> Result<RunSummary> {
    let base: PathBuf = match working_dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    let options = RenameOptions::new(input, resolve_output_folder(&base, output_folder))
        .with_prefix(prefix);

    BatchRenamer::new(FsCopier::new(), logger).run(&options)
}
