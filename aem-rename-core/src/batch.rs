use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

use crate::config::RenameOptions;
use crate::copy::{is_same_file, CopyError, FileCopier};
use crate::logger::Logger;
use crate::naming::normalize;
use crate::output::{format_duration, RenameRecord, RenameResult, RunSummary};

/// Resolve the input path to the files to process.
///
/// A file yields itself. A folder yields its direct children that are files
/// (symlinks to files included), sorted by file name. Subfolders are ignored.
pub fn collect_inputs(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    if !input.is_dir() {
        bail!(
            "Input path is neither a file nor a folder: {}",
            input.display()
        );
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(input)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry =
            entry.with_context(|| format!("Failed to list folder: {}", input.display()))?;
        if entry.path().is_file() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// `output_folder / (prefix + normalize(name))`
pub fn destination_for(file_name: &str, output_folder: &Path, prefix: &str) -> PathBuf {
    output_folder.join(format!("{}{}", prefix, normalize(file_name)))
}

/// Copies each input file to its normalized name, one at a time.
///
/// Per-file problems are recorded and logged; they never stop the batch.
pub struct BatchRenamer<'a, C: FileCopier> {
    copier: C,
    logger: &'a mut Logger,
}

impl<'a, C: FileCopier> BatchRenamer<'a, C> {
    pub fn new(copier: C, logger: &'a mut Logger) -> Self {
        Self { copier, logger }
    }

    /// Process `options.input` into `options.output_folder`.
    ///
    /// Errors only when the output folder cannot be created or the input
    /// cannot be listed.
    pub fn run(&mut self, options: &RenameOptions) -> Result<RunSummary> {
        let start = Instant::now();

        self.logger.info(format!(
            "Processing '{}', output folder '{}', prefix '{}'",
            options.input.display(),
            options.output_folder.display(),
            options.prefix
        ));

        fs::create_dir_all(&options.output_folder).with_context(|| {
            format!(
                "Failed to create output folder: {}",
                options.output_folder.display()
            )
        })?;

        let inputs = collect_inputs(&options.input)?;
        self.logger
            .debug(format!("Found {} file(s) to process", inputs.len()));

        let mut records = Vec::with_capacity(inputs.len());
        for source in &inputs {
            records.push(self.rename_file(source, &options.output_folder, &options.prefix));
        }

        let duration = start.elapsed();
        self.logger
            .info(format!("Duration: {}", format_duration(duration)));

        Ok(RunSummary {
            input: options.input.clone(),
            output_folder: options.output_folder.clone(),
            prefix: options.prefix.clone(),
            records,
            duration,
        })
    }

    /// Copy one file to its normalized destination unless that already exists.
    pub fn rename_file(&mut self, source: &Path, output_folder: &Path, prefix: &str) -> RenameRecord {
        let original_name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let destination = destination_for(&original_name, output_folder, prefix);

        let result = if destination.is_file() {
            if is_same_file(source, &destination) {
                self.report_same_file(&original_name)
            } else {
                self.logger.warning(format!(
                    "Skipping file '{}'. Destination file already exists: '{}'.",
                    original_name,
                    destination.display()
                ));
                RenameResult::SkippedExists
            }
        } else {
            match self.copier.copy(source, &destination) {
                Ok(reported) if reported == destination => {
                    self.logger.info(format!(
                        "Renamed '{}' to '{}'",
                        original_name,
                        reported.display()
                    ));
                    RenameResult::Renamed
                },
                Ok(reported) => {
                    self.logger.error(format!(
                        "Renamed '{}' to '{}' but the expected destination is different: '{}'",
                        source.display(),
                        reported.display(),
                        destination.display()
                    ));
                    RenameResult::DestinationMismatch { reported }
                },
                Err(CopyError::SameFile { .. }) => self.report_same_file(&original_name),
                Err(CopyError::Io { source: err, .. }) => {
                    self.logger.error(format!(
                        "Error trying to write file: '{}'. Check folder permissions. ({})",
                        destination.display(),
                        err
                    ));
                    RenameResult::FailedOsError {
                        error: err.to_string(),
                    }
                },
            }
        };

        RenameRecord {
            original_name,
            source: source.to_path_buf(),
            destination,
            result,
        }
    }

    fn report_same_file(&mut self, original_name: &str) -> RenameResult {
        self.logger.error(format!(
            "Trying to move a file to itself: '{}'",
            original_name
        ));
        RenameResult::FailedSameFile
    }
}
