use aem_rename_core::{
    rename_operation, LogLevel, Logger, LoggerConfig, OutputFormat, OutputFormatter,
};
use anyhow::{Context, Result};
use std::path::Path;

/// Exit status for a strict run that had per-file failures.
pub const STRICT_FAILURE_EXIT_CODE: i32 = 3;

#[allow(clippy::too_many_arguments)]
pub fn handle_rename(
    path_name: &Path,
    output_folder: &Path,
    prefix: &str,
    log_file: &str,
    log_level: LogLevel,
    strict: bool,
    output: Option<OutputFormat>,
    use_color: bool,
) -> Result<i32> {
    let config = LoggerConfig {
        min_level: log_level,
        use_color,
        ..LoggerConfig::default()
    }
    .with_log_file_arg(log_file);
    let mut logger = Logger::new(config).context("Failed to set up logging")?;

    let summary = rename_operation(path_name, output_folder, prefix, None, &mut logger)?;

    if let Some(format) = output {
        println!("{}", summary.format(format).trim_end());
    }

    // Per-file failures only change the exit status when asked to.
    if strict && summary.has_failures() {
        return Ok(STRICT_FAILURE_EXIT_CODE);
    }
    Ok(0)
}
