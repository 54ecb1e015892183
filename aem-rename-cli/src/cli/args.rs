use aem_rename_core::{LogLevel, DEFAULT_LOG_FILE, DEFAULT_OUTPUT_FOLDER, DEFAULT_PREFIX};
use clap::Parser;
use std::path::PathBuf;

use super::types::OutputFormatArg;

/// Takes a file or a folder as input and renames the input file or the files
/// in the input folder based on the AEM Assets convention.
#[derive(Parser, Debug)]
#[command(name = "aem-rename")]
#[command(author, version, about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Name of the file or folder to be processed
    pub path_name: PathBuf,

    /// Prefix string to prepend to the files
    #[arg(short = 'p', long, default_value = DEFAULT_PREFIX, env = "AEM_RENAME_PREFIX")]
    pub prefix: String,

    /// Output folder for the renamed files
    #[arg(
        short = 'o',
        long,
        default_value = DEFAULT_OUTPUT_FOLDER,
        env = "AEM_RENAME_OUTPUT"
    )]
    pub output_folder: PathBuf,

    /// Name of the log file (empty disables file logging)
    #[arg(short = 'l', long, default_value = DEFAULT_LOG_FILE, env = "AEM_RENAME_LOG_FILE")]
    pub log_file: String,

    /// Lowest level written to the console and log file (debug, info, warning, error)
    #[arg(long, default_value = "info", env = "AEM_RENAME_LOG_LEVEL")]
    pub log_level: LogLevel,

    /// Exit with status 3 when any file failed to copy
    #[arg(long)]
    pub strict: bool,

    /// Print a report of the run to stdout
    #[arg(long, value_enum)]
    pub output: Option<OutputFormatArg>,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    pub no_color: bool,

    /// Show version
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,
}
