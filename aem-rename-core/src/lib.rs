#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod batch;
pub mod config;
pub mod copy;
pub mod logger;
pub mod naming;
pub mod operations;
pub mod output;

pub use batch::{collect_inputs, destination_for, BatchRenamer};
pub use config::{
    resolve_output_folder, RenameOptions, DEFAULT_LOG_FILE, DEFAULT_OUTPUT_FOLDER, DEFAULT_PREFIX,
};
pub use copy::{is_same_file, CopyError, FileCopier, FsCopier};
pub use logger::{LogEntry, LogLevel, Logger, LoggerConfig};
pub use naming::{normalize, proper_name};
pub use operations::rename_operation;
pub use output::{
    format_duration, OutputFormat, OutputFormatter, RenameRecord, RenameResult, RunCounts,
    RunSummary,
};
