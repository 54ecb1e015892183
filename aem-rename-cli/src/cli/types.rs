use aem_rename_core::OutputFormat;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormatArg {
    /// Counts plus any failed files
    Summary,
    /// One row per file
    Table,
    /// A single JSON object
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Summary => Self::Summary,
            OutputFormatArg::Table => Self::Table,
            OutputFormatArg::Json => Self::Json,
        }
    }
}
