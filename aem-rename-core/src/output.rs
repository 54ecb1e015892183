use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;
use std::time::Duration;

/// Output format for the end-of-run report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Table,
    Json,
}

/// Outcome for a single input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum RenameResult {
    Renamed,
    SkippedExists,
    FailedSameFile,
    FailedOsError { error: String },
    /// The copy succeeded but wrote somewhere other than where it was asked to.
    DestinationMismatch { reported: PathBuf },
}

impl RenameResult {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::FailedSameFile | Self::FailedOsError { .. } | Self::DestinationMismatch { .. }
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Renamed => "renamed",
            Self::SkippedExists => "skipped (exists)",
            Self::FailedSameFile => "failed (same file)",
            Self::FailedOsError { .. } => "failed (os error)",
            Self::DestinationMismatch { .. } => "failed (destination mismatch)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameRecord {
    pub original_name: String,
    pub source: PathBuf,
    pub destination: PathBuf,
    #[serde(flatten)]
    pub result: RenameResult,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunCounts {
    pub renamed: usize,
    pub skipped_exists: usize,
    pub failed_same_file: usize,
    pub failed_os_error: usize,
    pub destination_mismatch: usize,
}

impl RunCounts {
    pub fn failures(&self) -> usize {
        self.failed_same_file + self.failed_os_error + self.destination_mismatch
    }

    pub fn total(&self) -> usize {
        self.renamed + self.skipped_exists + self.failures()
    }
}

/// Everything a batch produced, in processing order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output_folder: PathBuf,
    pub prefix: String,
    pub records: Vec<RenameRecord>,
    #[serde(skip)]
    pub duration: Duration,
}

impl RunSummary {
    pub fn counts(&self) -> RunCounts {
        let mut counts = RunCounts::default();
        for record in &self.records {
            match record.result {
                RenameResult::Renamed => counts.renamed += 1,
                RenameResult::SkippedExists => counts.skipped_exists += 1,
                RenameResult::FailedSameFile => counts.failed_same_file += 1,
                RenameResult::FailedOsError { .. } => counts.failed_os_error += 1,
                RenameResult::DestinationMismatch { .. } => counts.destination_mismatch += 1,
            }
        }
        counts
    }

    pub fn has_failures(&self) -> bool {
        self.records.iter().any(|r| r.result.is_failure())
    }

    /// Pairs of original file name and outcome.
    pub fn results(&self) -> Vec<(&str, &RenameResult)> {
        self.records
            .iter()
            .map(|r| (r.original_name.as_str(), &r.result))
            .collect()
    }
}

/// Render a duration the way the run log prints it: `H:MM:SS.ffffff`.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!(
        "{}:{:02}:{:02}.{:06}",
        hours,
        minutes,
        seconds,
        duration.subsec_micros()
    )
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String;
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
    fn format_table(&self) -> String;
}

impl OutputFormatter for RunSummary {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
            OutputFormat::Table => self.format_table(),
        }
    }

    fn format_json(&self) -> String {
        let counts = self.counts();
        serde_json::to_string(&json!({
            "success": !self.has_failures(),
            "operation": "rename",
            "input": self.input,
            "output_folder": self.output_folder,
            "prefix": self.prefix,
            "summary": counts,
            "duration_ms": u64::try_from(self.duration.as_millis()).unwrap_or(u64::MAX),
            "results": self.records,
        }))
        .expect("run summary serializes to JSON")
    }

    fn format_summary(&self) -> String {
        let counts = self.counts();
        let mut output = String::new();

        writeln!(
            output,
            "Processed {} file(s) into {}",
            counts.total(),
            self.output_folder.display()
        )
        .unwrap();
        writeln!(output, "Renamed: {}", counts.renamed).unwrap();
        writeln!(output, "Skipped (already exists): {}", counts.skipped_exists).unwrap();

        if counts.failures() > 0 {
            writeln!(output, "Failed: {}", counts.failures()).unwrap();
            for record in self.records.iter().filter(|r| r.result.is_failure()) {
                writeln!(
                    output,
                    "  {} -> {}: {}",
                    record.original_name,
                    record.destination.display(),
                    record.result.label()
                )
                .unwrap();
            }
        }

        output
    }

    fn format_table(&self) -> String {
        use comfy_table::{Cell, Color, Table};

        let mut table = Table::new();
        table.set_header(vec![
            Cell::new("Original").fg(Color::Cyan),
            Cell::new("Destination").fg(Color::Cyan),
            Cell::new("Result").fg(Color::Cyan),
        ]);

        for record in &self.records {
            let destination = record
                .destination
                .file_name()
                .map_or_else(|| record.destination.display().to_string(), |n| {
                    n.to_string_lossy().into_owned()
                });
            let result = Cell::new(record.result.label());
            let result = if record.result.is_failure() {
                result.fg(Color::Red)
            } else {
                result
            };
            table.add_row(vec![
                Cell::new(&record.original_name),
                Cell::new(destination),
                result,
            ]);
        }

        table.to_string()
    }
}
