use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Plan the files exported from a media analysis run
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Input media file (repeatable)
    #[arg(short = 'i', long, value_name = "FILE")]
    pub input: Vec<String>,

    /// Read input files from a text list, one per line (repeatable)
    #[arg(long = "input-list", value_name = "TEXT_FILE_LIST")]
    pub input_list: Vec<PathBuf>,

    /// Export datas to this directory
    #[arg(short = 'e', long, value_name = "DIRECTORY")]
    pub export: Option<PathBuf>,

    /// Base file name for exported data file(s)
    #[arg(long = "export-base-filename", value_name = "FILENAME")]
    pub base_file_name: Option<String>,

    /// Format to export datas (repeatable). Defaults to all formats.
    #[arg(short = 'f', long = "format", value_enum, value_name = "FORMAT_TYPE")]
    pub formats: Vec<ExportFormat>,

    /// Path to a JSON config file. CLI arguments override values in the config file.
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Keep the source file extension in the per-source output file prefix
    #[arg(long)]
    pub add_source_ext: bool,

    /// Write the resolved export plan to this file as JSON. If no file is provided, it goes to the export directory.
    #[arg(short = 'w', long = "write-plan", num_args = 0..=1, value_name = "FILE")]
    pub write_plan: Option<Option<PathBuf>>,

    /// Verbose mode
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode (don't log anything, except errors)
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// HTML report
    Report,
    /// JSON tables
    Json,
    /// SQLite tables
    Sqlite,
    /// Excel tables
    Xlsx,
    /// XML tables
    Xml,
    /// Raw ffprobe XML
    Ffprobe,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 6] = [
        ExportFormat::Report,
        ExportFormat::Json,
        ExportFormat::Sqlite,
        ExportFormat::Xlsx,
        ExportFormat::Xml,
        ExportFormat::Ffprobe,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Report => "report",
            ExportFormat::Json => "json",
            ExportFormat::Sqlite => "sqlite",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Xml => "xml",
            ExportFormat::Ffprobe => "ffprobe",
        }
    }
}

impl Args {
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        }
    }
}
