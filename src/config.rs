use crate::cli::ExportFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_file_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub formats: Vec<ExportFormat>,
    pub add_source_ext: bool,

    pub report_html_file_name: String,
    pub json_table_file_name: String,
    pub sqlite_table_file_name: String,
    pub xlsx_table_file_name: String,
    pub xml_table_file_name: String,
    pub ffprobe_xml_file_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            export: None,
            base_file_name: None,
            formats: Vec::new(),
            add_source_ext: false,
            report_html_file_name: "report.html".to_string(),
            json_table_file_name: "media-datas.json".to_string(),
            sqlite_table_file_name: "media-datas.sqlite".to_string(),
            xlsx_table_file_name: "media-datas.xlsx".to_string(),
            xml_table_file_name: "media-datas.xml".to_string(),
            ffprobe_xml_file_name: "ffprobe.xml".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn suffix_for(&self, format: ExportFormat) -> &str {
        match format {
            ExportFormat::Report => &self.report_html_file_name,
            ExportFormat::Json => &self.json_table_file_name,
            ExportFormat::Sqlite => &self.sqlite_table_file_name,
            ExportFormat::Xlsx => &self.xlsx_table_file_name,
            ExportFormat::Xml => &self.xml_table_file_name,
            ExportFormat::Ffprobe => &self.ffprobe_xml_file_name,
        }
    }
}
