//! Exporters: Workspace → project file, CSV tables, printable HTML spec.
//!
//! Public API: `export(workspace, format) -> Result<ExportFile>`
//!
//! Exports are independent of validation; callers decide whether to gate
//! them on a clean `ValidationReport`.

mod csv;
mod html;
mod project;
mod writer;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::types::Workspace;

pub use csv::{questions_csv, rules_csv};
pub use html::html_spec;
pub use project::project_file;

/// A generated file with its name, MIME type, and content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportFile {
    pub name: String,
    pub mime: String,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Project,
    QuestionsCsv,
    RulesCsv,
    Html,
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "esqproj" => Ok(ExportFormat::Project),
            "questions_csv" => Ok(ExportFormat::QuestionsCsv),
            "rules_csv" => Ok(ExportFormat::RulesCsv),
            "html" => Ok(ExportFormat::Html),
            other => Err(Error::UnknownExportFormat(other.to_string())),
        }
    }
}

/// Produce one export file.
pub fn export(workspace: &Workspace, format: ExportFormat) -> Result<ExportFile> {
    let file = match format {
        ExportFormat::Project => project_file(workspace)?,
        ExportFormat::QuestionsCsv => questions_csv(workspace),
        ExportFormat::RulesCsv => rules_csv(workspace)?,
        ExportFormat::Html => html_spec(workspace)?,
    };
    tracing::debug!(file = %file.name, bytes = file.content.len(), "workspace exported");
    Ok(file)
}

pub(crate) fn to_json_pretty<T: Serialize>(what: &'static str, value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|source| Error::Serialize { what, source })
}

pub(crate) fn to_json<T: Serialize>(what: &'static str, value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|source| Error::Serialize { what, source })
}
