//! WASM entry points for the browser editor.

use wasm_bindgen::prelude::*;

use crate::error::Error;
use crate::export::{self, ExportFile, ExportFormat};
use crate::validate::{self, Issue, ValidationReport};

/// Validate a workspace JSON snapshot.
/// Returns `{ status: "ok", issues, errorCount, warningCount }` or
/// `{ status: "invalid", code, message }`.
#[wasm_bindgen]
pub fn validate_workspace(json: &str) -> JsValue {
    let result = validate_workspace_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Export a workspace JSON snapshot in one of the formats
/// `esqproj`, `questions_csv`, `rules_csv`, `html`.
#[wasm_bindgen]
pub fn export_workspace(json: &str, format: &str) -> JsValue {
    let result = export_workspace_inner(json, format);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

pub(crate) fn validate_workspace_inner(json: &str) -> ValidateResult {
    let workspace = match crate::model::parse(json) {
        Ok(ws) => ws,
        Err(e) => return ValidateResult::Invalid(ErrorDto::from(e)),
    };

    let report: ValidationReport = validate::validate_report(&workspace);
    ValidateResult::Ok {
        error_count: report.error_count(),
        warning_count: report.warning_count(),
        issues: report.issues,
    }
}

pub(crate) fn export_workspace_inner(json: &str, format: &str) -> ExportResult {
    let run = || -> Result<ExportFile, Error> {
        let format: ExportFormat = format.parse()?;
        let workspace = crate::model::parse(json)?;
        export::export(&workspace, format)
    };

    match run() {
        Ok(file) => ExportResult::Ok { file },
        Err(e) => ExportResult::Invalid(ErrorDto::from(e)),
    }
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub(crate) struct ErrorDto {
    code: String,
    message: String,
}

impl From<Error> for ErrorDto {
    fn from(e: Error) -> Self {
        ErrorDto {
            code: e.code().to_string(),
            message: e.to_string(),
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "status")]
pub(crate) enum ValidateResult {
    #[serde(rename = "ok", rename_all = "camelCase")]
    Ok {
        issues: Vec<Issue>,
        error_count: usize,
        warning_count: usize,
    },
    #[serde(rename = "invalid")]
    Invalid(ErrorDto),
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "status")]
pub(crate) enum ExportResult {
    #[serde(rename = "ok")]
    Ok { file: ExportFile },
    #[serde(rename = "invalid")]
    Invalid(ErrorDto),
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "id": "ws", "name": "Minimal", "version": "1.0",
        "nodes": [
            { "id": "n1", "kind": "Start", "position": { "x": 0, "y": 0 } },
            { "id": "n2", "kind": "End", "position": { "x": 0, "y": 100 } }
        ],
        "edges": [ { "id": "e1", "from": "n1", "to": "n2" } ],
        "questions": [], "visitTypes": [], "pools": [], "rules": [],
        "createdAt": "2024-01-01T00:00:00Z", "updatedAt": "2024-01-01T00:00:00Z"
    }"#;

    #[test]
    fn validate_inner_ok() {
        match validate_workspace_inner(MINIMAL) {
            ValidateResult::Ok {
                issues,
                error_count,
                warning_count,
            } => {
                assert!(issues.is_empty());
                assert_eq!(error_count, 0);
                assert_eq!(warning_count, 0);
            }
            other => panic!("expected ok, got {:?}", other),
        }
    }

    #[test]
    fn validate_inner_reports_parse_failure() {
        let result = serde_json::to_value(validate_workspace_inner("not json")).unwrap();
        assert_eq!(result["status"], "invalid");
        assert_eq!(result["code"], "PARSE");
    }

    #[test]
    fn validate_inner_serializes_counts_in_camel_case() {
        let json = MINIMAL.replace("\"kind\": \"Start\"", "\"kind\": \"Gate\"");
        let result = serde_json::to_value(validate_workspace_inner(&json)).unwrap();
        assert_eq!(result["status"], "ok");
        assert_eq!(result["errorCount"], 1);
        assert_eq!(result["issues"][0]["code"], "NO_START");
    }

    #[test]
    fn export_inner_rejects_unknown_format() {
        let result = serde_json::to_value(export_workspace_inner(MINIMAL, "pdf")).unwrap();
        assert_eq!(result["status"], "invalid");
        assert_eq!(result["code"], "EXPORT_FORMAT");
    }

    #[test]
    fn export_inner_project_file() {
        match export_workspace_inner(MINIMAL, "esqproj") {
            ExportResult::Ok { file } => assert_eq!(file.name, "Minimal.esqproj"),
            other => panic!("expected ok, got {:?}", other),
        }
    }
}
