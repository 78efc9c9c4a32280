//! CSV tables for questions and edge rules.

use serde::Serialize;

use super::{ExportFile, to_json};
use crate::error::Result;
use crate::model::types::{Condition, Workspace};

const CSV_MIME: &str = "text/csv";

/// Quote every cell and double embedded quotes; rows are `\n`-separated.
fn to_csv(rows: &[Vec<String>]) -> String {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|cell| format!("\"{}\"", cell.replace('"', "\"\"")))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn header(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

pub fn questions_csv(workspace: &Workspace) -> ExportFile {
    let mut rows = vec![header(&["id", "name", "prompt", "type", "required", "options"])];
    for q in &workspace.questions {
        let options = q
            .options
            .iter()
            .map(|o| o.label.as_str())
            .collect::<Vec<_>>()
            .join("|");
        rows.push(vec![
            q.id.clone(),
            q.name.clone(),
            q.prompt.clone(),
            q.question_type.as_str().to_string(),
            if q.is_required() { "true".into() } else { String::new() },
            options,
        ]);
    }

    ExportFile {
        name: format!("{}-questions.csv", workspace.name),
        mime: CSV_MIME.into(),
        content: to_csv(&rows),
    }
}

#[derive(Serialize)]
struct RuleLogic<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    all: Option<&'a Vec<Condition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    any: Option<&'a Vec<Condition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    not: Option<&'a Vec<Condition>>,
}

pub fn rules_csv(workspace: &Workspace) -> Result<ExportFile> {
    let mut rows = vec![header(&["edgeId", "ruleId", "label", "logic_json", "action_json"])];
    for (edge, rule) in workspace.edge_rules() {
        let logic = RuleLogic {
            all: rule.all.as_ref(),
            any: rule.any.as_ref(),
            not: rule.not.as_ref(),
        };
        rows.push(vec![
            edge.id.clone(),
            rule.id.clone(),
            edge.label.clone().unwrap_or_default(),
            to_json("rule logic", &logic)?,
            to_json("rule action", &rule.action)?,
        ]);
    }

    Ok(ExportFile {
        name: format!("{}-rules.csv", workspace.name),
        mime: CSV_MIME.into(),
        content: to_csv(&rows),
    })
}
