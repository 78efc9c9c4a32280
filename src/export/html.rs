//! Printable HTML specification of a workspace.

use super::writer::{HtmlWriter, escape_html};
use super::{ExportFile, to_json_pretty};
use crate::error::Result;
use crate::model::types::Workspace;

const STYLE: &[&str] = &[
    "body { font-family: Segoe UI, Tahoma, sans-serif; margin: 24px; }",
    ".brand { height: 6px; background: linear-gradient(90deg, #005a9e, #2a9d8f); margin-bottom: 16px; }",
    "h1 { margin: 8px 0 4px; }",
    ".meta { color: #444; font-size: 12px; }",
    "table { border-collapse: collapse; width: 100%; margin: 12px 0; font-size: 13px; }",
    "th, td { border: 1px solid #ccc; padding: 6px; text-align: left; vertical-align: top; }",
    "@media print { .noprint { display: none; } }",
];

pub fn html_spec(workspace: &Workspace) -> Result<ExportFile> {
    let mut w = HtmlWriter::new();
    let title = escape_html(&workspace.name);

    w.line("<!doctype html>");
    w.open("html");
    w.open("head");
    w.line("<meta charset=\"utf-8\"/>");
    w.line(&format!("<title>{} – Spec</title>", title));
    w.open("style");
    for rule in STYLE {
        w.line(rule);
    }
    w.close("style");
    w.close("head");

    w.open("body");
    w.line("<div class=\"brand\"></div>");
    w.line("<button class=\"noprint\" onclick=\"window.print()\">Print / Save PDF</button>");
    w.element("h1", &workspace.name);
    w.line(&format!(
        "<div class=\"meta\"><b>Created:</b> {} &nbsp; <b>Updated:</b> {}</div>",
        escape_html(&workspace.created_at),
        escape_html(&workspace.updated_at)
    ));
    w.blank();

    emit_questions(workspace, &mut w);
    emit_edges(workspace, &mut w)?;
    emit_outcomes(workspace, &mut w);

    w.close("body");
    w.close("html");

    Ok(ExportFile {
        name: format!("{}-spec.html", workspace.name),
        mime: "text/html".into(),
        content: w.finish(),
    })
}

fn emit_questions(workspace: &Workspace, w: &mut HtmlWriter) {
    w.element("h2", "Questions");
    w.open("table");
    w.open("thead");
    w.row("th", &["Name", "Prompt", "Type", "Options", "Validation"]);
    w.close("thead");
    w.open("tbody");
    for q in &workspace.questions {
        let options = q
            .options
            .iter()
            .map(|o| o.label.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let required = if q.is_required() { "Required" } else { "" };
        w.row(
            "td",
            &[
                q.name.as_str(),
                q.prompt.as_str(),
                q.question_type.as_str(),
                options.as_str(),
                required,
            ],
        );
    }
    w.close("tbody");
    w.close("table");
    w.blank();
}

fn emit_edges(workspace: &Workspace, w: &mut HtmlWriter) -> Result<()> {
    w.element("h2", "Edges & Rules");
    w.open("table");
    w.open("thead");
    w.row("th", &["ID", "From → To", "Label", "Rules"]);
    w.close("thead");
    w.open("tbody");
    for edge in &workspace.edges {
        let rules = to_json_pretty("edge rules", &edge.conditions)?;
        w.line(&format!(
            "<tr><td>{}</td><td>{} → {}</td><td>{}</td><td><pre>{}</pre></td></tr>",
            escape_html(&edge.id),
            escape_html(&edge.from),
            escape_html(&edge.to),
            escape_html(edge.label.as_deref().unwrap_or_default()),
            escape_html(&rules)
        ));
    }
    w.close("tbody");
    w.close("table");
    w.blank();
    Ok(())
}

fn emit_outcomes(workspace: &Workspace, w: &mut HtmlWriter) {
    let item = |name: &str, category: Option<&str>| match category {
        Some(c) => format!("{} ({})", name, c),
        None => name.to_string(),
    };

    w.element("h2", "Visit Types");
    w.open("ul");
    for vt in &workspace.visit_types {
        w.element("li", &item(&vt.name, vt.category.as_deref()));
    }
    w.close("ul");
    w.blank();

    w.element("h2", "Scheduling Pools");
    w.open("ul");
    for pool in &workspace.pools {
        w.element("li", &item(&pool.name, pool.category.as_deref()));
    }
    w.close("ul");
}
