//! Naming conventions for outcome catalogs.

use std::sync::LazyLock;

use regex::Regex;

use super::issue::{Issue, IssueCode, IssueData};
use crate::model::types::Workspace;

const SLUG_PATTERN: &str = r"^[A-Z0-9_]+$";

static SLUG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(SLUG_PATTERN).expect("valid regex"));

pub fn is_slug(name: &str) -> bool {
    SLUG_RE.is_match(name)
}

/// Visit type names should be upper-case slugs such as `MRI_BRAIN_WWO`.
pub fn check_naming(workspace: &Workspace) -> Vec<Issue> {
    workspace
        .visit_types
        .iter()
        .filter(|vt| !is_slug(&vt.name))
        .map(|vt| {
            Issue::new(
                IssueCode::VtSlug,
                format!(
                    "VisitType \"{}\" should be an upper-case slug (e.g., MRI_BRAIN_WWO).",
                    vt.name
                ),
                Some(IssueData::VisitType {
                    visit_type_id: vt.id.clone(),
                }),
            )
        })
        .collect()
}
