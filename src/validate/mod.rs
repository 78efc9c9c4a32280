//! Workspace consistency checks.
//!
//! Validates a complete workspace snapshot before it is exported, executed,
//! or handed to scheduling. Every defect is reported as an `Issue`; nothing
//! here fails or panics on semantically invalid input.

pub mod conflicts;
pub mod index;
pub mod issue;
pub mod naming;
pub mod reachability;
pub mod references;
pub mod structural;

pub use index::WorkspaceIndex;
pub use issue::{Issue, IssueCode, IssueData, IssueKind, ValidationReport};

use crate::model::graph::DecisionGraph;
use crate::model::types::Workspace;

/// Validate the entire workspace. Issues are ordered by check:
/// structural, reachability, naming, references, conflicts.
pub fn validate(workspace: &Workspace) -> Vec<Issue> {
    let index = WorkspaceIndex::build(workspace);
    let graph = DecisionGraph::build(workspace);
    validate_with(workspace, &index, &graph)
}

/// Validate against a prebuilt index and graph.
pub fn validate_with(
    workspace: &Workspace,
    index: &WorkspaceIndex,
    graph: &DecisionGraph,
) -> Vec<Issue> {
    let mut issues = structural::check_structural(workspace, index, graph);
    trace_pass("structural", issues.len());

    extend_traced(&mut issues, "reachability", reachability::check_reachability(workspace, graph));
    extend_traced(&mut issues, "naming", naming::check_naming(workspace));
    extend_traced(&mut issues, "references", references::check_references(workspace, index));
    extend_traced(&mut issues, "conflicts", conflicts::check_conflicts(workspace));

    tracing::debug!(
        workspace = %workspace.id,
        nodes = workspace.nodes.len(),
        edges = workspace.edges.len(),
        errors = issues.iter().filter(|i| i.is_error()).count(),
        warnings = issues.iter().filter(|i| i.is_warning()).count(),
        "workspace validated"
    );

    issues
}

/// `validate`, wrapped with counting helpers.
pub fn validate_report(workspace: &Workspace) -> ValidationReport {
    ValidationReport::from(validate(workspace))
}

fn extend_traced(issues: &mut Vec<Issue>, pass: &'static str, found: Vec<Issue>) {
    trace_pass(pass, found.len());
    issues.extend(found);
}

fn trace_pass(pass: &'static str, count: usize) {
    tracing::trace!(pass, issues = count, "check finished");
}
