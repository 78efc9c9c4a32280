//! Reachability from the Start node.

use super::issue::{Issue, IssueCode};
use crate::model::graph::DecisionGraph;
use crate::model::types::Workspace;

/// Warn about every node not reachable by forward edges from Start.
///
/// Skipped when there is no Start node; the structural checks already
/// reported that. Node order is preserved, so a duplicated unreachable id
/// is reported once per occurrence.
pub fn check_reachability(workspace: &Workspace, graph: &DecisionGraph) -> Vec<Issue> {
    let Some(start) = workspace.start_node() else {
        return Vec::new();
    };

    let reachable = graph.reachable_from(&start.id);

    workspace
        .nodes
        .iter()
        .filter(|node| !reachable.contains(node.id.as_str()))
        .map(|node| {
            Issue::node(
                IssueCode::Orphan,
                format!("Node {} is unreachable from Start.", node.id),
                &node.id,
            )
        })
        .collect()
}
