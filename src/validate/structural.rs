//! Graph-level structural checks: start node, duplicate ids, dangling
//! edges, dead ends.

use std::collections::HashMap;

use super::index::WorkspaceIndex;
use super::issue::{Issue, IssueCode, IssueData};
use crate::model::graph::DecisionGraph;
use crate::model::types::{NodeKind, Workspace};

/// Run all structural checks. Returns every issue found.
pub fn check_structural(
    workspace: &Workspace,
    index: &WorkspaceIndex,
    graph: &DecisionGraph,
) -> Vec<Issue> {
    let mut issues = Vec::new();

    start_node_present(workspace, &mut issues);
    no_duplicate_node_ids(workspace, &mut issues);
    no_duplicate_edge_ids(workspace, &mut issues);
    edges_reference_existing_nodes(workspace, index, &mut issues);
    non_terminal_nodes_have_outgoing(workspace, graph, &mut issues);

    issues
}

fn start_node_present(workspace: &Workspace, issues: &mut Vec<Issue>) {
    if workspace.start_node().is_none() {
        issues.push(Issue::new(
            IssueCode::NoStart,
            "Workspace has no Start node.",
            None,
        ));
    }
}

/// Ids occurring more than once, each reported once, in first-occurrence order.
fn duplicated<'a>(ids: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order = Vec::new();
    for id in ids {
        let count = counts.entry(id).or_insert(0);
        if *count == 0 {
            order.push(id);
        }
        *count += 1;
    }
    order.into_iter().filter(|id| counts[id] > 1).collect()
}

fn no_duplicate_node_ids(workspace: &Workspace, issues: &mut Vec<Issue>) {
    for id in duplicated(workspace.nodes.iter().map(|n| n.id.as_str())) {
        issues.push(Issue::node(
            IssueCode::DupNodeId,
            format!("Duplicate node id: {}", id),
            id,
        ));
    }
}

fn no_duplicate_edge_ids(workspace: &Workspace, issues: &mut Vec<Issue>) {
    for id in duplicated(workspace.edges.iter().map(|e| e.id.as_str())) {
        // First edge carrying the id supplies the endpoints.
        let Some(edge) = workspace.edges.iter().find(|e| e.id == id) else {
            continue;
        };
        issues.push(Issue::new(
            IssueCode::DupEdgeId,
            format!("Duplicate edge id: {}", id),
            Some(IssueData::Edge {
                edge_id: edge.id.clone(),
                from: edge.from.clone(),
                to: edge.to.clone(),
            }),
        ));
    }
}

fn edges_reference_existing_nodes(
    workspace: &Workspace,
    index: &WorkspaceIndex,
    issues: &mut Vec<Issue>,
) {
    for edge in &workspace.edges {
        let missing: Vec<&str> = [edge.from.as_str(), edge.to.as_str()]
            .into_iter()
            .filter(|id| !index.has_node(id))
            .collect();
        if missing.is_empty() {
            continue;
        }
        issues.push(Issue::new(
            IssueCode::EdgeRef,
            format!(
                "Edge {} references missing node(s): {}.",
                edge.id,
                missing.join(", ")
            ),
            Some(IssueData::Edge {
                edge_id: edge.id.clone(),
                from: edge.from.clone(),
                to: edge.to.clone(),
            }),
        ));
    }
}

/// End nodes are terminal; every other node needs an outgoing edge. Edges
/// count by `from` alone, so an edge with a dangling `to` still counts.
fn non_terminal_nodes_have_outgoing(
    workspace: &Workspace,
    graph: &DecisionGraph,
    issues: &mut Vec<Issue>,
) {
    for node in &workspace.nodes {
        if node.kind == NodeKind::End {
            continue;
        }
        if graph.outgoing_count(&node.id) == 0 {
            issues.push(Issue::node(
                IssueCode::NoOut,
                format!("Node {} has no outgoing edges.", node.id),
                &node.id,
            ));
        }
    }
}
