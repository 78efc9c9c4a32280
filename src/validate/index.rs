//! Read-only identifier sets, built once per `validate` call.

use std::collections::HashSet;

use crate::model::types::Workspace;

/// Existence lookups over the workspace's authoritative collections.
pub struct WorkspaceIndex<'a> {
    pub node_ids: HashSet<&'a str>,
    pub question_ids: HashSet<&'a str>,
    pub visit_type_ids: HashSet<&'a str>,
    pub pool_ids: HashSet<&'a str>,
}

impl<'a> WorkspaceIndex<'a> {
    pub fn build(workspace: &'a Workspace) -> Self {
        WorkspaceIndex {
            node_ids: workspace.nodes.iter().map(|n| n.id.as_str()).collect(),
            question_ids: workspace.questions.iter().map(|q| q.id.as_str()).collect(),
            visit_type_ids: workspace.visit_types.iter().map(|v| v.id.as_str()).collect(),
            pool_ids: workspace.pools.iter().map(|p| p.id.as_str()).collect(),
        }
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_ids.contains(id)
    }

    pub fn has_question(&self, id: &str) -> bool {
        self.question_ids.contains(id)
    }

    pub fn has_visit_type(&self, id: &str) -> bool {
        self.visit_type_ids.contains(id)
    }

    pub fn has_pool(&self, id: &str) -> bool {
        self.pool_ids.contains(id)
    }
}
