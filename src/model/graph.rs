//! petgraph-based directed graph wrapper for the decision graph.

use std::collections::{HashMap, HashSet};

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;

use super::types::Workspace;

pub struct DecisionGraph {
    /// Node weights are node ids, edge weights are edge ids.
    pub graph: DiGraph<String, String>,
    pub node_indices: HashMap<String, NodeIndex>,
}

impl DecisionGraph {
    /// Build the graph from a workspace snapshot.
    ///
    /// A node id that occurs more than once gets a single vertex. Every edge
    /// is added; an endpoint id that names no node gets a vertex of its own,
    /// so paths through it still connect.
    pub fn build(workspace: &Workspace) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();

        let mut vertex = |id: &str, graph: &mut DiGraph<String, String>| -> NodeIndex {
            *node_indices
                .entry(id.to_string())
                .or_insert_with(|| graph.add_node(id.to_string()))
        };

        for node in &workspace.nodes {
            vertex(&node.id, &mut graph);
        }

        for edge in &workspace.edges {
            let s = vertex(&edge.from, &mut graph);
            let t = vertex(&edge.to, &mut graph);
            graph.add_edge(s, t, edge.id.clone());
        }

        DecisionGraph {
            graph,
            node_indices,
        }
    }

    /// Number of edges leaving `node_id`, parallel edges counted separately.
    pub fn outgoing_count(&self, node_id: &str) -> usize {
        match self.node_indices.get(node_id) {
            Some(&idx) => self.graph.edges_directed(idx, Direction::Outgoing).count(),
            None => 0,
        }
    }

    /// Ids reachable from `start_id` by forward edges, `start_id` included.
    /// Cycles are visited once. Endpoint ids without a node are passed
    /// through and appear in the result.
    pub fn reachable_from(&self, start_id: &str) -> HashSet<&str> {
        let mut reachable = HashSet::new();
        let Some(&start_idx) = self.node_indices.get(start_id) else {
            return reachable;
        };

        let mut dfs = Dfs::new(&self.graph, start_idx);
        while let Some(nx) = dfs.next(&self.graph) {
            reachable.insert(self.graph[nx].as_str());
        }
        reachable
    }
}
