// src/graph/mod.rs
// =============================================================================
// Flattens a repository tree into the node/link lists a force-directed
// renderer consumes. Layout and physics belong to the renderer; this only
// produces the data.
//
// - One GraphNode per tree entry, carrying its display color
// - One GraphLink per folder -> child edge
// =============================================================================

use serde::Serialize;

use crate::tree::{NodeKind, RepoNode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

impl GraphData {
    /// Walks the tree depth-first; parents are emitted before their children.
    pub fn from_tree(roots: &[RepoNode]) -> Self {
        let mut graph = GraphData::default();
        for root in roots {
            graph.visit(root, None);
        }
        graph
    }

    fn visit(&mut self, node: &RepoNode, parent: Option<&str>) {
        self.nodes.push(GraphNode {
            id: node.id.clone(),
            name: node.name.clone(),
            kind: node.kind,
            extension: node.extension.clone(),
            color: node.color(),
        });

        if let Some(parent) = parent {
            self.links.push(GraphLink {
                source: parent.to_string(),
                target: node.id.clone(),
            });
        }

        for child in node.children() {
            self.visit(child, Some(&node.id));
        }
    }
}
