//
// Graph store: node labels + edge tokens -> undirected adjacency list.
//
// What this does:
// - Keeps nodes in input order (layout and the demo walk depend on it)
// - Inserts every edge into both endpoints' neighbor lists
// - Keeps parallel edges and self loops as given
// - Rejects tokens that are malformed or name undeclared nodes
//
// The build is all-or-nothing: on error no partial graph escapes.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::error::GraphError;

pub mod input;

/// An undirected edge as written in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<String>,
    adjacency: HashMap<String, Vec<String>>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Build a graph from already split labels and edge tokens.
    pub fn build<N, E>(node_labels: N, edge_tokens: E) -> Result<Self, GraphError>
    where
        N: IntoIterator,
        N::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        let mut graph = Graph::default();

        for label in node_labels {
            let label = label.as_ref();
            if graph.adjacency.contains_key(label) {
                return Err(GraphError::DuplicateNode(label.to_string()));
            }
            graph.nodes.push(label.to_string());
            graph.adjacency.insert(label.to_string(), Vec::new());
        }

        for token in edge_tokens {
            let token = token.as_ref().trim();
            if token.is_empty() {
                continue;
            }
            graph.insert_edge(token)?;
        }

        debug!(nodes = graph.nodes.len(), edges = graph.edges.len(), "graph built");
        Ok(graph)
    }

    /// Build a graph straight from the two text fields.
    pub fn parse(nodes_text: &str, edges_text: &str) -> Result<Self, GraphError> {
        Self::build(input::split_nodes(nodes_text), input::split_edges(edges_text))
    }

    fn insert_edge(&mut self, token: &str) -> Result<(), GraphError> {
        let invalid = |reason: String| GraphError::InvalidEdge {
            token: token.to_string(),
            reason,
        };

        let (u, v) = input::split_edge_token(token)
            .ok_or_else(|| invalid("expected the form u-v".to_string()))?;
        for side in [u, v] {
            if side.is_empty() {
                return Err(invalid("missing node name".to_string()));
            }
            if !self.adjacency.contains_key(side) {
                return Err(invalid(format!("unknown node '{side}'")));
            }
        }

        if let Some(list) = self.adjacency.get_mut(u) {
            list.push(v.to_string());
        }
        if let Some(list) = self.adjacency.get_mut(v) {
            list.push(u.to_string());
        }
        self.edges.push(Edge { from: u.to_string(), to: v.to_string() });
        Ok(())
    }

    /// Node labels in input order.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Neighbors of a node in insertion order, or empty slice if unknown.
    pub fn neighbors(&self, label: &str) -> &[String] {
        self.adjacency.get(label).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn contains(&self, label: &str) -> bool {
        self.adjacency.contains_key(label)
    }

    /// Undirected edges in input order, one entry per token.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
