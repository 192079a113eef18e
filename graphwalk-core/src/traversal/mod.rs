//! Traversal engine.
//!
//! Every algorithm advances one node at a time so the animation driver can
//! show each visit on its own tick. The three algorithms share the
//! [`Traversal::advance`] entry point:
//! - `Bfs`: FIFO frontier, neighbors enqueued in adjacency order
//! - `Dfs`: LIFO frontier, so the last-listed neighbor is visited first
//! - `Demo`: no frontier, walks the node list in input order

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TraversalError;
use crate::graph::Graph;

/// Result of one advance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Traversal is complete.
    Exhausted,
    /// Nothing new this tick (an already seen node was consumed).
    Skip,
    /// A newly visited node.
    Visit(String),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bfs,
    Dfs,
    Demo,
}

impl Algorithm {
    /// Any name other than `bfs` or `dfs` selects the demo walk.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "bfs" => Algorithm::Bfs,
            "dfs" => Algorithm::Dfs,
            _ => Algorithm::Demo,
        }
    }

    /// Name shown in the log.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Demo => "Demo",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Order {
    Fifo,
    Lifo,
}

/// Frontier plus seen-set shared by BFS and DFS.
#[derive(Debug, Clone)]
pub struct Cursor {
    order: Order,
    frontier: VecDeque<String>,
    seen: HashSet<String>,
}

impl Cursor {
    fn new(order: Order, start: &str) -> Self {
        Self {
            order,
            frontier: VecDeque::from([start.to_string()]),
            seen: HashSet::new(),
        }
    }

    fn advance(&mut self, graph: &Graph) -> Step {
        let next = match self.order {
            Order::Fifo => self.frontier.pop_front(),
            Order::Lifo => self.frontier.pop_back(),
        };
        let Some(u) = next else {
            return Step::Exhausted;
        };
        if !self.seen.insert(u.clone()) {
            return Step::Skip;
        }
        self.frontier.extend(graph.neighbors(&u).iter().cloned());
        Step::Visit(u)
    }
}

/// A running traversal.
#[derive(Debug, Clone)]
pub enum Traversal {
    Bfs(Cursor),
    Dfs(Cursor),
    Demo { next: usize },
}

impl Traversal {
    /// Prepare a traversal of `graph`. BFS and DFS need `start` to be a
    /// node of the graph; the demo walk ignores it.
    pub fn new(algorithm: Algorithm, graph: &Graph, start: &str) -> Result<Self, TraversalError> {
        let start = start.trim();
        let needs_start = !matches!(algorithm, Algorithm::Demo);
        if needs_start && !graph.contains(start) {
            return Err(TraversalError::UnknownStartNode(start.to_string()));
        }
        Ok(match algorithm {
            Algorithm::Bfs => Traversal::Bfs(Cursor::new(Order::Fifo, start)),
            Algorithm::Dfs => Traversal::Dfs(Cursor::new(Order::Lifo, start)),
            Algorithm::Demo => Traversal::Demo { next: 0 },
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            Traversal::Bfs(_) => Algorithm::Bfs,
            Traversal::Dfs(_) => Algorithm::Dfs,
            Traversal::Demo { .. } => Algorithm::Demo,
        }
    }

    /// Advance by one step.
    pub fn advance(&mut self, graph: &Graph) -> Step {
        match self {
            Traversal::Bfs(cursor) | Traversal::Dfs(cursor) => cursor.advance(graph),
            Traversal::Demo { next } => match graph.nodes().get(*next) {
                Some(label) => {
                    *next += 1;
                    Step::Visit(label.clone())
                }
                None => Step::Exhausted,
            },
        }
    }

    /// Drain the traversal and return the visit order.
    pub fn run_to_end(mut self, graph: &Graph) -> Vec<String> {
        let mut order = Vec::new();
        loop {
            match self.advance(graph) {
                Step::Exhausted => return order,
                Step::Skip => {}
                Step::Visit(n) => order.push(n),
            }
        }
    }
}
