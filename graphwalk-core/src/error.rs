//! Error types for graph building, traversal setup and configuration.
//!
//! Nothing here is fatal: every error is reported through the log sink and
//! the session carries on with its previous state.

use thiserror::Error;

/// Errors raised while turning user input into a [`crate::graph::Graph`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge token is malformed or names a node that was not declared.
    #[error("invalid edge '{token}': {reason}")]
    InvalidEdge { token: String, reason: String },

    /// The same label appears twice in the node list.
    #[error("duplicate node '{0}'")]
    DuplicateNode(String),
}

/// Errors raised before a traversal starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraversalError {
    #[error("unknown start node '{0}'")]
    UnknownStartNode(String),
}

/// Crate-level error.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Traversal(#[from] TraversalError),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
