//! Graph traversal animation for the browser.
//!
//! Builds an undirected graph from a node list and `u-v` edge tokens, lays
//! it out on a circle and animates BFS, DFS or a demo walk one node per
//! tick. The core is platform-free; [`wasm`] binds it to a canvas, a log
//! element and browser timers.

pub mod config;
pub mod error;
pub mod graph;
pub mod layout;
pub mod output;
pub mod render;
pub mod session;
pub mod traversal;
pub mod wasm;

pub use config::SessionConfig;
pub use error::{Error, GraphError, Result, TraversalError};
pub use graph::Graph;
pub use layout::{circular_layout, Point, Positions, Viewport};
pub use render::{render, CommandRecorder, RenderStyle, Surface};
pub use session::{AnimationState, LogSink, Scheduler, Session, TaskHandle};
pub use traversal::{Algorithm, Step, Traversal};
