//! Graphwalk Core Library
//!
//! Undirected graph container and the step-recording traversal engine
//! used by the graphwalk CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod traversal;

pub use graph::{Graph, GraphData, NodeKey, Preset};
pub use traversal::{Algorithm, Step, StepEvent, Traversal};
