//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and traits so a single import
//! gives access to the core functionality.

// Graph and nodes
pub use crate::graph::Graph;
pub use crate::node::{Node, NodeId, NodeIdGen, NodeKind};
pub use crate::ops::Op;

// Execution
pub use crate::engine::Engine;

// Collaborator contracts and implementations
pub use crate::io::{Choice, ConsoleReader, DirStore, FileExt, FileStore, PromptReader};

// Flow definition documents
pub use crate::flow::{FlowDefinition, IntoFlow, NodeDefinition};

// Error types
pub use crate::error::{EvalError, FlowParseError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
