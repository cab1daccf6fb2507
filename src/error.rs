use crate::node::NodeId;
use thiserror::Error;

/// Errors that can occur while evaluating a single node.
///
/// Every variant is caught at the node boundary and routed into the
/// retry/skip recovery loop; none of them aborts the execution pass.
/// "Unsupported operation" and "no operands" are unrepresentable: the
/// [`Op`](crate::ops::Op) enum is closed and the reducer returns `None`
/// behind the zero-dependency guard.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid file handle: {0}")]
    InvalidHandle(String),

    #[error("Type mismatch: operation requires {expected}, but found {found}")]
    TypeMismatch { expected: String, found: String },

    #[error("Dependency node with id = {0} was not found in the graph")]
    DependencyNotFound(NodeId),
}

impl EvalError {
    /// A missing dependency reported through the `InvalidInput` channel,
    /// as the display and output endpoints do.
    pub(crate) fn missing_dep_input(id: NodeId) -> Self {
        EvalError::InvalidInput(format!("dependency node with id = {} was not found", id))
    }
}

/// Errors that can occur when loading a flow definition document.
#[derive(Error, Debug)]
pub enum FlowParseError {
    #[error("Failed to parse flow JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read flow definition file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid flow definition: {0}")]
    Validation(String),
}
