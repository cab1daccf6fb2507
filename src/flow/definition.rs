use crate::error::FlowParseError;
use crate::node::NodeId;
use crate::ops::Op;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The complete, canonical definition of one flow, ready to be built into
/// a [`Graph`](crate::graph::Graph).
///
/// Node order in the document is registration order, which is execution
/// order. A definition is the serializable twin of the node model: same
/// kinds and parameters, no result slots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowDefinition {
    pub nodes: Vec<NodeDefinition>,
}

/// Defines a single node of the flow.
///
/// Operation selectors parse through the closed [`Op`] enum, so an
/// unsupported operation is rejected here, at construction time, instead
/// of surfacing during evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeDefinition {
    NumberInput {
        id: NodeId,
        prompt: String,
    },
    TextInput {
        id: NodeId,
        prompt: String,
    },
    FileInput {
        id: NodeId,
        name: String,
        extension: String,
    },
    Title {
        id: NodeId,
        title: String,
        body: String,
    },
    Text {
        id: NodeId,
        title: String,
        body: String,
    },
    FloatCalc {
        id: NodeId,
        op: Op,
        #[serde(default)]
        deps: Vec<NodeId>,
    },
    StringCalc {
        id: NodeId,
        op: Op,
        #[serde(default)]
        deps: Vec<NodeId>,
    },
    Display {
        id: NodeId,
        #[serde(default)]
        deps: Vec<NodeId>,
    },
    Output {
        id: NodeId,
        file_name: String,
        extension: String,
        title: String,
        description: String,
        #[serde(default)]
        deps: Vec<NodeId>,
    },
    End {
        id: NodeId,
    },
}

impl NodeDefinition {
    pub fn id(&self) -> NodeId {
        match self {
            NodeDefinition::NumberInput { id, .. }
            | NodeDefinition::TextInput { id, .. }
            | NodeDefinition::FileInput { id, .. }
            | NodeDefinition::Title { id, .. }
            | NodeDefinition::Text { id, .. }
            | NodeDefinition::FloatCalc { id, .. }
            | NodeDefinition::StringCalc { id, .. }
            | NodeDefinition::Display { id, .. }
            | NodeDefinition::Output { id, .. }
            | NodeDefinition::End { id } => *id,
        }
    }
}

impl FlowDefinition {
    /// Parses a flow definition from its JSON document form.
    pub fn from_json(text: &str) -> Result<Self, FlowParseError> {
        let flow: FlowDefinition = serde_json::from_str(text)?;
        flow.validate()?;
        Ok(flow)
    }

    /// Reads and parses a flow definition file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FlowParseError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Rejects documents the graph would silently mangle: duplicate ids
    /// would be dropped by first-registration-wins at register time, which
    /// is almost certainly not what a document author meant.
    fn validate(&self) -> Result<(), FlowParseError> {
        let mut seen = ahash::AHashSet::new();
        for node in &self.nodes {
            if !seen.insert(node.id()) {
                return Err(FlowParseError::Validation(format!(
                    "duplicate node id {} in flow definition",
                    node.id()
                )));
            }
        }
        Ok(())
    }
}
