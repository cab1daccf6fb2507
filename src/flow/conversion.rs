use super::definition::{FlowDefinition, NodeDefinition};
use crate::error::FlowParseError;
use crate::graph::Graph;
use crate::node::{Node, NodeKind};

/// A trait for custom data models that can be converted into a
/// [`FlowDefinition`].
///
/// This is the extension point for keeping the engine format-agnostic:
/// parse your own document format into your own structs, then implement
/// `IntoFlow` to translate them into the canonical definition.
///
/// # Example
///
/// ```rust
/// use nagare::flow::{FlowDefinition, NodeDefinition, IntoFlow};
/// use nagare::error::FlowParseError;
///
/// struct MyStep { id: u64, question: String }
/// struct MyScript { steps: Vec<MyStep> }
///
/// impl IntoFlow for MyScript {
///     fn into_flow(self) -> Result<FlowDefinition, FlowParseError> {
///         Ok(FlowDefinition {
///             nodes: self
///                 .steps
///                 .into_iter()
///                 .map(|step| NodeDefinition::TextInput {
///                     id: step.id,
///                     prompt: step.question,
///                 })
///                 .collect(),
///         })
///     }
/// }
/// ```
pub trait IntoFlow {
    /// Consumes the object and converts it into a canonical flow definition.
    fn into_flow(self) -> Result<FlowDefinition, FlowParseError>;
}

impl From<NodeDefinition> for Node {
    fn from(def: NodeDefinition) -> Self {
        match def {
            NodeDefinition::NumberInput { id, prompt } => Node::number_input(id, prompt),
            NodeDefinition::TextInput { id, prompt } => Node::text_input(id, prompt),
            NodeDefinition::FileInput {
                id,
                name,
                extension,
            } => Node::file_input(id, name, extension),
            NodeDefinition::Title { id, title, body } => {
                Node::new(id, NodeKind::Title { title, body })
            }
            NodeDefinition::Text { id, title, body } => {
                Node::new(id, NodeKind::Text { title, body })
            }
            NodeDefinition::FloatCalc { id, op, deps } => Node::float_calc(id, op, deps),
            NodeDefinition::StringCalc { id, op, deps } => Node::string_calc(id, op, deps),
            NodeDefinition::Display { id, deps } => Node::new(id, NodeKind::Display { deps }),
            NodeDefinition::Output {
                id,
                file_name,
                extension,
                title,
                description,
                deps,
            } => Node::new(
                id,
                NodeKind::Output {
                    file_name,
                    extension,
                    title,
                    description,
                    deps,
                },
            ),
            NodeDefinition::End { id } => Node::new(id, NodeKind::End),
        }
    }
}

impl FlowDefinition {
    /// Registers every defined node into a fresh graph, in document order.
    pub fn build_graph(self) -> Graph {
        let mut graph = Graph::new();
        for def in self.nodes {
            graph.register(def.into());
        }
        graph
    }
}
