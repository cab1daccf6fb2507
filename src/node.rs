use crate::ops::Op;

/// Identifier of a node, unique within one graph and never reused in a run.
pub type NodeId = u64;

/// Monotonic id source threaded through a builder as an ordinary owned
/// value. The first id handed out is 1.
#[derive(Debug, Clone, Default)]
pub struct NodeIdGen(NodeId);

impl NodeIdGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> NodeId {
        self.0 += 1;
        self.0
    }
}

/// A single unit of the dataflow graph: identity plus kind-specific state.
///
/// Every kind carries its own result slot inline, starting at the domain
/// default (0.0 or empty text) and mutated by the evaluation dispatcher.
/// Dependencies are declared by id only; nodes never hold references to
/// each other, the [`Graph`](crate::graph::Graph) is the sole owner.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
}

/// The tagged-variant node model. An exhaustive `match` in the dispatcher
/// replaces per-kind dynamic dispatch, so an unhandled kind is a compile
/// error.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    NumberInput {
        prompt: String,
        value: f64,
    },
    TextInput {
        prompt: String,
        value: String,
    },
    FileInput {
        name: String,
        extension: String,
        content: String,
    },
    Title {
        title: String,
        body: String,
    },
    Text {
        title: String,
        body: String,
    },
    FloatCalc {
        op: Op,
        deps: Vec<NodeId>,
        result: f64,
    },
    StringCalc {
        op: Op,
        deps: Vec<NodeId>,
        result: String,
    },
    Display {
        deps: Vec<NodeId>,
    },
    Output {
        file_name: String,
        extension: String,
        title: String,
        description: String,
        deps: Vec<NodeId>,
    },
    End,
}

impl Node {
    pub fn new(id: NodeId, kind: NodeKind) -> Self {
        Self { id, kind }
    }

    pub fn number_input(id: NodeId, prompt: impl Into<String>) -> Self {
        Self::new(
            id,
            NodeKind::NumberInput {
                prompt: prompt.into(),
                value: 0.0,
            },
        )
    }

    pub fn text_input(id: NodeId, prompt: impl Into<String>) -> Self {
        Self::new(
            id,
            NodeKind::TextInput {
                prompt: prompt.into(),
                value: String::new(),
            },
        )
    }

    pub fn file_input(id: NodeId, name: impl Into<String>, extension: impl Into<String>) -> Self {
        Self::new(
            id,
            NodeKind::FileInput {
                name: name.into(),
                extension: extension.into(),
                content: String::new(),
            },
        )
    }

    pub fn float_calc(id: NodeId, op: Op, deps: Vec<NodeId>) -> Self {
        Self::new(
            id,
            NodeKind::FloatCalc {
                op,
                deps,
                result: 0.0,
            },
        )
    }

    pub fn string_calc(id: NodeId, op: Op, deps: Vec<NodeId>) -> Self {
        Self::new(
            id,
            NodeKind::StringCalc {
                op,
                deps,
                result: String::new(),
            },
        )
    }

    /// A short name for the node's kind, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            NodeKind::NumberInput { .. } => "NumberInput",
            NodeKind::TextInput { .. } => "TextInput",
            NodeKind::FileInput { .. } => "FileInput",
            NodeKind::Title { .. } => "Title",
            NodeKind::Text { .. } => "Text",
            NodeKind::FloatCalc { .. } => "FloatCalc",
            NodeKind::StringCalc { .. } => "StringCalc",
            NodeKind::Display { .. } => "Display",
            NodeKind::Output { .. } => "Output",
            NodeKind::End => "End",
        }
    }

    /// Declared dependency ids, in declaration order. Empty for kinds that
    /// have no dependencies.
    pub fn deps(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::FloatCalc { deps, .. }
            | NodeKind::StringCalc { deps, .. }
            | NodeKind::Display { deps }
            | NodeKind::Output { deps, .. } => deps,
            _ => &[],
        }
    }

    /// The node's numeric result, if it has one. Only `NumberInput` and
    /// `FloatCalc` expose a float result.
    pub fn number_value(&self) -> Option<f64> {
        match &self.kind {
            NodeKind::NumberInput { value, .. } => Some(*value),
            NodeKind::FloatCalc { result, .. } => Some(*result),
            _ => None,
        }
    }

    /// The "displayable" capability: the node's result rendered as text,
    /// independent of its native domain. `None` for side-effect-only kinds.
    pub fn display_text(&self) -> Option<String> {
        match &self.kind {
            NodeKind::NumberInput { value, .. } => Some(fmt_number(*value)),
            NodeKind::TextInput { value, .. } => Some(value.clone()),
            NodeKind::FileInput { content, .. } => Some(content.clone()),
            NodeKind::Title { title, body } | NodeKind::Text { title, body } => {
                Some(format!("{}\n{}", title, body))
            }
            NodeKind::FloatCalc { result, .. } => Some(fmt_number(*result)),
            NodeKind::StringCalc { result, .. } => Some(result.clone()),
            NodeKind::Display { .. } | NodeKind::Output { .. } | NodeKind::End => None,
        }
    }

    /// Stores a numeric result. Ignored for kinds without a float slot.
    pub fn store_number(&mut self, new: f64) {
        match &mut self.kind {
            NodeKind::NumberInput { value, .. } => *value = new,
            NodeKind::FloatCalc { result, .. } => *result = new,
            _ => {}
        }
    }

    /// Stores a textual result. Ignored for kinds without a text slot.
    pub fn store_text(&mut self, new: String) {
        match &mut self.kind {
            NodeKind::TextInput { value, .. } => *value = new,
            NodeKind::FileInput { content, .. } => *content = new,
            NodeKind::StringCalc { result, .. } => *result = new,
            _ => {}
        }
    }

    /// Resets the result slot to the domain default. This is the "skip"
    /// action of the failure-recovery protocol; side-effect-only kinds have
    /// nothing to reset.
    pub fn apply_default(&mut self) {
        match &mut self.kind {
            NodeKind::NumberInput { value, .. } => *value = 0.0,
            NodeKind::FloatCalc { result, .. } => *result = 0.0,
            NodeKind::TextInput { value, .. } => value.clear(),
            NodeKind::FileInput { content, .. } => content.clear(),
            NodeKind::StringCalc { result, .. } => result.clear(),
            _ => {}
        }
    }
}

/// Formats a number for display: integral values print without a fraction.
pub fn fmt_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
