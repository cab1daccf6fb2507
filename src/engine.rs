use crate::error::EvalError;
use crate::graph::Graph;
use crate::io::{Choice, FileExt, FileStore, PromptReader};
use crate::node::{NodeId, NodeKind};
use crate::ops::{reduce_numbers, reduce_text};
use log::{debug, error, warn};
use std::io::Write;

/// The operator's two terminal answers to a failed node evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    Retry,
    Skip,
}

/// Drives one single-threaded pass over a graph's execution queue.
///
/// Per-node evaluation is an exhaustive match over the node kind. Every
/// failure is caught at the node boundary and routed into the retry/skip
/// recovery loop, so one bad node never aborts the rest of the queue.
///
/// Collaborators are injected: `reader` for operator prompts, `store` for
/// file endpoints, `out` for console output of display and title nodes.
pub struct Engine<R, S, W> {
    pub reader: R,
    pub store: S,
    pub out: W,
}

impl<R, S, W> Engine<R, S, W>
where
    R: PromptReader,
    S: FileStore,
    W: Write,
{
    pub fn new(reader: R, store: S, out: W) -> Self {
        Self { reader, store, out }
    }

    /// Executes the graph once, top to bottom.
    ///
    /// Ids are popped from the execution queue in FIFO order and each node
    /// is evaluated through the recovery loop exactly once. There is no
    /// re-queuing and no incremental re-execution.
    pub fn run(&mut self, graph: &mut Graph) {
        while let Some(id) = graph.pop_next() {
            self.run_node(graph, id);
        }
    }

    /// The failure-recovery protocol: an explicit loop over evaluation
    /// results. Retry re-runs the node's evaluation from the beginning and
    /// may recurse indefinitely if the same error recurs; skip stores the
    /// domain default and moves on.
    fn run_node(&mut self, graph: &mut Graph, id: NodeId) {
        loop {
            match self.eval_node(graph, id) {
                Ok(()) => break,
                Err(err) => {
                    error!("node {} failed: {}", id, err);
                    match self.ask_decision(&err) {
                        Decision::Retry => continue,
                        Decision::Skip => {
                            if let Some(node) = graph.get_mut(id) {
                                node.apply_default();
                            }
                            warn!("node {} skipped, default result applied", id);
                            break;
                        }
                    }
                }
            }
        }
    }

    /// Presents the retry/skip choice for a failed evaluation. A reader
    /// that cannot answer resolves to skip, so a dead input stream cannot
    /// loop the protocol forever.
    fn ask_decision(&mut self, err: &EvalError) -> Decision {
        let prompt = format!("{}\nDo you want to retry or skip?", err);
        let choices = [Choice::new("Retry", "r"), Choice::new("Skip", "s")];
        match self.reader.choose(&prompt, &choices) {
            Some(key) if key == "r" => Decision::Retry,
            _ => Decision::Skip,
        }
    }

    /// Evaluates one node according to its kind, storing the result in the
    /// node's result slot.
    fn eval_node(&mut self, graph: &mut Graph, id: NodeId) -> Result<(), EvalError> {
        let kind = graph
            .get(id)
            .ok_or(EvalError::DependencyNotFound(id))?
            .kind
            .clone();

        match kind {
            NodeKind::NumberInput { prompt, .. } => {
                let value = self
                    .reader
                    .read_number(&prompt)
                    .ok_or_else(|| EvalError::InvalidInput("could not read a number".into()))?;
                store_number(graph, id, value)
            }

            NodeKind::TextInput { prompt, .. } => {
                let value = self
                    .reader
                    .read_text(&prompt)
                    .ok_or_else(|| EvalError::InvalidInput("could not read a text value".into()))?;
                store_text(graph, id, value)
            }

            NodeKind::FileInput {
                name, extension, ..
            } => {
                let (handle, _) = self.resolve_handle(&name, &extension)?;
                let content = self.store.read_all(handle);
                store_text(graph, id, content)
            }

            NodeKind::FloatCalc { op, deps, .. } => {
                // Zero dependencies is an intentional no-op: the default
                // result stays in place.
                if deps.is_empty() {
                    return Ok(());
                }
                let values = collect_numbers(graph, &deps)?;
                if let Some(result) = reduce_numbers(&values, op) {
                    store_number(graph, id, result)?;
                }
                Ok(())
            }

            NodeKind::StringCalc { op, deps, .. } => {
                if deps.is_empty() {
                    return Ok(());
                }
                let values = collect_texts(graph, &deps, EvalError::DependencyNotFound)?;
                if let Some(result) = reduce_text(&values, op) {
                    store_text(graph, id, result)?;
                }
                Ok(())
            }

            NodeKind::Display { deps } => {
                let values = collect_texts(graph, &deps, EvalError::missing_dep_input)?;
                writeln!(self.out, "{}", values.join(" ")).map_err(|err| {
                    EvalError::InvalidInput(format!("console write failed: {}", err))
                })
            }

            NodeKind::Output {
                file_name,
                extension,
                title,
                description,
                deps,
            } => {
                let (handle, ext) = self.resolve_handle(&file_name, &extension)?;
                let values = collect_texts(graph, &deps, EvalError::missing_dep_input)?;

                let mut body = String::new();
                body.push_str(&title);
                body.push('\n');
                body.push_str(&description);
                body.push('\n');
                if !values.is_empty() {
                    body.push_str(&values.join(ext.delimiter()));
                    body.push('\n');
                }

                if !self.store.write(handle, &body) {
                    return Err(EvalError::InvalidHandle(format!(
                        "write to '{}{}' was refused",
                        file_name,
                        ext.suffix()
                    )));
                }
                if !self.store.persist(handle) {
                    return Err(EvalError::InvalidHandle(format!(
                        "could not persist '{}{}'",
                        file_name,
                        ext.suffix()
                    )));
                }
                Ok(())
            }

            NodeKind::Title { title, body } | NodeKind::Text { title, body } => {
                // Fixed side effect, no failure path: a refused console
                // write is dropped rather than routed into recovery.
                let _ = writeln!(self.out, "{}\n{}", title, body);
                Ok(())
            }

            NodeKind::End => {
                debug!("flow run complete at node {}", id);
                Ok(())
            }
        }
    }

    /// Translates a node's extension string and resolves the store handle.
    fn resolve_handle(
        &mut self,
        name: &str,
        extension: &str,
    ) -> Result<(usize, FileExt), EvalError> {
        let ext = FileExt::from_extension(extension).ok_or_else(|| {
            EvalError::InvalidHandle(format!("unrecognized extension '{}'", extension))
        })?;
        let handle = self
            .store
            .handle(name, ext)
            .ok_or_else(|| EvalError::InvalidHandle(format!("no handle for '{}'", name)))?;
        Ok((handle, ext))
    }
}

fn store_number(graph: &mut Graph, id: NodeId, value: f64) -> Result<(), EvalError> {
    graph
        .get_mut(id)
        .ok_or(EvalError::DependencyNotFound(id))?
        .store_number(value);
    Ok(())
}

fn store_text(graph: &mut Graph, id: NodeId, value: String) -> Result<(), EvalError> {
    graph
        .get_mut(id)
        .ok_or(EvalError::DependencyNotFound(id))?
        .store_text(value);
    Ok(())
}

/// Resolves float-calculus dependencies.
///
/// Each id must be registered and must expose a float result (number input
/// or float calculus); any other kind in the encountered set fails the
/// whole resolution with a type mismatch listing what was found.
fn collect_numbers(graph: &Graph, deps: &[NodeId]) -> Result<Vec<f64>, EvalError> {
    let mut values = Vec::with_capacity(deps.len());
    let mut offending: Vec<&'static str> = Vec::new();

    for &dep in deps {
        let node = graph.get(dep).ok_or(EvalError::DependencyNotFound(dep))?;
        match node.number_value() {
            Some(value) => values.push(value),
            None => offending.push(node.kind_name()),
        }
    }

    if !offending.is_empty() {
        offending.sort_unstable();
        offending.dedup();
        return Err(EvalError::TypeMismatch {
            expected: "NumberInput or FloatCalc".to_string(),
            found: offending.join(", "),
        });
    }
    Ok(values)
}

/// Resolves dependencies as text via the displayable capability.
///
/// A registered node without textual content contributes an empty string
/// rather than failing; a missing id fails with the error the caller
/// chooses (`DependencyNotFound` for calculus nodes, `InvalidInput` for
/// the I/O endpoints).
fn collect_texts(
    graph: &Graph,
    deps: &[NodeId],
    on_missing: impl Fn(NodeId) -> EvalError,
) -> Result<Vec<String>, EvalError> {
    deps.iter()
        .map(|&dep| {
            graph
                .get(dep)
                .map(|node| node.display_text().unwrap_or_default())
                .ok_or_else(|| on_missing(dep))
        })
        .collect()
}
