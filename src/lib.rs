//! # Nagare - Interactive Dataflow Graph Execution Engine
//!
//! **Nagare** assembles a small directed dataflow graph out of
//! interactively-entered values, computed aggregates and file/console I/O
//! endpoints, then executes it exactly once, top to bottom. Nodes reference
//! each other by id only; the [`Graph`](graph::Graph) is the sole owner of
//! every node, and execution order is registration order.
//!
//! ## Core Workflow
//!
//! 1. **Build a graph**: register [`Node`](node::Node)s in dependency-safe
//!    order, either by hand, through your own builder, or from a JSON
//!    [`FlowDefinition`](flow::FlowDefinition) document.
//! 2. **Inject collaborators**: the engine talks to the operator through
//!    the [`PromptReader`](io::PromptReader) trait and to files through
//!    [`FileStore`](io::FileStore); console and directory-backed
//!    implementations are provided.
//! 3. **Run**: [`Engine::run`](engine::Engine::run) evaluates every node
//!    once. A failed node is caught at its boundary and the operator picks
//!    retry or skip; one node's failure never aborts the rest of the queue.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nagare::prelude::*;
//!
//! fn main() {
//!     let mut ids = NodeIdGen::new();
//!     let first = ids.next_id();
//!     let second = ids.next_id();
//!     let sum = ids.next_id();
//!
//!     let mut graph = Graph::new();
//!     graph.register(Node::number_input(first, "Enter first number: "));
//!     graph.register(Node::number_input(second, "Enter second number: "));
//!     graph.register(Node::float_calc(sum, Op::Add, vec![first, second]));
//!
//!     let mut engine = Engine::new(
//!         ConsoleReader::new(),
//!         DirStore::new("out"),
//!         std::io::stdout(),
//!     );
//!     engine.run(&mut graph);
//!
//!     let result = graph.get(sum).and_then(|node| node.number_value());
//!     println!("Sum: {:?}", result);
//! }
//! ```

pub mod engine;
pub mod error;
pub mod flow;
pub mod graph;
pub mod io;
pub mod node;
pub mod ops;
pub mod prelude;
