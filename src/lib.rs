//! # Kaiwa - Conversational Flow Graph Engine
//!
//! **Kaiwa** models directed conversational flow graphs: nodes are dialogue
//! states carrying a prompt and a description, edges are labeled transitions
//! guarded by a condition with optional parameters, and exactly one node is
//! designated the start state. The crate provides the canonical document
//! model, a lossless bidirectional converter between that model and a
//! positioned (renderable) graph, and a structural validator.
//!
//! ## Core Workflow
//!
//! The engine is presentation-agnostic. It operates on a canonical
//! [`FlowDocument`](flow::FlowDocument) and its positioned projection,
//! the [`CanvasGraph`](canvas::CanvasGraph). The primary workflow is:
//!
//! 1.  **Import**: Parse a flow JSON document into a `FlowDocument`
//!     (or implement [`IntoDocument`](flow::IntoDocument) for your own format).
//! 2.  **Project**: Use `CanvasGraph::from_document` to obtain a positioned
//!     graph suitable for rendering and interactive editing.
//! 3.  **Edit**: Mutate the graph through a [`FlowEditor`](editor::FlowEditor),
//!     which keeps selection and start-node state consistent across edits.
//! 4.  **Flatten & Validate**: On every change, flatten the graph back into a
//!     `FlowDocument` and run [`validate`](validation::validate) over it. All
//!     violations come back as data, never as panics, so validation can run
//!     continuously.
//!
//! ## Quick Start
//!
//! ```rust
//! use kaiwa::prelude::*;
//!
//! let json = r#"{
//!     "start_node_id": "greeting",
//!     "nodes": [
//!         {
//!             "id": "greeting",
//!             "description": "Opening state",
//!             "prompt": "Hello! How can I help you today?",
//!             "edges": [
//!                 { "to_node_id": "farewell", "condition": "user wants to leave" }
//!             ]
//!         },
//!         {
//!             "id": "farewell",
//!             "description": "Closing state",
//!             "prompt": "Goodbye!",
//!             "edges": []
//!         }
//!     ]
//! }"#;
//!
//! // 1. Import the canonical document.
//! let document = FlowDocument::from_json(json)?;
//!
//! // 2. Project it onto a canvas for editing.
//! let canvas = CanvasGraph::from_document(&document);
//! assert_eq!(canvas.nodes.len(), 2);
//!
//! // 3. Flatten back and validate. A well-formed flow yields no errors.
//! let flattened = canvas.to_document();
//! assert_eq!(flattened, document);
//! assert!(validate(&flattened).is_empty());
//! # Ok::<(), kaiwa::error::ImportError>(())
//! ```

pub mod canvas;
pub mod editor;
pub mod error;
pub mod flow;
pub mod prelude;
pub mod validation;
