//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! kaiwa crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use kaiwa::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load a flow document and validate it
//! let document = FlowDocument::from_file("path/to/flow.json")?;
//! let errors = validate(&document);
//!
//! // Project it onto a canvas for editing
//! let canvas = CanvasGraph::from_document(&document);
//!
//! println!("{} nodes, {} violations", canvas.nodes.len(), errors.len());
//! # Ok(())
//! # }
//! ```

// Canonical document model
pub use crate::flow::{FlowDocument, FlowEdge, FlowNode, IntoDocument};

// Positioned graph and converter
pub use crate::canvas::{CanvasEdge, CanvasGraph, CanvasNode, Position, UNSET_CONDITION_LABEL};

// Validation
pub use crate::validation::{ValidationError, validate};

// Edit layer
pub use crate::editor::FlowEditor;

// Error types
pub use crate::error::{ConversionError, EditError, ImportError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
