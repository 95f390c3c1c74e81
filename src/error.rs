use thiserror::Error;

/// Errors that can occur when bringing external flow data into the engine.
///
/// Parsing raw text is the one place the core can fail on malformed input;
/// everything past this boundary works on well-typed documents and reports
/// problems as [`ValidationError`](crate::validation::ValidationError) values
/// instead of error returns.
#[derive(Error, Debug, Clone)]
pub enum ImportError {
    #[error("Failed to parse flow JSON: {0}")]
    JsonParse(String),

    #[error("Failed to read flow file '{path}': {message}")]
    FileRead { path: String, message: String },
}

/// Errors that can occur when an editor operation targets a missing element.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("Node '{node_id}' not found in the current graph")]
    NodeNotFound { node_id: String },

    #[error("Edge '{edge_id}' not found in the current graph")]
    EdgeNotFound { edge_id: String },
}

/// Errors that can occur when converting a custom user format into a
/// Kaiwa [`FlowDocument`](crate::flow::FlowDocument).
#[derive(Error, Debug, Clone)]
pub enum ConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}
