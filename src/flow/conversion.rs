use super::document::FlowDocument;
use crate::error::ConversionError;

/// A trait for custom data models that can be converted into a Kaiwa
/// [`FlowDocument`].
///
/// This is the extension point for making Kaiwa format-agnostic. By
/// implementing this trait on your own configuration structs, you provide a
/// translation layer that lets the validator and converter work with your
/// custom flow format.
///
/// # Example
///
/// ```rust
/// use kaiwa::error::ConversionError;
/// use kaiwa::flow::{FlowDocument, FlowNode, IntoDocument};
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyState { name: String, utterance: String }
/// struct MyBot { entry: String, states: Vec<MyState> }
///
/// // 2. Implement `IntoDocument` for your top-level struct.
/// impl IntoDocument for MyBot {
///     fn into_document(self) -> Result<FlowDocument, ConversionError> {
///         let nodes = self
///             .states
///             .into_iter()
///             .map(|state| FlowNode {
///                 id: state.name,
///                 prompt: state.utterance,
///                 ..Default::default()
///             })
///             .collect();
///
///         Ok(FlowDocument {
///             start_node_id: self.entry,
///             nodes,
///         })
///     }
/// }
/// ```
pub trait IntoDocument {
    /// Consumes the object and converts it into a Kaiwa-compatible flow document.
    fn into_document(self) -> Result<FlowDocument, ConversionError>;
}
