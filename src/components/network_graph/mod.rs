//! Transaction-network visualization component.
//!
//! Turns an [`AnalysisResult`] produced by the external detection service
//! into an interactive force-directed graph on an HTML canvas:
//! - Pure derivation of visual elements (colors, sizes, borders keyed off
//!   suspicion status) from the raw node/edge lists
//! - One-shot spring-embedder layout, then pan, zoom, and node dragging
//! - A fixed legend overlay and a placeholder empty state
//!
//! Element derivation is a pure function of the input; dangling edge
//! references and duplicate account ids degrade gracefully instead of
//! failing.

mod component;
mod elements;
mod render;
mod state;
pub mod style;
mod types;

pub use component::NetworkGraph;
pub use elements::{Classification, GraphElements, VisualEdge, VisualNode, derive_elements};
pub use types::{
	AccountNode, AnalysisResult, FraudRing, Summary, TransactionEdge, TransactionGraph,
};
