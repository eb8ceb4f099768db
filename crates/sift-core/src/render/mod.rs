//! Structured data rendering.
//!
//! Turns artifact contents into hierarchical view models without knowing
//! their schema. Everything here is a pure function of its input: the same
//! value always yields an equal tree, and nothing touches the filesystem.
//!
//! # Module Structure
//!
//! - `shape`: Classification of a JSON value into a closed set of shapes
//! - `label`: Display labels for object keys
//! - `tree`: Arena-backed render tree, its builder and a display-order walk
//! - `document`: Heading outline of the markdown discussion document

pub mod document;
mod label;
mod shape;
mod tree;

pub use document::{Block, DocumentOutline, Section, outline};
pub use label::humanize_key;
pub use shape::{LONG_TEXT_THRESHOLD, PrimitiveView, Shape, classify, is_scalar};
pub use tree::{FieldEntry, ListEntry, NodeId, RenderNode, RenderTree, Slot, Walk, WalkItem};

/// Renders a JSON value into its display tree.
pub fn render(value: &serde_json::Value) -> RenderTree {
    RenderTree::build(value)
}
