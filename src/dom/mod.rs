//! Immutable DOM representation.
//!
//! HTML is parsed once into a flat arena of nodes with stable integer
//! indices. Parent and child links are index tables built during parsing;
//! nothing mutates the tree afterward, so the style resolver, block
//! extractor, and run builder can all read it freely.

mod arena;
mod parser;

pub use arena::{DomArena, ElementData, NodeData, NodeId};
pub use parser::parse_html;
