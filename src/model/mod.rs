//! Slide model types.
//!
//! This module defines the intermediate representation that bridges HTML
//! compilation and presentation rendering: resolved visual styles, typed
//! content blocks with inline text runs, and logical slides. The model is
//! what the external presentation renderer consumes.

mod block;
mod slide;
mod style;

pub use block::{Block, ListKind, RunFormat, TextRun};
pub use slide::{SlideKind, SlideModel};
pub use style::{FontStyle, ResolvedStyle, TextAlign};
