//! Logical slide types.

use serde::{Deserialize, Serialize};

use super::Block;

/// The role of a slide, which decides its page background.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideKind {
    /// Opening slide
    Title,
    /// Section divider
    Section,
    /// Regular content slide (default)
    #[default]
    Content,
    /// Closing slide
    End,
}

/// One logical slide's content before physical pagination.
///
/// Created by the block extractor at slide boundaries and discarded if it
/// ends up with zero blocks. Read-only once handed to the pagination
/// engine, which may spread it over several physical pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideModel {
    /// Slide role
    pub kind: SlideKind,

    /// Content blocks in document order
    pub blocks: Vec<Block>,
}

impl SlideModel {
    /// Create a new empty slide.
    pub fn new(kind: SlideKind) -> Self {
        Self {
            kind,
            blocks: Vec::new(),
        }
    }

    /// Add a block to the slide.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Check if the slide has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get the number of blocks on the slide.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Get the plain text of all blocks, separated by blank lines.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| b.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
