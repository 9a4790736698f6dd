//! Content blocks and inline text runs.

use serde::{Deserialize, Serialize};

use super::ResolvedStyle;

/// Formatting of one inline text run.
///
/// Every field is optional: an unset key means "whatever the renderer's
/// baseline is", which keeps plain text runs at the empty format and lets
/// adjacent runs merge aggressively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunFormat {
    /// Bold text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,

    /// Italic text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,

    /// Underlined text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,

    /// Text color as 6-digit hex
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_hex: Option<String>,

    /// Font size in points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size_pt: Option<u32>,
}

impl RunFormat {
    /// Check whether no formatting key is set.
    pub fn is_plain(&self) -> bool {
        *self == RunFormat::default()
    }

    /// Overlay `local` onto this format; local values win per key.
    pub fn merged_with(&self, local: &RunFormat) -> RunFormat {
        RunFormat {
            bold: local.bold.or(self.bold),
            italic: local.italic.or(self.italic),
            underline: local.underline.or(self.underline),
            color_hex: local.color_hex.clone().or_else(|| self.color_hex.clone()),
            font_size_pt: local.font_size_pt.or(self.font_size_pt),
        }
    }
}

/// A contiguous span of text sharing one formatting combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content; never empty
    pub text: String,

    /// Formatting of this run
    pub format: RunFormat,
}

impl TextRun {
    /// Create a new text run.
    pub fn new(text: impl Into<String>, format: RunFormat) -> Self {
        Self {
            text: text.into(),
            format,
        }
    }

    /// Create an unformatted run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, RunFormat::default())
    }
}

/// Kind of list an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// Bulleted (`<ul>`)
    Unordered,
    /// Numbered (`<ol>`)
    Ordered,
}

/// One paginatable unit of slide content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A heading (h1-h6)
    Heading {
        /// Heading level, 1-6
        level: u8,
        /// Normalized plain text
        text: String,
        /// Inline runs
        runs: Vec<TextRun>,
        /// Resolved style of the heading element
        style: ResolvedStyle,
    },

    /// A paragraph
    Paragraph {
        /// Normalized plain text
        text: String,
        /// Inline runs
        runs: Vec<TextRun>,
        /// Resolved style of the paragraph element
        style: ResolvedStyle,
    },

    /// A list item
    ListItem {
        /// Normalized plain text
        text: String,
        /// Nesting depth; 1 = top level
        list_level: u8,
        /// Bulleted or numbered
        list_kind: ListKind,
        /// Inline runs
        runs: Vec<TextRun>,
        /// Resolved style of the `<li>` element
        style: ResolvedStyle,
    },

    /// A table as a rectangular matrix of cell strings
    Table {
        /// Rows, right-padded to equal width
        rows: Vec<Vec<String>>,
        /// Resolved style of the `<table>` element
        style: ResolvedStyle,
    },
}

impl Block {
    /// Get the plain text content of the block.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Heading { text, .. }
            | Block::Paragraph { text, .. }
            | Block::ListItem { text, .. } => text.clone(),
            Block::Table { rows, .. } => rows
                .iter()
                .map(|row| row.join("\t"))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Get the resolved style of the block's source element.
    pub fn style(&self) -> &ResolvedStyle {
        match self {
            Block::Heading { style, .. }
            | Block::Paragraph { style, .. }
            | Block::ListItem { style, .. }
            | Block::Table { style, .. } => style,
        }
    }

    /// Check if this block is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading { .. })
    }

    /// Check if this block is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table { .. })
    }
}
