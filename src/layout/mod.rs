//! Deck layout: fixed page geometry, per-block height estimation, and
//! deterministic pagination of the logical slide sequence onto pages.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::compile::CompileOptions;
use crate::css::value::color_to_hex;
use crate::model::{Block, SlideKind, SlideModel};

/// Fixed page dimensions and margins, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageGeometry {
    pub page_width_in: f32,
    pub page_height_in: f32,
    pub margin_top_in: f32,
    pub margin_bottom_in: f32,
    pub margin_side_in: f32,
    /// Vertical gap reserved below every placed block.
    pub block_gap_in: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        // 16:9 widescreen page.
        Self {
            page_width_in: 10.0,
            page_height_in: 5.625,
            margin_top_in: 0.7,
            margin_bottom_in: 0.7,
            margin_side_in: 0.7,
            block_gap_in: 0.1,
        }
    }
}

impl PageGeometry {
    /// Vertical space available for block content.
    pub fn usable_height_in(&self) -> f32 {
        self.page_height_in - self.margin_top_in - self.margin_bottom_in
    }

    /// Horizontal space available for block content.
    pub fn usable_width_in(&self) -> f32 {
        self.page_width_in - 2.0 * self.margin_side_in
    }
}

/// A block placed at a vertical position on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedBlock {
    pub x_in: f32,
    pub y_in: f32,
    pub width_in: f32,
    pub height_in: f32,
    #[serde(flatten)]
    pub block: Block,
}

/// One output page with its background and placed blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedSlide {
    pub kind: SlideKind,
    pub background_color: String,
    pub blocks: Vec<PlacedBlock>,
}

/// The fully laid-out deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub geometry: PageGeometry,
    pub theme_color: String,
    pub slides: Vec<RenderedSlide>,
}

impl Deck {
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}

/// Estimated rendered height of a block, in inches.
///
/// These are coarse per-kind estimates; tables grow with their row count
/// up to a cap so a large table still fits a page.
pub fn block_height_estimate(block: &Block) -> f32 {
    match block {
        Block::Heading { .. } => 0.85,
        Block::Paragraph { .. } => 0.75,
        Block::ListItem { .. } => 0.55,
        Block::Table { rows, .. } => (0.42 * rows.len() as f32 + 0.5).min(3.8),
    }
}

/// Paginate the logical slides onto fixed-size pages.
///
/// Blocks flow in order; a block whose footprint (estimate plus gap)
/// would cross the bottom margin starts a new page. A block too tall to
/// fit even an empty page is placed alone on a fresh page. Pages split
/// from one logical slide keep its kind and background.
pub fn paginate(slides: &[SlideModel], options: &CompileOptions) -> Deck {
    let geometry = options.geometry;
    let limit = geometry.page_height_in - geometry.margin_bottom_in;
    let mut pages = Vec::new();

    for slide in slides {
        let background = background_for(slide.kind, &options.theme_color);
        let mut page = RenderedSlide {
            kind: slide.kind,
            background_color: background.clone(),
            blocks: Vec::new(),
        };
        let mut cursor = geometry.margin_top_in;

        for block in &slide.blocks {
            let height = block_height_estimate(block);
            let footprint = height + geometry.block_gap_in;

            if cursor + footprint > limit && !page.blocks.is_empty() {
                pages.push(std::mem::replace(
                    &mut page,
                    RenderedSlide {
                        kind: slide.kind,
                        background_color: background.clone(),
                        blocks: Vec::new(),
                    },
                ));
                cursor = geometry.margin_top_in;
            }

            page.blocks.push(PlacedBlock {
                x_in: geometry.margin_side_in,
                y_in: cursor,
                width_in: geometry.usable_width_in(),
                height_in: height,
                block: block.clone(),
            });
            cursor += footprint;
        }

        if !page.blocks.is_empty() {
            pages.push(page);
        }
    }

    debug!(
        "paginated {} logical slides onto {} pages",
        slides.len(),
        pages.len()
    );
    Deck {
        geometry,
        theme_color: options.theme_color.clone(),
        slides: pages,
    }
}

/// Background color for a page: content pages are white, structural
/// pages take the theme color.
fn background_for(kind: SlideKind, theme_color: &str) -> String {
    match kind {
        SlideKind::Content => "#ffffff".to_string(),
        SlideKind::Title | SlideKind::Section | SlideKind::End => {
            color_to_hex(theme_color).unwrap_or_else(|| theme_color.to_string())
        }
    }
}
