//! # slidec
//!
//! A compiler from styled HTML documents to slide-deck models.
//!
//! The pipeline parses HTML into an immutable node arena, resolves the
//! effective style of every element through a CSS cascade (embedded
//! `<style>` sheets, inline `style` attributes, and tag defaults),
//! groups the content into logical slides, flattens inline markup into
//! formatted text runs, and finally paginates the slides onto fixed
//! 10in x 5.625in pages.
//!
//! ## Quick start
//!
//! ```
//! let html = "<h1>Quarterly Review</h1><p>Revenue is up.</p>";
//! let slides = slidec::compile(html).unwrap();
//! assert_eq!(slides.len(), 1);
//! ```
//!
//! ## Builder API
//!
//! ```
//! use slidec::{JsonFormat, Slidec};
//!
//! let result = Slidec::new()
//!     .theme_color("#2e7d32")
//!     .compile("<h1>Title</h1><p>Body</p>")
//!     .unwrap();
//! let json = result.to_json(JsonFormat::Compact).unwrap();
//! assert!(json.contains("\"slides\""));
//! ```

pub mod compile;
pub mod css;
pub mod dom;
pub mod error;
pub mod layout;
pub mod model;
pub mod render;

pub use compile::CompileOptions;
pub use error::{Error, Result};
pub use layout::{block_height_estimate, paginate, Deck, PageGeometry, PlacedBlock, RenderedSlide};
pub use model::{Block, FontStyle, ListKind, ResolvedStyle, RunFormat, SlideKind, SlideModel, TextAlign, TextRun};
pub use render::{to_json, JsonFormat};

use compile::BlockExtractor;
use css::RuleStore;
use dom::parse_html;

/// Compile HTML into logical slides with default options.
pub fn compile(html: &str) -> Result<Vec<SlideModel>> {
    compile_with_options(html, &CompileOptions::default())
}

/// Compile HTML into logical slides.
///
/// Returns [`Error::NoSlides`] when the document contains no
/// recognizable content.
pub fn compile_with_options(html: &str, _options: &CompileOptions) -> Result<Vec<SlideModel>> {
    compile_document(html)
}

/// Compile HTML and paginate the result into a [`Deck`].
pub fn build_deck(html: &str, options: &CompileOptions) -> Result<Deck> {
    let slides = compile_document(html)?;
    Ok(paginate(&slides, options))
}

fn compile_document(html: &str) -> Result<Vec<SlideModel>> {
    let arena = parse_html(html)?;

    let mut rules = RuleStore::new();
    for node in arena.descendants(arena.root()) {
        if arena.tag_name(node) == Some("style") {
            rules.add_sheet(&arena.text_within(node));
        }
    }
    log::debug!("collected {} style rules", rules.len());

    let slides = BlockExtractor::new(&arena, &rules).extract();
    if slides.is_empty() {
        return Err(Error::NoSlides);
    }
    Ok(slides)
}

/// Builder-style entry point mirroring [`CompileOptions`].
#[derive(Debug, Clone, Default)]
pub struct Slidec {
    options: CompileOptions,
}

impl Slidec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Theme color for title, section, and end page backgrounds.
    pub fn theme_color(mut self, color: impl Into<String>) -> Self {
        self.options.theme_color = color.into();
        self
    }

    /// Page geometry used by pagination.
    pub fn geometry(mut self, geometry: PageGeometry) -> Self {
        self.options.geometry = geometry;
        self
    }

    /// Run the full pipeline on one document.
    pub fn compile(&self, html: &str) -> Result<SlidecResult> {
        let slides = compile_document(html)?;
        let deck = paginate(&slides, &self.options);
        Ok(SlidecResult { slides, deck })
    }
}

/// The outcome of a [`Slidec`] compilation: the logical slides and the
/// paginated deck built from them.
#[derive(Debug, Clone)]
pub struct SlidecResult {
    slides: Vec<SlideModel>,
    deck: Deck,
}

impl SlidecResult {
    /// Logical slides, before pagination.
    pub fn slides(&self) -> &[SlideModel] {
        &self.slides
    }

    /// The paginated deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Serialize the deck to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        to_json(&self.deck, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_simple_document() {
        let slides = compile("<h1>Hello</h1><p>World</p>").unwrap();
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].block_count(), 2);
    }

    #[test]
    fn test_empty_document_is_no_slides() {
        assert!(matches!(compile(""), Err(Error::NoSlides)));
        assert!(matches!(
            compile("<script>var x;</script>"),
            Err(Error::NoSlides)
        ));
    }

    #[test]
    fn test_style_element_feeds_cascade() {
        let slides = compile(
            "<style>p { color: #ff0000 }</style><section><p>red</p></section>",
        )
        .unwrap();
        match &slides[0].blocks[0] {
            Block::Paragraph { style, .. } => assert_eq!(style.color, "#ff0000"),
            other => panic!("expected paragraph, got {:?}", other),
        }
    }

    #[test]
    fn test_builder_round_trip() {
        let result = Slidec::new()
            .theme_color("#112233")
            .compile("<div class='slide title-slide'><h1>T</h1></div>")
            .unwrap();
        assert_eq!(result.slides().len(), 1);
        assert_eq!(result.deck().slides[0].background_color, "#112233");
    }
}
