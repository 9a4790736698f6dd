//! Resolved visual style for an element.

use serde::{Deserialize, Serialize};

/// Font slant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// Upright text (default)
    #[default]
    Normal,
    /// Italic or oblique text
    Italic,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
}

/// The effective style of an element after the cascade.
///
/// Computed once per element by the
/// [`StyleResolver`](crate::css::StyleResolver) and immutable afterward.
/// Only `color`, `font_size_px`, `font_weight`, `font_style`, and
/// `text_align` inherit; the rest reset to the tag default unless set on
/// the element itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedStyle {
    /// Text color as 6-digit lowercase hex (e.g., "#111111")
    pub color: String,

    /// Background color, if explicitly set
    pub background_color: Option<String>,

    /// Font size in CSS pixels
    pub font_size_px: f32,

    /// Font weight (400 = normal, 700 = bold)
    pub font_weight: u16,

    /// Font slant
    pub font_style: FontStyle,

    /// Raw `text-decoration` value, if set (checked for "underline")
    pub text_decoration: Option<String>,

    /// Horizontal alignment
    pub text_align: TextAlign,

    /// Top margin in CSS pixels
    pub margin_top_px: f32,

    /// Bottom margin in CSS pixels
    pub margin_bottom_px: f32,

    /// Whether a `text-align` declaration was applied during the cascade.
    /// Used to decide whether a legacy `align` attribute may supply the
    /// alignment instead.
    #[serde(skip)]
    pub(crate) text_align_set: bool,
}

impl ResolvedStyle {
    /// Check whether the effective weight reads as bold.
    pub fn is_bold(&self) -> bool {
        self.font_weight >= 600
    }

    /// Check whether the effective slant is italic.
    pub fn is_italic(&self) -> bool {
        self.font_style == FontStyle::Italic
    }

    /// Check whether the text decoration includes an underline.
    pub fn is_underlined(&self) -> bool {
        self.text_decoration
            .as_deref()
            .is_some_and(|d| d.contains("underline"))
    }

    /// Font size in typographic points, rounded.
    pub fn font_size_pt(&self) -> u32 {
        (self.font_size_px * 0.75).round() as u32
    }
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        Self {
            color: "#111111".to_string(),
            background_color: None,
            font_size_px: 16.0,
            font_weight: 400,
            font_style: FontStyle::Normal,
            text_decoration: None,
            text_align: TextAlign::Left,
            margin_top_px: 0.0,
            margin_bottom_px: 0.0,
            text_align_set: false,
        }
    }
}
