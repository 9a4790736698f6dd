//! Compilation options and configuration.

use crate::layout::PageGeometry;

/// Options for compiling an HTML document into slides.
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Theme color (hex) used for Title/Section/End page backgrounds
    pub theme_color: String,

    /// Page geometry for pagination
    pub geometry: PageGeometry,
}

impl CompileOptions {
    /// Create new compile options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the theme color.
    pub fn with_theme_color(mut self, color: impl Into<String>) -> Self {
        self.theme_color = color.into();
        self
    }

    /// Set the page geometry.
    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            theme_color: "#1f4e79".to_string(),
            geometry: PageGeometry::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = CompileOptions::new().with_theme_color("#ff8800");
        assert_eq!(options.theme_color, "#ff8800");
        assert_eq!(options.geometry, PageGeometry::default());
    }
}
