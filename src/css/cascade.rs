//! Cascade resolution: tag defaults, inheritance, matched rules, and
//! inline styles folded into one [`ResolvedStyle`] per element.

use std::collections::HashMap;

use crate::dom::{DomArena, NodeId};
use crate::model::{FontStyle, ResolvedStyle, TextAlign};

use super::rules::{parse_declarations, RuleStore};
use super::selector;
use super::value::{color_to_hex, length_to_px};

/// Baseline style a tag contributes before the cascade.
///
/// `None` for an inheritable key means the parent's resolved value flows
/// through; the known block tags pin their own size, weight, and color.
struct TagDefault {
    font_size_px: Option<f32>,
    font_weight: Option<u16>,
    color: Option<&'static str>,
    margin_top_px: f32,
    margin_bottom_px: f32,
}

fn tag_default(tag: &str) -> TagDefault {
    let pinned = |size, weight, top, bottom| TagDefault {
        font_size_px: Some(size),
        font_weight: Some(weight),
        color: Some("#111111"),
        margin_top_px: top,
        margin_bottom_px: bottom,
    };
    match tag {
        "h1" => pinned(42.0, 800, 14.0, 10.0),
        "h2" => pinned(34.0, 700, 12.0, 8.0),
        "h3" => pinned(28.0, 700, 10.0, 6.0),
        "h4" => pinned(24.0, 600, 8.0, 6.0),
        "h5" => pinned(20.0, 600, 8.0, 4.0),
        "h6" => pinned(18.0, 600, 6.0, 4.0),
        "p" => pinned(16.0, 400, 6.0, 6.0),
        "li" => pinned(16.0, 400, 3.0, 3.0),
        "table" => pinned(14.0, 400, 6.0, 6.0),
        // Generic fallback: inheritable keys stay unset so wrapper
        // elements pass their parent's values through.
        _ => TagDefault {
            font_size_px: None,
            font_weight: None,
            color: None,
            margin_top_px: 0.0,
            margin_bottom_px: 0.0,
        },
    }
}

/// Resolves effective styles for elements of one document.
///
/// Results are memoized by node index; the cache lives for one
/// compilation and is discarded with the resolver. Parents always resolve
/// before their children so inheritance reads settled values.
pub struct StyleResolver<'a> {
    arena: &'a DomArena,
    rules: &'a RuleStore,
    cache: HashMap<NodeId, ResolvedStyle>,
}

impl<'a> StyleResolver<'a> {
    /// Create a resolver over one arena and rule store.
    pub fn new(arena: &'a DomArena, rules: &'a RuleStore) -> Self {
        Self {
            arena,
            rules,
            cache: HashMap::new(),
        }
    }

    /// Resolve the effective style of an element.
    ///
    /// Non-element nodes get the base default style.
    pub fn resolve(&mut self, node: NodeId) -> ResolvedStyle {
        if let Some(cached) = self.cache.get(&node) {
            return cached.clone();
        }
        let style = self.compute(node);
        self.cache.insert(node, style.clone());
        style
    }

    /// Resolved style of the node's parent element, or the base default.
    pub fn resolve_parent(&mut self, node: NodeId) -> ResolvedStyle {
        match self.arena.parent_element(node) {
            Some(parent) => self.resolve(parent),
            None => ResolvedStyle::default(),
        }
    }

    fn compute(&mut self, node: NodeId) -> ResolvedStyle {
        let Some(el) = self.arena.element(node) else {
            return ResolvedStyle::default();
        };
        let parent = self
            .arena
            .parent_element(node)
            .map(|p| self.resolve(p));

        let d = tag_default(&el.tag_name);
        let base = ResolvedStyle::default();
        let inherit = parent.as_ref().unwrap_or(&base);

        let mut style = ResolvedStyle {
            color: d
                .color
                .map(str::to_string)
                .unwrap_or_else(|| inherit.color.clone()),
            font_size_px: d.font_size_px.unwrap_or(inherit.font_size_px),
            font_weight: d.font_weight.unwrap_or(inherit.font_weight),
            // Never pinned by a tag default, so always inherited.
            font_style: inherit.font_style,
            text_align: inherit.text_align,
            // Non-inheritable keys reset to the tag default.
            background_color: None,
            text_decoration: None,
            margin_top_px: d.margin_top_px,
            margin_bottom_px: d.margin_bottom_px,
            text_align_set: false,
        };

        // Matched rules fold in ascending (specificity, order), so the
        // strongest match ends up winning each property.
        let mut matched: Vec<_> = self
            .rules
            .rules()
            .iter()
            .filter(|rule| selector::matches(self.arena, node, &rule.selector))
            .collect();
        matched.sort_by_key(|rule| (rule.specificity, rule.order));
        for rule in matched {
            for (prop, value) in &rule.declarations {
                apply_declaration(&mut style, prop, value);
            }
        }

        // Inline style beats any matched rule regardless of specificity.
        if let Some(inline) = el.attr("style") {
            for (prop, value) in parse_declarations(inline) {
                apply_declaration(&mut style, &prop, &value);
            }
        }

        // Legacy align attribute only fills in when no declaration did.
        if !style.text_align_set {
            if let Some(align) = el.attr("align") {
                if let Some(align) = parse_text_align(align) {
                    style.text_align = align;
                }
            }
        }

        style
    }
}

/// Apply one declaration onto the working style.
///
/// Length values resolve against the *current* working font size, before
/// the declaration lands; unrecognized syntax leaves the property as-is.
fn apply_declaration(style: &mut ResolvedStyle, prop: &str, value: &str) {
    match prop {
        "color" => {
            if let Some(hex) = color_to_hex(value) {
                style.color = hex;
            }
        }
        "background-color" => {
            if let Some(hex) = color_to_hex(value) {
                style.background_color = Some(hex);
            }
        }
        "font-size" => {
            if let Some(px) = length_to_px(value, style.font_size_px) {
                style.font_size_px = px;
            }
        }
        "font-weight" => {
            if let Some(weight) = parse_font_weight(value) {
                style.font_weight = weight;
            }
        }
        "font-style" => match value.trim().to_ascii_lowercase().as_str() {
            "italic" | "oblique" => style.font_style = FontStyle::Italic,
            "normal" => style.font_style = FontStyle::Normal,
            _ => {}
        },
        "text-decoration" | "text-decoration-line" => {
            let value = value.trim().to_ascii_lowercase();
            style.text_decoration = if value == "none" { None } else { Some(value) };
        }
        "text-align" => {
            if let Some(align) = parse_text_align(value) {
                style.text_align = align;
                style.text_align_set = true;
            }
        }
        "margin-top" => {
            if let Some(px) = length_to_px(value, style.font_size_px) {
                style.margin_top_px = px;
            }
        }
        "margin-bottom" => {
            if let Some(px) = length_to_px(value, style.font_size_px) {
                style.margin_bottom_px = px;
            }
        }
        _ => {}
    }
}

fn parse_font_weight(value: &str) -> Option<u16> {
    match value.trim().to_ascii_lowercase().as_str() {
        "normal" => Some(400),
        "bold" | "bolder" => Some(700),
        "lighter" => Some(300),
        other => other
            .parse::<f32>()
            .ok()
            .filter(|w| (1.0..=1000.0).contains(w))
            .map(|w| w as u16),
    }
}

fn parse_text_align(value: &str) -> Option<TextAlign> {
    match value.trim().to_ascii_lowercase().as_str() {
        "left" => Some(TextAlign::Left),
        "center" => Some(TextAlign::Center),
        "right" => Some(TextAlign::Right),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    fn resolve_tag(html: &str, css: &str, tag: &str) -> ResolvedStyle {
        let arena = parse_html(html).unwrap();
        let rules = RuleStore::parse(css);
        let mut resolver = StyleResolver::new(&arena, &rules);
        let node = arena.find_first(tag).unwrap();
        resolver.resolve(node)
    }

    #[test]
    fn test_tag_defaults() {
        let h1 = resolve_tag("<h1>x</h1>", "", "h1");
        assert_eq!(h1.font_size_px, 42.0);
        assert_eq!(h1.font_weight, 800);

        let p = resolve_tag("<p>x</p>", "", "p");
        assert_eq!(p.font_size_px, 16.0);
        assert_eq!(p.margin_top_px, 6.0);
        assert_eq!(p.color, "#111111");
    }

    #[test]
    fn test_class_rule_overrides_default() {
        let p = resolve_tag(r#"<p class="note">x</p>"#, ".note { color: green }", "p");
        assert_eq!(p.color, "#008000");
    }

    #[test]
    fn test_specificity_beats_order() {
        let p = resolve_tag(
            r#"<p class="note">x</p>"#,
            ".note { color: #ff0000 } p { color: #0000ff }",
            "p",
        );
        assert_eq!(p.color, "#ff0000");
    }

    #[test]
    fn test_equal_specificity_later_wins() {
        let p = resolve_tag(
            "<p>x</p>",
            "p { color: #ff0000 } p { color: #0000ff }",
            "p",
        );
        assert_eq!(p.color, "#0000ff");
    }

    #[test]
    fn test_inline_beats_everything() {
        let p = resolve_tag(
            r#"<p id="a" style="color: #00ff00">x</p>"#,
            "#a { color: #ff0000 }",
            "p",
        );
        assert_eq!(p.color, "#00ff00");
    }

    #[test]
    fn test_inheritance_through_generic_wrapper() {
        let span = resolve_tag(
            r#"<div class="brand"><span>x</span></div>"#,
            ".brand { color: #123456; font-size: 20px }",
            "span",
        );
        assert_eq!(span.color, "#123456");
        assert_eq!(span.font_size_px, 20.0);
    }

    #[test]
    fn test_heading_does_not_inherit_parent_size() {
        let h2 = resolve_tag(
            r#"<div style="font-size: 10px"><h2>x</h2></div>"#,
            "",
            "h2",
        );
        assert_eq!(h2.font_size_px, 34.0);
    }

    #[test]
    fn test_em_resolves_against_working_size() {
        // font-size lands first, then the margin resolves against it.
        let p = resolve_tag(
            "<p>x</p>",
            "p { font-size: 20px; margin-top: 2em }",
            "p",
        );
        assert_eq!(p.font_size_px, 20.0);
        assert_eq!(p.margin_top_px, 40.0);
    }

    #[test]
    fn test_font_size_em_uses_base_before_update() {
        // 2em is read against the 16px tag default, not against itself.
        let p = resolve_tag("<p>x</p>", "p { font-size: 2em }", "p");
        assert_eq!(p.font_size_px, 32.0);
    }

    #[test]
    fn test_align_attribute_fallback() {
        let p = resolve_tag(r#"<p align="center">x</p>"#, "", "p");
        assert_eq!(p.text_align, TextAlign::Center);

        let p = resolve_tag(
            r#"<p align="center">x</p>"#,
            "p { text-align: right }",
            "p",
        );
        assert_eq!(p.text_align, TextAlign::Right);
    }

    #[test]
    fn test_unknown_values_leave_property_unset() {
        let p = resolve_tag(
            "<p>x</p>",
            "p { color: hsl(1,2%,3%); font-size: auto }",
            "p",
        );
        assert_eq!(p.color, "#111111");
        assert_eq!(p.font_size_px, 16.0);
    }

    #[test]
    fn test_memoization_is_stable() {
        let arena = parse_html("<p>x</p>").unwrap();
        let rules = RuleStore::parse("p { color: red }");
        let mut resolver = StyleResolver::new(&arena, &rules);
        let p = arena.find_first("p").unwrap();
        let first = resolver.resolve(p);
        let second = resolver.resolve(p);
        assert_eq!(first, second);
    }
}
