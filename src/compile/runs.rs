//! Inline run building: flattening a block's subtree into formatted text
//! runs.

use crate::css::StyleResolver;
use crate::dom::{DomArena, NodeData, NodeId};
use crate::model::{RunFormat, TextRun};

use super::text::collapse_inline_ws;

/// Collect the inline text runs of a block element's subtree.
///
/// Text nodes emit one run with the inherited formatting; `<br>` emits a
/// `"\n"` run; elements derive their local formatting from tag semantics
/// and their resolved style, merge it onto the inherited formatting
/// (local wins), and recurse. A `<div>` emits a trailing `"\n"` with the
/// formatting that was inherited *into* it. Adjacent runs with identical
/// formatting are coalesced and empty runs never survive.
pub fn collect_runs(
    arena: &DomArena,
    resolver: &mut StyleResolver<'_>,
    node: NodeId,
    inherited: &RunFormat,
) -> Vec<TextRun> {
    let mut runs = Vec::new();
    collect_into(arena, resolver, node, inherited, &mut runs);
    merge_adjacent(runs)
}

fn collect_into(
    arena: &DomArena,
    resolver: &mut StyleResolver<'_>,
    node: NodeId,
    inherited: &RunFormat,
    runs: &mut Vec<TextRun>,
) {
    match arena.data(node) {
        NodeData::Document => {
            for &child in arena.children(node) {
                collect_into(arena, resolver, child, inherited, runs);
            }
        }

        NodeData::Text(text) => {
            let text = collapse_inline_ws(text);
            if !text.is_empty() {
                runs.push(TextRun::new(text, inherited.clone()));
            }
        }

        NodeData::Element(el) => {
            let tag = el.tag_name.as_str();
            if matches!(tag, "script" | "style" | "noscript")
                || el.has_class("pptx-ignore")
                || el.has_class("no-export")
            {
                return;
            }
            // Nested lists are structural content, extracted as their own
            // blocks; they never contribute to an enclosing run list.
            if matches!(tag, "ul" | "ol") {
                return;
            }
            if tag == "br" {
                runs.push(TextRun::new("\n", inherited.clone()));
                return;
            }

            let local = local_format(arena, resolver, node, tag);
            let merged = inherited.merged_with(&local);
            for &child in arena.children(node) {
                collect_into(arena, resolver, child, &merged, runs);
            }

            // A div closes its line with the formatting it inherited, not
            // its own.
            if tag == "div" {
                runs.push(TextRun::new("\n", inherited.clone()));
            }
        }
    }
}

/// Derive the formatting an element contributes to its descendants.
///
/// Boolean keys come from tag semantics or the resolved style; color and
/// size are carried only when they differ from the parent's resolved
/// values, so unstyled inline elements contribute an empty format.
fn local_format(
    arena: &DomArena,
    resolver: &mut StyleResolver<'_>,
    node: NodeId,
    tag: &str,
) -> RunFormat {
    let style = resolver.resolve(node);
    let parent_style = resolver.resolve_parent(node);

    let mut format = RunFormat::default();
    if matches!(tag, "b" | "strong") || style.is_bold() {
        format.bold = Some(true);
    }
    if matches!(tag, "i" | "em") || style.is_italic() {
        format.italic = Some(true);
    }
    if tag == "u" || style.is_underlined() {
        format.underline = Some(true);
    }
    if style.color != parent_style.color {
        format.color_hex = Some(style.color.clone());
    }
    if style.font_size_px != parent_style.font_size_px {
        format.font_size_pt = Some(style.font_size_pt());
    }
    format
}

fn merge_adjacent(runs: Vec<TextRun>) -> Vec<TextRun> {
    let mut merged: Vec<TextRun> = Vec::with_capacity(runs.len());
    for run in runs {
        if run.text.is_empty() {
            continue;
        }
        match merged.last_mut() {
            Some(last) if last.format == run.format => last.text.push_str(&run.text),
            _ => merged.push(run),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::RuleStore;
    use crate::dom::parse_html;

    fn runs_for(html: &str, css: &str, tag: &str) -> Vec<TextRun> {
        let arena = parse_html(html).unwrap();
        let rules = RuleStore::parse(css);
        let mut resolver = StyleResolver::new(&arena, &rules);
        let node = arena.find_first(tag).unwrap();
        collect_runs(&arena, &mut resolver, node, &RunFormat::default())
    }

    #[test]
    fn test_plain_bold_plain() {
        let runs = runs_for("<p>plain <b>bold</b> plain</p>", "", "p");
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].text, "plain ");
        assert!(runs[0].format.is_plain());
        assert_eq!(runs[1].text, "bold");
        assert_eq!(runs[1].format.bold, Some(true));
        assert_eq!(runs[2].text, " plain");
        assert!(runs[2].format.is_plain());
    }

    #[test]
    fn test_adjacent_identical_merge() {
        let runs = runs_for("<p>one <span>two</span> three</p>", "", "p");
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "one two three");
    }

    #[test]
    fn test_br_emits_newline() {
        let runs = runs_for("<p>a<br>b</p>", "", "p");
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "a\nb");
    }

    #[test]
    fn test_nested_format_merge() {
        let runs = runs_for("<p><b>bold <i>both</i></b></p>", "", "p");
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].format.bold, Some(true));
        assert_eq!(runs[0].format.italic, None);
        assert_eq!(runs[1].format.bold, Some(true));
        assert_eq!(runs[1].format.italic, Some(true));
    }

    #[test]
    fn test_styled_span_carries_color() {
        let runs = runs_for(
            r#"<p>a <span style="color:#ff0000">red</span> b</p>"#,
            "",
            "p",
        );
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[1].format.color_hex.as_deref(), Some("#ff0000"));
        assert!(runs[0].format.color_hex.is_none());
    }

    #[test]
    fn test_weight_rule_implies_bold() {
        let runs = runs_for(
            r#"<p><span class="hot">x</span></p>"#,
            ".hot { font-weight: 600 }",
            "p",
        );
        assert_eq!(runs[0].format.bold, Some(true));
    }

    #[test]
    fn test_underline_from_tag_and_css() {
        let runs = runs_for("<p><u>u</u></p>", "", "p");
        assert_eq!(runs[0].format.underline, Some(true));

        let runs = runs_for(
            r#"<p><span class="uu">u</span></p>"#,
            ".uu { text-decoration: underline }",
            "p",
        );
        assert_eq!(runs[0].format.underline, Some(true));
    }

    #[test]
    fn test_div_trailing_newline_uses_inherited_format() {
        let runs = runs_for("<section><b><div>x</div></b></section>", "", "section");
        // The text inside the div is bold; the trailing newline carries
        // the format inherited into the div (bold), so they merge.
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "x\n");
        assert_eq!(runs[0].format.bold, Some(true));
    }

    #[test]
    fn test_nested_list_content_excluded() {
        let runs = runs_for("<li>a<ul><li>b</li></ul></li>", "", "li");
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "a");
    }

    #[test]
    fn test_empty_yields_no_runs() {
        let runs = runs_for("<p>   </p>", "", "p");
        // A lone whitespace run may survive collapsing but never text.
        assert!(runs.iter().all(|r| r.text.trim().is_empty()));
    }
}
