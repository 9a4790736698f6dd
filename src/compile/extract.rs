//! Block extraction: walking the DOM, grouping content into slides, and
//! emitting typed content blocks.

use log::debug;

use crate::css::{RuleStore, StyleResolver};
use crate::dom::{DomArena, ElementData, NodeData, NodeId};
use crate::model::{Block, ListKind, RunFormat, SlideKind, SlideModel};

use super::runs::collect_runs;
use super::text::normalize_text;

/// Tags that open a new slide in automatic mode.
const BOUNDARY_TAGS: [&str; 6] = ["h1", "h2", "h3", "section", "article", "hr"];

/// Walks a parsed document and produces the logical slide sequence.
pub struct BlockExtractor<'a> {
    arena: &'a DomArena,
    resolver: StyleResolver<'a>,
}

impl<'a> BlockExtractor<'a> {
    /// Create an extractor over one arena and rule store.
    pub fn new(arena: &'a DomArena, rules: &'a RuleStore) -> Self {
        Self {
            arena,
            resolver: StyleResolver::new(arena, rules),
        }
    }

    /// Extract all slides from the document.
    ///
    /// If any element carries a `.slide` class or `data-slide` attribute,
    /// each such element becomes exactly one slide; otherwise slide
    /// boundaries are inferred from the top-level structure. Slides that
    /// end up empty are discarded.
    pub fn extract(mut self) -> Vec<SlideModel> {
        let scope = self.arena.body_or_root();

        let markers: Vec<NodeId> = self
            .arena
            .descendants(scope)
            .filter(|&id| {
                self.arena
                    .element(id)
                    .is_some_and(|el| el.has_class("slide") || el.has_attr("data-slide"))
            })
            // Markers inside an excluded subtree are dropped along with it.
            .filter(|&id| !self.in_excluded_subtree(id))
            .collect();

        let slides = if markers.is_empty() {
            debug!("no slide markers found, splitting automatically");
            self.extract_automatic(scope)
        } else {
            debug!("found {} explicit slide markers", markers.len());
            self.extract_explicit(&markers)
        };
        debug!("extracted {} non-empty slides", slides.len());
        slides
    }

    fn extract_explicit(&mut self, markers: &[NodeId]) -> Vec<SlideModel> {
        let mut slides = Vec::new();
        for &marker in markers {
            let kind = self
                .arena
                .element(marker)
                .map(slide_kind_of)
                .unwrap_or_default();
            let mut slide = SlideModel::new(kind);
            self.collect_blocks(marker, &mut slide.blocks);
            if !slide.is_empty() {
                slides.push(slide);
            }
        }
        slides
    }

    fn extract_automatic(&mut self, scope: NodeId) -> Vec<SlideModel> {
        let mut slides = Vec::new();
        let mut current = SlideModel::new(SlideKind::Content);

        for &child in self.arena.children(scope) {
            let Some(el) = self.arena.element(child) else {
                continue;
            };
            if BOUNDARY_TAGS.contains(&el.tag_name.as_str()) {
                if !current.is_empty() {
                    slides.push(std::mem::replace(
                        &mut current,
                        SlideModel::new(SlideKind::Content),
                    ));
                }
            }
            self.collect_blocks(child, &mut current.blocks);
        }
        if !current.is_empty() {
            slides.push(current);
        }
        slides
    }

    /// Recursively emit blocks for a subtree, depth-first in document
    /// order.
    fn collect_blocks(&mut self, node: NodeId, blocks: &mut Vec<Block>) {
        let Some(el) = self.arena.element(node) else {
            return;
        };
        if is_excluded(el) {
            return;
        }

        match el.tag_name.as_str() {
            "table" => {
                if let Some(table) = self.extract_table(node) {
                    blocks.push(table);
                }
            }

            tag @ ("h1" | "h2" | "h3" | "h4" | "h5" | "h6") => {
                let level = tag.as_bytes()[1] - b'0';
                let runs = collect_runs(
                    self.arena,
                    &mut self.resolver,
                    node,
                    &RunFormat::default(),
                );
                let text = normalize_text(&concat_runs(&runs));
                if !text.is_empty() {
                    blocks.push(Block::Heading {
                        level,
                        text,
                        runs,
                        style: self.resolver.resolve(node),
                    });
                }
            }

            "p" => {
                let runs = collect_runs(
                    self.arena,
                    &mut self.resolver,
                    node,
                    &RunFormat::default(),
                );
                let text = normalize_text(&concat_runs(&runs));
                if !text.is_empty() {
                    blocks.push(Block::Paragraph {
                        text,
                        runs,
                        style: self.resolver.resolve(node),
                    });
                }
            }

            "li" => {
                let runs = collect_runs(
                    self.arena,
                    &mut self.resolver,
                    node,
                    &RunFormat::default(),
                );
                let text = normalize_text(&concat_runs(&runs));
                if !text.is_empty() {
                    blocks.push(Block::ListItem {
                        text,
                        list_level: self.list_level(node),
                        list_kind: self.list_kind(node),
                        runs,
                        style: self.resolver.resolve(node),
                    });
                }
                // Nested lists under this item become their own blocks.
                for &child in self.arena.children(node) {
                    if matches!(self.arena.tag_name(child), Some("ul") | Some("ol")) {
                        self.collect_blocks(child, blocks);
                    }
                }
            }

            _ => {
                for &child in self.arena.children(node) {
                    self.collect_blocks(child, blocks);
                }
            }
        }
    }

    /// Nesting depth of a list item: number of `ul`/`ol` ancestors, at
    /// least 1 even for an orphan `<li>`.
    fn list_level(&self, node: NodeId) -> u8 {
        let depth = self
            .arena
            .ancestors(node)
            .filter(|&a| matches!(self.arena.tag_name(a), Some("ul") | Some("ol")))
            .count();
        depth.clamp(1, u8::MAX as usize) as u8
    }

    fn list_kind(&self, node: NodeId) -> ListKind {
        self.arena
            .ancestors(node)
            .find_map(|a| match self.arena.tag_name(a) {
                Some("ul") => Some(ListKind::Unordered),
                Some("ol") => Some(ListKind::Ordered),
                _ => None,
            })
            .unwrap_or(ListKind::Unordered)
    }

    /// Extract a table as a rectangular matrix of normalized cell texts.
    fn extract_table(&mut self, table: NodeId) -> Option<Block> {
        let mut rows: Vec<Vec<String>> = Vec::new();

        for tr in self.arena.descendants(table) {
            if self.arena.tag_name(tr) != Some("tr")
                || !self.nearest_is(tr, "table", table)
                || self.excluded_below(tr, table)
            {
                continue;
            }
            let mut row = Vec::new();
            for cell in self.arena.descendants(tr) {
                if !matches!(self.arena.tag_name(cell), Some("td") | Some("th"))
                    || !self.nearest_is(cell, "tr", tr)
                    || self.excluded_below(cell, tr)
                {
                    continue;
                }
                row.push(normalize_text(&self.visible_text(cell)));

                // A spanning cell pads the row so columns stay aligned.
                let colspan = self
                    .arena
                    .element(cell)
                    .and_then(|el| el.attr("colspan"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(1)
                    .clamp(1, 1000);
                for _ in 1..colspan {
                    row.push(String::new());
                }
            }
            rows.push(row);
        }

        if !rows.iter().any(|r| r.iter().any(|c| !c.is_empty())) {
            return None;
        }

        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, String::new());
        }

        Some(Block::Table {
            rows,
            style: self.resolver.resolve(table),
        })
    }

    /// Whether the nearest ancestor of `node` with the given tag is
    /// `expected`. Guards against nested tables and rows.
    fn nearest_is(&self, node: NodeId, tag: &str, expected: NodeId) -> bool {
        self.arena
            .ancestors(node)
            .find(|&a| self.arena.tag_name(a) == Some(tag))
            == Some(expected)
    }

    /// Whether the node itself, or any ancestor of it, is excluded.
    fn in_excluded_subtree(&self, node: NodeId) -> bool {
        std::iter::once(node)
            .chain(self.arena.ancestors(node))
            .any(|id| self.arena.element(id).is_some_and(is_excluded))
    }

    /// Whether the node, or any wrapper between it and `top` (exclusive),
    /// is excluded. `top` itself was already checked by the caller.
    fn excluded_below(&self, node: NodeId, top: NodeId) -> bool {
        std::iter::once(node)
            .chain(self.arena.ancestors(node).take_while(|&a| a != top))
            .any(|id| self.arena.element(id).is_some_and(is_excluded))
    }

    /// Concatenated text of the subtree, pruning excluded elements.
    fn visible_text(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.visible_text_into(node, &mut out);
        out
    }

    fn visible_text_into(&self, node: NodeId, out: &mut String) {
        match self.arena.data(node) {
            NodeData::Text(text) => out.push_str(text),
            NodeData::Element(el) if is_excluded(el) => {}
            NodeData::Element(_) | NodeData::Document => {
                for &child in self.arena.children(node) {
                    self.visible_text_into(child, out);
                }
            }
        }
    }
}

fn slide_kind_of(el: &ElementData) -> SlideKind {
    if el.has_class("title-slide") || el.has_class("pptx-title") {
        SlideKind::Title
    } else if el.has_class("section-break")
        || el.has_class("section-slide")
        || el.has_class("pptx-section")
    {
        SlideKind::Section
    } else if el.has_class("end-slide") || el.has_class("pptx-end") {
        SlideKind::End
    } else {
        SlideKind::Content
    }
}

fn is_excluded(el: &ElementData) -> bool {
    matches!(el.tag_name.as_str(), "script" | "style" | "noscript")
        || el.has_class("pptx-ignore")
        || el.has_class("no-export")
}

fn concat_runs(runs: &[crate::model::TextRun]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}
