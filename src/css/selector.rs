//! Scoped CSS selector matching against the DOM arena.
//!
//! The supported grammar is the practical subset the compiler needs:
//! tag names, `*`, `.class`, `#id`, `[attr]`, `[attr=value]`, the
//! positional pseudo-classes `:first-child`/`:last-child`, compounds of
//! those, and descendant/child combinators. Anything outside the subset
//! (sibling combinators, attribute operators like `^=`, unknown
//! pseudo-classes, pseudo-elements) makes the selector non-matching
//! rather than an error.

use crate::dom::{DomArena, NodeId};

#[derive(Debug, Clone, PartialEq, Eq)]
enum SimpleSelector {
    Universal,
    Tag(String),
    Id(String),
    Class(String),
    AttrPresent(String),
    AttrEquals(String, String),
    FirstChild,
    LastChild,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
    Descendant,
    Child,
}

#[derive(Debug, Clone)]
struct ComplexSelector {
    /// Compound selectors left to right; at least one.
    compounds: Vec<Vec<SimpleSelector>>,
    /// Combinator between compound `i` and compound `i + 1`.
    combinators: Vec<Combinator>,
}

/// Check whether `selector` matches the element at `node`.
///
/// Non-element nodes and selectors outside the supported grammar never
/// match.
pub fn matches(arena: &DomArena, node: NodeId, selector: &str) -> bool {
    if arena.element(node).is_none() {
        return false;
    }
    let Some(parsed) = parse_selector(selector) else {
        return false;
    };
    matches_from(arena, node, &parsed, parsed.compounds.len() - 1)
}

fn matches_from(arena: &DomArena, node: NodeId, sel: &ComplexSelector, idx: usize) -> bool {
    if !matches_compound(arena, node, &sel.compounds[idx]) {
        return false;
    }
    if idx == 0 {
        return true;
    }
    match sel.combinators[idx - 1] {
        Combinator::Child => match arena.parent_element(node) {
            Some(parent) => matches_from(arena, parent, sel, idx - 1),
            None => false,
        },
        Combinator::Descendant => arena
            .ancestors(node)
            .filter(|&a| arena.element(a).is_some())
            .any(|a| matches_from(arena, a, sel, idx - 1)),
    }
}

fn matches_compound(arena: &DomArena, node: NodeId, compound: &[SimpleSelector]) -> bool {
    let Some(el) = arena.element(node) else {
        return false;
    };
    compound.iter().all(|simple| match simple {
        SimpleSelector::Universal => true,
        SimpleSelector::Tag(tag) => el.tag_name == *tag,
        SimpleSelector::Id(id) => el.id() == Some(id.as_str()),
        SimpleSelector::Class(class) => el.has_class(class),
        SimpleSelector::AttrPresent(name) => el.has_attr(name),
        SimpleSelector::AttrEquals(name, value) => el.attr(name) == Some(value.as_str()),
        SimpleSelector::FirstChild => sibling_position(arena, node).0,
        SimpleSelector::LastChild => sibling_position(arena, node).1,
    })
}

/// Whether the node is the first/last element child of its parent.
fn sibling_position(arena: &DomArena, node: NodeId) -> (bool, bool) {
    let Some(parent) = arena.parent(node) else {
        return (true, true);
    };
    let mut siblings = arena
        .children(parent)
        .iter()
        .copied()
        .filter(|&c| arena.element(c).is_some());
    let first = siblings.next() == Some(node);
    let last = siblings.last().map_or(first, |l| l == node);
    (first, last)
}

fn parse_selector(selector: &str) -> Option<ComplexSelector> {
    let bytes = selector.as_bytes();
    let mut compounds = Vec::new();
    let mut combinators = Vec::new();
    let mut i = skip_ws(bytes, 0);

    loop {
        let (compound, next) = parse_compound(bytes, i)?;
        if compound.is_empty() {
            return None;
        }
        compounds.push(compound);
        i = next;

        let after_ws = skip_ws(bytes, i);
        if after_ws >= bytes.len() {
            break;
        }
        if bytes[after_ws] == b'>' {
            combinators.push(Combinator::Child);
            i = skip_ws(bytes, after_ws + 1);
        } else if after_ws > i {
            combinators.push(Combinator::Descendant);
            i = after_ws;
        } else {
            // Adjacent garbage such as `+`, `~`, or stray characters.
            return None;
        }
    }

    Some(ComplexSelector {
        compounds,
        combinators,
    })
}

fn parse_compound(bytes: &[u8], mut i: usize) -> Option<(Vec<SimpleSelector>, usize)> {
    let mut parts = Vec::new();

    while i < bytes.len() {
        match bytes[i] {
            b'*' => {
                parts.push(SimpleSelector::Universal);
                i += 1;
            }
            b'#' => {
                let (ident, next) = parse_ident(bytes, i + 1)?;
                parts.push(SimpleSelector::Id(ident));
                i = next;
            }
            b'.' => {
                let (ident, next) = parse_ident(bytes, i + 1)?;
                parts.push(SimpleSelector::Class(ident));
                i = next;
            }
            b'[' => {
                let (simple, next) = parse_attr(bytes, i + 1)?;
                parts.push(simple);
                i = next;
            }
            b':' => {
                if bytes.get(i + 1) == Some(&b':') {
                    return None; // pseudo-elements never match an element
                }
                let (ident, next) = parse_ident(bytes, i + 1)?;
                match ident.as_str() {
                    "first-child" => parts.push(SimpleSelector::FirstChild),
                    "last-child" => parts.push(SimpleSelector::LastChild),
                    _ => return None,
                }
                i = next;
            }
            c if c == b'>' || c.is_ascii_whitespace() => break,
            c if is_ident_byte(c) => {
                let (ident, next) = parse_ident(bytes, i)?;
                parts.push(SimpleSelector::Tag(ident.to_ascii_lowercase()));
                i = next;
            }
            _ => return None,
        }
    }

    Some((parts, i))
}

fn parse_attr(bytes: &[u8], mut i: usize) -> Option<(SimpleSelector, usize)> {
    let close = bytes[i..].iter().position(|&b| b == b']')? + i;
    let inner = std::str::from_utf8(&bytes[i..close]).ok()?.trim();
    i = close + 1;

    let simple = match inner.split_once('=') {
        None => {
            if inner.is_empty() || !inner.bytes().all(is_ident_byte) {
                return None;
            }
            SimpleSelector::AttrPresent(inner.to_ascii_lowercase())
        }
        Some((name, value)) => {
            let name = name.trim();
            // Operators like ~=, ^=, $=, *= land a symbol at the end of
            // the name; they are out of scope.
            if name.is_empty() || !name.bytes().all(is_ident_byte) {
                return None;
            }
            let value = value.trim().trim_matches('"').trim_matches('\'');
            SimpleSelector::AttrEquals(name.to_ascii_lowercase(), value.to_string())
        }
    };
    Some((simple, i))
}

fn skip_ws(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

fn parse_ident(bytes: &[u8], start: usize) -> Option<(String, usize)> {
    let mut i = start;
    while i < bytes.len() && is_ident_byte(bytes[i]) {
        i += 1;
    }
    if i == start {
        return None;
    }
    Some((std::str::from_utf8(&bytes[start..i]).ok()?.to_string(), i))
}

fn is_ident_byte(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'-' || c == b'_' || c >= 0x80
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    fn first(arena: &DomArena, tag: &str) -> NodeId {
        arena.find_first(tag).unwrap()
    }

    #[test]
    fn test_tag_class_id() {
        let arena = parse_html(r#"<p id="intro" class="note big">x</p>"#).unwrap();
        let p = first(&arena, "p");

        assert!(matches(&arena, p, "p"));
        assert!(matches(&arena, p, ".note"));
        assert!(matches(&arena, p, "#intro"));
        assert!(matches(&arena, p, "p.note.big"));
        assert!(matches(&arena, p, "*"));
        assert!(!matches(&arena, p, "div"));
        assert!(!matches(&arena, p, ".other"));
    }

    #[test]
    fn test_attribute_selectors() {
        let arena = parse_html(r#"<div data-slide="intro">x</div>"#).unwrap();
        let div = first(&arena, "div");

        assert!(matches(&arena, div, "[data-slide]"));
        assert!(matches(&arena, div, r#"[data-slide="intro"]"#));
        assert!(matches(&arena, div, "div[data-slide=intro]"));
        assert!(!matches(&arena, div, "[data-slide=other]"));
    }

    #[test]
    fn test_combinators() {
        let arena = parse_html("<section><div><p>x</p></div></section>").unwrap();
        let p = first(&arena, "p");

        assert!(matches(&arena, p, "div p"));
        assert!(matches(&arena, p, "section p"));
        assert!(matches(&arena, p, "div > p"));
        assert!(matches(&arena, p, "section > div > p"));
        assert!(!matches(&arena, p, "section > p"));
        assert!(!matches(&arena, p, "article p"));
    }

    #[test]
    fn test_positional_pseudo_classes() {
        let arena = parse_html("<ul><li>a</li><li>b</li><li>c</li></ul>").unwrap();
        let ul = first(&arena, "ul");
        let items: Vec<_> = arena
            .children(ul)
            .iter()
            .copied()
            .filter(|&c| arena.tag_name(c) == Some("li"))
            .collect();

        assert!(matches(&arena, items[0], "li:first-child"));
        assert!(!matches(&arena, items[1], "li:first-child"));
        assert!(matches(&arena, items[2], "li:last-child"));
    }

    #[test]
    fn test_unsupported_is_non_matching() {
        let arena = parse_html("<p>x</p>").unwrap();
        let p = first(&arena, "p");

        assert!(!matches(&arena, p, "p:hover"));
        assert!(!matches(&arena, p, "p::before"));
        assert!(!matches(&arena, p, "div + p"));
        assert!(!matches(&arena, p, "[class^=no]"));
        assert!(!matches(&arena, p, ""));
    }
}
