//! HTML parsing with html5ever.

use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use super::{DomArena, ElementData, NodeData, NodeId};
use crate::error::Result;

/// Parse an HTML string into an immutable [`DomArena`].
///
/// Parsing is maximally permissive: html5ever repairs malformed markup the
/// way a browser would, and a bare fragment is implicitly wrapped in
/// `<html><body>…</body></html>`. Comments, doctypes, and processing
/// instructions are dropped; text nodes are kept verbatim, including
/// whitespace-only ones, since inter-element spacing matters for inline
/// run building.
pub fn parse_html(html: &str) -> Result<DomArena> {
    let dom: RcDom = parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())?;

    let mut arena = DomArena::new();
    let root = arena.root();
    convert_node(&dom.document, root, &mut arena);
    log::debug!("parsed HTML into {} DOM nodes", arena.len());
    Ok(arena)
}

fn convert_node(rc_node: &Handle, parent: NodeId, arena: &mut DomArena) {
    match &rc_node.data {
        RcNodeData::Document => {
            for child in rc_node.children.borrow().iter() {
                convert_node(child, parent, arena);
            }
        }

        RcNodeData::Text { contents } => {
            let text = contents.borrow().to_string();
            if !text.is_empty() {
                arena.push(NodeData::Text(text), parent);
            }
        }

        RcNodeData::Element { name, attrs, .. } => {
            let mut elem = ElementData::new(name.local.to_string().to_ascii_lowercase());
            for attr in attrs.borrow().iter() {
                elem.attributes.push((
                    attr.name.local.to_string().to_ascii_lowercase(),
                    attr.value.to_string(),
                ));
            }
            let node = arena.push(NodeData::Element(elem), parent);
            for child in rc_node.children.borrow().iter() {
                convert_node(child, node, arena);
            }
        }

        // Doctypes, comments, and processing instructions carry no content.
        RcNodeData::Doctype { .. }
        | RcNodeData::Comment { .. }
        | RcNodeData::ProcessingInstruction { .. } => {}
    }
}
