//! Flat node arena with integer indices.

/// Stable index of a node in a [`DomArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Get the raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Data stored for each DOM node.
#[derive(Debug, Clone)]
pub enum NodeData {
    /// The synthetic document root.
    Document,
    /// An element with tag name and attributes.
    Element(ElementData),
    /// A text node.
    Text(String),
}

/// Data for an element node.
#[derive(Debug, Clone)]
pub struct ElementData {
    /// Lower-cased tag name (e.g., "p", "h1").
    pub tag_name: String,

    /// Attributes in document order, names lower-cased.
    pub attributes: Vec<(String, String)>,
}

impl ElementData {
    pub(crate) fn new(tag_name: String) -> Self {
        Self {
            tag_name,
            attributes: Vec::new(),
        }
    }

    /// Get an attribute value by (lower-cased) name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Check whether an attribute is present, regardless of value.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.iter().any(|(n, _)| n == name)
    }

    /// Iterate over the whitespace-separated entries of the `class` attribute.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_whitespace()
    }

    /// Check whether the element carries the given class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// Get the element id, if any.
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }
}

struct Node {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An immutable tree of parsed HTML nodes.
///
/// Node 0 is always the synthetic document root. The arena is built once by
/// [`parse_html`](super::parse_html) and never modified afterward.
pub struct DomArena {
    nodes: Vec<Node>,
}

impl DomArena {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![Node {
                data: NodeData::Document,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub(crate) fn push(&mut self, data: NodeData, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            data,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// The synthetic document root.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Total number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether the arena holds only the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Get the data of a node.
    pub fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0].data
    }

    /// Get the parent of a node, if any.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Get the children of a node in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Get the element data of a node, or `None` for text/document nodes.
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        match self.data(id) {
            NodeData::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Get the lower-cased tag name of an element node.
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|el| el.tag_name.as_str())
    }

    /// Get the parent element of a node, skipping the document root.
    pub fn parent_element(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        self.element(parent).map(|_| parent)
    }

    /// Iterate ancestors from the parent up to the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut current = self.parent(id);
        std::iter::from_fn(move || {
            let next = current?;
            current = self.parent(next);
            Some(next)
        })
    }

    /// Iterate the subtree rooted at `id` in depth-first document order,
    /// starting with `id` itself.
    pub fn descendants(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack = vec![id];
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(self.children(next).iter().rev());
            Some(next)
        })
    }

    /// Find the first element with the given tag name, in document order.
    pub fn find_first(&self, tag: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .find(|&id| self.tag_name(id) == Some(tag))
    }

    /// The `<body>` element if present, otherwise the document root.
    ///
    /// A full document restricts extraction to body content; a bare
    /// fragment is walked from the root.
    pub fn body_or_root(&self) -> NodeId {
        self.find_first("body").unwrap_or_else(|| self.root())
    }

    /// Concatenated raw text of every text node in the subtree.
    pub fn text_within(&self, id: NodeId) -> String {
        let mut out = String::new();
        for node in self.descendants(id) {
            if let NodeData::Text(text) = self.data(node) {
                out.push_str(text);
            }
        }
        out
    }
}
