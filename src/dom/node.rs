//! Node and attribute representation
//!
//! Uses NodeId/AttrId (u32) for compact, cache-friendly node references.

/// Compact node identifier (index into the node arena)
pub type NodeId = u32;

/// Compact attribute identifier (index into the attribute arena)
pub type AttrId = u32;

/// Type of node stored in the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Document root
    Document,
    /// Element node
    Element,
    /// Text content
    Text,
}

/// Reference to a single item of a root selection.
///
/// The two cases carry entirely disjoint formatting logic downstream, so
/// this is a tagged variant rather than a common node supertype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRef {
    /// An element node
    Element(NodeId),
    /// An attribute of some element
    Attribute(AttrId),
}

impl NodeRef {
    /// Check if this reference points at an attribute
    #[inline]
    pub fn is_attribute(&self) -> bool {
        matches!(self, NodeRef::Attribute(_))
    }
}

/// A node in the arena
#[derive(Debug, Clone)]
pub struct XmlNode {
    /// Type of this node
    pub kind: NodeKind,
    /// Parent node (None for the document node)
    pub parent: Option<NodeId>,
    /// First child node
    pub first_child: Option<NodeId>,
    /// Last child node
    pub last_child: Option<NodeId>,
    /// Previous sibling
    pub prev_sibling: Option<NodeId>,
    /// Next sibling
    pub next_sibling: Option<NodeId>,
    /// Local name (elements) or text content (text nodes)
    pub name: String,
    /// Namespace prefix, if the name is prefixed
    pub prefix: Option<String>,
    /// Resolved namespace URI, if the node is in a namespace
    pub namespace: Option<String>,
    /// Attributes owned by this element, in document order
    pub attributes: Vec<AttrId>,
    /// Namespaces declared on this element: (alias, uri); alias "" is the
    /// default namespace declaration
    pub declared_ns: Vec<(String, String)>,
}

impl XmlNode {
    /// Create the document root node
    pub fn document() -> Self {
        XmlNode {
            kind: NodeKind::Document,
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
            name: String::new(),
            prefix: None,
            namespace: None,
            attributes: Vec::new(),
            declared_ns: Vec::new(),
        }
    }

    /// Create an element node
    pub fn element(name: &str, parent: Option<NodeId>) -> Self {
        XmlNode {
            kind: NodeKind::Element,
            parent,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
            name: name.to_string(),
            prefix: None,
            namespace: None,
            attributes: Vec::new(),
            declared_ns: Vec::new(),
        }
    }

    /// Create a text node
    pub fn text(content: &str, parent: Option<NodeId>) -> Self {
        XmlNode {
            kind: NodeKind::Text,
            parent,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
            name: content.to_string(),
            prefix: None,
            namespace: None,
            attributes: Vec::new(),
            declared_ns: Vec::new(),
        }
    }

    /// Check if this is an element node
    #[inline]
    pub fn is_element(&self) -> bool {
        self.kind == NodeKind::Element
    }

    /// Check if this is a text node
    #[inline]
    pub fn is_text(&self) -> bool {
        self.kind == NodeKind::Text
    }

    /// Check if this node has children
    #[inline]
    pub fn has_children(&self) -> bool {
        self.first_child.is_some()
    }

    /// Check if this node has attributes
    #[inline]
    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }
}

/// Stored attribute
#[derive(Debug, Clone)]
pub struct XmlAttribute {
    /// Local name
    pub name: String,
    /// Namespace prefix, if the attribute is prefixed
    pub prefix: Option<String>,
    /// Resolved namespace URI; unprefixed attributes are never in a
    /// namespace, so this is None exactly when prefix is None
    pub namespace: Option<String>,
    /// Attribute value
    pub value: String,
    /// Element that owns this attribute
    pub owner: NodeId,
}

impl XmlAttribute {
    pub fn new(name: &str, value: &str, owner: NodeId) -> Self {
        XmlAttribute {
            name: name.to_string(),
            prefix: None,
            namespace: None,
            value: value.to_string(),
            owner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_creation() {
        let doc = XmlNode::document();
        assert_eq!(doc.kind, NodeKind::Document);
        assert!(doc.parent.is_none());
    }

    #[test]
    fn test_element_node() {
        let elem = XmlNode::element("item", Some(0));
        assert_eq!(elem.kind, NodeKind::Element);
        assert_eq!(elem.parent, Some(0));
        assert_eq!(elem.name, "item");
        assert!(!elem.has_attributes());
    }

    #[test]
    fn test_node_ref_classification() {
        assert!(NodeRef::Attribute(0).is_attribute());
        assert!(!NodeRef::Element(0).is_attribute());
    }
}
