//! Document - Arena-based tree storage
//!
//! Storage follows the arena layout throughout:
//! - Nodes in a flat `Vec<XmlNode>` linked by first/last-child and sibling ids
//! - Attributes in a separate flat `Vec<XmlAttribute>`
//! - Node 0 is always the document node; the root element hangs off it
//!
//! Documents are built programmatically (`add_element`, `add_attribute`,
//! `add_text`, `declare_namespace`) and treated as read-only afterwards.
//! Arena ids handed to accessors must come from this document; an
//! out-of-range id is a caller contract violation and panics.

use super::node::{AttrId, NodeId, NodeRef, XmlAttribute, XmlNode};
use super::{DocumentHandle, NamespaceTable};

/// A document tree stored in arena format
#[derive(Debug)]
pub struct Document {
    /// Arena of nodes; index 0 is the document node
    nodes: Vec<XmlNode>,
    /// Arena of attributes
    attributes: Vec<XmlAttribute>,
}

/// An ordered root selection over a document.
///
/// May hold zero items, one element or attribute, or a genuine multi-item
/// set. Consumers probe items by index via [`NodeSet::get`]; no up-front
/// length query is part of the contract.
#[derive(Debug, Clone, Default)]
pub struct NodeSet {
    items: Vec<NodeRef>,
}

impl NodeSet {
    /// Create a selection from explicit items
    pub fn new(items: Vec<NodeRef>) -> Self {
        NodeSet { items }
    }

    /// Probe for the item at `index`
    pub fn get(&self, index: usize) -> Option<NodeRef> {
        self.items.get(index).copied()
    }
}

impl Default for Document {
    fn default() -> Self {
        Document::new()
    }
}

impl Document {
    /// Create an empty document (document node only)
    pub fn new() -> Self {
        Document {
            nodes: vec![XmlNode::document()],
            attributes: Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Add an element with no namespace. `parent` of `None` places it under
    /// the document node (i.e. makes it the root element).
    pub fn add_element(&mut self, parent: Option<NodeId>, name: &str) -> NodeId {
        self.add_element_ns(parent, None, name, None)
    }

    /// Add a namespaced element. `prefix` of `None` with a `Some` uri means
    /// the element is in the default namespace.
    pub fn add_element_ns(
        &mut self,
        parent: Option<NodeId>,
        prefix: Option<&str>,
        name: &str,
        uri: Option<&str>,
    ) -> NodeId {
        let parent_id = parent.unwrap_or(0);
        let mut node = XmlNode::element(name, Some(parent_id));
        node.prefix = prefix.map(str::to_string);
        node.namespace = uri.map(str::to_string);

        let node_id = self.nodes.len() as NodeId;
        self.nodes.push(node);
        self.link_child(parent_id, node_id);
        node_id
    }

    /// Add a text node under an element
    pub fn add_text(&mut self, parent: NodeId, content: &str) -> NodeId {
        let node = XmlNode::text(content, Some(parent));
        let node_id = self.nodes.len() as NodeId;
        self.nodes.push(node);
        self.link_child(parent, node_id);
        node_id
    }

    /// Add an unprefixed attribute to an element
    pub fn add_attribute(&mut self, owner: NodeId, name: &str, value: &str) -> AttrId {
        self.add_attribute_ns(owner, None, name, None, value)
    }

    /// Add a namespaced attribute to an element. Unprefixed attributes are
    /// never in a namespace, so `prefix` and `uri` travel together.
    pub fn add_attribute_ns(
        &mut self,
        owner: NodeId,
        prefix: Option<&str>,
        name: &str,
        uri: Option<&str>,
        value: &str,
    ) -> AttrId {
        let mut attr = XmlAttribute::new(name, value, owner);
        attr.prefix = prefix.map(str::to_string);
        attr.namespace = uri.map(str::to_string);

        let attr_id = self.attributes.len() as AttrId;
        self.attributes.push(attr);
        self.nodes[owner as usize].attributes.push(attr_id);
        attr_id
    }

    /// Record a namespace declaration on an element (an `xmlns` or
    /// `xmlns:alias` in the source ecosystem). Alias "" declares the
    /// default namespace.
    pub fn declare_namespace(&mut self, node: NodeId, alias: &str, uri: &str) {
        self.nodes[node as usize]
            .declared_ns
            .push((alias.to_string(), uri.to_string()));
    }

    /// Link a child node to its parent
    fn link_child(&mut self, parent_id: NodeId, child_id: NodeId) {
        // Get parent's last_child first to avoid borrow issues
        let last_child_opt = self.nodes[parent_id as usize].last_child;

        if let Some(last_child_id) = last_child_opt {
            self.nodes[child_id as usize].prev_sibling = Some(last_child_id);
            self.nodes[last_child_id as usize].next_sibling = Some(child_id);
        } else {
            self.nodes[parent_id as usize].first_child = Some(child_id);
        }
        self.nodes[parent_id as usize].last_child = Some(child_id);
    }

    // ------------------------------------------------------------------
    // Access
    // ------------------------------------------------------------------

    /// Get a node by id
    pub fn node(&self, id: NodeId) -> &XmlNode {
        &self.nodes[id as usize]
    }

    /// Get an attribute by id
    pub fn attribute(&self, id: AttrId) -> &XmlAttribute {
        &self.attributes[id as usize]
    }

    /// Get the root element (first element child of the document node)
    pub fn root_element(&self) -> Option<NodeId> {
        self.children(0).find(|&id| self.node(id).is_element())
    }

    /// Iterate over children of a node
    pub fn children(&self, id: NodeId) -> ChildIter<'_> {
        let first = self.node(id).first_child;
        ChildIter { doc: self, next: first }
    }

    /// Get total number of nodes (document node included)
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // ------------------------------------------------------------------
    // Selections
    // ------------------------------------------------------------------

    /// The root element as a one-item selection; empty when the document
    /// has no root element
    pub fn root_set(&self) -> NodeSet {
        NodeSet::new(self.root_element().map(NodeRef::Element).into_iter().collect())
    }

    /// An arbitrary selection of elements and/or attributes
    pub fn select(&self, items: Vec<NodeRef>) -> NodeSet {
        NodeSet::new(items)
    }

    /// Collect namespace usage for one node into a table
    fn collect_used_namespaces(&self, id: NodeId, recursive: bool, table: &mut NamespaceTable) {
        let node = self.node(id);
        if let Some(uri) = &node.namespace {
            let alias = node.prefix.clone().unwrap_or_default();
            table.entry(alias).or_insert_with(|| Some(uri.clone()));
        }
        for &attr_id in &node.attributes {
            let attr = self.attribute(attr_id);
            if let (Some(prefix), Some(uri)) = (&attr.prefix, &attr.namespace) {
                table
                    .entry(prefix.clone())
                    .or_insert_with(|| Some(uri.clone()));
            }
        }
        if recursive {
            for child in self.children(id) {
                if self.node(child).is_element() {
                    self.collect_used_namespaces(child, true, table);
                }
            }
        }
    }
}

/// Iterator over child nodes
pub struct ChildIter<'a> {
    doc: &'a Document,
    next: Option<NodeId>,
}

impl<'a> Iterator for ChildIter<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.doc.node(current).next_sibling;
        Some(current)
    }
}

impl DocumentHandle for Document {
    fn local_name(&self, node: NodeRef) -> &str {
        match node {
            NodeRef::Element(id) => &self.node(id).name,
            NodeRef::Attribute(id) => &self.attribute(id).name,
        }
    }

    fn string_value(&self, node: NodeRef) -> String {
        match node {
            NodeRef::Element(id) => {
                // Direct text children only; descendant element text does
                // not contribute to an element's string conversion
                let mut value = String::new();
                for child in self.children(id) {
                    let child_node = self.node(child);
                    if child_node.is_text() {
                        value.push_str(&child_node.name);
                    }
                }
                value
            }
            NodeRef::Attribute(id) => self.attribute(id).value.clone(),
        }
    }

    fn namespace_uri(&self, node: NodeRef) -> Option<&str> {
        match node {
            NodeRef::Element(id) => self.node(id).namespace.as_deref(),
            NodeRef::Attribute(id) => self.attribute(id).namespace.as_deref(),
        }
    }

    fn prefix(&self, node: NodeRef) -> Option<&str> {
        match node {
            NodeRef::Element(id) => self.node(id).prefix.as_deref(),
            NodeRef::Attribute(id) => self.attribute(id).prefix.as_deref(),
        }
    }

    fn namespaces(&self, node: NodeId, recursive: bool) -> NamespaceTable {
        let mut table = NamespaceTable::new();
        self.collect_used_namespaces(node, recursive, &mut table);
        table
    }

    fn document_namespaces(&self) -> NamespaceTable {
        let mut table = NamespaceTable::new();
        if let Some(root) = self.root_element() {
            for (alias, uri) in &self.node(root).declared_ns {
                table
                    .entry(alias.clone())
                    .or_insert_with(|| Some(uri.clone()));
            }
        }
        table
    }

    fn attributes_in_namespace(&self, node: NodeId, uri: Option<&str>) -> Vec<AttrId> {
        self.node(node)
            .attributes
            .iter()
            .copied()
            .filter(|&attr_id| self.attribute(attr_id).namespace.as_deref() == uri)
            .collect()
    }

    fn children_in_namespace(&self, node: NodeId, uri: Option<&str>) -> Vec<NodeId> {
        self.children(node)
            .filter(|&child| {
                let child_node = self.node(child);
                child_node.is_element() && child_node.namespace.as_deref() == uri
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_simple() {
        let mut doc = Document::new();
        let root = doc.add_element(None, "root");
        doc.add_text(root, "hello");
        assert_eq!(doc.root_element(), Some(root));
        assert_eq!(doc.string_value(NodeRef::Element(root)), "hello");
    }

    #[test]
    fn test_string_value_direct_text_only() {
        let mut doc = Document::new();
        let root = doc.add_element(None, "a");
        doc.add_text(root, "x");
        let b = doc.add_element(Some(root), "b");
        doc.add_text(b, "y");
        doc.add_text(root, "z");
        assert_eq!(doc.string_value(NodeRef::Element(root)), "xz");
    }

    #[test]
    fn test_siblings() {
        let mut doc = Document::new();
        let root = doc.add_element(None, "root");
        let a = doc.add_element(Some(root), "a");
        doc.add_element(Some(root), "b");
        doc.add_element(Some(root), "c");

        let children: Vec<_> = doc.children(root).collect();
        assert_eq!(children.len(), 3);

        let first = doc.node(a);
        assert!(first.prev_sibling.is_none());
        assert!(first.next_sibling.is_some());
    }

    #[test]
    fn test_children_in_namespace() {
        let mut doc = Document::new();
        let root = doc.add_element(None, "root");
        doc.add_element(Some(root), "plain");
        doc.add_element_ns(Some(root), Some("ns"), "qualified", Some("http://example.com/ns"));

        let plain = doc.children_in_namespace(root, None);
        assert_eq!(plain.len(), 1);
        assert_eq!(doc.local_name(NodeRef::Element(plain[0])), "plain");

        let qualified = doc.children_in_namespace(root, Some("http://example.com/ns"));
        assert_eq!(qualified.len(), 1);
        assert_eq!(doc.local_name(NodeRef::Element(qualified[0])), "qualified");
    }

    #[test]
    fn test_attributes_in_namespace() {
        let mut doc = Document::new();
        let root = doc.add_element(None, "root");
        doc.add_attribute(root, "id", "1");
        doc.add_attribute_ns(root, Some("x"), "ref", Some("http://example.com/x"), "2");

        assert_eq!(doc.attributes_in_namespace(root, None).len(), 1);
        assert_eq!(
            doc.attributes_in_namespace(root, Some("http://example.com/x"))
                .len(),
            1
        );
        assert!(doc
            .attributes_in_namespace(root, Some("http://example.com/missing"))
            .is_empty());
    }

    #[test]
    fn test_used_namespaces_recursive() {
        // Namespace used only by a grandchild is visible from the root in
        // recursive mode, but not in shallow mode
        let mut doc = Document::new();
        let root = doc.add_element(None, "root");
        let mid = doc.add_element(Some(root), "mid");
        doc.add_element_ns(Some(mid), None, "leaf", Some("http://example.com/deep"));

        let shallow = doc.namespaces(root, false);
        assert!(shallow.is_empty());

        let scoped = doc.namespaces(root, true);
        assert_eq!(
            scoped.get(""),
            Some(&Some("http://example.com/deep".to_string()))
        );
    }

    #[test]
    fn test_document_namespaces_declared_on_root() {
        let mut doc = Document::new();
        let root = doc.add_element_ns(None, None, "root", Some("http://example.com/d"));
        doc.declare_namespace(root, "", "http://example.com/d");
        doc.declare_namespace(root, "x", "http://example.com/x");

        let table = doc.document_namespaces();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(""), Some(&Some("http://example.com/d".to_string())));
        assert_eq!(
            table.get("x"),
            Some(&Some("http://example.com/x".to_string()))
        );
    }

    #[test]
    fn test_root_set_probing() {
        let doc = Document::new();
        assert!(doc.root_set().get(0).is_none());

        let mut doc = Document::new();
        let root = doc.add_element(None, "root");
        let set = doc.root_set();
        assert_eq!(set.get(0), Some(NodeRef::Element(root)));
        assert!(set.get(1).is_none());
    }
}
