//! DOM Module - Arena-based document tree
//!
//! The tree substrate the dumper walks over:
//! - Arena allocation for nodes and attributes
//! - NodeId/AttrId (u32) indices for cache-friendly traversal
//! - Programmatic construction only; there is no parser here, the tree is
//!   materialized by API calls
//! - Namespace tables derived from namespace *usage* within a subtree

pub mod document;
pub mod node;

pub use document::{Document, NodeSet};
pub use node::{AttrId, NodeId, NodeKind, NodeRef, XmlAttribute, XmlNode};

use indexmap::IndexMap;

/// Mapping from namespace alias to URI.
///
/// The empty-string alias is the default namespace; a `None` URI is the
/// absent-URI sentinel meaning "no namespace at all". Insertion order is
/// document-encounter order, and iteration follows it, which keeps dump
/// output deterministic.
pub type NamespaceTable = IndexMap<String, Option<String>>;

/// Trait for tree-handle access - the dumper is generic over this so any
/// already-materialized document representation can be dumped.
pub trait DocumentHandle {
    /// Local name of an element or attribute
    fn local_name(&self, node: NodeRef) -> &str;

    /// String conversion of a node: an element yields the concatenation of
    /// its direct text children, an attribute yields its value
    fn string_value(&self, node: NodeRef) -> String;

    /// Resolved namespace URI of an element or attribute, if any
    fn namespace_uri(&self, node: NodeRef) -> Option<&str>;

    /// Namespace prefix of an element or attribute, if the name is prefixed
    fn prefix(&self, node: NodeRef) -> Option<&str>;

    /// Namespaces *used* by this element; with `recursive` set, by this
    /// element or any descendant (elements and attributes both count)
    fn namespaces(&self, node: NodeId, recursive: bool) -> NamespaceTable;

    /// Namespaces declared on the document's root element
    fn document_namespaces(&self) -> NamespaceTable;

    /// Attributes of an element filtered by namespace URI, in document
    /// order; `None` selects unprefixed (no-namespace) attributes
    fn attributes_in_namespace(&self, node: NodeId, uri: Option<&str>) -> Vec<AttrId>;

    /// Child elements filtered by namespace URI, in document order; `None`
    /// selects children in no namespace
    fn children_in_namespace(&self, node: NodeId, uri: Option<&str>) -> Vec<NodeId>;
}
