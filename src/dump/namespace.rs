//! Namespace resolution for the dump walk
//!
//! Per-node scoped namespace tables, the synthesized default alias, and the
//! default-namespace look-ahead fallback.
//!
//! The fallback replicates a quirk of the source ecosystem: when a subtree
//! scan fills in a URI for the default alias that only a *descendant*
//! actually declares, filtering this node's own attributes and children by
//! that URI finds nothing. Both fetches coming back empty for the default
//! alias is the signal to re-fetch with the no-namespace sentinel instead.
//! The check runs independently at every node of the walk.

use log::trace;

use crate::dom::{AttrId, DocumentHandle, NamespaceTable, NodeId, NodeRef};

/// Attributes and children resolved for one (node, alias) pair
#[derive(Debug, Default)]
pub struct NamespaceContent {
    pub attributes: Vec<AttrId>,
    pub children: Vec<NodeId>,
}

/// All namespace aliases in scope at `node`: those used by the node itself
/// or any descendant. The empty (default) alias is always present, mapped
/// to the absent-URI sentinel when it was never filled in.
pub fn scoped_namespaces<D: DocumentHandle>(doc: &D, node: NodeId) -> NamespaceTable {
    let mut table = doc.namespaces(node, true);
    if !table.contains_key("") {
        table.insert(String::new(), None);
    }
    table
}

/// Resolve the attributes and children of `node` for one alias of its
/// scoped table, applying the default-alias look-ahead fallback.
pub fn resolve_namespace_content<D: DocumentHandle>(
    doc: &D,
    node: NodeId,
    alias: &str,
    uri: Option<&str>,
) -> NamespaceContent {
    let mut attributes = doc.attributes_in_namespace(node, uri);
    let mut children = doc.children_in_namespace(node, uri);

    if alias.is_empty() && uri.is_some() && attributes.is_empty() && children.is_empty() {
        trace!(
            "default-namespace look-ahead fallback at node {} (uri {:?})",
            node,
            uri
        );
        attributes = doc.attributes_in_namespace(node, None);
        children = doc.children_in_namespace(node, None);
    }

    NamespaceContent { attributes, children }
}

/// Namespace-qualified display name: `alias:local` when a non-empty alias
/// owns the node, plain `local` otherwise.
pub fn qualified_name(alias: &str, local: &str) -> String {
    if alias.is_empty() {
        local.to_string()
    } else {
        format!("{}:{}", alias, local)
    }
}

/// Resolve the display alias for a root item: reverse-lookup of its URI in
/// the document-level table, falling back to the item's own prefix when the
/// URI is not declared at the root.
pub fn item_alias<'a, D: DocumentHandle>(
    doc: &'a D,
    doc_ns: &'a NamespaceTable,
    item: NodeRef,
) -> &'a str {
    let Some(uri) = doc.namespace_uri(item) else {
        return "";
    };
    doc_ns
        .iter()
        .find(|(_, table_uri)| table_uri.as_deref() == Some(uri))
        .map(|(alias, _)| alias.as_str())
        .unwrap_or_else(|| doc.prefix(item).unwrap_or(""))
}
