//! simplexml-dump - Tree-view diagnostics for namespace-aware document trees
//!
//! Renders a human-readable summary of an XML-like node graph that doubles
//! as documentation of the accessor sequence (namespace alias, child index,
//! attribute name) needed to reach each node programmatically:
//!
//! ```text
//! SimpleXML object (1 item)
//! <root>
//!     ->children('', true)
//!         ->root[0]
//! ```
//!
//! The dumper is generic over [`DocumentHandle`], so any
//! already-materialized tree representation can be dumped; the crate ships
//! an arena-based [`Document`] built programmatically (there is no
//! parser here). The walk is synchronous, read-only, and deterministic:
//! dumping the same tree twice yields byte-identical output.

mod dom;
mod dump;
mod error;

pub use dom::{
    AttrId, Document, DocumentHandle, NamespaceTable, NodeId, NodeKind, NodeRef, NodeSet,
    XmlAttribute, XmlNode,
};
pub use dump::{summarize, tree, write_tree, DumpLine, DumpOptions, Extract};
pub use error::Error;

// ============================================================================
// End-to-end scenarios
// ============================================================================
