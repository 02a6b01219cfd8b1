//! Root selection iteration
//!
//! The root selection may be empty, a single element or attribute, or a
//! genuine multi-item set, and the external representation does not expose
//! a uniform length query — so items are probed by index until one is
//! missing. Attribute roots render as a single name="value" line; element
//! roots render their qualified name and hand off to the walker.

use log::debug;

use super::format::DumpLine;
use super::namespace::{item_alias, qualified_name};
use super::walker::walk;
use super::DumpOptions;
use crate::dom::{DocumentHandle, NodeRef, NodeSet};

/// Iterate the root selection, emitting lines per item. Returns the number
/// of items actually probed along with the collected body lines.
pub fn iterate_roots<D: DocumentHandle>(
    doc: &D,
    selection: &NodeSet,
    options: &DumpOptions,
) -> (usize, Vec<DumpLine>) {
    // Aliases declared at the document root; resolved once, reused for
    // every root item
    let doc_ns = doc.document_namespaces();

    let mut lines = Vec::new();
    let mut index = 0;
    while let Some(item) = selection.get(index) {
        let alias = item_alias(doc, &doc_ns, item);
        let local = doc.local_name(item);

        match item {
            NodeRef::Attribute(_) => {
                // A single line, no recursion and no length annotation
                let value = doc.string_value(item);
                let name = qualified_name(alias, local);
                lines.push(DumpLine::new(0, format!("{}=\"{}\"", name, value)));
            }
            NodeRef::Element(id) => {
                lines.push(DumpLine::new(0, format!("<{}>", qualified_name(alias, local))));
                walk(doc, id, 1, options, &mut lines);
            }
        }
        index += 1;
    }

    debug!("dumped {} root item(s), {} line(s)", index, lines.len());
    (index, lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    fn texts(lines: &[DumpLine]) -> Vec<(usize, &str)> {
        lines
            .iter()
            .map(|line| (line.depth, line.text.as_str()))
            .collect()
    }

    #[test]
    fn test_empty_selection() {
        let doc = Document::new();
        let (count, lines) = iterate_roots(&doc, &doc.root_set(), &DumpOptions::default());
        assert_eq!(count, 0);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_element_root() {
        let mut doc = Document::new();
        doc.add_element(None, "root");

        let (count, lines) = iterate_roots(&doc, &doc.root_set(), &DumpOptions::default());
        assert_eq!(count, 1);
        assert_eq!(texts(&lines), vec![(0, "<root>")]);
    }

    #[test]
    fn test_attribute_root_single_line() {
        let mut doc = Document::new();
        let root = doc.add_element(None, "root");
        let id_attr = doc.add_attribute(root, "id", "42");

        let selection = doc.select(vec![NodeRef::Attribute(id_attr)]);
        let (count, lines) = iterate_roots(&doc, &selection, &DumpOptions::default());
        assert_eq!(count, 1);
        assert_eq!(texts(&lines), vec![(0, "id=\"42\"")]);
    }

    #[test]
    fn test_namespaced_attribute_root() {
        let mut doc = Document::new();
        let root = doc.add_element(None, "root");
        doc.declare_namespace(root, "x", "http://example.com/x");
        let marked = doc.add_attribute_ns(root, Some("x"), "ref", Some("http://example.com/x"), "7");

        let selection = doc.select(vec![NodeRef::Attribute(marked)]);
        let (_, lines) = iterate_roots(&doc, &selection, &DumpOptions::default());
        assert_eq!(texts(&lines), vec![(0, "x:ref=\"7\"")]);
    }

    #[test]
    fn test_namespaced_element_root_qualified_name() {
        let mut doc = Document::new();
        doc.add_element_ns(None, Some("svg"), "rect", Some("http://www.w3.org/2000/svg"));
        // Alias resolution falls back to the item's own prefix when the uri
        // is not declared at the root
        let (_, lines) = iterate_roots(&doc, &doc.root_set(), &DumpOptions::default());
        assert_eq!(texts(&lines), vec![(0, "<svg:rect>")]);
    }

    #[test]
    fn test_alias_resolved_through_document_table() {
        let mut doc = Document::new();
        let root = doc.add_element_ns(None, Some("a"), "root", Some("http://example.com/ns"));
        doc.declare_namespace(root, "ns", "http://example.com/ns");

        // Declared alias at the root wins over the element's own prefix
        let (_, lines) = iterate_roots(&doc, &doc.root_set(), &DumpOptions::default());
        assert_eq!(texts(&lines), vec![(0, "<ns:root>")]);
    }

    #[test]
    fn test_multi_item_selection() {
        let mut doc = Document::new();
        let root = doc.add_element(None, "list");
        let first = doc.add_element(Some(root), "entry");
        let second = doc.add_element(Some(root), "entry");

        let selection = doc.select(vec![NodeRef::Element(first), NodeRef::Element(second)]);
        let (count, lines) = iterate_roots(&doc, &selection, &DumpOptions::default());
        assert_eq!(count, 2);
        assert_eq!(texts(&lines), vec![(0, "<entry>"), (0, "<entry>")]);
    }
}
