//! Recursive tree walk
//!
//! Visits one node per call: optional content line, then one block per
//! namespace alias in scope, each block holding the attribute lines and the
//! child lines for that alias. Children recurse with depth increased by
//! two — one level for the `->children(..)` header, one for the child item
//! itself — so accessor hints nest visually under their header.

use std::collections::HashMap;

use super::content::summarize;
use super::format::DumpLine;
use super::namespace::{resolve_namespace_content, scoped_namespaces};
use super::DumpOptions;
use crate::dom::{DocumentHandle, NodeId, NodeRef};

/// Walk `node` and append its dump lines.
///
/// The displayed name on attribute and child accessor lines is the *parent*
/// element's local name, not the attribute's or child's own — a display
/// quirk of the source ecosystem that is reproduced here on purpose. The
/// bracketed index, however, counts per child local name.
pub fn walk<D: DocumentHandle>(
    doc: &D,
    node: NodeId,
    depth: usize,
    options: &DumpOptions,
    lines: &mut Vec<DumpLine>,
) {
    let parent_local = doc.local_name(NodeRef::Element(node));

    if options.include_string_content {
        let value = doc.string_value(NodeRef::Element(node));
        let extract = summarize(&value, options.content_extract_size);
        if extract.raw_len > 0 {
            lines.push(DumpLine::new(
                depth,
                format!(
                    "string content ({} chars): '{}'",
                    extract.raw_len, extract.display
                ),
            ));
        }
    }

    let all_ns = scoped_namespaces(doc, node);
    for (alias, uri) in &all_ns {
        let content = resolve_namespace_content(doc, node, alias, uri.as_deref());

        if options.include_string_content && !content.attributes.is_empty() {
            lines.push(DumpLine::new(
                depth,
                format!("->attributes('{}', true)", alias),
            ));
            for &attr_id in &content.attributes {
                let value = doc.string_value(NodeRef::Attribute(attr_id));
                let extract = summarize(&value, options.content_extract_size);
                lines.push(DumpLine::new(
                    depth + 1,
                    format!(
                        "->{} ({} chars): '{}'",
                        parent_local, extract.raw_len, extract.display
                    ),
                ));
            }
        }

        if !content.children.is_empty() {
            lines.push(DumpLine::new(
                depth,
                format!("->children('{}', true)", alias),
            ));

            // Running count per child local name, scoped to this one
            // (node, alias) iteration
            let mut child_indices: HashMap<&str, usize> = HashMap::new();
            for &child in &content.children {
                let child_local = doc.local_name(NodeRef::Element(child));
                let index = child_indices.entry(child_local).or_insert(0);
                lines.push(DumpLine::new(
                    depth + 1,
                    format!("->{}[{}]", parent_local, index),
                ));
                *index += 1;

                walk(doc, child, depth + 2, options, lines);
            }
        }
    }
}
