//! Tree-view dump
//!
//! Renders a root selection as an indented tree of accessor hints:
//! which namespace alias, child index, and attribute name reach each node
//! from the root. With string content enabled, bounded extracts of text
//! values and attribute values are shown inline.
//!
//! Pipeline: [`roots`] iterates the selection, [`walker`] recurses per
//! subtree consulting [`namespace`] and [`content`], and [`format`] turns
//! the accumulated lines into the final string.

pub mod content;
pub mod format;
pub mod namespace;
pub mod roots;
pub mod walker;

use std::io::Write;

pub use content::{summarize, Extract};
pub use format::DumpLine;

use crate::dom::{DocumentHandle, NodeSet};
use crate::error::Error;

/// Options controlling a tree dump
#[derive(Debug, Clone)]
pub struct DumpOptions {
    /// Emit string-content and attribute detail lines alongside structure
    pub include_string_content: bool,
    /// One indent unit per depth level
    pub indent_unit: String,
    /// Maximum characters of a content extract before truncation
    pub content_extract_size: usize,
}

impl Default for DumpOptions {
    fn default() -> Self {
        DumpOptions {
            include_string_content: false,
            indent_unit: "\t".to_string(),
            content_extract_size: 15,
        }
    }
}

/// Render the tree view of a root selection, returning it as a string
pub fn tree<D: DocumentHandle>(doc: &D, selection: &NodeSet, options: &DumpOptions) -> String {
    let (count, lines) = roots::iterate_roots(doc, selection, options);
    format::format(count, &lines, &options.indent_unit)
}

/// Render the tree view of a root selection into a caller-supplied sink
pub fn write_tree<D: DocumentHandle, W: Write>(
    sink: &mut W,
    doc: &D,
    selection: &NodeSet,
    options: &DumpOptions,
) -> Result<(), Error> {
    sink.write_all(tree(doc, selection, options).as_bytes())?;
    Ok(())
}
