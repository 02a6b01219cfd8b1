//! Output assembly
//!
//! Collected lines are turned into the final string here: a header naming
//! the total root-item count, then every body line indented by its depth.
//! Token spacing and punctuation are load-bearing — the output is meant to
//! be partially copy-pasted back as accessor syntax.

/// One emitted line of dump output.
///
/// Depth drives indentation only; it is assigned by the walker and never
/// validated against real tree depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpLine {
    pub depth: usize,
    pub text: String,
}

impl DumpLine {
    pub fn new(depth: usize, text: String) -> Self {
        DumpLine { depth, text }
    }
}

/// Assemble the header and body into the final output string. Every line,
/// header included, is terminated with a newline.
pub fn format(root_item_count: usize, lines: &[DumpLine], indent_unit: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "SimpleXML object ({} item{})\n",
        root_item_count,
        if root_item_count == 1 { "" } else { "s" }
    ));
    for line in lines {
        for _ in 0..line.depth {
            out.push_str(indent_unit);
        }
        out.push_str(&line.text);
        out.push('\n');
    }
    out
}
