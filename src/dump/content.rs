//! Content extracts
//!
//! Normalizes a text value for single-line display: whitespace runs
//! collapse to one space, the result is trimmed, and anything longer than
//! the extract size is cut with a `...` marker. The reported length is
//! always that of the original raw value, since that is what a developer
//! reading the dump wants to know about the real content.

/// A display-ready preview of a text value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extract {
    /// Collapsed, trimmed, possibly truncated preview text
    pub display: String,
    /// Character count of the original raw value, untrimmed and uncollapsed
    pub raw_len: usize,
}

/// Summarize a raw text value into a bounded preview.
///
/// Total for all inputs; an empty value yields an empty display and a raw
/// length of zero (callers decide whether that still warrants a line).
/// Lengths are in characters, not bytes.
pub fn summarize(raw: &str, max_len: usize) -> Extract {
    let raw_len = raw.chars().count();

    let mut collapsed = String::with_capacity(raw.len());
    let mut in_whitespace = false;
    for ch in raw.chars() {
        if ch.is_whitespace() {
            in_whitespace = true;
        } else {
            if in_whitespace && !collapsed.is_empty() {
                collapsed.push(' ');
            }
            in_whitespace = false;
            collapsed.push(ch);
        }
    }

    let display = if collapsed.chars().count() > max_len {
        let mut cut: String = collapsed.chars().take(max_len).collect();
        cut.push_str("...");
        cut
    } else {
        collapsed
    };

    Extract { display, raw_len }
}
