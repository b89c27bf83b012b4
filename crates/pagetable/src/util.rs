//! Text measurement and cell-text helpers.
//!
//! Widths are measured in Unicode scalar values (codepoints), not display
//! columns: this crate targets plain fixed-width sinks (log files, reports)
//! where byte-oriented tools count the same way. CJK-aware measurement is
//! deliberately out of scope.

/// Width of a string in codepoints.
///
/// # Example
///
/// ```rust
/// use pagetable::text_width;
///
/// assert_eq!(text_width("hello"), 5);
/// assert_eq!(text_width(""), 0);
/// assert_eq!(text_width("héllo"), 5);
/// ```
pub fn text_width(s: &str) -> usize {
    s.chars().count()
}

/// Pads a string on the right with spaces to the given width.
///
/// Strings already at or beyond `width` are returned unchanged.
pub fn pad_right(s: &str, width: usize) -> String {
    let len = text_width(s);
    if len >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + (width - len));
    out.push_str(s);
    for _ in len..width {
        out.push(' ');
    }
    out
}

/// Hard-cuts a string to at most `width` codepoints, no ellipsis marker.
pub fn clip(s: &str, width: usize) -> String {
    s.chars().take(width).collect()
}

/// Renders text into a fixed-width cell: padded with trailing spaces when
/// shorter than `width`, clipped when longer. Empty text yields `width`
/// spaces; a zero-width cell yields nothing.
pub(crate) fn cell_text(text: &str, width: usize) -> String {
    if text_width(text) < width {
        pad_right(text, width)
    } else {
        clip(text, width)
    }
}
