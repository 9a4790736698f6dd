//! Text normalization helpers.

/// Normalize block-level text for the slide model.
///
/// Collapses CR/LF forms to `\n`, collapses runs of horizontal whitespace
/// to one space, strips spaces around newlines, and trims the result.
pub fn normalize_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;

    for c in raw.chars() {
        match c {
            '\r' => {} // CRLF and bare CR both collapse onto the LF path
            '\n' => {
                // Spaces before a newline drop; the newline survives.
                pending_space = false;
                if !out.ends_with('\n') || out.is_empty() {
                    out.push('\n');
                }
            }
            c if c.is_whitespace() => pending_space = true,
            c => {
                if pending_space && !out.is_empty() && !out.ends_with('\n') {
                    out.push(' ');
                }
                pending_space = false;
                out.push(c);
            }
        }
    }

    out.trim_matches('\n').trim().to_string()
}

/// Collapse whitespace inside one text node to single spaces.
///
/// Edges are not trimmed: `"plain "` keeps its trailing space so inline
/// runs join correctly.
pub(crate) fn collapse_inline_ws(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_ws = false;
    for c in raw.chars() {
        if c.is_whitespace() {
            if !in_ws {
                out.push(' ');
            }
            in_ws = true;
        } else {
            out.push(c);
            in_ws = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize_text("  a   b\tc  "), "a b c");
        assert_eq!(normalize_text("a\r\nb"), "a\nb");
    }

    #[test]
    fn test_normalize_trims_around_newlines() {
        assert_eq!(normalize_text("line one  \n  line two"), "line one\nline two");
        assert_eq!(normalize_text("\n\nx\n\n"), "x");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_text("   \r\n \t "), "");
    }

    #[test]
    fn test_collapse_inline_keeps_edges() {
        assert_eq!(collapse_inline_ws("plain "), "plain ");
        assert_eq!(collapse_inline_ws(" \n  plain"), " plain");
        assert_eq!(collapse_inline_ws("a  b"), "a b");
    }
}
