//! Parsing of `<style>` text into a flat rule store.

/// Ordered mapping of lower-cased property name to raw string value.
///
/// Declarations apply in source order, so a later duplicate of the same
/// property naturally wins when the map is folded onto a style.
pub type CssDeclarationMap = Vec<(String, String)>;

/// Selector specificity as the classic `(id, class/attr/pseudo, type)`
/// triple. The derived ordering compares element-wise left to right;
/// source-order breaks ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Specificity {
    /// Number of `#id` tokens.
    pub ids: u32,
    /// Number of `.class`, `[attr]`, and `:pseudo-class` tokens.
    pub classes: u32,
    /// Number of tag-name and `::pseudo-element` tokens.
    pub types: u32,
}

impl Specificity {
    /// Compute the specificity of a single selector by token counting.
    ///
    /// The universal selector `*` and combinators count nothing; a
    /// functional pseudo-class like `:nth-child(2n)` counts once,
    /// regardless of its argument.
    pub fn of(selector: &str) -> Self {
        let mut spec = Specificity::default();
        let bytes = selector.as_bytes();
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'#' => {
                    i = skip_ident(bytes, i + 1);
                    spec.ids += 1;
                }
                b'.' => {
                    i = skip_ident(bytes, i + 1);
                    spec.classes += 1;
                }
                b'[' => {
                    while i < bytes.len() && bytes[i] != b']' {
                        i += 1;
                    }
                    i += 1;
                    spec.classes += 1;
                }
                b':' => {
                    if bytes.get(i + 1) == Some(&b':') {
                        i = skip_ident(bytes, i + 2);
                        spec.types += 1;
                    } else {
                        i = skip_ident(bytes, i + 1);
                        if bytes.get(i) == Some(&b'(') {
                            i = skip_parens(bytes, i);
                        }
                        spec.classes += 1;
                    }
                }
                b'*' | b'>' | b'+' | b'~' | b',' => i += 1,
                c if c.is_ascii_whitespace() => i += 1,
                c if is_ident_byte(c) => {
                    i = skip_ident(bytes, i);
                    spec.types += 1;
                }
                _ => i += 1,
            }
        }
        spec
    }
}

fn is_ident_byte(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'-' || c == b'_' || c >= 0x80
}

fn skip_ident(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && is_ident_byte(bytes[i]) {
        i += 1;
    }
    i
}

fn skip_parens(bytes: &[u8], mut i: usize) -> usize {
    let mut depth = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return i + 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    i
}

/// A parsed CSS rule: one individual selector plus its declarations.
#[derive(Debug, Clone)]
pub struct CssRule {
    /// The selector string (e.g., `"p.note"`).
    pub selector: String,

    /// Property declarations in source order.
    pub declarations: CssDeclarationMap,

    /// Specificity of this selector.
    pub specificity: Specificity,

    /// Source order index across the whole store; later rules win ties.
    pub order: usize,
}

/// Flat collection of all rules parsed from `<style>` text.
///
/// Rules are owned exclusively by the store and read-only afterward.
#[derive(Debug, Clone, Default)]
pub struct RuleStore {
    rules: Vec<CssRule>,
}

impl RuleStore {
    /// Create an empty rule store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a stylesheet into a fresh store.
    pub fn parse(css: &str) -> Self {
        let mut store = Self::new();
        store.add_sheet(css);
        store
    }

    /// Parse one `<style>` body and append its rules.
    ///
    /// Comments are stripped first; at-rules are ignored; a selector list
    /// fans out into one rule per individual selector, all sharing the
    /// same declarations. The order counter keeps increasing across
    /// sheets, so later sheets win specificity ties.
    pub fn add_sheet(&mut self, css: &str) {
        let css = strip_comments(css);

        for chunk in css.split('}') {
            let Some((selector_part, body)) = chunk.split_once('{') else {
                continue;
            };
            let selector_part = selector_part.trim();
            if selector_part.is_empty() || selector_part.starts_with('@') {
                continue;
            }

            let declarations = parse_declarations(body);
            if declarations.is_empty() {
                continue;
            }

            for selector in selector_part.split(',') {
                let selector = selector.trim();
                if selector.is_empty() {
                    continue;
                }
                self.rules.push(CssRule {
                    selector: selector.to_string(),
                    declarations: declarations.clone(),
                    specificity: Specificity::of(selector),
                    order: self.rules.len(),
                });
            }
        }
    }

    /// All rules in source order.
    pub fn rules(&self) -> &[CssRule] {
        &self.rules
    }

    /// Number of rules in the store.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check whether the store has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Parse a declaration block body (or inline `style` attribute value).
///
/// Unparsable declarations (missing colon, empty key or value) are
/// silently dropped; property names are lower-cased.
pub fn parse_declarations(text: &str) -> CssDeclarationMap {
    let mut map = CssDeclarationMap::new();
    for decl in text.split(';') {
        let Some((key, value)) = decl.split_once(':') else {
            continue;
        };
        let key = key.trim().to_ascii_lowercase();
        let value = value.trim().to_string();
        if key.is_empty() || value.is_empty() {
            continue;
        }
        map.push((key, value));
    }
    map
}

fn strip_comments(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    let mut rest = css;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            None => return out, // unterminated comment swallows the tail
        }
    }
    out.push_str(rest);
    out
}
