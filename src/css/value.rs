//! Normalization of CSS length and color values.

use std::sync::OnceLock;

use regex::Regex;

/// CSS pixels per typographic point.
pub const PX_PER_PT: f32 = 4.0 / 3.0;

/// Fixed root font size used for `rem` units.
pub const ROOT_FONT_SIZE_PX: f32 = 16.0;

/// Convert a CSS length string to pixels.
///
/// Recognized suffixes are `px`, `pt`, `rem`, `em`, and `%`; `em` and `%`
/// scale relative to `base_px`, `rem` uses the fixed 16px root. A bare
/// number passes through unchanged. Anything unparseable returns `None`
/// and the caller keeps its prior value.
pub fn length_to_px(raw: &str, base_px: f32) -> Option<f32> {
    let raw = raw.trim().to_ascii_lowercase();
    if raw.is_empty() {
        return None;
    }

    // "rem" must be checked before "em".
    if let Some(v) = raw.strip_suffix("px") {
        parse_number(v)
    } else if let Some(v) = raw.strip_suffix("pt") {
        Some(parse_number(v)? * PX_PER_PT)
    } else if let Some(v) = raw.strip_suffix("rem") {
        Some(parse_number(v)? * ROOT_FONT_SIZE_PX)
    } else if let Some(v) = raw.strip_suffix("em") {
        Some(parse_number(v)? * base_px)
    } else if let Some(v) = raw.strip_suffix('%') {
        Some(parse_number(v)? / 100.0 * base_px)
    } else {
        parse_number(&raw)
    }
}

fn parse_number(s: &str) -> Option<f32> {
    s.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}

/// Convert a CSS color string to canonical 6-digit lowercase hex.
///
/// Accepts `#rgb`, `#rrggbb`, `rgb(...)`/`rgba(...)` (alpha ignored,
/// channels clamped to 0-255), and the basic CSS named colors. Anything
/// else (`hsl()`, CSS variables, exotic names) yields `None` and the
/// property is left unset.
pub fn color_to_hex(raw: &str) -> Option<String> {
    let raw = raw.trim().to_ascii_lowercase();
    if raw.is_empty() {
        return None;
    }

    if let Some(hex) = raw.strip_prefix('#') {
        return match hex.len() {
            3 if hex.chars().all(|c| c.is_ascii_hexdigit()) => {
                let expanded: String = hex.chars().flat_map(|c| [c, c]).collect();
                Some(format!("#{}", expanded))
            }
            6 if hex.chars().all(|c| c.is_ascii_hexdigit()) => Some(format!("#{}", hex)),
            _ => None,
        };
    }

    if raw.starts_with("rgb(") || raw.starts_with("rgba(") {
        static RGB_RE: OnceLock<Regex> = OnceLock::new();
        let re = RGB_RE.get_or_init(|| {
            Regex::new(r"^rgba?\(\s*(-?[\d.]+)\s*,\s*(-?[\d.]+)\s*,\s*(-?[\d.]+)\s*(?:,\s*[^)]*)?\)$")
                .unwrap()
        });
        let caps = re.captures(&raw)?;
        let channel = |i: usize| -> Option<u8> {
            let v: f32 = caps.get(i)?.as_str().parse().ok()?;
            Some(v.clamp(0.0, 255.0).round() as u8)
        };
        return Some(format!(
            "#{:02x}{:02x}{:02x}",
            channel(1)?,
            channel(2)?,
            channel(3)?
        ));
    }

    named_color(&raw).map(|hex| hex.to_string())
}

/// Basic CSS named colors (CSS Level 1 palette plus the common aliases).
fn named_color(name: &str) -> Option<&'static str> {
    Some(match name {
        "black" => "#000000",
        "silver" => "#c0c0c0",
        "gray" | "grey" => "#808080",
        "white" => "#ffffff",
        "maroon" => "#800000",
        "red" => "#ff0000",
        "purple" => "#800080",
        "fuchsia" | "magenta" => "#ff00ff",
        "green" => "#008000",
        "lime" => "#00ff00",
        "olive" => "#808000",
        "yellow" => "#ffff00",
        "navy" => "#000080",
        "blue" => "#0000ff",
        "teal" => "#008080",
        "aqua" | "cyan" => "#00ffff",
        "orange" => "#ffa500",
        _ => return None,
    })
}
