//! Deterministic display colors keyed by issuer code.
//!
//! No lookup table and no cache: the color is a pure function of the
//! code string, so identical records render identically across
//! recomputation and across sessions.

/// Stable display color for an issuer code, as lowercase `#rrggbb`.
///
/// A polynomial rolling hash of the string drives a golden-ratio hue
/// spread (adjacent hashes land far apart on the wheel), with saturation
/// in [50, 75] and lightness in [65, 85] so titles stay readable on top.
pub fn color_for_id(code_id: &str) -> String {
    let mut hash: i32 = 0;
    for ch in code_id.chars() {
        // hash = char + (hash << 5) - hash, wrapped to 32 bits
        hash = (ch as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
    }

    let hue = (hash.unsigned_abs() as f64 * 0.618_033_988_7 * 360.0) % 360.0;
    let saturation = 50 + (hash >> 8).unsigned_abs() % 26;
    let lightness = 65 + (hash >> 16).unsigned_abs() % 21;

    hsl_to_hex(hue, saturation as f64 / 100.0, lightness as f64 / 100.0)
}

/// Black or white text color for the given background hex color.
///
/// Picks by relative luminance (`0.299R + 0.587G + 0.114B`) against a
/// 0.5 threshold. Unparseable input defaults to black text.
pub fn text_color_for(hex: &str) -> &'static str {
    let (r, g, b) = match parse_hex(hex) {
        Some(rgb) => rgb,
        None => return "#000000",
    };
    let luminance = (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) / 255.0;
    if luminance > 0.5 {
        "#000000"
    } else {
        "#FFFFFF"
    }
}

/// Parse `#rrggbb` (case-insensitive, leading `#` optional).
fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert HSL (hue in degrees, s/l in [0,1]) to a lowercase hex string.
fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());

    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let m = l - c / 2.0;
    let to_byte = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;

    format!("#{:02x}{:02x}{:02x}", to_byte(r1), to_byte(g1), to_byte(b1))
}
