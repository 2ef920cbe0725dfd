//! Hex ↔ HSL conversion.
//!
//! The hex side is strict: an optional leading `#` followed by exactly six
//! hex digits, case-insensitive, surrounding whitespace ignored. Shorthand
//! `#rgb` forms are rejected — every color in the system is a full
//! 8-bit-per-channel value, and the canonical rendering is lowercase.

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in HSL cylindrical coordinates.
///
/// Obtained from [`hex_to_hsl`] or built directly. Values outside the
/// documented ranges are accepted by [`hsl_to_hex`] (hue wraps, the rest
/// clamp through channel rounding), but the parser always returns
/// normalized values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue angle in degrees, 0.0 to 360.0 (exclusive).
    pub h: f32,
    /// Saturation in percent, 0.0 to 100.0.
    pub s: f32,
    /// Lightness in percent, 0.0 to 100.0.
    pub l: f32,
}

/// Normalize a hue angle to [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f32) -> f32 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

// ─── HSL → hex ───────────────────────────────────────────────────────────────

/// Render an HSL color as a lowercase `#rrggbb` hex string.
///
/// - `h`: hue in degrees (any real value; wraps mod 360)
/// - `s`: saturation in percent, 0–100
/// - `l`: lightness in percent, 0–100
///
/// Uses the standard HSL→RGB formulation: each channel is
/// `l − a·clamp(min(k−3, 9−k, 1), −1, 1)` with `a = s·min(l, 1−l)` and
/// `k = (n + h/30) mod 12`, sampled at n = 0 (red), 8 (green), 4 (blue).
#[must_use]
pub fn hsl_to_hex(h: f32, s: f32, l: f32) -> String {
    let s = s / 100.0;
    let l = l / 100.0;
    let a = s * l.min(1.0 - l);

    let channel = |n: f32| -> u8 {
        let k = (n + h / 30.0).rem_euclid(12.0);
        let m = (k - 3.0).min(9.0 - k).min(1.0).clamp(-1.0, 1.0);
        let v = a.mul_add(-m, l);
        (v * 255.0).round().clamp(0.0, 255.0) as u8
    };

    format!("#{:02x}{:02x}{:02x}", channel(0.0), channel(8.0), channel(4.0))
}

// ─── Hex → HSL ───────────────────────────────────────────────────────────────

/// Parse a `#rrggbb` hex string into HSL.
///
/// Accepts an optional leading `#` and exactly six hex digits in either
/// case; surrounding whitespace is trimmed. Returns `None` for anything
/// else — there is no panic path.
#[must_use]
pub fn hex_to_hsl(hex: &str) -> Option<Hsl> {
    let (r8, g8, b8) = parse_rgb8(hex)?;
    let r = f32::from(r8) / 255.0;
    let g = f32::from(g8) / 255.0;
    let b = f32::from(b8) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic: hue and saturation collapse to zero.
        return Some(Hsl { h: 0.0, s: 0.0, l: l * 100.0 });
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Some(Hsl {
        h: normalize_hue(h * 60.0),
        s: s * 100.0,
        l: l * 100.0,
    })
}

// ─── Hex parsing ─────────────────────────────────────────────────────────────

/// Parse a hex string into 8-bit RGB channels.
///
/// Same strictness as [`hex_to_hsl`]. Useful for emitting truecolor escape
/// sequences without going through HSL.
#[must_use]
pub fn hex_to_rgb8(hex: &str) -> Option<(u8, u8, u8)> {
    parse_rgb8(hex)
}

pub(crate) fn parse_rgb8(hex: &str) -> Option<(u8, u8, u8)> {
    let s = hex.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();
    if bytes.len() != 6 {
        return None;
    }
    let r = parse_hex_byte(&bytes[0..2])?;
    let g = parse_hex_byte(&bytes[2..4])?;
    let b = parse_hex_byte(&bytes[4..6])?;
    Some((r, g, b))
}

const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Assert a string is a canonical lowercase `#rrggbb` value.
    fn assert_canonical_hex(s: &str) {
        assert_eq!(s.len(), 7, "bad length: {s}");
        assert!(s.starts_with('#'), "missing #: {s}");
        assert!(
            s[1..].bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)),
            "non-hex or uppercase digit: {s}"
        );
    }

    /// Primary corners of the RGB cube come out exact.
    #[test]
    fn primaries() {
        assert_eq!(hsl_to_hex(0.0, 100.0, 50.0), "#ff0000");
        assert_eq!(hsl_to_hex(120.0, 100.0, 50.0), "#00ff00");
        assert_eq!(hsl_to_hex(240.0, 100.0, 50.0), "#0000ff");
        assert_eq!(hsl_to_hex(0.0, 0.0, 0.0), "#000000");
        assert_eq!(hsl_to_hex(0.0, 0.0, 100.0), "#ffffff");
    }

    /// A known mid-tone blue renders exactly.
    #[test]
    fn known_blue() {
        assert_eq!(hsl_to_hex(220.0, 60.0, 50.0), "#3366cc");
    }

    /// Hue wraps: 360 + h renders the same as h.
    #[test]
    fn hue_wraps() {
        assert_eq!(hsl_to_hex(580.0, 60.0, 50.0), hsl_to_hex(220.0, 60.0, 50.0));
    }

    /// Output is always canonical lowercase hex across a hue/tone sweep.
    #[test]
    fn output_always_canonical() {
        for h in (0..360).step_by(7) {
            for (s, l) in [(0.0, 50.0), (55.0, 30.0), (85.0, 88.0), (100.0, 100.0)] {
                #[allow(clippy::cast_precision_loss)]
                let hex = hsl_to_hex(h as f32, s, l);
                assert_canonical_hex(&hex);
            }
        }
    }

    /// Parsing recovers the known blue's components.
    #[test]
    fn parse_known_blue() {
        let hsl = hex_to_hsl("#3366cc").unwrap();
        assert!((hsl.h - 220.0).abs() < 0.5, "hue {}", hsl.h);
        assert!((hsl.s - 60.0).abs() < 0.5, "saturation {}", hsl.s);
        assert!((hsl.l - 50.0).abs() < 0.5, "lightness {}", hsl.l);
    }

    /// The `#` prefix is optional, case is ignored, whitespace is trimmed.
    #[test]
    fn lenient_surface() {
        let a = hex_to_hsl("#3366CC").unwrap();
        let b = hex_to_hsl("3366cc").unwrap();
        let c = hex_to_hsl("  #3366cc  ").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    /// Malformed input returns None rather than panicking.
    #[test]
    fn rejects_malformed() {
        assert_eq!(hex_to_hsl(""), None);
        assert_eq!(hex_to_hsl("#zzzzzz"), None);
        assert_eq!(hex_to_hsl("#fff"), None);
        assert_eq!(hex_to_hsl("#ffffff00"), None);
        assert_eq!(hex_to_hsl("not a color"), None);
    }

    /// Grays parse as achromatic: hue 0, saturation 0.
    #[test]
    fn achromatic() {
        let gray = hex_to_hsl("#808080").unwrap();
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
        assert!((gray.l - 50.2).abs() < 0.5, "lightness {}", gray.l);
    }

    /// Round trips are stable after one quantization: a second pass through
    /// hex → hsl → hex changes each component by at most ±1.
    #[test]
    fn round_trip_stable() {
        for hex in ["#3366cc", "#ff8800", "#1a936f", "#d7263d", "#0b032d", "#f6f7eb"] {
            let first = hex_to_hsl(hex).unwrap();
            let rendered = hsl_to_hex(first.h, first.s, first.l);
            let second = hex_to_hsl(&rendered).unwrap();
            assert!((first.h - second.h).abs() < 1.0, "{hex} hue drift");
            assert!((first.s - second.s).abs() < 1.0, "{hex} saturation drift");
            assert!((first.l - second.l).abs() < 1.0, "{hex} lightness drift");
        }
    }

    /// Negative hues normalize into [0, 360).
    #[test]
    fn normalize_negative() {
        assert!((normalize_hue(-30.0) - 330.0).abs() < f32::EPSILON);
        assert!((normalize_hue(-360.0)).abs() < f32::EPSILON);
        assert!((normalize_hue(725.0) - 5.0).abs() < 0.001);
    }
}
