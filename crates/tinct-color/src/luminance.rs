//! WCAG relative luminance and the light/dark text decision.
//!
//! Luminance math runs in `f64`: the gamma exponent amplifies channel error,
//! and the threshold comparison should not wobble with build flags.

use crate::hsl::parse_rgb8;

/// Text color used over light backgrounds.
pub const DARK_TEXT: &str = "#111111";

/// Text color used over dark backgrounds.
pub const LIGHT_TEXT: &str = "#ffffff";

/// Luminance above which a background counts as "light".
///
/// Deliberately below the midpoint 0.5: mid-tone backgrounds read better
/// with dark text, so the split is biased toward [`DARK_TEXT`].
const LIGHT_BACKGROUND_THRESHOLD: f64 = 0.42;

/// Linearize one sRGB channel per WCAG 2.1.
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of a hex color per WCAG 2.1.
///
/// Uses the standard sRGB linearization + weighted sum:
///   L = 0.2126 · `R_lin` + 0.7152 · `G_lin` + 0.0722 · `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
/// Unparsable input is absorbed as luminance 0.0.
#[must_use]
pub fn relative_luminance(hex: &str) -> f64 {
    let Some((r8, g8, b8)) = parse_rgb8(hex) else {
        return 0.0;
    };
    let r = srgb_to_linear(f64::from(r8) / 255.0);
    let g = srgb_to_linear(f64::from(g8) / 255.0);
    let b = srgb_to_linear(f64::from(b8) / 255.0);
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// Pick a readable text color for the given background.
///
/// Returns [`DARK_TEXT`] over light backgrounds and [`LIGHT_TEXT`] over
/// dark ones. Unparsable backgrounds count as black and get light text.
#[must_use]
pub fn text_color_for(hex: &str) -> &'static str {
    if relative_luminance(hex) > LIGHT_BACKGROUND_THRESHOLD {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
