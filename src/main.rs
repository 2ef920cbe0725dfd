// SPDX-License-Identifier: MIT
//
// tinct — a procedural color-palette generator for UI themes.
//
// This is the thin binary that wires together the crates:
//
//   tinct-color   → hex ↔ HSL math, WCAG luminance, text contrast
//   tinct-palette → weighted hue schemes, tone roles, palette assembly
//
// Usage:
//
//   tinct             generate a palette from a random base color
//   tinct '#3366cc'   generate a palette seeded by a color
//
// An argument that is not `#` plus six hex digits (after trimming and
// case-folding) is treated as no seed at all — the generator's contract
// absorbs malformed input rather than erroring.
//
// Each palette entry prints as a truecolor swatch with its uppercase hex
// label, in whichever of the two text colors reads against it.

use std::env;

use regex::Regex;

use tinct_color::{hex_to_rgb8, text_color_for};
use tinct_palette::generate_palette;

/// Validate a raw seed argument: trim, lowercase, and require `#` plus
/// exactly six hex digits. Anything else means "no seed".
fn sanitize_seed(raw: &str) -> Option<String> {
    let pattern = Regex::new("^#[0-9a-f]{6}$").ok()?;
    let v = raw.trim().to_lowercase();
    pattern.is_match(&v).then_some(v)
}

/// Print one palette entry as a labeled truecolor swatch.
///
/// Falls back to a plain label if the hex fails to parse, which the
/// generator's contract rules out.
fn print_swatch(hex: &str) {
    let label = hex.to_uppercase();
    let text = text_color_for(hex);
    match (hex_to_rgb8(hex), hex_to_rgb8(text)) {
        (Some((r, g, b)), Some((tr, tg, tb))) => {
            println!("\x1b[48;2;{r};{g};{b}m\x1b[38;2;{tr};{tg};{tb}m  {label}  \x1b[0m");
        }
        _ => println!("{label}"),
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let seed = args.get(1).and_then(|raw| sanitize_seed(raw));

    for hex in &generate_palette(seed.as_deref()) {
        print_swatch(hex);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
