//! # tinct-color — hex/HSL conversions and WCAG luminance
//!
//! The color math underneath the palette generator. Everything here is a
//! pure function: hex strings in, HSL triples or luminance values out.
//!
//! # Architecture
//!
//! ```text
//! hsl.rs:       hex ↔ HSL conversion (8-bit quantized)
//! luminance.rs: WCAG relative luminance + text-contrast decision
//! ```
//!
//! # Color Space
//!
//! All generation happens in HSL, the cylindrical hue/saturation/lightness
//! model. Hex round trips quantize to 8 bits per channel, so a reconstructed
//! hue is only accurate to within a degree or two.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Channel extrema are exact quantized values; comparing them is intentional.
#![allow(clippy::float_cmp)]
// Channel rounding to u8 is the whole point of hex rendering.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

pub mod hsl;
pub mod luminance;

pub use hsl::{Hsl, hex_to_hsl, hex_to_rgb8, hsl_to_hex, normalize_hue};
pub use luminance::{DARK_TEXT, LIGHT_TEXT, relative_luminance, text_color_for};
