//! # tinct-palette — procedural palette generation
//!
//! Generates a harmonious four-color UI palette from an optional seed color.
//! One seed (or none at all) produces a fresh palette on every call: the
//! pipeline is pure math driven by an injected randomness source.
//!
//! # Architecture
//!
//! ```text
//! seed hex (optional)
//!     │
//!     ▼
//! generator.rs: resolve seed → base hue (malformed seeds absorbed)
//!     │
//!     ▼
//! scheme.rs:    weighted pick of a hue layout, 4 jittered hues
//!     │
//!     ▼
//! tone.rs:      render each hue through a tone role's S/L range
//!     │
//!     ▼
//! generator.rs: variety swaps → dedup/pad → exactly 4 hex colors
//! ```
//!
//! Randomness flows through the [`RandomSource`] trait so tests can script
//! every draw; production callers get [`EntropySource`], backed by the
//! OS-seeded `rand` thread generator.

// Hue/saturation/lightness variable names are inherently similar.
#![allow(clippy::similar_names)]
// Small integer-to-float casts (angles, percent ranges) are intentional.
#![allow(clippy::cast_precision_loss)]
// f64→f32/int truncation is intentional (random draws don't need f64 precision).
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

pub mod generator;
pub mod rng;
pub mod scheme;
pub mod tone;

pub use generator::{generate_palette, generate_palette_with};
pub use rng::{EntropySource, RandomSource};
pub use scheme::SchemeKind;
pub use tone::ToneRole;
