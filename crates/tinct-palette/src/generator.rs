//! Palette assembly — the one entry point into the pipeline.
//!
//! `generate_palette` resolves the seed, derives four hues under a weighted
//! scheme, renders them through fixed tone roles, applies two variety swaps,
//! and resolves duplicate collisions by padding. The contract is absolute:
//! every call returns exactly four pairwise-distinct lowercase hex colors,
//! for any seed including empty and garbage strings.

use tinct_color::{hex_to_hsl, hsl_to_hex, normalize_hue};

use crate::rng::{EntropySource, RandomSource};
use crate::scheme::SchemeKind;
use crate::tone::ToneRole;

/// Hard cap on padding iterations. The divergence step walks the full hue
/// wheel well before this, so the cap is never reached in practice.
const MAX_PAD_ATTEMPTS: i32 = 360;

/// Extra hue divergence per failed padding attempt, coprime with 360 so
/// repeated attempts visit the whole wheel even under a constant source.
const PAD_DIVERGENCE_STEP: i32 = 23;

// ─── Seed resolution ─────────────────────────────────────────────────────────

/// The resolved base color for one generation run.
///
/// Only the hue feeds the scheme/tone pipeline; the palette's final
/// saturation and lightness are governed entirely by the tone roles, never
/// by the seed's own tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedTone {
    /// Base hue in degrees, [0, 360).
    pub hue: f32,
    /// Seed saturation in percent, clamped to [38, 75].
    pub saturation: f32,
    /// Seed lightness in percent, clamped to [40, 62].
    pub lightness: f32,
}

/// Resolve an optional seed hex into a base color.
///
/// A parsable seed contributes its hue directly, with saturation and
/// lightness clamped into mid-tone bands. A missing or malformed seed is
/// absorbed — the base degrades to fully randomized mid-tone values and
/// no error surfaces.
pub fn resolve_seed(seed: Option<&str>, rng: &mut impl RandomSource) -> SeedTone {
    if let Some(hsl) = seed.and_then(hex_to_hsl) {
        return SeedTone {
            hue: hsl.h,
            saturation: hsl.s.clamp(38.0, 75.0),
            lightness: hsl.l.clamp(40.0, 62.0),
        };
    }
    SeedTone {
        hue: rng.int(0, 359) as f32,
        saturation: rng.int(55, 70) as f32,
        lightness: rng.int(45, 60) as f32,
    }
}

// ─── Assembly ────────────────────────────────────────────────────────────────

/// Generate a four-color palette from an optional seed hex.
///
/// Uses the entropy-backed randomness source. See
/// [`generate_palette_with`] for the injectable variant.
#[must_use]
pub fn generate_palette(seed: Option<&str>) -> [String; 4] {
    generate_palette_with(seed, &mut EntropySource::new())
}

/// Generate a four-color palette drawing all randomness from `rng`.
///
/// The pipeline: seed resolution → weighted scheme pick → four jittered
/// hues → tone-role rendering in fixed order (Soft, Accent, Muted, Deep) →
/// variety swaps → deduplication and padding. Returns exactly four
/// pairwise-distinct lowercase `#rrggbb` strings.
pub fn generate_palette_with(seed: Option<&str>, rng: &mut impl RandomSource) -> [String; 4] {
    let base = resolve_seed(seed, rng);
    let hues = SchemeKind::pick(rng).hues(base.hue, rng);

    // Fixed role order; role identity is not retained in the output.
    let rendered = [
        ToneRole::Soft.render(hues[0], rng),
        ToneRole::Accent.render(hues[1], rng),
        ToneRole::Muted.render(hues[2], rng),
        ToneRole::Deep.render(hues[3], rng),
    ];

    let shuffled = variety_swaps(rendered, rng);
    dedup_and_pad(shuffled, base.hue, rng)
}

/// Break the fixed role→position mapping across repeated calls.
///
/// Two independent coin flips: one may swap positions (0, 1), the other
/// positions (2, 3). Builds a new sequence rather than mutating in place.
fn variety_swaps(colors: [String; 4], rng: &mut impl RandomSource) -> [String; 4] {
    let [a, b, c, d] = colors;
    let (a, b) = if rng.uniform() > 0.5 { (b, a) } else { (a, b) };
    let (c, d) = if rng.uniform() > 0.5 { (d, c) } else { (c, d) };
    [a, b, c, d]
}

/// Collapse duplicates (first-seen order) and pad back up to four colors.
///
/// Padding synthesizes a neighbor of the base hue rendered directly through
/// `hsl_to_hex`, bypassing the tone roles. Each failed attempt adds a fixed
/// extra divergence to the hue spread, so even a constant random source
/// terminates within the attempt cap.
fn dedup_and_pad(
    colors: [String; 4],
    base_hue: f32,
    rng: &mut impl RandomSource,
) -> [String; 4] {
    let mut uniq: Vec<String> = Vec::with_capacity(4);
    for color in colors {
        if !uniq.contains(&color) {
            uniq.push(color);
        }
    }

    for attempt in 0..MAX_PAD_ATTEMPTS {
        if uniq.len() >= 4 {
            break;
        }
        let spread = rng.int(10, 60) + attempt * PAD_DIVERGENCE_STEP;
        let hue = normalize_hue(base_hue + spread as f32);
        let candidate = hsl_to_hex(hue, rng.int(45, 65) as f32, rng.int(45, 60) as f32);
        if !uniq.contains(&candidate) {
            uniq.push(candidate);
        }
    }

    // Unreachable with the divergence step; the contract is absolute anyway.
    for anchor in ["#111111", "#777777", "#bbbbbb", "#ffffff"] {
        if uniq.len() >= 4 {
            break;
        }
        if !uniq.iter().any(|c| c == anchor) {
            uniq.push(anchor.to_string());
        }
    }

    let mut iter = uniq.into_iter();
    std::array::from_fn(|_| iter.next().unwrap_or_default())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
