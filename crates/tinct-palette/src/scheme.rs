//! Hue-layout schemes — deriving four related hues from one base hue.
//!
//! Each scheme is a pure function from (base hue, jitter source) to an
//! ordered 4-tuple of hues. Selection between schemes is weighted toward the
//! layouts that read as harmonious rather than mechanical: a tight analogous
//! cluster with one accent most of the time, a pure tetradic wheel rarely.

use tinct_color::normalize_hue;

use crate::rng::RandomSource;

/// Golden angle in degrees — used to de-mechanize the tetradic layout.
const GOLDEN_ANGLE: f32 = 137.5;

/// Per-hue jitter bound in degrees: each hue moves by a fresh draw in
/// [-JITTER, +JITTER) so repeated generations stay visually varied.
const JITTER: f32 = 8.0;

/// The kind of hue layout used to derive a palette's four hues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeKind {
    /// Tight cluster around the base (±28°) plus a complementary accent.
    AnalogousPlusAccent,
    /// Base, its two split-complements (+150°, +210°), and a near neighbor.
    SplitComplementary,
    /// Base, complement, and a +24° neighbor of each.
    Complementary,
    /// Base, complement, and two golden-angle nudges instead of the
    /// canonical 90°/270° square — a regular four-point wheel looks
    /// mechanical.
    Tetradic,
}

impl SchemeKind {
    /// All schemes, in selection-walk order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::AnalogousPlusAccent,
            Self::SplitComplementary,
            Self::Complementary,
            Self::Tetradic,
        ]
    }

    /// Selection weight of this scheme. Weights need not sum to 1.
    #[must_use]
    pub const fn weight(self) -> f64 {
        match self {
            Self::AnalogousPlusAccent => 0.42,
            Self::SplitComplementary => 0.32,
            Self::Complementary => 0.16,
            Self::Tetradic => 0.10,
        }
    }

    /// Human-readable name of this scheme.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AnalogousPlusAccent => "analogous+accent",
            Self::SplitComplementary => "split-complementary",
            Self::Complementary => "complementary",
            Self::Tetradic => "tetradic",
        }
    }

    /// Parse a scheme from its name string (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|s| s.name() == lower).copied()
    }

    /// Pick a scheme by weighted random selection.
    ///
    /// Draws `r = uniform() · Σweights` and walks the list subtracting each
    /// weight until the remainder is ≤ 0. If floating-point error exhausts
    /// the list, the final entry wins.
    pub fn pick(rng: &mut impl RandomSource) -> Self {
        let total: f64 = Self::all().iter().map(|s| s.weight()).sum();
        let mut r = rng.uniform() * total;
        for &kind in Self::all() {
            r -= kind.weight();
            if r <= 0.0 {
                return kind;
            }
        }
        Self::Tetradic
    }

    /// Derive four hues from `base_hue` under this scheme.
    ///
    /// Every hue gets an independent jitter draw on top of its fixed offset;
    /// all results are normalized into [0, 360).
    pub fn hues(self, base_hue: f32, rng: &mut impl RandomSource) -> [f32; 4] {
        let mut at = |offset: f32| {
            normalize_hue(base_hue + offset + rng.float(-JITTER, JITTER))
        };
        match self {
            Self::AnalogousPlusAccent => [at(-28.0), at(0.0), at(28.0), at(180.0)],
            Self::SplitComplementary => [at(0.0), at(150.0), at(210.0), at(20.0)],
            Self::Complementary => [at(0.0), at(180.0), at(24.0), at(204.0)],
            Self::Tetradic => [
                at(0.0),
                at(180.0),
                at(GOLDEN_ANGLE * 0.12),
                at(2.0 * GOLDEN_ANGLE * 0.12),
            ],
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
