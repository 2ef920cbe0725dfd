//! Tone roles — rendering a hue into a concrete color.
//!
//! A role is an abstract palette slot with a curated saturation/lightness
//! range, independent of hue:
//!
//! - `Soft`: airy pastel for backgrounds
//! - `Accent`: the star color
//! - `Muted`: balanced supporting tone
//! - `Deep`: grounding shade for contrast
//!
//! A couple of hue bands get corrections before rendering: yellows drop a
//! little lightness to avoid glare, and blue-cyan accents can carry a touch
//! more saturation.

use tinct_color::hsl_to_hex;

use crate::rng::RandomSource;

/// Absolute saturation bounds (percent) after all adjustments.
const SATURATION_BOUNDS: (i32, i32) = (18, 85);

/// Absolute lightness bounds (percent) after all adjustments.
const LIGHTNESS_BOUNDS: (i32, i32) = (28, 88);

/// An abstract tone slot in the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToneRole {
    /// Airy pastel, background-weight.
    Soft,
    /// Vivid mid-lightness star color.
    Accent,
    /// Balanced supporting tone.
    Muted,
    /// Dark grounding shade.
    Deep,
}

impl ToneRole {
    /// All roles, in palette assembly order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Soft, Self::Accent, Self::Muted, Self::Deep]
    }

    /// Base saturation range in percent, inclusive.
    #[must_use]
    pub const fn saturation_range(self) -> (i32, i32) {
        match self {
            Self::Soft => (24, 38),
            Self::Accent => (60, 72),
            Self::Muted => (26, 38),
            Self::Deep => (38, 52),
        }
    }

    /// Base lightness range in percent, inclusive.
    #[must_use]
    pub const fn lightness_range(self) -> (i32, i32) {
        match self {
            Self::Soft => (78, 86),
            Self::Accent => (50, 58),
            Self::Muted => (58, 66),
            Self::Deep => (32, 40),
        }
    }

    /// Hue-dependent corrections, as (saturation boost, lightness trim).
    fn adjustments(self, hue: f32) -> (i32, i32) {
        let mut s_boost = 0;
        let mut l_trim = 0;
        // Yellows glare at high lightness.
        if (45.0..=70.0).contains(&hue) {
            match self {
                Self::Soft => l_trim = 4,
                Self::Accent => l_trim = 2,
                Self::Muted | Self::Deep => {}
            }
        }
        // Blue-cyans can carry a touch more saturation on the accent.
        if (180.0..=220.0).contains(&hue) && self == Self::Accent {
            s_boost = 4;
        }
        (s_boost, l_trim)
    }

    /// Render this role at `hue` into a lowercase hex color.
    ///
    /// Saturation and lightness are integer draws from the role's range,
    /// corrected per hue band, then clamped to the absolute bounds
    /// [18, 85] × [28, 88]. Saturation is drawn first.
    pub fn render(self, hue: f32, rng: &mut impl RandomSource) -> String {
        let (s_lo, s_hi) = self.saturation_range();
        let (l_lo, l_hi) = self.lightness_range();
        let (s_boost, l_trim) = self.adjustments(hue);
        let s = (rng.int(s_lo, s_hi) + s_boost).clamp(SATURATION_BOUNDS.0, SATURATION_BOUNDS.1);
        let l = (rng.int(l_lo, l_hi) - l_trim).clamp(LIGHTNESS_BOUNDS.0, LIGHTNESS_BOUNDS.1);
        hsl_to_hex(hue, s as f32, l as f32)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::EntropySource;
    use crate::rng::testing::FixedSource;
    use tinct_color::hex_to_hsl;

    /// Render with all-zero draws and parse the result back.
    fn low_render(role: ToneRole, hue: f32) -> tinct_color::Hsl {
        let hex = role.render(hue, &mut FixedSource(0.0));
        hex_to_hsl(&hex).expect("render always produces valid hex")
    }

    /// With minimum draws, each role lands at the bottom of its range.
    #[test]
    fn range_floors() {
        let soft = low_render(ToneRole::Soft, 0.0);
        assert!((soft.s - 24.0).abs() < 1.5, "soft s {}", soft.s);
        assert!((soft.l - 78.0).abs() < 1.5, "soft l {}", soft.l);

        let deep = low_render(ToneRole::Deep, 300.0);
        assert!((deep.s - 38.0).abs() < 1.5, "deep s {}", deep.s);
        assert!((deep.l - 32.0).abs() < 1.5, "deep l {}", deep.l);
    }

    /// The yellow band trims lightness: 4 for Soft, 2 for Accent, none for
    /// the other roles.
    #[test]
    fn yellow_band_trims_lightness() {
        let soft = low_render(ToneRole::Soft, 60.0);
        assert!((soft.l - 74.0).abs() < 1.5, "soft l {}", soft.l);

        let accent = low_render(ToneRole::Accent, 60.0);
        assert!((accent.l - 48.0).abs() < 1.5, "accent l {}", accent.l);

        let deep = low_render(ToneRole::Deep, 60.0);
        assert!((deep.l - 32.0).abs() < 1.5, "deep l {}", deep.l);
    }

    /// The blue-cyan band boosts only the accent's saturation.
    #[test]
    fn cyan_band_boosts_accent() {
        let accent = low_render(ToneRole::Accent, 200.0);
        assert!((accent.s - 64.0).abs() < 1.5, "accent s {}", accent.s);

        let muted = low_render(ToneRole::Muted, 200.0);
        assert!((muted.s - 26.0).abs() < 1.5, "muted s {}", muted.s);
    }

    /// Band edges are inclusive.
    #[test]
    fn band_edges() {
        let at_45 = low_render(ToneRole::Soft, 45.0);
        assert!((at_45.l - 74.0).abs() < 1.5, "l {}", at_45.l);
        let at_71 = low_render(ToneRole::Soft, 71.0);
        assert!((at_71.l - 78.0).abs() < 1.5, "l {}", at_71.l);
    }

    /// Every render stays inside the absolute bounds, any role, any hue.
    #[test]
    fn absolute_bounds() {
        let mut rng = EntropySource::new();
        for &role in ToneRole::all() {
            for hue in (0..360).step_by(5) {
                let hex = role.render(hue as f32, &mut rng);
                let hsl = hex_to_hsl(&hex).expect("valid hex");
                assert!(
                    (16.5..=86.5).contains(&hsl.s),
                    "{role:?} hue {hue}: saturation {} out of bounds",
                    hsl.s
                );
                assert!(
                    (26.5..=89.5).contains(&hsl.l),
                    "{role:?} hue {hue}: lightness {} out of bounds",
                    hsl.l
                );
            }
        }
    }
}
