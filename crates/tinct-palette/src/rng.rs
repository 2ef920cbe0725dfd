//! Randomness plumbing for palette generation.
//!
//! The pipeline never touches a generator directly: everything draws through
//! the [`RandomSource`] trait, so unit tests can script exact sequences and
//! production code gets OS entropy. Only `uniform` is required — the integer
//! and ranged-float draws are derived from it, which keeps scripted test
//! sources honest about what the pipeline will actually see.

use rand::Rng;
use rand::rngs::ThreadRng;

// ─── RandomSource ────────────────────────────────────────────────────────────

/// A uniform randomness capability.
///
/// No seeding or determinism is exposed; every call may differ. There are
/// no failure modes — a source always returns a value.
pub trait RandomSource {
    /// A uniform draw in [0, 1).
    fn uniform(&mut self) -> f64;

    /// A uniform integer in [min, max], inclusive on both ends.
    fn int(&mut self, min: i32, max: i32) -> i32 {
        let span = f64::from(max - min + 1);
        (self.uniform() * span).floor() as i32 + min
    }

    /// A uniform float in [min, max).
    fn float(&mut self, min: f32, max: f32) -> f32 {
        let t = self.uniform() as f32;
        (max - min).mul_add(t, min)
    }
}

// ─── EntropySource ───────────────────────────────────────────────────────────

/// The production randomness source.
///
/// Wraps the thread-local `rand` generator, which is seeded from OS entropy
/// and periodically reseeded — cryptographically strong when the platform
/// provides it, with the fallback handled inside the crate. Construction is
/// cheap; the thread-local state is shared.
#[derive(Debug, Clone, Default)]
pub struct EntropySource {
    rng: ThreadRng,
}

impl EntropySource {
    /// Create a source backed by the thread-local generator.
    #[must_use]
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl RandomSource for EntropySource {
    fn uniform(&mut self) -> f64 {
        self.rng.random()
    }
}

// ─── Test doubles ────────────────────────────────────────────────────────────


// ─── Tests ───────────────────────────────────────────────────────────────────
