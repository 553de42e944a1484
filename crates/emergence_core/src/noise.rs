//! Seeded 2D gradient noise.
//!
//! Integer lattice points are hashed through a shuffled permutation table to
//! one of eight gradients. The four corners around a sample point are blended
//! with the quintic easing `t³(t(6t − 15) + 10)`, so the field and its first
//! two derivatives are continuous across lattice boundaries.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f64::consts::TAU;

const TABLE_SIZE: usize = 256;

#[derive(Clone)]
pub struct NoiseField {
    perm: [u8; TABLE_SIZE * 2],
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField")
            .field("perm_head", &&self.perm[..8])
            .finish()
    }
}

#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

#[inline]
fn grad(hash: u8, x: f64, y: f64) -> f64 {
    match hash & 7 {
        0 => x + y,
        1 => -x + y,
        2 => x - y,
        3 => -x - y,
        4 => x,
        5 => -x,
        6 => y,
        _ => -y,
    }
}

impl NoiseField {
    /// Builds the permutation table from a fixed seed.
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::from_rng(&mut rng)
    }

    /// Builds the permutation table from an existing random source.
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut table: Vec<u8> = (0..=255u8).collect();
        table.shuffle(rng);
        let mut perm = [0u8; TABLE_SIZE * 2];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = table[i % TABLE_SIZE];
        }
        Self { perm }
    }

    /// Samples the field at `(x, y)`. Output is in `[-1, 1]`.
    ///
    /// Non-finite coordinates sample as `0.0`.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        if !x.is_finite() || !y.is_finite() {
            return 0.0;
        }
        let x0 = x.floor();
        let y0 = y.floor();
        let xi = (x0 as i64).rem_euclid(TABLE_SIZE as i64) as usize;
        let yi = (y0 as i64).rem_euclid(TABLE_SIZE as i64) as usize;
        let fx = x - x0;
        let fy = y - y0;

        let a = self.perm[xi] as usize + yi;
        let b = self.perm[xi + 1] as usize + yi;
        let aa = self.perm[a];
        let ab = self.perm[a + 1];
        let ba = self.perm[b];
        let bb = self.perm[b + 1];

        let u = fade(fx);
        let v = fade(fy);
        let bottom = lerp(grad(aa, fx, fy), grad(ba, fx - 1.0, fy), u);
        let top = lerp(grad(ab, fx, fy - 1.0), grad(bb, fx - 1.0, fy - 1.0), u);
        lerp(bottom, top, v).clamp(-1.0, 1.0)
    }

    /// Unit drift direction at a position and time.
    ///
    /// The noise value is mapped to an angle, which keeps neighboring
    /// particles turning together as the time term advances.
    pub fn flow(&self, x: f64, y: f64, time: f64, scale: f64) -> (f64, f64) {
        let angle = self.sample(x * scale + time, y * scale - time * 0.5) * TAU;
        (angle.cos(), angle.sin())
    }
}
