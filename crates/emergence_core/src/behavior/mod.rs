//! Force models, one per [`BehaviorKind`].
//!
//! Each model computes the mode-specific acceleration of a single particle
//! from a read-only view of the frame. Models hold no state of their own;
//! everything they need arrives through [`ForceContext`].

use crate::config::AppConfig;
use crate::noise::NoiseField;
use crate::spatial_hash::SpatialHash;
use emergence_data::{BehaviorKind, Particle, Rgb};
use rand_chacha::ChaCha8Rng;

pub mod chaos;
pub mod emergent;
pub mod gravity;
pub mod neural;

pub use chaos::Chaos;
pub use emergent::Emergent;
pub use gravity::Gravity;
pub use neural::Neural;

/// Read-only view of one frame, shared by every force computation.
///
/// `index` must have been rebuilt from `particles` before the context is
/// created; slice positions are the indices stored in the hash.
pub struct ForceContext<'a> {
    pub particles: &'a [Particle],
    pub index: &'a SpatialHash,
    pub config: &'a AppConfig,
    pub noise: &'a NoiseField,
    /// Slowly advancing noise time term.
    pub time: f64,
    pub width: f64,
    pub height: f64,
}

impl ForceContext<'_> {
    /// Calls `visit(neighbor, dx, dy, dist)` for every other particle
    /// strictly within `radius` of particle `idx`.
    ///
    /// `(dx, dy)` points from the particle to the neighbor. Overlapping
    /// pairs (distance 0) are skipped.
    pub fn for_each_neighbor<F>(&self, idx: usize, radius: f64, mut visit: F)
    where
        F: FnMut(&Particle, f64, f64, f64),
    {
        let Some(me) = self.particles.get(idx) else {
            return;
        };
        let radius_sq = radius * radius;
        self.index.query_callback(me.x, me.y, radius, |j| {
            if j == idx {
                return;
            }
            let Some(other) = self.particles.get(j) else {
                return;
            };
            let dx = other.x - me.x;
            let dy = other.y - me.y;
            let dist_sq = dx * dx + dy * dy;
            if dist_sq <= f64::EPSILON || dist_sq >= radius_sq {
                return;
            }
            visit(other, dx, dy, dist_sq.sqrt());
        });
    }
}

/// A mode's force computation.
pub trait ForceModel: Send + Sync {
    fn kind(&self) -> BehaviorKind;

    /// Acceleration contribution for particle `idx`.
    ///
    /// Must only read `ctx`; `rng` is private to this particle and frame.
    fn compute_force(&self, idx: usize, ctx: &ForceContext<'_>, rng: &mut ChaCha8Rng)
        -> (f64, f64);
}

/// Dispatch from the configured mode to its model.
pub trait BehaviorLogic {
    fn model(&self) -> &'static dyn ForceModel;
    fn palette(&self) -> &'static [Rgb];
}

impl BehaviorLogic for BehaviorKind {
    fn model(&self) -> &'static dyn ForceModel {
        match self {
            BehaviorKind::Emergent => &Emergent,
            BehaviorKind::Neural => &Neural,
            BehaviorKind::Gravity => &Gravity,
            BehaviorKind::Chaos => &Chaos,
        }
    }

    fn palette(&self) -> &'static [Rgb] {
        crate::palette::palette(*self)
    }
}
