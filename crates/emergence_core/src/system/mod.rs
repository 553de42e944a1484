use crate::config::AppConfig;
use crate::metrics::Metrics;
use crate::noise::NoiseField;
use crate::shockwave::ShockwaveSet;
use crate::spatial_hash::SpatialHash;
use emergence_data::{BehaviorKind, Particle};
use rand_chacha::ChaCha8Rng;

pub mod control;
pub mod init;
pub mod snapshot;
pub mod update;

/// Lifecycle of a [`ParticleSystem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SystemState {
    /// Constructed or reset, not stepped since.
    #[default]
    Idle,
    /// At least one step has run.
    Running,
}

/// Owns the particle collection, its spatial index and the live shockwaves.
///
/// All mutation goes through `step` and the control operations; hosts read
/// the result back through snapshots. Several independent systems can live
/// in one process.
#[derive(Debug)]
pub struct ParticleSystem {
    pub(crate) config: AppConfig,
    pub(crate) particles: Vec<Particle>,
    pub(crate) index: SpatialHash,
    pub(crate) shockwaves: ShockwaveSet,
    pub(crate) noise: NoiseField,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) seed: u64,
    pub(crate) state: SystemState,
    pub(crate) frame: u64,
    pub(crate) time: f64,
    pub(crate) next_id: u64,
    pub(crate) metrics: Metrics,
    /// Scratch buffers reused across steps.
    pub(crate) positions: Vec<(f64, f64)>,
    pub(crate) forces: Vec<(f64, f64)>,
}

impl ParticleSystem {
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn mode(&self) -> BehaviorKind {
        self.config.mode
    }

    pub fn state(&self) -> SystemState {
        self.state
    }

    /// Number of completed steps since construction or the last reset.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Noise time term fed to the force models.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// The resolved seed; reusing it with the same config replays the run.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// The neighbor index over the current particle positions.
    pub fn index(&self) -> &SpatialHash {
        &self.index
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Rebuilds the index from the current particle positions.
    pub(crate) fn rebuild_index(&mut self) {
        self.positions.clear();
        self.positions
            .extend(self.particles.iter().map(|p| (p.x, p.y)));
        self.index.build(&self.positions);
    }
}

/// Seed of the private RNG for one particle in one frame.
///
/// Depends only on the run seed, the frame and the particle id, so forces
/// come out the same whatever order the particles are processed in.
pub(crate) fn particle_seed(seed: u64, frame: u64, id: u64) -> u64 {
    seed.wrapping_add(frame)
        .wrapping_mul(0x517C_C1B7_2722_0A95)
        ^ id.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
