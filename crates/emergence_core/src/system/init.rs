use super::{ParticleSystem, SystemState};
use crate::config::AppConfig;
use crate::lifecycle;
use crate::metrics::Metrics;
use crate::noise::NoiseField;
use crate::shockwave::ShockwaveSet;
use crate::spatial_hash::SpatialHash;
use emergence_data::Particle;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

impl ParticleSystem {
    /// Creates a system seeded from `world.seed`, or from system randomness
    /// when no seed is configured.
    pub fn new(config: AppConfig) -> Self {
        let seed = config.world.seed.unwrap_or_else(rand::random);
        Self::with_seed(config, seed)
    }

    /// Creates a reproducible system: the same config and seed always
    /// produce the same sequence of frames.
    ///
    /// Out-of-range config values are clamped first.
    pub fn with_seed(mut config: AppConfig, seed: u64) -> Self {
        config.sanitize();
        config.world.seed = Some(seed);

        let mut system = Self {
            index: SpatialHash::new(config.index_cell_size()),
            shockwaves: ShockwaveSet::new(config.shockwave.clone()),
            noise: NoiseField::new(seed),
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            state: SystemState::Idle,
            frame: 0,
            time: 0.0,
            next_id: 0,
            metrics: Metrics::new(),
            particles: Vec::with_capacity(config.particles.count),
            positions: Vec::new(),
            forces: Vec::new(),
            config,
        };
        system.populate();

        tracing::info!(
            seed = seed,
            particles = system.particles.len(),
            mode = %system.config.mode,
            config = %system.config.fingerprint(),
            "Particle system created"
        );
        system
    }

    /// Creates a system around an explicit population instead of spawning
    /// `particles.count` random ones.
    ///
    /// The list is truncated to `particles.max_count`. Later spawns get ids
    /// above the largest one supplied.
    pub fn with_particles(mut config: AppConfig, seed: u64, mut particles: Vec<Particle>) -> Self {
        config.particles.count = 0;
        let mut system = Self::with_seed(config, seed);
        particles.truncate(system.config.particles.max_count);
        system.next_id = particles.iter().map(|p| p.id.saturating_add(1)).max().unwrap_or(0);
        system.config.particles.count = particles.len();
        system.particles = particles;
        system.rebuild_index();
        system
    }

    /// Respawns the current configuration from the original seed, clears
    /// shockwaves and returns to `Idle`.
    ///
    /// Count and mode changed at runtime are kept: the result matches a
    /// system freshly built from `config()` with the same seed.
    pub fn reset(&mut self) {
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.shockwaves.clear();
        self.frame = 0;
        self.time = 0.0;
        self.next_id = 0;
        self.state = SystemState::Idle;
        self.metrics.reset();
        self.particles.clear();
        self.populate();
        tracing::debug!(seed = self.seed, "Particle system reset");
    }

    fn populate(&mut self) {
        let count = self.config.particles.count;
        self.spawn_particles(count);
        self.rebuild_index();
    }

    /// Appends `count` particles at random positions with fresh ids.
    pub(crate) fn spawn_particles(&mut self, count: usize) {
        let kind = self.config.mode;
        self.particles.reserve(count);
        for _ in 0..count {
            let id = self.next_id;
            self.next_id += 1;
            let particle = lifecycle::spawn_random(id, &self.config, kind, &mut self.rng);
            self.particles.push(particle);
        }
    }
}
