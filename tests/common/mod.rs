pub mod macros;

use emergence_lib::model::config::AppConfig;
use emergence_lib::model::data::{BehaviorKind, Particle};
use emergence_lib::model::system::ParticleSystem;

type ParticleMod = Box<dyn FnOnce(&mut Particle)>;

#[allow(dead_code)]
pub struct SystemBuilder {
    config: AppConfig,
    particles: Vec<(Particle, Vec<ParticleMod>)>,
    seed: u64,
    random_count: Option<usize>,
}

#[allow(dead_code)]
impl SystemBuilder {
    /// Empty field, default config, seed 42. Noise drift and jitter stay on.
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.particles.count = 0;
        Self {
            config,
            particles: Vec::new(),
            seed: 42,
            random_count: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_mode(mut self, mode: BehaviorKind) -> Self {
        self.config.mode = mode;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    /// Turns off every random or drift term so forces come only from
    /// neighbors, the pointer and shockwaves.
    pub fn quiet(self) -> Self {
        self.with_config(|c| {
            c.behavior.emergent_drift = 0.0;
            c.behavior.neural_jitter = 0.0;
            c.behavior.chaos_jitter = 0.0;
            c.behavior.chaos_jump_chance = 0.0;
            c.behavior.chaos_drift = 0.0;
            c.behavior.gravity_center_pull = 0.0;
        })
    }

    /// Random population of `count` particles instead of hand-placed ones.
    pub fn with_random_particles(mut self, count: usize) -> Self {
        self.random_count = Some(count);
        self
    }

    pub fn with_particle(mut self, x: f64, y: f64) -> Self {
        let id = self.particles.len() as u64;
        self.particles.push((Particle::at(id, x, y), Vec::new()));
        self
    }

    pub fn with_moving_particle(mut self, x: f64, y: f64, vx: f64, vy: f64) -> Self {
        let id = self.particles.len() as u64;
        let set_velocity: ParticleMod = Box::new(move |p| {
            p.vx = vx;
            p.vy = vy;
        });
        self.particles
            .push((Particle::at(id, x, y), vec![set_velocity]));
        self
    }

    pub fn build(self) -> ParticleSystem {
        if let Some(count) = self.random_count {
            let mut config = self.config;
            config.particles.count = count;
            return ParticleSystem::with_seed(config, self.seed);
        }
        let particles = self
            .particles
            .into_iter()
            .map(|(mut p, mods)| {
                for m in mods {
                    m(&mut p);
                }
                p
            })
            .collect();
        ParticleSystem::with_particles(self.config, self.seed, particles)
    }
}
