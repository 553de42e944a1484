use super::{particle_seed, ParticleSystem, SystemState};
use crate::behavior::{BehaviorLogic, ForceContext};
use crate::config::AppConfig;
use crate::interaction::InteractionState;
use crate::lifecycle;
use crate::metrics;
use crate::shockwave::ShockwaveSet;
use emergence_data::Particle;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl ParticleSystem {
    /// Advances the simulation by one frame.
    ///
    /// Phases, in order:
    /// - Rebuild the spatial index from current positions
    /// - Sum mode, pointer and shockwave forces for every particle into a
    ///   buffer while the frame is read-only
    /// - Per particle: add force, friction, speed clamp, integrate, wrap,
    ///   update energy and pulse
    /// - Age shockwaves
    /// - Re-index the moved particles, so `index()` and `stats()` see the
    ///   positions the frame ended with
    ///
    /// Never fails; degenerate geometry contributes no force.
    pub fn step(&mut self, input: &InteractionState) {
        let started = metrics::clock();

        self.pass_spatial_indexing();
        self.pass_forces(input);
        self.pass_integration();
        self.shockwaves.step();
        self.pass_spatial_indexing();

        self.frame += 1;
        self.time += self.config.behavior.noise_time_step;
        self.state = SystemState::Running;

        let elapsed = started.map(|t| t.elapsed()).unwrap_or_default();
        self.metrics
            .record_step(elapsed, self.particles.len(), self.shockwaves.len());
    }

    fn pass_spatial_indexing(&mut self) {
        self.rebuild_index();
    }

    fn pass_forces(&mut self, input: &InteractionState) {
        let mut forces = std::mem::take(&mut self.forces);
        forces.clear();
        forces.resize(self.particles.len(), (0.0, 0.0));

        let pass = self.force_pass(input);
        #[cfg(feature = "parallel")]
        forces
            .par_iter_mut()
            .enumerate()
            .for_each(|(idx, slot)| *slot = pass.total_force(idx));
        #[cfg(not(feature = "parallel"))]
        forces
            .iter_mut()
            .enumerate()
            .for_each(|(idx, slot)| *slot = pass.total_force(idx));

        self.forces = forces;
    }

    fn force_pass<'a>(&'a self, input: &'a InteractionState) -> ForcePass<'a> {
        ForcePass {
            ctx: ForceContext {
                particles: &self.particles,
                index: &self.index,
                config: &self.config,
                noise: &self.noise,
                time: self.time,
                width: self.config.world.width,
                height: self.config.world.height,
            },
            input,
            shockwaves: &self.shockwaves,
            seed: self.seed,
            frame: self.frame,
        }
    }

    fn pass_integration(&mut self) {
        let motion = Motion::from_config(&self.config);

        #[cfg(feature = "parallel")]
        self.particles
            .par_iter_mut()
            .zip(self.forces.par_iter())
            .for_each(|(p, &force)| motion.apply(p, force));
        #[cfg(not(feature = "parallel"))]
        self.particles
            .iter_mut()
            .zip(self.forces.iter())
            .for_each(|(p, &force)| motion.apply(p, force));
    }
}

/// Per-particle integration constants for one frame.
#[derive(Debug, Clone, Copy)]
struct Motion {
    friction: f64,
    max_speed: f64,
    width: f64,
    height: f64,
}

impl Motion {
    fn from_config(config: &AppConfig) -> Self {
        Self {
            friction: config.motion.friction,
            max_speed: config.motion.max_speed,
            width: config.world.width,
            height: config.world.height,
        }
    }

    fn apply(&self, p: &mut Particle, (fx, fy): (f64, f64)) {
        let vx = (p.vx + fx) * self.friction;
        let vy = (p.vy + fy) * self.friction;
        (p.vx, p.vy) = lifecycle::clamp_speed(vx, vy, self.max_speed);
        p.x = lifecycle::wrap(p.x + p.vx, self.width);
        p.y = lifecycle::wrap(p.y + p.vy, self.height);
        lifecycle::update_vitals(p);
    }
}

/// Everything the force pass reads. Shared across worker threads.
struct ForcePass<'a> {
    ctx: ForceContext<'a>,
    input: &'a InteractionState,
    shockwaves: &'a ShockwaveSet,
    seed: u64,
    frame: u64,
}

impl ForcePass<'_> {
    fn total_force(&self, idx: usize) -> (f64, f64) {
        let particle = &self.ctx.particles[idx];
        let config = self.ctx.config;
        let mut rng = ChaCha8Rng::seed_from_u64(particle_seed(self.seed, self.frame, particle.id));

        let (mut fx, mut fy) = config.mode.model().compute_force(idx, &self.ctx, &mut rng);

        let (ix, iy) = self.input.force_on(
            particle.x,
            particle.y,
            config.interaction.radius,
            config.interaction.attraction_strength,
        );
        let (sx, sy) = self.shockwaves.force_on(particle.x, particle.y);
        fx += ix + sx;
        fy += iy + sy;

        if fx.is_finite() && fy.is_finite() {
            (fx, fy)
        } else {
            (0.0, 0.0)
        }
    }
}
