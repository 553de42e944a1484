//! Runtime changes applied between steps.

use super::ParticleSystem;
use crate::config::ConfigPatch;
use crate::interaction::InteractionState;
use crate::palette;
use emergence_data::BehaviorKind;

/// Velocity factor applied to every particle on a mode switch.
const MODE_SWITCH_DAMPING: f64 = 0.5;

impl ParticleSystem {
    /// Applies a partial config from the host.
    ///
    /// Out-of-range values are clamped, never rejected. Returns the
    /// adjustments that were made.
    pub fn set_config(&mut self, patch: &ConfigPatch) -> Vec<String> {
        let previous = self.config.clone();
        let adjustments = patch.apply(&mut self.config);

        if self.config.mode != previous.mode {
            let mode = self.config.mode;
            // Restore the old mode so the switch goes through the normal path.
            self.config.mode = previous.mode;
            self.set_mode(mode);
        }
        if self.config.index_cell_size() != previous.index_cell_size() {
            self.index.set_cell_size(self.config.index_cell_size());
            self.rebuild_index();
        }
        if self.config.particles.count != self.particles.len() {
            self.resize(self.config.particles.count);
        }
        self.shockwaves.set_params(self.config.shockwave.clone());
        adjustments
    }

    /// Switches the force model. Every particle takes a color from the new
    /// palette and its velocity is halved so the transition reads smoothly.
    pub fn set_mode(&mut self, mode: BehaviorKind) {
        if mode == self.config.mode {
            return;
        }
        let previous = self.config.mode;
        self.config.mode = mode;
        for particle in &mut self.particles {
            particle.color = palette::pick(mode, &mut self.rng);
            particle.vx *= MODE_SWITCH_DAMPING;
            particle.vy *= MODE_SWITCH_DAMPING;
        }
        tracing::debug!(from = %previous, to = %mode, "Behavior mode switched");
    }

    /// Grows or shrinks the population to `count`, clamped to
    /// `[0, particles.max_count]`.
    ///
    /// New particles are appended at random positions with fresh ids;
    /// shrinking truncates from the end. Surviving ids are untouched.
    pub fn resize(&mut self, count: usize) {
        let target = count.min(self.config.particles.max_count);
        if target != count {
            tracing::warn!(requested = count, clamped = target, "Particle count clamped");
        }
        let current = self.particles.len();
        if target > current {
            self.spawn_particles(target - current);
        } else {
            self.particles.truncate(target);
        }
        self.config.particles.count = target;
        self.rebuild_index();
        tracing::debug!(from = current, to = target, "Particle count changed");
    }

    pub fn spawn_shockwave(&mut self, x: f64, y: f64) {
        self.shockwaves.spawn(x, y);
    }

    /// Press at `(x, y)`: marks the pointer pressed and spawns a shockwave.
    pub fn on_pointer_down(&mut self, input: &mut InteractionState, x: f64, y: f64) {
        input.pointer_down(x, y);
        self.spawn_shockwave(x, y);
    }
}
