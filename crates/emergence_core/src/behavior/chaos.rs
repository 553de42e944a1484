//! Turbulence: strong random jitter, occasional jumps in a random
//! direction, and a noise-field drift.

use super::{ForceContext, ForceModel};
use emergence_data::BehaviorKind;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::f64::consts::TAU;

#[derive(Debug, Clone, Copy, Default)]
pub struct Chaos;

impl ForceModel for Chaos {
    fn kind(&self) -> BehaviorKind {
        BehaviorKind::Chaos
    }

    fn compute_force(
        &self,
        idx: usize,
        ctx: &ForceContext<'_>,
        rng: &mut ChaCha8Rng,
    ) -> (f64, f64) {
        let me = &ctx.particles[idx];
        let params = &ctx.config.behavior;

        let mut fx = rng.gen_range(-0.5..0.5) * params.chaos_jitter;
        let mut fy = rng.gen_range(-0.5..0.5) * params.chaos_jitter;

        if rng.gen_bool(params.chaos_jump_chance.clamp(0.0, 1.0)) {
            let angle = rng.gen_range(0.0..TAU);
            fx += angle.cos() * params.chaos_jump_strength;
            fy += angle.sin() * params.chaos_jump_strength;
        }

        let (nx, ny) = ctx.noise.flow(me.x, me.y, ctx.time, params.noise_scale);
        fx += nx * params.chaos_drift;
        fy += ny * params.chaos_drift;

        (fx, fy)
    }
}
