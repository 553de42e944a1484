//! Orbital clustering: a weak pull toward the field center plus pairwise
//! inverse-square attraction inside a distance band.

use super::{ForceContext, ForceModel};
use emergence_data::BehaviorKind;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone, Copy, Default)]
pub struct Gravity;

impl ForceModel for Gravity {
    fn kind(&self) -> BehaviorKind {
        BehaviorKind::Gravity
    }

    fn compute_force(
        &self,
        idx: usize,
        ctx: &ForceContext<'_>,
        _rng: &mut ChaCha8Rng,
    ) -> (f64, f64) {
        let me = &ctx.particles[idx];
        let params = &ctx.config.behavior;

        // Proportional to the offset, so it vanishes at the center instead
        // of dividing by zero.
        let mut fx = (ctx.width * 0.5 - me.x) * params.gravity_center_pull;
        let mut fy = (ctx.height * 0.5 - me.y) * params.gravity_center_pull;

        let min_dist = params.gravity_min_distance;
        ctx.for_each_neighbor(idx, params.gravity_max_distance, |_, dx, dy, dist| {
            if dist < min_dist {
                return;
            }
            let magnitude = params.gravity_strength / (dist * dist);
            fx += dx / dist * magnitude;
            fy += dy / dist * magnitude;
        });

        (fx, fy)
    }
}
