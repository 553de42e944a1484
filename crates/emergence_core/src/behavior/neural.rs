//! Loose clustering: a gentle pull toward the distance-weighted centroid of
//! nearby particles, with weight `1 / (1 + dist · falloff)`, plus small
//! uniform jitter.

use super::{ForceContext, ForceModel};
use emergence_data::BehaviorKind;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone, Copy, Default)]
pub struct Neural;

impl ForceModel for Neural {
    fn kind(&self) -> BehaviorKind {
        BehaviorKind::Neural
    }

    fn compute_force(
        &self,
        idx: usize,
        ctx: &ForceContext<'_>,
        rng: &mut ChaCha8Rng,
    ) -> (f64, f64) {
        let me = &ctx.particles[idx];
        let params = &ctx.config.behavior;

        let mut weight_sum = 0.0;
        let mut cx = 0.0;
        let mut cy = 0.0;
        ctx.for_each_neighbor(idx, params.neural_range, |other, _, _, dist| {
            let w = 1.0 / (1.0 + dist * params.neural_falloff);
            cx += other.x * w;
            cy += other.y * w;
            weight_sum += w;
        });

        let mut fx = 0.0;
        let mut fy = 0.0;
        if weight_sum > 0.0 {
            fx += (cx / weight_sum - me.x) * params.neural_pull;
            fy += (cy / weight_sum - me.y) * params.neural_pull;
        }

        if params.neural_jitter > 0.0 {
            fx += rng.gen_range(-0.5..0.5) * params.neural_jitter;
            fy += rng.gen_range(-0.5..0.5) * params.neural_jitter;
        }

        (fx, fy)
    }
}
