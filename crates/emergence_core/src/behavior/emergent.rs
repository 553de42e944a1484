//! Flocking: separation, alignment and cohesion over exact-distance
//! neighbors, plus a low-amplitude noise drift.

use super::{ForceContext, ForceModel};
use emergence_data::BehaviorKind;
use rand_chacha::ChaCha8Rng;

const SEPARATION_WEIGHT: f64 = 0.15;
const ALIGNMENT_STEER: f64 = 0.05;
const COHESION_STEER: f64 = 0.0005;

#[derive(Debug, Clone, Copy, Default)]
pub struct Emergent;

impl ForceModel for Emergent {
    fn kind(&self) -> BehaviorKind {
        BehaviorKind::Emergent
    }

    fn compute_force(
        &self,
        idx: usize,
        ctx: &ForceContext<'_>,
        _rng: &mut ChaCha8Rng,
    ) -> (f64, f64) {
        let me = &ctx.particles[idx];
        let flocking = &ctx.config.flocking;
        let reach = flocking
            .separation_radius
            .max(flocking.alignment_radius)
            .max(flocking.cohesion_radius);

        let (mut sep_x, mut sep_y, mut sep_n) = (0.0, 0.0, 0u32);
        let (mut vel_x, mut vel_y, mut align_n) = (0.0, 0.0, 0u32);
        let (mut pos_x, mut pos_y, mut coh_n) = (0.0, 0.0, 0u32);

        ctx.for_each_neighbor(idx, reach, |other, dx, dy, dist| {
            if dist < flocking.separation_radius {
                sep_x -= dx / dist;
                sep_y -= dy / dist;
                sep_n += 1;
            }
            if dist < flocking.alignment_radius {
                vel_x += other.vx;
                vel_y += other.vy;
                align_n += 1;
            }
            if dist < flocking.cohesion_radius {
                pos_x += other.x;
                pos_y += other.y;
                coh_n += 1;
            }
        });

        let mut fx = 0.0;
        let mut fy = 0.0;

        if sep_n > 0 {
            let n = f64::from(sep_n);
            fx += sep_x / n * SEPARATION_WEIGHT;
            fy += sep_y / n * SEPARATION_WEIGHT;
        }
        if align_n > 0 {
            let n = f64::from(align_n);
            fx += (vel_x / n - me.vx) * ALIGNMENT_STEER;
            fy += (vel_y / n - me.vy) * ALIGNMENT_STEER;
        }
        if coh_n > 0 {
            let n = f64::from(coh_n);
            fx += (pos_x / n - me.x) * COHESION_STEER;
            fy += (pos_y / n - me.y) * COHESION_STEER;
        }

        let behavior = &ctx.config.behavior;
        let (nx, ny) = ctx.noise.flow(me.x, me.y, ctx.time, behavior.noise_scale);
        fx += nx * behavior.emergent_drift;
        fy += ny * behavior.emergent_drift;

        (fx, fy)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::Frame;
    use super::*;
    use crate::config::AppConfig;
    use rand::SeedableRng;

    fn quiet_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.behavior.emergent_drift = 0.0;
        config
    }

    #[test]
    fn test_close_pair_pushes_apart() {
        let frame = Frame::new(quiet_config(), &[(100.0, 100.0), (110.0, 100.0)]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let (f0, _) = Emergent.compute_force(0, &frame.ctx(), &mut rng);
        let (f1, _) = Emergent.compute_force(1, &frame.ctx(), &mut rng);
        assert!(f0 < 0.0, "left particle should be pushed left, got {f0}");
        assert!(f1 > 0.0, "right particle should be pushed right, got {f1}");
    }

    #[test]
    fn test_cohesion_pulls_together_beyond_separation() {
        // 40 apart: outside separation (30), inside cohesion (60).
        let frame = Frame::new(quiet_config(), &[(100.0, 100.0), (140.0, 100.0)]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let (fx, _) = Emergent.compute_force(0, &frame.ctx(), &mut rng);
        assert!((fx - 40.0 * COHESION_STEER).abs() < 1e-12);
    }

    #[test]
    fn test_alignment_steers_toward_neighbor_velocity() {
        let mut frame = Frame::new(quiet_config(), &[(100.0, 100.0), (145.0, 100.0)]);
        frame.config.flocking.cohesion_radius = 40.0;
        frame.particles[1].vy = 2.0;
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let (_, fy) = Emergent.compute_force(0, &frame.ctx(), &mut rng);
        assert!((fy - 2.0 * ALIGNMENT_STEER).abs() < 1e-12);
    }

    #[test]
    fn test_isolated_particle_only_drifts() {
        let mut config = AppConfig::default();
        config.behavior.emergent_drift = 0.02;
        let frame = Frame::new(config, &[(100.0, 100.0), (900.0, 600.0)]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let (fx, fy) = Emergent.compute_force(0, &frame.ctx(), &mut rng);
        assert!(((fx * fx + fy * fy).sqrt() - 0.02).abs() < 1e-9);
    }
}
