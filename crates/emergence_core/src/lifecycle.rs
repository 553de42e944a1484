use crate::config::AppConfig;
use crate::palette;
use emergence_data::{BehaviorKind, Particle};
use rand::Rng;
use std::f64::consts::TAU;

/// Largest initial velocity component of a freshly created particle.
const SPAWN_VELOCITY: f64 = 0.5;
const PULSE_SPEED_RANGE: (f64, f64) = (0.02, 0.05);
const ENERGY_DECAY: f64 = 0.99;
const ENERGY_GAIN: f64 = 0.05;
const PULSE_AMPLITUDE: f64 = 0.5;
const ENERGY_GLOW: f64 = 1.5;

/// Builds a particle at `(x, y)` with randomized motion and look for `kind`.
pub fn create_particle_with_rng<R: Rng>(
    id: u64,
    x: f64,
    y: f64,
    config: &AppConfig,
    kind: BehaviorKind,
    rng: &mut R,
) -> Particle {
    let (min_r, max_r) = (config.particles.min_radius, config.particles.max_radius);
    let base_radius = if max_r > min_r {
        rng.gen_range(min_r..=max_r)
    } else {
        min_r
    };
    let mut particle = Particle {
        vx: rng.gen_range(-SPAWN_VELOCITY..=SPAWN_VELOCITY),
        vy: rng.gen_range(-SPAWN_VELOCITY..=SPAWN_VELOCITY),
        base_radius,
        display_radius: base_radius,
        color: palette::pick(kind, rng),
        energy: 0.0,
        pulse_phase: rng.gen_range(0.0..TAU),
        pulse_speed: rng.gen_range(PULSE_SPEED_RANGE.0..PULSE_SPEED_RANGE.1),
        ..Particle::at(id, x, y)
    };
    update_vitals(&mut particle);
    particle
}

/// Same as [`create_particle_with_rng`] at a uniformly random position in
/// the field.
pub fn spawn_random<R: Rng>(id: u64, config: &AppConfig, kind: BehaviorKind, rng: &mut R) -> Particle {
    let x = rng.gen_range(0.0..config.world.width);
    let y = rng.gen_range(0.0..config.world.height);
    create_particle_with_rng(id, x, y, config, kind, rng)
}

/// Smoothed energy, pulse phase and the display radius derived from both.
pub fn update_vitals(particle: &mut Particle) {
    let speed = particle.speed();
    if speed.is_finite() {
        particle.energy = (particle.energy * ENERGY_DECAY + speed * ENERGY_GAIN).min(1.0);
    }
    particle.pulse_phase += particle.pulse_speed;
    particle.display_radius = particle.base_radius
        + particle.pulse_phase.sin() * PULSE_AMPLITUDE
        + particle.energy * ENERGY_GLOW;
}

/// Rescales `(vx, vy)` to `max_speed` when it is exceeded, keeping the
/// direction. Non-finite velocities are zeroed.
pub fn clamp_speed(vx: f64, vy: f64, max_speed: f64) -> (f64, f64) {
    if !vx.is_finite() || !vy.is_finite() {
        return (0.0, 0.0);
    }
    let speed_sq = vx * vx + vy * vy;
    if speed_sq > max_speed * max_speed {
        let scale = max_speed / speed_sq.sqrt();
        (vx * scale, vy * scale)
    } else {
        (vx, vy)
    }
}

/// Maps `value` into `[0, extent)`, re-entering from the opposite edge.
///
/// Works for any finite distance outside the field. A non-finite value lands
/// on the center line.
pub fn wrap(value: f64, extent: f64) -> f64 {
    if !value.is_finite() {
        return extent * 0.5;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs.
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}
