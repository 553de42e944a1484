//! Expanding-ring impulses spawned by presses and taps.

use crate::config::ShockwaveConfig;
use emergence_data::Shockwave;

/// Live shockwaves plus the parameters new ones are spawned with.
#[derive(Debug, Clone, Default)]
pub struct ShockwaveSet {
    waves: Vec<Shockwave>,
    params: ShockwaveConfig,
}

impl ShockwaveSet {
    pub fn new(params: ShockwaveConfig) -> Self {
        Self {
            waves: Vec::with_capacity(params.max_live),
            params,
        }
    }

    pub fn params(&self) -> &ShockwaveConfig {
        &self.params
    }

    /// Replaces spawn parameters. Live waves keep their own lifetime.
    pub fn set_params(&mut self, params: ShockwaveConfig) {
        self.params = params;
        self.enforce_capacity();
    }

    /// Starts a new ring at `(x, y)` with radius 0.
    ///
    /// When `max_live` waves already exist the oldest is dropped.
    pub fn spawn(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            tracing::debug!(x, y, "Ignoring shockwave at non-finite origin");
            return;
        }
        self.waves
            .push(Shockwave::new(x, y, self.params.max_age, self.params.strength));
        self.enforce_capacity();
        tracing::debug!(x, y, live = self.waves.len(), "Shockwave spawned");
    }

    fn enforce_capacity(&mut self) {
        let cap = self.params.max_live.max(1);
        if self.waves.len() > cap {
            let excess = self.waves.len() - cap;
            self.waves.drain(..excess);
        }
    }

    /// Ages every wave by one step and drops the spent ones.
    ///
    /// A wave is removed once `age >= max_age` or `radius >= max_radius`.
    pub fn step(&mut self) -> &[Shockwave] {
        let speed = self.params.speed;
        let max_radius = self.params.max_radius;
        self.waves.retain_mut(|wave| {
            wave.radius += speed;
            wave.age += 1;
            wave.age < wave.max_age && wave.radius < max_radius
        });
        &self.waves
    }

    /// Sum of outward pushes on a particle at `(x, y)`.
    ///
    /// Only particles within `band_width` of a ring's current radius are
    /// pushed. A particle exactly on an origin receives nothing from that
    /// wave.
    pub fn force_on(&self, x: f64, y: f64) -> (f64, f64) {
        let band = self.params.band_width;
        let mut fx = 0.0;
        let mut fy = 0.0;
        for wave in &self.waves {
            let dx = x - wave.x;
            let dy = y - wave.y;
            let dist_sq = dx * dx + dy * dy;
            if dist_sq <= f64::EPSILON {
                continue;
            }
            let dist = dist_sq.sqrt();
            if (dist - wave.radius).abs() > band {
                continue;
            }
            let push = wave.current_strength();
            fx += dx / dist * push;
            fy += dy / dist * push;
        }
        (fx, fy)
    }

    pub fn live(&self) -> &[Shockwave] {
        &self.waves
    }

    pub fn len(&self) -> usize {
        self.waves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }

    pub fn clear(&mut self) {
        self.waves.clear();
    }
}
