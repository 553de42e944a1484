//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! the `config.toml` file. Every parameter can also be changed at runtime
//! through a [`ConfigPatch`].
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `config.toml` file (overrides defaults)
//! 3. Runtime patches from the host (sliders, hot reload)
//!
//! ## Value policy
//!
//! Out-of-range or non-finite values are never fatal. [`AppConfig::sanitize`]
//! clamps each one to the nearest valid bound (non-finite values fall back to
//! the default) and logs a warning. [`AppConfig::validate`] reports the same
//! problems as an error for tooling that wants to be strict.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! mode = "emergent"
//!
//! [world]
//! width = 1280.0
//! height = 720.0
//! seed = 42
//!
//! [particles]
//! count = 150
//!
//! [motion]
//! friction = 0.98
//! max_speed = 4.0
//! ```

use crate::error::{ConfigError, Result};
use emergence_data::BehaviorKind;
use serde::{Deserialize, Serialize};

/// Absolute upper bound on the particle collection.
pub const PARTICLE_HARD_CAP: usize = 10_000;

const EXTENT_BOUNDS: (f64, f64) = (10.0, 100_000.0);
const BEHAVIOR_RADIUS_BOUNDS: (f64, f64) = (1.0, 2_000.0);
const FRICTION_BOUNDS: (f64, f64) = (0.01, 1.0);
const MAX_SPEED_BOUNDS: (f64, f64) = (0.01, 100.0);
const ATTRACTION_BOUNDS: (f64, f64) = (0.0, 10.0);
const PARTICLE_RADIUS_BOUNDS: (f64, f64) = (0.1, 50.0);

/// Field dimensions and seeding.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            seed: None,
        }
    }
}

/// Particle population and appearance at creation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: usize,
    pub max_count: usize,
    pub min_radius: f64,
    pub max_radius: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 150,
            max_count: 2_000,
            min_radius: 1.5,
            max_radius: 3.5,
        }
    }
}

/// Neighbor radii used by the flocking rules and connection display.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FlockingConfig {
    pub separation_radius: f64,
    pub alignment_radius: f64,
    pub cohesion_radius: f64,
    pub connection_radius: f64,
}

impl Default for FlockingConfig {
    fn default() -> Self {
        Self {
            separation_radius: 30.0,
            alignment_radius: 50.0,
            cohesion_radius: 60.0,
            connection_radius: 100.0,
        }
    }
}

/// Damping and speed limit applied after forces.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MotionConfig {
    /// Velocity multiplier per step, in `(0, 1]`.
    pub friction: f64,
    pub max_speed: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            friction: 0.98,
            max_speed: 4.0,
        }
    }
}

/// Pointer attraction (released) and repulsion (pressed).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct InteractionConfig {
    pub radius: f64,
    pub attraction_strength: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            radius: 150.0,
            attraction_strength: 0.5,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ShockwaveConfig {
    /// Radius increment per step.
    pub speed: f64,
    pub max_age: u32,
    pub max_radius: f64,
    pub strength: f64,
    /// Half-width of the ring band that receives force.
    pub band_width: f64,
    pub max_live: usize,
}

impl Default for ShockwaveConfig {
    fn default() -> Self {
        Self {
            speed: 6.0,
            max_age: 60,
            max_radius: 400.0,
            strength: 1.5,
            band_width: 30.0,
            max_live: 12,
        }
    }
}

/// Tuning constants of the individual force models.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BehaviorConfig {
    pub noise_scale: f64,
    pub noise_time_step: f64,
    pub emergent_drift: f64,
    pub neural_range: f64,
    pub neural_falloff: f64,
    pub neural_pull: f64,
    pub neural_jitter: f64,
    pub gravity_center_pull: f64,
    pub gravity_strength: f64,
    pub gravity_min_distance: f64,
    pub gravity_max_distance: f64,
    pub chaos_jitter: f64,
    pub chaos_jump_chance: f64,
    pub chaos_jump_strength: f64,
    pub chaos_drift: f64,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            noise_scale: 0.005,
            noise_time_step: 0.003,
            emergent_drift: 0.02,
            neural_range: 120.0,
            neural_falloff: 0.02,
            neural_pull: 0.001,
            neural_jitter: 0.1,
            gravity_center_pull: 0.0002,
            gravity_strength: 2.0,
            gravity_min_distance: 8.0,
            gravity_max_distance: 150.0,
            chaos_jitter: 0.8,
            chaos_jump_chance: 0.01,
            chaos_jump_strength: 6.0,
            chaos_drift: 0.15,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub mode: BehaviorKind,
    pub target_fps: u64,
    /// Upper bound on exact connections exported per snapshot.
    pub connection_cap: usize,
    pub world: WorldConfig,
    pub particles: ParticleConfig,
    pub flocking: FlockingConfig,
    pub motion: MotionConfig,
    pub interaction: InteractionConfig,
    pub shockwave: ShockwaveConfig,
    pub behavior: BehaviorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: BehaviorKind::Emergent,
            target_fps: 60,
            connection_cap: 4_000,
            world: WorldConfig::default(),
            particles: ParticleConfig::default(),
            flocking: FlockingConfig::default(),
            motion: MotionConfig::default(),
            interaction: InteractionConfig::default(),
            shockwave: ShockwaveConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

/// Collects clamping decisions so they can be logged or turned into errors.
struct Clamp {
    adjustments: Vec<String>,
}

impl Clamp {
    fn float(&mut self, name: &str, value: &mut f64, (min, max): (f64, f64), default: f64) {
        if !value.is_finite() {
            self.adjustments
                .push(format!("{name} is not finite ({value}), using default {default}"));
            *value = default;
        } else if *value < min || *value > max {
            let clamped = value.clamp(min, max);
            self.adjustments.push(format!(
                "{name} = {value} is outside [{min}, {max}], clamped to {clamped}"
            ));
            *value = clamped;
        }
    }

    fn uint<T>(&mut self, name: &str, value: &mut T, min: T, max: T)
    where
        T: Copy + PartialOrd + std::fmt::Display,
    {
        if *value < min || *value > max {
            let clamped = if *value < min { min } else { max };
            self.adjustments.push(format!(
                "{name} = {value} is outside [{min}, {max}], clamped to {clamped}"
            ));
            *value = clamped;
        }
    }
}

impl AppConfig {
    fn collect_adjustments(&mut self) -> Vec<String> {
        let d = AppConfig::default();
        let mut c = Clamp {
            adjustments: Vec::new(),
        };

        c.float("world.width", &mut self.world.width, EXTENT_BOUNDS, d.world.width);
        c.float("world.height", &mut self.world.height, EXTENT_BOUNDS, d.world.height);

        c.uint(
            "particles.max_count",
            &mut self.particles.max_count,
            0,
            PARTICLE_HARD_CAP,
        );
        let max_count = self.particles.max_count;
        c.uint("particles.count", &mut self.particles.count, 0, max_count);
        c.float(
            "particles.min_radius",
            &mut self.particles.min_radius,
            PARTICLE_RADIUS_BOUNDS,
            d.particles.min_radius,
        );
        c.float(
            "particles.max_radius",
            &mut self.particles.max_radius,
            PARTICLE_RADIUS_BOUNDS,
            d.particles.max_radius,
        );
        if self.particles.min_radius > self.particles.max_radius {
            c.adjustments.push(format!(
                "particles.min_radius {} exceeds max_radius {}, swapped",
                self.particles.min_radius, self.particles.max_radius
            ));
            std::mem::swap(&mut self.particles.min_radius, &mut self.particles.max_radius);
        }

        c.float(
            "flocking.separation_radius",
            &mut self.flocking.separation_radius,
            BEHAVIOR_RADIUS_BOUNDS,
            d.flocking.separation_radius,
        );
        c.float(
            "flocking.alignment_radius",
            &mut self.flocking.alignment_radius,
            BEHAVIOR_RADIUS_BOUNDS,
            d.flocking.alignment_radius,
        );
        c.float(
            "flocking.cohesion_radius",
            &mut self.flocking.cohesion_radius,
            BEHAVIOR_RADIUS_BOUNDS,
            d.flocking.cohesion_radius,
        );
        c.float(
            "flocking.connection_radius",
            &mut self.flocking.connection_radius,
            BEHAVIOR_RADIUS_BOUNDS,
            d.flocking.connection_radius,
        );

        c.float(
            "motion.friction",
            &mut self.motion.friction,
            FRICTION_BOUNDS,
            d.motion.friction,
        );
        c.float(
            "motion.max_speed",
            &mut self.motion.max_speed,
            MAX_SPEED_BOUNDS,
            d.motion.max_speed,
        );

        c.float(
            "interaction.radius",
            &mut self.interaction.radius,
            BEHAVIOR_RADIUS_BOUNDS,
            d.interaction.radius,
        );
        c.float(
            "interaction.attraction_strength",
            &mut self.interaction.attraction_strength,
            ATTRACTION_BOUNDS,
            d.interaction.attraction_strength,
        );

        c.float(
            "shockwave.speed",
            &mut self.shockwave.speed,
            (0.1, 100.0),
            d.shockwave.speed,
        );
        c.uint("shockwave.max_age", &mut self.shockwave.max_age, 1, 10_000);
        c.float(
            "shockwave.max_radius",
            &mut self.shockwave.max_radius,
            (1.0, EXTENT_BOUNDS.1),
            d.shockwave.max_radius,
        );
        c.float(
            "shockwave.strength",
            &mut self.shockwave.strength,
            (0.0, 50.0),
            d.shockwave.strength,
        );
        c.float(
            "shockwave.band_width",
            &mut self.shockwave.band_width,
            (1.0, 1_000.0),
            d.shockwave.band_width,
        );
        c.uint("shockwave.max_live", &mut self.shockwave.max_live, 1, 256);

        let b = &mut self.behavior;
        let db = &d.behavior;
        c.float("behavior.noise_scale", &mut b.noise_scale, (0.0, 1.0), db.noise_scale);
        c.float(
            "behavior.noise_time_step",
            &mut b.noise_time_step,
            (0.0, 1.0),
            db.noise_time_step,
        );
        c.float(
            "behavior.emergent_drift",
            &mut b.emergent_drift,
            (0.0, 10.0),
            db.emergent_drift,
        );
        c.float(
            "behavior.neural_range",
            &mut b.neural_range,
            BEHAVIOR_RADIUS_BOUNDS,
            db.neural_range,
        );
        c.float(
            "behavior.neural_falloff",
            &mut b.neural_falloff,
            (0.0, 10.0),
            db.neural_falloff,
        );
        c.float("behavior.neural_pull", &mut b.neural_pull, (0.0, 1.0), db.neural_pull);
        c.float(
            "behavior.neural_jitter",
            &mut b.neural_jitter,
            (0.0, 10.0),
            db.neural_jitter,
        );
        c.float(
            "behavior.gravity_center_pull",
            &mut b.gravity_center_pull,
            (0.0, 1.0),
            db.gravity_center_pull,
        );
        c.float(
            "behavior.gravity_strength",
            &mut b.gravity_strength,
            (0.0, 1_000.0),
            db.gravity_strength,
        );
        c.float(
            "behavior.gravity_min_distance",
            &mut b.gravity_min_distance,
            BEHAVIOR_RADIUS_BOUNDS,
            db.gravity_min_distance,
        );
        c.float(
            "behavior.gravity_max_distance",
            &mut b.gravity_max_distance,
            BEHAVIOR_RADIUS_BOUNDS,
            db.gravity_max_distance,
        );
        if b.gravity_min_distance > b.gravity_max_distance {
            c.adjustments.push(format!(
                "behavior.gravity_min_distance {} exceeds gravity_max_distance {}, swapped",
                b.gravity_min_distance, b.gravity_max_distance
            ));
            std::mem::swap(&mut b.gravity_min_distance, &mut b.gravity_max_distance);
        }
        c.float(
            "behavior.chaos_jitter",
            &mut b.chaos_jitter,
            (0.0, 50.0),
            db.chaos_jitter,
        );
        c.float(
            "behavior.chaos_jump_chance",
            &mut b.chaos_jump_chance,
            (0.0, 1.0),
            db.chaos_jump_chance,
        );
        c.float(
            "behavior.chaos_jump_strength",
            &mut b.chaos_jump_strength,
            (0.0, 100.0),
            db.chaos_jump_strength,
        );
        c.float("behavior.chaos_drift", &mut b.chaos_drift, (0.0, 10.0), db.chaos_drift);

        c.uint("target_fps", &mut self.target_fps, 1, 240);
        c.uint("connection_cap", &mut self.connection_cap, 0, 1_000_000);

        c.adjustments
    }

    /// Clamps every out-of-range value in place and returns what changed.
    ///
    /// Each adjustment is also logged at warn level. This never fails.
    pub fn sanitize(&mut self) -> Vec<String> {
        let adjustments = self.collect_adjustments();
        for adjustment in &adjustments {
            tracing::warn!(adjustment = %adjustment, "Config value clamped");
        }
        adjustments
    }

    /// Returns a sanitized copy.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.sanitize();
        self
    }

    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if every value is within bounds, or the first
    /// violation otherwise. Does not modify `self`.
    pub fn validate(&self) -> Result<()> {
        let mut checked = self.clone();
        match checked.collect_adjustments().into_iter().next() {
            Some(first) => Err(ConfigError::invalid(first)),
            None => Ok(()),
        }
    }

    /// Parses `config.toml` content and clamps any out-of-range values.
    ///
    /// Syntax and type errors are returned; value errors are not.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        Ok(config.sanitized())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Cell size for the spatial index: the largest flocking radius.
    #[must_use]
    pub fn index_cell_size(&self) -> f64 {
        self.flocking
            .separation_radius
            .max(self.flocking.alignment_radius)
            .max(self.flocking.cohesion_radius)
    }

    /// Extracts the fields that may change while a simulation runs.
    #[must_use]
    pub fn runtime_patch(&self) -> ConfigPatch {
        ConfigPatch {
            particle_count: Some(self.particles.count as i64),
            connection_radius: Some(self.flocking.connection_radius),
            separation_radius: Some(self.flocking.separation_radius),
            alignment_radius: Some(self.flocking.alignment_radius),
            cohesion_radius: Some(self.flocking.cohesion_radius),
            interaction_radius: Some(self.interaction.radius),
            attraction_strength: Some(self.interaction.attraction_strength),
            friction: Some(self.motion.friction),
            max_speed: Some(self.motion.max_speed),
            mode: Some(self.mode),
        }
    }

    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.flocking).as_bytes());
        hasher.update(format!("{:?}", self.motion).as_bytes());
        hasher.update(format!("{:?}", self.interaction).as_bytes());
        hasher.update(format!("{:?}", self.shockwave).as_bytes());
        hasher.update(format!("{:?}", self.behavior).as_bytes());
        hex::encode(hasher.finalize())
    }
}

/// Partial configuration sent by the host at runtime.
///
/// Unset fields leave the current value alone. `particle_count` is signed so
/// that a negative request from an untyped host clamps to zero instead of
/// wrapping.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ConfigPatch {
    pub particle_count: Option<i64>,
    pub connection_radius: Option<f64>,
    pub separation_radius: Option<f64>,
    pub alignment_radius: Option<f64>,
    pub cohesion_radius: Option<f64>,
    pub interaction_radius: Option<f64>,
    pub attraction_strength: Option<f64>,
    pub friction: Option<f64>,
    pub max_speed: Option<f64>,
    pub mode: Option<BehaviorKind>,
}

impl ConfigPatch {
    pub fn is_empty(&self) -> bool {
        *self == ConfigPatch::default()
    }

    /// Writes the set fields into `config`, then sanitizes it.
    ///
    /// Returns the clamping adjustments that were needed.
    pub fn apply(&self, config: &mut AppConfig) -> Vec<String> {
        let mut adjustments = Vec::new();
        if let Some(requested) = self.particle_count {
            let max = config.particles.max_count as i64;
            let count = requested.clamp(0, max);
            if count != requested {
                adjustments.push(format!(
                    "particles.count = {requested} is outside [0, {max}], clamped to {count}"
                ));
            }
            config.particles.count = count as usize;
        }
        if let Some(v) = self.connection_radius {
            config.flocking.connection_radius = v;
        }
        if let Some(v) = self.separation_radius {
            config.flocking.separation_radius = v;
        }
        if let Some(v) = self.alignment_radius {
            config.flocking.alignment_radius = v;
        }
        if let Some(v) = self.cohesion_radius {
            config.flocking.cohesion_radius = v;
        }
        if let Some(v) = self.interaction_radius {
            config.interaction.radius = v;
        }
        if let Some(v) = self.attraction_strength {
            config.interaction.attraction_strength = v;
        }
        if let Some(v) = self.friction {
            config.motion.friction = v;
        }
        if let Some(v) = self.max_speed {
            config.motion.max_speed = v;
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        for adjustment in &adjustments {
            tracing::warn!(adjustment = %adjustment, "Config value clamped");
        }
        adjustments.extend(config.sanitize());
        adjustments
    }
}
