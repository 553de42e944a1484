//! Read-only views handed to an external renderer once per frame.

use super::mode::BehaviorKind;
use super::particle::{Particle, Rgb};
use super::shockwave::Shockwave;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ParticleView {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Rgb,
    pub energy: f64,
}

impl From<&Particle> for ParticleView {
    fn from(p: &Particle) -> Self {
        Self {
            id: p.id,
            x: p.x,
            y: p.y,
            radius: p.display_radius,
            color: p.color,
            energy: p.energy,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ShockwaveView {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub age_fraction: f64,
}

impl From<&Shockwave> for ShockwaveView {
    fn from(w: &Shockwave) -> Self {
        Self {
            x: w.x,
            y: w.y,
            radius: w.radius,
            age_fraction: w.age_fraction(),
        }
    }
}

/// A drawable link between two particles, `strength` in `(0, 1]`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub a: u64,
    pub b: u64,
    pub strength: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SimulationStats {
    pub frame: u64,
    pub particle_count: usize,
    /// Display-only estimate; counts whole-cell neighbors without exact filtering.
    pub connection_count: usize,
    pub shockwave_count: usize,
    pub mode: BehaviorKind,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SimulationSnapshot {
    pub frame: u64,
    pub width: f64,
    pub height: f64,
    pub mode: BehaviorKind,
    pub particles: Vec<ParticleView>,
    pub shockwaves: Vec<ShockwaveView>,
    pub connections: Vec<Connection>,
    pub stats: SimulationStats,
}

impl SimulationSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
