//! Plain data types shared by the emergence engine and its hosts.

pub mod data;

pub use data::mode::{BehaviorKind, ParseBehaviorError};
pub use data::particle::{Particle, Rgb};
pub use data::shockwave::Shockwave;
pub use data::snapshot::{
    Connection, ParticleView, ShockwaveView, SimulationSnapshot, SimulationStats,
};
