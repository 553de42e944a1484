//! # Emergence Core
//!
//! The simulation-state engine behind the emergence particle field.
//!
//! This crate owns everything that carries algorithmic weight:
//! - The particle collection and its per-frame integration
//! - Four selectable force models (emergent flocking, neural clustering,
//!   gravity, chaos)
//! - A uniform-grid spatial hash that bounds neighbor-search cost
//! - Shockwaves and pointer interaction that perturb the field
//! - Gradient noise for organic drift
//!
//! Rendering and host input wiring live outside; the engine only exposes
//! read-only snapshots.
//!
//! ## Example
//!
//! ```
//! use emergence_core::config::AppConfig;
//! use emergence_core::interaction::InteractionState;
//! use emergence_core::system::ParticleSystem;
//!
//! let mut config = AppConfig::default();
//! config.particles.count = 50;
//! let mut system = ParticleSystem::with_seed(config, 42);
//!
//! let mut input = InteractionState::default();
//! input.pointer_move(400.0, 300.0);
//! system.step(&input);
//!
//! assert_eq!(system.snapshot().particles.len(), 50);
//! ```

/// Force models, one per behavior mode
pub mod behavior;
/// Configuration management for simulation parameters
pub mod config;
/// Error types for configuration loading
pub mod error;
/// Pointer and touch state sampled once per step
pub mod interaction;
/// Particle construction and per-step bookkeeping
pub mod lifecycle;
/// Performance metrics collection and structured logging
pub mod metrics;
/// Seeded gradient noise for organic drift
pub mod noise;
/// Per-mode color palettes
pub mod palette;
/// Expanding-ring impulse sources
pub mod shockwave;
/// Spatial hashing for bounded-cost proximity queries
pub mod spatial_hash;
/// The particle system and its frame state machine
pub mod system;

pub use behavior::{BehaviorLogic, ForceContext, ForceModel};
pub use emergence_data::{BehaviorKind, Particle, Rgb, Shockwave, SimulationSnapshot};
pub use metrics::{init_logging, Metrics};
