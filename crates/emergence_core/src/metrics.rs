//! Performance metrics collection for the simulation.
//!
//! Provides structured logging and step statistics for monitoring
//! simulation performance.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Steps between periodic info-level summaries (10s at 60 fps).
const LOG_EVERY: u64 = 600;

/// Step counters for one particle system.
pub struct Metrics {
    step_count: AtomicU64,
    particle_count: AtomicU64,
    shockwave_count: AtomicU64,
    last_step_micros: AtomicU64,
    start_time: Option<Instant>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metrics")
            .field("step_count", &self.step_count())
            .field("particle_count", &self.particle_count())
            .field("shockwave_count", &self.shockwave_count())
            .finish()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            step_count: AtomicU64::new(0),
            particle_count: AtomicU64::new(0),
            shockwave_count: AtomicU64::new(0),
            last_step_micros: AtomicU64::new(0),
            start_time: clock(),
        }
    }

    /// Records a completed step with its duration.
    pub fn record_step(&self, duration: Duration, particles: usize, shockwaves: usize) {
        self.step_count.fetch_add(1, Ordering::Relaxed);
        self.particle_count.store(particles as u64, Ordering::Relaxed);
        self.shockwave_count
            .store(shockwaves as u64, Ordering::Relaxed);
        let micros = u64::try_from(duration.as_micros()).unwrap_or(u64::MAX);
        self.last_step_micros.store(micros, Ordering::Relaxed);

        let step = self.step_count.load(Ordering::Relaxed);
        if step % LOG_EVERY == 0 {
            tracing::info!(
                step = step,
                particles = particles,
                shockwaves = shockwaves,
                duration_us = micros,
                "Simulation step"
            );
        }
    }

    #[must_use]
    pub fn step_count(&self) -> u64 {
        self.step_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn particle_count(&self) -> u64 {
        self.particle_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn shockwave_count(&self) -> u64 {
        self.shockwave_count.load(Ordering::Relaxed)
    }

    /// Duration of the most recent step.
    #[must_use]
    pub fn last_step(&self) -> Duration {
        Duration::from_micros(self.last_step_micros.load(Ordering::Relaxed))
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    pub fn reset(&self) {
        self.step_count.store(0, Ordering::Relaxed);
        self.last_step_micros.store(0, Ordering::Relaxed);
    }
}

/// Current instant, or `None` on wasm32 where `Instant::now` is unsupported.
#[must_use]
pub fn clock() -> Option<Instant> {
    #[cfg(target_arch = "wasm32")]
    {
        None
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Some(Instant::now())
    }
}

/// Initialize tracing subscriber for logging.
///
/// Honors `RUST_LOG`, defaulting to `info`. Safe to call more than once; only
/// the first call installs a subscriber.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .finish(),
    )
    .ok();
}
