pub mod input;
pub mod shutdown;
pub mod state;

pub use input::{InputEvent, PointerEvent};
pub use shutdown::ShutdownManager;
pub use state::{App, LaunchOverrides};

use anyhow::Result;
use std::time::{Duration, Instant};
use tokio::time::{Interval, MissedTickBehavior};

/// How often the config file is checked for changes.
const CONFIG_CHECK_INTERVAL: Duration = Duration::from_secs(2);

/// How the host loop is driven.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Stop after this many frames; run until shutdown when absent.
    pub max_steps: Option<u64>,
    /// Pace frames at `target_fps` instead of stepping as fast as possible.
    pub realtime: bool,
}

fn frame_ticker(target_fps: u64) -> Interval {
    let period = Duration::from_secs_f64(1.0 / target_fps.max(1) as f64);
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker
}

impl App {
    /// Drives the simulation until the step limit or a shutdown request.
    pub async fn run(&mut self, options: &RunOptions, shutdown: &ShutdownManager) -> Result<()> {
        let mut last_config_check = Instant::now();
        let mut ticker = frame_ticker(self.config.target_fps);

        while self.running && !shutdown.is_shutdown_requested() {
            if options
                .max_steps
                .is_some_and(|max| self.system.frame() >= max)
            {
                break;
            }

            if last_config_check.elapsed() >= CONFIG_CHECK_INTERVAL {
                let fps = self.config.target_fps;
                match self.check_config_reload() {
                    Ok(true) if self.config.target_fps != fps => {
                        ticker = frame_ticker(self.config.target_fps);
                    }
                    Ok(_) => {}
                    Err(e) => tracing::warn!("Config reload failed: {}", e),
                }
                last_config_check = Instant::now();
            }

            if options.realtime {
                ticker.tick().await;
            } else if self.system.frame() % 256 == 0 {
                // Let the signal task run on a busy headless loop.
                tokio::task::yield_now().await;
            }

            self.update_system();
        }

        let stats = self.system.stats();
        tracing::info!(
            frames = stats.frame,
            particles = stats.particle_count,
            mode = %stats.mode,
            "Simulation stopped"
        );
        Ok(())
    }
}
