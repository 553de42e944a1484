//! Graceful shutdown handling for the application.
//!
//! Provides signal handling and cleanup procedures for graceful shutdown.

use anyhow::Result;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Manages graceful shutdown of the application.
pub struct ShutdownManager {
    shutdown_requested: Arc<AtomicBool>,
    save_on_exit: bool,
    exit_code: i32,
}

impl Default for ShutdownManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownManager {
    /// Creates a new shutdown manager.
    pub fn new() -> Self {
        Self {
            shutdown_requested: Arc::new(AtomicBool::new(false)),
            save_on_exit: true,
            exit_code: 0,
        }
    }

    /// Sets whether to write the recording and snapshot on exit.
    pub fn set_save_on_exit(&mut self, save: bool) {
        self.save_on_exit = save;
    }

    /// Requests shutdown.
    pub fn request_shutdown(&self) {
        self.shutdown_requested.store(true, Ordering::SeqCst);
        tracing::info!("Shutdown requested");
    }

    /// Checks if shutdown has been requested.
    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_requested.load(Ordering::SeqCst)
    }

    /// Spawns a task that requests shutdown on Ctrl+C.
    pub fn listen_for_ctrl_c(&self) {
        let flag = Arc::clone(&self.shutdown_requested);
        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Ctrl+C received, initiating graceful shutdown...");
            flag.store(true, Ordering::SeqCst);
        });
    }

    /// Returns whether to save on exit.
    pub fn should_save_on_exit(&self) -> bool {
        self.save_on_exit
    }

    /// Sets the exit code.
    pub fn set_exit_code(&mut self, code: i32) {
        self.exit_code = code;
    }

    /// Gets the exit code.
    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Writes the input recording and the final snapshot, if requested.
    pub async fn cleanup(&self, app: &mut crate::app::App, snapshot: Option<&Path>) -> Result<()> {
        tracing::info!("Performing shutdown cleanup...");
        app.running = false;

        if self.save_on_exit {
            if app.recording && !app.input_log.is_empty() {
                app.save_recording()?;
            }
            if let Some(path) = snapshot {
                app.save_snapshot(path)?;
            }
        }

        tracing::info!(frames = app.system.frame(), "Cleanup complete");
        Ok(())
    }
}
