use anyhow::Result;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::app::input::{InputEvent, PointerEvent};
use crate::model::config::{AppConfig, ConfigPatch};
use crate::model::data::BehaviorKind;
use crate::model::interaction::InteractionState;
use crate::model::system::ParticleSystem;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct LaunchOverrides {
    pub seed: Option<u64>,
    pub mode: Option<BehaviorKind>,
    pub particles: Option<usize>,
}

impl LaunchOverrides {
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(seed) = self.seed {
            config.world.seed = Some(seed);
        }
        let patch = ConfigPatch {
            mode: self.mode,
            particle_count: self
                .particles
                .map(|n| i64::try_from(n).unwrap_or(i64::MAX)),
            ..ConfigPatch::default()
        };
        if !patch.is_empty() {
            patch.apply(config);
        }
    }
}

/// Headless host: owns one particle system and everything that feeds it.
pub struct App {
    pub running: bool,
    pub system: ParticleSystem,
    pub input: InteractionState,
    pub config: AppConfig,
    pub config_path: PathBuf,
    pub config_last_modified: Option<SystemTime>,
    pub log_dir: PathBuf,
    pub recording: bool,
    pub input_log: Vec<InputEvent>,
    pub replay_queue: VecDeque<InputEvent>,
    pub replay_mode: bool,
}

impl App {
    /// Reads `path`; on a missing or broken file logs a warning and uses the
    /// defaults. A missing file is created with the defaults.
    pub fn load_config(path: &Path) -> AppConfig {
        if let Ok(content) = std::fs::read_to_string(path) {
            match AppConfig::from_toml(&content) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Failed to load {}: {}", path.display(), e);
                }
            }
        }
        let default = AppConfig::default();
        if !path.exists() {
            if let Ok(toml_str) = toml::to_string(&default) {
                let _ = std::fs::write(path, toml_str);
            }
        }
        default
    }

    pub fn new(config_path: impl Into<PathBuf>, overrides: &LaunchOverrides) -> Result<Self> {
        let config_path = config_path.into();
        let mut config = Self::load_config(&config_path);
        overrides.apply(&mut config);

        let mut app = Self::with_config(config, config_path);
        app.config_last_modified = std::fs::metadata(&app.config_path)
            .and_then(|m| m.modified())
            .ok();
        Ok(app)
    }

    /// Builds an app around an in-memory config; nothing is read from disk.
    pub fn with_config(config: AppConfig, config_path: impl Into<PathBuf>) -> Self {
        let system = ParticleSystem::new(config);
        Self {
            running: true,
            config: system.config().clone(),
            system,
            input: InteractionState::default(),
            config_path: config_path.into(),
            config_last_modified: None,
            log_dir: PathBuf::from("logs"),
            recording: false,
            input_log: Vec::new(),
            replay_queue: VecDeque::new(),
            replay_mode: false,
        }
    }

    /// Applies a live pointer event, recording it when enabled.
    pub fn handle_event(&mut self, event: PointerEvent) {
        if self.recording {
            self.input_log.push(InputEvent {
                frame: self.system.frame(),
                event,
            });
        }
        event.apply(&mut self.system, &mut self.input);
    }

    /// Applies every queued replay event whose frame has been reached.
    pub fn apply_due_replay(&mut self) {
        let frame = self.system.frame();
        while let Some(evt) = self.replay_queue.front() {
            if evt.frame > frame {
                break;
            }
            if let Some(evt) = self.replay_queue.pop_front() {
                evt.event.apply(&mut self.system, &mut self.input);
            }
        }
    }

    /// Feeds due input, then advances the simulation one frame.
    pub fn update_system(&mut self) {
        if self.replay_mode {
            self.apply_due_replay();
        }
        self.system.step(&self.input);
    }

    pub fn save_recording(&self) -> Result<PathBuf> {
        let timestamp = chrono::Utc::now().format("%Y-%m-%d_%H-%M-%S");
        let filename = self
            .log_dir
            .join(format!("input_trace_{}.json", timestamp));
        std::fs::create_dir_all(&self.log_dir)?;
        let data = serde_json::to_string_pretty(&self.input_log)?;
        std::fs::write(&filename, data)?;
        tracing::info!("Input trace saved to {}", filename.display());
        Ok(filename)
    }

    pub fn load_replay(&mut self, path: &Path) -> Result<()> {
        let data = std::fs::read_to_string(path)?;
        let mut log: Vec<InputEvent> = serde_json::from_str(&data)?;
        log.sort_by_key(|evt| evt.frame);
        self.replay_queue = VecDeque::from(log);
        self.replay_mode = true;
        tracing::info!("Replay loaded: {} events", self.replay_queue.len());
        Ok(())
    }

    pub fn save_snapshot(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.system.snapshot().to_json()?)?;
        tracing::info!("Snapshot of frame {} saved to {}", self.system.frame(), path.display());
        Ok(())
    }

    /// Re-reads the config file when its mtime changed and pushes the
    /// runtime-adjustable values into the running system. Field size and
    /// seed only take effect on restart.
    pub fn check_config_reload(&mut self) -> Result<bool> {
        let metadata = match std::fs::metadata(&self.config_path) {
            Ok(metadata) => metadata,
            Err(_) => return Ok(false),
        };
        let modified = metadata.modified()?;
        if Some(modified) == self.config_last_modified {
            return Ok(false);
        }
        self.config_last_modified = Some(modified);

        let new_config = Self::load_config(&self.config_path);
        let adjustments = self.system.set_config(&new_config.runtime_patch());
        if !adjustments.is_empty() {
            tracing::warn!(count = adjustments.len(), "Reloaded config needed clamping");
        }
        self.config = self.system.config().clone();
        self.config.target_fps = new_config.target_fps;
        tracing::info!(fingerprint = %self.config.fingerprint(), "Configuration reloaded");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(count: usize) -> App {
        let mut config = AppConfig::default();
        config.particles.count = count;
        config.world.seed = Some(3);
        App::with_config(config, "unused.toml")
    }

    #[test]
    fn test_overrides_clamp_particles() {
        let mut config = AppConfig::default();
        LaunchOverrides {
            seed: Some(5),
            mode: Some(BehaviorKind::Chaos),
            particles: Some(usize::MAX),
        }
        .apply(&mut config);
        assert_eq!(config.world.seed, Some(5));
        assert_eq!(config.mode, BehaviorKind::Chaos);
        assert_eq!(config.particles.count, config.particles.max_count);
    }

    #[test]
    fn test_recording_stamps_frame() {
        let mut app = app(5);
        app.recording = true;
        app.update_system();
        app.handle_event(PointerEvent::Move { x: 1.0, y: 2.0 });
        assert_eq!(app.input_log.len(), 1);
        assert_eq!(app.input_log[0].frame, 1);
    }

    #[test]
    fn test_replay_applies_in_frame_order() {
        let mut app = app(5);
        app.replay_queue = VecDeque::from(vec![
            InputEvent {
                frame: 0,
                event: PointerEvent::Move { x: 10.0, y: 10.0 },
            },
            InputEvent {
                frame: 2,
                event: PointerEvent::Down { x: 20.0, y: 20.0 },
            },
        ]);
        app.replay_mode = true;

        app.update_system();
        assert!(app.input.active && !app.input.pressed);
        assert_eq!(app.replay_queue.len(), 1);

        app.update_system();
        assert!(!app.input.pressed);
        app.update_system();
        assert!(app.input.pressed);
        assert!(app.replay_queue.is_empty());
    }
}
