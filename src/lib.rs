#[cfg(not(target_arch = "wasm32"))]
pub mod app;
pub mod model;

#[cfg(target_arch = "wasm32")]
use crate::model::config::{AppConfig, ConfigPatch};
#[cfg(target_arch = "wasm32")]
use crate::model::interaction::InteractionState;
#[cfg(target_arch = "wasm32")]
use crate::model::system::ParticleSystem;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Browser-facing handle. The page's render loop calls `step` once per
/// animation frame and draws from `snapshot_json`.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct Simulation {
    system: ParticleSystem,
    input: InteractionState,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl Simulation {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64, seed: Option<u64>) -> Simulation {
        console_error_panic_hook::set_once();

        let mut config = AppConfig::default();
        config.world.width = width;
        config.world.height = height;
        config.world.seed = seed;
        let system = ParticleSystem::new(config);
        web_sys::console::log_1(&JsValue::from_str(&format!(
            "emergence: {} particles, seed {}",
            system.len(),
            system.seed()
        )));

        Simulation {
            system,
            input: InteractionState::default(),
        }
    }

    pub fn step(&mut self) {
        self.system.step(&self.input);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.input.pointer_move(x, y);
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.system.on_pointer_down(&mut self.input, x, y);
    }

    pub fn pointer_up(&mut self) {
        self.input.pointer_up();
    }

    pub fn pointer_leave(&mut self) {
        self.input.pointer_leave();
    }

    pub fn set_mode(&mut self, name: &str) -> Result<(), JsValue> {
        let mode = name
            .parse()
            .map_err(|e: crate::model::data::ParseBehaviorError| JsValue::from_str(&e.to_string()))?;
        self.system.set_mode(mode);
        Ok(())
    }

    /// Slider input arrives as a JS number; NaN and negatives clamp to 0.
    pub fn set_particle_count(&mut self, count: f64) {
        let count = if count.is_finite() { count as i64 } else { 0 };
        self.system.set_config(&ConfigPatch {
            particle_count: Some(count),
            ..ConfigPatch::default()
        });
    }

    /// Sets one runtime parameter by its control name.
    pub fn set_param(&mut self, name: &str, value: f64) -> Result<(), JsValue> {
        let mut patch = ConfigPatch::default();
        match name {
            "connectionRadius" | "connection_radius" => patch.connection_radius = Some(value),
            "separationRadius" | "separation_radius" => patch.separation_radius = Some(value),
            "alignmentRadius" | "alignment_radius" => patch.alignment_radius = Some(value),
            "cohesionRadius" | "cohesion_radius" => patch.cohesion_radius = Some(value),
            "interactionRadius" | "interaction_radius" => patch.interaction_radius = Some(value),
            "attractionStrength" | "attraction_strength" => {
                patch.attraction_strength = Some(value)
            }
            "friction" => patch.friction = Some(value),
            "maxSpeed" | "max_speed" => patch.max_speed = Some(value),
            _ => return Err(JsValue::from_str(&format!("Unknown parameter: {name}"))),
        }
        self.system.set_config(&patch);
        Ok(())
    }

    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.system
            .snapshot()
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn stats(&self) -> js_sys::Object {
        let stats = self.system.stats();
        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &obj,
            &JsValue::from_str("frame"),
            &JsValue::from_f64(stats.frame as f64),
        );
        let _ = js_sys::Reflect::set(
            &obj,
            &JsValue::from_str("particles"),
            &JsValue::from_f64(stats.particle_count as f64),
        );
        let _ = js_sys::Reflect::set(
            &obj,
            &JsValue::from_str("connections"),
            &JsValue::from_f64(stats.connection_count as f64),
        );
        let _ = js_sys::Reflect::set(
            &obj,
            &JsValue::from_str("shockwaves"),
            &JsValue::from_f64(stats.shockwave_count as f64),
        );
        let _ = js_sys::Reflect::set(
            &obj,
            &JsValue::from_str("mode"),
            &JsValue::from_str(stats.mode.name()),
        );
        obj
    }
}
