//! Pointer and touch state.
//!
//! The host overwrites this from input events between steps; the engine
//! samples it once per step and never keeps history.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionState {
    pub x: f64,
    pub y: f64,
    /// Pointer is over the field.
    pub active: bool,
    /// Button or touch is held.
    pub pressed: bool,
}

impl InteractionState {
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
        self.active = true;
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.pointer_move(x, y);
        self.pressed = true;
    }

    pub fn pointer_up(&mut self) {
        self.pressed = false;
    }

    /// Pointer left the field; no force until it returns.
    pub fn pointer_leave(&mut self) {
        self.active = false;
        self.pressed = false;
    }

    /// Pointer force on a particle at `(px, py)`.
    ///
    /// Within `radius` the particle is pulled toward the pointer with
    /// magnitude `(1 − dist/radius) × strength`; while pressed the same
    /// magnitude pushes away. A particle exactly under the pointer gets no
    /// force.
    pub fn force_on(&self, px: f64, py: f64, radius: f64, strength: f64) -> (f64, f64) {
        if !self.active || !self.x.is_finite() || !self.y.is_finite() || radius <= 0.0 {
            return (0.0, 0.0);
        }
        let dx = self.x - px;
        let dy = self.y - py;
        let dist_sq = dx * dx + dy * dy;
        if dist_sq <= f64::EPSILON || dist_sq >= radius * radius {
            return (0.0, 0.0);
        }
        let dist = dist_sq.sqrt();
        let mut magnitude = (1.0 - dist / radius) * strength;
        if self.pressed {
            magnitude = -magnitude;
        }
        (dx / dist * magnitude, dy / dist * magnitude)
    }
}
