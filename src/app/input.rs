//! Recorded pointer input.

use crate::model::interaction::InteractionState;
use crate::model::system::ParticleSystem;
use serde::{Deserialize, Serialize};

/// One pointer event as delivered by a host.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PointerEvent {
    Move { x: f64, y: f64 },
    Down { x: f64, y: f64 },
    Up,
    Leave,
}

impl PointerEvent {
    /// Overwrites `input` with this event. A press also spawns a shockwave.
    pub fn apply(&self, system: &mut ParticleSystem, input: &mut InteractionState) {
        match *self {
            PointerEvent::Move { x, y } => input.pointer_move(x, y),
            PointerEvent::Down { x, y } => system.on_pointer_down(input, x, y),
            PointerEvent::Up => input.pointer_up(),
            PointerEvent::Leave => input.pointer_leave(),
        }
    }
}

/// A pointer event stamped with the frame it was applied before.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct InputEvent {
    pub frame: u64,
    pub event: PointerEvent,
}
