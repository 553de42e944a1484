//! Per-mode color palettes.

use emergence_data::{BehaviorKind, Rgb};
use rand::seq::SliceRandom;
use rand::Rng;

const EMERGENT: [Rgb; 5] = [
    Rgb::from_hex(0x4FC3F7),
    Rgb::from_hex(0x29B6F6),
    Rgb::from_hex(0x7C4DFF),
    Rgb::from_hex(0x64FFDA),
    Rgb::from_hex(0xB388FF),
];

const NEURAL: [Rgb; 5] = [
    Rgb::from_hex(0xFF4081),
    Rgb::from_hex(0xF50057),
    Rgb::from_hex(0xEA80FC),
    Rgb::from_hex(0xFF80AB),
    Rgb::from_hex(0xD500F9),
];

const GRAVITY: [Rgb; 5] = [
    Rgb::from_hex(0xFFD54F),
    Rgb::from_hex(0xFFB300),
    Rgb::from_hex(0xFF8A65),
    Rgb::from_hex(0xFFF176),
    Rgb::from_hex(0xFF7043),
];

const CHAOS: [Rgb; 5] = [
    Rgb::from_hex(0xFF1744),
    Rgb::from_hex(0x00E676),
    Rgb::from_hex(0xFFEA00),
    Rgb::from_hex(0x2979FF),
    Rgb::from_hex(0xFF3D00),
];

pub fn palette(kind: BehaviorKind) -> &'static [Rgb] {
    match kind {
        BehaviorKind::Emergent => &EMERGENT,
        BehaviorKind::Neural => &NEURAL,
        BehaviorKind::Gravity => &GRAVITY,
        BehaviorKind::Chaos => &CHAOS,
    }
}

/// Draws one color from the mode's palette.
pub fn pick<R: Rng + ?Sized>(kind: BehaviorKind, rng: &mut R) -> Rgb {
    palette(kind).choose(rng).copied().unwrap_or_default()
}
