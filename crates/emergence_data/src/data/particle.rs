use serde::{Deserialize, Serialize};

/// 24-bit display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    #[must_use]
    pub fn to_hex_string(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

/// A point entity of the simulation.
///
/// `id` is stable for the particle's whole life and never reused, so it can
/// order pairs when enumerating connections. `display_radius` and `energy`
/// are derived every step; `base_radius` and `pulse_speed` are fixed at
/// creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub base_radius: f64,
    pub display_radius: f64,
    pub color: Rgb,
    pub energy: f64,
    /// Advances by `pulse_speed` every frame and is never wrapped.
    pub pulse_phase: f64,
    pub pulse_speed: f64,
}

impl Particle {
    /// A resting particle with neutral display attributes.
    pub fn at(id: u64, x: f64, y: f64) -> Self {
        Self {
            id,
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            base_radius: 2.0,
            display_radius: 2.0,
            color: Rgb::WHITE,
            energy: 0.0,
            pulse_phase: 0.0,
            pulse_speed: 0.03,
        }
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.vx.hypot(self.vy)
    }

    #[inline]
    pub fn distance_sq_to(&self, x: f64, y: f64) -> f64 {
        let dx = self.x - x;
        let dy = self.y - y;
        dx * dx + dy * dy
    }
}
