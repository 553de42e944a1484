use serde::{Deserialize, Serialize};

/// Transient expanding ring that pushes particles near its edge outward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shockwave {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub age: u32,
    pub max_age: u32,
    pub strength: f64,
}

impl Shockwave {
    pub fn new(x: f64, y: f64, max_age: u32, strength: f64) -> Self {
        Self {
            x,
            y,
            radius: 0.0,
            age: 0,
            max_age,
            strength,
        }
    }

    /// Fraction of the lifetime already spent, in `[0, 1]`.
    #[inline]
    pub fn age_fraction(&self) -> f64 {
        if self.max_age == 0 {
            return 1.0;
        }
        (f64::from(self.age) / f64::from(self.max_age)).min(1.0)
    }

    /// Strength after decay: `strength × (1 − age/max_age)`.
    #[inline]
    pub fn current_strength(&self) -> f64 {
        self.strength * (1.0 - self.age_fraction())
    }
}
