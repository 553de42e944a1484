use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Selectable force model driving every particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BehaviorKind {
    /// Flocking: separation, alignment, cohesion plus noise drift.
    #[default]
    Emergent,
    /// Loose clustering toward a distance-weighted centroid.
    Neural,
    /// Center pull plus banded inverse-square attraction.
    Gravity,
    /// Heavy jitter, rare jumps and noise drift.
    Chaos,
}

impl BehaviorKind {
    pub const ALL: [BehaviorKind; 4] = [
        BehaviorKind::Emergent,
        BehaviorKind::Neural,
        BehaviorKind::Gravity,
        BehaviorKind::Chaos,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BehaviorKind::Emergent => "emergent",
            BehaviorKind::Neural => "neural",
            BehaviorKind::Gravity => "gravity",
            BehaviorKind::Chaos => "chaos",
        }
    }

    /// Next mode in display order, wrapping around.
    #[must_use]
    pub fn next(&self) -> Self {
        match self {
            BehaviorKind::Emergent => BehaviorKind::Neural,
            BehaviorKind::Neural => BehaviorKind::Gravity,
            BehaviorKind::Gravity => BehaviorKind::Chaos,
            BehaviorKind::Chaos => BehaviorKind::Emergent,
        }
    }
}

impl fmt::Display for BehaviorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown behavior mode: {0}")]
pub struct ParseBehaviorError(pub String);

impl FromStr for BehaviorKind {
    type Err = ParseBehaviorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "emergent" | "flocking" => Ok(BehaviorKind::Emergent),
            "neural" => Ok(BehaviorKind::Neural),
            "gravity" => Ok(BehaviorKind::Gravity),
            "chaos" => Ok(BehaviorKind::Chaos),
            other => Err(ParseBehaviorError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Gravity".parse::<BehaviorKind>(), Ok(BehaviorKind::Gravity));
        assert_eq!(" CHAOS ".parse::<BehaviorKind>(), Ok(BehaviorKind::Chaos));
        assert!("swirl".parse::<BehaviorKind>().is_err());
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut mode = BehaviorKind::Emergent;
        for expected in BehaviorKind::ALL.iter().skip(1) {
            mode = mode.next();
            assert_eq!(mode, *expected);
        }
        assert_eq!(mode.next(), BehaviorKind::Emergent);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&BehaviorKind::Neural).unwrap();
        assert_eq!(json, "\"neural\"");
    }
}
