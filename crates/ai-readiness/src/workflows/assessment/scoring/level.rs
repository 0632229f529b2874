use serde::{Deserialize, Serialize};
use std::fmt;

/// Readiness band derived from the score. Variants are declared in ascending order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessLevel {
    #[default]
    Beginner,
    Emerging,
    Applied,
    PowerUser,
    Multiplier,
}

impl ReadinessLevel {
    pub const ALL: [ReadinessLevel; 5] = [
        Self::Beginner,
        Self::Emerging,
        Self::Applied,
        Self::PowerUser,
        Self::Multiplier,
    ];

    /// Inclusive lower bound, exclusive upper bound of the next band.
    pub fn for_score(score: u8) -> Self {
        match score {
            0..=24 => Self::Beginner,
            25..=44 => Self::Emerging,
            45..=64 => Self::Applied,
            65..=84 => Self::PowerUser,
            _ => Self::Multiplier,
        }
    }

    pub const fn min_score(self) -> u8 {
        match self {
            Self::Beginner => 0,
            Self::Emerging => 25,
            Self::Applied => 45,
            Self::PowerUser => 65,
            Self::Multiplier => 85,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "AI Beginner",
            Self::Emerging => "Emerging Practitioner",
            Self::Applied => "Applied AI Professional",
            Self::PowerUser => "AI Power User",
            Self::Multiplier => "AI Multiplier",
        }
    }
}

impl fmt::Display for ReadinessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
