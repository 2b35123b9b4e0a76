use std::{fmt, slice::Iter};

use derive_more::{Deref, Display, Into};
use log::warn;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Beginner,
    Intermediate,
    Advanced,
    Elite,
}

impl Tier {
    pub fn iter() -> Iter<'static, Tier> {
        static TIERS: [Tier; 4] = [Tier::Beginner, Tier::Intermediate, Tier::Advanced, Tier::Elite];
        TIERS.iter()
    }

    /// Parses a tier name as stored in user profiles.
    ///
    /// Matching ignores case and surrounding whitespace. `pro` is accepted as an alias of elite.
    /// Anything else falls back to beginner.
    #[must_use]
    pub fn parse_lenient(value: &str) -> Tier {
        match value.trim().to_lowercase().as_str() {
            "beginner" => Tier::Beginner,
            "intermediate" => Tier::Intermediate,
            "advanced" => Tier::Advanced,
            "elite" | "pro" => Tier::Elite,
            other => {
                warn!("unknown tier \"{other}\", falling back to beginner");
                Tier::Beginner
            }
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Tier::Beginner => "Beginner",
            Tier::Intermediate => "Intermediate",
            Tier::Advanced => "Advanced",
            Tier::Elite => "Elite",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Display, Clone, Copy, Into, Deref, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Frequency(u8);

impl Frequency {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 7;

    pub fn new(value: u8) -> Result<Self, FrequencyError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(FrequencyError::OutOfRange(value));
        }

        Ok(Self(value))
    }

    /// Sanitizes an untrusted day count at the input boundary.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Self(value.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8)
    }

    pub fn iter() -> impl Iterator<Item = Frequency> {
        (Self::MIN..=Self::MAX).map(Frequency)
    }
}

impl TryFrom<u32> for Frequency {
    type Error = FrequencyError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| FrequencyError::OutOfRange(u8::MAX))
            .and_then(Frequency::new)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyError {
    #[error("Frequency must be in the range 1 to 7 days per week ({0})")]
    OutOfRange(u8),
}

/// The inputs that fully determine a generated program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserProfileKey {
    pub tier: Tier,
    pub frequency: Frequency,
}

impl UserProfileKey {
    #[must_use]
    pub fn new(tier: &str, frequency: i64) -> Self {
        Self {
            tier: Tier::parse_lenient(tier),
            frequency: Frequency::clamped(frequency),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Female,
    Male,
    Other,
}

impl Sex {
    #[must_use]
    pub fn parse_lenient(value: &str) -> Sex {
        match value.trim().to_lowercase().as_str() {
            "female" | "f" => Sex::Female,
            "male" | "m" => Sex::Male,
            _ => Sex::Other,
        }
    }
}

/// Classifies a hand-timed 40-yard dash into a tier.
///
/// Female athletes use slower thresholds. Other values use the male standards.
#[must_use]
pub fn classify_40yd_time(seconds: f64, sex: Sex) -> Tier {
    let (beginner, intermediate, advanced) = match sex {
        Sex::Female => (6.5, 5.7, 5.2),
        Sex::Male | Sex::Other => (6.0, 5.2, 4.6),
    };

    if seconds >= beginner {
        Tier::Beginner
    } else if seconds >= intermediate {
        Tier::Intermediate
    } else if seconds >= advanced {
        Tier::Advanced
    } else {
        Tier::Elite
    }
}
