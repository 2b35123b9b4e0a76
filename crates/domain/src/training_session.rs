use std::{fmt, slice::Iter};

use derive_more::Deref;
use thiserror::Error;
use uuid::Uuid;

use crate::{Category, TemplateID, WEEKS};

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrainingSessionID(Uuid);

impl TrainingSessionID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for TrainingSessionID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for TrainingSessionID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

impl fmt::Display for TrainingSessionID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Derives the identifier of the session at a (week, day) slot.
///
/// Week and day are embedded as zero-padded decimal digits, e.g.
/// `00000000-0000-0004-0003-000000000000` for week 4, day 3. Values too wide for their group fall
/// back to an FNV-1a hash of `week * 1000 + day`.
#[must_use]
pub fn stable_session_id(week: u32, day: u32) -> TrainingSessionID {
    match Uuid::parse_str(&format!("00000000-0000-{week:04}-{day:04}-000000000000")) {
        Ok(id) => TrainingSessionID(id),
        Err(_) => {
            let hash = fnv1a(u64::from(week) * 1000 + u64::from(day));
            TrainingSessionID(Uuid::from_u64_pair(
                0,
                ((hash % 65_536) << 48) | (hash & 0xFFFF_FFFF_FFFF),
            ))
        }
    }
}

fn fnv1a(value: u64) -> u64 {
    value
        .to_le_bytes()
        .iter()
        .fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
            (hash ^ u64::from(*byte)).wrapping_mul(0x0100_0000_01b3)
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Intensity {
    Easy,
    Moderate,
    High,
    Max,
}

impl Intensity {
    pub fn iter() -> Iter<'static, Intensity> {
        static INTENSITY: [Intensity; 4] = [
            Intensity::Easy,
            Intensity::Moderate,
            Intensity::High,
            Intensity::Max,
        ];
        INTENSITY.iter()
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Intensity::Easy => "Easy",
            Intensity::Moderate => "Moderate",
            Intensity::High => "High",
            Intensity::Max => "Max",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<&str> for Intensity {
    type Error = IntensityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Intensity::iter()
            .find(|i| i.label().eq_ignore_ascii_case(value.trim()))
            .copied()
            .ok_or_else(|| IntensityError::Unknown(value.to_string()))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntensityError {
    #[error("Unknown intensity \"{0}\"")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SprintSet {
    distance: u32,
    reps: u32,
    intensity: Intensity,
}

impl SprintSet {
    pub fn new(distance: u32, reps: u32, intensity: Intensity) -> Result<Self, SprintSetError> {
        if distance == 0 {
            return Err(SprintSetError::ZeroDistance);
        }

        if reps == 0 {
            return Err(SprintSetError::ZeroReps);
        }

        Ok(Self {
            distance,
            reps,
            intensity,
        })
    }

    /// Yards
    #[must_use]
    pub fn distance(&self) -> u32 {
        self.distance
    }

    #[must_use]
    pub fn reps(&self) -> u32 {
        self.reps
    }

    #[must_use]
    pub fn intensity(&self) -> Intensity {
        self.intensity
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SprintSetError {
    #[error("Distance must be greater than 0")]
    ZeroDistance,
    #[error("Reps must be greater than 0")]
    ZeroReps,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSession {
    pub id: TrainingSessionID,
    pub week: u32,
    pub day: u32,
    pub category: Category,
    pub focus: String,
    pub sprints: Vec<SprintSet>,
    pub accessory_work: Vec<String>,
    pub notes: Option<String>,
    pub template_id: Option<TemplateID>,
}

impl TrainingSession {
    pub fn validate(&self) -> Result<(), SessionValidationError> {
        if !(1..=WEEKS).contains(&self.week) {
            return Err(SessionValidationError::WeekOutOfRange(self.week));
        }

        if !(1..=7).contains(&self.day) {
            return Err(SessionValidationError::DayOutOfRange(self.day));
        }

        match (self.category, self.sprints.is_empty()) {
            (Category::Rest, false) => Err(SessionValidationError::SprintSetsOnRestDay {
                week: self.week,
                day: self.day,
            }),
            (Category::Rest, true) | (_, false) => Ok(()),
            (_, true) => Err(SessionValidationError::NoSprintSets {
                week: self.week,
                day: self.day,
            }),
        }
    }

    #[must_use]
    pub fn is_recovery(&self) -> bool {
        self.category.is_recovery()
    }

    /// Yards
    #[must_use]
    pub fn total_distance(&self) -> u32 {
        self.sprints.iter().map(|s| s.distance * s.reps).sum()
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionValidationError {
    #[error("Week must be in the range 1 to 12 ({0})")]
    WeekOutOfRange(u32),
    #[error("Day must be in the range 1 to 7 ({0})")]
    DayOutOfRange(u32),
    #[error("Session in week {week} on day {day} has no sprint sets")]
    NoSprintSets { week: u32, day: u32 },
    #[error("Rest day in week {week} on day {day} must not have sprint sets")]
    SprintSetsOnRestDay { week: u32, day: u32 },
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    static SESSION: std::sync::LazyLock<TrainingSession> =
        std::sync::LazyLock::new(|| TrainingSession {
            id: stable_session_id(2, 1),
            week: 2,
            day: 1,
            category: Category::Sprint,
            focus: "Acceleration".to_string(),
            sprints: vec![
                SprintSet::new(20, 4, Intensity::Moderate).unwrap(),
                SprintSet::new(30, 2, Intensity::Moderate).unwrap(),
            ],
            accessory_work: vec!["Dynamic Warm-up".to_string()],
            notes: None,
            template_id: Some(TemplateID::from(3)),
        });

    #[rstest]
    #[case(1, 1, "00000000-0000-0001-0001-000000000000")]
    #[case(4, 3, "00000000-0000-0004-0003-000000000000")]
    #[case(12, 7, "00000000-0000-0012-0007-000000000000")]
    fn test_stable_session_id(#[case] week: u32, #[case] day: u32, #[case] expected: &str) {
        assert_eq!(stable_session_id(week, day).to_string(), expected);
    }

    #[test]
    fn test_stable_session_id_fallback() {
        let id = stable_session_id(10_000, 1);
        assert_eq!(id, stable_session_id(10_000, 1));
        assert!(id.to_string().starts_with("00000000-0000-0000-"));
        assert_ne!(id, stable_session_id(10_000, 2));
    }

    #[test]
    fn test_stable_session_id_unique() {
        let ids = (1..=12)
            .flat_map(|week| (1..=7).map(move |day| stable_session_id(week, day)))
            .collect::<BTreeSet<_>>();
        assert_eq!(ids.len(), 84);
    }

    #[test]
    fn test_training_session_id_from_u128() {
        assert_eq!(
            TrainingSessionID::from(1).to_string(),
            "00000000-0000-0000-0000-000000000001"
        );
        assert!(TrainingSessionID::nil().is_nil());
    }

    #[rstest]
    #[case(0, 4, Err(SprintSetError::ZeroDistance))]
    #[case(40, 0, Err(SprintSetError::ZeroReps))]
    #[case(40, 4, Ok(SprintSet { distance: 40, reps: 4, intensity: Intensity::High }))]
    fn test_sprint_set_new(
        #[case] distance: u32,
        #[case] reps: u32,
        #[case] expected: Result<SprintSet, SprintSetError>,
    ) {
        assert_eq!(SprintSet::new(distance, reps, Intensity::High), expected);
    }

    #[rstest]
    #[case("Easy", Ok(Intensity::Easy))]
    #[case("max", Ok(Intensity::Max))]
    #[case("Extreme", Err(IntensityError::Unknown("Extreme".to_string())))]
    fn test_intensity_try_from(
        #[case] value: &str,
        #[case] expected: Result<Intensity, IntensityError>,
    ) {
        assert_eq!(Intensity::try_from(value), expected);
    }

    #[test]
    fn test_training_session_validate() {
        assert_eq!(SESSION.validate(), Ok(()));
        assert_eq!(SESSION.total_distance(), 140);
        assert!(!SESSION.is_recovery());
    }

    #[test]
    fn test_training_session_validate_no_sprint_sets() {
        let session = TrainingSession {
            sprints: vec![],
            ..SESSION.clone()
        };
        assert_eq!(
            session.validate(),
            Err(SessionValidationError::NoSprintSets { week: 2, day: 1 })
        );
    }

    #[test]
    fn test_training_session_validate_rest_day() {
        let rest = TrainingSession {
            category: Category::Rest,
            sprints: vec![],
            ..SESSION.clone()
        };
        assert_eq!(rest.validate(), Ok(()));
        assert!(rest.is_recovery());

        assert_eq!(
            TrainingSession {
                category: Category::Rest,
                ..SESSION.clone()
            }
            .validate(),
            Err(SessionValidationError::SprintSetsOnRestDay { week: 2, day: 1 })
        );
    }

    #[rstest]
    #[case(0, 1, SessionValidationError::WeekOutOfRange(0))]
    #[case(13, 1, SessionValidationError::WeekOutOfRange(13))]
    #[case(1, 0, SessionValidationError::DayOutOfRange(0))]
    #[case(1, 8, SessionValidationError::DayOutOfRange(8))]
    fn test_training_session_validate_slot(
        #[case] week: u32,
        #[case] day: u32,
        #[case] expected: SessionValidationError,
    ) {
        assert_eq!(
            TrainingSession {
                week,
                day,
                ..SESSION.clone()
            }
            .validate(),
            Err(expected)
        );
    }
}
