use std::{collections::BTreeSet, fmt};

use chrono::{DateTime, TimeDelta, Utc};
use derive_more::Deref;
use thiserror::Error;
use uuid::Uuid;

use crate::TrainingSession;

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

impl fmt::Display for WorkoutID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutKind {
    SprintTimer,
    MainProgram,
}

impl WorkoutKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            WorkoutKind::SprintTimer => "Sprint Timer Pro",
            WorkoutKind::MainProgram => "Main Program",
        }
    }
}

impl TryFrom<&str> for WorkoutKind {
    type Error = WorkoutKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        [WorkoutKind::SprintTimer, WorkoutKind::MainProgram]
            .into_iter()
            .find(|k| k.label() == value)
            .ok_or_else(|| WorkoutKindError::Unknown(value.to_string()))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkoutKindError {
    #[error("Unknown workout type \"{0}\"")]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletedRep {
    pub id: Uuid,
    pub rep_number: u32,
    /// Yards
    pub distance: u32,
    /// Seconds
    pub time: f64,
    pub heart_rate: Option<u32>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeartRateSample {
    pub timestamp: DateTime<Utc>,
    pub heart_rate: u32,
}

/// A finished workout as recorded by the device that ran it.
///
/// The aggregates are derived from the reps once on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedWorkout {
    id: WorkoutID,
    kind: WorkoutKind,
    date: DateTime<Utc>,
    duration: TimeDelta,
    reps: Vec<CompletedRep>,
    average_time: Option<f64>,
    best_time: Option<f64>,
    total_distance: u32,
    heart_rate_data: Vec<HeartRateSample>,
    notes: Option<String>,
}

impl CompletedWorkout {
    #[must_use]
    pub fn new(
        id: WorkoutID,
        kind: WorkoutKind,
        date: DateTime<Utc>,
        duration: TimeDelta,
        reps: Vec<CompletedRep>,
        heart_rate_data: Vec<HeartRateSample>,
        notes: Option<String>,
    ) -> Self {
        let average_time = if reps.is_empty() {
            None
        } else {
            #[allow(clippy::cast_precision_loss)]
            Some(reps.iter().map(|r| r.time).sum::<f64>() / reps.len() as f64)
        };
        let best_time = reps.iter().map(|r| r.time).reduce(f64::min);
        let total_distance = reps.iter().map(|r| r.distance).sum();

        Self {
            id,
            kind,
            date,
            duration,
            reps,
            average_time,
            best_time,
            total_distance,
            heart_rate_data,
            notes,
        }
    }

    /// Records the completion of a session from the generated program.
    #[must_use]
    pub fn from_session(
        id: WorkoutID,
        session: &TrainingSession,
        date: DateTime<Utc>,
        duration: TimeDelta,
        reps: Vec<CompletedRep>,
        heart_rate_data: Vec<HeartRateSample>,
    ) -> Self {
        Self::new(
            id,
            WorkoutKind::MainProgram,
            date,
            duration,
            reps,
            heart_rate_data,
            Some(format!(
                "Week {} Day {}: {}",
                session.week, session.day, session.focus
            )),
        )
    }

    #[must_use]
    pub fn id(&self) -> WorkoutID {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> WorkoutKind {
        self.kind
    }

    #[must_use]
    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.duration
    }

    #[must_use]
    pub fn reps(&self) -> &[CompletedRep] {
        &self.reps
    }

    #[must_use]
    pub fn average_time(&self) -> Option<f64> {
        self.average_time
    }

    #[must_use]
    pub fn best_time(&self) -> Option<f64> {
        self.best_time
    }

    /// Yards
    #[must_use]
    pub fn total_distance(&self) -> u32 {
        self.total_distance
    }

    #[must_use]
    pub fn heart_rate_data(&self) -> &[HeartRateSample] {
        &self.heart_rate_data
    }

    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

/// Append-only history of completed workouts.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WorkoutHistory {
    workouts: Vec<CompletedWorkout>,
    ids: BTreeSet<WorkoutID>,
}

impl WorkoutHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if a workout with the same id was already recorded.
    pub fn append(&mut self, workout: CompletedWorkout) -> bool {
        if !self.ids.insert(workout.id) {
            return false;
        }
        self.workouts.push(workout);
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompletedWorkout> {
        self.workouts.iter()
    }

    #[must_use]
    pub fn get(&self, id: WorkoutID) -> Option<&CompletedWorkout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    /// The most recent workouts, newest first.
    #[must_use]
    pub fn recent(&self, limit: usize) -> Vec<&CompletedWorkout> {
        let mut workouts = self.workouts.iter().collect::<Vec<_>>();
        workouts.sort_by(|a, b| b.date.cmp(&a.date));
        workouts.truncate(limit);
        workouts
    }

    /// The fastest rep times over a distance, fastest first.
    #[must_use]
    pub fn best_times(&self, distance: u32, limit: usize) -> Vec<f64> {
        let mut times = self
            .workouts
            .iter()
            .flat_map(|w| w.reps.iter())
            .filter(|r| r.distance == distance)
            .map(|r| r.time)
            .collect::<Vec<_>>();
        times.sort_by(f64::total_cmp);
        times.truncate(limit);
        times
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use crate::{Category, Intensity, SprintSet, stable_session_id};

    use super::*;

    fn date(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, day, 7, 30, 0).unwrap()
    }

    fn rep(rep_number: u32, distance: u32, time: f64) -> CompletedRep {
        CompletedRep {
            id: Uuid::from_u128(u128::from(rep_number)),
            rep_number,
            distance,
            time,
            heart_rate: Some(150 + rep_number),
            timestamp: date(1),
        }
    }

    fn workout(id: u128, day: u32, reps: Vec<CompletedRep>) -> CompletedWorkout {
        CompletedWorkout::new(
            WorkoutID::from(id),
            WorkoutKind::SprintTimer,
            date(day),
            TimeDelta::minutes(25),
            reps,
            vec![],
            None,
        )
    }

    #[test]
    fn test_completed_workout_aggregates() {
        let workout = workout(1, 1, vec![rep(1, 40, 5.2), rep(2, 40, 5.0), rep(3, 20, 3.1)]);
        assert_approx_eq!(workout.average_time().unwrap(), 4.433_333, 1e-5);
        assert_approx_eq!(workout.best_time().unwrap(), 3.1);
        assert_eq!(workout.total_distance(), 100);
    }

    #[test]
    fn test_completed_workout_without_reps() {
        let workout = workout(1, 1, vec![]);
        assert_eq!(workout.average_time(), None);
        assert_eq!(workout.best_time(), None);
        assert_eq!(workout.total_distance(), 0);
    }

    #[test]
    fn test_completed_workout_from_session() {
        let session = TrainingSession {
            id: stable_session_id(3, 2),
            week: 3,
            day: 2,
            category: Category::Sprint,
            focus: "Drive Phase".to_string(),
            sprints: vec![SprintSet::new(30, 4, Intensity::Moderate).unwrap()],
            accessory_work: vec![],
            notes: None,
            template_id: None,
        };
        let workout = CompletedWorkout::from_session(
            WorkoutID::from(9),
            &session,
            date(4),
            TimeDelta::minutes(40),
            vec![rep(1, 30, 4.1)],
            vec![],
        );
        assert_eq!(workout.kind(), WorkoutKind::MainProgram);
        assert_eq!(workout.notes(), Some("Week 3 Day 2: Drive Phase"));
    }

    #[test]
    fn test_workout_kind_try_from() {
        assert_eq!(
            WorkoutKind::try_from("Sprint Timer Pro"),
            Ok(WorkoutKind::SprintTimer)
        );
        assert_eq!(WorkoutKind::try_from("Main Program"), Ok(WorkoutKind::MainProgram));
        assert_eq!(
            WorkoutKind::try_from("Yoga"),
            Err(WorkoutKindError::Unknown("Yoga".to_string()))
        );
    }

    #[test]
    fn test_history_append_is_idempotent() {
        let mut history = WorkoutHistory::new();
        assert!(history.append(workout(1, 1, vec![rep(1, 40, 5.0)])));
        assert!(!history.append(workout(1, 1, vec![rep(1, 40, 4.0)])));
        assert_eq!(history.len(), 1);
        assert_eq!(
            history.get(WorkoutID::from(1)).and_then(CompletedWorkout::best_time),
            Some(5.0)
        );
    }

    #[test]
    fn test_history_recent() {
        let mut history = WorkoutHistory::new();
        history.append(workout(1, 3, vec![]));
        history.append(workout(2, 1, vec![]));
        history.append(workout(3, 5, vec![]));
        assert_eq!(
            history.recent(2).iter().map(|w| w.id()).collect::<Vec<_>>(),
            vec![WorkoutID::from(3), WorkoutID::from(1)]
        );
        assert_eq!(history.recent(10).len(), 3);
    }

    #[test]
    fn test_history_best_times() {
        let mut history = WorkoutHistory::new();
        history.append(workout(1, 1, vec![rep(1, 40, 5.3), rep(2, 20, 3.0)]));
        history.append(workout(2, 2, vec![rep(1, 40, 5.1), rep(2, 40, 5.6)]));
        assert_eq!(history.best_times(40, 2), vec![5.1, 5.3]);
        assert_eq!(history.best_times(60, 2), Vec::<f64>::new());
    }
}
