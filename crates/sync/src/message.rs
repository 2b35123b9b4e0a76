use std::str::FromStr;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use sprintcoach_domain::{
    Category, CategoryError, CompletedRep, CompletedWorkout, HeartRateSample, Intensity,
    IntensityError, SessionValidationError, SprintSet, SprintSetError, TemplateID,
    TrainingSession, UserProfileKey, WorkoutID, WorkoutKind, WorkoutKindError,
};
use strum::{AsRefStr, Display, EnumString};
use uuid::Uuid;

/// A message as exchanged between the devices.
///
/// On the wire the message fields and the `timestamp` share one JSON object, with the message
/// type in the `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(flatten)]
    pub message: Message,
    /// Seconds since the Unix epoch
    pub timestamp: f64,
}

impl Envelope {
    #[must_use]
    pub fn new(message: Message) -> Self {
        Self::at(message, Utc::now())
    }

    #[must_use]
    pub fn at(message: Message, time: DateTime<Utc>) -> Self {
        Self {
            message,
            timestamp: to_timestamp(time),
        }
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn decode(json: &str) -> Result<Self, DecodeError> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Decodes an envelope, rejecting missing and unknown message types before the payload is
    /// looked at.
    pub fn from_value(value: serde_json::Value) -> Result<Self, DecodeError> {
        let kind = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .ok_or(DecodeError::MissingType)?;
        MessageKind::from_str(kind).map_err(|_| DecodeError::UnknownType(kind.to_string()))?;
        Ok(serde_json::from_value(value)?)
    }

    #[must_use]
    pub fn kind(&self) -> MessageKind {
        self.message.kind()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
pub enum MessageKind {
    #[strum(serialize = "training_sessions")]
    TrainingSessions,
    #[strum(serialize = "workout_flow_update")]
    WorkoutFlowUpdate,
    #[strum(serialize = "completedWorkout")]
    CompletedWorkout,
    #[strum(serialize = "onboarding_complete")]
    OnboardingComplete,
    #[strum(serialize = "ping_test")]
    PingTest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Message {
    #[serde(rename = "training_sessions")]
    TrainingSessions { sessions: Vec<SessionRecord> },
    #[serde(rename = "workout_flow_update")]
    WorkoutFlowUpdate { stages: Vec<WorkoutStage> },
    #[serde(rename = "completedWorkout")]
    CompletedWorkout { workout: WorkoutRecord },
    #[serde(rename = "onboarding_complete")]
    OnboardingComplete(OnboardingRecord),
    #[serde(rename = "ping_test")]
    PingTest,
}

impl Message {
    #[must_use]
    pub fn kind(&self) -> MessageKind {
        match self {
            Message::TrainingSessions { .. } => MessageKind::TrainingSessions,
            Message::WorkoutFlowUpdate { .. } => MessageKind::WorkoutFlowUpdate,
            Message::CompletedWorkout { .. } => MessageKind::CompletedWorkout,
            Message::OnboardingComplete(_) => MessageKind::OnboardingComplete,
            Message::PingTest => MessageKind::PingTest,
        }
    }

    #[must_use]
    pub fn training_sessions(sessions: &[TrainingSession]) -> Self {
        Message::TrainingSessions {
            sessions: sessions.iter().map(SessionRecord::from).collect(),
        }
    }

    #[must_use]
    pub fn completed_workout(workout: &CompletedWorkout) -> Self {
        Message::CompletedWorkout {
            workout: WorkoutRecord::from(workout),
        }
    }

    #[must_use]
    pub fn workout_flow() -> Self {
        Message::WorkoutFlowUpdate {
            stages: default_flow(),
        }
    }
}

/// Answer of the receiving device.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    #[serde(default)]
    pub received: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Reply {
    #[must_use]
    pub fn received() -> Self {
        Self {
            received: true,
            error: None,
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            received: false,
            error: Some(message.into()),
        }
    }

    #[must_use]
    pub fn is_received(&self) -> bool {
        self.received && self.error.is_none()
    }
}

#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error("message has no type")]
    MissingType,
    #[error("unknown message type \"{0}\"")]
    UnknownType(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error(transparent)]
    Category(#[from] CategoryError),
    #[error(transparent)]
    Intensity(#[from] IntensityError),
    #[error(transparent)]
    SprintSet(#[from] SprintSetError),
    #[error(transparent)]
    Session(#[from] SessionValidationError),
    #[error(transparent)]
    WorkoutKind(#[from] WorkoutKindError),
    #[error("invalid timestamp {0}")]
    Timestamp(f64),
    #[error("invalid duration {0}")]
    Duration(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: Uuid,
    pub week: u32,
    pub day: u32,
    #[serde(rename = "type")]
    pub category: String,
    pub focus: String,
    pub sprints: Vec<SprintRecord>,
    #[serde(default)]
    pub accessory_work: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintRecord {
    pub distance_yards: u32,
    pub reps: u32,
    pub intensity: String,
}

impl From<&TrainingSession> for SessionRecord {
    fn from(value: &TrainingSession) -> Self {
        Self {
            id: *value.id,
            week: value.week,
            day: value.day,
            category: value.category.label().to_string(),
            focus: value.focus.clone(),
            sprints: value
                .sprints
                .iter()
                .map(|s| SprintRecord {
                    distance_yards: s.distance(),
                    reps: s.reps(),
                    intensity: s.intensity().label().to_string(),
                })
                .collect(),
            accessory_work: value.accessory_work.clone(),
            notes: value.notes.clone(),
            template_id: value.template_id.map(u32::from),
        }
    }
}

impl TryFrom<SessionRecord> for TrainingSession {
    type Error = RecordError;

    fn try_from(value: SessionRecord) -> Result<Self, Self::Error> {
        let sprints = value
            .sprints
            .iter()
            .map(|s| {
                Ok(SprintSet::new(
                    s.distance_yards,
                    s.reps,
                    Intensity::try_from(s.intensity.as_str())?,
                )?)
            })
            .collect::<Result<Vec<_>, RecordError>>()?;

        let session = TrainingSession {
            id: value.id.into(),
            week: value.week,
            day: value.day,
            category: Category::try_from(value.category.as_str())?,
            focus: value.focus,
            sprints,
            accessory_work: value.accessory_work,
            notes: value.notes,
            template_id: value.template_id.map(TemplateID::from),
        };
        session.validate()?;

        Ok(session)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRecord {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
    /// Seconds since the Unix epoch
    pub date: f64,
    /// Seconds
    pub duration: f64,
    pub completed_reps: Vec<RepRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_time: Option<f64>,
    #[serde(default)]
    pub total_distance: u32,
    #[serde(default)]
    pub heart_rate_data: Vec<HeartRateRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepRecord {
    pub id: Uuid,
    pub rep_number: u32,
    pub distance: u32,
    pub time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<u32>,
    pub timestamp: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeartRateRecord {
    pub timestamp: f64,
    pub heart_rate: u32,
}

impl From<&CompletedWorkout> for WorkoutRecord {
    fn from(value: &CompletedWorkout) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let duration = value.duration().num_microseconds().map_or_else(
            || value.duration().num_milliseconds() as f64 / 1_000.0,
            |micros| micros as f64 / 1_000_000.0,
        );

        Self {
            id: *value.id(),
            kind: value.kind().label().to_string(),
            date: to_timestamp(value.date()),
            duration,
            completed_reps: value
                .reps()
                .iter()
                .map(|r| RepRecord {
                    id: r.id,
                    rep_number: r.rep_number,
                    distance: r.distance,
                    time: r.time,
                    heart_rate: r.heart_rate,
                    timestamp: to_timestamp(r.timestamp),
                })
                .collect(),
            average_time: value.average_time(),
            best_time: value.best_time(),
            total_distance: value.total_distance(),
            heart_rate_data: value
                .heart_rate_data()
                .iter()
                .map(|s| HeartRateRecord {
                    timestamp: to_timestamp(s.timestamp),
                    heart_rate: s.heart_rate,
                })
                .collect(),
            notes: value.notes().map(ToString::to_string),
        }
    }
}

/// The aggregates are recomputed from the reps instead of trusting the sender.
impl TryFrom<WorkoutRecord> for CompletedWorkout {
    type Error = RecordError;

    fn try_from(value: WorkoutRecord) -> Result<Self, Self::Error> {
        let reps = value
            .completed_reps
            .into_iter()
            .map(|r| {
                Ok(CompletedRep {
                    id: r.id,
                    rep_number: r.rep_number,
                    distance: r.distance,
                    time: r.time,
                    heart_rate: r.heart_rate,
                    timestamp: from_timestamp(r.timestamp)?,
                })
            })
            .collect::<Result<Vec<_>, RecordError>>()?;
        let heart_rate_data = value
            .heart_rate_data
            .into_iter()
            .map(|s| {
                Ok(HeartRateSample {
                    timestamp: from_timestamp(s.timestamp)?,
                    heart_rate: s.heart_rate,
                })
            })
            .collect::<Result<Vec<_>, RecordError>>()?;

        if !value.duration.is_finite() || value.duration < 0.0 {
            return Err(RecordError::Duration(value.duration));
        }
        #[allow(clippy::cast_possible_truncation)]
        let duration = TimeDelta::microseconds((value.duration * 1_000_000.0).round() as i64);

        Ok(CompletedWorkout::new(
            WorkoutID::from(value.id),
            WorkoutKind::try_from(value.kind.as_str())?,
            from_timestamp(value.date)?,
            duration,
            reps,
            heart_rate_data,
            value.notes,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRecord {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_week: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_day: Option<u32>,
}

impl OnboardingRecord {
    /// The profile key, if the record carries a level and a frequency.
    ///
    /// Records sent as a reduced background transfer only contain name and email.
    #[must_use]
    pub fn profile_key(&self) -> Option<UserProfileKey> {
        match (&self.level, self.frequency) {
            (Some(level), Some(frequency)) => Some(UserProfileKey::new(level, frequency)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutStage {
    pub name: String,
    pub title: String,
    pub color: String,
    /// Seconds, 0 if the stage lasts until its reps are done
    pub duration: u32,
}

/// The seven stages every workout on the watch goes through.
#[must_use]
pub fn default_flow() -> Vec<WorkoutStage> {
    [
        ("warmup", "Warm-Up", "orange", 300),
        ("stretch", "Stretch", "pink", 300),
        ("drill", "Drills", "indigo", 360),
        ("strides", "Strides", "purple", 360),
        ("sprints", "Sprints", "green", 0),
        ("resting", "Rest", "yellow", 0),
        ("cooldown", "Cooldown", "blue", 300),
    ]
    .into_iter()
    .map(|(name, title, color, duration)| WorkoutStage {
        name: name.to_string(),
        title: title.to_string(),
        color: color.to_string(),
        duration,
    })
    .collect()
}

fn to_timestamp(time: DateTime<Utc>) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let micros = time.timestamp_micros() as f64;
    micros / 1_000_000.0
}

fn from_timestamp(timestamp: f64) -> Result<DateTime<Utc>, RecordError> {
    if !timestamp.is_finite() {
        return Err(RecordError::Timestamp(timestamp));
    }
    #[allow(clippy::cast_possible_truncation)]
    let micros = (timestamp * 1_000_000.0).round() as i64;
    DateTime::from_timestamp_micros(micros).ok_or(RecordError::Timestamp(timestamp))
}
