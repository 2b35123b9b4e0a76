use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use sprintcoach_domain::{
    Category, CompletedRep, CompletedWorkout, HeartRateSample, Intensity, SprintSet, TemplateID,
    TrainingSession, WorkoutID, WorkoutKind, stable_session_id,
};
use uuid::Uuid;

pub static TRAINING_SESSION: std::sync::LazyLock<TrainingSession> =
    std::sync::LazyLock::new(|| TrainingSession {
        id: stable_session_id(2, 1),
        week: 2,
        day: 1,
        category: Category::Sprint,
        focus: "Acceleration".to_string(),
        sprints: vec![SprintSet::new(20, 4, Intensity::Moderate).unwrap()],
        accessory_work: vec![
            "Dynamic Warm-up".to_string(),
            "Cool-down & Stretching".to_string(),
        ],
        notes: Some("Based on library template: 20 yd Accel".to_string()),
        template_id: Some(TemplateID::from(3)),
    });

pub static COMPLETED_WORKOUT: std::sync::LazyLock<CompletedWorkout> =
    std::sync::LazyLock::new(|| workout(1, 5.31));

pub static COMPLETED_WORKOUT_2: std::sync::LazyLock<CompletedWorkout> =
    std::sync::LazyLock::new(|| workout(2, 5.12));

fn date(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 4, 7, minute, 0).unwrap()
}

fn workout(id: u128, best_time: f64) -> CompletedWorkout {
    CompletedWorkout::new(
        WorkoutID::from(id),
        WorkoutKind::SprintTimer,
        date(30),
        TimeDelta::milliseconds(1_512_250),
        vec![
            CompletedRep {
                id: Uuid::from_u128(10 * id + 1),
                rep_number: 1,
                distance: 40,
                time: best_time + 0.2,
                heart_rate: Some(162),
                timestamp: date(10),
            },
            CompletedRep {
                id: Uuid::from_u128(10 * id + 2),
                rep_number: 2,
                distance: 40,
                time: best_time,
                heart_rate: None,
                timestamp: date(14),
            },
        ],
        vec![
            HeartRateSample {
                timestamp: date(10),
                heart_rate: 162,
            },
            HeartRateSample {
                timestamp: date(14),
                heart_rate: 171,
            },
        ],
        Some("Felt fast".to_string()),
    )
}
