use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    sync::Arc,
};

use log::{error, info};

use crate::{Catalog, Frequency, ProgramConfig, ProgramGenerator, Tier, TrainingSession};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub week: u32,
    pub day: u32,
    pub field: String,
    pub value_a: String,
    pub value_b: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "week {} day {}: {} differs ({} != {})",
            self.week, self.day, self.field, self.value_a, self.value_b
        )
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub match_count: usize,
    pub mismatches: Vec<Mismatch>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Compares two session lists slot by slot.
///
/// Sessions are matched by (week, day) regardless of their order. A difference in the number of
/// sessions is reported as a mismatch at week 0, day 0, and every slot present in only one list as
/// a `session` mismatch.
#[must_use]
pub fn compare(a: &[TrainingSession], b: &[TrainingSession]) -> ValidationReport {
    let mut report = ValidationReport::default();

    if a.len() != b.len() {
        report.mismatches.push(Mismatch {
            week: 0,
            day: 0,
            field: "session count".to_string(),
            value_a: a.len().to_string(),
            value_b: b.len().to_string(),
        });
    }

    let a = by_slot(a);
    let b = by_slot(b);
    let slots = a.keys().chain(b.keys()).copied().collect::<BTreeSet<_>>();

    for (week, day) in slots {
        match (a.get(&(week, day)), b.get(&(week, day))) {
            (Some(session_a), Some(session_b)) => {
                let mismatches = compare_sessions(session_a, session_b);
                if mismatches.is_empty() {
                    report.match_count += 1;
                } else {
                    report.mismatches.extend(mismatches);
                }
            }
            (session_a, session_b) => report.mismatches.push(Mismatch {
                week,
                day,
                field: "session".to_string(),
                value_a: presence(session_a.is_some()),
                value_b: presence(session_b.is_some()),
            }),
        }
    }

    report
}

fn by_slot(sessions: &[TrainingSession]) -> BTreeMap<(u32, u32), &TrainingSession> {
    sessions.iter().map(|s| ((s.week, s.day), s)).collect()
}

fn presence(present: bool) -> String {
    if present { "present" } else { "missing" }.to_string()
}

fn compare_sessions(a: &TrainingSession, b: &TrainingSession) -> Vec<Mismatch> {
    let mut mismatches = vec![];
    let mut check = |field: &str, value_a: String, value_b: String| {
        if value_a != value_b {
            mismatches.push(Mismatch {
                week: a.week,
                day: a.day,
                field: field.to_string(),
                value_a,
                value_b,
            });
        }
    };

    check("id", a.id.to_string(), b.id.to_string());
    check("week", a.week.to_string(), b.week.to_string());
    check("day", a.day.to_string(), b.day.to_string());
    check("category", a.category.to_string(), b.category.to_string());
    check("focus", a.focus.clone(), b.focus.clone());
    check(
        "template",
        format!("{:?}", a.template_id.map(|id| *id)),
        format!("{:?}", b.template_id.map(|id| *id)),
    );
    check(
        "sprint sets",
        a.sprints.len().to_string(),
        b.sprints.len().to_string(),
    );

    for (idx, (set_a, set_b)) in a.sprints.iter().zip(b.sprints.iter()).enumerate() {
        check(
            &format!("sprints[{idx}].distance"),
            set_a.distance().to_string(),
            set_b.distance().to_string(),
        );
        check(
            &format!("sprints[{idx}].reps"),
            set_a.reps().to_string(),
            set_b.reps().to_string(),
        );
        check(
            &format!("sprints[{idx}].intensity"),
            set_a.intensity().to_string(),
            set_b.intensity().to_string(),
        );
    }

    mismatches
}

fn device() -> ProgramGenerator {
    ProgramGenerator::new(
        Arc::new(Catalog::builtin().as_ref().clone()),
        ProgramConfig::default(),
    )
}

/// Generates the program on two independent generators and compares the results.
#[must_use]
pub fn validate(tier: Tier, frequency: Frequency) -> ValidationReport {
    let (phone, watch) = (device(), device());

    let report = compare(
        phone.build_program(tier, frequency).sessions(),
        watch.build_program(tier, frequency).sessions(),
    );

    if report.is_consistent() {
        info!(
            "{tier} with {frequency} days per week: {} sessions consistent",
            report.match_count
        );
    } else {
        for mismatch in &report.mismatches {
            error!("{tier} with {frequency} days per week: {mismatch}");
        }
    }

    report
}

/// Validates every tier and frequency.
#[must_use]
pub fn validate_all() -> Vec<(Tier, Frequency, ValidationReport)> {
    Tier::iter()
        .flat_map(|tier| {
            Frequency::iter().map(move |frequency| (*tier, frequency, validate(*tier, frequency)))
        })
        .collect()
}
