use std::{collections::BTreeMap, fmt, sync::Arc};

use log::{debug, error};
use thiserror::Error;

use crate::{
    Catalog, Category, EMERGENCY_TEMPLATE, Frequency, Intensity, SessionTemplate,
    SessionValidationError, Slot, SprintSet, TemplateID, Tier, TrainingSession, WEEKS,
    apply_progression, select_template, stable_session_id,
};

/// Weeks whose last day is always a 40-yard time trial.
pub const TIME_TRIAL_WEEKS: [u32; 4] = [1, 4, 8, 12];

pub const MAX_CONSECUTIVE_TRAINING_DAYS: u32 = 5;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryPolicy {
    /// Active recovery first, then a full rest day, and so on.
    #[default]
    Alternate,
    ActiveRecoveryOnly,
    RestOnly,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProgramConfig {
    pub recovery_policy: RecoveryPolicy,
}

#[must_use]
pub fn is_time_trial_slot(slot: Slot, frequency: Frequency) -> bool {
    TIME_TRIAL_WEEKS.contains(&slot.week()) && slot.is_last_day(frequency)
}

#[must_use]
pub fn intensity_for(category: Category, week: u32) -> Intensity {
    match category {
        Category::Sprint => match week {
            0..=3 => Intensity::Moderate,
            4..=6 => Intensity::High,
            _ => Intensity::Max,
        },
        Category::Tempo => Intensity::Moderate,
        Category::ActiveRecovery | Category::Rest => Intensity::Easy,
        Category::Benchmark => Intensity::Max,
        Category::Comprehensive => {
            if week <= 4 {
                Intensity::Moderate
            } else {
                Intensity::High
            }
        }
    }
}

#[must_use]
pub fn accessory_work(category: Category, week: u32) -> Vec<String> {
    let specific: &[&str] = match category {
        Category::Sprint => &["Sprint Mechanics Drills", "Acceleration Technique"],
        Category::Tempo => &["Tempo Running Form", "Rhythm Development"],
        Category::ActiveRecovery => &["Light Movement", "Mobility Work"],
        Category::Benchmark => &["Competition Preparation", "Mental Focus"],
        Category::Comprehensive => &["Complete Workout Flow", "Skill Development"],
        Category::Rest => &["Recovery Activities"],
    };

    let mut work = vec!["Dynamic Warm-up".to_string()];
    work.extend(specific.iter().map(ToString::to_string));
    if week >= 7 {
        work.push("Advanced Techniques".to_string());
    }
    work.push("Cool-down & Stretching".to_string());
    work
}

/// Builds complete 12-week programs from a catalog.
///
/// Generation has no hidden state. Two generators constructed from equal catalogs and
/// configurations produce equal programs.
#[derive(Debug, Clone)]
pub struct ProgramGenerator {
    catalog: Arc<Catalog>,
    config: ProgramConfig,
}

impl ProgramGenerator {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, config: ProgramConfig) -> Self {
        Self { catalog, config }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> ProgramConfig {
        self.config
    }

    #[must_use]
    pub fn build_program(&self, tier: Tier, frequency: Frequency) -> Program {
        let slots = Slot::all(frequency).collect::<Vec<_>>();
        let mut sessions = Vec::with_capacity(slots.len());
        let mut consecutive_training_days = 0;
        let mut recovery_days = 0;

        for (idx, slot) in slots.iter().enumerate() {
            let next_is_time_trial = slots
                .get(idx + 1)
                .is_some_and(|next| is_time_trial_slot(*next, frequency));

            let session = if is_time_trial_slot(*slot, frequency) {
                self.time_trial_session(tier, *slot)
            } else if consecutive_training_days >= MAX_CONSECUTIVE_TRAINING_DAYS
                || (next_is_time_trial
                    && consecutive_training_days + 1 >= MAX_CONSECUTIVE_TRAINING_DAYS)
            {
                recovery_days += 1;
                self.recovery_session(tier, *slot, recovery_days - 1)
            } else if slot.is_last_day(frequency) {
                self.benchmark_session(tier, *slot)
                    .unwrap_or_else(|| self.regular_session(tier, frequency, *slot))
            } else {
                self.regular_session(tier, frequency, *slot)
            };

            if session.is_recovery() {
                consecutive_training_days = 0;
            } else {
                consecutive_training_days += 1;
            }

            sessions.push(session);
        }

        debug!(
            "generated program for {tier} with {frequency} days per week ({} sessions)",
            sessions.len()
        );

        Program {
            tier,
            frequency,
            sessions,
        }
    }

    fn time_trial_session(&self, tier: Tier, slot: Slot) -> TrainingSession {
        let template = self
            .catalog
            .time_trial(tier)
            .or_else(|| self.catalog.time_trial(Tier::Beginner))
            .copied()
            .unwrap_or_else(|| {
                error!("no time trial template available for {tier}");
                SessionTemplate {
                    name: "40 yd Time Trial",
                    distance: 40,
                    reps: 1,
                    rest: 600,
                    focus: "Benchmark",
                    category: Category::Benchmark,
                    ..EMERGENCY_TEMPLATE
                }
            });

        TrainingSession {
            notes: Some(format!(
                "40-yard time trial - Week {} assessment",
                slot.week()
            )),
            ..session_from_template(&template, slot, template.distance, template.reps)
        }
    }

    fn recovery_session(&self, tier: Tier, slot: Slot, recovery_days: u32) -> TrainingSession {
        let active = match self.config.recovery_policy {
            RecoveryPolicy::Alternate => recovery_days % 2 == 0,
            RecoveryPolicy::ActiveRecoveryOnly => true,
            RecoveryPolicy::RestOnly => false,
        };

        if active {
            if let Some(template) = self.active_recovery_template(tier, slot.week()) {
                return TrainingSession {
                    notes: Some("Light tempo work for active recovery".to_string()),
                    ..session_from_template(template, slot, template.distance, template.reps)
                };
            }
            debug!("no active recovery template for {tier}, inserting rest day");
        }

        rest_session(slot)
    }

    /// The tier's active recovery templates, or those of the closest lower tier.
    fn active_recovery_template(&self, tier: Tier, week: u32) -> Option<&SessionTemplate> {
        Tier::iter()
            .rev()
            .filter(|t| **t <= tier)
            .map(|t| {
                self.catalog
                    .by_tier_and_category(*t, Category::ActiveRecovery)
            })
            .find(|templates| !templates.is_empty())
            .map(|templates| templates[(week as usize - 1) % templates.len()])
    }

    fn benchmark_session(&self, tier: Tier, slot: Slot) -> Option<TrainingSession> {
        let benchmarks = self
            .catalog
            .by_tier_and_category(tier, Category::Benchmark);

        if benchmarks.is_empty() {
            return None;
        }

        let template = benchmarks[(slot.week() as usize - 1) % benchmarks.len()];
        Some(library_session(template, slot, template.distance, template.reps))
    }

    fn regular_session(&self, tier: Tier, frequency: Frequency, slot: Slot) -> TrainingSession {
        let template = select_template(&self.catalog, tier, frequency, slot).template;

        match template.category {
            Category::Benchmark | Category::ActiveRecovery => {
                library_session(&template, slot, template.distance, template.reps)
            }
            Category::Sprint | Category::Tempo | Category::Comprehensive | Category::Rest => {
                let progressed = apply_progression(&template, slot.week(), tier);
                library_session(&template, slot, progressed.distance, progressed.reps)
            }
        }
    }
}

fn session_from_template(
    template: &SessionTemplate,
    slot: Slot,
    distance: u32,
    reps: u32,
) -> TrainingSession {
    let intensity = intensity_for(template.category, slot.week());
    let sprints = match SprintSet::new(distance, reps, intensity) {
        Ok(set) => vec![set],
        Err(err) => {
            error!("invalid sprint set from template {}: {err}", template.id);
            vec![]
        }
    };

    TrainingSession {
        id: stable_session_id(slot.week(), slot.day()),
        week: slot.week(),
        day: slot.day(),
        category: template.category,
        focus: template.focus.to_string(),
        sprints,
        accessory_work: accessory_work(template.category, slot.week()),
        notes: None,
        template_id: Some(template.id),
    }
}

fn library_session(
    template: &SessionTemplate,
    slot: Slot,
    distance: u32,
    reps: u32,
) -> TrainingSession {
    TrainingSession {
        notes: Some(format!("Based on library template: {}", template.name)),
        ..session_from_template(template, slot, distance, reps)
    }
}

fn rest_session(slot: Slot) -> TrainingSession {
    TrainingSession {
        id: stable_session_id(slot.week(), slot.day()),
        week: slot.week(),
        day: slot.day(),
        category: Category::Rest,
        focus: "Rest".to_string(),
        sprints: vec![],
        accessory_work: accessory_work(Category::Rest, slot.week()),
        notes: Some("Complete rest day - no training".to_string()),
        template_id: None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    tier: Tier,
    frequency: Frequency,
    sessions: Vec<TrainingSession>,
}

impl Program {
    #[must_use]
    pub fn tier(&self) -> Tier {
        self.tier
    }

    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    #[must_use]
    pub fn sessions(&self) -> &[TrainingSession] {
        &self.sessions
    }

    #[must_use]
    pub fn into_sessions(self) -> Vec<TrainingSession> {
        self.sessions
    }

    #[must_use]
    pub fn get(&self, week: u32, day: u32) -> Option<&TrainingSession> {
        Slot::new(week, day, self.frequency)
            .ok()
            .and_then(|slot| self.sessions.get(slot.index(self.frequency)))
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[TrainingSession]> {
        self.sessions.chunks(usize::from(*self.frequency))
    }

    pub fn validate(&self) -> Result<(), ProgramError> {
        let frequency = u32::from(*self.frequency);
        let expected = (WEEKS * frequency) as usize;

        if self.sessions.len() != expected {
            return Err(ProgramError::SessionCount {
                expected,
                actual: self.sessions.len(),
            });
        }

        for (idx, (session, slot)) in self
            .sessions
            .iter()
            .zip(Slot::all(self.frequency))
            .enumerate()
        {
            if session.week != slot.week() || session.day != slot.day() {
                return Err(ProgramError::UnexpectedSlot {
                    position: idx,
                    week: session.week,
                    day: session.day,
                });
            }
            session.validate()?;
        }

        Ok(())
    }

    /// Length of the longest run of training days without a recovery day in between.
    #[must_use]
    pub fn max_consecutive_training_days(&self) -> u32 {
        self.sessions
            .iter()
            .fold((0, 0), |(max, run), session| {
                if session.is_recovery() {
                    (max, 0)
                } else {
                    (max.max(run + 1), run + 1)
                }
            })
            .0
    }

    #[must_use]
    pub fn template_usage(&self) -> BTreeMap<TemplateID, usize> {
        let mut usage = BTreeMap::new();
        for id in self.sessions.iter().filter_map(|s| s.template_id) {
            *usage.entry(id).or_insert(0) += 1;
        }
        usage
    }

    /// How much of the tier's part of the catalog the program makes use of.
    #[must_use]
    pub fn distribution(&self, catalog: &Catalog) -> SessionDistribution {
        let usage = self.template_usage();
        let available = catalog.by_tier(self.tier).len();
        let used = usage
            .keys()
            .filter(|id| catalog.get(**id).is_some_and(|t| t.tier == self.tier))
            .count();

        SessionDistribution {
            tier: self.tier,
            frequency: self.frequency,
            available,
            used,
            training_sessions: self.sessions.iter().filter(|s| !s.is_recovery()).count(),
            usage,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProgramError {
    #[error("Program must have {expected} sessions ({actual})")]
    SessionCount { expected: usize, actual: usize },
    #[error("Session at position {position} has unexpected slot week {week} day {day}")]
    UnexpectedSlot { position: usize, week: u32, day: u32 },
    #[error(transparent)]
    Session(#[from] SessionValidationError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionDistribution {
    pub tier: Tier,
    pub frequency: Frequency,
    pub available: usize,
    pub used: usize,
    pub training_sessions: usize,
    pub usage: BTreeMap<TemplateID, usize>,
}

impl SessionDistribution {
    /// Percentage of the tier's templates used at least once.
    #[must_use]
    pub fn utilization(&self) -> f64 {
        if self.available == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let utilization = self.used as f64 / self.available as f64 * 100.0;
        utilization
    }
}

impl fmt::Display for SessionDistribution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({} days/week): {} of {} templates used ({:.1}%), {} training sessions",
            self.tier,
            self.frequency,
            self.used,
            self.available,
            self.utilization(),
            self.training_sessions
        )
    }
}
