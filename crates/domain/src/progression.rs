use std::{fmt, ops::RangeInclusive};

use crate::{SessionTemplate, TemplateID, Tier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    Foundation,
    Acceleration,
    MaxVelocity,
    PeakPerformance,
}

impl Phase {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Phase::Foundation => "Foundation",
            Phase::Acceleration => "Acceleration",
            Phase::MaxVelocity => "Max Velocity",
            Phase::PeakPerformance => "Peak Performance",
        }
    }

    fn percent(self) -> u32 {
        match self {
            Phase::Foundation => 80,
            Phase::Acceleration => 90,
            Phase::MaxVelocity => 100,
            Phase::PeakPerformance => 110,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[must_use]
pub fn phase_for(week: u32) -> Phase {
    match week {
        0..=3 => Phase::Foundation,
        4..=6 => Phase::Acceleration,
        7..=9 => Phase::MaxVelocity,
        _ => Phase::PeakPerformance,
    }
}

#[must_use]
pub fn multiplier_for(week: u32) -> f64 {
    f64::from(phase_for(week).percent()) / 100.0
}

fn tier_percent(tier: Tier) -> u32 {
    match tier {
        Tier::Beginner => 80,
        Tier::Intermediate => 100,
        Tier::Advanced => 120,
        Tier::Elite => 140,
    }
}

#[must_use]
pub fn tier_multiplier(tier: Tier) -> f64 {
    f64::from(tier_percent(tier)) / 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressedTemplate {
    pub template_id: TemplateID,
    /// Yards
    pub distance: u32,
    pub reps: u32,
}

impl ProgressedTemplate {
    pub const DISTANCE: RangeInclusive<u32> = 10..=100;
    pub const REPS: RangeInclusive<u32> = 2..=8;

    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            template_id: self.template_id,
            distance: self
                .distance
                .clamp(*Self::DISTANCE.start(), *Self::DISTANCE.end()),
            reps: self.reps.clamp(*Self::REPS.start(), *Self::REPS.end()),
        }
    }
}

/// Scales a template for a week and tier.
///
/// Both multipliers are whole percentages, so the product is evaluated in integers and truncated
/// before clamping. This keeps the result independent of floating point behaviour.
#[must_use]
pub fn apply_progression(template: &SessionTemplate, week: u32, tier: Tier) -> ProgressedTemplate {
    let factor = u64::from(phase_for(week).percent()) * u64::from(tier_percent(tier));
    let scale = |value: u32| {
        u32::try_from(u64::from(value) * factor / 10_000).unwrap_or(u32::MAX)
    };

    ProgressedTemplate {
        template_id: template.id,
        distance: scale(template.distance),
        reps: scale(template.reps),
    }
    .clamped()
}

/// Projected 40-yard time after the given number of training weeks.
#[must_use]
pub fn expected_time_trial(baseline: f64, weeks: u32) -> f64 {
    baseline * (1.0 - f64::from(weeks) * 0.015)
}
