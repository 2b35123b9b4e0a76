use log::{error, warn};
use thiserror::Error;

use crate::{Catalog, EMERGENCY_TEMPLATE, Frequency, SessionTemplate, Tier};

pub const WEEKS: u32 = 12;

/// A validated (week, day) position in a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot {
    week: u32,
    day: u32,
}

impl Slot {
    pub fn new(week: u32, day: u32, frequency: Frequency) -> Result<Self, SlotError> {
        if !(1..=WEEKS).contains(&week) {
            return Err(SlotError::WeekOutOfRange(week));
        }

        if day < 1 || day > u32::from(*frequency) {
            return Err(SlotError::DayOutOfRange {
                day,
                frequency: *frequency,
            });
        }

        Ok(Self { week, day })
    }

    #[must_use]
    pub fn week(&self) -> u32 {
        self.week
    }

    #[must_use]
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Zero-based position of the slot in the whole program.
    #[must_use]
    pub fn index(&self, frequency: Frequency) -> usize {
        ((self.week - 1) * u32::from(*frequency) + (self.day - 1)) as usize
    }

    #[must_use]
    pub fn is_last_day(&self, frequency: Frequency) -> bool {
        self.day == u32::from(*frequency)
    }

    /// All slots of a program in order.
    pub fn all(frequency: Frequency) -> impl Iterator<Item = Slot> {
        (1..=WEEKS).flat_map(move |week| {
            (1..=u32::from(*frequency)).map(move |day| Slot { week, day })
        })
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotError {
    #[error("Week must be in the range 1 to 12 ({0})")]
    WeekOutOfRange(u32),
    #[error("Day must be in the range 1 to {frequency} ({day})")]
    DayOutOfRange { day: u32, frequency: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    Tier,
    FallbackTier,
    Emergency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub template: SessionTemplate,
    pub source: SelectionSource,
}

/// Picks the template for a slot.
///
/// The choice only depends on the arguments, so every device holding the same catalog picks the
/// same template for the same slot.
#[must_use]
pub fn select_template(
    catalog: &Catalog,
    tier: Tier,
    frequency: Frequency,
    slot: Slot,
) -> Selection {
    let mut source = SelectionSource::Tier;
    let mut candidates = catalog.by_tier(tier);

    if candidates.is_empty() && tier != Tier::Beginner {
        warn!("no templates for tier {tier}, falling back to beginner");
        source = SelectionSource::FallbackTier;
        candidates = catalog.by_tier(Tier::Beginner);
    }

    if candidates.is_empty() {
        error!(
            "no templates available in catalog version {}, using emergency template",
            catalog.version()
        );
        return Selection {
            template: EMERGENCY_TEMPLATE,
            source: SelectionSource::Emergency,
        };
    }

    Selection {
        template: *candidates[slot.index(frequency) % candidates.len()],
        source,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{Category, TemplateID};

    use super::*;

    fn frequency(value: u8) -> Frequency {
        Frequency::new(value).unwrap()
    }

    fn catalog(tiers: &[(u32, Tier)]) -> Catalog {
        Catalog::new(
            1,
            tiers
                .iter()
                .map(|(id, tier)| SessionTemplate {
                    id: TemplateID::from(*id),
                    name: "Test",
                    distance: 30,
                    reps: 4,
                    rest: 120,
                    focus: "Drive Phase",
                    tier: *tier,
                    category: Category::Sprint,
                })
                .collect(),
        )
        .unwrap()
    }

    #[rstest]
    #[case(0, 1, 3, Err(SlotError::WeekOutOfRange(0)))]
    #[case(13, 1, 3, Err(SlotError::WeekOutOfRange(13)))]
    #[case(1, 0, 3, Err(SlotError::DayOutOfRange { day: 0, frequency: 3 }))]
    #[case(1, 4, 3, Err(SlotError::DayOutOfRange { day: 4, frequency: 3 }))]
    #[case(12, 3, 3, Ok(Slot { week: 12, day: 3 }))]
    fn test_slot_new(
        #[case] week: u32,
        #[case] day: u32,
        #[case] f: u8,
        #[case] expected: Result<Slot, SlotError>,
    ) {
        assert_eq!(Slot::new(week, day, frequency(f)), expected);
    }

    #[rstest]
    #[case(1, 1, 3, 0)]
    #[case(1, 3, 3, 2)]
    #[case(2, 1, 3, 3)]
    #[case(12, 7, 7, 83)]
    fn test_slot_index(#[case] week: u32, #[case] day: u32, #[case] f: u8, #[case] expected: usize) {
        assert_eq!(
            Slot::new(week, day, frequency(f)).unwrap().index(frequency(f)),
            expected
        );
    }

    #[test]
    fn test_slot_all() {
        let slots = Slot::all(frequency(2)).collect::<Vec<_>>();
        assert_eq!(slots.len(), 24);
        assert_eq!(slots[0], Slot { week: 1, day: 1 });
        assert_eq!(slots[3], Slot { week: 2, day: 2 });
        assert_eq!(slots[23], Slot { week: 12, day: 2 });
    }

    #[test]
    fn test_select_template_rotates_through_tier() {
        let catalog = catalog(&[(1, Tier::Beginner), (2, Tier::Elite), (3, Tier::Elite)]);
        let f = frequency(3);
        let ids = Slot::all(f)
            .take(4)
            .map(|slot| *select_template(&catalog, Tier::Elite, f, slot).template.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![2, 3, 2, 3]);
    }

    #[test]
    fn test_select_template_single_template_wraps() {
        let catalog = catalog(&[(7, Tier::Advanced)]);
        let f = frequency(7);
        assert!(
            Slot::all(f)
                .all(|slot| *select_template(&catalog, Tier::Advanced, f, slot).template.id == 7)
        );
    }

    #[test]
    fn test_select_template_falls_back_to_beginner() {
        let catalog = catalog(&[(1, Tier::Beginner), (2, Tier::Beginner)]);
        let f = frequency(3);
        let selection = select_template(
            &catalog,
            Tier::parse_lenient("Legendary"),
            f,
            Slot::new(1, 2, f).unwrap(),
        );
        assert_eq!(*selection.template.id, 2);
        assert_eq!(selection.source, SelectionSource::Tier);

        let selection = select_template(&catalog, Tier::Elite, f, Slot::new(1, 1, f).unwrap());
        assert_eq!(*selection.template.id, 1);
        assert_eq!(selection.source, SelectionSource::FallbackTier);
    }

    #[test]
    fn test_select_template_empty_catalog() {
        let catalog = Catalog::new(1, vec![]).unwrap();
        let f = frequency(1);
        assert_eq!(
            select_template(&catalog, Tier::Intermediate, f, Slot::new(5, 1, f).unwrap()),
            Selection {
                template: EMERGENCY_TEMPLATE,
                source: SelectionSource::Emergency,
            }
        );
    }

    #[test]
    fn test_select_template_builtin_legendary() {
        let catalog = Catalog::builtin();
        let f = frequency(3);
        let selection = select_template(
            &catalog,
            Tier::parse_lenient("Legendary"),
            f,
            Slot::new(1, 1, f).unwrap(),
        );
        assert_eq!(selection.template.tier, Tier::Beginner);
        assert_eq!(selection.source, SelectionSource::Tier);
        assert!(selection.template.distance > 0);
    }
}
