use std::{collections::BTreeMap, fmt};

use log::debug;

use crate::{Frequency, Program, ProgramGenerator, Tier, UserProfileKey};

/// Key of a stored program.
///
/// The textual form `<tier>-<days>` is unique for every tier and frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProgramKey {
    pub tier: Tier,
    pub frequency: Frequency,
}

impl From<UserProfileKey> for ProgramKey {
    fn from(value: UserProfileKey) -> Self {
        Self {
            tier: value.tier,
            frequency: value.frequency,
        }
    }
}

impl fmt::Display for ProgramKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.tier.name().to_lowercase(), self.frequency)
    }
}

/// Programs generated on this device, keyed by the profile they were generated for.
#[derive(Debug, Clone)]
pub struct ProgramStore {
    generator: ProgramGenerator,
    programs: BTreeMap<ProgramKey, Program>,
}

impl ProgramStore {
    #[must_use]
    pub fn new(generator: ProgramGenerator) -> Self {
        Self {
            generator,
            programs: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn generator(&self) -> &ProgramGenerator {
        &self.generator
    }

    #[must_use]
    pub fn get(&self, key: ProgramKey) -> Option<&Program> {
        self.programs.get(&key)
    }

    pub fn get_or_generate(&mut self, key: ProgramKey) -> &Program {
        self.programs.entry(key).or_insert_with(|| {
            debug!("generating program {key}");
            self.generator.build_program(key.tier, key.frequency)
        })
    }

    /// Replaces the stored program, e.g. after the profile changed.
    pub fn regenerate(&mut self, key: ProgramKey) -> &Program {
        self.programs.remove(&key);
        self.get_or_generate(key)
    }

    /// Stores a program received from another device.
    pub fn insert(&mut self, program: Program) -> Option<Program> {
        let key = ProgramKey {
            tier: program.tier(),
            frequency: program.frequency(),
        };
        self.programs.insert(key, program)
    }

    pub fn remove(&mut self, key: ProgramKey) -> Option<Program> {
        self.programs.remove(&key)
    }

    pub fn clear(&mut self) {
        self.programs.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.programs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}
