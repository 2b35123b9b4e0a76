use std::{
    collections::BTreeSet,
    fmt,
    slice::Iter,
    sync::{Arc, LazyLock},
};

use derive_more::{Deref, Display, Into};
use thiserror::Error;

use crate::Tier::{self, Advanced, Beginner, Elite, Intermediate};

use Category::{ActiveRecovery, Benchmark, Sprint};

pub const CATALOG_VERSION: u32 = 1;

#[derive(Debug, Display, Default, Clone, Copy, Into, Deref, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TemplateID(u32);

impl From<u32> for TemplateID {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Sprint,
    Tempo,
    Benchmark,
    ActiveRecovery,
    Rest,
    Comprehensive,
}

impl Category {
    pub fn iter() -> Iter<'static, Category> {
        static CATEGORIES: [Category; 6] = [
            Category::Sprint,
            Category::Tempo,
            Category::Benchmark,
            Category::ActiveRecovery,
            Category::Rest,
            Category::Comprehensive,
        ];
        CATEGORIES.iter()
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Sprint => "Sprint",
            Category::Tempo => "Tempo",
            Category::Benchmark => "Benchmark",
            Category::ActiveRecovery => "Active Recovery",
            Category::Rest => "Rest",
            Category::Comprehensive => "Comprehensive",
        }
    }

    /// Recovery days break up runs of consecutive training days.
    #[must_use]
    pub fn is_recovery(self) -> bool {
        matches!(self, Category::ActiveRecovery | Category::Rest)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<&str> for Category {
    type Error = CategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Category::iter()
            .find(|c| c.label().eq_ignore_ascii_case(value.trim()))
            .copied()
            .ok_or_else(|| CategoryError::Unknown(value.to_string()))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CategoryError {
    #[error("Unknown session category \"{0}\"")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTemplate {
    pub id: TemplateID,
    pub name: &'static str,
    /// Yards
    pub distance: u32,
    pub reps: u32,
    /// Seconds
    pub rest: u32,
    pub focus: &'static str,
    pub tier: Tier,
    pub category: Category,
}

/// Used when neither the requested tier nor the beginner tier has any templates.
pub const EMERGENCY_TEMPLATE: SessionTemplate = SessionTemplate {
    id: TemplateID(0),
    name: "Emergency Fallback",
    distance: 20,
    reps: 4,
    rest: 120,
    focus: "Basic Training",
    tier: Tier::Beginner,
    category: Category::Sprint,
};

/// An immutable, versioned table of session templates ordered by id.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    version: u32,
    templates: Vec<SessionTemplate>,
}

impl Catalog {
    pub fn new(version: u32, mut templates: Vec<SessionTemplate>) -> Result<Self, CatalogError> {
        templates.sort_by_key(|t| t.id);

        let mut ids = BTreeSet::new();
        for t in &templates {
            if !ids.insert(t.id) {
                return Err(CatalogError::DuplicateID(t.id));
            }
            if t.distance == 0 || t.reps == 0 {
                return Err(CatalogError::InvalidTemplate(t.id));
            }
        }

        Ok(Self { version, templates })
    }

    /// The catalog shipped with the application.
    #[must_use]
    pub fn builtin() -> Arc<Catalog> {
        BUILTIN.clone()
    }

    #[must_use]
    pub fn version(&self) -> u32 {
        self.version
    }

    #[must_use]
    pub fn templates(&self) -> &[SessionTemplate] {
        &self.templates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: TemplateID) -> Option<&SessionTemplate> {
        self.templates
            .binary_search_by_key(&id, |t| t.id)
            .ok()
            .map(|idx| &self.templates[idx])
    }

    #[must_use]
    pub fn by_tier(&self, tier: Tier) -> Vec<&SessionTemplate> {
        self.templates.iter().filter(|t| t.tier == tier).collect()
    }

    #[must_use]
    pub fn by_tier_and_category(&self, tier: Tier, category: Category) -> Vec<&SessionTemplate> {
        self.templates
            .iter()
            .filter(|t| t.tier == tier && t.category == category)
            .collect()
    }

    /// The 40-yard benchmark used for time trials, preferring the most recently added one.
    #[must_use]
    pub fn time_trial(&self, tier: Tier) -> Option<&SessionTemplate> {
        self.by_tier_and_category(tier, Category::Benchmark)
            .into_iter()
            .rev()
            .find(|t| t.distance == 40)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate template id {0}")]
    DuplicateID(TemplateID),
    #[error("Template {0} must have a positive distance and number of reps")]
    InvalidTemplate(TemplateID),
}

static BUILTIN: LazyLock<Arc<Catalog>> = LazyLock::new(|| {
    let mut templates = TEMPLATES.to_vec();
    templates.sort_by_key(|t| t.id);
    Arc::new(Catalog {
        version: CATALOG_VERSION,
        templates,
    })
});

#[allow(clippy::too_many_arguments)]
const fn template(
    id: u32,
    name: &'static str,
    distance: u32,
    reps: u32,
    rest_minutes: u32,
    focus: &'static str,
    tier: Tier,
    category: Category,
) -> SessionTemplate {
    SessionTemplate {
        id: TemplateID(id),
        name,
        distance,
        reps,
        rest: rest_minutes * 60,
        focus,
        tier,
        category,
    }
}

#[rustfmt::skip]
const TEMPLATES: &[SessionTemplate] = &[
    template(1, "10 yd Starts", 10, 8, 1, "Acceleration", Beginner, Sprint),
    template(2, "15 yd Starts", 15, 10, 1, "Acceleration", Beginner, Sprint),
    template(3, "20 yd Accel", 20, 6, 2, "Early Acceleration", Beginner, Sprint),
    template(4, "25 yd Accel", 25, 8, 2, "Drive Phase", Beginner, Sprint),
    template(5, "30 yd Drive", 30, 6, 2, "Drive Phase", Beginner, Sprint),
    template(6, "35 yd Drive", 35, 5, 2, "Drive Phase", Beginner, Sprint),
    template(7, "40 yd Repeats", 40, 6, 3, "Max Speed", Beginner, Sprint),
    template(8, "40 yd Time Trial", 40, 1, 10, "Benchmark", Beginner, Benchmark),
    template(9, "45 yd Sprint", 45, 5, 3, "Speed", Beginner, Sprint),
    template(10, "50 yd Sprints", 50, 5, 3, "Accel → Top Speed", Intermediate, Sprint),
    template(11, "50 yd Time Trial", 50, 1, 10, "Benchmark", Intermediate, Benchmark),
    template(12, "55 yd Sprint", 55, 4, 3, "Accel → Top Speed", Intermediate, Sprint),
    template(13, "60 yd Fly", 60, 6, 4, "Max Velocity", Intermediate, Sprint),
    template(14, "65 yd Fly", 65, 5, 4, "Max Velocity", Intermediate, Sprint),
    template(15, "70 yd Build", 70, 4, 4, "Speed Endurance", Intermediate, Sprint),
    template(16, "75 yd Sprint", 75, 3, 5, "Top-End Speed", Advanced, Sprint),
    template(17, "80 yd Repeats", 80, 3, 5, "Repeat Sprints", Advanced, Sprint),
    template(18, "85 yd Sprint", 85, 3, 5, "Top-End Speed", Advanced, Sprint),
    template(19, "90 yd Sprints", 90, 3, 5, "Top-End Speed", Advanced, Sprint),
    template(20, "95 yd Sprint", 95, 2, 6, "Peak Velocity", Advanced, Sprint),
    template(21, "100 yd Max", 100, 2, 6, "Peak Velocity", Advanced, Sprint),
    template(22, "10+20 yd Ladder", 20, 4, 1, "Accel progression", Beginner, Sprint),
    template(23, "15+30 yd Ladder", 30, 3, 2, "Accel → Drive", Beginner, Sprint),
    template(24, "20+20 yd Split", 20, 5, 2, "Accel mechanics", Beginner, Sprint),
    template(25, "10–20–30 yd Pyramid", 30, 3, 2, "Accel progression", Beginner, Sprint),
    template(26, "20–30–40 yd Pyramid", 40, 3, 2, "Accel → Max Speed", Intermediate, Sprint),
    template(27, "25–35–45 yd Ladder", 45, 4, 3, "Accel + Max Speed", Intermediate, Sprint),
    template(28, "30–40–50 yd Ladder", 50, 3, 3, "Speed Endurance", Intermediate, Sprint),
    template(29, "40 yd ×6", 40, 6, 2, "Speed", Intermediate, Sprint),
    template(30, "50 yd ×5", 50, 5, 3, "Speed", Intermediate, Sprint),
    template(31, "60 yd ×4", 60, 4, 4, "Max Velocity", Intermediate, Sprint),
    template(32, "70 yd ×3", 70, 3, 4, "Speed Endurance", Advanced, Sprint),
    template(33, "80 yd ×3", 80, 3, 5, "Repeat Sprints", Advanced, Sprint),
    template(34, "90 yd ×3", 90, 3, 5, "Top-End Speed", Advanced, Sprint),
    template(35, "100 yd ×2", 100, 2, 6, "Peak Velocity", Advanced, Sprint),
    template(36, "Flying 10 yd", 10, 6, 2, "Max Velocity", Beginner, Sprint),
    template(37, "Flying 15 yd", 15, 6, 2, "Max Velocity", Beginner, Sprint),
    template(38, "Flying 20 yd", 20, 6, 2, "Max Velocity", Intermediate, Sprint),
    template(39, "Flying 25 yd", 25, 5, 3, "Max Velocity", Intermediate, Sprint),
    template(40, "Flying 30 yd", 30, 5, 3, "Max Velocity", Intermediate, Sprint),
    template(41, "Flying 35 yd", 35, 4, 4, "Max Velocity", Advanced, Sprint),
    template(42, "Flying 40 yd", 40, 4, 4, "Max Velocity", Advanced, Sprint),
    template(43, "Flying 45 yd", 45, 3, 5, "Max Velocity", Advanced, Sprint),
    template(44, "Flying 50 yd", 50, 3, 5, "Max Velocity", Advanced, Sprint),
    template(45, "Split 10+20 yd", 20, 5, 1, "Accel mechanics", Beginner, Sprint),
    template(46, "Split 15+25 yd", 25, 5, 2, "Accel mechanics", Beginner, Sprint),
    template(47, "Split 20+30 yd", 30, 4, 2, "Accel → Drive", Intermediate, Sprint),
    template(48, "Split 25+35 yd", 35, 4, 3, "Accel → Max Speed", Intermediate, Sprint),
    template(49, "Split 30+40 yd", 40, 3, 3, "Top-End Speed", Intermediate, Sprint),
    template(50, "Split 35+45 yd", 45, 3, 3, "Top-End Speed", Advanced, Sprint),
    template(51, "Split 40+50 yd", 50, 3, 3, "Top-End Speed", Advanced, Sprint),
    template(52, "20 yd Tempo", 20, 6, 2, "Active Recovery", Beginner, ActiveRecovery),
    template(53, "30 yd Tempo", 30, 5, 2, "Active Recovery", Beginner, ActiveRecovery),
    template(54, "40 yd Tempo", 40, 4, 3, "Active Recovery", Intermediate, ActiveRecovery),
    template(55, "50 yd Tempo", 50, 4, 3, "Speed Endurance", Intermediate, Sprint),
    template(56, "60 yd Tempo", 60, 3, 4, "Speed Endurance", Advanced, Sprint),
    template(57, "70 yd Tempo", 70, 3, 4, "Speed Endurance", Advanced, Sprint),
    template(58, "80 yd Tempo", 80, 2, 5, "Speed Reserve", Advanced, Sprint),
    template(59, "10+20+30 yd Split", 30, 3, 2, "Accel → Drive → Top Speed", Beginner, Sprint),
    template(60, "15+25+35 yd Split", 35, 3, 3, "Accel → Max Velocity", Beginner, Sprint),
    template(61, "20+30+40 yd Split", 40, 3, 3, "Accel → Max Velocity", Intermediate, Sprint),
    template(62, "25+35+45 yd Split", 45, 3, 3, "Speed Endurance", Intermediate, Sprint),
    template(63, "30+40+50 yd Split", 50, 3, 3, "Repeat Sprint", Advanced, Sprint),
    template(64, "35+45+55 yd Split", 55, 3, 3, "Top-End Speed", Advanced, Sprint),
    template(65, "40+50+60 yd Split", 60, 2, 4, "Speed Endurance", Advanced, Sprint),
    template(66, "45+55+65 yd Split", 65, 2, 5, "Max Velocity", Advanced, Sprint),
    template(67, "10–40 yd Pyramid", 40, 2, 2, "Accel → Max Speed", Beginner, Sprint),
    template(68, "20–50 yd Pyramid", 50, 2, 3, "Accel → Top Speed", Intermediate, Sprint),
    template(69, "30–60 yd Pyramid", 60, 2, 3, "Repeat Sprint", Advanced, Sprint),
    template(70, "40–70 yd Pyramid", 70, 2, 3, "Speed Endurance", Advanced, Sprint),
    template(71, "50–80 yd Pyramid", 80, 2, 4, "Repeat Sprint", Advanced, Sprint),
    template(72, "40 yd Time Trial", 40, 1, 10, "Benchmark", Beginner, Benchmark),
    template(73, "40 yd Time Trial", 40, 1, 10, "Benchmark", Intermediate, Benchmark),
    template(74, "40 yd Time Trial", 40, 1, 10, "Benchmark", Advanced, Benchmark),
    template(75, "10×10 yd Starts", 10, 10, 1, "Explosive Starts", Beginner, Sprint),
    template(76, "12×10 yd Starts", 10, 12, 1, "First-Step Power", Beginner, Sprint),
    template(77, "8×15 yd Accel", 15, 8, 2, "Acceleration", Beginner, Sprint),
    template(78, "6×20 yd Drive", 20, 6, 2, "Drive Phase", Beginner, Sprint),
    template(79, "5×25 yd Drive", 25, 5, 3, "Drive → Max V", Intermediate, Sprint),
    template(80, "4×30 yd Sprint", 30, 4, 3, "Speed", Intermediate, Sprint),
    template(81, "3×35 yd Sprint", 35, 3, 3, "Max Velocity", Intermediate, Sprint),
    template(82, "2×40 yd Sprint", 40, 2, 4, "Peak Velocity", Advanced, Sprint),
    template(83, "10 yd Flying", 10, 6, 2, "Max Velocity", Beginner, Sprint),
    template(84, "20 yd Flying", 20, 6, 2, "Max Velocity", Intermediate, Sprint),
    template(85, "30 yd Flying", 30, 5, 3, "Max Velocity", Intermediate, Sprint),
    template(86, "40 yd Flying", 40, 4, 3, "Max Velocity", Advanced, Sprint),
    template(87, "50 yd Flying", 50, 3, 4, "Max Velocity", Advanced, Sprint),
    template(88, "10–20–10 yd Pyramid", 20, 3, 2, "Accel Progression", Beginner, Sprint),
    template(89, "15–25–15 yd Pyramid", 25, 3, 3, "Accel → Drive", Intermediate, Sprint),
    template(90, "20–30–20 yd Pyramid", 30, 3, 3, "Accel → Max Speed", Intermediate, Sprint),
    template(91, "25–35–25 yd Pyramid", 35, 3, 3, "Speed Endurance", Advanced, Sprint),
    template(92, "30–40–30 yd Pyramid", 40, 2, 3, "Top-End Speed", Advanced, Sprint),
    template(93, "35–45–35 yd Pyramid", 45, 2, 4, "Repeat Sprint", Advanced, Sprint),
    template(94, "40–50–40 yd Pyramid", 50, 2, 4, "Speed Endurance", Advanced, Sprint),
    template(95, "10×5 yd Shuttle", 5, 10, 1, "Quick Acceleration", Beginner, Sprint),
    template(96, "20×5 yd Shuttle", 5, 20, 1, "Quick Acceleration", Intermediate, Sprint),
    template(97, "30×5 yd Shuttle", 5, 30, 1, "Quick Acceleration", Advanced, Sprint),
    template(98, "10 yd → 20 yd Repeats", 20, 5, 2, "Accel → Drive", Beginner, Sprint),
    template(99, "20 yd → 30 yd Repeats", 30, 5, 2, "Drive → Max Speed", Intermediate, Sprint),
    template(100, "30 yd → 40 yd Repeats", 40, 4, 3, "Drive → Max Speed", Advanced, Sprint),
    template(101, "40 yd → 50 yd Repeats", 50, 3, 3, "Max Velocity → Speed Endurance", Advanced, Sprint),
    template(102, "Elite Accel 10 yd ×10", 10, 10, 1, "Acceleration", Elite, Sprint),
    template(103, "Elite Accel 20 yd ×8", 20, 8, 2, "Acceleration", Elite, Sprint),
    template(104, "Elite Accel 30 yd ×6", 30, 6, 2, "Drive Phase", Elite, Sprint),
    template(105, "Elite Accel 40 yd ×5", 40, 5, 3, "Drive → Max Velocity", Elite, Sprint),
    template(106, "Elite Fly 10 yd ×6", 10, 6, 2, "Max Velocity", Elite, Sprint),
    template(107, "Elite Fly 20 yd ×6", 20, 6, 2, "Max Velocity", Elite, Sprint),
    template(108, "Elite Fly 30 yd ×5", 30, 5, 3, "Max Velocity", Elite, Sprint),
    template(109, "Elite Fly 40 yd ×4", 40, 4, 3, "Max Velocity", Elite, Sprint),
    template(110, "Elite Fly 50 yd ×3", 50, 3, 4, "Max Velocity", Elite, Sprint),
    template(111, "Elite Split 10+20 yd ×6", 20, 6, 2, "Accel Mechanics", Elite, Sprint),
    template(112, "Elite Split 15+25 yd ×5", 25, 5, 3, "Accel → Drive", Elite, Sprint),
    template(113, "Elite Split 20+30 yd ×4", 30, 4, 3, "Accel → Max Speed", Elite, Sprint),
    template(114, "Elite Split 25+35 yd ×4", 35, 4, 3, "Drive → Max Speed", Elite, Sprint),
    template(115, "Elite Split 30+40 yd ×3", 40, 3, 4, "Top-End Speed", Elite, Sprint),
    template(116, "Elite Split 35+45 yd ×3", 45, 3, 4, "Top-End Speed", Elite, Sprint),
    template(117, "Elite Split 40+50 yd ×2", 50, 2, 4, "Top-End Speed", Elite, Sprint),
    template(118, "Elite Contrast 40 yd Sprint + 60 yd Float ×3", 40, 3, 4, "Speed Contrast", Elite, Sprint),
    template(119, "Elite 40 yd Time Trial", 40, 1, 10, "Benchmark", Elite, Benchmark),
    template(120, "Elite 50 yd Time Trial", 50, 1, 10, "Benchmark", Elite, Benchmark),
    template(121, "Elite 60 yd Time Trial", 60, 1, 10, "Benchmark", Elite, Benchmark),
    template(122, "Elite 70 yd Sprint ×2", 70, 2, 5, "Speed Endurance", Elite, Sprint),
    template(123, "Elite 80 yd Sprint ×2", 80, 2, 5, "Speed Endurance", Elite, Sprint),
    template(124, "Elite 90 yd Sprint ×2", 90, 2, 6, "Top-End Speed", Elite, Sprint),
    template(125, "Elite 100 yd Sprint ×2", 100, 2, 6, "Peak Velocity", Elite, Sprint),
    template(126, "Elite Flying 20 yd ×6", 20, 6, 2, "Max Velocity", Elite, Sprint),
    template(127, "Elite Flying 30 yd ×5", 30, 5, 3, "Max Velocity", Elite, Sprint),
    template(128, "Elite Flying 40 yd ×4", 40, 4, 3, "Max Velocity", Elite, Sprint),
    template(129, "Elite Flying 50 yd ×3", 50, 3, 4, "Max Velocity", Elite, Sprint),
    template(130, "Elite Ladder 10+20+30 yd ×3", 30, 3, 3, "Accel → Drive → Max Speed", Elite, Sprint),
    template(131, "Elite Ladder 20+30+40 yd ×3", 40, 3, 3, "Accel → Drive → Max Speed", Elite, Sprint),
    template(132, "Elite Ladder 30+40+50 yd ×2", 50, 2, 4, "Top-End Speed", Elite, Sprint),
    template(133, "Elite Ladder 40+50+60 yd ×2", 60, 2, 4, "Top-End Speed", Elite, Sprint),
    template(134, "Elite Pyramid 10–20–10 yd ×3", 20, 3, 2, "Accel → Drive", Elite, Sprint),
    template(135, "Elite Pyramid 15–25–15 yd ×3", 25, 3, 3, "Accel → Drive", Elite, Sprint),
    template(136, "Elite Pyramid 20–30–20 yd ×3", 30, 3, 3, "Accel → Max Speed", Elite, Sprint),
    template(137, "Elite Pyramid 25–35–25 yd ×2", 35, 2, 3, "Top-End Speed", Elite, Sprint),
    template(138, "Elite Pyramid 30–40–30 yd ×2", 40, 2, 4, "Top-End Speed", Elite, Sprint),
    template(139, "Elite Pyramid 35–45–35 yd ×2", 45, 2, 4, "Repeat Sprint", Elite, Sprint),
    template(140, "Elite Pyramid 40–50–40 yd ×2", 50, 2, 4, "Speed Endurance", Elite, Sprint),
    template(141, "Elite Shuttle 5 yd ×10", 5, 10, 1, "Quick Acceleration", Elite, Sprint),
    template(142, "Elite Shuttle 5 yd ×15", 5, 15, 1, "Quick Acceleration", Elite, Sprint),
    template(143, "Elite Shuttle 5 yd ×20", 5, 20, 1, "Quick Acceleration", Elite, Sprint),
    template(144, "Elite Split 10+20 yd ×6", 20, 6, 2, "Acceleration Mechanics", Elite, Sprint),
    template(145, "Elite Split 20+30 yd ×5", 30, 5, 3, "Drive → Max Speed", Elite, Sprint),
    template(146, "Elite Split 30+40 yd ×4", 40, 4, 3, "Top-End Speed", Elite, Sprint),
    template(147, "Elite Split 40+50 yd ×3", 50, 3, 4, "Top-End Speed", Elite, Sprint),
    template(148, "Elite 40 yd Sprint ×5", 40, 5, 3, "Acceleration → Max Velocity", Elite, Sprint),
    template(149, "Elite 50 yd Sprint ×4", 50, 4, 4, "Acceleration → Max Velocity", Elite, Sprint),
    template(150, "Elite 60 yd Sprint ×3", 60, 3, 4, "Top-End Speed", Elite, Sprint),
    template(151, "Elite 70 yd Sprint ×3", 70, 3, 5, "Speed Endurance", Elite, Sprint),
    template(152, "Elite 80 yd Sprint ×2", 80, 2, 5, "Speed Endurance", Elite, Sprint),
    template(153, "Elite 90 yd Sprint ×2", 90, 2, 6, "Top-End Speed", Elite, Sprint),
    template(154, "Elite 100 yd Sprint ×2", 100, 2, 6, "Peak Velocity", Elite, Sprint),
    template(155, "Elite Flying 10 yd ×6", 10, 6, 2, "Max Velocity", Elite, Sprint),
    template(156, "Elite Flying 20 yd ×6", 20, 6, 2, "Max Velocity", Elite, Sprint),
    template(157, "Elite Flying 30 yd ×5", 30, 5, 3, "Max Velocity", Elite, Sprint),
    template(158, "Elite Flying 40 yd ×4", 40, 4, 3, "Max Velocity", Elite, Sprint),
    template(159, "Elite Flying 50 yd ×3", 50, 3, 4, "Max Velocity", Elite, Sprint),
    template(160, "Elite 40 yd → 60 yd Ladder ×3", 60, 3, 4, "Accel → Top-End Speed", Elite, Sprint),
    template(161, "Elite 50 yd → 70 yd Ladder ×2", 70, 2, 5, "Top-End Speed → Speed Endurance", Elite, Sprint),
    template(162, "Elite 60 yd → 80 yd Ladder ×2", 80, 2, 5, "Speed Endurance", Elite, Sprint),
    template(163, "Elite 70 yd → 90 yd Ladder ×2", 90, 2, 6, "Speed Endurance", Elite, Sprint),
    template(164, "Elite 80 yd → 100 yd Ladder ×2", 100, 2, 6, "Top-End Speed", Elite, Sprint),
    template(165, "Elite Pyramid 10–30–10 yd ×3", 30, 3, 3, "Accel Progression", Elite, Sprint),
    template(166, "Elite Pyramid 20–40–20 yd ×2", 40, 2, 3, "Accel → Max Speed", Elite, Sprint),
    template(167, "Elite Pyramid 30–50–30 yd ×2", 50, 2, 4, "Top-End Speed", Elite, Sprint),
    template(168, "Elite Pyramid 40–60–40 yd ×2", 60, 2, 4, "Top-End Speed", Elite, Sprint),
    template(169, "Elite Pyramid 50–70–50 yd ×2", 70, 2, 5, "Speed Endurance", Elite, Sprint),
    template(170, "Elite Shuttle 5 yd ×25", 5, 25, 1, "Quick Acceleration", Elite, Sprint),
    template(171, "Elite Shuttle 5 yd ×30", 5, 30, 1, "Quick Acceleration", Elite, Sprint),
    template(172, "Elite Split 10+30 yd ×3", 30, 3, 3, "Accel → Max Speed", Elite, Sprint),
    template(173, "Elite Split 20+40 yd ×3", 40, 3, 3, "Top-End Speed", Elite, Sprint),
    template(174, "Elite Split 30+50 yd ×2", 50, 2, 4, "Top-End Speed", Elite, Sprint),
    template(175, "Elite 40 yd Sprint ×6", 40, 6, 3, "Acceleration → Drive → Max Speed", Elite, Sprint),
    template(176, "Elite 50 yd Sprint ×5", 50, 5, 4, "Top-End Speed", Elite, Sprint),
    template(177, "Elite 60 yd Sprint ×4", 60, 4, 4, "Speed Endurance", Elite, Sprint),
    template(178, "Elite 70 yd Sprint ×3", 70, 3, 5, "Speed Endurance", Elite, Sprint),
    template(179, "Elite 80 yd Sprint ×3", 80, 3, 5, "Top-End Speed", Elite, Sprint),
    template(180, "Elite 90 yd Sprint ×2", 90, 2, 6, "Top-End Speed", Elite, Sprint),
    template(181, "Elite 100 yd Sprint ×2", 100, 2, 6, "Peak Velocity", Elite, Sprint),
    template(182, "Elite 110 yd Sprint ×2", 110, 2, 7, "Speed Endurance", Elite, Sprint),
    template(183, "Elite 120 yd Sprint ×2", 120, 2, 8, "Speed Endurance", Elite, Sprint),
    template(184, "Elite 130 yd Sprint ×2", 130, 2, 8, "Top-End Speed", Elite, Sprint),
    template(185, "Elite 150 yd Sprint ×2", 150, 2, 9, "Speed Reserve", Elite, Sprint),
    template(186, "Beginner 5-10-15 yd Pyramid", 15, 3, 2, "Acceleration Progression", Beginner, Sprint),
    template(187, "Beginner 10-15-20 yd Pyramid", 20, 3, 2, "Speed Build-Up", Beginner, Sprint),
    template(188, "Beginner 10-20-30 yd Pyramid", 30, 3, 2, "Distance Progression", Beginner, Sprint),
    template(189, "Beginner 15-25-35 yd Pyramid", 35, 3, 2, "Progressive Sprint", Beginner, Sprint),
    template(190, "Beginner 5-15-25 yd Pyramid ×2", 25, 6, 2, "Volume Pyramid", Beginner, Sprint),
    template(191, "Beginner Full 10-20-10 yd Pyramid", 20, 3, 2, "Up-Down Pyramid", Beginner, Sprint),
    template(192, "Beginner Full 5-10-15-10-5 yd Pyramid", 15, 5, 1, "Complete Pyramid", Beginner, Sprint),
    template(193, "Beginner 10-20-30-20 yd Pyramid", 30, 4, 2, "Peak & Return", Beginner, Sprint),
    template(194, "Beginner 8-16-24 yd Pyramid", 24, 3, 2, "Doubling Pattern", Beginner, Sprint),
    template(195, "Beginner 5-10-20 yd Pyramid ×2", 20, 6, 1, "Multi-Set Pyramid", Beginner, Sprint),
    template(196, "Beginner 12-18-24 yd Pyramid", 24, 3, 2, "6-Yard Increments", Beginner, Sprint),
    template(197, "Beginner 10-25-40 yd Pyramid", 40, 3, 2, "Large Jumps", Beginner, Sprint),
    template(198, "Beginner 15-20-25-20-15 yd Pyramid", 25, 5, 2, "Symmetric Pyramid", Beginner, Sprint),
    template(199, "Beginner 10-15-25-30 yd Pyramid", 30, 4, 2, "Irregular Build", Beginner, Sprint),
    template(200, "Beginner 5-20-35 yd Pyramid", 35, 3, 2, "Progressive Leaps", Beginner, Sprint),
    template(201, "Intermediate 10-20-30-40 yd Pyramid", 40, 4, 2, "Classic 4-Step Build", Intermediate, Sprint),
    template(202, "Intermediate 15-30-45 yd Pyramid", 45, 3, 3, "15-Yard Increments", Intermediate, Sprint),
    template(203, "Intermediate 10-20-30-40-50 yd Pyramid", 50, 5, 3, "5-Step Progressive", Intermediate, Sprint),
    template(204, "Intermediate 20-35-50 yd Pyramid", 50, 3, 3, "Power Build", Intermediate, Sprint),
    template(205, "Intermediate Full 20-40-60-40-20 yd Pyramid", 60, 5, 3, "Complete Speed Pyramid", Intermediate, Sprint),
    template(206, "Intermediate 25-40-55 yd Pyramid ×2", 55, 6, 3, "Double Pyramid Set", Intermediate, Sprint),
    template(207, "Intermediate 10-25-40-55 yd Pyramid", 55, 4, 3, "Varied Increments", Intermediate, Sprint),
    template(208, "Intermediate 15-35-55-35-15 yd Pyramid", 55, 5, 3, "Symmetric Speed", Intermediate, Sprint),
    template(209, "Intermediate 20-30-40-50-60 yd Pyramid", 60, 5, 3, "10-Yard Steps", Intermediate, Sprint),
    template(210, "Intermediate 12-24-36-48 yd Pyramid", 48, 4, 2, "12-Yard Pattern", Intermediate, Sprint),
    template(211, "Intermediate 30-45-60 yd Pyramid", 60, 3, 3, "Power Intervals", Intermediate, Sprint),
    template(212, "Intermediate 10-30-50-30-10 yd Pyramid", 50, 5, 3, "Peak & Descend", Intermediate, Sprint),
    template(213, "Intermediate 25-50-75 yd Pyramid", 75, 3, 3, "25-Yard Jumps", Intermediate, Sprint),
    template(214, "Intermediate 20-40-60-40 yd Pyramid", 60, 4, 3, "Peak Speed Focus", Intermediate, Sprint),
    template(215, "Intermediate 15-25-35-45-55 yd Pyramid", 55, 5, 3, "Steady Progression", Intermediate, Sprint),
    template(216, "Advanced 20-40-60-80 yd Pyramid", 80, 4, 3, "Power Distance Build", Advanced, Sprint),
    template(217, "Advanced 15-30-45-60-75 yd Pyramid", 75, 5, 3, "15-Yard Increments", Advanced, Sprint),
    template(218, "Advanced 25-50-75-100 yd Pyramid", 100, 4, 4, "Quarter Mile Build", Advanced, Sprint),
    template(219, "Advanced Full 30-60-90-60-30 yd Pyramid", 90, 5, 4, "Complete Speed Endurance", Advanced, Sprint),
    template(220, "Advanced 20-45-70-95 yd Pyramid", 95, 4, 4, "25-Yard Variable", Advanced, Sprint),
    template(221, "Advanced 40-60-80-100 yd Pyramid", 100, 4, 4, "Top-End Progression", Advanced, Sprint),
    template(222, "Advanced 10-30-50-70-90 yd Pyramid", 90, 5, 3, "20-Yard Steps", Advanced, Sprint),
    template(223, "Advanced 35-55-75-55-35 yd Pyramid", 75, 5, 3, "Symmetric Endurance", Advanced, Sprint),
    template(224, "Advanced 50-75-100 yd Pyramid ×2", 100, 6, 4, "Double Peak Sets", Advanced, Sprint),
    template(225, "Advanced 20-50-80-110 yd Pyramid", 110, 4, 4, "Extreme Range Build", Advanced, Sprint),
    template(226, "Elite 30-60-90-120 yd Pyramid", 120, 4, 5, "Elite Distance Progression", Elite, Sprint),
    template(227, "Elite 25-50-75-100-125 yd Pyramid", 125, 5, 5, "5-Step Elite Build", Elite, Sprint),
    template(228, "Elite Full 40-80-120-80-40 yd Pyramid", 120, 5, 5, "Complete Elite Challenge", Elite, Sprint),
    template(229, "Elite 50-100-150 yd Pyramid", 150, 3, 6, "Maximum Distance Build", Elite, Sprint),
    template(230, "Elite 20-40-80-120-160 yd Pyramid", 160, 5, 5, "Elite Speed Reserve", Elite, Sprint),
    template(231, "Elite 35-70-105-140 yd Pyramid", 140, 4, 5, "35-Yard Increments", Elite, Sprint),
    template(232, "Elite 60-90-120-90-60 yd Pyramid", 120, 5, 5, "Elite Symmetric", Elite, Sprint),
    template(233, "Elite 40-70-100-130 yd Pyramid", 130, 4, 5, "30-Yard Variable Steps", Elite, Sprint),
    template(234, "Elite 80-110-140 yd Pyramid ×2", 140, 6, 5, "Double Elite Sets", Elite, Sprint),
    template(235, "Elite 15-45-75-105-135 yd Pyramid", 135, 5, 5, "30-Yard Progressive", Elite, Sprint),
    template(265, "Mini Pyramid", 20, 5, 1, "Speed Development", Beginner, Sprint),
    template(266, "Basic Pyramid", 30, 7, 2, "Speed Progression", Beginner, Sprint),
    template(267, "Step Pyramid", 25, 5, 1, "Acceleration", Beginner, Sprint),
    template(268, "Quick Pyramid", 35, 7, 2, "Speed Development", Beginner, Sprint),
    template(269, "Short Pyramid", 40, 7, 2, "Max Velocity", Beginner, Sprint),
    template(270, "Micro Pyramid", 15, 5, 1, "Acceleration", Beginner, Sprint),
    template(271, "Build Pyramid", 45, 9, 2, "Speed Endurance", Beginner, Sprint),
    template(272, "Fast Pyramid", 50, 9, 3, "Speed Endurance", Beginner, Sprint),
    template(273, "Power Pyramid", 30, 9, 2, "Power Development", Beginner, Sprint),
    template(274, "Drive Pyramid", 35, 9, 2, "Drive Phase", Beginner, Sprint),
    template(275, "Classic Pyramid", 40, 7, 2, "Progressive Distance", Intermediate, Sprint),
    template(276, "Extended Pyramid", 60, 11, 3, "Speed Endurance", Intermediate, Sprint),
    template(277, "Double Pyramid", 50, 13, 3, "Endurance Speed", Intermediate, Sprint),
    template(278, "Peak Pyramid", 70, 13, 4, "Peak Speed", Intermediate, Sprint),
    template(279, "Wave Pyramid", 55, 11, 3, "Speed Waves", Intermediate, Sprint),
    template(280, "Climb Pyramid", 65, 11, 3, "Progressive Build", Intermediate, Sprint),
    template(281, "Flow Pyramid", 45, 9, 2, "Rhythm Speed", Intermediate, Sprint),
    template(282, "Tempo Pyramid", 75, 13, 4, "Tempo Endurance", Intermediate, Sprint),
    template(283, "Stride Pyramid", 80, 15, 4, "Stride Endurance", Intermediate, Sprint),
    template(284, "Rhythm Pyramid", 55, 9, 3, "Rhythm Development", Intermediate, Sprint),
    template(285, "Endurance Pyramid", 100, 19, 5, "Speed Endurance", Advanced, Sprint),
    template(286, "Distance Pyramid", 90, 17, 5, "Distance Speed", Advanced, Sprint),
    template(287, "Long Pyramid", 85, 15, 4, "Long Speed", Advanced, Sprint),
    template(288, "Volume Pyramid", 95, 17, 5, "Volume Training", Advanced, Sprint),
    template(289, "Capacity Pyramid", 80, 13, 4, "Speed Capacity", Advanced, Sprint),
    template(290, "Power Endurance Pyramid", 75, 11, 4, "Power Endurance", Advanced, Sprint),
    template(291, "Max Pyramid", 100, 21, 5, "Maximum Endurance", Advanced, Sprint),
    template(292, "Elite Pyramid", 90, 19, 5, "Elite Development", Advanced, Sprint),
    template(293, "Challenge Pyramid", 85, 17, 4, "Challenge Training", Advanced, Sprint),
    template(294, "Ultimate Pyramid", 95, 19, 5, "Ultimate Speed", Advanced, Sprint),
    template(295, "Master Pyramid", 100, 21, 5, "Master Level", Elite, Sprint),
    template(296, "Champion Pyramid", 95, 19, 5, "Championship Training", Elite, Sprint),
    template(297, "Pro Pyramid", 90, 17, 5, "Professional Level", Elite, Sprint),
    template(298, "Olympic Pyramid", 100, 23, 5, "Olympic Preparation", Elite, Sprint),
    template(299, "World Class Pyramid", 95, 21, 5, "World Class Speed", Elite, Sprint),
    template(300, "Record Pyramid", 90, 19, 5, "Record Breaking", Elite, Sprint),
    template(301, "Legendary Pyramid", 100, 25, 5, "Legendary Performance", Elite, Sprint),
    template(302, "Supreme Pyramid", 85, 15, 4, "Supreme Speed", Elite, Sprint),
    template(303, "Apex Pyramid", 95, 17, 5, "Apex Performance", Elite, Sprint),
    template(304, "Peak Performance Pyramid", 100, 27, 5, "Peak Performance", Elite, Sprint),
    template(305, "Fibonacci Pyramid", 55, 9, 3, "Mathematical Progression", Intermediate, Sprint),
    template(306, "Golden Pyramid", 62, 11, 3, "Golden Ratio", Intermediate, Sprint),
    template(307, "Prime Pyramid", 47, 9, 141, "Prime Numbers", Intermediate, Sprint),
    template(308, "Odd Pyramid", 45, 9, 2, "Odd Increments", Intermediate, Sprint),
    template(309, "Even Pyramid", 60, 11, 3, "Even Increments", Intermediate, Sprint),
    template(310, "Mixed Pyramid", 67, 13, 3, "Mixed Increments", Advanced, Sprint),
    template(311, "Random Pyramid", 73, 11, 4, "Random Progression", Advanced, Sprint),
    template(312, "Chaos Pyramid", 58, 13, 3, "Chaos Training", Advanced, Sprint),
    template(313, "Custom Pyramid", 85, 15, 4, "Custom Pattern", Advanced, Sprint),
    template(314, "Adaptive Pyramid", 70, 13, 4, "Adaptive Training", Advanced, Sprint),
    template(315, "Micro Speed Pyramid", 25, 7, 1, "Micro Progression", Beginner, Sprint),
    template(316, "Fine Pyramid", 35, 9, 2, "Fine Tuning", Beginner, Sprint),
    template(317, "Precision Pyramid", 45, 11, 2, "Precision Speed", Intermediate, Sprint),
    template(318, "Detail Pyramid", 55, 13, 3, "Detail Work", Intermediate, Sprint),
    template(319, "Refined Pyramid", 65, 15, 3, "Refined Speed", Advanced, Sprint),
    template(320, "Macro Pyramid", 80, 9, 4, "Macro Progression", Advanced, Sprint),
    template(321, "Big Step Pyramid", 100, 11, 5, "Big Steps", Advanced, Sprint),
    template(322, "Giant Pyramid", 90, 9, 5, "Giant Steps", Elite, Sprint),
    template(323, "Massive Pyramid", 100, 13, 5, "Massive Progression", Elite, Sprint),
    template(324, "Steep Pyramid", 60, 9, 3, "Steep Climb", Intermediate, Sprint),
    template(325, "Gentle Pyramid", 50, 13, 3, "Gentle Build", Intermediate, Sprint),
    template(326, "Skewed Pyramid", 70, 11, 4, "Asymmetric Pattern", Advanced, Sprint),
    template(327, "Lopsided Pyramid", 65, 13, 3, "Uneven Build", Advanced, Sprint),
    template(328, "Twin Peak Pyramid", 60, 15, 3, "Double Peak", Advanced, Sprint),
    template(329, "Double Summit Pyramid", 70, 17, 4, "Two Summits", Advanced, Sprint),
    template(330, "Dual Apex Pyramid", 80, 19, 4, "Dual Peaks", Elite, Sprint),
    template(331, "Triple Peak Pyramid", 50, 21, 3, "Triple Peak", Elite, Sprint),
    template(332, "Three Summit Pyramid", 60, 23, 3, "Three Summits", Elite, Sprint),
    template(333, "Plateau Pyramid", 40, 11, 2, "Plateau Training", Intermediate, Sprint),
    template(334, "Mesa Pyramid", 60, 15, 3, "Mesa Pattern", Advanced, Sprint),
    template(335, "Table Pyramid", 80, 17, 4, "Table Top", Advanced, Sprint),
    template(336, "Wave Pattern Pyramid", 70, 19, 4, "Wave Pattern", Elite, Sprint),
    template(337, "Oscillating Pyramid", 60, 17, 3, "Oscillation", Advanced, Sprint),
    template(338, "Ripple Pyramid", 50, 15, 3, "Ripple Effect", Advanced, Sprint),
    template(339, "Acceleration Pyramid", 30, 9, 2, "Acceleration Focus", Beginner, Sprint),
    template(340, "Max Velocity Pyramid", 50, 11, 3, "Max Velocity", Intermediate, Sprint),
    template(341, "Speed Maintenance Pyramid", 70, 13, 4, "Speed Maintenance", Advanced, Sprint),
    template(342, "Deceleration Pyramid", 90, 15, 5, "Deceleration Control", Advanced, Sprint),
    template(343, "Short Endurance Pyramid", 60, 13, 2, "Short Endurance", Intermediate, Sprint),
    template(344, "Medium Endurance Pyramid", 80, 15, 3, "Medium Endurance", Advanced, Sprint),
    template(345, "Long Endurance Pyramid", 100, 17, 3, "Long Endurance", Elite, Sprint),
    template(346, "Recovery Pyramid", 40, 9, 3, "Active Recovery", Beginner, Sprint),
    template(347, "Easy Pyramid", 30, 7, 3, "Easy Pace", Beginner, Sprint),
    template(348, "Gentle Build Pyramid", 50, 11, 3, "Gentle Build", Intermediate, Sprint),
    template(349, "Explosive Pyramid", 35, 7, 4, "Explosive Power", Intermediate, Sprint),
    template(350, "Power Burst Pyramid", 45, 9, 5, "Power Bursts", Advanced, Sprint),
    template(351, "Dynamic Pyramid", 55, 11, 6, "Dynamic Power", Advanced, Sprint),
    template(352, "Form Pyramid", 40, 9, 2, "Form Development", Beginner, Sprint),
    template(353, "Technique Pyramid", 50, 11, 3, "Technique Work", Intermediate, Sprint),
    template(354, "Mechanics Pyramid", 60, 13, 3, "Mechanics Focus", Advanced, Sprint),
    template(355, "Base Building Pyramid", 70, 15, 2, "Base Building", Intermediate, Sprint),
    template(356, "Competition Prep Pyramid", 50, 9, 5, "Competition Prep", Advanced, Sprint),
    template(357, "Peak Season Pyramid", 40, 7, 6, "Peak Performance", Elite, Sprint),
    template(358, "Off Season Pyramid", 80, 17, 3, "Off Season", Intermediate, Sprint),
    template(359, "Wind Training Pyramid", 60, 11, 3, "Wind Resistance", Advanced, Sprint),
    template(360, "Heat Adaptation Pyramid", 50, 9, 4, "Heat Training", Intermediate, Sprint),
    template(361, "Cold Weather Pyramid", 40, 11, 2, "Cold Adaptation", Intermediate, Sprint),
    template(362, "Mental Toughness Pyramid", 90, 19, 3, "Mental Strength", Elite, Sprint),
    template(363, "Breakthrough Pyramid", 100, 21, 3, "Performance Breakthrough", Elite, Sprint),
    template(364, "Ultimate Challenge Pyramid", 100, 25, 4, "Ultimate Challenge", Elite, Sprint),
];

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn sprint(id: u32, tier: Tier) -> SessionTemplate {
        template(id, "Test", 20, 4, 2, "Acceleration", tier, Category::Sprint)
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        assert!(Catalog::new(CATALOG_VERSION, TEMPLATES.to_vec()).is_ok());
    }

    #[test]
    fn test_builtin_catalog_sorted() {
        let ids = TEMPLATES.iter().map(|t| t.id).collect::<Vec<_>>();
        let mut sorted_ids = ids.clone();
        sorted_ids.sort();
        assert_eq!(ids, sorted_ids);
    }

    #[test]
    fn test_builtin_catalog_every_tier_has_templates() {
        let catalog = Catalog::builtin();
        let counts = Tier::iter()
            .map(|tier| (*tier, catalog.by_tier(*tier).len()))
            .collect::<BTreeMap<_, _>>();
        assert!(counts.values().all(|c| *c > 0), "{counts:?}");
    }

    #[rstest]
    #[case(Tier::Beginner, 72)]
    #[case(Tier::Intermediate, 73)]
    #[case(Tier::Advanced, 74)]
    #[case(Tier::Elite, 119)]
    fn test_builtin_catalog_time_trial(#[case] tier: Tier, #[case] expected: u32) {
        assert_eq!(
            Catalog::builtin().time_trial(tier).map(|t| t.id),
            Some(TemplateID(expected))
        );
    }

    #[test]
    fn test_catalog_new_sorts_templates() {
        let catalog =
            Catalog::new(2, vec![sprint(3, Tier::Elite), sprint(1, Tier::Beginner)]).unwrap();
        assert_eq!(
            catalog.templates().iter().map(|t| *t.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(catalog.version(), 2);
    }

    #[test]
    fn test_catalog_new_duplicate_id() {
        assert_eq!(
            Catalog::new(1, vec![sprint(1, Tier::Beginner), sprint(1, Tier::Elite)]),
            Err(CatalogError::DuplicateID(TemplateID(1)))
        );
    }

    #[rstest]
    #[case(0, 4)]
    #[case(20, 0)]
    fn test_catalog_new_invalid_template(#[case] distance: u32, #[case] reps: u32) {
        let mut t = sprint(5, Tier::Beginner);
        t.distance = distance;
        t.reps = reps;
        assert_eq!(
            Catalog::new(1, vec![t]),
            Err(CatalogError::InvalidTemplate(TemplateID(5)))
        );
    }

    #[test]
    fn test_catalog_get() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get(TemplateID(8)).map(|t| t.name), Some("40 yd Time Trial"));
        assert_eq!(catalog.get(TemplateID(0)), None);
        assert_eq!(catalog.get(TemplateID(100_000)), None);
    }

    #[test]
    fn test_catalog_by_tier_and_category() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog
                .by_tier_and_category(Tier::Beginner, Category::Benchmark)
                .iter()
                .map(|t| *t.id)
                .collect::<Vec<_>>(),
            vec![8, 72]
        );
        assert_eq!(
            catalog
                .by_tier_and_category(Tier::Intermediate, Category::ActiveRecovery)
                .iter()
                .map(|t| *t.id)
                .collect::<Vec<_>>(),
            vec![54]
        );
    }

    #[test]
    fn test_template_rest_in_seconds() {
        assert_eq!(Catalog::builtin().get(TemplateID(3)).map(|t| t.rest), Some(120));
    }

    #[rstest]
    #[case("Sprint", Ok(Category::Sprint))]
    #[case("active recovery", Ok(Category::ActiveRecovery))]
    #[case("Rest", Ok(Category::Rest))]
    #[case("Nap", Err(CategoryError::Unknown("Nap".to_string())))]
    fn test_category_try_from(#[case] value: &str, #[case] expected: Result<Category, CategoryError>) {
        assert_eq!(Category::try_from(value), expected);
    }
}
