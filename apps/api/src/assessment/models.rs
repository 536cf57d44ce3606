//! Shared data models for the assessment pipeline.
//!
//! Everything here is plain data: the catalog, parser, engine and builder
//! all operate on these types and never keep references to them.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::assessment::answers::DEFAULT_RATING;

// ────────────────────────────────────────────────────────────────────────────
// Domains and skill categories
// ────────────────────────────────────────────────────────────────────────────

/// One of the six fixed career domains. Declaration order is significant:
/// it breaks ties when picking a default field interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Domain {
    #[serde(rename = "Technology & Software")]
    TechnologySoftware,
    #[serde(rename = "Healthcare & Medicine")]
    HealthcareMedicine,
    #[serde(rename = "Business & Finance")]
    BusinessFinance,
    #[serde(rename = "Arts & Design")]
    ArtsDesign,
    #[serde(rename = "Engineering")]
    Engineering,
    #[serde(rename = "Science & Research")]
    ScienceResearch,
}

impl Domain {
    pub const ALL: [Domain; 6] = [
        Domain::TechnologySoftware,
        Domain::HealthcareMedicine,
        Domain::BusinessFinance,
        Domain::ArtsDesign,
        Domain::Engineering,
        Domain::ScienceResearch,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Domain::TechnologySoftware => "Technology & Software",
            Domain::HealthcareMedicine => "Healthcare & Medicine",
            Domain::BusinessFinance => "Business & Finance",
            Domain::ArtsDesign => "Arts & Design",
            Domain::Engineering => "Engineering",
            Domain::ScienceResearch => "Science & Research",
        }
    }

    /// Case-insensitive lookup by display name, ignoring surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Domain> {
        let name = name.trim();
        Domain::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Skill dimensions a career can demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Technical,
    Communication,
    Analytical,
    Creativity,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Technical,
        SkillCategory::Communication,
        SkillCategory::Analytical,
        SkillCategory::Creativity,
    ];
}

// ────────────────────────────────────────────────────────────────────────────
// Profile
// ────────────────────────────────────────────────────────────────────────────

/// Normalized view of a questionnaire. Every field is always populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub education_level: String,
    pub field_interest: Domain,
    pub technical_skill: u8,
    pub communication_skill: u8,
    pub analytical_skill: u8,
    pub creativity_skill: u8,
    pub motivation: String,
    pub work_environment: String,
    pub work_style: String,
    pub salary_expectation: String,
    /// Always holds all six domains.
    pub domain_interest_scores: BTreeMap<Domain, u8>,
}

impl Profile {
    pub fn skill(&self, category: SkillCategory) -> u8 {
        match category {
            SkillCategory::Technical => self.technical_skill,
            SkillCategory::Communication => self.communication_skill,
            SkillCategory::Analytical => self.analytical_skill,
            SkillCategory::Creativity => self.creativity_skill,
        }
    }

    pub fn domain_interest(&self, domain: Domain) -> u8 {
        self.domain_interest_scores
            .get(&domain)
            .copied()
            .unwrap_or(DEFAULT_RATING)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Catalog and match types
// ────────────────────────────────────────────────────────────────────────────

/// A predefined career used as a scoring target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerArchetype {
    pub title: String,
    pub field: Domain,
    pub description: String,
    pub avg_salary: String,
    pub growth_rate: String,
    /// Never empty.
    pub key_skills: Vec<String>,
    pub requires_high: Vec<SkillCategory>,
}

/// Contribution of each scoring factor, before rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub domain: f64,
    pub field_bonus: f64,
    pub skills: f64,
    pub threshold_bonus: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.domain + self.field_bonus + self.skills + self.threshold_bonus
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerMatch {
    #[serde(flatten)]
    pub archetype: CareerArchetype,
    /// Raw relevance, up to 115. Ranking uses this value.
    pub match_score: u32,
    /// `match_score` capped at 100 for display.
    pub match_percent: u32,
    pub breakdown: ScoreBreakdown,
}

// ────────────────────────────────────────────────────────────────────────────
// Roadmap types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MilestoneStatus {
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningResource {
    pub title: String,
    pub platform: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub status: MilestoneStatus,
    pub resources: Vec<LearningResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roadmap {
    pub title: String,
    pub duration: String,
    pub milestones: Vec<Milestone>,
}

/// Full result of one assessment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub profile: Profile,
    pub matches: Vec<CareerMatch>,
    /// `None` only when the catalog is empty.
    pub roadmap: Option<Roadmap>,
}
