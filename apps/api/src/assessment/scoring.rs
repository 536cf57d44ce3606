//! Scoring Engine: ranks catalog archetypes against a profile.
//!
//! Pure and deterministic: same profile and catalog, same output, every call.
//!
//! Per archetype:
//! 1. domain     = interest[archetype.field] / 5 × 35
//! 2. field      = +10 when the profile's field interest is the archetype's field
//! 3. skills     = Σ over the four categories of max(0, 1 − |skill − required| / 5) × 15
//! 4. threshold  = +10 when every skill meets its required level
//! 5. match_score = round(sum); not clamped, theoretical max 115

use crate::assessment::catalog::{required_level, CareerCatalog};
use crate::assessment::models::{CareerArchetype, CareerMatch, Profile, ScoreBreakdown, SkillCategory};

// ────────────────────────────────────────────────────────────────────────────
// Weights
// ────────────────────────────────────────────────────────────────────────────

const DOMAIN_WEIGHT: f64 = 35.0;
const FIELD_BONUS: f64 = 10.0;
const CATEGORY_WEIGHT: f64 = 15.0;
const THRESHOLD_BONUS: f64 = 10.0;
const RATING_SCALE: f64 = 5.0;

/// Number of matches returned by `rank`.
pub const TOP_MATCHES: usize = 5;
/// Upper bound of `CareerMatch::match_percent`.
pub const DISPLAY_CAP: u32 = 100;

// ────────────────────────────────────────────────────────────────────────────
// Engine
// ────────────────────────────────────────────────────────────────────────────

/// Scores profiles against an injected, read-only catalog.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine<'a> {
    catalog: &'a CareerCatalog,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(catalog: &'a CareerCatalog) -> Self {
        Self { catalog }
    }

    /// Top `min(5, catalog size)` matches, highest score first. Equal scores
    /// keep catalog order.
    pub fn rank(&self, profile: &Profile) -> Vec<CareerMatch> {
        let mut matches: Vec<CareerMatch> = self
            .catalog
            .all()
            .iter()
            .map(|archetype| score_archetype(profile, archetype))
            .collect();

        // sort_by is stable
        matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        matches.truncate(TOP_MATCHES);
        matches
    }
}

/// Full score record for one archetype.
pub fn score_archetype(profile: &Profile, archetype: &CareerArchetype) -> CareerMatch {
    let breakdown = compute_breakdown(profile, archetype);
    let match_score = breakdown.total().round() as u32;

    CareerMatch {
        archetype: archetype.clone(),
        match_score,
        match_percent: match_score.min(DISPLAY_CAP),
        breakdown,
    }
}

pub fn compute_breakdown(profile: &Profile, archetype: &CareerArchetype) -> ScoreBreakdown {
    let interest = f64::from(profile.domain_interest(archetype.field));
    let domain = interest * DOMAIN_WEIGHT / RATING_SCALE;

    let field_bonus = if profile.field_interest == archetype.field {
        FIELD_BONUS
    } else {
        0.0
    };

    let mut skills = 0.0;
    let mut meets_all = true;
    for category in SkillCategory::ALL {
        let have = profile.skill(category);
        let required = required_level(archetype, category);
        skills += category_component(have, required);
        if have < required {
            meets_all = false;
        }
    }

    let threshold_bonus = if meets_all { THRESHOLD_BONUS } else { 0.0 };

    ScoreBreakdown {
        domain,
        field_bonus,
        skills,
        threshold_bonus,
    }
}

/// Closeness of a skill to its required level, worth up to 15.
pub fn category_component(have: u8, required: u8) -> f64 {
    let delta = f64::from(have.abs_diff(required));
    // max(0, 1 - delta/5) * 15, ordered to stay exact on whole ratings
    (RATING_SCALE - delta).max(0.0) * CATEGORY_WEIGHT / RATING_SCALE
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
