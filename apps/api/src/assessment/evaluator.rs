//! Assessment pipeline: answers → profile → ranked matches → roadmap.
//!
//! No I/O. The HTTP layer and any client-side fallback call `evaluate` so the
//! scoring rules live in exactly one place.

use tracing::debug;

use crate::assessment::answers::{parse_answers, AnswerSet};
use crate::assessment::catalog::CareerCatalog;
use crate::assessment::models::AssessmentReport;
use crate::assessment::roadmap::build_roadmap;
use crate::assessment::scoring::ScoringEngine;

pub fn evaluate(answers: &AnswerSet, catalog: &CareerCatalog) -> AssessmentReport {
    let profile = parse_answers(answers);
    let matches = ScoringEngine::new(catalog).rank(&profile);
    let roadmap = matches.first().map(build_roadmap);

    match matches.first() {
        Some(top) => debug!(
            answered = answers.len(),
            top = %top.archetype.title,
            score = top.match_score,
            "Assessment evaluated"
        ),
        None => debug!(answered = answers.len(), "Assessment evaluated against empty catalog"),
    }

    AssessmentReport {
        profile,
        matches,
        roadmap,
    }
}
