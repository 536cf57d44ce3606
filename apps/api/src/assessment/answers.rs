//! Answer Parser: normalizes a raw questionnaire into a `Profile`.
//!
//! Question ids:
//! - "1" education level, "2" field of interest
//! - "3" technical, "4" communication, "7" analytical, "9" creativity (1–5 ratings)
//! - "5" motivation, "6" work environment, "8" work style, "10" salary expectation
//! - "11".."16" interest in each domain, in `Domain::ALL` order (1–5 ratings)
//!
//! Parsing never fails. Every field has a fallback, and every rating goes
//! through `rating_or_default` so an unusable value can never reach scoring.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::assessment::models::{Domain, Profile};

/// A single questionnaire answer. On the wire a JSON number is a rating and
/// a JSON string is free text. Anything else (null, bool, array, object) is
/// kept as `Other` and treated as unanswered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Rating(f64),
    Text(String),
    Other(Value),
}

/// Question id → answer. Ids may be missing.
pub type AnswerSet = BTreeMap<String, Answer>;

pub const DEFAULT_RATING: u8 = 3;
pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

/// First question id of the per-domain interest block.
const DOMAIN_INTEREST_BASE_ID: usize = 11;
/// Highest question id the questionnaire defines.
pub const LAST_QUESTION_ID: usize = 16;

const DEFAULT_EDUCATION: &str = "Undergraduate";
const DEFAULT_MOTIVATION: &str = "Career Growth & Learning";
const DEFAULT_WORK_ENVIRONMENT: &str = "Hybrid (Mix of both)";
const DEFAULT_WORK_STYLE: &str = "Both Equally (Adaptable)";
const DEFAULT_SALARY: &str = "8-12 LPA";

/// Reads a 1–5 rating. Only whole values count, so `4`, `4.0` and `"4.0"`
/// are all 4. Absent, null, fractional, non-numeric and out-of-range answers
/// resolve to `DEFAULT_RATING`.
pub fn rating_or_default(answer: Option<&Answer>) -> u8 {
    let value = match answer {
        Some(Answer::Rating(v)) => Some(*v),
        Some(Answer::Text(s)) => s.trim().parse::<f64>().ok(),
        Some(Answer::Other(_)) | None => None,
    };

    match value {
        Some(v) if v.fract() == 0.0 && (MIN_RATING..=MAX_RATING).contains(&v) => v as u8,
        _ => DEFAULT_RATING,
    }
}

/// Reads a free-text answer; blank text and ratings fall back to `default`.
fn text_or_default(answer: Option<&Answer>, default: &str) -> String {
    match answer {
        Some(Answer::Text(s)) if !s.trim().is_empty() => s.clone(),
        _ => default.to_string(),
    }
}

/// Interest rating for every domain, keyed by domain.
pub fn domain_interest_scores(answers: &AnswerSet) -> BTreeMap<Domain, u8> {
    Domain::ALL
        .into_iter()
        .enumerate()
        .map(|(index, domain)| {
            let id = (DOMAIN_INTEREST_BASE_ID + index).to_string();
            (domain, rating_or_default(answers.get(&id)))
        })
        .collect()
}

/// Domain with the highest interest rating. Ties go to the earliest domain
/// in `Domain::ALL`.
fn strongest_domain(scores: &BTreeMap<Domain, u8>) -> Domain {
    let mut best = Domain::ALL[0];
    let mut best_score = 0u8;
    for domain in Domain::ALL {
        let score = scores.get(&domain).copied().unwrap_or(DEFAULT_RATING);
        if score > best_score {
            best = domain;
            best_score = score;
        }
    }
    best
}

/// Builds a `Profile` from raw answers.
pub fn parse_answers(answers: &AnswerSet) -> Profile {
    let domain_interest_scores = domain_interest_scores(answers);

    let field_interest = match answers.get("2") {
        Some(Answer::Text(s)) => Domain::from_name(s),
        _ => None,
    }
    .unwrap_or_else(|| strongest_domain(&domain_interest_scores));

    Profile {
        education_level: text_or_default(answers.get("1"), DEFAULT_EDUCATION),
        field_interest,
        technical_skill: rating_or_default(answers.get("3")),
        communication_skill: rating_or_default(answers.get("4")),
        analytical_skill: rating_or_default(answers.get("7")),
        creativity_skill: rating_or_default(answers.get("9")),
        motivation: text_or_default(answers.get("5"), DEFAULT_MOTIVATION),
        work_environment: text_or_default(answers.get("6"), DEFAULT_WORK_ENVIRONMENT),
        work_style: text_or_default(answers.get("8"), DEFAULT_WORK_STYLE),
        salary_expectation: text_or_default(answers.get("10"), DEFAULT_SALARY),
        domain_interest_scores,
    }
}

/// Returns question ids that are not part of the questionnaire ("1".."16").
pub fn unknown_question_ids(answers: &AnswerSet) -> Vec<String> {
    answers
        .keys()
        .filter(|id| {
            !matches!(id.parse::<usize>(), Ok(n) if (1..=LAST_QUESTION_ID).contains(&n))
        })
        .cloned()
        .collect()
}
