// Career assessment core: answer parsing, catalog, scoring, roadmap.
// Everything except `handlers` is pure and synchronous.

pub mod answers;
pub mod catalog;
pub mod evaluator;
pub mod handlers;
pub mod models;
pub mod roadmap;
pub mod scoring;

pub use answers::{parse_answers, Answer, AnswerSet};
pub use catalog::CareerCatalog;
pub use evaluator::evaluate;
pub use scoring::ScoringEngine;
