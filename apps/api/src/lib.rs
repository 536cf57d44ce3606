//! Career assessment service: turns questionnaire answers into ranked
//! career matches and a learning roadmap.

pub mod assessment;
pub mod config;
pub mod errors;
pub mod routes;
pub mod state;
