//! Roadmap Builder: expands the top career match into a fixed four-phase plan.
//!
//! Shape never varies: same titles, durations and statuses for every career.
//! Only descriptions and resource titles are templated from the key skills.

use crate::assessment::models::{
    CareerArchetype, CareerMatch, LearningResource, Milestone, MilestoneStatus, Roadmap,
};

pub const ROADMAP_DURATION: &str = "6 months";

const YOUTUBE: (&str, &str) = ("YouTube", "https://www.youtube.com");
const COURSERA: (&str, &str) = ("Coursera", "https://www.coursera.org");
const UDEMY: (&str, &str) = ("Udemy", "https://www.udemy.com");
const LINKEDIN_LEARNING: (&str, &str) = ("LinkedIn Learning", "https://www.linkedin.com/learning");
const GITHUB: (&str, &str) = ("GitHub", "https://github.com");

fn resource(title: String, (platform, link): (&str, &str)) -> LearningResource {
    LearningResource {
        title,
        platform: platform.to_string(),
        link: link.to_string(),
    }
}

fn milestone(
    title: &str,
    description: String,
    duration: &str,
    status: MilestoneStatus,
    resources: Vec<LearningResource>,
) -> Milestone {
    Milestone {
        title: title.to_string(),
        description,
        duration: duration.to_string(),
        status,
        resources,
    }
}

/// Builds the learning roadmap for the winning match.
pub fn build_roadmap(top_match: &CareerMatch) -> Roadmap {
    build_roadmap_for(&top_match.archetype)
}

/// Builds a roadmap straight from an archetype; only title, field and key
/// skills are read.
pub fn build_roadmap_for(archetype: &CareerArchetype) -> Roadmap {
    let skills = &archetype.key_skills;
    let primary = skills
        .first()
        .map(String::as_str)
        .unwrap_or(archetype.title.as_str());
    let core = skills
        .iter()
        .take(2)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" and ");
    let core = if core.is_empty() { primary.to_string() } else { core };
    let advanced = if skills.len() > 2 {
        skills[2..].join(", ")
    } else {
        primary.to_string()
    };
    let field = archetype.field.name();
    let title = &archetype.title;

    let milestones = vec![
        // Status reflects a just-completed assessment
        milestone(
            "Foundation Building",
            format!("Learn the fundamentals of {primary} and build a working understanding of {field}."),
            "6 weeks",
            MilestoneStatus::InProgress,
            vec![
                resource(format!("{primary} for Beginners"), YOUTUBE),
                resource(format!("Introduction to {field}"), COURSERA),
            ],
        ),
        milestone(
            "Core Skills Development",
            format!("Build practical proficiency in {core} through guided exercises."),
            "10 weeks",
            MilestoneStatus::Pending,
            vec![
                resource(format!("Complete {primary} Bootcamp"), UDEMY),
                resource(format!("{core} Essential Training"), LINKEDIN_LEARNING),
            ],
        ),
        milestone(
            "Advanced Topics",
            format!("Go deeper into {advanced} and the practices used by working professionals."),
            "8 weeks",
            MilestoneStatus::Pending,
            vec![
                resource(format!("Advanced {advanced} Specialization"), COURSERA),
                resource(format!("{advanced} Deep Dive"), YOUTUBE),
            ],
        ),
        milestone(
            "Real-world Projects",
            format!("Apply your skills to portfolio projects that mirror real {title} work."),
            "6 weeks",
            MilestoneStatus::Pending,
            vec![
                resource(format!("{title} Project Ideas"), GITHUB),
                resource(format!("Building a {title} Portfolio"), LINKEDIN_LEARNING),
            ],
        ),
    ];

    Roadmap {
        title: format!("{title} Learning Path"),
        duration: ROADMAP_DURATION.to_string(),
        milestones,
    }
}
