//! Career Catalog: the fixed set of career archetypes scored against a profile.
//!
//! Built once at startup and shared read-only (`Arc<CareerCatalog>` in `AppState`).
//! Entries are private; callers only ever see shared references.

use crate::assessment::models::{CareerArchetype, Domain, SkillCategory};

/// Level a role demands in a category it lists as `requires_high`.
pub const HIGH_REQUIREMENT: u8 = 4;
/// Level a role demands in every other category.
pub const BASE_REQUIREMENT: u8 = 2;

#[derive(Debug, Clone)]
pub struct CareerCatalog {
    archetypes: Vec<CareerArchetype>,
}

impl CareerCatalog {
    /// Catalog from an explicit list. Declaration order is kept and breaks
    /// ranking ties.
    pub fn new(archetypes: Vec<CareerArchetype>) -> Self {
        Self { archetypes }
    }

    pub fn all(&self) -> &[CareerArchetype] {
        &self.archetypes
    }

    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }

    /// Case-insensitive lookup by title.
    pub fn find(&self, title: &str) -> Option<&CareerArchetype> {
        let title = title.trim();
        self.archetypes
            .iter()
            .find(|a| a.title.eq_ignore_ascii_case(title))
    }
}

impl Default for CareerCatalog {
    fn default() -> Self {
        Self::new(default_archetypes())
    }
}

/// Skill level `archetype` demands in `category`: a two-step function,
/// `HIGH_REQUIREMENT` if listed in `requires_high`, else `BASE_REQUIREMENT`.
pub fn required_level(archetype: &CareerArchetype, category: SkillCategory) -> u8 {
    if archetype.requires_high.contains(&category) {
        HIGH_REQUIREMENT
    } else {
        BASE_REQUIREMENT
    }
}

fn archetype(
    title: &str,
    field: Domain,
    description: &str,
    avg_salary: &str,
    growth_rate: &str,
    key_skills: &[&str],
    requires_high: &[SkillCategory],
) -> CareerArchetype {
    CareerArchetype {
        title: title.to_string(),
        field,
        description: description.to_string(),
        avg_salary: avg_salary.to_string(),
        growth_rate: growth_rate.to_string(),
        key_skills: key_skills.iter().map(|s| s.to_string()).collect(),
        requires_high: requires_high.to_vec(),
    }
}

fn default_archetypes() -> Vec<CareerArchetype> {
    use SkillCategory::{Analytical, Communication, Creativity, Technical};

    vec![
        archetype(
            "Software Engineer",
            Domain::TechnologySoftware,
            "Design, build and maintain software systems and applications.",
            "8-25 LPA",
            "22%",
            &["Python/Java", "DSA", "System Design", "Git"],
            &[Technical, Analytical],
        ),
        archetype(
            "Data Scientist",
            Domain::TechnologySoftware,
            "Turn data into insight with statistics and machine learning.",
            "10-30 LPA",
            "35%",
            &["Python", "Machine Learning", "Statistics", "SQL"],
            &[Technical, Analytical],
        ),
        archetype(
            "Medical Professional",
            Domain::HealthcareMedicine,
            "Diagnose and treat patients across clinical settings.",
            "6-20 LPA",
            "15%",
            &["Clinical Knowledge", "Patient Care", "Diagnostics"],
            &[Analytical, Communication],
        ),
        archetype(
            "Product Manager",
            Domain::BusinessFinance,
            "Own product strategy and steer cross-functional teams to ship it.",
            "15-35 LPA",
            "18%",
            &["Product Strategy", "User Research", "Roadmapping", "Stakeholder Management"],
            &[Communication, Analytical, Creativity],
        ),
        archetype(
            "Financial Analyst",
            Domain::BusinessFinance,
            "Evaluate investments and build financial models to guide decisions.",
            "6-18 LPA",
            "11%",
            &["Financial Modeling", "Excel", "Accounting", "Valuation"],
            &[Analytical],
        ),
        archetype(
            "UX/UI Designer",
            Domain::ArtsDesign,
            "Craft intuitive, attractive interfaces grounded in user research.",
            "6-20 LPA",
            "16%",
            &["Figma", "User Research", "Prototyping", "Visual Design"],
            &[Creativity, Communication],
        ),
        archetype(
            "Mechanical Engineer",
            Domain::Engineering,
            "Design and analyze machines, thermal systems and manufacturing processes.",
            "5-15 LPA",
            "7%",
            &["CAD", "Thermodynamics", "Materials Science", "MATLAB"],
            &[Technical, Analytical],
        ),
        archetype(
            "Civil Engineer",
            Domain::Engineering,
            "Plan and supervise infrastructure such as buildings, roads and bridges.",
            "4-12 LPA",
            "8%",
            &["AutoCAD", "Structural Analysis", "Project Management"],
            &[Technical, Communication],
        ),
        archetype(
            "Research Scientist",
            Domain::ScienceResearch,
            "Run experiments and publish findings that push a field forward.",
            "6-20 LPA",
            "12%",
            &["Research Methods", "Data Analysis", "Scientific Writing"],
            &[Analytical],
        ),
        archetype(
            "Biotechnologist",
            Domain::ScienceResearch,
            "Apply biology and lab technology to medicine, agriculture and industry.",
            "5-15 LPA",
            "14%",
            &["Molecular Biology", "Lab Techniques", "Bioinformatics"],
            &[Analytical, Technical],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_catalog_has_ten_archetypes() {
        assert_eq!(CareerCatalog::default().len(), 10);
    }

    #[test]
    fn test_every_domain_is_covered() {
        let catalog = CareerCatalog::default();
        for domain in Domain::ALL {
            let count = catalog.all().iter().filter(|a| a.field == domain).count();
            assert!(count >= 1, "{domain} has no archetype");
        }
        for domain in [
            Domain::TechnologySoftware,
            Domain::Engineering,
            Domain::ScienceResearch,
        ] {
            let count = catalog.all().iter().filter(|a| a.field == domain).count();
            assert_eq!(count, 2, "{domain} should have two archetypes");
        }
    }

    #[test]
    fn test_every_archetype_has_key_skills() {
        for a in CareerCatalog::default().all() {
            assert!(!a.key_skills.is_empty(), "{} has no key skills", a.title);
        }
    }

    #[test]
    fn test_titles_are_unique() {
        let catalog = CareerCatalog::default();
        let titles: HashSet<_> = catalog.all().iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles.len(), catalog.len());
    }

    #[test]
    fn test_required_level_is_two_valued() {
        let catalog = CareerCatalog::default();
        let se = catalog.find("Software Engineer").unwrap();
        assert_eq!(required_level(se, SkillCategory::Technical), 4);
        assert_eq!(required_level(se, SkillCategory::Analytical), 4);
        assert_eq!(required_level(se, SkillCategory::Communication), 2);
        assert_eq!(required_level(se, SkillCategory::Creativity), 2);

        for a in catalog.all() {
            for c in SkillCategory::ALL {
                assert!(matches!(required_level(a, c), 2 | 4));
            }
        }
    }

    #[test]
    fn test_product_manager_requirements() {
        let catalog = CareerCatalog::default();
        let pm = catalog.find("product manager").unwrap();
        assert_eq!(required_level(pm, SkillCategory::Technical), 2);
        assert_eq!(required_level(pm, SkillCategory::Communication), 4);
        assert_eq!(required_level(pm, SkillCategory::Analytical), 4);
        assert_eq!(required_level(pm, SkillCategory::Creativity), 4);
    }

    #[test]
    fn test_find_unknown_title() {
        assert!(CareerCatalog::default().find("Astronaut").is_none());
    }

    #[test]
    fn test_software_engineer_is_first() {
        let catalog = CareerCatalog::default();
        assert_eq!(catalog.all()[0].title, "Software Engineer");
        assert_eq!(
            catalog.all()[0].key_skills,
            vec!["Python/Java", "DSA", "System Design", "Git"]
        );
    }
}
