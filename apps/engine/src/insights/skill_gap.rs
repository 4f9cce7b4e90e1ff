//! Skill-gap analysis between a profile's skills and a target role or
//! explicit requirement list.

use std::collections::HashSet;

use tracing::debug;

use crate::models::analysis::{
    LearningRecommendation, PriorityLevel, ReadinessTier, SkillGapReport,
};
use crate::models::profile::Skill;

/// Skills currently in high market demand; gaps on this list are
/// prioritized above the rest.
const HIGH_DEMAND_SKILLS: &[&str] = &[
    "python",
    "aws",
    "machine learning",
    "react",
    "docker",
    "kubernetes",
    "rust",
    "sql",
    "typescript",
    "terraform",
];

/// Requirement profiles for common target roles.
const ROLE_REQUIREMENTS: &[(&str, &[&str])] = &[
    (
        "Senior Software Engineer",
        &["Python", "React", "AWS", "Leadership", "Docker", "System Design"],
    ),
    (
        "Tech Lead",
        &["Python", "Leadership", "System Design", "Architecture", "Kubernetes", "Mentoring"],
    ),
    (
        "Data Scientist",
        &["Python", "Machine Learning", "Statistics", "SQL", "Pandas", "TensorFlow"],
    ),
    (
        "DevOps Engineer",
        &["Docker", "Kubernetes", "CI/CD", "AWS", "Terraform", "Monitoring"],
    ),
];

const GENERALIST_REQUIREMENTS: &[&str] = &["Python", "JavaScript", "SQL", "AWS", "Docker", "Git"];

/// Requirements for a named role; unknown roles fall back to the
/// generalist set.
pub fn role_requirements(role: &str) -> Vec<String> {
    ROLE_REQUIREMENTS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(role.trim()))
        .map(|(_, skills)| *skills)
        .unwrap_or(GENERALIST_REQUIREMENTS)
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Gap analysis against a named target role.
pub fn analyze_for_role(profile_skills: &[Skill], role: &str) -> SkillGapReport {
    let requirements = role_requirements(role);
    analyze_against_requirements(profile_skills, role, &requirements)
}

/// Gap analysis against an explicit requirement list. Matched and missing
/// sets use case-insensitive comparison; recommendations order the missing
/// set by priority, ties broken by original requirement order.
pub fn analyze_against_requirements(
    profile_skills: &[Skill],
    target: &str,
    requirements: &[String],
) -> SkillGapReport {
    let have: HashSet<String> = profile_skills
        .iter()
        .map(|s| s.name.trim().to_lowercase())
        .collect();

    let mut seen = HashSet::new();
    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();
    for requirement in requirements {
        let key = requirement.trim().to_lowercase();
        if key.is_empty() || !seen.insert(key.clone()) {
            continue;
        }
        if have.contains(&key) {
            matched_skills.push(requirement.trim().to_string());
        } else {
            missing_skills.push(requirement.trim().to_string());
        }
    }

    let total = matched_skills.len() + missing_skills.len();
    let match_percent = if total == 0 {
        // Nothing required means nothing is missing
        100
    } else {
        ((matched_skills.len() as f64 / total as f64) * 100.0).round() as u32
    };
    let readiness = ReadinessTier::from_percent(match_percent);

    let mut recommendations: Vec<LearningRecommendation> = missing_skills
        .iter()
        .map(|skill| LearningRecommendation {
            skill: skill.clone(),
            priority: priority_for(skill),
        })
        .collect();
    // Stable sort keeps requirement order within each priority band
    recommendations.sort_by_key(|r| match r.priority {
        PriorityLevel::High => 0,
        PriorityLevel::Medium => 1,
    });

    debug!(role = target, match_percent, missing = missing_skills.len(), "skill gap analyzed");

    SkillGapReport {
        target: target.to_string(),
        matched_skills,
        missing_skills,
        match_percent,
        readiness,
        recommendations,
    }
}

fn priority_for(skill: &str) -> PriorityLevel {
    if HIGH_DEMAND_SKILLS.contains(&skill.trim().to_lowercase().as_str()) {
        PriorityLevel::High
    } else {
        PriorityLevel::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::SkillCategory;

    fn skills(names: &[&str]) -> Vec<Skill> {
        names
            .iter()
            .map(|n| Skill {
                name: n.to_string(),
                level: 3,
                category: SkillCategory::Other,
            })
            .collect()
    }

    fn requirements(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_matched_and_missing_case_insensitive() {
        let report = analyze_against_requirements(
            &skills(&["Python", "SQL"]),
            "Backend Engineer",
            &requirements(&["python", "django", "sql"]),
        );
        assert_eq!(report.matched_skills, vec!["python", "sql"]);
        assert_eq!(report.missing_skills, vec!["django"]);
        assert_eq!(report.match_percent, 67);
        assert_eq!(report.readiness, ReadinessTier::Medium);
    }

    #[test]
    fn test_match_percent_rounds_to_nearest() {
        // 4 of 5 -> 80, inclusive lower boundary of the high tier
        let report = analyze_against_requirements(
            &skills(&["a", "b", "c", "d"]),
            "role",
            &requirements(&["a", "b", "c", "d", "e"]),
        );
        assert_eq!(report.match_percent, 80);
        assert_eq!(report.readiness, ReadinessTier::High);
    }

    #[test]
    fn test_low_tier_below_forty() {
        let report = analyze_against_requirements(
            &skills(&["a"]),
            "role",
            &requirements(&["a", "b", "c", "d", "e"]),
        );
        assert_eq!(report.match_percent, 20);
        assert_eq!(report.readiness, ReadinessTier::Low);
    }

    #[test]
    fn test_empty_requirements_fully_ready() {
        let report = analyze_against_requirements(&skills(&["a"]), "role", &[]);
        assert_eq!(report.match_percent, 100);
        assert_eq!(report.readiness, ReadinessTier::High);
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_high_demand_gaps_prioritized_first() {
        let report = analyze_against_requirements(
            &skills(&[]),
            "role",
            &requirements(&["Cobol", "Docker", "Fortran", "Rust"]),
        );
        let ordered: Vec<(&str, PriorityLevel)> = report
            .recommendations
            .iter()
            .map(|r| (r.skill.as_str(), r.priority))
            .collect();
        assert_eq!(
            ordered,
            vec![
                ("Docker", PriorityLevel::High),
                ("Rust", PriorityLevel::High),
                ("Cobol", PriorityLevel::Medium),
                ("Fortran", PriorityLevel::Medium),
            ]
        );
    }

    #[test]
    fn test_duplicate_requirements_counted_once() {
        let report = analyze_against_requirements(
            &skills(&["python"]),
            "role",
            &requirements(&["Python", "python", "Go"]),
        );
        assert_eq!(report.matched_skills, vec!["Python"]);
        assert_eq!(report.missing_skills, vec!["Go"]);
        assert_eq!(report.match_percent, 50);
    }

    #[test]
    fn test_known_role_lookup() {
        let report = analyze_for_role(
            &skills(&["Python", "Machine Learning", "SQL", "Pandas", "TensorFlow"]),
            "data scientist",
        );
        assert_eq!(report.missing_skills, vec!["Statistics"]);
        assert_eq!(report.match_percent, 83);
        assert_eq!(report.readiness, ReadinessTier::High);
    }

    #[test]
    fn test_unknown_role_uses_generalist_requirements() {
        let report = analyze_for_role(&skills(&[]), "Astronaut");
        assert_eq!(report.missing_skills.len(), GENERALIST_REQUIREMENTS.len());
    }
}
