//! Maps the normalized extraction result into the canonical `UserProfile`.
//! Pure and total: absent data becomes empty collections or policy
//! defaults, never an error.

use chrono::Utc;
use uuid::Uuid;

use crate::models::profile::{CareerPreferences, Skill, SkillCategory, UserProfile};
use crate::parser::normalizer::NormalizedResume;

/// Proficiency assigned to skills the résumé states without a level.
const DEFAULT_SKILL_LEVEL: u8 = 3;

// Substring -> category. More specific patterns precede shorter ones they
// contain ("javascript" before "java", "react native" before "react").
const SKILL_CATEGORY_RULES: &[(&str, SkillCategory)] = &[
    ("react native", SkillCategory::Mobile),
    ("machine learning", SkillCategory::AiMl),
    ("deep learning", SkillCategory::AiMl),
    ("tensorflow", SkillCategory::AiMl),
    ("pytorch", SkillCategory::AiMl),
    ("scikit", SkillCategory::AiMl),
    ("nlp", SkillCategory::AiMl),
    ("pandas", SkillCategory::DataScience),
    ("numpy", SkillCategory::DataScience),
    ("spark", SkillCategory::DataScience),
    ("hadoop", SkillCategory::DataScience),
    ("kafka", SkillCategory::DataScience),
    ("airflow", SkillCategory::DataScience),
    ("statistics", SkillCategory::DataScience),
    ("postgres", SkillCategory::Database),
    ("mysql", SkillCategory::Database),
    ("mongo", SkillCategory::Database),
    ("redis", SkillCategory::Database),
    ("elasticsearch", SkillCategory::Database),
    ("dynamodb", SkillCategory::Database),
    ("sqlite", SkillCategory::Database),
    ("sql", SkillCategory::Database),
    ("database", SkillCategory::Database),
    ("kubernetes", SkillCategory::Cloud),
    ("docker", SkillCategory::Cloud),
    ("terraform", SkillCategory::Cloud),
    ("serverless", SkillCategory::Cloud),
    ("aws", SkillCategory::Cloud),
    ("azure", SkillCategory::Cloud),
    ("gcp", SkillCategory::Cloud),
    ("cloud", SkillCategory::Cloud),
    ("ci/cd", SkillCategory::DevOps),
    ("jenkins", SkillCategory::DevOps),
    ("ansible", SkillCategory::DevOps),
    ("prometheus", SkillCategory::DevOps),
    ("grafana", SkillCategory::DevOps),
    ("devops", SkillCategory::DevOps),
    ("git", SkillCategory::Tools),
    ("jira", SkillCategory::Tools),
    ("linux", SkillCategory::Tools),
    ("bash", SkillCategory::Tools),
    ("react", SkillCategory::Frontend),
    ("vue", SkillCategory::Frontend),
    ("angular", SkillCategory::Frontend),
    ("html", SkillCategory::Frontend),
    ("css", SkillCategory::Frontend),
    ("node", SkillCategory::Backend),
    ("express", SkillCategory::Backend),
    ("django", SkillCategory::Backend),
    ("flask", SkillCategory::Backend),
    ("spring", SkillCategory::Backend),
    ("rails", SkillCategory::Backend),
    ("graphql", SkillCategory::Backend),
    ("microservice", SkillCategory::Backend),
    ("rest", SkillCategory::Backend),
    ("flutter", SkillCategory::Mobile),
    ("android", SkillCategory::Mobile),
    ("ios", SkillCategory::Mobile),
    ("swiftui", SkillCategory::Mobile),
    ("javascript", SkillCategory::Programming),
    ("typescript", SkillCategory::Programming),
    ("python", SkillCategory::Programming),
    ("java", SkillCategory::Programming),
    ("rust", SkillCategory::Programming),
    ("golang", SkillCategory::Programming),
    ("kotlin", SkillCategory::Programming),
    ("scala", SkillCategory::Programming),
    ("ruby", SkillCategory::Programming),
    ("php", SkillCategory::Programming),
    ("c++", SkillCategory::Programming),
    ("c#", SkillCategory::Programming),
    ("leadership", SkillCategory::SoftSkills),
    ("communication", SkillCategory::SoftSkills),
    ("teamwork", SkillCategory::SoftSkills),
    ("management", SkillCategory::SoftSkills),
    ("agile", SkillCategory::SoftSkills),
    ("scrum", SkillCategory::SoftSkills),
];

pub(crate) fn categorize_skill(name: &str) -> SkillCategory {
    let lower = name.to_lowercase();
    SKILL_CATEGORY_RULES
        .iter()
        .find(|(pattern, _)| lower.contains(pattern))
        .map(|(_, category)| *category)
        .unwrap_or(SkillCategory::Other)
}

/// Builds the canonical profile. Skills lacking a proficiency get the
/// default level; an experience entry with no end date is treated as
/// ongoing rather than a parse error.
pub fn to_profile(normalized: NormalizedResume, preferences: CareerPreferences) -> UserProfile {
    let skills = normalized
        .skills
        .iter()
        .map(|name| Skill {
            name: name.clone(),
            level: DEFAULT_SKILL_LEVEL,
            category: categorize_skill(name),
        })
        .collect();

    let experience = normalized
        .experience
        .into_iter()
        .map(|mut entry| {
            if entry.end_date.is_none() {
                entry.current = true;
            }
            entry
        })
        .collect();

    UserProfile {
        profile_id: Uuid::new_v4(),
        personal_info: normalized.personal_info,
        summary: normalized.summary,
        skills,
        experience,
        education: normalized.education,
        certifications: normalized.certifications,
        languages: normalized.languages,
        preferences,
        confidence_score: normalized.confidence_score,
        created_at: Utc::now(),
    }
}
