//! Profile-level career insights: skill categorization, an overall career
//! score, and strengths/gaps relative to the core technical categories.

use serde::{Deserialize, Serialize};

use crate::models::profile::{SkillCategory, UserProfile};
use crate::parser::adapter::categorize_skill;

const SKILLS_FOR_FULL_SCORE: f64 = 15.0;
const YEARS_FOR_FULL_SCORE: f64 = 5.0;
const STRENGTH_THRESHOLD: usize = 3;
const DEGREE_KEYWORDS: &[&str] = &["bachelor", "master", "phd", "doctorate"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: SkillCategory,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerInsights {
    pub categories: Vec<CategoryBreakdown>,
    pub career_score: f64,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub insights: Vec<String>,
}

pub fn career_insights(profile: &UserProfile) -> CareerInsights {
    let categories = categorize(profile);
    let career_score = career_score(profile);
    let strengths = strengths(&categories);
    let gaps = gaps(&categories);
    let insights = insight_lines(profile);

    CareerInsights {
        categories,
        career_score,
        strengths,
        gaps,
        insights,
    }
}

fn categorize(profile: &UserProfile) -> Vec<CategoryBreakdown> {
    let mut breakdowns: Vec<CategoryBreakdown> = Vec::new();
    for skill in &profile.skills {
        // Stated category wins unless the parser left it uncategorized
        let category = match skill.category {
            SkillCategory::Other => categorize_skill(&skill.name),
            stated => stated,
        };
        match breakdowns.iter_mut().find(|b| b.category == category) {
            Some(breakdown) => breakdown.skills.push(skill.name.clone()),
            None => breakdowns.push(CategoryBreakdown {
                category,
                skills: vec![skill.name.clone()],
            }),
        }
    }
    breakdowns
}

/// 40% skills breadth, 40% experience depth, 20% formal education,
/// clamped to [0.0, 1.0].
fn career_score(profile: &UserProfile) -> f64 {
    let skill_score = (profile.skills.len() as f64 / SKILLS_FOR_FULL_SCORE).min(1.0) * 0.4;
    let experience_score =
        (profile.total_experience_years() / YEARS_FOR_FULL_SCORE).min(1.0) * 0.4;
    let education_score = if profile.education.iter().any(|e| {
        let degree = e.degree.to_lowercase();
        DEGREE_KEYWORDS.iter().any(|k| degree.contains(k))
    }) {
        0.2
    } else {
        0.0
    };
    (skill_score + experience_score + education_score).clamp(0.0, 1.0)
}

fn strengths(categories: &[CategoryBreakdown]) -> Vec<String> {
    categories
        .iter()
        .filter(|b| b.skills.len() >= STRENGTH_THRESHOLD)
        .map(|b| format!("Strong in {}", b.category.label()))
        .collect()
}

fn gaps(categories: &[CategoryBreakdown]) -> Vec<String> {
    let has = |category: SkillCategory| categories.iter().any(|b| b.category == category);
    let mut gaps = Vec::new();
    if !has(SkillCategory::Programming) {
        gaps.push("Programming languages".to_string());
    }
    if !has(SkillCategory::Cloud) {
        gaps.push("Cloud technologies".to_string());
    }
    if !has(SkillCategory::Frontend) && !has(SkillCategory::Backend) {
        gaps.push("Modern frameworks".to_string());
    }
    gaps
}

fn insight_lines(profile: &UserProfile) -> Vec<String> {
    let mut insights = Vec::new();
    if profile.skills.len() > 10 {
        insights.push("Strong technical skill set with good diversity".to_string());
    } else if profile.skills.len() < 5 {
        insights.push("Consider developing more technical skills".to_string());
    }
    if profile.experience.len() > 3 {
        insights.push("Solid work experience with multiple roles".to_string());
    } else if profile.experience.len() == 1 {
        insights.push("Early career stage, focus on skill development".to_string());
    }
    if profile.education.is_empty() {
        insights.push("Consider highlighting relevant coursework or projects".to_string());
    } else {
        insights.push("Strong educational background".to_string());
    }
    if profile.certifications.is_empty() {
        insights.push("Consider obtaining relevant certifications".to_string());
    } else {
        insights.push("Good commitment to professional development".to_string());
    }
    insights
}
