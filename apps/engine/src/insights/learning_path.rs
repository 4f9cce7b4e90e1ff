//! Turns a set of skill gaps into a time-boxed monthly milestone plan.

use crate::errors::EngineError;
use crate::models::analysis::{LearningPath, Milestone};

/// Assumed study investment per skill, used for the weekly-hours estimate.
const HOURS_PER_SKILL: f64 = 20.0;
const WEEKS_PER_MONTH: f64 = 4.33;
const MIN_WEEKLY_HOURS: u32 = 2;
const MAX_WEEKLY_HOURS: u32 = 25;

/// Distributes the missing skills evenly across the timeline: no month is
/// left empty while skills remain, and every skill is scheduled exactly
/// once. A timeline shorter than the skill count packs multiple skills
/// into a month; a longer one simply ends early.
pub fn generate_learning_path(
    skill_gaps: &[String],
    timeline_months: u32,
) -> Result<LearningPath, EngineError> {
    if timeline_months == 0 {
        return Err(EngineError::Config(
            "timeline_months must be at least 1".to_string(),
        ));
    }
    let skills: Vec<&String> = skill_gaps.iter().filter(|s| !s.trim().is_empty()).collect();
    if skills.is_empty() {
        return Ok(LearningPath {
            milestones: vec![],
            weekly_hours: 0,
            total_months: 0,
        });
    }

    let months = timeline_months.min(skills.len() as u32) as usize;
    let base = skills.len() / months;
    let extra = skills.len() % months;

    let mut milestones = Vec::with_capacity(months);
    let mut cursor = 0;
    for month in 0..months {
        let take = base + usize::from(month < extra);
        let month_skills: Vec<String> = skills[cursor..cursor + take]
            .iter()
            .map(|s| s.trim().to_string())
            .collect();
        cursor += take;

        milestones.push(Milestone {
            month: month as u32 + 1,
            title: format!("Master {}", human_join(&month_skills)),
            activities: activities_for(&month_skills),
            skills: month_skills,
        });
    }

    let weekly = (skills.len() as f64 * HOURS_PER_SKILL)
        / (f64::from(timeline_months) * WEEKS_PER_MONTH);
    let weekly_hours = (weekly.ceil() as u32).clamp(MIN_WEEKLY_HOURS, MAX_WEEKLY_HOURS);

    Ok(LearningPath {
        milestones,
        weekly_hours,
        total_months: months as u32,
    })
}

/// Deterministic suggested activities derived from the skill names alone.
fn activities_for(skills: &[String]) -> Vec<String> {
    let mut activities = Vec::new();
    for skill in skills {
        activities.push(format!("Complete an online course on {skill}"));
        activities.push(format!("Build a practice project using {skill}"));
    }
    if let Some(first) = skills.first() {
        activities.push(format!("Join a community forum or study group for {first}"));
    }
    activities
}

fn human_join(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!(
            "{} and {}",
            init.iter().map(String::as_str).collect::<Vec<_>>().join(", "),
            last
        ),
    }
}
