//! Output models for matching, skill-gap analysis, and learning paths.
//! All ephemeral: generated per request, serializable, never persisted by
//! the core.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::MatchWeights;

/// Independently computed sub-scores, each in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
    pub salary: f64,
}

impl SubScores {
    pub fn weighted_total(&self, weights: &MatchWeights) -> f64 {
        (self.skills * weights.skills
            + self.experience * weights.experience
            + self.location * weights.location
            + self.salary * weights.salary)
            .clamp(0.0, 1.0)
    }
}

/// Match analysis for one (profile, posting) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchAnalysis {
    pub job_id: String,
    pub job_title: String,
    pub company: String,
    pub overall_score: f64,
    pub scores: SubScores,
    pub skill_matches: Vec<String>,
    pub skill_gaps: Vec<String>,
    pub reasons: Vec<String>,
    pub posted_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessTier {
    Low,
    Medium,
    High,
}

impl ReadinessTier {
    /// Tier boundaries are inclusive on the lower end: >=80 high,
    /// 40-79 medium, <40 low.
    pub fn from_percent(percent: u32) -> Self {
        if percent >= 80 {
            ReadinessTier::High
        } else if percent >= 40 {
            ReadinessTier::Medium
        } else {
            ReadinessTier::Low
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityLevel {
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningRecommendation {
    pub skill: String,
    pub priority: PriorityLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGapReport {
    pub target: String,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub match_percent: u32,
    pub readiness: ReadinessTier,
    pub recommendations: Vec<LearningRecommendation>,
}

/// One time-boxed unit of a learning path: a month addressing a subset of
/// skill gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub month: u32,
    pub title: String,
    pub skills: Vec<String>,
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPath {
    pub milestones: Vec<Milestone>,
    pub weekly_hours: u32,
    pub total_months: u32,
}
