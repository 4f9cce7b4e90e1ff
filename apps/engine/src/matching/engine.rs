//! Scores a profile against job postings and ranks the results.
//! Pure over its inputs; the only caller-facing failure is invalid
//! configuration, rejected before any scoring begins.

use tracing::debug;

use crate::config::{validate_min_score, MatchConfig};
use crate::errors::EngineError;
use crate::matching::scoring;
use crate::models::analysis::{MatchAnalysis, SubScores};
use crate::models::job::JobPosting;
use crate::models::profile::UserProfile;

pub struct JobMatchingEngine {
    config: MatchConfig,
}

impl JobMatchingEngine {
    pub fn new(config: MatchConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Engine with the default (always valid) configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: MatchConfig::default(),
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Scores one (profile, posting) pair.
    pub fn analyze_match(&self, profile: &UserProfile, job: &JobPosting) -> MatchAnalysis {
        let scores = SubScores {
            skills: scoring::skill_score(profile, job),
            experience: scoring::experience_score(profile, job, &self.config),
            location: scoring::location_score(profile, job),
            salary: scoring::salary_score(profile, job),
        };
        let overall_score = scores.weighted_total(&self.config.weights);

        MatchAnalysis {
            job_id: job.job_id.clone(),
            job_title: job.title.clone(),
            company: job.company.clone(),
            overall_score,
            scores,
            skill_matches: scoring::skill_matches(profile, job),
            skill_gaps: scoring::skill_gaps(profile, job),
            reasons: match_reasons(&scores),
            posted_date: job.posted_date,
        }
    }

    /// Ranks postings for a profile: descending overall score, ties broken
    /// by more recent posting date, then alphabetical company. Only
    /// analyses scoring at least `min_score` are returned, at most `limit`
    /// of them. No eligible postings yields an empty list, not an error.
    pub fn find_matches(
        &self,
        profile: &UserProfile,
        postings: &[JobPosting],
        limit: usize,
        min_score: f64,
    ) -> Result<Vec<MatchAnalysis>, EngineError> {
        validate_min_score(min_score)?;

        let mut ranked: Vec<MatchAnalysis> = postings
            .iter()
            .map(|job| self.analyze_match(profile, job))
            .filter(|analysis| analysis.overall_score >= min_score)
            .collect();

        ranked.sort_by(|a, b| {
            b.overall_score
                .total_cmp(&a.overall_score)
                .then_with(|| b.posted_date.cmp(&a.posted_date))
                .then_with(|| a.company.to_lowercase().cmp(&b.company.to_lowercase()))
        });
        ranked.truncate(limit);

        debug!(
            candidates = postings.len(),
            returned = ranked.len(),
            "ranked job matches"
        );
        Ok(ranked)
    }
}

fn match_reasons(scores: &SubScores) -> Vec<String> {
    let mut reasons = Vec::new();
    if scores.skills > 0.7 {
        reasons.push("Strong skill alignment".to_string());
    }
    if scores.experience > 0.8 {
        reasons.push("Experience level matches well".to_string());
    }
    if scores.location > 0.8 {
        reasons.push("Location preferences align".to_string());
    }
    if scores.salary > 0.8 {
        reasons.push("Salary expectations met".to_string());
    }
    reasons
}
