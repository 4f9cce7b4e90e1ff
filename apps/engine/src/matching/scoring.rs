//! The four matching sub-scores. Each is a pure function of the profile
//! and posting, clamped to [0.0, 1.0].

use std::collections::HashSet;

use crate::config::MatchConfig;
use crate::models::job::{ExperienceLevel, JobPosting};
use crate::models::profile::{RemotePolicy, UserProfile};

/// Score when one side of a comparison carries no usable data.
const NEUTRAL_SCORE: f64 = 0.5;
const SAME_REGION_SCORE: f64 = 0.5;
const HYBRID_REMOTE_SCORE: f64 = 0.8;

fn profile_skill_set(profile: &UserProfile) -> HashSet<String> {
    profile
        .skills
        .iter()
        .map(|s| s.name.trim().to_lowercase())
        .collect()
}

/// |profile skills ∩ requirements| / |requirements|, case-insensitive.
/// A posting with no requirements scores 0.0.
pub fn skill_score(profile: &UserProfile, job: &JobPosting) -> f64 {
    if job.requirements.is_empty() {
        return 0.0;
    }
    let have = profile_skill_set(profile);
    let required: HashSet<String> = job
        .requirements
        .iter()
        .map(|r| r.trim().to_lowercase())
        .collect();
    let matched = required.intersection(&have).count();
    (matched as f64 / required.len() as f64).clamp(0.0, 1.0)
}

/// Requirements covered by the profile, in requirement order and casing.
pub fn skill_matches(profile: &UserProfile, job: &JobPosting) -> Vec<String> {
    let have = profile_skill_set(profile);
    dedup_requirements(job)
        .into_iter()
        .filter(|r| have.contains(&r.trim().to_lowercase()))
        .collect()
}

/// Requirements the profile is missing, in requirement order and casing.
pub fn skill_gaps(profile: &UserProfile, job: &JobPosting) -> Vec<String> {
    let have = profile_skill_set(profile);
    dedup_requirements(job)
        .into_iter()
        .filter(|r| !have.contains(&r.trim().to_lowercase()))
        .collect()
}

fn dedup_requirements(job: &JobPosting) -> Vec<String> {
    let mut seen = HashSet::new();
    job.requirements
        .iter()
        .filter(|r| seen.insert(r.trim().to_lowercase()))
        .cloned()
        .collect()
}

/// Distance between the profile's inferred seniority and the posting's
/// stated level, on a bounded penalty curve: exact match 1.0, overqualified
/// a flat configured score, each level of underqualification losing a fixed
/// step down to 0.0.
pub fn experience_score(profile: &UserProfile, job: &JobPosting, config: &MatchConfig) -> f64 {
    let inferred = ExperienceLevel::from_years(profile.total_experience_years());
    let gap = job.experience_level.rank() - inferred.rank();
    if gap == 0 {
        1.0
    } else if gap < 0 {
        config.overqualified_score
    } else {
        (1.0 - config.level_step * gap as f64).clamp(0.0, 1.0)
    }
}

/// 1.0 for remote postings the profile accepts and for preferred-location
/// substring matches; a partial score when the same broad region is
/// inferable; otherwise 0.0.
pub fn location_score(profile: &UserProfile, job: &JobPosting) -> f64 {
    if job.remote {
        match profile.preferences.remote_policy {
            RemotePolicy::Remote | RemotePolicy::Flexible => return 1.0,
            RemotePolicy::Hybrid => return HYBRID_REMOTE_SCORE,
            RemotePolicy::Onsite => {}
        }
    }

    let desired = match profile.preferences.desired_location.as_deref() {
        Some(d) if !d.trim().is_empty() => d.trim().to_lowercase(),
        _ => return 0.0,
    };
    let posting = job.location.trim().to_lowercase();
    if posting.is_empty() {
        return 0.0;
    }
    if posting.contains(&desired) || desired.contains(&posting) {
        return 1.0;
    }
    if same_region(&desired, &posting) {
        return SAME_REGION_SCORE;
    }
    0.0
}

/// Broad-region fallback: the trailing comma-separated component (state or
/// country) matches, e.g. "Oakland, CA" vs "San Jose, CA".
fn same_region(a: &str, b: &str) -> bool {
    match (a.rsplit(',').next(), b.rsplit(',').next()) {
        (Some(region_a), Some(region_b)) => {
            let region_a = region_a.trim();
            let region_b = region_b.trim();
            !region_a.is_empty() && region_a == region_b
        }
        _ => false,
    }
}

/// Overlap ratio of the desired and offered salary ranges: 1.0 when one
/// range contains the other, 0.0 when disjoint, linear in between. Either
/// side without salary data scores neutral.
pub fn salary_score(profile: &UserProfile, job: &JobPosting) -> f64 {
    let profile_range = range_of(
        profile.preferences.salary_min,
        profile.preferences.salary_max,
    );
    let job_range = range_of(job.salary_min, job.salary_max);
    let ((p_min, p_max), (j_min, j_max)) = match (profile_range, job_range) {
        (Some(p), Some(j)) => (p, j),
        _ => return NEUTRAL_SCORE,
    };

    let overlap = (p_max.min(j_max) as f64) - (p_min.max(j_min) as f64);
    if overlap < 0.0 {
        return 0.0;
    }
    let shorter = ((p_max - p_min).min(j_max - j_min)) as f64;
    if shorter == 0.0 {
        // Degenerate (single-point) range touching the other range
        return 1.0;
    }
    (overlap / shorter).clamp(0.0, 1.0)
}

fn range_of(min: Option<u32>, max: Option<u32>) -> Option<(u32, u32)> {
    match (min, max) {
        (Some(lo), Some(hi)) if lo <= hi => Some((lo, hi)),
        (Some(lo), Some(_)) => Some((lo, lo)),
        (Some(lo), None) => Some((lo, lo)),
        (None, Some(hi)) => Some((hi, hi)),
        (None, None) => None,
    }
}
