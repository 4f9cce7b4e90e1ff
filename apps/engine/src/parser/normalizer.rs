//! Post-processes raw extraction into a clean, deduplicated record set.
//! Never fails outright: an internal fault returns the original input
//! annotated with a degraded-status marker so callers can proceed with
//! best-effort data.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::profile::{Certification, Education, PersonalInfo, WorkExperience};
use crate::parser::extractor::ExtractedResume;
use crate::parser::segmenter::is_heading_candidate;

/// Skills whose upper-cased form matches this set are rendered upper-case;
/// everything else keeps its cleaned original casing.
const ACRONYMS: &[&str] = &[
    "SQL", "AWS", "GCP", "GPU", "CPU", "HTML", "CSS", "API", "REST", "CI/CD",
];

const MIN_REAL_DESCRIPTION_LEN: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationStatus {
    Clean,
    Degraded { reason: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedResume {
    pub personal_info: PersonalInfo,
    pub summary: Option<String>,
    pub skills: Vec<String>,
    pub experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub languages: Vec<String>,
    pub confidence_score: f64,
    pub status: NormalizationStatus,
}

pub fn normalize(extracted: ExtractedResume) -> NormalizedResume {
    match try_normalize(&extracted) {
        Ok(normalized) => normalized,
        Err(err) => {
            warn!("normalization failed, passing through unnormalized data: {err:#}");
            degraded(extracted, format!("{err:#}"))
        }
    }
}

/// Fallback for an internal normalization fault: the caller still gets the
/// pre-normalization records, marked degraded.
fn degraded(extracted: ExtractedResume, reason: String) -> NormalizedResume {
    NormalizedResume {
        personal_info: extracted.personal_info,
        summary: extracted.summary,
        skills: extracted.skills,
        experience: extracted.experience,
        education: extracted.education,
        certifications: extracted.certifications,
        languages: extracted.languages,
        confidence_score: extracted.confidence_score,
        status: NormalizationStatus::Degraded { reason },
    }
}

fn try_normalize(extracted: &ExtractedResume) -> anyhow::Result<NormalizedResume> {
    Ok(NormalizedResume {
        personal_info: extracted.personal_info.clone(),
        summary: extracted.summary.as_deref().map(|s| s.trim().to_string()),
        skills: normalize_skills(&extracted.skills),
        experience: normalize_experience(&extracted.experience),
        education: dedup_by_key(&extracted.education, Education::identity_key),
        certifications: dedup_by_key(&extracted.certifications, Certification::identity_key),
        languages: normalize_skills(&extracted.languages),
        confidence_score: extracted.confidence_score.clamp(0.0, 1.0),
        status: NormalizationStatus::Clean,
    })
}

/// Trims and collapses whitespace, upper-cases known acronyms, and
/// deduplicates case-insensitively. First occurrence wins, relative order
/// preserved.
pub fn normalize_skills(skills: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();
    for raw in skills {
        let cleaned = collapse_whitespace(raw);
        if cleaned.is_empty() {
            continue;
        }
        let upper = cleaned.to_uppercase();
        let label = if ACRONYMS.contains(&upper.as_str()) {
            upper
        } else {
            cleaned
        };
        if seen.insert(label.to_lowercase()) {
            out.push(label);
        }
    }
    out
}

/// Drops false-positive entries whose title is a bare section heading with
/// no real description, then deduplicates by (title, company), first
/// occurrence winning.
pub fn normalize_experience(entries: &[WorkExperience]) -> Vec<WorkExperience> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut out = Vec::new();
    for entry in entries {
        let title = entry.title.trim();
        let description = entry.description.trim();
        if is_heading_candidate(title) && description.len() < MIN_REAL_DESCRIPTION_LEN {
            continue;
        }
        if !seen.insert(entry.identity_key()) {
            continue;
        }
        let mut cleaned = entry.clone();
        cleaned.title = title.to_string();
        cleaned.company = entry.company.trim().to_string();
        cleaned.description = description.to_string();
        out.push(cleaned);
    }
    out
}

fn dedup_by_key<T: Clone, K: std::hash::Hash + Eq>(items: &[T], key: impl Fn(&T) -> K) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert(key(item)))
        .cloned()
        .collect()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
