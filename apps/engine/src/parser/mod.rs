//! Résumé-to-profile pipeline: segmentation, entity extraction,
//! normalization, and adaptation into the canonical `UserProfile`.
//! Every stage is pure and synchronous; failures degrade to empty records
//! and a reduced confidence score instead of errors.

pub mod adapter;
pub mod dates;
pub mod extractor;
pub mod hooks;
pub mod normalizer;
pub mod segmenter;

use tracing::info;

pub use extractor::ExtractedResume;
pub use hooks::{CleanupHook, PassthroughCleanup};
pub use normalizer::{NormalizationStatus, NormalizedResume};
pub use segmenter::{SectionLabel, SectionMap};

use crate::models::profile::{CareerPreferences, UserProfile};

/// Segments and extracts raw résumé text into a structured (unnormalized)
/// result with a confidence score.
pub fn parse_resume(raw_text: &str) -> ExtractedResume {
    let sections = segmenter::segment(raw_text);
    let extracted = extractor::extract(raw_text, &sections);
    info!(
        confidence = extracted.confidence_score,
        experience_entries = extracted.experience.len(),
        skills = extracted.skills.len(),
        "resume extraction complete"
    );
    extracted
}

/// Full pipeline with the default pass-through hook.
pub fn build_profile(raw_text: &str, preferences: CareerPreferences) -> UserProfile {
    build_profile_with_hook(raw_text, preferences, &PassthroughCleanup)
}

/// Full pipeline: segment, extract, run the cleanup hook, normalize, and
/// adapt into a `UserProfile`. Total: always returns a well-formed
/// profile, with degradation reported via the confidence score.
pub fn build_profile_with_hook(
    raw_text: &str,
    preferences: CareerPreferences,
    hook: &dyn CleanupHook,
) -> UserProfile {
    let extracted = parse_resume(raw_text);
    let cleaned = hook.clean(extracted, raw_text);
    let normalized = normalizer::normalize(cleaned);
    adapter::to_profile(normalized, preferences)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }

    const RESUME: &str = "Alex Rivera\n\
        alex.rivera@example.com\n\
        \n\
        EXPERIENCE\n\
        Data Engineer - StreamCo\n\
        Feb 2020 - present\n\
        Built Kafka ingestion and Python batch jobs.\n\
        \n\
        SKILLS\n\
        python, Python, sql, AWS, aws\n";

    #[test]
    fn test_pipeline_builds_profile() {
        init_test_tracing();
        let profile = build_profile(RESUME, CareerPreferences::default());
        assert_eq!(profile.personal_info.name.as_deref(), Some("Alex Rivera"));
        assert_eq!(profile.experience.len(), 1);
        assert!(profile.experience[0].current);
        assert!(profile.confidence_score > 0.0);
        // dedup invariant holds through the whole pipeline
        let names: Vec<String> = profile.skills.iter().map(|s| s.name.to_lowercase()).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_pipeline_normalizes_skill_casing() {
        let profile = build_profile(RESUME, CareerPreferences::default());
        let names: Vec<&str> = profile.skills.iter().map(|s| s.name.as_str()).collect();
        assert!(names.contains(&"SQL"));
        assert!(names.contains(&"AWS"));
    }

    #[test]
    fn test_explicit_passthrough_matches_default() {
        let default_profile = build_profile(RESUME, CareerPreferences::default());
        let hooked =
            build_profile_with_hook(RESUME, CareerPreferences::default(), &PassthroughCleanup);
        assert_eq!(default_profile.skills, hooked.skills);
        assert_eq!(default_profile.experience, hooked.experience);
        assert_eq!(default_profile.personal_info, hooked.personal_info);
    }

    #[test]
    fn test_custom_hook_is_applied() {
        struct TagSkill;
        impl CleanupHook for TagSkill {
            fn clean(&self, mut extracted: ExtractedResume, _raw: &str) -> ExtractedResume {
                extracted.skills.push("Terraform".to_string());
                extracted
            }
        }
        let profile = build_profile_with_hook(RESUME, CareerPreferences::default(), &TagSkill);
        assert!(profile.skills.iter().any(|s| s.name == "Terraform"));
    }

    #[test]
    fn test_empty_input_still_yields_profile() {
        let profile = build_profile("", CareerPreferences::default());
        assert!(profile.skills.is_empty());
        assert!(profile.experience.is_empty());
        assert_eq!(profile.confidence_score, 0.0);
    }
}
