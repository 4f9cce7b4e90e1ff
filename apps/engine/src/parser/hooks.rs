//! Optional post-processing seam. An external collaborator (e.g. a
//! language-model normalization pass) may rewrite the extracted structure;
//! the pipeline must behave identically when no hook is configured.

use crate::parser::extractor::ExtractedResume;

/// Receives the structured extraction plus the raw text and returns a
/// structure of identical shape. Additive normalization only; the
/// pipeline never depends on a hook being present.
pub trait CleanupHook {
    fn clean(&self, extracted: ExtractedResume, raw_text: &str) -> ExtractedResume;
}

/// Default hook: returns the extraction unchanged.
pub struct PassthroughCleanup;

impl CleanupHook for PassthroughCleanup {
    fn clean(&self, extracted: ExtractedResume, _raw_text: &str) -> ExtractedResume {
        extracted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough_returns_input_unchanged() {
        let extracted = ExtractedResume {
            skills: vec!["Rust".to_string()],
            confidence_score: 0.4,
            ..ExtractedResume::default()
        };
        let cleaned = PassthroughCleanup.clean(extracted.clone(), "raw");
        assert_eq!(cleaned.skills, extracted.skills);
        assert_eq!(cleaned.confidence_score, extracted.confidence_score);
    }
}
