//! Career-advisory core: turns unstructured résumé text into a structured
//! profile and ranks job postings against it, with skill-gap analysis and
//! learning-path synthesis on top.
//!
//! Everything here is pure, synchronous, and free of I/O. Document text
//! extraction, job-posting retrieval, persistence, and transport belong to
//! external collaborators; this crate consumes a raw text string and
//! `JobPosting` values and produces serializable results. Malformed input
//! degrades to empty records and a reduced confidence score; invalid
//! caller configuration is the only surfaced error.

pub mod config;
pub mod errors;
pub mod insights;
pub mod matching;
pub mod models;
pub mod parser;

pub use config::{MatchConfig, MatchWeights};
pub use errors::EngineError;
pub use insights::{analyze_against_requirements, analyze_for_role, career_insights, generate_learning_path};
pub use matching::JobMatchingEngine;
pub use models::{
    CareerPreferences, Certification, Education, ExperienceLevel, JobPosting, LearningPath,
    MatchAnalysis, PersonalInfo, ReadinessTier, RemotePolicy, Skill, SkillCategory, SkillGapReport,
    UserProfile, WorkExperience,
};
pub use parser::{build_profile, build_profile_with_hook, parse_resume, CleanupHook, PassthroughCleanup};
