pub mod analysis;
pub mod job;
pub mod profile;

pub use analysis::{
    LearningPath, LearningRecommendation, MatchAnalysis, Milestone, PriorityLevel, ReadinessTier,
    SkillGapReport, SubScores,
};
pub use job::{ExperienceLevel, JobPosting};
pub use profile::{
    CareerPreferences, Certification, Education, PersonalInfo, RemotePolicy, Skill, SkillCategory,
    UserProfile, WorkExperience,
};
