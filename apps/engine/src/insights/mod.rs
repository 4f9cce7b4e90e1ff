//! Career insights derived from a finished profile: skill-gap reports,
//! learning paths, and profile-level analysis.

pub mod career;
pub mod learning_path;
pub mod skill_gap;

pub use career::{career_insights, CareerInsights, CategoryBreakdown};
pub use learning_path::generate_learning_path;
pub use skill_gap::{analyze_against_requirements, analyze_for_role, role_requirements};
