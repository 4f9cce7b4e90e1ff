//! Canonical profile entities produced by the parsing pipeline and consumed
//! by matching and insights.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Programming,
    Frontend,
    Backend,
    Cloud,
    Database,
    AiMl,
    DevOps,
    Mobile,
    DataScience,
    SoftSkills,
    Tools,
    Languages,
    Other,
}

impl SkillCategory {
    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Programming => "programming",
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Cloud => "cloud",
            SkillCategory::Database => "databases",
            SkillCategory::AiMl => "ai/ml",
            SkillCategory::DevOps => "devops",
            SkillCategory::Mobile => "mobile",
            SkillCategory::DataScience => "data science",
            SkillCategory::SoftSkills => "soft skills",
            SkillCategory::Languages => "languages",
            SkillCategory::Tools => "tools",
            SkillCategory::Other => "other",
        }
    }
}

/// A single skill. Case-insensitive name is the identity key within a
/// profile; proficiency is an ordinal 1-5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub current: bool,
    pub description: String,
    pub achievements: Vec<String>,
    pub skills_used: Vec<String>,
}

impl WorkExperience {
    /// Identity within a profile: (title, company), case-insensitive.
    pub fn identity_key(&self) -> (String, String) {
        (
            self.title.trim().to_lowercase(),
            self.company.trim().to_lowercase(),
        )
    }

    /// Duration in years as of `today`. Ongoing entries run until `today`.
    pub fn years_at(&self, today: NaiveDate) -> f64 {
        let start = match self.start_date {
            Some(d) => d,
            None => return 0.0,
        };
        let end = match self.end_date {
            Some(d) if !self.current => d,
            _ => today,
        };
        ((end - start).num_days() as f64 / 365.25).max(0.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub field_of_study: Option<String>,
    pub graduation_date: Option<NaiveDate>,
    pub gpa: Option<f64>,
    pub honors: Vec<String>,
}

impl Education {
    pub fn identity_key(&self) -> (String, String) {
        (
            self.degree.trim().to_lowercase(),
            self.institution.trim().to_lowercase(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub credential_id: Option<String>,
}

impl Certification {
    pub fn identity_key(&self) -> (String, String) {
        (
            self.name.trim().to_lowercase(),
            self.issuer.as_deref().unwrap_or("").trim().to_lowercase(),
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemotePolicy {
    Remote,
    Hybrid,
    Onsite,
    #[default]
    Flexible,
}

/// Explicit career-preference structure so matching can rely on fixed
/// fields rather than a loosely keyed map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CareerPreferences {
    pub desired_location: Option<String>,
    pub remote_policy: RemotePolicy,
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
}

/// Aggregate profile. Built once per parse or request and treated as
/// immutable afterwards; downstream stages derive new values from it.
/// Construction is total: absent data becomes empty collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub profile_id: Uuid,
    pub personal_info: PersonalInfo,
    pub summary: Option<String>,
    pub skills: Vec<Skill>,
    pub experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub languages: Vec<String>,
    pub preferences: CareerPreferences,
    pub confidence_score: f64,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn total_experience_years(&self) -> f64 {
        self.experience_years_at(Utc::now().date_naive())
    }

    pub fn experience_years_at(&self, today: NaiveDate) -> f64 {
        self.experience.iter().map(|e| e.years_at(today)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_years_between_fixed_dates() {
        let exp = WorkExperience {
            start_date: Some(ymd(2020, 1, 1)),
            end_date: Some(ymd(2022, 1, 1)),
            ..WorkExperience::default()
        };
        let years = exp.years_at(ymd(2025, 1, 1));
        assert!((years - 2.0).abs() < 0.01, "years was {years}");
    }

    #[test]
    fn test_current_entry_runs_until_today() {
        let exp = WorkExperience {
            start_date: Some(ymd(2023, 1, 1)),
            end_date: None,
            current: true,
            ..WorkExperience::default()
        };
        let years = exp.years_at(ymd(2026, 1, 1));
        assert!((years - 3.0).abs() < 0.01, "years was {years}");
    }

    #[test]
    fn test_missing_start_date_counts_zero() {
        let exp = WorkExperience::default();
        assert_eq!(exp.years_at(ymd(2026, 1, 1)), 0.0);
    }

    #[test]
    fn test_identity_key_is_case_insensitive() {
        let a = WorkExperience {
            title: "Software Engineer".to_string(),
            company: "TechCorp".to_string(),
            ..WorkExperience::default()
        };
        let b = WorkExperience {
            title: "software engineer".to_string(),
            company: "TECHCORP".to_string(),
            ..WorkExperience::default()
        };
        assert_eq!(a.identity_key(), b.identity_key());
    }
}
