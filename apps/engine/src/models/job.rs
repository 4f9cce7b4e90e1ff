use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Entry,
    Junior,
    #[default]
    Mid,
    Senior,
    Lead,
    Principal,
    Executive,
}

impl ExperienceLevel {
    pub fn rank(self) -> i32 {
        match self {
            ExperienceLevel::Entry => 1,
            ExperienceLevel::Junior => 2,
            ExperienceLevel::Mid => 3,
            ExperienceLevel::Senior => 4,
            ExperienceLevel::Lead => 5,
            ExperienceLevel::Principal => 6,
            ExperienceLevel::Executive => 7,
        }
    }

    /// Seniority inferred from total years of work experience.
    pub fn from_years(years: f64) -> Self {
        if years < 1.0 {
            ExperienceLevel::Entry
        } else if years < 3.0 {
            ExperienceLevel::Junior
        } else if years < 5.0 {
            ExperienceLevel::Mid
        } else if years < 8.0 {
            ExperienceLevel::Senior
        } else {
            ExperienceLevel::Lead
        }
    }
}

/// A job posting from an external job-search collaborator. Read-only input
/// to matching; the core never fetches these itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub job_id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub remote: bool,
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
    pub requirements: Vec<String>,
    pub experience_level: ExperienceLevel,
    pub posted_date: Option<NaiveDate>,
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_years_boundaries() {
        assert_eq!(ExperienceLevel::from_years(0.0), ExperienceLevel::Entry);
        assert_eq!(ExperienceLevel::from_years(0.9), ExperienceLevel::Entry);
        assert_eq!(ExperienceLevel::from_years(1.0), ExperienceLevel::Junior);
        assert_eq!(ExperienceLevel::from_years(3.0), ExperienceLevel::Mid);
        assert_eq!(ExperienceLevel::from_years(5.0), ExperienceLevel::Senior);
        assert_eq!(ExperienceLevel::from_years(8.0), ExperienceLevel::Lead);
        assert_eq!(ExperienceLevel::from_years(20.0), ExperienceLevel::Lead);
    }

    #[test]
    fn test_rank_is_strictly_increasing() {
        let levels = [
            ExperienceLevel::Entry,
            ExperienceLevel::Junior,
            ExperienceLevel::Mid,
            ExperienceLevel::Senior,
            ExperienceLevel::Lead,
            ExperienceLevel::Principal,
            ExperienceLevel::Executive,
        ];
        for pair in levels.windows(2) {
            assert!(pair[0].rank() < pair[1].rank());
        }
    }

    #[test]
    fn test_experience_level_serde_snake_case() {
        let json = serde_json::to_string(&ExperienceLevel::Senior).unwrap();
        assert_eq!(json, r#""senior""#);
    }
}
