//! Per-section heuristic extraction into typed records. Extraction never
//! fails: an unparseable section yields an empty record list and a lower
//! confidence score.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::profile::{Certification, Education, PersonalInfo, WorkExperience};
use crate::parser::dates;
use crate::parser::segmenter::{classify_heading, SectionLabel, SectionMap};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+?1[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap()
});
static LINKEDIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(?:www\.)?linkedin\.com/in/[A-Za-z0-9-]+/?").unwrap()
});
static GITHUB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://(?:www\.)?github\.com/[A-Za-z0-9-]+/?").unwrap());
static WEBSITE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());
static NAME_FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^(?:name|full name):\s*(.+)$").unwrap());
static LOCATION_FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^(?:location|address|based in):\s*(.+)$").unwrap());

// "Jan 2021 - present", "June 2019 – Dec 2021", "06/2018 - 09/2020", "2015 - 2019"
static DATE_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)([A-Za-z]{3,9}\.?\s+\d{4}|\d{1,2}/\d{4}|\d{4}-\d{2}|\d{4})\s*[-–—]\s*([A-Za-z]{3,9}\.?\s+\d{4}|\d{1,2}/\d{4}|\d{4}-\d{2}|\d{4}|present|current|now)",
    )
    .unwrap()
});

// A single month-year or bare-year date, for certification lines.
static SINGLE_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\.?\s+\d{4}|\b\d{1,2}/\d{4}|\b(?:19|20)\d{2}\b",
    )
    .unwrap()
});
static EXPIRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)expires?\s*:?\s*((?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\.?\s+\d{4}|\d{1,2}/\d{4}|(?:19|20)\d{2})",
    )
    .unwrap()
});
static CREDENTIAL_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:credential|license)\s*(?:id|number|#)?\s*[:#]\s*([A-Za-z0-9][A-Za-z0-9-]{3,})")
        .unwrap()
});

// Title/company line: capitalized words, then a dash or "at", then the rest.
static TITLE_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][A-Za-z0-9+#./]*(?:\s+(?:[A-Z&][A-Za-z0-9+#./&]*|of|and|the))*\s+(?:[-–—]|at)\s+\S.*$")
        .unwrap()
});

// "San Francisco, CA"
static CITY_STATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z.]+(?:\s+[A-Z][a-z.]+)*,\s*[A-Z]{2}$").unwrap());

static DEGREE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(Bachelor|Master|PhD|Ph\.D|Doctorate|Associate|Certificate|Diploma|B\.S\.|B\.A\.|M\.S\.|M\.A\.|MBA)\b")
        .unwrap()
});
static FIELD_IN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bin\s+([^,\n(]+)").unwrap());
static FIELD_OF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bof\s+([^,\n(]+)").unwrap());

// Applied per line; [ \t] keeps the match from spanning newlines.
static INSTITUTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Z][A-Za-z.]*(?:[ \t]+(?:[A-Z][A-Za-z.]*|of|the))*[ \t]+(?:University|College|Institute|School)|University[ \t]+of(?:[ \t]+[A-Z][A-Za-z.]*)+")
        .unwrap()
});
static YEAR_RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d{4})\s*[-–]\s*(\d{4}|present|current)").unwrap());
static GPA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)GPA:?\s*(\d\.\d{1,2})").unwrap());
static HONORS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(summa cum laude|magna cum laude|cum laude|dean'?s list|with honors|valedictorian)")
        .unwrap()
});

// Representative subset of the reference skills vocabulary; matched with
// word boundaries against the full document.
const KNOWN_SKILLS: &[&str] = &[
    // Languages
    "Python", "JavaScript", "TypeScript", "Java", "C++", "C#", "Go", "Rust", "Swift", "Kotlin",
    "Scala", "Ruby", "PHP", "SQL", "MATLAB",
    // Web
    "HTML", "CSS", "React", "Angular", "Vue", "Node.js", "Express", "Django", "Flask", "Spring",
    "Rails", "GraphQL", "REST API",
    // Cloud & DevOps
    "AWS", "Azure", "GCP", "Docker", "Kubernetes", "Terraform", "Ansible", "Jenkins",
    "GitHub Actions", "CI/CD", "Linux", "Git", "Prometheus", "Grafana",
    // Databases
    "PostgreSQL", "MySQL", "MongoDB", "Redis", "Elasticsearch", "Cassandra", "DynamoDB", "SQLite",
    // Data & ML
    "TensorFlow", "PyTorch", "Scikit-learn", "Pandas", "NumPy", "Machine Learning",
    "Deep Learning", "Apache Spark", "Hadoop", "Kafka", "Airflow",
    // Mobile
    "React Native", "Flutter", "SwiftUI", "Jetpack Compose",
    // Other
    "Microservices", "Serverless", "Agile", "Scrum", "Leadership",
];

const MAX_SKILLS: usize = 30;
const MIN_SKILL_TOKEN_LEN: usize = 2;
const MAX_NAME_LEN: usize = 100;

/// Raw structured extraction result, prior to normalization. Skills are
/// plain strings here; the adapter assigns levels and categories.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedResume {
    pub personal_info: PersonalInfo,
    pub summary: Option<String>,
    pub skills: Vec<String>,
    pub experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub languages: Vec<String>,
    pub confidence_score: f64,
}

/// Runs every per-section extractor over the segmented text. Sections are
/// isolated: one failing to produce records does not affect the others.
pub fn extract(raw_text: &str, sections: &SectionMap) -> ExtractedResume {
    let mut extracted = ExtractedResume {
        personal_info: extract_personal_info(raw_text),
        summary: extract_summary(raw_text, sections),
        skills: extract_skills(raw_text, sections),
        experience: extract_experience(sections),
        education: extract_education(sections),
        certifications: extract_certifications(sections),
        languages: extract_languages(sections),
        confidence_score: 0.0,
    };
    extracted.confidence_score = confidence_score(&extracted, raw_text);
    extracted
}

pub fn extract_personal_info(text: &str) -> PersonalInfo {
    let mut info = PersonalInfo {
        email: EMAIL_RE.find(text).map(|m| m.as_str().to_string()),
        phone: PHONE_RE.find(text).map(|m| m.as_str().trim().to_string()),
        linkedin: LINKEDIN_RE.find(text).map(|m| m.as_str().to_string()),
        github: GITHUB_RE.find(text).map(|m| m.as_str().to_string()),
        ..PersonalInfo::default()
    };

    // First URL that is neither LinkedIn nor GitHub
    info.website = WEBSITE_RE
        .find_iter(text)
        .map(|m| m.as_str().trim_end_matches(['.', ',']).to_string())
        .find(|url| !url.contains("linkedin.com") && !url.contains("github.com"));

    info.name = NAME_FIELD_RE
        .captures(text)
        .map(|c| c[1].trim().to_string())
        .or_else(|| infer_name_from_first_line(text));

    info.location = LOCATION_FIELD_RE
        .captures(text)
        .map(|c| c[1].trim().to_string());

    info
}

/// Name fallback: the first non-empty line, unless it looks like an email
/// line or is implausibly long.
fn infer_name_from_first_line(text: &str) -> Option<String> {
    let first = text.lines().map(str::trim).find(|l| !l.is_empty())?;
    if first.len() < MAX_NAME_LEN && !first.contains('@') {
        Some(first.to_string())
    } else {
        None
    }
}

pub fn extract_skills(raw_text: &str, sections: &SectionMap) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    // Token split of the skills section
    for token in sections
        .body_or_empty(SectionLabel::Skills)
        .split(|c| matches!(c, ',' | ';' | '|' | '•' | '\n'))
    {
        let token = token.trim().trim_start_matches(['-', '*']).trim();
        if token.len() < MIN_SKILL_TOKEN_LEN || classify_heading(token).is_some() {
            continue;
        }
        if seen.insert(token.to_lowercase()) {
            skills.push(token.to_string());
        }
    }

    // Known-skill scan over the whole document
    for skill in scan_known_skills(raw_text) {
        if seen.insert(skill.to_lowercase()) {
            skills.push(skill);
        }
    }

    skills.truncate(MAX_SKILLS);
    skills
}

pub(crate) fn scan_known_skills(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    KNOWN_SKILLS
        .iter()
        .filter(|skill| contains_word(&lower, &skill.to_lowercase()))
        .map(|skill| skill.to_string())
        .collect()
}

/// Substring search with alphanumeric-boundary checks, so "Go" never
/// matches inside "Django".
fn contains_word(haystack: &str, needle: &str) -> bool {
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(needle) {
        let start = from + pos;
        let end = start + needle.len();
        let before_ok = start == 0
            || !haystack[..start]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric());
        let after_ok = end == haystack.len()
            || !haystack[end..]
                .chars()
                .next()
                .is_some_and(|c| c.is_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
        from = end;
    }
    false
}

pub fn extract_experience(sections: &SectionMap) -> Vec<WorkExperience> {
    let body = sections.body_or_empty(SectionLabel::Experience);
    if body.is_empty() {
        return Vec::new();
    }
    split_experience_entries(body)
        .iter()
        .filter_map(|entry| parse_experience_entry(entry))
        .collect()
}

/// Entries are separated at title/company lines; blank-line runs are the
/// fallback only when no line matches the title pattern.
fn split_experience_entries(body: &str) -> Vec<String> {
    let has_title_lines = body.lines().any(|l| TITLE_LINE_RE.is_match(l.trim()));
    if !has_title_lines {
        return body
            .split("\n\n")
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();
    }

    let mut entries: Vec<String> = Vec::new();
    let mut current = String::new();
    for line in body.lines() {
        if TITLE_LINE_RE.is_match(line.trim()) && !current.trim().is_empty() {
            entries.push(current.trim().to_string());
            current.clear();
        }
        current.push_str(line);
        current.push('\n');
    }
    if !current.trim().is_empty() {
        entries.push(current.trim().to_string());
    }
    entries
}

fn parse_experience_entry(entry: &str) -> Option<WorkExperience> {
    let lines: Vec<&str> = entry
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let first = *lines.first()?;

    let mut exp = WorkExperience::default();
    if let Some((title, company)) = split_title_company(first) {
        exp.title = title;
        exp.company = company;
    } else {
        exp.title = first.to_string();
    }

    for line in lines.iter().skip(1).take(3) {
        if CITY_STATE_RE.is_match(line) {
            exp.location = Some(line.to_string());
            break;
        }
    }

    if let Some(caps) = DATE_RANGE_RE.captures(entry) {
        exp.start_date = dates::parse_flexible(&caps[1]);
        let end = caps[2].to_lowercase();
        if matches!(end.as_str(), "present" | "current" | "now") {
            exp.current = true;
        } else {
            exp.end_date = dates::parse_flexible(&caps[2]);
        }
    }

    let mut description_lines: Vec<&str> = Vec::new();
    for line in lines.iter().skip(1) {
        if DATE_RANGE_RE.is_match(line) && line.len() < 40 {
            continue;
        }
        if exp.location.as_deref() == Some(*line) {
            continue;
        }
        if let Some(bullet) = line.strip_prefix(['-', '•', '*']) {
            exp.achievements.push(bullet.trim().to_string());
        } else {
            description_lines.push(line);
        }
    }
    exp.description = description_lines.join("\n");
    exp.skills_used = scan_known_skills(entry);

    Some(exp)
}

fn split_title_company(line: &str) -> Option<(String, String)> {
    for separator in [" - ", " – ", " — ", " at "] {
        if let Some((title, company)) = line.split_once(separator) {
            let title = title.trim();
            let company = company.trim();
            if !title.is_empty() && !company.is_empty() {
                return Some((title.to_string(), company.to_string()));
            }
        }
    }
    None
}

pub fn extract_education(sections: &SectionMap) -> Vec<Education> {
    let body = sections.body_or_empty(SectionLabel::Education);
    if body.is_empty() {
        return Vec::new();
    }
    body.split("\n\n")
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .filter_map(parse_education_entry)
        .collect()
}

fn parse_education_entry(entry: &str) -> Option<Education> {
    let mut edu = Education::default();

    if let Some(caps) = DEGREE_RE.captures(entry) {
        edu.degree = caps[1].to_string();
        // "Bachelor of Science in Computer Science" -> the "in" clause is
        // the field; "Bachelor of Computer Science" falls back to "of".
        edu.field_of_study = FIELD_IN_RE
            .captures(entry)
            .or_else(|| FIELD_OF_RE.captures(entry))
            .map(|c| c[1].trim().to_string());
    }
    for line in entry.lines() {
        if let Some(m) = INSTITUTION_RE.find(line) {
            edu.institution = m.as_str().to_string();
            break;
        }
    }
    if edu.degree.is_empty() && edu.institution.is_empty() {
        return None;
    }

    if let Some(caps) = YEAR_RANGE_RE.captures(entry) {
        let end = caps[2].to_lowercase();
        if !matches!(end.as_str(), "present" | "current") {
            if let Ok(year) = end.parse::<i32>() {
                edu.graduation_date = chrono::NaiveDate::from_ymd_opt(year, 12, 31);
            }
        }
    }
    if let Some(caps) = GPA_RE.captures(entry) {
        edu.gpa = caps[1].parse().ok();
    }
    edu.honors = HONORS_RE
        .find_iter(entry)
        .map(|m| m.as_str().to_string())
        .collect();

    Some(edu)
}

pub fn extract_certifications(sections: &SectionMap) -> Vec<Certification> {
    sections
        .body_or_empty(SectionLabel::Certifications)
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(parse_certification_entry)
        .collect()
}

fn parse_certification_entry(line: &str) -> Certification {
    let mut cert = Certification::default();
    let mut working = line.trim_start_matches(['-', '•', '*']).trim().to_string();

    if let Some(caps) = EXPIRY_RE.captures(&working) {
        cert.expiry_date = dates::parse_flexible(&caps[1]);
        working = EXPIRY_RE.replace(&working, "").to_string();
    }
    if let Some(caps) = CREDENTIAL_ID_RE.captures(&working) {
        cert.credential_id = Some(caps[1].to_string());
        working = CREDENTIAL_ID_RE.replace(&working, "").to_string();
    }

    // First parseable date left on the line is the issue date.
    let mut issue_span = None;
    for m in SINGLE_DATE_RE.find_iter(&working) {
        if let Some(date) = dates::parse_flexible(m.as_str()) {
            cert.issue_date = Some(date);
            issue_span = Some((m.start(), m.end()));
            break;
        }
    }
    if let Some((start, end)) = issue_span {
        working.replace_range(start..end, "");
    }

    let cleaned = working
        .trim()
        .trim_end_matches([',', '(', ')', '-', ' '])
        .trim();
    match cleaned.split_once(" - ") {
        Some((name, issuer)) => {
            cert.name = name.trim().to_string();
            cert.issuer = Some(issuer.trim().to_string());
        }
        None => cert.name = cleaned.to_string(),
    }
    cert
}

pub fn extract_summary(raw_text: &str, sections: &SectionMap) -> Option<String> {
    if let Some(body) = sections.section(SectionLabel::Summary) {
        return Some(body.to_string());
    }
    // Fallback: a first paragraph that reads like prose
    let first_para = raw_text.split("\n\n").next()?.trim();
    if (50..500).contains(&first_para.len()) {
        Some(first_para.to_string())
    } else {
        None
    }
}

pub fn extract_languages(sections: &SectionMap) -> Vec<String> {
    sections
        .body_or_empty(SectionLabel::Languages)
        .split(|c| matches!(c, ',' | ';' | '|' | '•' | '\n'))
        .map(|t| t.trim().trim_start_matches(['-', '*']).trim())
        .filter(|t| t.len() >= MIN_SKILL_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}

/// Confidence rubric over a 10-point scale, normalized to [0, 1]. Empty
/// sections reduce the score proportionally.
pub fn confidence_score(extracted: &ExtractedResume, raw_text: &str) -> f64 {
    let mut score = 0.0;
    let info = &extracted.personal_info;
    for present in [
        info.name.is_some(),
        info.email.is_some(),
        info.phone.is_some(),
        info.location.is_some(),
    ] {
        if present {
            score += 0.5;
        }
    }
    score += (extracted.skills.len() as f64 * 0.1).min(2.0);
    score += (extracted.experience.len() as f64 * 0.5).min(3.0);
    if !extracted.education.is_empty() {
        score += 1.0;
    }
    if extracted.summary.is_some() {
        score += 1.0;
    }
    if raw_text.len() > 100 {
        score += 1.0;
    }
    (score / 10.0).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::segmenter::segment;

    const FULL_RESUME: &str = "Jane Doe\n\
        jane.doe@example.com | (415) 555-0123 | https://linkedin.com/in/janedoe\n\
        Location: San Francisco, CA\n\
        \n\
        SUMMARY\n\
        Backend engineer with six years of experience building data platforms.\n\
        \n\
        EXPERIENCE\n\
        Senior Software Engineer - TechCorp\n\
        San Francisco, CA\n\
        Jan 2021 - present\n\
        - Reduced API latency by 40% with Redis caching\n\
        Built streaming pipelines with Kafka and Python.\n\
        \n\
        Software Engineer at DataWorks\n\
        Mar 2018 - Dec 2020\n\
        Worked on PostgreSQL ingestion services.\n\
        \n\
        EDUCATION\n\
        Bachelor of Science in Computer Science\n\
        Stanford University, 2014 - 2018, GPA: 3.8, magna cum laude\n\
        \n\
        CERTIFICATIONS\n\
        AWS Certified Developer - Amazon, June 2021\n\
        \n\
        SKILLS\n\
        Python, Rust, SQL, Docker, Kubernetes\n\
        \n\
        LANGUAGES\n\
        English, Spanish\n";

    fn extract_full() -> ExtractedResume {
        let sections = segment(FULL_RESUME);
        extract(FULL_RESUME, &sections)
    }

    #[test]
    fn test_personal_info_fields() {
        let info = extract_full().personal_info;
        assert_eq!(info.name.as_deref(), Some("Jane Doe"));
        assert_eq!(info.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(info.phone.as_deref(), Some("(415) 555-0123"));
        assert_eq!(info.location.as_deref(), Some("San Francisco, CA"));
        assert!(info.linkedin.as_deref().unwrap().contains("janedoe"));
    }

    #[test]
    fn test_name_fallback_skips_email_first_line() {
        let info = extract_personal_info("jane@example.com\nEXPERIENCE\n");
        assert_eq!(info.name, None);
    }

    #[test]
    fn test_name_field_takes_precedence() {
        let info = extract_personal_info("Resume of someone\nName: John Smith\n");
        assert_eq!(info.name.as_deref(), Some("John Smith"));
    }

    #[test]
    fn test_skills_tokens_and_scan() {
        let skills = extract_full().skills;
        assert!(skills.contains(&"Python".to_string()));
        assert!(skills.contains(&"Rust".to_string()));
        // Kafka appears only in the experience body; the document scan finds it
        assert!(skills.contains(&"Kafka".to_string()));
        // no duplicates from section tokens overlapping the document scan
        let lower: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();
        let unique: HashSet<&String> = lower.iter().collect();
        assert_eq!(lower.len(), unique.len());
    }

    #[test]
    fn test_skill_tokens_discard_short_and_stop_words() {
        let text = "SKILLS\nPython, x, SKILLS, Go\n";
        let skills = extract_skills(text, &segment(text));
        assert!(skills.contains(&"Python".to_string()));
        assert!(skills.contains(&"Go".to_string()));
        assert!(!skills.iter().any(|s| s == "x"));
        assert!(!skills.iter().any(|s| s.eq_ignore_ascii_case("skills")));
    }

    #[test]
    fn test_known_skill_scan_respects_word_boundaries() {
        let found = scan_known_skills("Built services in Django for our platform");
        assert!(found.contains(&"Django".to_string()));
        assert!(!found.contains(&"Go".to_string()));
    }

    #[test]
    fn test_experience_split_on_title_lines() {
        let experience = extract_full().experience;
        assert_eq!(experience.len(), 2);
        assert_eq!(experience[0].title, "Senior Software Engineer");
        assert_eq!(experience[0].company, "TechCorp");
        assert!(experience[0].current);
        assert_eq!(experience[1].company, "DataWorks");
        assert!(!experience[1].current);
        assert!(experience[1].end_date.is_some());
    }

    #[test]
    fn test_experience_bullets_become_achievements() {
        let experience = extract_full().experience;
        assert_eq!(
            experience[0].achievements,
            vec!["Reduced API latency by 40% with Redis caching".to_string()]
        );
        assert!(experience[0].description.contains("streaming pipelines"));
    }

    #[test]
    fn test_experience_blank_line_fallback() {
        let text = "EXPERIENCE\n\
            worked on backend services for a retailer\n\
            from 2019 to 2021\n\
            \n\
            freelance consulting for data teams\n";
        let experience = extract_experience(&segment(text));
        assert_eq!(experience.len(), 2);
    }

    #[test]
    fn test_education_entry() {
        let education = extract_full().education;
        assert_eq!(education.len(), 1);
        let edu = &education[0];
        assert_eq!(edu.degree, "Bachelor");
        assert_eq!(edu.field_of_study.as_deref(), Some("Computer Science"));
        assert_eq!(edu.institution, "Stanford University");
        assert_eq!(edu.gpa, Some(3.8));
        assert_eq!(
            edu.graduation_date,
            chrono::NaiveDate::from_ymd_opt(2018, 12, 31)
        );
        assert_eq!(edu.honors, vec!["magna cum laude".to_string()]);
    }

    #[test]
    fn test_certification_entry() {
        let certifications = extract_full().certifications;
        assert_eq!(certifications.len(), 1);
        let cert = &certifications[0];
        assert_eq!(cert.name, "AWS Certified Developer");
        assert_eq!(cert.issuer.as_deref(), Some("Amazon"));
        assert_eq!(cert.issue_date, chrono::NaiveDate::from_ymd_opt(2021, 6, 1));
    }

    #[test]
    fn test_certification_with_expiry_and_credential_id() {
        let cert = parse_certification_entry(
            "Certified Kubernetes Administrator - CNCF, Jan 2022, expires Jan 2025, credential ID: CKA-1234",
        );
        assert_eq!(cert.name, "Certified Kubernetes Administrator");
        assert_eq!(cert.issuer.as_deref(), Some("CNCF"));
        assert_eq!(cert.issue_date, chrono::NaiveDate::from_ymd_opt(2022, 1, 1));
        assert_eq!(cert.expiry_date, chrono::NaiveDate::from_ymd_opt(2025, 1, 1));
        assert_eq!(cert.credential_id.as_deref(), Some("CKA-1234"));
    }

    #[test]
    fn test_languages() {
        assert_eq!(extract_full().languages, vec!["English", "Spanish"]);
    }

    #[test]
    fn test_empty_text_degrades_not_fails() {
        let extracted = extract("", &segment(""));
        assert!(extracted.experience.is_empty());
        assert!(extracted.skills.is_empty());
        assert_eq!(extracted.personal_info.email, None);
        assert!(extracted.confidence_score < 0.2);
    }

    #[test]
    fn test_confidence_drops_with_missing_sections() {
        let full = extract_full().confidence_score;
        let sparse_text = "SKILLS\nPython\n";
        let sparse = extract(sparse_text, &segment(sparse_text)).confidence_score;
        assert!(full > sparse);
        assert!((0.0..=1.0).contains(&full));
        assert!((0.0..=1.0).contains(&sparse));
    }
}
