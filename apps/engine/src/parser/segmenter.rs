//! Splits raw résumé text into labeled section spans using heading
//! heuristics. Degrades gracefully: unrecognized structure yields empty
//! spans, never an error.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionLabel {
    Summary,
    Experience,
    Education,
    Skills,
    Certifications,
    Projects,
    Languages,
}

// Heading word -> section label. Lines are compared whole against this
// table, so "EXPERIENCE" the heading matches but a sentence mentioning
// experience does not.
const HEADING_VOCABULARY: &[(&str, SectionLabel)] = &[
    ("LANGUAGE SKILLS", SectionLabel::Languages),
    ("TECHNICAL SKILLS", SectionLabel::Skills),
    ("PROFESSIONAL EXPERIENCE", SectionLabel::Experience),
    ("WORK EXPERIENCE", SectionLabel::Experience),
    ("WORK HISTORY", SectionLabel::Experience),
    ("SUMMARY", SectionLabel::Summary),
    ("PROFILE", SectionLabel::Summary),
    ("ABOUT", SectionLabel::Summary),
    ("OBJECTIVE", SectionLabel::Summary),
    ("EXPERIENCE", SectionLabel::Experience),
    ("EMPLOYMENT", SectionLabel::Experience),
    ("CAREER", SectionLabel::Experience),
    ("EDUCATION", SectionLabel::Education),
    ("ACADEMIC", SectionLabel::Education),
    ("SKILLS", SectionLabel::Skills),
    ("TECHNOLOGIES", SectionLabel::Skills),
    ("CERTIFICATIONS", SectionLabel::Certifications),
    ("CERTIFICATES", SectionLabel::Certifications),
    ("CREDENTIALS", SectionLabel::Certifications),
    ("PROJECTS", SectionLabel::Projects),
    ("PORTFOLIO", SectionLabel::Projects),
    ("LANGUAGES", SectionLabel::Languages),
];

/// Maps a line to a section label when the line, stripped of a trailing
/// colon, equals a vocabulary entry.
pub(crate) fn classify_heading(line: &str) -> Option<SectionLabel> {
    let cleaned = line.trim().trim_end_matches(':').trim().to_uppercase();
    HEADING_VOCABULARY
        .iter()
        .find(|(word, _)| cleaned == *word)
        .map(|(_, label)| *label)
}

fn is_all_caps(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic()) && !text.chars().any(|c| c.is_lowercase())
}

/// A line is a heading candidate when it is short and entirely upper-case,
/// or matches the heading vocabulary. The all-caps branch requires more
/// than 3 characters so short acronyms inside a section body (AWS, SQL)
/// don't terminate it.
pub(crate) fn is_heading_candidate(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.len() >= 40 {
        return false;
    }
    (trimmed.len() > 3 && is_all_caps(trimmed)) || classify_heading(trimmed).is_some()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionSpan {
    pub label: SectionLabel,
    pub body: String,
}

/// Ordered mapping from section label to its text span. Exactly one span
/// per recognized label; repeats are concatenated in document order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionMap {
    spans: Vec<SectionSpan>,
}

impl SectionMap {
    pub fn section(&self, label: SectionLabel) -> Option<&str> {
        self.spans
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.body.as_str())
    }

    pub fn body_or_empty(&self, label: SectionLabel) -> &str {
        self.section(label).unwrap_or("")
    }

    pub fn spans(&self) -> &[SectionSpan] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    fn append(&mut self, label: SectionLabel, line: &str) {
        match self.spans.iter_mut().find(|s| s.label == label) {
            Some(span) => {
                if !span.body.is_empty() {
                    span.body.push('\n');
                }
                span.body.push_str(line);
            }
            None => self.spans.push(SectionSpan {
                label,
                body: line.to_string(),
            }),
        }
    }

    fn trim_bodies(&mut self) {
        for span in &mut self.spans {
            span.body = span.body.trim().to_string();
        }
        self.spans.retain(|s| !s.body.is_empty());
    }
}

/// Scans lines once: a recognized heading opens its section, an
/// unrecognized heading candidate closes the current one, and body lines
/// accumulate under the open section.
pub fn segment(raw_text: &str) -> SectionMap {
    let mut map = SectionMap::default();
    let mut current: Option<SectionLabel> = None;

    for line in raw_text.lines() {
        if is_heading_candidate(line) {
            current = classify_heading(line);
            continue;
        }
        if let Some(label) = current {
            map.append(label, line);
        }
    }

    map.trim_bodies();
    tracing::debug!(sections = map.spans.len(), "segmented resume text");
    map
}
