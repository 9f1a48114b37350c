//! Admission circular summarizer
//!
//! Pulls the deadline, eligibility, required documents, exam date and a few
//! notable conditions out of free-form circular text with keyword and date
//! patterns. Matching runs on the lower-cased text, so extracted snippets are
//! lower-case.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static DEADLINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{1,2}[-/]\d{1,2}[-/]\d{2,4})|(deadline.*?(\d{1,2}[-/]\d{1,2}[-/]\d{2,4}))").unwrap()
});

static EXAM_DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(exam.*?date.*?(\d{1,2}[-/]\d{1,2}[-/]\d{2,4}))|(admission.*?test.*?(\d{1,2}[-/]\d{1,2}[-/]\d{2,4}))",
    )
    .unwrap()
});

static GPA_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(gpa|cgpa).*?(\d+\.?\d*)").unwrap());

const DOCUMENT_KEYWORDS: &[&str] = &[
    "ssc certificate",
    "hsc certificate",
    "photo",
    "passport size photo",
    "national id",
    "birth certificate",
    "character certificate",
    "medical certificate",
];

const DEFAULT_DOCUMENTS: &[&str] = &[
    "SSC Certificate",
    "HSC Certificate",
    "Passport Size Photo",
    "National ID Card",
];

const NOTE_KEYWORDS: &[(&str, &str)] = &[
    ("online application", "Online application available"),
    ("fee", "Application fee required"),
    ("exam", "Admission test required"),
    ("merit", "Selection based on merit"),
];

/// Structured summary of an admission circular
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircularSummary {
    pub deadline: String,
    pub eligibility: String,
    pub required_documents: Vec<String>,
    pub exam_date: Option<String>,
    pub important_notes: Vec<String>,
}

/// Extract a summary from circular text
pub fn summarize_circular(circular_text: &str) -> CircularSummary {
    let text = circular_text.to_lowercase();

    let deadline = DEADLINE_PATTERN
        .find(&text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "Not specified".to_string());

    let exam_date = EXAM_DATE_PATTERN.find(&text).map(|m| m.as_str().to_string());

    let mut eligibility = "HSC passed students".to_string();
    if text.contains("gpa") {
        if let Some(gpa) = GPA_PATTERN.captures(&text).and_then(|caps| caps.get(2)) {
            eligibility = format!("Minimum GPA: {}", gpa.as_str());
        }
    }
    if text.contains("ssc") && text.contains("hsc") {
        eligibility.push_str(" with SSC and HSC certificates");
    }

    let mut required_documents: Vec<String> = DOCUMENT_KEYWORDS
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .map(|keyword| capitalize_first(keyword))
        .collect();
    if required_documents.is_empty() {
        required_documents = DEFAULT_DOCUMENTS.iter().map(|d| d.to_string()).collect();
    }

    let mut important_notes: Vec<String> = NOTE_KEYWORDS
        .iter()
        .filter(|(keyword, _)| text.contains(keyword))
        .map(|(_, note)| note.to_string())
        .collect();
    if important_notes.is_empty() {
        important_notes.push("Follow official guidelines".to_string());
    }

    CircularSummary {
        deadline,
        eligibility,
        required_documents,
        exam_date,
        important_notes,
    }
}

/// Render a summary as a single ` | `-separated line
pub fn format_summary(summary: &CircularSummary) -> String {
    let mut parts = vec![
        format!("Deadline: {}", summary.deadline),
        format!("Eligibility: {}", summary.eligibility),
    ];

    if let Some(exam_date) = &summary.exam_date {
        parts.push(format!("Exam Date: {}", exam_date));
    }
    if !summary.required_documents.is_empty() {
        parts.push(format!("Required Documents: {}", summary.required_documents.join(", ")));
    }
    if !summary.important_notes.is_empty() {
        parts.push(format!("Notes: {}", summary.important_notes.join(", ")));
    }

    parts.join(" | ")
}

fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
