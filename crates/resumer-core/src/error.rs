use crate::parsing::layout::LayoutIssue;

#[derive(Debug, thiserror::Error)]
pub enum ResumeError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("section headers are not laid out as expected: {}", format_issues(.0))]
    Layout(Vec<LayoutIssue>),

    #[error("unknown section '{0}'. Expected one of: Education, Experience, Projects, Skills, Course Work, Achievements, Certificates")]
    UnknownSection(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn format_issues(issues: &[LayoutIssue]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
