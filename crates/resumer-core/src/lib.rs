pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;

use error::ResumeError;
use extraction::{join_pages, PdfExtractor};
use model::ParsedResume;
use parsing::{check_layout, normalize_text, parse_sections, LayoutIssue};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Options controlling how a résumé is parsed.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Fail with [`ResumeError::Layout`] instead of returning best-effort
    /// sections when headers are missing, repeated or out of order.
    pub strict_layout: bool,
}

/// Result of parsing one résumé.
#[derive(Debug, Clone, Serialize)]
pub struct ParseOutput {
    pub resume: ParsedResume,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub layout_issues: Vec<LayoutIssue>,
    /// Pages read from the PDF; `None` when the input was already text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<usize>,
}

/// Main API entry point: split a PDF résumé into labeled sections.
pub fn parse_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    options: &ParseOptions,
) -> Result<ParseOutput, ResumeError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    info!(
        backend = extractor.backend_name(),
        pages = pages.len(),
        "extracted PDF text"
    );

    let raw = join_pages(&pages);
    let mut output = parse_text(&raw, options)?;
    output.page_count = Some(pages.len());
    Ok(output)
}

/// Split already-extracted résumé text into labeled sections.
pub fn parse_text(raw: &str, options: &ParseOptions) -> Result<ParseOutput, ResumeError> {
    let text = normalize_text(raw);
    debug!(chars = text.len(), "normalized text");

    let layout_issues = check_layout(&text);
    if options.strict_layout && !layout_issues.is_empty() {
        return Err(ResumeError::Layout(layout_issues));
    }

    let resume = parse_sections(&text);
    debug!(filled = resume.filled_sections(), "split sections");

    Ok(ParseOutput {
        resume,
        layout_issues,
        page_count: None,
    })
}

/// Parse a résumé file from disk.
///
/// `.txt` files are treated as pre-extracted text and bypass the extractor;
/// anything else is read as a PDF.
pub fn parse_file(
    path: &Path,
    extractor: &dyn PdfExtractor,
    options: &ParseOptions,
) -> Result<ParseOutput, ResumeError> {
    if is_text_file(path) {
        let raw = std::fs::read_to_string(path)?;
        return parse_text(&raw, options);
    }

    let pdf_bytes = std::fs::read(path)?;
    parse_pdf(&pdf_bytes, extractor, options)
}

/// Raw text of a résumé file, pages joined in order, before normalization.
pub fn extract_text(path: &Path, extractor: &dyn PdfExtractor) -> Result<String, ResumeError> {
    if is_text_file(path) {
        return Ok(std::fs::read_to_string(path)?);
    }

    let pdf_bytes = std::fs::read(path)?;
    let pages = extractor.extract_pages(&pdf_bytes)?;
    Ok(join_pages(&pages))
}

fn is_text_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false)
}
