pub mod pdfextract;
pub mod pdftotext;

use crate::error::ResumeError;

/// Text extracted from a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub text: String,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text from PDF bytes, returning one PageContent per page in page order.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, ResumeError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Concatenate page text in page order.
///
/// No separator is inserted; backends already end pages with a line break.
pub fn join_pages(pages: &[PageContent]) -> String {
    let mut ordered: Vec<&PageContent> = pages.iter().collect();
    ordered.sort_by_key(|p| p.page_number);
    ordered.iter().map(|p| p.text.as_str()).collect()
}
