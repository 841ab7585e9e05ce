use crate::error::ResumeError;
use crate::extraction::{PageContent, PdfExtractor};

/// In-process PDF extraction backend built on the `pdf-extract` crate.
///
/// Needs no external tools, so it is the default backend.
pub struct PdfExtractBackend;

impl PdfExtractBackend {
    pub fn new() -> Self {
        PdfExtractBackend
    }
}

impl Default for PdfExtractBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdfExtractBackend {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, ResumeError> {
        let pages = ::pdf_extract::extract_text_from_mem_by_pages(pdf_bytes)
            .map_err(|e| ResumeError::Extraction(e.to_string()))?;

        Ok(pages
            .into_iter()
            .enumerate()
            .map(|(i, text)| PageContent {
                page_number: i + 1,
                text,
            })
            .collect())
    }

    fn backend_name(&self) -> &str {
        "pdf-extract"
    }
}
