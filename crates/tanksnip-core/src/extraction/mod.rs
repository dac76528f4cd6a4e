pub mod pdftotext;

use crate::error::TankSnipError;

/// Content extracted from a single page of a PDF.
///
/// A page the backend could not read text from has no lines.
#[derive(Debug, Clone, Default)]
pub struct PageContent {
    pub page_number: usize,
    pub lines: Vec<String>,
}

impl PageContent {
    pub fn from_text(page_number: usize, text: &str) -> Self {
        PageContent {
            page_number,
            lines: text.lines().map(|l| l.to_string()).collect(),
        }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, TankSnipError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Flatten pages into the single text stream the extractors work on.
///
/// Pages are joined by a newline; a page without text still contributes an
/// empty string, so page boundaries are never silently merged.
pub fn full_text(pages: &[PageContent]) -> String {
    pages
        .iter()
        .map(PageContent::text)
        .collect::<Vec<_>>()
        .join("\n")
}
