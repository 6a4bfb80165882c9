pub mod native;
pub mod pdftotext;

use crate::error::FormsplitError;

/// Text extracted from a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub text: String,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, FormsplitError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Concatenate page texts into one stream, each page followed by a newline.
pub fn join_pages(pages: &[PageContent]) -> String {
    let capacity = pages.iter().map(|p| p.text.len() + 1).sum();
    let mut text = String::with_capacity(capacity);
    for page in pages {
        text.push_str(&page.text);
        text.push('\n');
    }
    text
}

/// Pick the best available backend: pdftotext when installed, in-process otherwise.
pub fn default_extractor() -> Box<dyn PdfExtractor> {
    if pdftotext::PdftotextExtractor::is_available() {
        Box::new(pdftotext::PdftotextExtractor::new())
    } else {
        Box::new(native::NativeExtractor::new())
    }
}

/// Split text on form feeds (the page separator both backends emit).
///
/// Backends terminate every page with a form feed, so an empty tail after
/// the last one is not a page. Blank pages elsewhere are kept.
pub(crate) fn split_form_feeds(text: &str) -> Vec<PageContent> {
    let mut pages: Vec<PageContent> = text
        .split('\x0c')
        .enumerate()
        .map(|(i, page_text)| PageContent {
            page_number: i + 1,
            text: page_text.to_string(),
        })
        .collect();
    if pages.len() > 1 && pages.last().is_some_and(|p| p.text.trim().is_empty()) {
        pages.pop();
    }
    pages
}
