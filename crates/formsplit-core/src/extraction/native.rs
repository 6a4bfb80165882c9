use crate::error::FormsplitError;
use crate::extraction::{split_form_feeds, PageContent, PdfExtractor};
use std::panic::{self, AssertUnwindSafe};

/// In-process PDF extraction backend built on the `pdf-extract` crate.
///
/// Used when poppler is not installed. Pages are split on the form feeds
/// pdf-extract inserts between pages; without them the document is one page.
pub struct NativeExtractor;

impl NativeExtractor {
    pub fn new() -> Self {
        NativeExtractor
    }
}

impl Default for NativeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for NativeExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, FormsplitError> {
        // pdf-extract panics on some malformed documents instead of returning an error.
        let extracted = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(pdf_bytes)
        }))
        .map_err(|payload| {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            FormsplitError::Extraction(format!("pdf-extract panicked: {}", reason))
        })?;

        let text = extracted.map_err(|e| FormsplitError::Extraction(e.to_string()))?;
        Ok(split_form_feeds(&text))
    }

    fn backend_name(&self) -> &str {
        "pdf-extract"
    }
}
