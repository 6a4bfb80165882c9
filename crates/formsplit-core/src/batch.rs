use crate::classify::classify_segment;
use crate::emit::{write_templates, EmitReport};
use crate::error::FormsplitError;
use crate::extraction::{join_pages, PdfExtractor};
use crate::model::ClassifiedSegment;
use crate::rules::schema::KeywordTable;
use crate::segment::{segment_text, SegmentOptions, SegmentStats};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Name of the output directory created inside the templates directory.
pub const EXTRACTED_DIR_NAME: &str = "extracted";

/// What happened to one source document.
#[derive(Debug)]
pub enum DocumentOutcome {
    /// Templates were written.
    Extracted {
        /// Characters of extracted text.
        chars: usize,
        templates: Vec<ClassifiedSegment>,
        stats: SegmentStats,
        report: EmitReport,
    },
    /// The backend returned no text (e.g. a scanned PDF).
    NoText,
    /// Text was found but no section passed the length threshold.
    NoTemplates { chars: usize, stats: SegmentStats },
    /// Reading or extracting the PDF failed; the document was skipped.
    ExtractionFailed { reason: String },
}

impl DocumentOutcome {
    /// Number of templates written for this document.
    pub fn template_count(&self) -> usize {
        match self {
            DocumentOutcome::Extracted { templates, .. } => templates.len(),
            _ => 0,
        }
    }
}

/// Find the PDF files directly inside `dir`, sorted by file name.
pub fn discover_pdfs(dir: &Path) -> Result<Vec<PathBuf>, FormsplitError> {
    let mut pdfs = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_pdf = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if is_pdf && path.is_file() {
            pdfs.push(path);
        }
    }
    pdfs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(pdfs)
}

/// Extract, segment, classify and emit one PDF.
///
/// Read and extraction failures are reported through the outcome so the
/// batch can continue. Only failures writing output are returned as errors.
pub fn process_pdf(
    pdf_path: &Path,
    extractor: &dyn PdfExtractor,
    out_root: &Path,
    table: &KeywordTable,
    options: &SegmentOptions,
) -> Result<DocumentOutcome, FormsplitError> {
    let source_name = pdf_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| pdf_path.display().to_string());

    let text = match std::fs::read(pdf_path)
        .map_err(FormsplitError::from)
        .and_then(|bytes| extractor.extract_pages(&bytes))
    {
        Ok(pages) => join_pages(&pages),
        Err(e) => {
            warn!(source = %source_name, backend = extractor.backend_name(), error = %e, "extraction failed");
            return Ok(DocumentOutcome::ExtractionFailed {
                reason: e.to_string(),
            });
        }
    };

    process_text(&text, &source_name, out_root, table, options)
}

/// Segment, classify and emit already-extracted text for one source.
pub fn process_text(
    text: &str,
    source_name: &str,
    out_root: &Path,
    table: &KeywordTable,
    options: &SegmentOptions,
) -> Result<DocumentOutcome, FormsplitError> {
    if text.trim().is_empty() {
        warn!(source = source_name, "no text extracted");
        return Ok(DocumentOutcome::NoText);
    }

    let chars = text.chars().count();
    let segmentation = segment_text(text, options);
    if segmentation.segments.is_empty() {
        warn!(
            source = source_name,
            headers = segmentation.stats.headers_detected,
            "no templates found"
        );
        return Ok(DocumentOutcome::NoTemplates {
            chars,
            stats: segmentation.stats,
        });
    }

    let templates: Vec<ClassifiedSegment> = segmentation
        .segments
        .into_iter()
        .map(|segment| classify_segment(segment, table))
        .collect();

    let report = write_templates(out_root, source_name, &templates)?;
    info!(source = source_name, templates = templates.len(), "document processed");

    Ok(DocumentOutcome::Extracted {
        chars,
        templates,
        stats: segmentation.stats,
        report,
    })
}
