pub mod batch;
pub mod classify;
pub mod emit;
pub mod error;
pub mod extraction;
pub mod model;
pub mod reader;
pub mod rules;
pub mod segment;

use classify::classify_segment;
use error::FormsplitError;
use extraction::{join_pages, PdfExtractor};
use model::ClassifiedSegment;
use rules::schema::KeywordTable;
use segment::split_into_segments;

pub use segment::SegmentOptions;

/// Main API entry point: split a PDF into classified templates in memory.
///
/// Pages are joined into one text stream, segmented at header lines and
/// each accepted segment is classified against `table`. Nothing is written
/// to disk; see [`batch::process_pdf`] for the full pipeline.
pub fn extract_templates(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    table: &KeywordTable,
    options: &SegmentOptions,
) -> Result<Vec<ClassifiedSegment>, FormsplitError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    Ok(split_text(&join_pages(&pages), table, options))
}

/// Segment and classify an already-extracted text stream.
pub fn split_text(
    text: &str,
    table: &KeywordTable,
    options: &SegmentOptions,
) -> Vec<ClassifiedSegment> {
    split_into_segments(text, options)
        .into_iter()
        .map(|segment| classify_segment(segment, table))
        .collect()
}
