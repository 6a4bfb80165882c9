pub mod header;
pub mod normalize;

use crate::model::Segment;
use header::detect_header;
use normalize::{clean_title, slugify};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Acceptance thresholds for the segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentOptions {
    /// A segment is kept only if its trimmed content is longer than this.
    pub min_content_chars: usize,
    /// Candidate titles shorter than this are ordinary content.
    pub min_title_chars: usize,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        SegmentOptions {
            min_content_chars: 100,
            min_title_chars: 6,
        }
    }
}

/// Diagnostics collected while scanning. Never affects the segments produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentStats {
    pub lines_scanned: usize,
    pub headers_detected: usize,
    /// Segments whose content was too short to keep.
    pub segments_discarded: usize,
    /// Non-blank lines seen before the first header.
    pub lines_before_first_header: usize,
}

/// Output of a full scan.
#[derive(Debug, Clone, Default)]
pub struct Segmentation {
    pub segments: Vec<Segment>,
    pub stats: SegmentStats,
}

/// The segment being built while lines are consumed.
#[derive(Debug)]
struct Accumulator {
    raw_title: String,
    title: String,
    slug: String,
    lines: Vec<String>,
}

#[derive(Debug)]
enum ScanState {
    NoActiveSegment,
    AccumulatingSegment(Accumulator),
}

/// Single-pass line scanner that splits a text stream at header lines.
///
/// Each line is classified exactly once, as header or content, with no
/// look-ahead. Content before the first header is dropped.
#[derive(Debug)]
pub struct Segmenter {
    options: SegmentOptions,
    state: ScanState,
    segments: Vec<Segment>,
    stats: SegmentStats,
}

impl Segmenter {
    pub fn new(options: SegmentOptions) -> Self {
        Segmenter {
            options,
            state: ScanState::NoActiveSegment,
            segments: Vec::new(),
            stats: SegmentStats::default(),
        }
    }

    /// Feed one line of the stream.
    pub fn push_line(&mut self, line: &str) {
        self.stats.lines_scanned += 1;
        let line = line.trim();

        if line.is_empty() {
            // Keep paragraph breaks inside a segment.
            if let ScanState::AccumulatingSegment(acc) = &mut self.state {
                acc.lines.push(String::new());
            }
            return;
        }

        if let Some(raw_title) = detect_header(line, self.options.min_title_chars) {
            self.stats.headers_detected += 1;
            let title = clean_title(raw_title);
            let slug = slugify(&title);
            debug!(raw_title, %title, %slug, "header detected");

            let next = ScanState::AccumulatingSegment(Accumulator {
                raw_title: raw_title.to_string(),
                title,
                slug,
                lines: Vec::new(),
            });
            let previous = std::mem::replace(&mut self.state, next);
            self.finalize(previous);
            return;
        }

        match &mut self.state {
            ScanState::AccumulatingSegment(acc) => acc.lines.push(line.to_string()),
            ScanState::NoActiveSegment => self.stats.lines_before_first_header += 1,
        }
    }

    /// Close the in-flight segment and return everything accepted.
    pub fn finish(mut self) -> Segmentation {
        let last = std::mem::replace(&mut self.state, ScanState::NoActiveSegment);
        self.finalize(last);
        Segmentation {
            segments: self.segments,
            stats: self.stats,
        }
    }

    fn finalize(&mut self, state: ScanState) {
        let ScanState::AccumulatingSegment(acc) = state else {
            return;
        };

        let content = acc.lines.join("\n").trim().to_string();
        let chars = content.chars().count();
        if chars > self.options.min_content_chars {
            self.segments.push(Segment {
                raw_title: acc.raw_title,
                title: acc.title,
                slug: acc.slug,
                content,
            });
        } else {
            self.stats.segments_discarded += 1;
            debug!(
                title = %acc.title,
                chars,
                min = self.options.min_content_chars,
                "segment too short, discarded"
            );
        }
    }
}

/// Split a text stream into segments.
pub fn split_into_segments(text: &str, options: &SegmentOptions) -> Vec<Segment> {
    segment_text(text, options).segments
}

/// Split a text stream into segments, keeping scan diagnostics.
pub fn segment_text(text: &str, options: &SegmentOptions) -> Segmentation {
    let mut segmenter = Segmenter::new(*options);
    for line in text.split('\n') {
        segmenter.push_line(line);
    }
    segmenter.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "I confirm that the procedure, its expected results and the possible \
                        side effects have been explained to me in full by my practitioner.";

    fn split(text: &str) -> Vec<Segment> {
        split_into_segments(text, &SegmentOptions::default())
    }

    #[test]
    fn test_single_numbered_segment() {
        let text = format!("1. CONSENT FOR TREATMENT\n{BODY}\n");
        let segments = split(&text);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].raw_title, "CONSENT FOR TREATMENT");
        assert_eq!(segments[0].title, "Consent For Treatment");
        assert_eq!(segments[0].slug, "consent-for-treatment");
        assert_eq!(segments[0].content, BODY);
    }

    #[test]
    fn test_preamble_dropped() {
        let text = format!("Clinic handbook, printed 2024\nIntro text\n\nCLIENT WELCOME PACK\n{BODY}");
        let result = segment_text(&text, &SegmentOptions::default());
        assert_eq!(result.segments.len(), 1);
        assert_eq!(result.segments[0].title, "Client Welcome Pack");
        assert!(!result.segments[0].content.contains("Intro text"));
        assert_eq!(result.stats.lines_before_first_header, 2);
    }

    #[test]
    fn test_paragraph_breaks_kept_and_edges_trimmed() {
        let text = format!("\nPATCH TEST GUIDANCE\n\n\n  first paragraph  \n\n{BODY}\n\n\n");
        let segments = split(&text);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].content, format!("first paragraph\n\n{BODY}"));
    }

    #[test]
    fn test_short_segment_discarded_between_long_ones() {
        let text = format!(
            "FIRST LONG TEMPLATE\n{BODY}\nSHORT INTERLUDE\nToo short.\nSECOND LONG ONE\n{BODY}"
        );
        let result = segment_text(&text, &SegmentOptions::default());
        let titles: Vec<&str> = result.segments.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["First Long", "Second Long One"]);
        assert_eq!(result.stats.segments_discarded, 1);
        assert_eq!(result.stats.headers_detected, 3);
    }

    #[test]
    fn test_threshold_is_strict() {
        let exactly_100 = "x".repeat(100);
        let text = format!("EXACT LENGTH CASE\n{exactly_100}");
        assert!(split(&text).is_empty());

        let text = format!("EXACT LENGTH CASE\n{}x", exactly_100);
        assert_eq!(split(&text).len(), 1);
    }

    #[test]
    fn test_threshold_counts_chars_not_bytes() {
        // 101 two-byte chars pass; 100 do not.
        let text = format!("ACCENTED BODY TEST\n{}", "é".repeat(101));
        assert_eq!(split(&text).len(), 1);
        let text = format!("ACCENTED BODY TEST\n{}", "é".repeat(100));
        assert!(split(&text).is_empty());
    }

    #[test]
    fn test_final_short_segment_discarded() {
        let text = format!("KEEP THIS TEMPLATE\n{BODY}\nTRAILING STUB\nbye");
        let segments = split(&text);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].title, "Keep This");
    }

    #[test]
    fn test_only_short_sections_yield_nothing() {
        let text = "ALPHA SECTION\nshort\nBETA SECTION\nalso short\n";
        let result = segment_text(text, &SegmentOptions::default());
        assert!(result.segments.is_empty());
        assert_eq!(result.stats.segments_discarded, 2);
    }

    #[test]
    fn test_stoplist_line_stays_content() {
        let text = format!("AFTERCARE ADVICE\nPAGE\n{BODY}");
        let segments = split(&text);
        assert_eq!(segments.len(), 1);
        assert!(segments[0].content.starts_with("PAGE\n"));
    }

    #[test]
    fn test_stoplist_line_before_header_dropped() {
        let text = format!("PAGE\nAFTERCARE ADVICE\n{BODY}");
        let result = segment_text(&text, &SegmentOptions::default());
        assert_eq!(result.segments.len(), 1);
        assert!(!result.segments[0].content.contains("PAGE"));
        assert_eq!(result.stats.headers_detected, 1);
    }

    #[test]
    fn test_order_preserved_and_duplicate_titles_kept() {
        let text = format!("Template: Consent Form\n{BODY}\nTemplate: Consent Form\n{BODY}\nZETA HANDOUT\n{BODY}");
        let segments = split(&text);
        let slugs: Vec<&str> = segments.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, vec!["consent", "consent", "zeta-handout"]);
    }

    #[test]
    fn test_windows_line_endings() {
        let text = format!("WINDOWS EXPORT\r\n{BODY}\r\n");
        let segments = split(&text);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].content, BODY);
    }

    #[test]
    fn test_custom_options() {
        let options = SegmentOptions {
            min_content_chars: 5,
            min_title_chars: 6,
        };
        let segments = split_into_segments("TINY ONE\nsix ch", &options);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].content, "six ch");
    }

    #[test]
    fn test_empty_text() {
        let result = segment_text("", &SegmentOptions::default());
        assert!(result.segments.is_empty());
        assert_eq!(result.stats.lines_scanned, 1);
    }

    #[test]
    fn test_incremental_push_matches_batch() {
        let text = format!("FIRST TEMPLATE BLOCK\n{BODY}\nSECOND TEMPLATE BLOCK\n{BODY}");
        let mut segmenter = Segmenter::new(SegmentOptions::default());
        for line in text.lines() {
            segmenter.push_line(line);
        }
        assert_eq!(segmenter.finish().segments, split(&text));
    }
}
