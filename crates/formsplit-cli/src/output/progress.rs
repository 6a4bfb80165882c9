use formsplit_core::batch::DocumentOutcome;
use std::path::Path;

pub fn print_outcome(name: &str, outcome: &DocumentOutcome) {
    print!("{}", format_outcome(name, outcome));
}

/// Line reporting how many PDFs the templates directory holds.
pub fn format_discovery(pdf_count: usize) -> String {
    if pdf_count == 0 {
        "No PDF files found in templates directory\n".to_string()
    } else {
        format!("Found {} PDF file(s)\n", pdf_count)
    }
}

/// Closing lines after the whole batch.
pub fn format_totals(total_templates: usize, out_root: &Path) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\nExtraction complete! Total templates extracted: {}\n",
        total_templates
    ));
    out.push_str(&format!("Output directory: {}\n", out_root.display()));
    out
}

/// Per-document progress lines for one processed PDF.
pub fn format_outcome(name: &str, outcome: &DocumentOutcome) -> String {
    let mut out = String::new();

    match outcome {
        DocumentOutcome::Extracted {
            chars,
            templates,
            stats,
            report,
        } => {
            out.push_str(&format!("  Extracted {} characters of text\n", chars));
            out.push_str(&format!("  Found {} potential templates\n", templates.len()));
            if stats.lines_before_first_header > 0 {
                out.push_str(&format!(
                    "  ({} line(s) before the first header ignored)\n",
                    stats.lines_before_first_header
                ));
            }
            if stats.segments_discarded > 0 {
                out.push_str(&format!(
                    "  ({} short section(s) skipped)\n",
                    stats.segments_discarded
                ));
            }
            for (template, path) in templates.iter().zip(&report.template_paths) {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                out.push_str(&format!(
                    "  Extracted: {} [{}] -> {}\n",
                    template.segment.title, template.category, file_name
                ));
            }
            out.push_str(&format!(
                "  Summary saved to: {}\n",
                report.summary_path.display()
            ));
        }
        DocumentOutcome::NoText => {
            out.push_str(&format!("  No text extracted from {}\n", name));
        }
        DocumentOutcome::NoTemplates { chars, stats } => {
            out.push_str(&format!("  Extracted {} characters of text\n", chars));
            out.push_str(&format!(
                "  No templates could be extracted from {} ({} header(s), {} too short)\n",
                name, stats.headers_detected, stats.segments_discarded
            ));
        }
        DocumentOutcome::ExtractionFailed { reason } => {
            out.push_str(&format!(
                "  Error extracting text from {}: {}\n",
                name, reason
            ));
        }
    }

    out
}
