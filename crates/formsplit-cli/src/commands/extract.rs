use formsplit_core::batch::{self, EXTRACTED_DIR_NAME};
use formsplit_core::error::FormsplitError;
use formsplit_core::extraction::default_extractor;
use formsplit_core::rules::builtin;
use formsplit_core::SegmentOptions;
use std::path::Path;
use tracing::debug;

use crate::output;

pub fn run(templates_dir: &Path) -> Result<(), FormsplitError> {
    println!(
        "Starting PDF template extraction from: {}",
        templates_dir.display()
    );

    let pdf_files = batch::discover_pdfs(templates_dir)?;
    print!("{}", output::progress::format_discovery(pdf_files.len()));
    if pdf_files.is_empty() {
        return Ok(());
    }

    let table = builtin::load_default()?;
    let options = SegmentOptions::default();
    let extractor = default_extractor();
    let out_root = templates_dir.join(EXTRACTED_DIR_NAME);
    debug!(backend = extractor.backend_name(), files = pdf_files.len(), "starting batch");

    let mut total_templates = 0;
    for pdf in &pdf_files {
        let name = pdf
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| pdf.display().to_string());
        println!("\nProcessing: {}", name);

        let outcome = batch::process_pdf(pdf, extractor.as_ref(), &out_root, &table, &options)?;
        output::progress::print_outcome(&name, &outcome);
        total_templates += outcome.template_count();
    }

    print!(
        "{}",
        output::progress::format_totals(total_templates, &out_root)
    );

    Ok(())
}
