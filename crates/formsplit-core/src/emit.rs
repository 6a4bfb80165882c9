use crate::error::FormsplitError;
use crate::model::ClassifiedSegment;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const SUMMARY_FILE_NAME: &str = "templates_summary.md";

/// Files written for one source document.
#[derive(Debug, Clone)]
pub struct EmitReport {
    pub output_dir: PathBuf,
    pub summary_path: PathBuf,
    /// One path per template, in segment order.
    pub template_paths: Vec<PathBuf>,
}

/// Output directory name for a source file: stem, spaces to underscores, lowercased.
pub fn source_dir_name(source_file_name: &str) -> String {
    let stem = Path::new(source_file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| source_file_name.to_string());
    stem.replace(' ', "_").to_lowercase()
}

/// `NN_<slug>.md`, with a 1-based ordinal so repeated slugs never collide.
pub fn template_filename(ordinal: usize, slug: &str) -> String {
    format!("{:02}_{}.md", ordinal, slug)
}

/// Render one template file: heading, metadata, separator, raw content.
pub fn render_template(template: &ClassifiedSegment, source_file_name: &str) -> String {
    let segment = &template.segment;
    let mut out = String::with_capacity(segment.content.len() + 128);
    out.push_str(&format!("# {}\n\n", segment.title));
    out.push_str(&format!("**Type:** {}\n", template.category));
    out.push_str(&format!("**Slug:** {}\n", segment.slug));
    out.push_str(&format!("**Source:** {}\n\n", source_file_name));
    out.push_str("---\n\n");
    out.push_str(&segment.content);
    out
}

/// Render the per-document summary listing every template in order.
pub fn render_summary(templates: &[ClassifiedSegment], source_file_name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("# Templates extracted from {}\n\n", source_file_name));
    out.push_str(&format!("Total templates found: {}\n\n", templates.len()));

    for (i, template) in templates.iter().enumerate() {
        let ordinal = i + 1;
        let segment = &template.segment;
        out.push_str(&format!("## {}. {}\n", ordinal, segment.title));
        out.push_str(&format!(
            "- **File:** `{}`\n",
            template_filename(ordinal, &segment.slug)
        ));
        out.push_str(&format!("- **Type:** {}\n", template.category));
        out.push_str(&format!("- **Slug:** {}\n", segment.slug));
        out.push_str(&format!(
            "- **Length:** {} characters\n\n",
            segment.content_chars()
        ));
    }

    out
}

/// Write all templates of one source document plus its summary.
///
/// Files land in `<out_root>/<source_dir_name>/`. The directory is created
/// if needed and existing files with the same name are overwritten.
pub fn write_templates(
    out_root: &Path,
    source_file_name: &str,
    templates: &[ClassifiedSegment],
) -> Result<EmitReport, FormsplitError> {
    let output_dir = out_root.join(source_dir_name(source_file_name));
    std::fs::create_dir_all(&output_dir).map_err(|source| FormsplitError::OutputWrite {
        path: output_dir.clone(),
        source,
    })?;

    let mut template_paths = Vec::with_capacity(templates.len());
    for (i, template) in templates.iter().enumerate() {
        let path = output_dir.join(template_filename(i + 1, &template.segment.slug));
        write_file(&path, &render_template(template, source_file_name))?;
        debug!(path = %path.display(), category = %template.category, "template written");
        template_paths.push(path);
    }

    let summary_path = output_dir.join(SUMMARY_FILE_NAME);
    write_file(&summary_path, &render_summary(templates, source_file_name))?;
    info!(
        source = source_file_name,
        templates = templates.len(),
        dir = %output_dir.display(),
        "templates written"
    );

    Ok(EmitReport {
        output_dir,
        summary_path,
        template_paths,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), FormsplitError> {
    std::fs::write(path, contents).map_err(|source| FormsplitError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}
