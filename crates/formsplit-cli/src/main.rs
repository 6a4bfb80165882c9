mod commands;
mod output;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "formsplit",
    version,
    about = "Split PDF template collections into individual template files"
)]
struct Cli {
    /// Directory containing the PDF files (default: the directory of this executable).
    /// Templates are written to <TEMPLATES_DIR>/extracted/
    templates_dir: Option<PathBuf>,
}

fn main() {
    // Diagnostics go to stderr; progress on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let templates_dir = cli.templates_dir.unwrap_or_else(default_templates_dir);

    if let Err(e) = commands::extract::run(&templates_dir) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn default_templates_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}
