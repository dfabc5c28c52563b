//! Command-line driver
//!
//! Loads up to three programs, estimates each one on its own blocking task,
//! then renders the combined report.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::{is_program_file, Config};
use crate::estimate::parse;
use crate::report::{render, EditsFile, ProgramReport, ToolComparison};

/// Run the estimator with configuration from the command line
pub async fn run() -> Result<()> {
    let config = Config::from_args_and_env()?;
    init_logging(&config.log_level);

    let mut reports = analyze_files(&config.files).await?;

    if let Some(path) = &config.edits {
        let edits = EditsFile::load(path)?;
        let unmatched = edits.apply(&mut reports);
        if !unmatched.is_empty() {
            log::warn!("{} edit(s) did not match any row", unmatched.len());
        }
    }

    let comparison = ToolComparison::from_reports(&reports);
    let rendered = render(config.format, &reports, &comparison)?;

    match &config.output {
        Some(path) => {
            tokio::fs::write(path, rendered)
                .await
                .with_context(|| format!("writing report to {}", path.display()))?;
            log::info!("report written to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Initialize `env_logger`; `RUST_LOG` overrides the configured level
pub fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Read a program, replacing invalid UTF-8 sequences
pub async fn load_program(path: &Path) -> Result<String> {
    if !is_program_file(path) {
        log::warn!(
            "{} is not a .txt, .mpf or .spf file, parsing it anyway",
            path.display()
        );
    }

    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading program {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Estimate every program concurrently, keeping the argument order
pub async fn analyze_files(files: &[PathBuf]) -> Result<Vec<ProgramReport>> {
    let handles: Vec<_> = files
        .iter()
        .cloned()
        .map(|path| {
            tokio::spawn(async move {
                let text = load_program(&path).await?;
                let groups = tokio::task::spawn_blocking(move || parse(&text)).await?;
                Ok::<_, anyhow::Error>((path, groups))
            })
        })
        .collect();

    let mut reports = Vec::with_capacity(handles.len());
    for (file_index, handle) in handles.into_iter().enumerate() {
        let (path, groups) = handle.await??;
        log::info!("{}: {} group(s)", path.display(), groups.len());
        reports.push(ProgramReport::new(file_index, display_name(&path), groups));
    }

    Ok(reports)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
