use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;

use designai_application::{ExportArtifact, ExportFormat, WorkspaceController};

pub fn run(mut controller: WorkspaceController, format: ExportFormat, output: Option<PathBuf>) -> Result<()> {
    let artifact = controller.export_latest(format)?;
    let path = write_artifact(&artifact, output)?;
    println!(
        "{}",
        format!("Exported {} to {}", format.label(), path.display()).bright_green()
    );
    Ok(())
}

/// Writes the artifact to `output`, or to its default file name in the
/// current directory. Returns the path written.
pub fn write_artifact(artifact: &ExportArtifact, output: Option<PathBuf>) -> Result<PathBuf> {
    let path = output.unwrap_or_else(|| PathBuf::from(&artifact.file_name));
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&path, &artifact.content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), mime = %artifact.mime_type, "wrote export");
    Ok(path)
}
