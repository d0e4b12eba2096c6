use super::{render_svg, Certificate};
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Shown once to the user when an export fails.
pub const EXPORT_FAILED_MESSAGE: &str = "Failed to generate certificate. Please try again.";

/// Render `cert` and write it atomically into `dir`, creating the directory
/// if needed. Returns the written path.
pub fn export_svg(cert: &Certificate, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;

    let path = dir.join(cert.file_name());
    let svg = render_svg(cert);

    let mut file = AtomicWriteFile::open(&path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(svg.as_bytes())
        .with_context(|| format!("Failed to write certificate to {}", path.display()))?;
    file.commit().context("Failed to save certificate")?;

    tracing::info!(path = %path.display(), id = %cert.id, "certificate exported");
    Ok(path)
}
