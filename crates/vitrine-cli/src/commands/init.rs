use std::path::Path;

use anyhow::{bail, Result};

use vitrine_core::page::SAMPLE_PAGE;

/// Write the embedded starter page to disk
pub fn run(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("{} already exists, not overwriting", path.display());
    }

    std::fs::write(path, SAMPLE_PAGE)?;
    println!("Wrote starter page to {}", path.display());
    println!("Preview it with: vitrine run {}", path.display());
    Ok(())
}
