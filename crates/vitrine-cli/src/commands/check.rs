use std::path::Path;

use anyhow::{bail, Result};

use vitrine_core::Page;

/// Validate a page file and report every problem found
pub fn run(path: &Path) -> Result<()> {
    let page = Page::parse(path)?;
    let problems = page.validate();

    if problems.is_empty() {
        println!(
            "{}: ok ({} sections, {} nav links, {} cards, {} FAQ entries)",
            path.display(),
            page.sections.len(),
            page.nav.len(),
            page.gallery_cards().len(),
            page.faq_entries().len()
        );
        return Ok(());
    }

    for problem in &problems {
        eprintln!("{}: {}", path.display(), problem);
    }
    bail!("{} problem(s) found", problems.len());
}
