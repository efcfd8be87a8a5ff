use std::path::Path;

use tracing::debug;

use crate::{Error, Result};

use super::models::{Page, SectionBody};

/// Starter page shipped with the binary; `vitrine init` writes it to disk
/// and `vitrine run` falls back to it when no page file is given.
pub const SAMPLE_PAGE: &str = r#"[meta]
title = "Lumen"
tagline = "A calm focus timer for your terminal"
site_url = "https://example.com/lumen"

[[nav]]
label = "Features"
anchor = "features"

[[nav]]
label = "Screens"
anchor = "screens"

[[nav]]
label = "FAQ"
anchor = "faq"

[[sections]]
id = "top"
kind = "hero"
heading = "Deep work, one session at a time"
lead = "Lumen turns your terminal into a distraction-free focus timer with session stats, gentle breaks and keyboard-first control."

[sections.cta]
label = "Get Lumen"
url = "https://example.com/lumen/download"

[[sections]]
id = "features"
title = "Features"
kind = "prose"
paragraphs = [
    "Start a session with one key and Lumen fades everything else away. Sessions, breaks and long pauses follow the rhythm you configure, not the other way around.",
    "Your history stays on your machine. Daily and weekly summaries render right in the terminal, no account and no sync required.",
    "Every action is a keystroke. If you live in a terminal, Lumen will feel like it was always there.",
]

[[sections]]
id = "screens"
title = "Screens"
kind = "gallery"

[[sections.cards]]
title = "Session view"
caption = "A running session with the break schedule ahead"

[[sections.cards]]
title = "Daily summary"
caption = "Focus minutes by hour, streaks and totals"

[[sections.cards]]
title = "Weekly report"
caption = "Seven days of sessions at a glance"

[[sections.cards]]
title = "Break screen"
caption = "A full-screen nudge to actually step away"

[[sections.cards]]
title = "Themes"
caption = "Six built-in palettes, or bring your own"

[[sections.cards]]
title = "Settings"
caption = "Everything tunable from one panel"

[[sections]]
id = "faq"
title = "FAQ"
kind = "faq"

[[sections.entries]]
question = "Does Lumen work over SSH?"
answer = "Yes. Lumen is a plain terminal program; anywhere you have a shell, you have Lumen."

[[sections.entries]]
question = "Where is my data stored?"
answer = "In a single local file under your data directory. Delete it and the history is gone; nothing ever leaves your machine."

[[sections.entries]]
question = "Can I change the session lengths?"
answer = "Session, break and long-break lengths are all configurable, per project if you want."

[[sections]]
id = "about"
title = "About"
kind = "prose"
paragraphs = [
    "Lumen is free software, built in the open by people who spend their days in terminals.",
]
"#;

impl Page {
    /// The embedded starter page
    pub fn sample() -> Page {
        // The sample is a compile-time constant; parsing it cannot fail
        // unless the constant itself is broken, which the tests pin down.
        toml::from_str(SAMPLE_PAGE).expect("embedded sample page is valid")
    }

    /// Parse a page file without validating it. TOML or JSON, by extension.
    pub fn parse(path: &Path) -> Result<Page> {
        let content = std::fs::read_to_string(path)?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(serde_json::from_str(&content)?),
            _ => toml::from_str(&content).map_err(|e| Error::PageParse(e.to_string())),
        }
    }

    /// Load and validate a page file
    pub fn load(path: &Path) -> Result<Page> {
        let page = Self::parse(path)?;

        let problems = page.validate();
        if !problems.is_empty() {
            return Err(Error::PageInvalid(problems.join("; ")));
        }

        debug!(
            "Loaded page '{}' with {} sections",
            page.meta.title,
            page.sections.len()
        );
        Ok(page)
    }

    /// Structural checks; returns one message per problem found
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        let mut seen_ids = std::collections::HashSet::new();
        for section in &self.sections {
            if section.id.is_empty() {
                problems.push("section with empty id".to_string());
            } else if !seen_ids.insert(section.id.as_str()) {
                problems.push(format!("duplicate section id '{}'", section.id));
            }
        }

        for link in &self.nav {
            if self.section_index(&link.anchor).is_none() {
                problems.push(format!(
                    "nav link '{}' points at unknown anchor '{}'",
                    link.label, link.anchor
                ));
            }
        }

        let galleries = self
            .sections
            .iter()
            .filter(|s| matches!(s.body, SectionBody::Gallery { .. }))
            .count();
        if galleries > 1 {
            problems.push(format!("{} gallery sections, at most one allowed", galleries));
        }

        let faqs = self
            .sections
            .iter()
            .filter(|s| matches!(s.body, SectionBody::Faq { .. }))
            .count();
        if faqs > 1 {
            problems.push(format!("{} faq sections, at most one allowed", faqs));
        }

        if let Some(site_url) = &self.meta.site_url {
            if url::Url::parse(site_url).is_err() {
                problems.push(format!("invalid site_url '{}'", site_url));
            }
        }
        if let Some(cta) = self.hero_cta() {
            if url::Url::parse(&cta.url).is_err() {
                problems.push(format!("invalid call-to-action url '{}'", cta.url));
            }
        }

        problems
    }
}
