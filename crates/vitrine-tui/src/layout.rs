//! Composes a [`Page`] into styled terminal lines.
//!
//! The page is laid out as one vertical strip of lines; the body widget
//! shows a viewport-sized window into it. Section tops and heights are
//! recorded while composing, since anchors, the reveal tracker and the
//! scroller all work in page rows. Heights depend on the accordion state,
//! so composition runs every frame.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use vitrine_core::carousel::CardPosition;
use vitrine_core::page::{Page, SectionBody};
use vitrine_core::reveal::RevealTracker;

use crate::theme::Theme;
use crate::widgets::{faq_lines, gallery_lines};

/// Where a section landed in the composed strip, in page rows
#[derive(Debug, Clone)]
pub struct SectionSpan {
    pub id: String,
    pub top: u16,
    pub height: u16,
}

/// A fully composed page
pub struct ComposedPage {
    pub lines: Vec<Line<'static>>,
    pub sections: Vec<SectionSpan>,
}

impl ComposedPage {
    pub fn total_height(&self) -> u16 {
        self.lines.len().min(u16::MAX as usize) as u16
    }

    /// `(top, height)` per section, for the reveal tracker
    pub fn section_layouts(&self) -> Vec<(u16, u16)> {
        self.sections.iter().map(|s| (s.top, s.height)).collect()
    }

    pub fn section_top(&self, index: usize) -> Option<u16> {
        self.sections.get(index).map(|s| s.top)
    }

    /// Index of the section covering the given offset
    pub fn section_at(&self, offset: u16) -> Option<usize> {
        self.sections.iter().rposition(|s| s.top <= offset)
    }
}

/// Accordion and carousel state the composition needs from the app
pub struct ComposeState<'a> {
    pub carousel: &'a [CardPosition],
    pub faq_open: Option<usize>,
    pub faq_cursor: usize,
    pub reveal: &'a RevealTracker,
}

pub fn compose(page: &Page, width: u16, state: &ComposeState, theme: &Theme) -> ComposedPage {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut sections: Vec<SectionSpan> = Vec::new();

    for (index, section) in page.sections.iter().enumerate() {
        let top = lines.len().min(u16::MAX as usize) as u16;

        let mut body = match &section.body {
            SectionBody::Hero { heading, lead, cta } => {
                hero_lines(heading, lead, cta.as_ref().map(|c| c.label.as_str()), width, theme)
            }
            SectionBody::Prose { paragraphs } => {
                prose_lines(&section.title, paragraphs, width, theme)
            }
            SectionBody::Gallery { cards } => {
                let mut out = title_lines(&section.title, width, theme);
                out.extend(gallery_lines(cards, state.carousel, width, theme));
                out
            }
            SectionBody::Faq { entries } => {
                let mut out = title_lines(&section.title, width, theme);
                out.extend(faq_lines(
                    entries,
                    state.faq_open,
                    state.faq_cursor,
                    width,
                    theme,
                ));
                out
            }
        };
        body.push(Line::default());

        // Sections outside the reveal set render dimmed until they scroll in
        if !state.reveal.is_revealed(index) {
            body = body.into_iter().map(|line| dim_line(line, theme)).collect();
        }

        let height = body.len().min(u16::MAX as usize) as u16;
        sections.push(SectionSpan {
            id: section.id.clone(),
            top,
            height,
        });
        lines.extend(body);
    }

    ComposedPage { lines, sections }
}

fn hero_lines(
    heading: &str,
    lead: &str,
    cta_label: Option<&str>,
    width: u16,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut out = vec![Line::default()];

    for row in wrap(heading, width) {
        out.push(Line::from(Span::styled(
            center(&row, width),
            Style::default()
                .fg(theme.heading)
                .add_modifier(Modifier::BOLD),
        )));
    }
    out.push(Line::default());

    for row in wrap(lead, width.saturating_sub(4)) {
        out.push(Line::from(Span::styled(
            center(&row, width),
            Style::default().fg(theme.fg1),
        )));
    }

    if let Some(label) = cta_label {
        out.push(Line::default());
        let button = format!("[ {} ]", label);
        out.push(Line::from(Span::styled(
            center(&button, width),
            Style::default()
                .fg(theme.bg0)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
    }
    out.push(Line::default());
    out
}

fn prose_lines(title: &str, paragraphs: &[String], width: u16, theme: &Theme) -> Vec<Line<'static>> {
    let mut out = title_lines(title, width, theme);
    for (i, paragraph) in paragraphs.iter().enumerate() {
        if i > 0 {
            out.push(Line::default());
        }
        for row in wrap(paragraph, width.saturating_sub(2)) {
            out.push(Line::from(Span::styled(
                format!("  {}", row),
                Style::default().fg(theme.fg0),
            )));
        }
    }
    out
}

/// Section heading with a rule, skipped for untitled sections
fn title_lines(title: &str, width: u16, theme: &Theme) -> Vec<Line<'static>> {
    if title.is_empty() {
        return vec![Line::default()];
    }
    let rule_width = (width as usize).saturating_sub(title.width() + 4);
    vec![
        Line::default(),
        Line::from(vec![
            Span::styled(
                format!("── {} ", title),
                Style::default()
                    .fg(theme.heading)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("─".repeat(rule_width), Style::default().fg(theme.bg2)),
        ]),
        Line::default(),
    ]
}

fn dim_line(line: Line<'static>, theme: &Theme) -> Line<'static> {
    let spans = line
        .spans
        .into_iter()
        .map(|span| {
            Span::styled(
                span.content,
                Style::default().fg(theme.dim).add_modifier(Modifier::DIM),
            )
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

/// Word-wrap `text` to `width` display columns
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();

    for raw in text.lines() {
        let mut line = String::new();
        let mut line_width = 0usize;
        for word in raw.split_whitespace() {
            let word_width = word.width();
            if line_width == 0 {
                line.push_str(word);
                line_width = word_width;
            } else if line_width + 1 + word_width <= width {
                line.push(' ');
                line.push_str(word);
                line_width += 1 + word_width;
            } else {
                lines.push(std::mem::take(&mut line));
                line.push_str(word);
                line_width = word_width;
            }
        }
        lines.push(line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Center `text` in `width` display columns
pub fn center(text: &str, width: u16) -> String {
    let pad = (width as usize).saturating_sub(text.width()) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::config::RevealConfig;

    fn composed(width: u16) -> ComposedPage {
        let page = Page::sample();
        let reveal = RevealTracker::new(page.sections.len(), RevealConfig::default());
        let carousel = vec![CardPosition::HiddenRight; page.gallery_cards().len()];
        let state = ComposeState {
            carousel: &carousel,
            faq_open: None,
            faq_cursor: 0,
            reveal: &reveal,
        };
        compose(&page, width, &state, &Theme::default())
    }

    #[test]
    fn test_sections_are_contiguous() {
        let composed = composed(80);
        let mut expected_top = 0u16;
        for span in &composed.sections {
            assert_eq!(span.top, expected_top);
            expected_top += span.height;
        }
        assert_eq!(expected_top, composed.total_height());
    }

    #[test]
    fn test_open_faq_entry_grows_its_section() {
        let page = Page::sample();
        let reveal = RevealTracker::new(page.sections.len(), RevealConfig::default());
        let carousel = vec![CardPosition::HiddenRight; page.gallery_cards().len()];
        let closed = compose(
            &page,
            80,
            &ComposeState {
                carousel: &carousel,
                faq_open: None,
                faq_cursor: 0,
                reveal: &reveal,
            },
            &Theme::default(),
        );
        let open = compose(
            &page,
            80,
            &ComposeState {
                carousel: &carousel,
                faq_open: Some(0),
                faq_cursor: 0,
                reveal: &reveal,
            },
            &Theme::default(),
        );

        let faq_index = page.faq_section_index().unwrap();
        assert!(open.sections[faq_index].height > closed.sections[faq_index].height);
    }

    #[test]
    fn test_section_at_maps_offsets() {
        let composed = composed(80);
        assert_eq!(composed.section_at(0), Some(0));
        let last = composed.sections.len() - 1;
        assert_eq!(
            composed.section_at(composed.sections[last].top),
            Some(last)
        );
    }

    #[test]
    fn test_wrap_respects_width() {
        let rows = wrap("one two three four five six seven", 10);
        assert!(rows.len() > 1);
        for row in &rows {
            assert!(row.width() <= 10, "'{}' too wide", row);
        }
    }

    #[test]
    fn test_wrap_empty_text_yields_one_blank_row() {
        assert_eq!(wrap("", 20), vec![String::new()]);
    }
}
