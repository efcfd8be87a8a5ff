//! FAQ accordion: a list of questions with at most one answer expanded.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use vitrine_core::page::FaqEntry;

use crate::layout::wrap;
use crate::theme::Theme;

pub fn faq_lines(
    entries: &[FaqEntry],
    open: Option<usize>,
    cursor: usize,
    width: u16,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut out = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        let expanded = open == Some(index);
        let marker = if expanded { "▾" } else { "▸" };

        let question_style = if index == cursor {
            Style::default()
                .fg(theme.fg0)
                .bg(theme.bg2)
                .add_modifier(Modifier::BOLD)
        } else if expanded {
            Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg1)
        };

        out.push(Line::from(vec![
            Span::styled(format!("  {} ", marker), Style::default().fg(theme.accent)),
            Span::styled(entry.question.clone(), question_style),
        ]));

        if expanded {
            for row in wrap(&entry.answer, width.saturating_sub(6)) {
                out.push(Line::from(Span::styled(
                    format!("      {}", row),
                    Style::default().fg(theme.fg1),
                )));
            }
            out.push(Line::default());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<FaqEntry> {
        (0..3)
            .map(|i| FaqEntry {
                question: format!("Question {}?", i),
                answer: format!("Answer {}", i),
            })
            .collect()
    }

    #[test]
    fn test_collapsed_list_is_one_row_per_entry() {
        let lines = faq_lines(&entries(), None, 0, 80, &Theme::default());
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_open_entry_adds_answer_rows() {
        let closed = faq_lines(&entries(), None, 0, 80, &Theme::default()).len();
        let open = faq_lines(&entries(), Some(1), 0, 80, &Theme::default()).len();
        assert!(open > closed);
    }

    #[test]
    fn test_only_open_entry_shows_expanded_marker() {
        let lines = faq_lines(&entries(), Some(2), 0, 80, &Theme::default());
        let text: Vec<String> = lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.to_string())
                    .collect::<String>()
            })
            .collect();
        assert_eq!(text.iter().filter(|t| t.contains('▾')).count(), 1);
        assert_eq!(text.iter().filter(|t| t.contains('▸')).count(), 2);
    }
}
