//! The rotating card strip.
//!
//! The slot assignment comes from the carousel rotator; this module only
//! draws it. The centered card renders as a framed box with its caption,
//! its left/right neighbors as flanking titles, and the dot row shows
//! where the strip currently stands. Hidden cards stay hidden, exactly as
//! their slots say.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use vitrine_core::carousel::CardPosition;
use vitrine_core::page::Card;

use crate::layout::{center, wrap};
use crate::theme::Theme;

const CAPTION_ROWS: usize = 2;

pub fn gallery_lines(
    cards: &[Card],
    positions: &[CardPosition],
    width: u16,
    theme: &Theme,
) -> Vec<Line<'static>> {
    if cards.is_empty() {
        return vec![Line::from(Span::styled(
            center("(no screens yet)", width),
            Style::default().fg(theme.dim),
        ))];
    }

    let card_at = |wanted: CardPosition| {
        positions
            .iter()
            .position(|p| *p == wanted)
            .and_then(|i| cards.get(i))
    };

    let left = card_at(CardPosition::Left);
    let centered = card_at(CardPosition::Center);
    let right = card_at(CardPosition::Right);

    let mut out = Vec::new();

    // Neighbor row: previous card to the left, next card to the right
    let left_label = left.map(|c| format!("◂ {}", c.title)).unwrap_or_default();
    let right_label = right.map(|c| format!("{} ▸", c.title)).unwrap_or_default();
    let gap = (width as usize)
        .saturating_sub(left_label.width() + right_label.width() + 4);
    out.push(Line::from(vec![
        Span::styled(format!("  {}", left_label), Style::default().fg(theme.dim)),
        Span::raw(" ".repeat(gap)),
        Span::styled(format!("{}  ", right_label), Style::default().fg(theme.dim)),
    ]));

    // Centered card as a framed box
    let box_width = (width as usize).saturating_sub(8).clamp(16, 48);
    let inner = box_width - 4;
    let margin = " ".repeat(((width as usize).saturating_sub(box_width)) / 2);

    let border = Style::default().fg(theme.accent);
    out.push(Line::from(Span::styled(
        format!("{}┌{}┐", margin, "─".repeat(box_width - 2)),
        border,
    )));

    if let Some(card) = centered {
        out.push(boxed_row(
            &card.title,
            inner,
            &margin,
            Style::default()
                .fg(theme.fg0)
                .add_modifier(Modifier::BOLD),
            border,
        ));
        let mut caption_rows = wrap(&card.caption, inner as u16);
        caption_rows.truncate(CAPTION_ROWS);
        while caption_rows.len() < CAPTION_ROWS {
            caption_rows.push(String::new());
        }
        for row in caption_rows {
            out.push(boxed_row(
                &row,
                inner,
                &margin,
                Style::default().fg(theme.fg1),
                border,
            ));
        }
    } else {
        for _ in 0..=CAPTION_ROWS {
            out.push(boxed_row(
                "",
                inner,
                &margin,
                Style::default().fg(theme.dim),
                border,
            ));
        }
    }

    out.push(Line::from(Span::styled(
        format!("{}└{}┘", margin, "─".repeat(box_width - 2)),
        border,
    )));

    // Dot row: one dot per card, filled for the centered one
    let dots = positions
        .iter()
        .map(|p| if *p == CardPosition::Center { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ");
    out.push(Line::from(Span::styled(
        center(&dots, width),
        Style::default().fg(theme.accent),
    )));

    out
}

fn boxed_row(
    text: &str,
    inner: usize,
    margin: &str,
    text_style: Style,
    border: Style,
) -> Line<'static> {
    let pad = inner.saturating_sub(text.width());
    Line::from(vec![
        Span::styled(format!("{}│ ", margin), border),
        Span::styled(text.to_string(), text_style),
        Span::raw(" ".repeat(pad)),
        Span::styled(" │".to_string(), border),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::carousel::Rotator;

    fn cards(n: usize) -> Vec<Card> {
        (0..n)
            .map(|i| Card {
                title: format!("Card {}", i),
                caption: format!("Caption {}", i),
            })
            .collect()
    }

    #[test]
    fn test_empty_gallery_renders_placeholder() {
        let lines = gallery_lines(&[], &[], 80, &Theme::default());
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_height_is_stable_across_rotation() {
        let cards = cards(6);
        let mut rotator = Rotator::new(6);
        let before = gallery_lines(&cards, &rotator.assignments(), 80, &Theme::default()).len();

        let mut surface = rotator.assignments();
        rotator.rotate(&mut surface);
        let after = gallery_lines(&cards, &surface, 80, &Theme::default()).len();

        // Anchors depend on section heights staying put while rotating
        assert_eq!(before, after);
    }

    #[test]
    fn test_centered_card_title_appears() {
        let cards = cards(6);
        let rotator = Rotator::new(6);
        let lines = gallery_lines(&cards, &rotator.assignments(), 80, &Theme::default());
        let text: String = lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect();
        assert!(text.contains("Card 0"));
        // Neighbors flank the center
        assert!(text.contains("◂ Card 5"));
        assert!(text.contains("Card 1 ▸"));
    }
}
