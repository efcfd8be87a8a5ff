use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

const BINDINGS: &[(&str, &str)] = &[
    ("j / k", "scroll"),
    ("ctrl-d / ctrl-u", "half page"),
    ("gg / G", "top / bottom"),
    ("tab / shift-tab", "next / previous section"),
    ("m", "nav menu"),
    ("J / K", "move in FAQ"),
    ("enter", "toggle FAQ answer"),
    ("r", "rotate gallery"),
    ("o", "open link in browser"),
    ("q", "quit"),
];

/// Keybinding overlay; any key dismisses it
pub struct HelpWidget;

impl HelpWidget {
    pub fn render(frame: &mut Frame, app: &App) {
        let theme = &app.theme;
        let area = frame.area();

        let width = 44u16.min(area.width.saturating_sub(4));
        let height = (BINDINGS.len() as u16 + 2).min(area.height.saturating_sub(2));
        let popup = centered_rect(width, height, area);

        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, what)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:<16}", key),
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(what.to_string(), Style::default().fg(theme.fg1)),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
