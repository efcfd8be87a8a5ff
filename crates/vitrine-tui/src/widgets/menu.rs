use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

/// Nav menu overlay; while it is up the page behind it does not scroll
pub struct MenuWidget;

impl MenuWidget {
    pub fn render(frame: &mut Frame, app: &App) {
        let theme = &app.theme;
        let area = frame.area();

        let width = 36u16.min(area.width.saturating_sub(4));
        let height = (app.page.nav.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup = centered_rect(width, height, area);

        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Navigate ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let mut lines = Vec::new();
        for (i, link) in app.page.nav.iter().enumerate() {
            let selected = i == app.menu_selected;
            let style = if selected {
                Style::default()
                    .fg(theme.fg0)
                    .bg(theme.bg2)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg1)
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", i + 1), Style::default().fg(theme.dim)),
                Span::styled(format!(" {} ", link.label), style),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            " ↵ go · esc close",
            Style::default().fg(theme.dim),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
