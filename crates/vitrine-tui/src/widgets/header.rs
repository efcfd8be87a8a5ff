use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

/// Fixed header: brand on the left, nav labels on the right, and a shadow
/// rule on the second row once the page has scrolled past the threshold.
pub struct HeaderWidget;

impl HeaderWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let brand = format!(" {} ", app.page.meta.title);

        let mut nav_text = String::new();
        for (i, link) in app.page.nav.iter().enumerate() {
            if i > 0 {
                nav_text.push_str("   ");
            }
            nav_text.push_str(&link.label);
        }
        nav_text.push_str("   [m]enu ");

        let gap = (area.width as usize).saturating_sub(brand.width() + nav_text.width());

        let bar = Line::from(vec![
            Span::styled(
                brand,
                Style::default()
                    .fg(theme.accent)
                    .bg(theme.bg1)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ".repeat(gap), Style::default().bg(theme.bg1)),
            Span::styled(nav_text, Style::default().fg(theme.fg1).bg(theme.bg1)),
        ]);

        // The shadow row is blank until the scroll threshold is crossed
        let shadow = if app.header_shadow() {
            Line::from(Span::styled(
                "▀".repeat(area.width as usize),
                Style::default().fg(theme.bg2),
            ))
        } else {
            Line::default()
        };

        frame.render_widget(Paragraph::new(vec![bar, shadow]), area);
    }
}
