use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let mode_str = match app.mode {
            Mode::Normal => "NORMAL",
            Mode::Menu => "MENU",
            Mode::Help => "HELP",
        };

        let section = app
            .current_section()
            .and_then(|i| app.page.sections.get(i))
            .map(|s| s.id.as_str())
            .unwrap_or("-");

        let percent = if app.max_scroll() == 0 {
            100
        } else {
            (app.scroller.current_scroll() as u32 * 100 / app.max_scroll() as u32).min(100)
        };

        let cards = if app.carousel_positions.is_empty() {
            String::new()
        } else {
            format!(
                " | card {}/{}",
                app.carousel_current + 1,
                app.carousel_positions.len()
            )
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(" {} | #{} | {}%{}", mode_str, section, percent, cards)
        };

        let help_hint = " m:menu tab:sections ?:help q:quit ";
        let padding = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.dim).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
