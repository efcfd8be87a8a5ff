use ratatui::{
    layout::Rect,
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::layout::ComposedPage;

/// The scrolling page viewport
pub struct BodyWidget;

impl BodyWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, composed: &ComposedPage) {
        let paragraph = Paragraph::new(composed.lines.clone())
            .style(Style::default().bg(app.theme.bg0))
            .scroll((app.scroller.current_scroll(), 0));
        frame.render_widget(paragraph, area);
    }
}
