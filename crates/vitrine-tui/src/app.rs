use std::sync::Arc;

use vitrine_core::carousel::{CardPosition, Rotator};
use vitrine_core::page::Page;
use vitrine_core::reveal::RevealTracker;
use vitrine_core::AppConfig;

use crate::layout::{compose, ComposeState, ComposedPage};
use crate::scroll::PageScroller;
use crate::theme::Theme;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal browsing
    Normal,
    /// Nav menu overlay open; page scrolling is locked
    Menu,
    /// Help overlay
    Help,
}

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub page: Page,
    pub theme: Theme,
    /// Current application mode
    pub mode: Mode,
    /// Page scroll state
    pub scroller: PageScroller,
    /// One-way entrance reveal per section
    pub reveal: RevealTracker,
    /// Index of the card holding the center slot
    pub carousel_current: usize,
    /// Latest slot assignment from the carousel driver
    pub carousel_positions: Vec<CardPosition>,
    /// FAQ entry under the cursor
    pub faq_cursor: usize,
    /// The open FAQ entry, if any (at most one)
    pub faq_open: Option<usize>,
    /// Selected link in the nav menu
    pub menu_selected: usize,
    /// Pending key for multi-key sequences (e.g. 'gg')
    pub pending_key: Option<char>,
    /// Status message
    pub status_message: Option<String>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Body viewport height in rows
    pub viewport_height: u16,
    /// Composed page height in rows
    page_height: u16,
    /// `(top, height)` per section, from the last composition
    section_layouts: Vec<(u16, u16)>,
}

impl App {
    pub fn new(page: Page, config: Arc<AppConfig>, theme: Theme) -> Self {
        let sections = page.sections.len();
        let cards = page.gallery_cards().len();
        let scroller = PageScroller::new(config.ui.scroll.clone());
        let reveal = RevealTracker::new(sections, config.reveal.clone());

        Self {
            config,
            page,
            theme,
            mode: Mode::Normal,
            scroller,
            reveal,
            carousel_current: 0,
            carousel_positions: Rotator::new(cards).assignments(),
            faq_cursor: 0,
            faq_open: None,
            menu_selected: 0,
            pending_key: None,
            status_message: None,
            should_quit: false,
            viewport_height: 0,
            page_height: 0,
            section_layouts: Vec::new(),
        }
    }

    /// Compose the page for the given body width
    pub fn compose(&self, width: u16) -> ComposedPage {
        let state = ComposeState {
            carousel: &self.carousel_positions,
            faq_open: self.faq_open,
            faq_cursor: self.faq_cursor,
            reveal: &self.reveal,
        };
        compose(&self.page, width, &state, &self.theme)
    }

    /// Record layout results and re-observe reveals for the new window
    pub fn sync_layout(&mut self, composed: &ComposedPage, viewport_height: u16) {
        self.viewport_height = viewport_height;
        self.page_height = composed.total_height();
        self.section_layouts = composed.section_layouts();
        self.reveal.observe(
            &self.section_layouts,
            self.scroller.current_scroll(),
            viewport_height,
        );
    }

    /// Advance the scroll animation one frame
    pub fn update_scroll(&mut self) -> u16 {
        let max = self.max_scroll();
        self.scroller.update(max)
    }

    pub fn max_scroll(&self) -> u16 {
        self.page_height.saturating_sub(self.viewport_height)
    }

    /// Whether the header renders its scroll shadow
    pub fn header_shadow(&self) -> bool {
        self.scroller.current_scroll() > self.config.ui.shadow_threshold_rows
    }

    fn scroll_locked(&self) -> bool {
        self.mode == Mode::Menu
    }

    // -- scrolling ---------------------------------------------------------

    pub fn scroll_down(&mut self) {
        if self.scroll_locked() {
            return;
        }
        let max = self.max_scroll();
        self.scroller.step_down(max);
    }

    pub fn scroll_up(&mut self) {
        if self.scroll_locked() {
            return;
        }
        let max = self.max_scroll();
        self.scroller.step_up(max);
    }

    pub fn half_page_down(&mut self) {
        if self.scroll_locked() {
            return;
        }
        let (viewport, max) = (self.viewport_height, self.max_scroll());
        self.scroller.half_page_down(viewport, max);
    }

    pub fn half_page_up(&mut self) {
        if self.scroll_locked() {
            return;
        }
        let (viewport, max) = (self.viewport_height, self.max_scroll());
        self.scroller.half_page_up(viewport, max);
    }

    pub fn jump_to_top(&mut self) {
        if self.scroll_locked() {
            return;
        }
        self.scroller.animate_to(0, self.max_scroll());
    }

    pub fn jump_to_bottom(&mut self) {
        if self.scroll_locked() {
            return;
        }
        let max = self.max_scroll();
        self.scroller.animate_to(max, max);
    }

    // -- anchors -----------------------------------------------------------

    /// Smooth-scroll to a section anchor; unknown anchors are ignored
    pub fn jump_to_anchor(&mut self, anchor: &str) {
        let Some(index) = self.page.section_index(anchor) else {
            tracing::debug!("anchor '{}' matches no section, ignoring", anchor);
            return;
        };
        self.jump_to_section(index);
    }

    fn jump_to_section(&mut self, index: usize) {
        let Some(&(top, _)) = self.section_layouts.get(index) else {
            return;
        };
        let margin = self.config.ui.anchor_margin_rows;
        let target = top.saturating_sub(margin);
        let max = self.max_scroll();
        self.scroller.animate_to(target, max);
    }

    /// Section the (settled) scroll position sits in
    pub fn current_section(&self) -> Option<usize> {
        let margin = self.config.ui.anchor_margin_rows;
        let offset = self.scroller.target_scroll().saturating_add(margin);
        self.section_layouts.iter().rposition(|&(top, _)| top <= offset)
    }

    pub fn next_section(&mut self) {
        if self.scroll_locked() {
            return;
        }
        if let Some(current) = self.current_section() {
            if current + 1 < self.section_layouts.len() {
                self.jump_to_section(current + 1);
            }
        }
    }

    pub fn prev_section(&mut self) {
        if self.scroll_locked() {
            return;
        }
        if let Some(current) = self.current_section() {
            if current > 0 {
                self.jump_to_section(current - 1);
            }
        }
    }

    // -- nav menu ----------------------------------------------------------

    pub fn toggle_menu(&mut self) {
        self.mode = match self.mode {
            Mode::Menu => Mode::Normal,
            _ => Mode::Menu,
        };
    }

    pub fn close_menu(&mut self) {
        if self.mode == Mode::Menu {
            self.mode = Mode::Normal;
        }
    }

    pub fn menu_down(&mut self) {
        if !self.page.nav.is_empty() && self.menu_selected + 1 < self.page.nav.len() {
            self.menu_selected += 1;
        }
    }

    pub fn menu_up(&mut self) {
        self.menu_selected = self.menu_selected.saturating_sub(1);
    }

    /// Activate a nav link: close the menu, then scroll to its anchor
    pub fn activate_menu_link(&mut self, index: usize) {
        let Some(link) = self.page.nav.get(index) else {
            return;
        };
        let anchor = link.anchor.clone();
        self.close_menu();
        self.jump_to_anchor(&anchor);
    }

    pub fn activate_selected_link(&mut self) {
        self.activate_menu_link(self.menu_selected);
    }

    // -- FAQ accordion -----------------------------------------------------

    pub fn faq_len(&self) -> usize {
        self.page.faq_entries().len()
    }

    pub fn faq_down(&mut self) {
        let len = self.faq_len();
        if len > 0 && self.faq_cursor + 1 < len {
            self.faq_cursor += 1;
        }
    }

    pub fn faq_up(&mut self) {
        self.faq_cursor = self.faq_cursor.saturating_sub(1);
    }

    /// Toggle the entry under the cursor; opening one closes any other
    pub fn faq_toggle(&mut self) {
        if self.faq_len() == 0 {
            return;
        }
        self.faq_open = if self.faq_open == Some(self.faq_cursor) {
            None
        } else {
            Some(self.faq_cursor)
        };
    }

    /// Expanded state of entry `index` (the aria-expanded analog)
    pub fn faq_expanded(&self, index: usize) -> bool {
        self.faq_open == Some(index)
    }

    // -- carousel ----------------------------------------------------------

    pub fn set_carousel(&mut self, current: usize, positions: Vec<CardPosition>) {
        self.carousel_current = current;
        self.carousel_positions = positions;
    }

    // -- misc --------------------------------------------------------------

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }

    /// Escape: close whatever overlay is up, else clear the status line
    pub fn escape(&mut self) {
        match self.mode {
            Mode::Menu | Mode::Help => self.mode = Mode::Normal,
            Mode::Normal => self.clear_status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let mut app = App::new(
            Page::sample(),
            Arc::new(AppConfig::default()),
            Theme::default(),
        );
        let composed = app.compose(80);
        app.sync_layout(&composed, 24);
        app
    }

    #[test]
    fn test_open_menu_locks_scrolling() {
        let mut app = app();
        app.toggle_menu();
        assert_eq!(app.mode, Mode::Menu);

        app.scroll_down();
        app.half_page_down();
        app.jump_to_bottom();
        app.update_scroll();
        assert_eq!(app.scroller.target_scroll(), 0);
    }

    #[test]
    fn test_escape_closes_menu() {
        let mut app = app();
        app.toggle_menu();
        app.escape();
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn test_menu_link_closes_menu_and_scrolls() {
        let mut app = app();
        app.toggle_menu();
        app.activate_menu_link(0);
        assert_eq!(app.mode, Mode::Normal);

        let anchor = app.page.nav[0].anchor.clone();
        let index = app.page.section_index(&anchor).unwrap();
        let top = app.section_layouts[index].0;
        let expected = top.saturating_sub(app.config.ui.anchor_margin_rows);
        assert_eq!(app.scroller.target_scroll(), expected.min(app.max_scroll()));
    }

    #[test]
    fn test_unknown_anchor_is_ignored() {
        let mut app = app();
        app.jump_to_anchor("nowhere");
        assert_eq!(app.scroller.target_scroll(), 0);
    }

    #[test]
    fn test_accordion_keeps_at_most_one_open() {
        let mut app = app();
        app.faq_toggle();
        assert!(app.faq_expanded(0));

        app.faq_down();
        app.faq_toggle();
        assert!(app.faq_expanded(1));
        assert!(!app.faq_expanded(0));

        // Toggling the open entry closes it
        app.faq_toggle();
        assert_eq!(app.faq_open, None);
    }

    #[test]
    fn test_header_shadow_follows_threshold() {
        let mut app = app();
        assert!(!app.header_shadow());

        let threshold = app.config.ui.shadow_threshold_rows;
        app.scroller.set_scroll(threshold);
        assert!(!app.header_shadow());

        app.scroller.set_scroll(threshold + 1);
        assert!(app.header_shadow());
    }

    #[test]
    fn test_section_navigation_moves_target() {
        let mut app = app();
        app.next_section();
        app.update_scroll();
        let first_jump = app.scroller.target_scroll();
        assert!(first_jump > 0);

        app.prev_section();
        app.update_scroll();
        assert_eq!(app.scroller.target_scroll(), 0);
    }
}
