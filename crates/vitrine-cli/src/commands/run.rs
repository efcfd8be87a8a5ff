use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::sync::{mpsc, watch};
use tracing::warn;

use vitrine_core::{
    carousel::{CarouselCommand, CarouselEvent, CarouselService, Rotator},
    AppConfig, Page,
};
use vitrine_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    widgets::{BodyWidget, HeaderWidget, HelpWidget, MenuWidget, StatusBarWidget},
    Theme,
};

pub async fn run(config: Arc<AppConfig>, page_path: Option<PathBuf>) -> Result<()> {
    // Explicit path beats the configured default; otherwise the embedded
    // sample keeps the viewer usable out of the box
    let page = match page_path.or_else(|| config.general.page_path.clone()) {
        Some(path) => Page::load(&path)?,
        None => Page::sample(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle(page.meta.title.clone()))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, config, page).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: Arc<AppConfig>,
    page: Page,
) -> Result<()> {
    let mut app = App::new(page, config.clone(), Theme::default());

    // Carousel driver: events in, manual-rotation commands out
    let (event_tx, mut carousel_rx) = mpsc::unbounded_channel::<CarouselEvent>();
    let (command_tx, command_rx) = mpsc::unbounded_channel::<CarouselCommand>();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let rotator = Rotator::new(app.page.gallery_cards().len());
    let service = CarouselService::new(rotator, config.carousel.clone())
        .with_event_sender(event_tx)
        .with_command_receiver(command_rx);
    let carousel_task = tokio::spawn(service.run(shutdown_rx));

    let event_handler = EventHandler::new(config.ui.tick_rate_ms, config.ui.scroll.animation_fps);

    let header_rows = config.ui.header_rows;

    // Main loop
    loop {
        // Apply any completed rotations (non-blocking)
        while let Ok(event) = carousel_rx.try_recv() {
            match event {
                CarouselEvent::Rotated {
                    current,
                    assignments,
                } => app.set_carousel(current, assignments),
            }
        }

        // Advance the scroll animation
        app.update_scroll();

        // Compose against the current size, then draw
        let size = terminal.size()?;
        let body_height = size.height.saturating_sub(header_rows + 1);
        let composed = app.compose(size.width);
        app.sync_layout(&composed, body_height);

        terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(header_rows),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ])
                .split(frame.area());

            HeaderWidget::render(frame, chunks[0], &app);
            BodyWidget::render(frame, chunks[1], &app, &composed);
            StatusBarWidget::render(frame, chunks[2], &app);

            match app.mode {
                Mode::Menu => MenuWidget::render(frame, &app),
                Mode::Help => HelpWidget::render(frame, &app),
                Mode::Normal => {}
            }
        })?;

        // Handle input
        if let Some(event) = event_handler.next(app.scroller.needs_update())? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app);
                    apply_action(&mut app, action, &command_tx);
                }
                AppEvent::Resize(_, _) | AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Stop the carousel driver
    let _ = shutdown_tx.send(true);
    let _ = carousel_task.await;

    Ok(())
}

fn apply_action(app: &mut App, action: Action, command_tx: &mpsc::UnboundedSender<CarouselCommand>) {
    // Any action other than the first 'g' cancels the pending sequence
    if action == Action::PendingG {
        app.pending_key = Some('g');
        return;
    }
    app.clear_pending_key();

    match action {
        Action::Quit => app.should_quit = true,
        Action::ScrollDown => app.scroll_down(),
        Action::ScrollUp => app.scroll_up(),
        Action::HalfPageDown => app.half_page_down(),
        Action::HalfPageUp => app.half_page_up(),
        Action::JumpToTop => app.jump_to_top(),
        Action::JumpToBottom => app.jump_to_bottom(),
        Action::NextSection => app.next_section(),
        Action::PrevSection => app.prev_section(),
        Action::ToggleMenu => app.toggle_menu(),
        Action::MenuDown => app.menu_down(),
        Action::MenuUp => app.menu_up(),
        Action::MenuSelect => app.activate_selected_link(),
        Action::MenuJump(index) => app.activate_menu_link(index),
        Action::FaqDown => app.faq_down(),
        Action::FaqUp => app.faq_up(),
        Action::FaqToggle => app.faq_toggle(),
        Action::RotateNow => {
            // Dropped by the driver if the previous transition is settling
            if command_tx.send(CarouselCommand::RotateNow).is_err() {
                warn!("carousel driver gone, manual rotation ignored");
            }
        }
        Action::OpenLink => open_page_link(app),
        Action::Help => app.mode = Mode::Help,
        Action::ExitMode => app.escape(),
        Action::PendingG | Action::None => {}
    }
}

/// Open the hero call-to-action (or the site URL) in the system browser
fn open_page_link(app: &mut App) {
    let url = app
        .page
        .hero_cta()
        .map(|cta| cta.url.clone())
        .or_else(|| app.page.meta.site_url.clone());

    match url {
        Some(url) => match open::that(&url) {
            Ok(()) => app.set_status(format!("Opened {}", url)),
            Err(e) => app.set_status(format!("Could not open {}: {}", url, e)),
        },
        None => app.set_status("This page has no link to open"),
    }
}
