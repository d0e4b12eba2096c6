pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
pub use theme::{resolve_theme, Theme, ThemeColors};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};

use crate::share::SharePlatform;
use app::{InputMode, Step};

const TICK_RATE_MS: u64 = 100;

pub async fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Buffer log output while TUI is active to prevent it corrupting the display
    crate::log_buffer::activate();

    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();
    let mut events = EventHandler::new(TICK_RATE_MS);

    let outcome = loop {
        if let Err(e) = terminal.draw(|frame| ui::draw(frame, &app)) {
            break Err(e.into());
        }

        match events.next().await {
            Event::Key(key) => handle_key_event(&mut app, key),
            Event::Tick => app.on_tick(),
        }

        // Collect a finished certificate export
        app.poll_export().await;

        if app.should_quit {
            break Ok(());
        }
    };

    ratatui::restore();

    // Flush buffered log lines now that the terminal is restored
    for line in crate::log_buffer::drain() {
        eprintln!("{}", line);
    }

    outcome
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.input_mode {
        // Any key closes a popup
        InputMode::NameRequired | InputMode::Help => app.dismiss_popup(),
        InputMode::Normal => match app.step {
            Step::Landing => match key.code {
                KeyCode::Enter => app.start_assessment(),
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Backspace => {
                    app.name.pop();
                }
                KeyCode::Char(c) if !c.is_control() => app.name.push(c),
                _ => {}
            },
            Step::Quiz => match key.code {
                KeyCode::Char(c @ '1'..='4') => {
                    let index = c as usize - '1' as usize;
                    app.answer(index);
                }
                KeyCode::Char('j') | KeyCode::Down => app.next_option(),
                KeyCode::Char('k') | KeyCode::Up => app.previous_option(),
                KeyCode::Enter => app.answer_selected(),
                KeyCode::Char('?') => app.show_help(),
                KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                _ => {}
            },
            Step::Analyzing => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    app.should_quit = true;
                }
            }
            Step::Result => match key.code {
                KeyCode::Char('w') => app.share(SharePlatform::WhatsApp),
                KeyCode::Char('l') => app.share(SharePlatform::LinkedIn),
                KeyCode::Char('d') => app.download_certificate(),
                KeyCode::Char('r') => app.retake(),
                KeyCode::Char('?') => app.show_help(),
                KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                _ => {}
            },
        },
    }
}
