use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Focus};
use crate::config;
use crate::ui;

/// State tracked by the runtime event loop across iterations.
#[derive(Debug, Default)]
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
}

/// Main terminal event loop: draws, then applies one key event at a time.
/// Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let display = app.display_indices();
        terminal.draw(|f| ui::draw(f, app, &display, &settings.ui, &settings.controls))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, state) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Apply a key press to `app`. Returns true when the user asked to quit.
pub fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    state: &mut EventLoopState,
) -> bool {
    // Status messages last until the next key press.
    app.status = None;

    if app.filter_mode {
        state.pending_gg = false;
        handle_filter_key(key, app);
        return false;
    }

    let scrub = i64::from(settings.controls.scrub_seconds);
    let volume_step = i16::from(settings.controls.volume_step);

    match key.code {
        KeyCode::Char('q') => {
            state.pending_gg = false;
            return true;
        }
        KeyCode::Char('/') => {
            state.pending_gg = false;
            app.enter_filter_mode();
        }
        KeyCode::Tab => {
            state.pending_gg = false;
            app.toggle_focus();
        }
        KeyCode::Char('g') => {
            if state.pending_gg {
                state.pending_gg = false;
                app.cursor_to_top();
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => {
            state.pending_gg = false;
            app.cursor_to_bottom();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            state.pending_gg = false;
            app.cursor_down();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.pending_gg = false;
            app.cursor_up();
        }
        KeyCode::Enter => {
            state.pending_gg = false;
            match app.focus {
                Focus::Tracks => {
                    app.play_cursor();
                }
                Focus::Playlists => app.activate_playlist(),
            }
        }
        KeyCode::Char('p') | KeyCode::Char(' ') => {
            state.pending_gg = false;
            app.toggle_play();
        }
        KeyCode::Char('l') => {
            state.pending_gg = false;
            app.next_track();
        }
        KeyCode::Char('h') => {
            state.pending_gg = false;
            app.previous_track();
        }
        KeyCode::Char('L') => {
            state.pending_gg = false;
            app.scrub(scrub);
        }
        KeyCode::Char('H') => {
            state.pending_gg = false;
            app.scrub(-scrub);
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            state.pending_gg = false;
            app.adjust_volume(volume_step);
        }
        KeyCode::Char('-') => {
            state.pending_gg = false;
            app.adjust_volume(-volume_step);
        }
        KeyCode::Char(c @ '0'..='5') => {
            state.pending_gg = false;
            rate_cursor(app, c);
        }
        KeyCode::Char(']') => {
            state.pending_gg = false;
            app.cycle_genre(true);
        }
        KeyCode::Char('[') => {
            state.pending_gg = false;
            app.cycle_genre(false);
        }
        KeyCode::Char('K') => {
            state.pending_gg = false;
            app.toggle_details_window();
        }
        KeyCode::Esc => {
            state.pending_gg = false;
            app.details_window = false;
        }
        KeyCode::Char(_) => {
            // g pending should clear on any other printable char
            state.pending_gg = false;
        }
        _ => {}
    }

    false
}

fn handle_filter_key(key: KeyEvent, app: &mut App) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => app.clear_filter(),
        KeyCode::Backspace => app.pop_filter_char(),
        KeyCode::Down => app.cursor_down(),
        KeyCode::Up => app.cursor_up(),
        KeyCode::Char('j') | KeyCode::Char('n') if ctrl => app.cursor_down(),
        KeyCode::Char('k') | KeyCode::Char('p') if ctrl => app.cursor_up(),
        KeyCode::Char(c) => {
            if !c.is_control() {
                app.push_filter_char(c);
            }
        }
        KeyCode::Enter => {
            if app.display_indices().is_empty() {
                return;
            }
            app.exit_filter_mode();
            app.play_cursor();
        }
        _ => {}
    }
}

fn rate_cursor(app: &mut App, digit: char) {
    let Some(raw) = digit.to_digit(10).and_then(|d| u8::try_from(d).ok()) else {
        return;
    };
    match app.rate_cursor(raw) {
        Ok(true) => {
            if let Some(track) = app.cursor_track() {
                app.status = Some(format!("Rated {}: {}", track.title, track.rating));
            }
        }
        Ok(false) => {}
        Err(e) => {
            tracing::warn!("rating rejected: {e}");
            app.status = Some(e.to_string());
        }
    }
}
