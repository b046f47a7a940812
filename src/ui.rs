//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the catalog browser using
//! `ratatui`: header, search/genre bar, playlist tiles, the track list, the
//! transport bar and the controls footer.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Clear, LineGauge, List, ListItem, ListState, Padding,
        Paragraph, Wrap,
    },
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::{App, Focus};
use crate::catalog::{Rating, Track, match_span};
use crate::config::{ControlsSettings, UiSettings};

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("j/k", "up/down");
    map.insert("gg/G", "top/bottom");
    map.insert("tab", "playlists/tracks");
    map.insert("enter", "play selected");
    map.insert("space/p", "play/pause");
    map.insert("h/l", "prev/next track");
    // H/L is filled dynamically from config.
    map.insert("-/+", "volume");
    map.insert("0-5", "rate");
    map.insert("[/]", "genre");
    map.insert("/", "search");
    map.insert("K", "details");
    map.insert("q", "quit");
    map
});

/// Render the controls help text, incorporating scrub seconds.
fn controls_text(scrub_seconds: u32) -> String {
    // Keep the rendered order stable and human-friendly.
    let order = [
        "j/k", "gg/G", "tab", "enter", "space/p", "h/l", "H/L", "-/+", "0-5", "[/]", "/", "K",
        "q",
    ];
    order
        .iter()
        .filter_map(|k| {
            if *k == "H/L" {
                Some(format!("[H/L] scrub -/+{}s", scrub_seconds))
            } else {
                CONTROLS_MAP.get(*k).map(|v| format!("[{}] {}", k, v))
            }
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Format seconds as `m:ss`.
fn format_time(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Five-star gauge for a rating.
fn stars(rating: Rating) -> String {
    let filled = usize::from(rating.value());
    let empty = usize::from(Rating::MAX) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

fn track_count_label(n: usize) -> String {
    if n == 1 {
        "1 track".to_string()
    } else {
        format!("{n} tracks")
    }
}

/// Map a playlist theme token such as `"purple-pink"` to an accent colour,
/// keyed on its first word.
fn accent_color(gradient: &str) -> Color {
    let first = gradient.split(['-', ' ']).next().unwrap_or_default();
    match first.to_ascii_lowercase().as_str() {
        "purple" | "violet" => Color::Magenta,
        "pink" | "red" => Color::LightRed,
        "orange" | "yellow" | "amber" => Color::Yellow,
        "blue" | "indigo" => Color::Blue,
        "cyan" | "teal" => Color::Cyan,
        "green" | "emerald" => Color::Green,
        _ => Color::Gray,
    }
}

/// Split `text` into spans, styling the first query hit with `hit`.
fn highlighted_spans<'a>(text: &'a str, query: &str, base: Style, hit: Style) -> Vec<Span<'a>> {
    let Some(range) = match_span(text, query) else {
        return vec![Span::styled(text, base)];
    };

    let byte_at = |ci: usize| text.char_indices().nth(ci).map_or(text.len(), |(b, _)| b);
    let (start, end) = (byte_at(range.start), byte_at(range.end));
    vec![
        Span::styled(&text[..start], base),
        Span::styled(&text[start..end], base.patch(hit)),
        Span::styled(&text[end..], base),
    ]
}

/// Window of `total` rows to show in `height` rows, keeping `selected`
/// centered when possible. Returns `(start, end, selected_in_window)`.
fn visible_window(total: usize, height: usize, selected: usize) -> (usize, usize, usize) {
    if total <= height || height == 0 {
        return (0, total, selected);
    }
    let half = height / 2;
    let mut start = selected.saturating_sub(half);
    if start + height > total {
        start = total - height;
    }
    (start, start + height, selected - start)
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    // Keep the popup smaller and avoid covering the entire UI.
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn left_pad() -> Padding {
    Padding {
        left: 1,
        right: 0,
        top: 0,
        bottom: 0,
    }
}

fn track_line<'a>(track: &'a Track, query: &str, is_current: bool) -> Line<'a> {
    let hit = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::UNDERLINED);

    let mut spans = vec![Span::raw(if is_current { "♪ " } else { "  " })];
    spans.extend(highlighted_spans(
        &track.title,
        query,
        Style::default().add_modifier(Modifier::BOLD),
        hit,
    ));
    spans.push(Span::raw(" · ").dim());
    spans.extend(highlighted_spans(
        &track.artist,
        query,
        Style::default().add_modifier(Modifier::DIM),
        hit,
    ));
    spans.push(Span::raw(format!("  [{}]", track.genre)).fg(Color::Cyan));
    spans.push(Span::raw(format!("  {}", format_time(track.duration_secs))));
    spans.push(Span::raw(format!("  {}", stars(track.rating))).fg(Color::Yellow));
    spans.push(Span::raw(format!(" {}", track.rating)).dim());
    Line::from(spans)
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect, ui_settings: &UiSettings) {
    let mut spans = vec![Span::raw("/ ").dim()];
    if app.filter_query.is_empty() && !app.filter_mode {
        spans.push(Span::raw("search by title or artist").dim());
    } else {
        spans.push(Span::raw(app.filter_query.as_str()));
    }
    if app.filter_mode {
        spans.push(Span::raw("▏").slow_blink());
    }
    spans.push(Span::raw("   │  ").dim());

    for genre in app.genre_options() {
        let label = format!(" {} ", genre.label(&ui_settings.all_genres_label));
        if genre == app.genre {
            spans.push(Span::raw(label).add_modifier(Modifier::REVERSED));
        } else {
            spans.push(Span::raw(label));
        }
        spans.push(Span::raw(" "));
    }

    let title = if app.filter_mode {
        " search (esc clears, enter plays) "
    } else {
        " search "
    };
    let bar = Paragraph::new(Line::from(spans))
        .block(Block::bordered().padding(left_pad()).title(title));
    frame.render_widget(bar, area);
}

fn draw_playlists(frame: &mut Frame, app: &App, area: Rect) {
    let n = app.playlists.len() as u32;
    if n == 0 {
        return;
    }

    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(app.playlists.iter().map(|_| Constraint::Ratio(1, n)))
        .split(area);

    for (i, (playlist, tile)) in app.playlists.iter().zip(tiles.iter()).enumerate() {
        let focused = app.focus == Focus::Playlists && i == app.playlist_cursor;
        let accent = accent_color(&playlist.gradient);

        let mut block = Block::bordered()
            .border_style(Style::default().fg(accent))
            .padding(left_pad())
            .title(format!(" {} {} ", playlist.icon, playlist.name));
        if focused {
            block = block
                .border_type(BorderType::Thick)
                .title_style(Style::default().add_modifier(Modifier::REVERSED));
        }

        let body = vec![
            Line::from(Span::raw(playlist.description.as_str()).dim()),
            Line::from(format!("♪ {}", track_count_label(playlist.track_count as usize))),
        ];
        let tile_par = Paragraph::new(body).block(block).wrap(Wrap { trim: true });
        frame.render_widget(tile_par, *tile);
    }
}

fn draw_tracks(frame: &mut Frame, app: &App, display: &[usize], area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" tracks · {} ", track_count_label(display.len())));

    if display.is_empty() {
        let empty = Paragraph::new("No tracks match the current search.")
            .alignment(Alignment::Center)
            .dim()
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // Center the cursor when possible; only build ListItems for the window.
    let total = display.len();
    let list_height = area.height.saturating_sub(2) as usize;
    let sel_pos = display.iter().position(|&i| i == app.cursor).unwrap_or(0);
    let (start, end, selected_pos_in_visible) = visible_window(total, list_height, sel_pos);

    let current = app.selection.current();
    let tracks = app.store.tracks();
    let visible_items: Vec<ListItem> = display[start..end]
        .iter()
        .map(|&i| {
            let track = &tracks[i];
            ListItem::new(track_line(track, &app.filter_query, current == Some(track.id)))
        })
        .collect();

    let mut list = List::new(visible_items).block(block);
    if app.focus == Focus::Tracks {
        list = list
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
    }
    let mut state = ListState::default();
    state.select(Some(selected_pos_in_visible));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_details(frame: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect_sized(72, 10, area);
    frame.render_widget(Clear, popup_area);

    let details = match app.cursor_track() {
        Some(track) => format!(
            "Title: {}\nArtist: {}\nGenre: {}\nDuration: {} ({}s)\nRating: {}\nCover: {}\nId: {}",
            track.title,
            track.artist,
            track.genre,
            format_time(track.duration_secs),
            track.duration_secs,
            track.rating,
            if track.cover_url.is_empty() {
                "-"
            } else {
                track.cover_url.as_str()
            },
            track.id,
        ),
        None => "No track selected".to_string(),
    };
    let details_par = Paragraph::new(details)
        .block(
            Block::default()
                .padding(left_pad())
                .borders(Borders::ALL)
                .title(" details (K closes) "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(details_par, popup_area);
}

fn draw_transport(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::bordered().title(" now playing ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(track) = app.current_track() else {
        let prompt = Paragraph::new("♪ Select a track to play")
            .alignment(Alignment::Center)
            .dim();
        frame.render_widget(prompt, inner);
        return;
    };

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(50),
            Constraint::Percentage(20),
        ])
        .split(inner);

    let info = Paragraph::new(vec![
        Line::from(Span::raw(track.title.as_str()).bold()),
        Line::from(Span::raw(track.artist.as_str()).dim()),
    ]);
    frame.render_widget(info, cols[0]);

    let middle = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(cols[1]);

    let play = if app.transport.is_playing() { "⏸" } else { "▶" };
    let buttons = Paragraph::new(format!("⏮   {play}   ⏭")).alignment(Alignment::Center);
    frame.render_widget(buttons, middle[0]);

    let elapsed = app.transport.elapsed_secs();
    let progress = LineGauge::default()
        .ratio(app.transport.progress(track.duration_secs))
        .label(format!(
            "{} / {}",
            format_time(elapsed),
            format_time(track.duration_secs)
        ))
        .filled_style(Style::default().fg(Color::Magenta));
    frame.render_widget(progress, middle[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(cols[2]);
    frame.render_widget(Paragraph::new("vol").dim(), right[0]);
    let volume = app.transport.volume();
    let volume_gauge = LineGauge::default()
        .ratio(f64::from(volume) / 100.0)
        .label(format!("{volume:>3}%"));
    frame.render_widget(volume_gauge, right[1]);
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(
    frame: &mut Frame,
    app: &App,
    display: &[usize],
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
) {
    let playlists_height = if app.playlists.is_empty() { 0 } else { 5 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(playlists_height),
            Constraint::Min(3),
            Constraint::Length(4),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header: transient status wins over the configured text.
    let header_text = app.status.as_deref().unwrap_or(&ui_settings.header_text);
    let header = Paragraph::new(header_text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" cadenza ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    draw_search_bar(frame, app, chunks[1], ui_settings);
    draw_playlists(frame, app, chunks[2]);
    draw_tracks(frame, app, display, chunks[3]);

    // Overlay details popup inside the list area so it doesn't cover the bars.
    if app.details_window {
        draw_details(frame, app, chunks[3]);
    }

    draw_transport(frame, app, chunks[4]);

    let footer = Paragraph::new(controls_text(controls_settings.scrub_seconds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(left_pad()),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[5]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::Settings;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn format_time_uses_unpadded_minutes() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(245), "4:05");
        assert_eq!(format_time(3600), "60:00");
    }

    #[test]
    fn stars_fill_to_rating() {
        assert_eq!(stars(Rating::new(3).unwrap()), "★★★☆☆");
        assert_eq!(stars(Rating::UNRATED), "☆☆☆☆☆");
    }

    #[test]
    fn track_count_label_pluralizes() {
        assert_eq!(track_count_label(1), "1 track");
        assert_eq!(track_count_label(0), "0 tracks");
        assert_eq!(track_count_label(6), "6 tracks");
    }

    #[test]
    fn accent_color_keys_on_first_word() {
        assert_eq!(accent_color("purple-pink"), Color::Magenta);
        assert_eq!(accent_color("Blue-cyan"), Color::Blue);
        assert_eq!(accent_color(""), Color::Gray);
    }

    #[test]
    fn controls_text_includes_scrub_seconds() {
        let text = controls_text(7);
        assert!(text.starts_with("[j/k] up/down"));
        assert!(text.contains("[H/L] scrub -/+7s"));
        assert!(text.ends_with("[q] quit"));
    }

    #[test]
    fn highlighted_spans_split_around_hit() {
        let base = Style::default();
        let hit = Style::default().fg(Color::Yellow);
        let spans = highlighted_spans("Luna Eclipse", "ecl", base, hit);
        let parts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, vec!["Luna ", "Ecl", "ipse"]);
        assert_eq!(spans[1].style.fg, Some(Color::Yellow));

        assert_eq!(highlighted_spans("Luna", "", base, hit).len(), 1);
    }

    #[test]
    fn visible_window_centers_selection() {
        assert_eq!(visible_window(5, 10, 3), (0, 5, 3));
        assert_eq!(visible_window(20, 5, 0), (0, 5, 0));
        assert_eq!(visible_window(20, 5, 10), (8, 13, 2));
        assert_eq!(visible_window(20, 5, 19), (15, 20, 4));
    }

    fn render(app: &App) -> String {
        let settings = Settings::default();
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let display = app.display_indices();
        terminal
            .draw(|f| draw(f, app, &display, &settings.ui, &settings.controls))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn renders_catalog_and_empty_transport() {
        let app = App::new(Catalog::builtin().unwrap(), 75);
        let screen = render(&app);
        assert!(screen.contains("Midnight Dreams"));
        assert!(screen.contains("tracks · 6 tracks"));
        assert!(screen.contains("Evening Chill"));
        assert!(screen.contains("Select a track to play"));
    }

    #[test]
    fn renders_current_track_in_transport() {
        let mut app = App::new(Catalog::builtin().unwrap(), 75);
        app.play_cursor();
        let screen = render(&app);
        assert!(screen.contains("0:00 / 4:05"));
        assert!(screen.contains(" 75%"));
        assert!(!screen.contains("Select a track to play"));
    }

    #[test]
    fn renders_no_match_message() {
        let mut app = App::new(Catalog::builtin().unwrap(), 75);
        app.filter_query = "nothing like this".into();
        let screen = render(&app);
        assert!(screen.contains("No tracks match"));
        assert!(screen.contains("tracks · 0 tracks"));
    }
}
