use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::catalog::load_catalog;

mod cli;
mod event_loop;
mod logging;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli_args = cli::CliArgs::parse();
    let (settings, settings_warning) = settings::load_settings();
    let logging_warning = logging::init(&settings.logging);

    // A catalog path on the command line wins over the configured one.
    let catalog_path = cli_args.catalog.or_else(|| settings.catalog.path.clone());
    let catalog = load_catalog(catalog_path.as_deref())?;
    let source = catalog_path
        .as_deref()
        .map_or_else(|| "built-in".to_string(), |p| p.display().to_string());
    tracing::info!(
        tracks = catalog.store.len(),
        playlists = catalog.playlists.len(),
        %source,
        "catalog loaded"
    );

    let mut app = App::new(catalog, settings.transport.initial_volume);
    app.follow_playback = settings.ui.follow_playback;

    let warnings: Vec<String> = [settings_warning, logging_warning].into_iter().flatten().collect();
    for w in &warnings {
        tracing::warn!("{w}");
    }
    if !warnings.is_empty() {
        app.status = Some(warnings.join("; "));
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::default();
        event_loop::run(&mut terminal, &settings, &mut app, &mut state)
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("shutting down");
    run_result
}
