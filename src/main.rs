//! Login TUI - a terminal login form with client-side validation
//!
//! A Ratatui-based screen with email and password fields. Accepted
//! submissions are handed to the configured sinks.

mod app;
mod config;
mod platform;
mod state;
mod submit;
mod ui;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use submit::{LogSink, RecordSink, SubmitSink};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "login_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let (config, config_error) = match TuiConfig::load() {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!("Falling back to default config: {err:#}");
            (TuiConfig::default(), Some(err))
        }
    };

    let mut sinks: Vec<Box<dyn SubmitSink>> = vec![Box::new(LogSink)];
    if let Some(path) = config.record_path() {
        let sink = RecordSink::new(path);
        tracing::info!("Recording submissions to {}", sink.path().display());
        sinks.push(Box::new(sink));
    }

    let mut app = App::new(&config, sinks);
    if let Some(err) = config_error {
        app.push_error(format!("Config error: {err:#}"));
    }
    tracing::info!("Starting login screen");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    let mut drawn_revision: Option<u64> = None;
    let mut resized = false;

    loop {
        // Redraw only when state changed or the terminal was resized
        let revision = app.revision();
        if resized || drawn_revision != Some(revision) {
            terminal.draw(|frame| ui::draw(frame, app))?;
            drawn_revision = Some(revision);
            resized = false;
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    app.handle_key(key).await?;
                }
                Event::Resize(_width, _height) => resized = true,
                _ => {}
            }
        }

        if app.should_quit() {
            tracing::info!("Leaving login screen");
            return Ok(());
        }
    }
}
