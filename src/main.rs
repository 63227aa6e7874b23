//! Contact Form TUI - a terminal contact form with live validation
//!
//! A Ratatui-based form that collects a name, email and message, validates
//! the inputs as they are typed, and shows a summary of accepted submissions.

mod app;
mod clipboard;
mod config;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use directories::ProjectDirs;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File};
use std::io::{self, Stdout, Write};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contact_form_tui=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(log_writer()),
        )
        .init();

    // A broken config file should not keep the form from opening
    let (config, config_error) = match TuiConfig::load() {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!("failed to load config: {err:#}");
            (TuiConfig::default(), Some(err))
        }
    };
    let mouse_capture = config.mouse_capture();

    // Setup terminal, undoing any partial setup if a step fails
    let mut terminal = match setup_terminal(mouse_capture) {
        Ok(terminal) => terminal,
        Err(err) => {
            restore_terminal(&mut io::stdout(), mouse_capture);
            eprintln!("Error: {err:?}");
            std::process::exit(1);
        }
    };

    // Create app and run
    let mut app = App::new(config);
    if let Some(err) = config_error {
        app.push_error(format!("Failed to load config, using defaults: {err}"));
    }
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    restore_terminal(terminal.backend_mut(), mouse_capture);
    if let Err(err) = terminal.show_cursor() {
        tracing::warn!("failed to show cursor: {err}");
    }

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

fn setup_terminal(mouse_capture: bool) -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_capture {
        execute!(stdout, EnableMouseCapture)?;
    }
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Put the terminal back the way we found it. Every step runs even when an
/// earlier one fails; failures are only logged.
fn restore_terminal<W: Write>(out: &mut W, mouse_capture: bool) {
    if mouse_capture {
        if let Err(err) = execute!(out, DisableMouseCapture) {
            tracing::warn!("failed to disable mouse capture: {err}");
        }
    }
    if let Err(err) = execute!(out, LeaveAlternateScreen) {
        tracing::warn!("failed to leave alternate screen: {err}");
    }
    if let Err(err) = disable_raw_mode() {
        tracing::warn!("failed to disable raw mode: {err}");
    }
}

/// Log to a file in the local data dir; fall back to stderr when it can't
/// be created.
fn log_writer() -> BoxMakeWriter {
    let file = ProjectDirs::from("io", "contactform", "contact-form-tui").and_then(|dirs| {
        let dir = dirs.data_local_dir();
        fs::create_dir_all(dir).ok()?;
        File::create(dir.join("contact-form-tui.log")).ok()
    });

    match file {
        Some(file) => BoxMakeWriter::new(Mutex::new(file)),
        None => BoxMakeWriter::new(io::stderr),
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Update terminal size for mouse hit-testing
        let term_size = terminal.size()?;
        app.terminal_size = Some((term_size.height, term_size.width));

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle crossterm events
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    app.handle_key(key)?;
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse)?;
                }
                Event::Resize(_width, _height) => {
                    // Layout is recomputed from the new size on the next draw
                }
                _ => {}
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
