use std::io::{stdout, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use prodman::app::App;
use prodman::clock::SystemClock;
use prodman::config::Config;
use prodman::{logging, view};

/// A terminal-based product list manager
#[derive(Parser, Debug)]
#[command(name = "prodman")]
#[command(about = "Manage a project's product list and export it as CSV", long_about = None)]
#[command(version)]
struct Args {
    /// Directory where CSV exports are written (default: current directory)
    #[arg(long, value_name = "PATH")]
    export_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file for diagnostics (default: system temp dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(logging::default_log_path);
    logging::init(&log_path).context("Failed to initialize logging")?;
    tracing::info!("prodman starting");

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load_default(),
    };

    // Restore the terminal even when a handler panics mid-frame.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        restore_terminal();
        original_hook(panic);
    }));

    enable_raw_mode().context("Failed to enable raw mode")?;
    stdout()
        .execute(EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.clear()?;

    let mut app = App::new(&config, args.export_dir.clone(), Box::new(SystemClock));
    let result = run_event_loop(&mut app, &mut terminal);

    restore_terminal();
    tracing::info!("prodman exiting");
    result
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
}

/// Main event loop: draw at a bounded frame rate, poll for key events with
/// a timeout, handle each event synchronously to completion.
fn run_event_loop(app: &mut App, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    const FRAME_DURATION: Duration = Duration::from_millis(16);

    // first frame straight away
    terminal.draw(|frame| view::render(frame, app))?;
    let mut last_render = Instant::now();
    let mut needs_render = false;

    loop {
        if app.should_quit() {
            break;
        }

        if needs_render && last_render.elapsed() >= FRAME_DURATION {
            terminal.draw(|frame| view::render(frame, app))?;
            last_render = Instant::now();
            needs_render = false;
        }

        let timeout = if needs_render {
            FRAME_DURATION.saturating_sub(last_render.elapsed())
        } else {
            Duration::from_millis(50)
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key_event) => {
                    if key_event.kind == KeyEventKind::Press {
                        tracing::trace!(
                            "Key event: code={:?}, modifiers={:?}",
                            key_event.code,
                            key_event.modifiers
                        );
                        app.handle_key(key_event);
                        needs_render = true;
                    }
                }
                Event::Resize(w, h) => {
                    tracing::debug!("Terminal resized to {}x{}", w, h);
                    needs_render = true;
                }
                _ => {}
            }
        }
    }

    Ok(())
}
