//! `oddfacts` — random useless facts in the terminal.
//!
//! # Usage
//!
//! ```
//! oddfacts
//! oddfacts --language it
//! oddfacts --config ~/.config/oddfacts/config.toml
//! oddfacts --once
//! ```

mod app;
mod config;
mod i18n;
mod share;
mod ui;

use std::{fs::File, io, sync::Mutex, time::Duration};

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use config::{Args, ConfigFile, Settings};
use crossterm::{
  event::{self, Event, KeyEventKind},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use oddfacts_core::{Controller, Retriever, Session};
use oddfacts_http::{FactsClient, MyMemoryClient};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();
  init_tracing(&args)?;

  let file_cfg = ConfigFile::load(args.config.as_deref())?;
  let settings = Settings::resolve(&args, file_cfg);
  tracing::info!(
    language = %settings.language,
    facts_url = %settings.http.facts_url,
    translate_url = %settings.http.translate_url,
    "starting"
  );

  let (facts, translator) = settings
    .http
    .clients()
    .context("creating HTTP clients")?;
  let retriever = Retriever::new(facts, translator);

  if args.once {
    return print_one(&retriever, &settings).await;
  }

  let controller =
    Controller::new(settings.language).with_stale_policy(settings.stale_policy);
  tracing::info!(
    stale_responses = %controller.stale_policy(),
    min_visible_ms = settings.min_visible.as_millis() as u64,
    "browser ready"
  );
  let session =
    Session::new(controller, retriever).with_min_visible(settings.min_visible);
  let mut app = App::new(session);

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  app.start();

  // Run the event loop; restore terminal even on error.
  let run_result = run_event_loop(&mut terminal, &mut app);

  // Restore terminal regardless of result.
  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

// ─── Logging ──────────────────────────────────────────────────────────────────

/// Log to stderr in `--once` mode, to a file otherwise: the TUI owns the
/// terminal.
fn init_tracing(args: &Args) -> Result<()> {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy();

  if args.once {
    tracing_subscriber::fmt()
      .with_env_filter(filter)
      .with_writer(io::stderr)
      .init();
    return Ok(());
  }

  let path = args
    .log_file
    .clone()
    .unwrap_or_else(|| std::env::temp_dir().join("oddfacts.log"));
  let file = File::options()
    .create(true)
    .append(true)
    .open(&path)
    .with_context(|| format!("opening log file {}", path.display()))?;

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_ansi(false)
    .with_writer(Mutex::new(file))
    .init();
  Ok(())
}

// ─── One-shot mode ────────────────────────────────────────────────────────────

async fn print_one(
  retriever: &Retriever<FactsClient, MyMemoryClient>,
  settings: &Settings,
) -> Result<()> {
  let fact = retriever
    .retrieve(settings.language)
    .await
    .context("fetching a fact")?;
  println!("{}", fact.text());
  if let Some(attr) = ui::fact_card::attribution(&fact) {
    println!("{attr}");
  }
  Ok(())
}

// ─── Event loop ───────────────────────────────────────────────────────────────

fn run_event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App<FactsClient, MyMemoryClient>,
) -> Result<()> {
  loop {
    app.tick();
    terminal
      .draw(|f| ui::draw(f, &app.view()))
      .context("drawing frame")?;

    // Poll for an event, yielding the worker to tokio while waiting.
    let maybe_event = tokio::task::block_in_place(|| {
      if event::poll(Duration::from_millis(50))? {
        Ok::<_, io::Error>(Some(event::read()?))
      } else {
        Ok(None)
      }
    })?;

    match maybe_event {
      Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
        if !app.handle_key(key) {
          break;
        }
      }
      // Resize and the rest: the next iteration redraws.
      _ => {}
    }
  }

  Ok(())
}
