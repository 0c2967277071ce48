//! Terminal runner (default binary).
//!
//! Owns everything the core leaves out: command-line options, logging, the
//! terminal, and the frame loop that samples held keys and drives a [`Session`].

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use mehrstein_tetris::core::{GameConfig, GameSnapshot, Session};
use mehrstein_tetris::input::{control_key, Control, HeldKeys};
use mehrstein_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use mehrstein_tetris::types::{
    DEFAULT_COLUMNS, DEFAULT_FPS, DEFAULT_ROWS, DROP_INTERVAL_MS, MIN_COLUMNS, MIN_ROWS,
};

/// Largest board side the terminal view is laid out for
const MAX_SIDE: i64 = 200;

#[derive(Parser, Debug)]
#[command(name = "mehrstein")]
#[command(version, about = "Falling-block puzzle game for the terminal")]
struct Cli {
    /// Board width in cells
    #[arg(long, default_value_t = DEFAULT_COLUMNS,
          value_parser = clap::value_parser!(u16).range(MIN_COLUMNS as i64..=MAX_SIDE))]
    columns: u16,

    /// Board height in cells
    #[arg(long, default_value_t = DEFAULT_ROWS,
          value_parser = clap::value_parser!(u16).range(MIN_ROWS as i64..=MAX_SIDE))]
    rows: u16,

    /// Frames per second
    #[arg(long, default_value_t = DEFAULT_FPS,
          value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,

    /// Gravity interval in milliseconds
    #[arg(long, default_value_t = DROP_INTERVAL_MS)]
    drop_ms: u32,

    /// Seed for piece generation (defaults to the clock)
    #[arg(long)]
    seed: Option<u32>,

    /// Where to write the log (the terminal is busy with the game)
    #[arg(long, default_value = "mehrstein.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let config = GameConfig::new(cli.columns, cli.rows)
        .with_fps(cli.fps)
        .with_drop_interval_ms(cli.drop_ms)
        .with_seed(cli.seed.unwrap_or_else(seed_from_clock));
    info!(?config, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    match &result {
        Ok(()) => info!("bye"),
        Err(err) => error!(error = %err, "game loop failed"),
    }
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("installing log subscriber: {err}"))
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let mut session = Session::new(config);
    let view = GameView::default();
    let mut keys = HeldKeys::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(config.frame_ms() as u64);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        // Collect input until the next frame is due.
        loop {
            let timeout = frame.saturating_sub(last_frame.elapsed());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    if let Some(control) = control_key(key) {
                        if key.kind == KeyEventKind::Press && handle_control(control, &mut session, &mut keys) {
                            return Ok(());
                        }
                        continue;
                    }
                    keys.handle_key_event(key);
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Simulate.
        let elapsed_ms = last_frame.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last_frame = Instant::now();
        let held = keys.update(elapsed_ms);
        session.frame(elapsed_ms, held);
    }
}

/// Apply a front-end control. Returns true when the program should quit.
fn handle_control(control: Control, session: &mut Session, keys: &mut HeldKeys) -> bool {
    debug!(?control, "control key");
    match control {
        Control::ForceQuit => true,
        Control::Quit => session.paused() || session.game_over(),
        Control::TogglePause => {
            if session.toggle_pause() {
                keys.clear();
            }
            false
        }
        Control::PlayAgain => {
            if session.restart() {
                keys.clear();
            }
            false
        }
    }
}
