//! Session module - the game lifecycle around one engine
//!
//! A session is what a front-end drives once per frame: it forwards held-key
//! actions, runs gravity on a fixed cadence, and freezes once the game is over.
//! "Over" is either the engine's own condition (top row occupied) or a locked cell
//! reaching the fail line. Pausing and restarting live here too, so the frame loop
//! itself only deals with I/O.

use tracing::info;

use crate::config::GameConfig;
use crate::engine::Engine;
use crate::rng::{PieceRng, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::types::GameAction;

#[derive(Debug, Clone)]
pub struct Session {
    engine: Engine,
    config: GameConfig,
    /// Source of per-game seeds
    seeds: SimpleRng,
    paused: bool,
    over: bool,
    drop_timer_ms: u32,
    games_started: u32,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        let mut seeds = SimpleRng::new(config.seed);
        let engine = Engine::with_seed(config.columns, config.rows, seeds.next_u32());
        info!(
            columns = config.columns,
            rows = config.rows,
            seed = config.seed,
            "session started"
        );
        Self {
            engine,
            config,
            seeds,
            paused: false,
            over: false,
            drop_timer_ms: 0,
            games_started: 1,
        }
    }

    /// Wrap an engine that is already in play, e.g. a scripted position.
    ///
    /// The session is over immediately if the engine already meets the over
    /// condition. Later games draw their seeds from `config.seed`.
    pub fn from_engine(engine: Engine, config: GameConfig) -> Self {
        let mut session = Self {
            engine,
            config,
            seeds: SimpleRng::new(config.seed),
            paused: false,
            over: false,
            drop_timer_ms: 0,
            games_started: 1,
        };
        session.refresh_over();
        session
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.over
    }

    pub fn playable(&self) -> bool {
        !self.paused && !self.over
    }

    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    pub fn fail_line(&self) -> u16 {
        self.config.fail_line_row()
    }

    /// Toggle pause. Ignored once the game is over.
    pub fn toggle_pause(&mut self) -> bool {
        if self.over {
            return false;
        }
        self.paused = !self.paused;
        info!(paused = self.paused, "pause toggled");
        true
    }

    /// Run one frame: held actions first, then gravity, then the game-over check.
    ///
    /// Gravity steps at most once per frame; the timer restarts from zero after each
    /// step. Nothing happens while paused or over.
    pub fn frame<I>(&mut self, elapsed_ms: u32, actions: I)
    where
        I: IntoIterator<Item = GameAction>,
    {
        if !self.playable() {
            return;
        }

        for action in actions {
            self.engine.apply_input(action);
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms >= self.config.drop_interval_ms {
            self.engine.step();
            self.drop_timer_ms = 0;
        }

        self.refresh_over();
    }

    /// Start a fresh game with the same dimensions. Only allowed once over.
    pub fn restart(&mut self) -> bool {
        if !self.over {
            return false;
        }
        let seed = self.seeds.next_u32();
        self.engine = Engine::with_seed(self.config.columns, self.config.rows, seed);
        self.paused = false;
        self.over = false;
        self.drop_timer_ms = 0;
        self.games_started += 1;
        info!(game = self.games_started, seed, "new game");
        true
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.engine.snapshot_into(out);
        out.paused = self.paused;
        out.game_over = self.over;
        out.fail_line = Some(self.fail_line());
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn refresh_over(&mut self) {
        if self.over {
            return;
        }
        let fail_line = self.fail_line();
        if self.engine.is_over() || self.engine.row_occupied(fail_line) {
            self.over = true;
            info!(
                score = self.engine.score(),
                lines = self.engine.lines_cleared(),
                fail_line,
                "session over"
            );
        }
    }
}
