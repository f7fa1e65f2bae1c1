//! Run/pause/game-over state machine and score bookkeeping
//!
//! `GameController` owns the game state, the current high score, and the
//! persistence handle. The host drives it with `start`/`toggle_pause`/
//! `on_key`/`frame`; everything stays on one logical thread.

use glam::Vec2;

use crate::highscore::ScoreStore;
use crate::renderer::{DrawSurface, draw_frame};
use crate::sim::{self, GamePhase, GameState, Key};

pub struct GameController {
    state: GameState,
    high_score: u64,
    store: Box<dyn ScoreStore>,
}

impl GameController {
    /// Build a controller around a seeded state and a score store. The
    /// stored high score is read once here; afterwards it only grows.
    pub fn new(seed: u64, surface: Vec2, store: Box<dyn ScoreStore>) -> Self {
        let high_score = store.load();
        log::info!("high score loaded: {}", high_score);
        Self {
            state: GameState::new(seed, surface),
            high_score,
            store,
        }
    }

    /// Begin a fresh run from any phase: score zeroed, entities and input
    /// cleared, phase set to Running. Doubles as restart after game over.
    pub fn start(&mut self) {
        self.state.reset();
        log::info!("run started (seed {})", self.state.seed);
    }

    /// Toggle Running <-> Paused. No effect in Idle or GameOver.
    pub fn toggle_pause(&mut self) {
        self.state.phase = match self.state.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            other => other,
        };
    }

    /// Route one key event. Inactive unless running; a destruction may
    /// raise the score, in which case the high score is synced through to
    /// the store before this returns.
    pub fn on_key(&mut self, key: Key) {
        if self.state.phase != GamePhase::Running {
            return;
        }
        sim::handle_key(&mut self.state, key);
        self.sync_high_score();
    }

    /// Advance the simulation by one tick (no-op unless running)
    pub fn tick(&mut self) {
        sim::tick(&mut self.state);
    }

    /// One full cycle: simulate, then paint. The simulation step strictly
    /// precedes rendering of the same frame.
    pub fn frame(&mut self, surface: &mut dyn DrawSurface) {
        self.tick();
        draw_frame(surface, &self.state, self.high_score);
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn sync_high_score(&mut self) {
        if self.state.score > self.high_score {
            self.high_score = self.state.score;
            self.store.store(self.high_score);
        }
    }
}
