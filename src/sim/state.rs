//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::words::WORD_BANK;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Nothing running yet, waiting for the first start
    Idle,
    /// Active gameplay
    Running,
    /// Game is paused, entities frozen in place
    Paused,
    /// An asteroid crossed the bottom edge
    GameOver,
}

/// A falling asteroid carrying a word
#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    pub id: u32,
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    /// Bounding box edge length
    pub size: f32,
    /// Pixels per tick
    pub fall_speed: f32,
    pub rotation: f32,
    /// Radians per tick
    pub angular_speed: f32,
    pub word: &'static str,
    /// How many leading characters of `word` have been typed.
    /// Invariant: `typed <= word.len()`.
    pub typed: usize,
    pub is_target: bool,
}

impl Asteroid {
    /// Center of the bounding box
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }
}

/// A visual explosion particle
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 1.0 at birth, decremented each tick, culled at 0
    pub life: f32,
    pub size: f32,
    /// HSL hue in degrees
    pub hue: f32,
    /// HSL lightness in percent
    pub lightness: f32,
}

/// Complete game state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Drawing surface dimensions in pixels
    pub surface: Vec2,
    /// Candidate words for spawns
    pub words: &'static [&'static str],
    /// Live asteroids in insertion order. Word matching scans this order,
    /// so the storage must never be re-sorted.
    pub asteroids: Vec<Asteroid>,
    pub particles: Vec<Particle>,
    /// Typed-so-far buffer (lowercase ASCII letters only)
    pub input: String,
    /// Entity ID of the asteroid the buffer is matched against
    pub target: Option<u32>,
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed and surface size
    pub fn new(seed: u64, surface: Vec2) -> Self {
        Self::with_words(seed, surface, WORD_BANK)
    }

    /// Same, but spawning from a custom word list
    pub fn with_words(seed: u64, surface: Vec2, words: &'static [&'static str]) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            score: 0,
            time_ticks: 0,
            surface,
            words,
            asteroids: Vec::new(),
            particles: Vec::new(),
            input: String::new(),
            target: None,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reset for a fresh run. The RNG stream continues where it left off.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Running;
        self.score = 0;
        self.time_ticks = 0;
        self.asteroids.clear();
        self.particles.clear();
        self.input.clear();
        self.target = None;
    }

    /// Remove an asteroid, award points, and burst particles at its center.
    /// Returns false if the ID is not live.
    pub fn destroy_asteroid(&mut self, id: u32) -> bool {
        let Some(idx) = self.asteroids.iter().position(|a| a.id == id) else {
            return false;
        };
        let asteroid = self.asteroids.remove(idx);
        self.spawn_explosion(asteroid.center());
        self.score += asteroid.word.len() as u64 * POINTS_PER_CHAR;
        if self.target == Some(id) {
            self.target = None;
        }
        log::debug!("destroyed '{}' (+{})", asteroid.word, asteroid.word.len() as u64 * POINTS_PER_CHAR);
        true
    }

    /// Emit one burst of explosion particles at `center`
    pub fn spawn_explosion(&mut self, center: Vec2) {
        for _ in 0..EXPLOSION_PARTICLES {
            let vel = Vec2::new(
                (self.rng.random::<f32>() - 0.5) * PARTICLE_SPREAD,
                (self.rng.random::<f32>() - 0.5) * PARTICLE_SPREAD,
            );
            let size = self.rng.random::<f32>() * 4.0 + 2.0;
            let hue = 280.0 + self.rng.random::<f32>() * 40.0;
            let lightness = 50.0 + self.rng.random::<f32>() * 30.0;
            self.particles.push(Particle {
                pos: center,
                vel,
                life: 1.0,
                size,
                hue,
                lightness,
            });
        }
    }
}
