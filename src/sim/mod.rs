//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One logical tick per step, no wall-clock time
//! - Seeded RNG only
//! - Insertion-ordered entity storage (word matching ties break on it)
//! - No rendering or platform dependencies

pub mod input;
pub mod state;
pub mod tick;

pub use input::{Key, handle_key};
pub use state::{Asteroid, GamePhase, GameState, Particle};
pub use tick::tick;
