//! Rendering module
//!
//! The scene painter is a pure read-only consumer of game state drawing
//! through the `DrawSurface` trait; the canvas implementation lives behind
//! the wasm target.

pub mod scene;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use scene::draw_frame;
pub use surface::{Color, DrawSurface, TextAlign, TextBaseline, TextStyle};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
