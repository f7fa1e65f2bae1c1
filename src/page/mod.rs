//! The hosting portfolio page
//!
//! Everything around the game canvas: contact-form validation rules and
//! the synthetic contribution data are plain logic (testable anywhere);
//! the DOM wiring lives behind the wasm target.

pub mod contributions;
pub mod validate;

#[cfg(target_arch = "wasm32")]
pub mod dom;
