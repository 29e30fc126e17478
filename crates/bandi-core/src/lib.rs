//! Core types for the bandi ambient particle field.
//!
//! This crate holds the pieces shared between the simulator, the
//! configuration layer, and the application: RGB colors, the theme
//! registry, pointer tracking, and the color slot that links theme
//! selection to the renderer.

mod color;
mod pointer;
mod slot;
mod theme;

pub use color::Rgb;
pub use pointer::PointerState;
pub use slot::ColorSlot;
pub use theme::{DEFAULT_THEME, Theme, ThemeName};

/// Number of particles in the field unless configured otherwise.
pub const DEFAULT_PARTICLE_COUNT: usize = 80;
