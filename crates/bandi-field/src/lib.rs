//! Animated particle field.
//!
//! A fixed set of drifting particles wraps around the canvas, repels
//! from the mouse pointer, and is joined by fading link lines. The
//! simulation runs in a virtual unit space (one terminal cell spans
//! 8x16 units, roughly a monospaced glyph in pixels) so distances stay
//! meaningful regardless of terminal geometry.

mod field;
mod particle;
mod render;

pub use field::ParticleField;
pub use particle::Particle;
pub use render::{UNITS_PER_CELL_X, UNITS_PER_CELL_Y, canvas_size, cell_center, link_alpha};

/// Radius around the pointer within which particles are repelled.
pub const POINTER_RADIUS: f32 = 150.0;

/// Maximum distance at which two particles are linked.
pub const LINK_DISTANCE: f32 = 120.0;

/// Displacement per frame for a particle sitting exactly on the pointer.
pub(crate) const REPEL_STEP: f32 = 3.0;

/// Dampening applied to link opacity so links stay fainter than particles.
pub(crate) const LINK_DIM: f32 = 0.2;
