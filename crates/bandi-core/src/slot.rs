//! Shared color slot.
//!
//! The theme side publishes the active primary color; the particle
//! renderer polls it once per frame. This is the only coupling between
//! the two, so theme selection never calls into rendering. Cloning the
//! slot shares the same cell; the whole application runs on one thread,
//! so a plain `Cell` suffices.

use std::cell::Cell;
use std::rc::Rc;

use crate::color::Rgb;

/// Single-writer/single-reader slot holding the active primary color.
#[derive(Debug, Clone)]
pub struct ColorSlot(Rc<Cell<Rgb>>);

impl ColorSlot {
    pub fn new(initial: Rgb) -> Self {
        Self(Rc::new(Cell::new(initial)))
    }

    /// Publish a new active color.
    pub fn publish(&self, color: Rgb) {
        self.0.set(color);
    }

    /// The most recently published color.
    pub fn current(&self) -> Rgb {
        self.0.get()
    }
}
