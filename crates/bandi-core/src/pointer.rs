//! Pointer tracking.
//!
//! Two states: `Absent` until the mouse reports a position, `Tracking`
//! afterwards. Losing terminal focus is the closest analogue to the
//! pointer leaving a window and transitions back to `Absent`. Reads are
//! snapshots of the latest event; no history is kept.

/// Last known pointer position in field units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PointerState {
    #[default]
    Absent,
    Tracking {
        x: f32,
        y: f32,
    },
}

impl PointerState {
    /// Record a pointer movement.
    pub fn moved(&mut self, x: f32, y: f32) {
        *self = Self::Tracking { x, y };
    }

    /// Record the pointer leaving.
    pub fn left(&mut self) {
        *self = Self::Absent;
    }

    /// The tracked position, if any.
    pub fn position(&self) -> Option<(f32, f32)> {
        match *self {
            Self::Absent => None,
            Self::Tracking { x, y } => Some((x, y)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_absent() {
        assert_eq!(PointerState::default().position(), None);
    }

    #[test]
    fn test_transitions() {
        let mut pointer = PointerState::default();
        pointer.moved(10.0, 20.0);
        assert_eq!(pointer.position(), Some((10.0, 20.0)));

        // A later move replaces the snapshot
        pointer.moved(11.0, 21.0);
        assert_eq!(pointer.position(), Some((11.0, 21.0)));

        pointer.left();
        assert_eq!(pointer.position(), None);

        // Leaving twice stays absent
        pointer.left();
        assert_eq!(pointer.position(), None);
    }
}
