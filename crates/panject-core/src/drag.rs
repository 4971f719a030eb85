//! Drag interaction state machine
//!
//! ```text
//!            press near indicator
//!   Idle ───────────────────────────▶ Dragging
//!    ▲                                   │
//!    └──────── release / leave ──────────┘
//! ```

use crate::grid::GridPosition;

/// Whether the control point is currently being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging)
    }

    /// Handle a pointer press at the (already mapped) cell `pressed`
    ///
    /// Returns true if a drag started.
    pub fn press(&mut self, pressed: GridPosition, indicator: GridPosition, tolerance: f32) -> bool {
        if within_grab_tolerance(pressed, indicator, tolerance) {
            *self = DragState::Dragging;
            true
        } else {
            false
        }
    }

    /// Handle pointer release or the pointer leaving the surface
    ///
    /// Returns true if a drag ended.
    pub fn release(&mut self) -> bool {
        std::mem::replace(self, DragState::Idle).is_dragging()
    }
}

/// Hit test between the pressed cell and the rendered indicator
///
/// Both positions are snapped to their cell before comparing, so the test is
/// effectively "same or adjacent cell" for the default tolerance.
pub fn within_grab_tolerance(pressed: GridPosition, indicator: GridPosition, tolerance: f32) -> bool {
    let a = pressed.indicator_origin();
    let b = indicator.indicator_origin();
    (a.x - b.x).abs() < tolerance && (a.y - b.y).abs() < tolerance
}
