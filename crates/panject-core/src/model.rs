//! Widget model: single owner of position, drag and overlay state
//!
//! Derived values (control, status) are never stored; they are recomputed
//! from the position on every read. Every mutation bumps `revision`, which
//! the renderer uses to invalidate its cached geometry.

use crate::control::{control_value, crosses_threshold, Status};
use crate::drag::{within_grab_tolerance, DragState};
use crate::error::OverlayError;
use crate::grid::{GridPosition, PixelPoint};
use crate::overlay::OverlayState;

/// Grab tolerance in pixels (1.5 × point size)
pub const DEFAULT_GRAB_TOLERANCE: f32 = 12.0;

#[derive(Debug, Clone)]
pub struct PanjectModel {
    position: GridPosition,
    /// Control value seen at the previous position change (edge detection)
    last_control: f64,
    drag: DragState,
    overlay: OverlayState,
    grab_tolerance: f32,
    revision: u64,
}

impl Default for PanjectModel {
    fn default() -> Self {
        Self::new(DEFAULT_GRAB_TOLERANCE, false)
    }
}

impl PanjectModel {
    pub fn new(grab_tolerance: f32, show_corner_labels: bool) -> Self {
        Self {
            position: GridPosition::UNSET,
            last_control: 0.0,
            drag: DragState::Idle,
            overlay: OverlayState::new(show_corner_labels),
            grab_tolerance,
            revision: 0,
        }
    }

    pub fn position(&self) -> GridPosition {
        self.position
    }

    pub fn control(&self) -> f64 {
        control_value(self.position)
    }

    pub fn status(&self) -> Status {
        Status::from_control(self.control())
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn overlay(&self) -> &OverlayState {
        &self.overlay
    }

    pub fn grab_tolerance(&self) -> f32 {
        self.grab_tolerance
    }

    /// Whether a press at a surface-local pixel position would grab the point
    pub fn can_grab(&self, local: PixelPoint) -> bool {
        within_grab_tolerance(GridPosition::from_local(local), self.position, self.grab_tolerance)
    }

    /// Incremented on every mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Text of the central status disc
    pub fn status_disc_label(&self) -> &'static str {
        if self.overlay.flash.is_active() {
            "Threshold"
        } else {
            self.status().label()
        }
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Move the control point
    ///
    /// Returns the flash generation when the move crossed the threshold; the
    /// caller schedules [`Self::expire_flash`] with it.
    pub fn set_position(&mut self, position: GridPosition) -> Option<u64> {
        self.position = position;
        let control = self.control();
        let flash = if crosses_threshold(self.last_control, control) {
            let generation = self.overlay.flash.trigger();
            log::debug!(
                "Threshold crossed: {:.2} -> {:.2} (flash #{})",
                self.last_control,
                control,
                generation
            );
            Some(generation)
        } else {
            None
        };
        self.last_control = control;
        self.touch();
        flash
    }

    /// Any button pressed over the surface
    ///
    /// Drops the prime overlay, restores the corner labels and clears the
    /// validation notice.
    pub fn surface_pressed(&mut self) {
        self.overlay.surface_pressed();
        self.overlay.clear_notice();
        self.touch();
    }

    /// Primary button pressed at a surface-local pixel position
    ///
    /// Returns true if the press grabbed the control point.
    pub fn pointer_pressed(&mut self, local: PixelPoint) -> bool {
        self.surface_pressed();
        let pressed = GridPosition::from_local(local);
        let grabbed = self.drag.press(pressed, self.position, self.grab_tolerance);
        if grabbed {
            log::debug!("Drag started at ({}, {})", self.position.x(), self.position.y());
        }
        grabbed
    }

    /// Pointer moved to a surface-local pixel position
    ///
    /// Ignored unless dragging. Returns the flash generation to schedule, if any.
    pub fn pointer_moved(&mut self, local: PixelPoint) -> Option<u64> {
        if !self.drag.is_dragging() {
            return None;
        }
        self.set_position(GridPosition::from_local(local))
    }

    /// Pointer released or left the surface
    pub fn pointer_released(&mut self) {
        if self.drag.release() {
            log::debug!("Drag ended at ({}, {})", self.position.x(), self.position.y());
            self.touch();
        }
    }

    pub fn set_corner_labels(&mut self, enabled: bool) {
        self.overlay.set_corner_labels(enabled);
        self.touch();
    }

    pub fn set_prime_labels(&mut self, enabled: bool) -> Result<(), OverlayError> {
        let result = self.overlay.set_prime_labels(enabled, self.position);
        if let Err(ref e) = result {
            log::debug!("Prime labels rejected: {:?}", e);
        }
        self.touch();
        result
    }

    /// Dismiss the notice raised as `generation`; stale generations are ignored
    ///
    /// Returns true if a notice was on screen.
    pub fn dismiss_notice(&mut self, generation: u64) -> bool {
        let dismissed = self.overlay.dismiss_notice(generation);
        if dismissed {
            self.touch();
        }
        dismissed
    }

    /// Deferred flash reset; stale generations are ignored
    pub fn expire_flash(&mut self, generation: u64) -> bool {
        let expired = self.overlay.flash.expire(generation);
        if expired {
            self.touch();
        }
        expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CELL_PITCH;

    /// Surface-local pixel position of a cell
    fn cell_px(x: i32, y: i32) -> PixelPoint {
        PixelPoint::new((x + 1) as f32 * CELL_PITCH, y as f32 * CELL_PITCH)
    }

    #[test]
    fn test_initial_state() {
        let model = PanjectModel::default();
        assert_eq!(model.position(), GridPosition::UNSET);
        assert_eq!(model.control(), 0.0);
        assert_eq!(model.status(), Status::BelowThreshold);
        assert_eq!(model.drag_state(), DragState::Idle);
        assert_eq!(model.status_disc_label(), "semiurge");
    }

    #[test]
    fn test_drag_moves_point() {
        let mut model = PanjectModel::default();
        assert!(model.pointer_pressed(cell_px(-1, 100)));
        model.pointer_moved(cell_px(49, 50));
        assert_eq!(model.position(), GridPosition::new(49, 50));
        assert_eq!(model.control(), 25.0);

        model.pointer_released();
        assert_eq!(model.drag_state(), DragState::Idle);
        model.pointer_moved(cell_px(99, 0));
        assert_eq!(model.position(), GridPosition::new(49, 50));
    }

    #[test]
    fn test_press_away_from_point_does_not_drag() {
        let mut model = PanjectModel::default();
        assert!(!model.pointer_pressed(cell_px(50, 50)));
        assert_eq!(model.pointer_moved(cell_px(60, 60)), None);
        assert_eq!(model.position(), GridPosition::UNSET);
    }

    #[test]
    fn test_drag_outside_surface_clamps() {
        let mut model = PanjectModel::default();
        model.pointer_pressed(cell_px(-1, 100));
        model.pointer_moved(PixelPoint::new(5000.0, -5000.0));
        assert_eq!(model.position(), GridPosition::new(99, 0));
        assert_eq!(model.control(), 100.0);
    }

    #[test]
    fn test_crossing_triggers_single_flash() {
        let mut model = PanjectModel::default();
        // 49 × 100 cells = 49%
        assert_eq!(model.set_position(GridPosition::new(48, 0)), None);
        assert_eq!(model.control(), 49.0);

        // 51 × 100 cells = 51%
        let generation = model.set_position(GridPosition::new(50, 0));
        assert!(generation.is_some());
        assert!(model.overlay().flash.is_active());
        assert_eq!(model.status_disc_label(), "Threshold");

        // Staying above does not re-trigger
        assert_eq!(model.set_position(GridPosition::new(60, 0)), None);

        assert!(model.expire_flash(generation.unwrap()));
        assert!(!model.overlay().flash.is_active());
        assert_eq!(model.status_disc_label(), "DEMIURGE");
    }

    #[test]
    fn test_stale_expiry_keeps_newer_flash() {
        let mut model = PanjectModel::default();
        model.set_position(GridPosition::new(48, 0));
        let first = model.set_position(GridPosition::new(50, 0)).unwrap();
        let second = model.set_position(GridPosition::new(48, 0)).unwrap();

        assert!(!model.expire_flash(first));
        assert!(model.overlay().flash.is_active());
        assert!(model.expire_flash(second));
    }

    #[test]
    fn test_prime_rejected_while_unset() {
        let mut model = PanjectModel::default();
        assert!(model.set_prime_labels(true).is_err());
        assert!(model.overlay().notice.is_some());
        assert!(!model.overlay().show_prime_labels);

        // Next press anywhere dismisses the notice
        model.pointer_pressed(cell_px(70, 70));
        assert!(model.overlay().notice.is_none());
    }

    #[test]
    fn test_press_drops_prime_labels() {
        let mut model = PanjectModel::new(DEFAULT_GRAB_TOLERANCE, true);
        model.set_position(GridPosition::new(20, 20));
        model.set_prime_labels(true).unwrap();
        assert!(!model.overlay().show_corner_labels);

        model.pointer_pressed(cell_px(80, 80));
        assert!(!model.overlay().show_prime_labels);
        assert!(model.overlay().show_corner_labels);
    }

    #[test]
    fn test_every_mutation_bumps_revision() {
        let mut model = PanjectModel::default();
        let mut last = model.revision();

        model.set_position(GridPosition::new(3, 3));
        assert!(model.revision() > last);
        last = model.revision();

        model.set_corner_labels(true);
        assert!(model.revision() > last);
        last = model.revision();

        let _ = model.set_prime_labels(true);
        assert!(model.revision() > last);
        last = model.revision();

        // Nothing on screen, so dismissing leaves the revision alone
        model.dismiss_notice(model.overlay().notice_generation());
        assert_eq!(model.revision(), last);
    }

    #[test]
    fn test_repeated_rejection_survives_stale_dismiss() {
        let mut model = PanjectModel::default();
        assert!(model.set_prime_labels(true).is_err());
        let shown = model.overlay().notice_generation();

        // Same click re-raises the notice, then the listener's dismissal lands
        assert!(model.set_prime_labels(true).is_err());
        assert!(!model.dismiss_notice(shown));
        assert!(model.overlay().notice.is_some());

        assert!(model.dismiss_notice(model.overlay().notice_generation()));
        assert!(model.overlay().notice.is_none());
    }

    #[test]
    fn test_secondary_press_restores_corners_without_grab() {
        let mut model = PanjectModel::new(DEFAULT_GRAB_TOLERANCE, true);
        model.set_position(GridPosition::new(20, 20));
        model.set_prime_labels(true).unwrap();

        model.surface_pressed();
        assert!(!model.overlay().show_prime_labels);
        assert!(model.overlay().show_corner_labels);
        assert_eq!(model.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_secondary_press_clears_notice() {
        let mut model = PanjectModel::default();
        assert!(model.set_prime_labels(true).is_err());
        model.surface_pressed();
        assert!(model.overlay().notice.is_none());
    }

    #[test]
    fn test_can_grab_matches_press_tolerance() {
        let model = PanjectModel::default();
        assert_eq!(model.grab_tolerance(), DEFAULT_GRAB_TOLERANCE);

        // Diagonal neighbour of the initial point is 9 px away on both axes
        assert!(model.can_grab(cell_px(0, 99)));
        assert!(!model.can_grab(cell_px(1, 98)));

        let mut pressed = model.clone();
        assert!(pressed.pointer_pressed(cell_px(0, 99)));
    }
}
