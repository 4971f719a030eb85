//! Overlay flags: corner labels, prime labels, validation notice, threshold flash

use crate::error::OverlayError;
use crate::grid::GridPosition;

/// One-shot "Threshold" flash with generation tagging
///
/// Every trigger bumps the generation. A deferred expiry only clears the
/// flash when it carries the current generation, so an older expiry can
/// never cut a newer flash short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThresholdFlash {
    active: bool,
    generation: u64,
}

impl ThresholdFlash {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Show the flash; returns the generation the expiry must carry
    pub fn trigger(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.active = true;
        self.generation
    }

    /// Clear the flash if `generation` is current; returns true if cleared
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.active && generation == self.generation {
            self.active = false;
            true
        } else {
            false
        }
    }
}

/// Visibility of all label overlays
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OverlayState {
    /// ABCD corner badges (checkbox state)
    pub show_corner_labels: bool,
    /// Corner-label visibility to restore when prime labels turn off
    pub saved_corner_labels: bool,
    /// A'B'C'D' badges plus the claimed region
    pub show_prime_labels: bool,
    /// Validation notice currently on screen
    pub notice: Option<OverlayError>,
    /// Bumped on every rejection; listeners tag their dismissals with it
    notice_generation: u64,
    pub flash: ThresholdFlash,
}

impl OverlayState {
    pub fn new(show_corner_labels: bool) -> Self {
        Self {
            show_corner_labels,
            saved_corner_labels: show_corner_labels,
            ..Self::default()
        }
    }

    /// Corner-label checkbox: sets both the visible and the saved state
    pub fn set_corner_labels(&mut self, enabled: bool) {
        self.show_corner_labels = enabled;
        self.saved_corner_labels = enabled;
    }

    /// Prime-label checkbox
    ///
    /// Enabling requires both components of `position` to be non-zero. On
    /// rejection nothing changes except the validation notice, which is
    /// raised with the returned error.
    pub fn set_prime_labels(
        &mut self,
        enabled: bool,
        position: GridPosition,
    ) -> Result<(), OverlayError> {
        if enabled {
            let (reparatron, ezoptron) = (position.reparatron(), position.ezoptron());
            if reparatron == 0 || ezoptron == 0 {
                let err = OverlayError::ZeroComponent { reparatron, ezoptron };
                self.notice = Some(err.clone());
                self.notice_generation = self.notice_generation.wrapping_add(1);
                return Err(err);
            }
            if !self.show_prime_labels {
                self.saved_corner_labels = self.show_corner_labels;
            }
            self.show_prime_labels = true;
            self.show_corner_labels = false;
        } else {
            self.show_prime_labels = false;
            self.show_corner_labels = self.saved_corner_labels;
        }
        Ok(())
    }

    /// A press on the surface drops the prime overlay and restores the corners
    pub fn surface_pressed(&mut self) {
        self.show_prime_labels = false;
        self.show_corner_labels = self.saved_corner_labels;
    }

    pub fn notice_generation(&self) -> u64 {
        self.notice_generation
    }

    /// Dismiss the notice raised as `generation`
    ///
    /// A dismissal tagged with an older generation belongs to a notice that
    /// was already replaced, so it leaves the current one on screen. Returns
    /// true if a notice was dismissed.
    pub fn dismiss_notice(&mut self, generation: u64) -> bool {
        if generation != self.notice_generation {
            return false;
        }
        self.clear_notice()
    }

    /// Drop whatever notice is showing; returns true if there was one
    pub fn clear_notice(&mut self) -> bool {
        self.notice.take().is_some()
    }

    /// ABCD badges are drawn only while the prime overlay is off
    pub fn corner_labels_visible(&self) -> bool {
        self.show_corner_labels && !self.show_prime_labels
    }

    /// Prime badges need a set position to anchor to
    pub fn prime_labels_visible(&self, position: GridPosition) -> bool {
        self.show_prime_labels && position.is_set()
    }

    pub fn status_disc_visible(&self) -> bool {
        self.show_prime_labels || self.flash.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_generations() {
        let mut flash = ThresholdFlash::default();
        let first = flash.trigger();
        let second = flash.trigger();
        assert!(flash.is_active());

        // Stale expiry from the first trigger is ignored
        assert!(!flash.expire(first));
        assert!(flash.is_active());

        assert!(flash.expire(second));
        assert!(!flash.is_active());
        assert!(!flash.expire(second));
    }

    #[test]
    fn test_corner_labels_checkbox_updates_saved_state() {
        let mut overlay = OverlayState::default();
        overlay.set_corner_labels(true);
        assert!(overlay.show_corner_labels);
        assert!(overlay.saved_corner_labels);
        assert!(overlay.corner_labels_visible());
    }

    #[test]
    fn test_prime_labels_rejected_when_unset() {
        let mut overlay = OverlayState::new(true);
        let result = overlay.set_prime_labels(true, GridPosition::new(-1, 40));
        assert_eq!(
            result,
            Err(OverlayError::ZeroComponent { reparatron: 0, ezoptron: 60 })
        );
        assert!(!overlay.show_prime_labels);
        assert!(overlay.show_corner_labels);
        assert!(overlay.notice.is_some());
        assert_eq!(
            overlay.notice.as_ref().map(|e| e.to_string()).as_deref(),
            Some("Both coordinates must be greater than zero")
        );
    }

    #[test]
    fn test_prime_labels_rejected_on_bottom_row() {
        let mut overlay = OverlayState::default();
        assert!(overlay.set_prime_labels(true, GridPosition::new(30, 100)).is_err());
    }

    #[test]
    fn test_prime_labels_hide_and_restore_corners() {
        let mut overlay = OverlayState::new(true);
        let pos = GridPosition::new(10, 10);

        overlay.set_prime_labels(true, pos).unwrap();
        assert!(overlay.show_prime_labels);
        assert!(!overlay.show_corner_labels);
        assert!(!overlay.corner_labels_visible());
        assert!(overlay.prime_labels_visible(pos));
        assert!(overlay.status_disc_visible());

        overlay.set_prime_labels(false, pos).unwrap();
        assert!(!overlay.show_prime_labels);
        assert!(overlay.show_corner_labels);
    }

    #[test]
    fn test_surface_press_restores_saved_corners() {
        let mut overlay = OverlayState::new(true);
        overlay.set_prime_labels(true, GridPosition::new(5, 5)).unwrap();
        overlay.surface_pressed();
        assert!(!overlay.show_prime_labels);
        assert!(overlay.show_corner_labels);
    }

    #[test]
    fn test_dismiss_notice() {
        let mut overlay = OverlayState::default();
        assert!(!overlay.dismiss_notice(overlay.notice_generation()));
        let _ = overlay.set_prime_labels(true, GridPosition::UNSET);
        assert!(overlay.dismiss_notice(overlay.notice_generation()));
        assert!(overlay.notice.is_none());
    }

    #[test]
    fn test_stale_dismiss_keeps_reraised_notice() {
        let mut overlay = OverlayState::default();
        let _ = overlay.set_prime_labels(true, GridPosition::UNSET);
        let first = overlay.notice_generation();

        // Rejected again before the first dismissal is delivered
        let _ = overlay.set_prime_labels(true, GridPosition::UNSET);
        assert_ne!(overlay.notice_generation(), first);

        assert!(!overlay.dismiss_notice(first));
        assert!(overlay.notice.is_some());
        assert!(overlay.dismiss_notice(overlay.notice_generation()));
    }

    #[test]
    fn test_clear_notice_ignores_generation() {
        let mut overlay = OverlayState::default();
        let _ = overlay.set_prime_labels(true, GridPosition::UNSET);
        assert!(overlay.clear_notice());
        assert!(!overlay.clear_notice());
    }
}
