//! Overlay message handlers
//!
//! Handles: ToggleCornerLabels, TogglePrimeLabels, DismissNotice

use iced::Task;

use super::super::app::PanjectApp;
use super::super::message::Message;

impl PanjectApp {
    /// Handle ToggleCornerLabels message
    ///
    /// The choice is remembered in the config file.
    pub fn handle_toggle_corner_labels(&mut self, enabled: bool) -> Task<Message> {
        self.model.set_corner_labels(enabled);
        self.config.display.show_corner_labels = enabled;
        self.save_config()
    }

    /// Handle TogglePrimeLabels message
    pub fn handle_toggle_prime_labels(&mut self, enabled: bool) -> Task<Message> {
        if let Err(e) = self.model.set_prime_labels(enabled) {
            log::info!("Prime labels not enabled: {}", e);
        }
        Task::none()
    }

    /// Handle DismissNotice message
    pub fn handle_dismiss_notice(&mut self, generation: u64) -> Task<Message> {
        if !self.model.dismiss_notice(generation) {
            log::debug!("Ignoring dismissal for notice #{}", generation);
        }
        Task::none()
    }
}
