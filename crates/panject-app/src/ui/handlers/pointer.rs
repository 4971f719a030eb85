//! Pointer message handlers
//!
//! Handles: Grid, ThresholdFlashExpired

use iced::Task;
use panject_widgets::GridEvent;

use super::super::app::PanjectApp;
use super::super::message::Message;

impl PanjectApp {
    /// Handle a pointer event from the grid canvas
    pub fn handle_grid_event(&mut self, event: GridEvent) -> Task<Message> {
        match event {
            GridEvent::Pressed(local) => {
                self.model.pointer_pressed(local);
                Task::none()
            }
            GridEvent::SecondaryPressed => {
                self.model.surface_pressed();
                Task::none()
            }
            GridEvent::Moved(local) => match self.model.pointer_moved(local) {
                Some(generation) => self.schedule_flash_expiry(generation),
                None => Task::none(),
            },
            GridEvent::Released | GridEvent::Left => {
                self.model.pointer_released();
                Task::none()
            }
        }
    }

    /// Handle ThresholdFlashExpired message
    pub fn handle_flash_expired(&mut self, generation: u64) -> Task<Message> {
        if !self.model.expire_flash(generation) {
            log::debug!("Ignoring stale flash expiry #{}", generation);
        }
        Task::none()
    }

    /// Clear the flash after the configured delay
    fn schedule_flash_expiry(&self, generation: u64) -> Task<Message> {
        let delay = self.config.interaction.flash_duration();
        Task::perform(
            // Build the timer inside the future so it binds to the runtime's clock
            async move { tokio::time::sleep(delay).await },
            move |_| Message::ThresholdFlashExpired(generation),
        )
    }
}
