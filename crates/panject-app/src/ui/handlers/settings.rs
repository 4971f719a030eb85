//! Settings message handlers
//!
//! Handles: SaveConfigComplete

use iced::Task;

use super::super::app::PanjectApp;
use super::super::message::Message;
use crate::config;

impl PanjectApp {
    /// Write the current config to disk in the background
    pub fn save_config(&self) -> Task<Message> {
        let config_path = self.config_path.clone();
        let config_clone = self.config.clone();

        Task::perform(
            async move {
                config::save_config(&config_clone, &config_path).map_err(|e| e.to_string())
            },
            Message::SaveConfigComplete,
        )
    }

    /// Handle SaveConfigComplete message
    pub fn handle_save_config_complete(&mut self, result: Result<(), String>) -> Task<Message> {
        match result {
            Ok(()) => log::info!("Config saved successfully"),
            Err(e) => log::error!("Failed to save config: {}", e),
        }
        Task::none()
    }
}
