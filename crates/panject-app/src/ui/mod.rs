//! User interface modules for panject

pub mod app;
pub mod handlers;
pub mod message;
pub mod notice;
pub mod status_bar;
pub mod theme;

pub use app::PanjectApp;
pub use message::Message;
