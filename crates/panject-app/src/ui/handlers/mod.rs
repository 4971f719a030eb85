//! Message handlers for PanjectApp
//!
//! Each module extends `PanjectApp` with the handlers for one message group.

pub mod overlay;
pub mod pointer;
pub mod settings;
