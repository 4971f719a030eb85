//! Errors raised by widget interactions

use thiserror::Error;

/// Rejected overlay toggles
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverlayError {
    /// Prime labels need a claimed region with non-zero extent on both axes
    #[error("Both coordinates must be greater than zero")]
    ZeroComponent { reparatron: i32, ezoptron: i32 },
}
