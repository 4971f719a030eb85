//! Shared UI widgets for the panject application
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! - **Model**: `panject_core::PanjectModel` holds all state
//! - **View functions**: take the model + a callback, return `Element<Message>`
//! - **Canvas Program**: renders the grid and overlays, translates mouse
//!   events into [`GridEvent`]s
//!
//! Grid, indicator and badges share one canvas (iced bug #3040: several
//! canvases in one window do not render reliably).

pub mod grid;
pub mod theme;

pub use grid::{pixel_grid, GridCaches, GridEvent, GridInteraction, PixelGridCanvas, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use theme::{GridPalette, BADGE_MARGIN, BADGE_SIZE, STATUS_DISC_SIZE};
