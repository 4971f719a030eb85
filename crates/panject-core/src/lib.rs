//! Panject Core - model for the two-component 'panject-environment' widget
//!
//! Everything in this crate is GUI-agnostic: pixel coordinates come in as
//! plain `f32` pairs relative to the drawable surface, and the rendering
//! crate reads the resulting state back out.
//!
//! ## Modules
//!
//! - [`grid`]: grid constants, `GridPosition`, pointer → cell mapping and
//!   cell → pixel geometry
//! - [`control`]: demiurgic control value, status and threshold crossing
//! - [`drag`]: Idle/Dragging interaction state machine
//! - [`overlay`]: corner labels, prime labels, validation notice and the
//!   threshold flash
//! - [`model`]: `PanjectModel`, the single owner of all widget state
//! - [`error`]: domain errors

pub mod control;
pub mod drag;
pub mod error;
pub mod grid;
pub mod model;
pub mod overlay;

pub use control::{control_value, crosses_threshold, Status, CONTROL_THRESHOLD};
pub use drag::DragState;
pub use error::OverlayError;
pub use grid::{
    GridPosition, PixelPoint, PixelRect,
    CELL_GAP, CELL_PITCH, CELL_SIZE, GRID_COUNT, LINE_WIDTH, POINT_SIZE, SURFACE_SIZE,
};
pub use model::{PanjectModel, DEFAULT_GRAB_TOLERANCE};
pub use overlay::{OverlayState, ThresholdFlash};
