//! Pixel grid widget
//!
//! A 100×100 cell surface with a draggable control point, indicator lines,
//! optional corner badges and the central status disc.
//!
//! ## Layout
//!
//! ```text
//! (B)┌──────────────────────┐(C)
//!    │▓□□□□□□□□□□□□□□□□□□□□□│
//!    │▓□□□□□□□□■□□□□□□□□□□□□│   ■ control point
//!    │▓━━━━━━━━■□□□□□□□□□□□□│   ━ reparatron line
//!    │▓□□□□□□□□┃□□□□□□□□□□□□│   ┃ ezoptron line
//! (A)│▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓│(D)
//!    └──────────────────────┘
//! ```

pub mod canvas;
pub mod view;

pub use canvas::{GridCaches, GridEvent, GridInteraction, PixelGridCanvas, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use view::pixel_grid;
