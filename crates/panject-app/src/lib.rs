//! Panject - simplified two-component 'panject-environment' ecosystem model
//!
//! A 100×100 grid with a draggable control point. The point's horizontal
//! component (reparatron) and vertical component (ezoptron) span a region
//! whose share of the grid is the demiurgic control value.

pub mod args;
pub mod config;
pub mod ui;
