//! Demiurgic control calculation
//!
//! The control value is the share of the 100×100 white area claimed by the
//! rectangle spanned from the bottom-left corner to the control point.

use std::fmt;

use crate::grid::{GridPosition, GRID_COUNT};

/// Control value at which the status flips
pub const CONTROL_THRESHOLD: f64 = 50.0;

const TOTAL_CELLS: i64 = (GRID_COUNT as i64) * (GRID_COUNT as i64);

/// Number of cells claimed by the point (0 while unset)
pub fn controlled_cells(position: GridPosition) -> i64 {
    if !position.is_set() {
        return 0;
    }
    position.reparatron() as i64 * position.ezoptron() as i64
}

/// Demiurgic control in percent, within [0, 100]
pub fn control_value(position: GridPosition) -> f64 {
    let cells = controlled_cells(position);
    // Multiply first so the result is the correctly rounded `cells / 100`
    (cells as f64 * 100.0 / TOTAL_CELLS as f64).min(100.0)
}

/// Whether moving from `previous` to `next` crosses the threshold
///
/// Edge-triggered: landing exactly on the threshold from either side counts,
/// leaving it does not.
pub fn crosses_threshold(previous: f64, next: f64) -> bool {
    (previous < CONTROL_THRESHOLD && next >= CONTROL_THRESHOLD)
        || (previous > CONTROL_THRESHOLD && next <= CONTROL_THRESHOLD)
}

/// Status derived from the control value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    BelowThreshold,
    AtThreshold,
    AboveThreshold,
}

impl Status {
    pub fn from_control(control: f64) -> Self {
        if control == CONTROL_THRESHOLD {
            Status::AtThreshold
        } else if control > CONTROL_THRESHOLD {
            Status::AboveThreshold
        } else {
            Status::BelowThreshold
        }
    }

    /// Label shown in the status bar and the status disc
    pub fn label(&self) -> &'static str {
        match self {
            Status::BelowThreshold => "semiurge",
            Status::AtThreshold => "Threshold",
            Status::AboveThreshold => "DEMIURGE",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
