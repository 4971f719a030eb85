//! Grid geometry and the pointer → cell coordinate mapper
//!
//! The drawable surface holds a 100×100 block of white cells plus one frame
//! column on the left and one frame row at the bottom:
//!
//! ```text
//!  col 0   cols 1..=100
//! [▓] [□] [□] ... [□]    row 0
//! [▓] [□] [□] ... [□]    row 1
//!  ...
//! [▓] [□] [□] ... [□]    row 99
//! [▓] [▓] [▓] ... [▓]    row 100 (frame)
//! ```
//!
//! A `GridPosition` names the white cell under the control point. `x` is the
//! white column index (surface column `x + 1`), `y` is the surface row. The
//! frame cell at `(-1, 100)` is the "unset" position.

/// Number of white cells per axis
pub const GRID_COUNT: i32 = 100;

/// Edge length of one cell in pixels
pub const CELL_SIZE: f32 = 8.0;

/// Gap between neighbouring cells in pixels
pub const CELL_GAP: f32 = 1.0;

/// Distance between the origins of neighbouring cells
pub const CELL_PITCH: f32 = CELL_SIZE + CELL_GAP;

/// Edge length of the control point square
pub const POINT_SIZE: f32 = 8.0;

/// Stroke width of the reparatron/ezoptron indicator lines
pub const LINE_WIDTH: f32 = 8.0;

/// Edge length of the (square) drawable surface: 101 cells minus the trailing gap
pub const SURFACE_SIZE: f32 = (GRID_COUNT as f32 + 1.0) * CELL_PITCH - CELL_GAP;

/// A point in surface pixel space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelPoint {
    pub x: f32,
    pub y: f32,
}

impl PixelPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in surface pixel space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Position of the control point on the grid
///
/// Always clamped: `x` ∈ [-1, 99], `y` ∈ [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPosition {
    x: i32,
    y: i32,
}

impl Default for GridPosition {
    fn default() -> Self {
        Self::UNSET
    }
}

impl GridPosition {
    pub const MIN_X: i32 = -1;
    pub const MAX_X: i32 = GRID_COUNT - 1;
    pub const MIN_Y: i32 = 0;
    pub const MAX_Y: i32 = GRID_COUNT;

    /// Bottom-left frame cell; nothing is claimed here
    pub const UNSET: Self = Self { x: -1, y: GRID_COUNT };

    /// Create a position, clamping both coordinates into range
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x: x.clamp(Self::MIN_X, Self::MAX_X),
            y: y.clamp(Self::MIN_Y, Self::MAX_Y),
        }
    }

    /// Map a pixel position relative to the surface origin to the nearest cell
    ///
    /// Rounding is half-up. Anything outside the surface is clamped, never
    /// rejected.
    pub fn from_local(local: PixelPoint) -> Self {
        let gx = round_half_up(local.x / CELL_PITCH).saturating_sub(1);
        let gy = round_half_up(local.y / CELL_PITCH);
        Self::new(gx, gy)
    }

    /// Map an absolute pointer position given the surface's top-left corner
    pub fn from_pointer(pointer: PixelPoint, surface_origin: PixelPoint) -> Self {
        Self::from_local(PixelPoint::new(
            pointer.x - surface_origin.x,
            pointer.y - surface_origin.y,
        ))
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Horizontal component in percent (0-100)
    pub fn reparatron(&self) -> i32 {
        self.x + 1
    }

    /// Vertical component in percent (0-100)
    pub fn ezoptron(&self) -> i32 {
        GRID_COUNT - self.y
    }

    /// True when the point sits inside the white area on both axes
    pub fn is_set(&self) -> bool {
        self.x >= 0 && self.y < GRID_COUNT
    }

    /// Top-left corner of the rendered control point
    pub fn indicator_origin(&self) -> PixelPoint {
        let inset = (CELL_SIZE - POINT_SIZE) / 2.0;
        PixelPoint::new(
            (self.x + 1) as f32 * CELL_PITCH + inset,
            self.y as f32 * CELL_PITCH + inset,
        )
    }

    /// Center of the cell under the control point (indicator lines start here)
    pub fn indicator_center(&self) -> PixelPoint {
        PixelPoint::new(
            (self.x + 1) as f32 * CELL_PITCH + CELL_SIZE / 2.0,
            self.y as f32 * CELL_PITCH + CELL_SIZE / 2.0,
        )
    }

    /// Region claimed by the point: from the bottom-left of the white area
    /// up to and including the point's cell
    ///
    /// Returns `None` while the position is unset.
    pub fn claimed_region(&self) -> Option<PixelRect> {
        if !self.is_set() {
            return None;
        }
        let start_x = CELL_PITCH;
        let start_y = GRID_COUNT as f32 * CELL_PITCH;
        let end_x = (self.x + 1) as f32 * CELL_PITCH + CELL_SIZE;
        let end_y = self.y as f32 * CELL_PITCH;
        Some(PixelRect {
            x: start_x,
            y: end_y,
            width: end_x - start_x,
            height: start_y - end_y,
        })
    }
}

fn round_half_up(value: f32) -> i32 {
    // `as` saturates, so huge pointer coordinates still clamp cleanly
    (value + 0.5).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_size() {
        assert_eq!(SURFACE_SIZE, 908.0);
    }

    #[test]
    fn test_new_clamps() {
        let pos = GridPosition::new(-5, 250);
        assert_eq!((pos.x(), pos.y()), (-1, 100));

        let pos = GridPosition::new(120, -3);
        assert_eq!((pos.x(), pos.y()), (99, 0));
    }

    #[test]
    fn test_default_is_unset() {
        let pos = GridPosition::default();
        assert_eq!(pos, GridPosition::UNSET);
        assert!(!pos.is_set());
        assert_eq!(pos.reparatron(), 0);
        assert_eq!(pos.ezoptron(), 0);
    }

    #[test]
    fn test_from_local_rounds_to_nearest_cell() {
        // Surface column 50 starts at 450px → white column 49
        let pos = GridPosition::from_local(PixelPoint::new(450.0, 450.0));
        assert_eq!((pos.x(), pos.y()), (49, 50));

        // 4.4px into the pitch still rounds down, 4.5px rounds up
        let pos = GridPosition::from_local(PixelPoint::new(454.4, 454.5));
        assert_eq!((pos.x(), pos.y()), (49, 51));
    }

    #[test]
    fn test_from_local_clamps_outside_surface() {
        let pos = GridPosition::from_local(PixelPoint::new(-300.0, -300.0));
        assert_eq!((pos.x(), pos.y()), (-1, 0));

        let pos = GridPosition::from_local(PixelPoint::new(5000.0, 5000.0));
        assert_eq!((pos.x(), pos.y()), (99, 100));

        let pos = GridPosition::from_local(PixelPoint::new(f32::MIN, f32::MAX));
        assert_eq!((pos.x(), pos.y()), (-1, 100));
    }

    #[test]
    fn test_from_pointer_subtracts_origin() {
        let origin = PixelPoint::new(100.0, 40.0);
        let pos = GridPosition::from_pointer(PixelPoint::new(100.0 + 9.0, 40.0 + 18.0), origin);
        assert_eq!((pos.x(), pos.y()), (0, 2));
    }

    #[test]
    fn test_components() {
        let pos = GridPosition::new(49, 50);
        assert_eq!(pos.reparatron(), 50);
        assert_eq!(pos.ezoptron(), 50);
        assert!(pos.is_set());
    }

    #[test]
    fn test_indicator_geometry() {
        let pos = GridPosition::UNSET;
        assert_eq!(pos.indicator_origin(), PixelPoint::new(0.0, 900.0));
        assert_eq!(pos.indicator_center(), PixelPoint::new(4.0, 904.0));

        let pos = GridPosition::new(0, 0);
        assert_eq!(pos.indicator_origin(), PixelPoint::new(9.0, 0.0));
    }

    #[test]
    fn test_claimed_region() {
        assert!(GridPosition::UNSET.claimed_region().is_none());
        assert!(GridPosition::new(10, 100).claimed_region().is_none());

        let rect = GridPosition::new(0, 99).claimed_region().unwrap();
        assert_eq!(rect, PixelRect { x: 9.0, y: 891.0, width: 8.0, height: 9.0 });

        let rect = GridPosition::new(99, 0).claimed_region().unwrap();
        assert_eq!(rect.width, 899.0);
        assert_eq!(rect.height, 900.0);
    }
}
