//! Colors and visual constants for the pixel grid

use iced::Color;

/// Diameter of the corner badges
pub const BADGE_SIZE: f32 = 24.0;

/// Horizontal room reserved left and right of the surface for corner badges
pub const BADGE_MARGIN: f32 = 32.0;

/// Diameter of the central status disc
pub const STATUS_DISC_SIZE: f32 = 128.0;

/// Grid colors
///
/// Configurable via ~/.config/panject/theme.yaml in panject-app.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPalette {
    /// Surface background (visible through the cell gaps)
    pub background: Color,
    /// Left frame column and bottom frame row
    pub frame: Color,
    /// Unclaimed white cells
    pub cell: Color,
    /// Horizontal indicator line
    pub reparatron: Color,
    /// Vertical indicator line
    pub ezoptron: Color,
    /// Claimed region while prime labels are shown
    pub claimed: Color,
    /// Control point
    pub point: Color,
    /// ABCD badges
    pub badge: Color,
    /// Status disc behind the status label
    pub status_disc: Color,
}

impl GridPalette {
    pub const DEFAULT: Self = Self {
        background: Color::from_rgb(0.42, 0.447, 0.502),   // #6B7280
        frame: Color::from_rgb(0.216, 0.255, 0.318),       // #374151
        cell: Color::WHITE,
        reparatron: Color::from_rgb(0.937, 0.267, 0.267),  // #EF4444
        ezoptron: Color::from_rgb(0.133, 0.773, 0.369),    // #22C55E
        claimed: Color::from_rgb(1.0, 0.647, 0.0),         // #FFA500
        point: Color::from_rgb(0.231, 0.51, 0.965),        // #3B82F6
        badge: Color::WHITE,
        status_disc: Color::from_rgb(0.937, 0.267, 0.267), // #EF4444
    };
}

impl Default for GridPalette {
    fn default() -> Self {
        Self::DEFAULT
    }
}
