//! Application messages for panject

use panject_widgets::GridEvent;

/// Messages that can be sent to the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer event from the pixel grid canvas
    Grid(GridEvent),
    /// Deferred reset of the threshold flash (carries the flash generation)
    ThresholdFlashExpired(u64),

    // Overlays
    /// "show ABCD" checkbox
    ToggleCornerLabels(bool),
    /// "show A'B'C'D'" checkbox
    TogglePrimeLabels(bool),
    /// Any pointer press or key press while the validation notice is shown
    /// (carries the notice generation the listener was built for)
    DismissNotice(u64),

    // Settings
    /// Config save complete
    SaveConfigComplete(Result<(), String>),
}
