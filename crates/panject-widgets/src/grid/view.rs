//! Pixel grid view function
//!
//! ```ignore
//! fn view(&self) -> Element<Message> {
//!     let grid = pixel_grid(&self.model, &self.palette, &self.caches, Message::Grid);
//!     column![grid, status_bar].into()
//! }
//! ```

use super::canvas::{GridCaches, GridEvent, PixelGridCanvas, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::theme::GridPalette;
use iced::widget::Canvas;
use iced::{Element, Length};
use panject_core::PanjectModel;

/// Create the pixel grid element
///
/// # Arguments
///
/// * `model` - Widget model to render
/// * `palette` - Grid colors
/// * `caches` - Geometry caches owned by the application; clear the overlay
///   cache whenever the model's revision changes
/// * `on_event` - Called with every pointer event the grid wants handled
pub fn pixel_grid<'a, Message>(
    model: &'a PanjectModel,
    palette: &'a GridPalette,
    caches: &'a GridCaches,
    on_event: impl Fn(GridEvent) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    Canvas::new(PixelGridCanvas {
        model,
        palette,
        caches,
        on_event,
    })
    .width(Length::Fixed(CANVAS_WIDTH))
    .height(Length::Fixed(CANVAS_HEIGHT))
    .into()
}
