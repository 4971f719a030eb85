//! Status bar below the grid
//!
//! ```text
//! ■ reparatron:  50%  ■ ezoptron:  50%  demiurgic control:  25.00%  status: semiurge  show ABCD: [ ]  show A'B'C'D': [ ]
//! ```

use iced::widget::{checkbox, container, row, text, Space};
use iced::{Alignment, Color, Element, Font, Length};
use panject_core::PanjectModel;
use panject_widgets::GridPalette;

use super::message::Message;

const TEXT_SIZE: u16 = 14;
const SWATCH_SIZE: f32 = 8.0;

/// Formatted values shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReadout {
    pub reparatron: String,
    pub ezoptron: String,
    pub control: String,
    pub status: String,
}

impl StatusReadout {
    pub fn from_model(model: &PanjectModel) -> Self {
        let position = model.position();
        Self {
            reparatron: format!("{}%", position.reparatron()),
            ezoptron: format!("{}%", position.ezoptron()),
            control: format!("{:.2}%", model.control()),
            status: model.status().to_string(),
        }
    }
}

/// Render the status bar
pub fn view<'a>(model: &'a PanjectModel, palette: &GridPalette) -> Element<'a, Message> {
    let readout = StatusReadout::from_model(model);
    let overlay = model.overlay();

    row![
        swatch(palette.reparatron),
        label("reparatron:"),
        value(readout.reparatron, 48.0),
        Space::new().width(Length::Fixed(16.0)),
        swatch(palette.ezoptron),
        label("ezoptron:"),
        value(readout.ezoptron, 48.0),
        Space::new().width(Length::Fixed(16.0)),
        label("demiurgic control:"),
        value(readout.control, 72.0),
        Space::new().width(Length::Fixed(16.0)),
        label("status:"),
        label(readout.status).width(Length::Fixed(80.0)),
        Space::new().width(Length::Fixed(16.0)),
        label("show ABCD:"),
        checkbox(overlay.show_corner_labels)
            .on_toggle(Message::ToggleCornerLabels)
            .size(16),
        Space::new().width(Length::Fixed(16.0)),
        label("show A'B'C'D':"),
        checkbox(overlay.show_prime_labels)
            .on_toggle(Message::TogglePrimeLabels)
            .size(16),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .padding([4, 32])
    .into()
}

fn label<'a>(content: impl Into<String>) -> text::Text<'a> {
    text(content.into())
        .size(f32::from(TEXT_SIZE))
        .font(Font::MONOSPACE)
        .color(Color::WHITE)
}

/// Right-aligned fixed-width value
fn value<'a>(content: String, width: f32) -> text::Text<'a> {
    label(content)
        .width(Length::Fixed(width))
        .align_x(iced::alignment::Horizontal::Right)
}

fn swatch<'a>(color: Color) -> Element<'a, Message> {
    container(Space::new())
        .width(Length::Fixed(SWATCH_SIZE))
        .height(Length::Fixed(SWATCH_SIZE))
        .style(move |_theme| container::Style {
            background: Some(color.into()),
            ..Default::default()
        })
        .into()
}
