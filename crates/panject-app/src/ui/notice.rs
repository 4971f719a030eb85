//! Validation notice shown over the page center

use iced::widget::{container, text};
use iced::{Border, Color, Element};
use panject_core::OverlayError;

use super::message::Message;

const NOTICE_BACKGROUND: Color = Color::from_rgb(0.937, 0.267, 0.267);

pub fn view(error: &OverlayError) -> Element<'_, Message> {
    container(text(error.to_string()).size(14).color(Color::WHITE))
        .padding([8, 16])
        .style(|_theme| container::Style {
            background: Some(NOTICE_BACKGROUND.into()),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
