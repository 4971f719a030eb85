//! Main application state and iced implementation

use std::path::PathBuf;

use iced::widget::{center, column, container, stack, text};
use iced::{event, keyboard, mouse, window, Color, Element, Event, Font, Length, Subscription, Task, Theme};
use panject_core::PanjectModel;
use panject_widgets::{pixel_grid, GridCaches, GridPalette, CANVAS_WIDTH};

use super::message::Message;
use crate::config::Config;

const TITLE: &str = "Simplified two-component 'panject-environment' ecosystem model";
const PAGE_BACKGROUND: Color = Color::from_rgb(0.42, 0.447, 0.502);
const TITLE_COLOR: Color = Color::from_rgb(0.82, 0.835, 0.859);

/// Application state
pub struct PanjectApp {
    /// Position, drag and overlay state
    pub(crate) model: PanjectModel,
    /// Grid colors from theme.yaml
    pub(crate) palette: GridPalette,
    /// Canvas geometry caches, invalidated whenever the model changes
    pub(crate) caches: GridCaches,
    /// Loaded configuration (written back on corner-label toggles)
    pub(crate) config: Config,
    /// Where `config` is saved
    pub(crate) config_path: PathBuf,
}

impl PanjectApp {
    /// Create a new application instance
    pub fn new(config: Config, config_path: PathBuf, palette: GridPalette) -> Self {
        let model = PanjectModel::new(
            config.interaction.grab_tolerance,
            config.display.show_corner_labels,
        );
        Self {
            model,
            palette,
            caches: GridCaches::default(),
            config,
            config_path,
        }
    }

    pub fn model(&self) -> &PanjectModel {
        &self.model
    }

    /// Update application state
    ///
    /// Any model mutation invalidates the overlay layer, so every state
    /// change is followed by a redraw.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let revision = self.model.revision();

        let task = match message {
            Message::Grid(event) => self.handle_grid_event(event),
            Message::ThresholdFlashExpired(generation) => self.handle_flash_expired(generation),
            Message::ToggleCornerLabels(enabled) => self.handle_toggle_corner_labels(enabled),
            Message::TogglePrimeLabels(enabled) => self.handle_toggle_prime_labels(enabled),
            Message::DismissNotice(generation) => self.handle_dismiss_notice(generation),
            Message::SaveConfigComplete(result) => self.handle_save_config_complete(result),
        };

        if self.model.revision() != revision {
            self.caches.model_changed();
        }

        task
    }

    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        let header = container(
            text(TITLE)
                .size(14)
                .color(TITLE_COLOR)
                .font(Font {
                    family: iced::font::Family::Serif,
                    ..Font::DEFAULT
                }),
        )
        .width(Length::Fixed(CANVAS_WIDTH))
        .padding([6, 0]);

        let grid = pixel_grid(&self.model, &self.palette, &self.caches, Message::Grid);

        let page = container(
            column![
                header,
                grid,
                super::status_bar::view(&self.model, &self.palette),
            ]
            .spacing(8)
            .align_x(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(PAGE_BACKGROUND.into()),
            ..Default::default()
        });

        match &self.model.overlay().notice {
            Some(notice) => stack![page, center(super::notice::view(notice))].into(),
            None => page.into(),
        }
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Window-level dismiss listener, alive only while the notice is shown
    ///
    /// Dismissals are tagged with the notice generation, so a press that
    /// re-raises the notice cannot also clear it.
    pub fn subscription(&self) -> Subscription<Message> {
        match self.dismiss_listener() {
            Some(generation) => event::listen_with(dismiss_trigger)
                .with(generation)
                .map(|(generation, ())| Message::DismissNotice(generation)),
            None => Subscription::none(),
        }
    }

    /// Generation of the notice the dismiss listener serves, if one is shown
    fn dismiss_listener(&self) -> Option<u64> {
        let overlay = self.model.overlay();
        overlay.notice.as_ref().map(|_| overlay.notice_generation())
    }
}

/// Any press (pointer or key) dismisses the validation notice
fn dismiss_trigger(event: Event, _status: event::Status, _window: window::Id) -> Option<()> {
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(_))
        | Event::Keyboard(keyboard::Event::KeyPressed { .. }) => Some(()),
        _ => None,
    }
}
