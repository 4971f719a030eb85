//! Panject - simplified two-component 'panject-environment' ecosystem model
//!
//! ## Command line flags
//!
//! - `--config <path>`: settings file (default ~/.config/panject/config.yaml)
//! - `--theme <path>`: color file (default ~/.config/panject/theme.yaml)

use iced::{Size, Task};
use panject_app::args::StartupArgs;
use panject_app::config;
use panject_app::ui::theme as theme_config;
use panject_app::ui::{Message, PanjectApp};
use panject_widgets::CANVAS_WIDTH;

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("panject starting up");

    let args = StartupArgs::parse(std::env::args().skip(1));

    let config_path = args.config_path.unwrap_or_else(config::default_config_path);
    let config = config::load_config(&config_path);

    let theme_path = args.theme_path.unwrap_or_else(theme_config::default_theme_path);
    let palette = theme_config::load_theme(&theme_path).grid.to_palette();

    iced::application(
        move || {
            let app = PanjectApp::new(config.clone(), config_path.clone(), palette);
            (app, Task::none())
        },
        update,
        view,
    )
    .subscription(subscription)
    .theme(theme)
    .title("panject")
    .window_size(Size::new(CANVAS_WIDTH + 120.0, 1010.0))
    .run()
}

/// Update function for iced
fn update(app: &mut PanjectApp, message: Message) -> Task<Message> {
    app.update(message)
}

/// View function for iced
fn view(app: &PanjectApp) -> iced::Element<'_, Message> {
    app.view()
}

/// Subscription function for iced
fn subscription(app: &PanjectApp) -> iced::Subscription<Message> {
    app.subscription()
}

/// Theme function for iced
fn theme(app: &PanjectApp) -> iced::Theme {
    app.theme()
}
