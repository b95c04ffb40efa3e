use std::sync::Arc;

use iced::{Settings, Theme};
use steward_model::Users;

use crate::state::State;
use crate::theme::StewardTheme;
use crate::{update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Run the users console with the given configuration and roster.
pub fn run(config: AppConfig, users: Users) -> iced::Result {
    let users = Arc::new(users);
    let title: Arc<str> = Arc::from(config.window_title());

    iced::application(move || bootstrap::boot(&users), update::update, view::view)
    .settings(default_settings())
    .title(move |_: &State| title.to_string())
    .theme(app_theme)
    .window_size((900.0, 560.0))
    .run()
}

fn default_settings() -> Settings {
    let mut settings = Settings::default();
    settings.id = Some("steward-console".to_string());
    settings.antialiasing = true;
    settings
}

fn app_theme(_: &State) -> Theme {
    StewardTheme::theme()
}
