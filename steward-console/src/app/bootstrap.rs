use std::path::PathBuf;
use std::sync::Arc;

use iced::Task;
use log::info;
use steward_model::{Result, User, Users};

use crate::messages::Message;
use crate::state::State;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub users_file: Option<PathBuf>,
    pub window_title: Arc<str>,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            users_file: None,
            window_title: Arc::from("Steward Users"),
        }
    }

    pub fn from_environment() -> Self {
        let users_file = std::env::var("STEWARD_USERS_FILE")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let window_title =
            std::env::var("STEWARD_WINDOW_TITLE").unwrap_or_else(|_| "Steward Users".to_string());

        Self {
            users_file,
            window_title: Arc::from(window_title),
        }
    }

    pub fn window_title(&self) -> &str {
        &self.window_title
    }

    pub fn with_users_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.users_file = Some(path.into());
        self
    }

    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = Arc::from(title.into());
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Roster used when no users file is configured.
pub fn demo_users() -> Users {
    Users::new(vec![
        User::new("bob")
            .with_display_name("Bob")
            .with_email("bob@example.com")
            .with_admin(true),
        User::new("alice")
            .with_display_name("Alice")
            .with_email("alice@example.com"),
        User::new("jez").with_display_name("Jez"),
    ])
}

/// Load the roster named by the config, falling back to the demo roster.
pub fn load_users(config: &AppConfig) -> Result<Users> {
    match &config.users_file {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            let users = Users::from_json(&raw)?;
            info!("Loaded {} users from {}", users.len(), path.display());
            Ok(users)
        }
        None => {
            info!("No users file configured, using demo roster");
            Ok(demo_users())
        }
    }
}

/// Initial state and task batch for the running application.
pub fn boot(users: &Users) -> (State, Task<Message>) {
    (State::new(users.clone()), Task::none())
}
