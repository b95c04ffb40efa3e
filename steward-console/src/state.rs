use log::info;
use steward_model::{Signal, Users};

/// Application state for the users console
#[derive(Debug)]
pub struct State {
    pub users: Users,
    /// True while no user holds system administrator privilege
    pub no_admins_configured: Signal<bool>,
    /// Human readable summary of the most recent privilege change
    pub last_action: Option<String>,
}

impl State {
    pub fn new(users: Users) -> Self {
        let no_admins_configured = Signal::new(users.admin_count() == 0);
        Self {
            users,
            no_admins_configured,
            last_action: None,
        }
    }

    /// Republish the no-admins signal from the current roster.
    pub fn refresh_no_admins(&self) {
        let no_admins = self.users.admin_count() == 0;
        if self.no_admins_configured.set(no_admins) {
            info!("No-admins-configured changed to {no_admins}");
        }
    }
}
