use iced::Task;
use log::{debug, info, warn};
use steward_model::Users;

use crate::messages::Message;
use crate::state::State;

/// Apply a privilege change requested by a switch
pub fn update(state: &mut State, message: Message) -> Task<Message> {
    debug!("Console update: {}", message.name());

    match message {
        Message::MakeAdmin(users, _event) => set_admin_flags(state, &users, true),
        Message::RemoveAdmin(users, _event) => set_admin_flags(state, &users, false),
    }

    Task::none()
}

fn set_admin_flags(state: &mut State, users: &Users, is_admin: bool) {
    debug!(
        "Setting is_admin={is_admin} for {}",
        users.login_names().join(", ")
    );

    let mut changed = Vec::new();

    for requested in users {
        match state.users.find_mut(&requested.login_name) {
            Some(user) => {
                user.set_admin(is_admin);
                changed.push(requested.login_name.clone());
            }
            None => warn!(
                "Ignoring privilege change for unknown user '{}'",
                requested.login_name
            ),
        }
    }

    if changed.is_empty() {
        return;
    }

    let verb = if is_admin { "Granted" } else { "Revoked" };
    let summary = format!(
        "{verb} system administrator privilege for {}",
        changed.join(", ")
    );
    info!("{summary}");
    state.last_action = Some(summary);

    state.refresh_no_admins();
}
