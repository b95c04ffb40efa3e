use iced::widget::{column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};
use steward_model::{Signal, User};

use crate::messages::Message;
use crate::state::State;
use crate::theme::{self, StewardTheme};
use crate::widgets::SuperAdminPrivilegeSwitch;

const LOGIN_WIDTH: f32 = 140.0;
const NAME_WIDTH: f32 = 160.0;
const EMAIL_WIDTH: f32 = 220.0;

pub fn view(state: &State) -> Element<'_, Message> {
    let header = row![
        text("Users")
            .size(20)
            .color(StewardTheme::TEXT_PRIMARY)
            .width(Length::Fill),
        text(format!(
            "{} users, {} administrators",
            state.users.len(),
            state.users.admin_count()
        ))
        .size(14)
        .color(StewardTheme::TEXT_SECONDARY),
    ]
    .align_y(Alignment::Center);

    let table_header = row![
        column_label("Username", LOGIN_WIDTH),
        column_label("Display Name", NAME_WIDTH),
        column_label("Email", EMAIL_WIDTH),
        text("System Admin")
            .size(14)
            .color(StewardTheme::TEXT_SECONDARY),
    ]
    .spacing(10);

    let mut rows = column![table_header].spacing(8);
    for user in state.users.iter() {
        rows = rows.push(user_row(user, &state.no_admins_configured));
    }

    let footer = text(state.last_action.as_deref().unwrap_or(""))
        .size(13)
        .color(StewardTheme::TEXT_DIMMED);

    container(
        column![
            container(header)
                .style(theme::card)
                .padding(16)
                .width(Length::Fill),
            scrollable(
                container(rows.padding(10))
                    .style(theme::card)
                    .width(Length::Fill),
            )
            .height(Length::Fill),
            footer,
        ]
        .spacing(12)
        .padding(20),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn column_label(label: &'static str, width: f32) -> Element<'static, Message> {
    text(label)
        .size(14)
        .color(StewardTheme::TEXT_SECONDARY)
        .width(Length::Fixed(width))
        .into()
}

fn user_row<'a>(user: &'a User, no_admins_configured: &'a Signal<bool>) -> Element<'a, Message> {
    let email = user.email.as_deref().unwrap_or("-");
    let name_color = if user.enabled {
        StewardTheme::TEXT_PRIMARY
    } else {
        StewardTheme::TEXT_DIMMED
    };

    let switch = SuperAdminPrivilegeSwitch::new(
        user,
        no_admins_configured,
        Message::MakeAdmin,
        Message::RemoveAdmin,
    );

    container(
        row![
            text(&user.login_name)
                .size(16)
                .color(name_color)
                .width(Length::Fixed(LOGIN_WIDTH)),
            text(user.label())
                .size(16)
                .width(Length::Fixed(NAME_WIDTH)),
            text(email)
                .size(14)
                .color(StewardTheme::TEXT_SECONDARY)
                .width(Length::Fixed(EMAIL_WIDTH)),
            switch,
        ]
        .align_y(Alignment::Center)
        .spacing(10),
    )
    .style(theme::card)
    .padding([10, 12])
    .width(Length::Fill)
    .into()
}
