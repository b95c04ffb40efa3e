//! System administrator privilege switch
//!
//! Renders one user's admin status as a label, a toggler and, when the
//! system has no administrators at all, a warning hint with a tooltip.
//! Clicking the paddle hands a single-user [`Users`] collection to exactly
//! one of the two caller callbacks; the switch never edits the user.
//!
//! Every render region has a stable [`TestId`] so tests can assert on a
//! headless [`SwitchRender`] without walking the iced widget tree.

use std::fmt;

use iced::widget::{container, row, text, toggler, tooltip};
use iced::{Alignment, Element, Length};
use log::debug;
use steward_model::{Signal, User, Users};

use crate::theme::{self, StewardTheme};

/// Stable identifiers for the addressable regions of the switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestId {
    IsAdminText,
    SwitchCheckbox,
    SwitchPaddle,
    TooltipWrapper,
    TooltipContent,
}

impl TestId {
    pub const ALL: [TestId; 5] = [
        TestId::IsAdminText,
        TestId::SwitchCheckbox,
        TestId::SwitchPaddle,
        TestId::TooltipWrapper,
        TestId::TooltipContent,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            TestId::IsAdminText => "is-admin-text",
            TestId::SwitchCheckbox => "switch-checkbox",
            TestId::SwitchPaddle => "switch-paddle",
            TestId::TooltipWrapper => "tooltip-wrapper",
            TestId::TooltipContent => "tooltip-content",
        }
    }
}

impl fmt::Display for TestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the status label says.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminStatus {
    Yes,
    No,
    NotSpecified,
}

impl AdminStatus {
    /// A system without administrators overrides the user's own flag.
    pub fn of(is_admin: bool, no_admins_configured: bool) -> Self {
        match (no_admins_configured, is_admin) {
            (true, _) => AdminStatus::NotSpecified,
            (false, true) => AdminStatus::Yes,
            (false, false) => AdminStatus::No,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            AdminStatus::Yes => "YES",
            AdminStatus::No => "NO",
            AdminStatus::NotSpecified => "Not Specified",
        }
    }
}

impl fmt::Display for AdminStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The click that reached the paddle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddleClick {
    /// State the paddle was asked to move to.
    pub requested: bool,
}

/// Warning shown while the system has no administrators.
pub fn tooltip_message(login_name: &str) -> String {
    format!(
        "Explicitly making '{login_name}' user a system administrator will result into other users not having system administrator privileges."
    )
}

/// Content of one addressable region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Region {
    Text(String),
    Checkbox { checked: bool },
    Paddle,
    Wrapper,
}

impl Region {
    pub fn text(&self) -> Option<&str> {
        match self {
            Region::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_checked(&self) -> Option<bool> {
        match self {
            Region::Checkbox { checked } => Some(*checked),
            _ => None,
        }
    }
}

/// Headless result of one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchRender {
    pub status: AdminStatus,
    pub checked: bool,
    pub tooltip: Option<String>,
}

impl SwitchRender {
    /// Look up a region by id. Tooltip ids resolve to `None` when the
    /// tooltip is not part of the render.
    pub fn find(&self, id: TestId) -> Option<Region> {
        match id {
            TestId::IsAdminText => Some(Region::Text(self.status.label().to_string())),
            TestId::SwitchCheckbox => Some(Region::Checkbox {
                checked: self.checked,
            }),
            TestId::SwitchPaddle => Some(Region::Paddle),
            TestId::TooltipWrapper => self.tooltip.as_ref().map(|_| Region::Wrapper),
            TestId::TooltipContent => self.tooltip.clone().map(Region::Text),
        }
    }
}

/// Width reserved for the status label.
pub const STATUS_WIDTH: f32 = 110.0;
/// Height of the paddle; it is twice as wide.
pub const PADDLE_SIZE: f32 = 20.0;
/// Gap between label, paddle and hint.
pub const SPACING: f32 = 12.0;

type PrivilegeCallback<'a, Message> = Box<dyn Fn(Users, PaddleClick) -> Message + 'a>;

pub struct SuperAdminPrivilegeSwitch<'a, Message> {
    user: &'a User,
    no_admins_configured: &'a Signal<bool>,
    on_make_admin: PrivilegeCallback<'a, Message>,
    on_remove_admin: PrivilegeCallback<'a, Message>,
}

impl<'a, Message: 'a> SuperAdminPrivilegeSwitch<'a, Message> {
    pub fn new(
        user: &'a User,
        no_admins_configured: &'a Signal<bool>,
        on_make_admin: impl Fn(Users, PaddleClick) -> Message + 'a,
        on_remove_admin: impl Fn(Users, PaddleClick) -> Message + 'a,
    ) -> Self {
        Self {
            user,
            no_admins_configured,
            on_make_admin: Box::new(on_make_admin),
            on_remove_admin: Box::new(on_remove_admin),
        }
    }

    pub fn render(&self) -> SwitchRender {
        let no_admins = self.no_admins_configured.get();
        let is_admin = self.user.is_admin();

        SwitchRender {
            status: AdminStatus::of(is_admin, no_admins),
            checked: is_admin && !no_admins,
            tooltip: no_admins.then(|| tooltip_message(&self.user.login_name)),
        }
    }

    /// Dispatch a paddle click to the callback matching the user's current
    /// flag and return the message it produced.
    pub fn click_paddle(&self, event: PaddleClick) -> Message {
        let users = Users::from(self.user.clone());

        if self.user.is_admin() {
            debug!("Revoking admin requested for '{}'", self.user.login_name);
            (self.on_remove_admin)(users, event)
        } else {
            debug!("Granting admin requested for '{}'", self.user.login_name);
            (self.on_make_admin)(users, event)
        }
    }

    pub fn view(self) -> Element<'a, Message> {
        let snapshot = self.render();

        let status = text(snapshot.status.label())
            .size(14)
            .color(match snapshot.status {
                AdminStatus::Yes => StewardTheme::SUCCESS,
                AdminStatus::No => StewardTheme::TEXT_SECONDARY,
                AdminStatus::NotSpecified => StewardTheme::TEXT_DIMMED,
            })
            .width(Length::Fixed(STATUS_WIDTH));

        let paddle = toggler(snapshot.checked)
            .size(PADDLE_SIZE)
            .on_toggle(move |requested| self.click_paddle(PaddleClick { requested }));

        let mut layout = row![status, paddle]
            .spacing(SPACING)
            .align_y(Alignment::Center);

        if let Some(message) = snapshot.tooltip {
            let hint = container(text("!").size(14).color(StewardTheme::WARNING))
                .padding([0, 6])
                .style(theme::warning_badge);

            let content = container(text(message).size(13))
                .padding(8)
                .max_width(280.0)
                .style(container::rounded_box);

            layout = layout.push(tooltip(hint, content, tooltip::Position::Bottom).gap(6.0));
        }

        layout.into()
    }
}

impl<'a, Message: 'a> From<SuperAdminPrivilegeSwitch<'a, Message>> for Element<'a, Message> {
    fn from(switch: SuperAdminPrivilegeSwitch<'a, Message>) -> Self {
        switch.view()
    }
}

impl<Message> fmt::Debug for SuperAdminPrivilegeSwitch<'_, Message> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuperAdminPrivilegeSwitch")
            .field("user", &self.user.login_name)
            .field("no_admins_configured", &self.no_admins_configured.get())
            .finish_non_exhaustive()
    }
}
