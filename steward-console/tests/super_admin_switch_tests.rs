//! Render and click behaviour of the system administrator switch

use std::cell::Cell;

use iced::Element;
use steward_console::widgets::{AdminStatus, PaddleClick, Region, SuperAdminPrivilegeSwitch, TestId};
use steward_model::{Signal, User, Users};

#[derive(Debug, Clone, PartialEq)]
enum Msg {
    MakeAdmin(Users),
    RemoveAdmin(Users),
}

fn bob() -> User {
    User::from_json(
        r#"{
            "email": "bob@example.com",
            "display_name": "Bob",
            "login_name": "bob",
            "is_admin": true,
            "email_me": true,
            "checkin_aliases": ["bob@gmail.com"],
            "enabled": true
        }"#,
    )
    .unwrap()
}

/// Call counters standing in for the two privilege callbacks.
#[derive(Default)]
struct Spies {
    make_admin: Cell<usize>,
    remove_admin: Cell<usize>,
}

impl Spies {
    fn switch<'a>(
        &'a self,
        user: &'a User,
        no_admins_configured: &'a Signal<bool>,
    ) -> SuperAdminPrivilegeSwitch<'a, Msg> {
        SuperAdminPrivilegeSwitch::new(
            user,
            no_admins_configured,
            move |users, _event| {
                self.make_admin.set(self.make_admin.get() + 1);
                Msg::MakeAdmin(users)
            },
            move |users, _event| {
                self.remove_admin.set(self.remove_admin.get() + 1);
                Msg::RemoveAdmin(users)
            },
        )
    }
}

fn text_of(region: Option<Region>) -> String {
    region
        .and_then(|r| r.text().map(str::to_string))
        .unwrap_or_default()
}

fn checked(region: Option<Region>) -> bool {
    region.and_then(|r| r.is_checked()).unwrap_or(false)
}

#[test]
fn renders_yes_when_the_user_is_an_admin() {
    let user = bob();
    let no_admins = Signal::new(false);
    let spies = Spies::default();

    let render = spies.switch(&user, &no_admins).render();

    assert!(text_of(render.find(TestId::IsAdminText)).contains("YES"));
}

#[test]
fn renders_no_when_the_user_is_not_an_admin() {
    let mut user = bob();
    user.set_admin(false);
    let no_admins = Signal::new(false);
    let spies = Spies::default();

    let render = spies.switch(&user, &no_admins).render();

    assert!(text_of(render.find(TestId::IsAdminText)).contains("NO"));
}

#[test]
fn renders_not_specified_when_no_admins_are_configured() {
    let user = bob();
    let no_admins = Signal::new(false);
    no_admins.set(true);
    let spies = Spies::default();

    let render = spies.switch(&user, &no_admins).render();

    assert_eq!(render.status, AdminStatus::NotSpecified);
    assert!(text_of(render.find(TestId::IsAdminText)).contains("Not Specified"));
}

#[test]
fn toggle_is_checked_for_an_admin() {
    let user = bob();
    let no_admins = Signal::new(false);
    let spies = Spies::default();

    let render = spies.switch(&user, &no_admins).render();

    assert!(checked(render.find(TestId::SwitchCheckbox)));
}

#[test]
fn toggle_is_unchecked_for_a_non_admin() {
    let mut user = bob();
    user.set_admin(false);
    let no_admins = Signal::new(false);
    let spies = Spies::default();

    let render = spies.switch(&user, &no_admins).render();

    assert!(!checked(render.find(TestId::SwitchCheckbox)));
}

#[test]
fn toggle_is_unchecked_when_no_admins_are_configured() {
    let user = bob();
    let no_admins = Signal::new(true);
    let spies = Spies::default();

    let render = spies.switch(&user, &no_admins).render();

    assert!(user.is_admin());
    assert!(!checked(render.find(TestId::SwitchCheckbox)));
}

#[test]
fn tooltip_is_rendered_when_no_admins_are_configured() {
    let user = bob();
    let no_admins = Signal::new(true);
    let spies = Spies::default();

    let render = spies.switch(&user, &no_admins).render();

    let expected = "Explicitly making 'bob' user a system administrator will result into other users not having system administrator privileges.";
    assert_eq!(render.find(TestId::TooltipWrapper), Some(Region::Wrapper));
    assert_eq!(text_of(render.find(TestId::TooltipContent)), expected);
}

#[test]
fn tooltip_is_absent_when_admins_are_configured() {
    let user = bob();
    let no_admins = Signal::new(false);
    let spies = Spies::default();

    let render = spies.switch(&user, &no_admins).render();

    assert!(render.find(TestId::TooltipWrapper).is_none());
    assert!(render.find(TestId::TooltipContent).is_none());
}

#[test]
fn clicking_the_paddle_of_an_admin_revokes() {
    let user = bob();
    let no_admins = Signal::new(false);
    let spies = Spies::default();
    let switch = spies.switch(&user, &no_admins);

    assert_eq!(spies.remove_admin.get(), 0);
    assert_eq!(switch.render().find(TestId::SwitchPaddle), Some(Region::Paddle));

    let message = switch.click_paddle(PaddleClick { requested: false });

    assert_eq!(spies.remove_admin.get(), 1);
    assert_eq!(spies.make_admin.get(), 0);
    assert_eq!(message, Msg::RemoveAdmin(Users::from(user.clone())));
}

#[test]
fn clicking_the_paddle_of_a_non_admin_grants() {
    let mut user = bob();
    user.set_admin(false);
    let no_admins = Signal::new(false);
    let spies = Spies::default();
    let switch = spies.switch(&user, &no_admins);

    assert_eq!(spies.make_admin.get(), 0);

    let message = switch.click_paddle(PaddleClick { requested: true });

    assert_eq!(spies.make_admin.get(), 1);
    assert_eq!(spies.remove_admin.get(), 0);
    assert_eq!(message, Msg::MakeAdmin(Users::from(user.clone())));
}

#[test]
fn click_follows_the_user_flag_even_without_admins() {
    let user = bob();
    let no_admins = Signal::new(true);
    let spies = Spies::default();

    spies
        .switch(&user, &no_admins)
        .click_paddle(PaddleClick { requested: true });

    assert_eq!(spies.remove_admin.get(), 1);
    assert_eq!(spies.make_admin.get(), 0);
}

#[test]
fn rerendering_with_unchanged_inputs_is_identical() {
    for (is_admin, no_admins_configured) in
        [(true, false), (false, false), (true, true), (false, true)]
    {
        let mut user = bob();
        user.set_admin(is_admin);
        let no_admins = Signal::new(no_admins_configured);
        let spies = Spies::default();
        let switch = spies.switch(&user, &no_admins);

        let first = switch.render();
        let second = switch.render();

        assert_eq!(first, second);
        for id in TestId::ALL {
            assert_eq!(first.find(id), second.find(id), "region {id}");
        }
    }
}

#[test]
fn signal_change_is_visible_on_the_next_render() {
    let user = bob();
    let no_admins = Signal::new(false);
    let spies = Spies::default();
    let switch = spies.switch(&user, &no_admins);

    assert_eq!(switch.render().status, AdminStatus::Yes);

    no_admins.set(true);

    let render = switch.render();
    assert_eq!(render.status, AdminStatus::NotSpecified);
    assert!(render.tooltip.is_some());
}

#[test]
fn switch_builds_an_element_in_every_state() {
    for (is_admin, no_admins_configured) in
        [(true, false), (false, false), (true, true), (false, true)]
    {
        let mut user = bob();
        user.set_admin(is_admin);
        let no_admins = Signal::new(no_admins_configured);
        let spies = Spies::default();

        let element: Element<'_, Msg> = spies.switch(&user, &no_admins).into();
        drop(element);

        assert_eq!(spies.make_admin.get(), 0);
        assert_eq!(spies.remove_admin.get(), 0);
    }
}
