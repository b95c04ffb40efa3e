pub mod super_admin_switch;

pub use super_admin_switch::{
    AdminStatus, PADDLE_SIZE, PaddleClick, Region, SPACING, STATUS_WIDTH, SuperAdminPrivilegeSwitch,
    SwitchRender, TestId, tooltip_message,
};
