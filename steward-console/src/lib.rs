//! Steward console library
//!
//! Hosts the system administrator privilege switch and the small users
//! console that drives it. The binary in `src/main.rs` only wires logging
//! and configuration; everything here is exposed so it can be tested.

pub mod app;
pub mod messages;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
pub mod widgets;
