use anyhow::Context;
use env_logger::{Builder, Target};
use log::LevelFilter;
use steward_console::app::{self, AppConfig, bootstrap};

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("steward_console", LevelFilter::Debug)
        .init();
}

fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = AppConfig::from_environment();
    let users = bootstrap::load_users(&config).context("failed to load users")?;

    app::run(config, users).map_err(|err| anyhow::anyhow!("users console exited: {err}"))
}
