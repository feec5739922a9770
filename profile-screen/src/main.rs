use profile_screen::app::{self, AppConfig};

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("profile_screen", LevelFilter::Debug)
        .init();
}

fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
        log::warn!("RUST_LOG not set, using default log filters");
    } else {
        env_logger::init();
        log::warn!("Initializing logger from env");
    }

    let config = AppConfig::from_environment();
    log::info!("Using profile API at {}", config.config.server_url);

    app::run(config)
}
