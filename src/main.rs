mod gui;

use clap::Parser;
use tap_callback::{Args, DemoConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DemoConfig::from(Args::parse());
    log::info!(
        "starting with title {:?}, follow-up after {:?}",
        config.button_title,
        config.follow_up_delay
    );

    gui::run(config)?;
    Ok(())
}
