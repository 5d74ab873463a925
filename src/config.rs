use clap::Parser;
use std::time::Duration;

pub const DEFAULT_TITLE: &str = "点击我";
pub const DEFAULT_DELAY_MS: u64 = 1000;

#[derive(Parser, Debug)]
#[command(author, version, about = "One button, one label, one callback", long_about = None)]
pub struct Args {
    /// Button title
    #[arg(short = 't', long, default_value = DEFAULT_TITLE)]
    pub title: String,
    /// Delay before the label switches to its completed text, in milliseconds
    #[arg(short = 'd', long, default_value_t = DEFAULT_DELAY_MS, value_parser = clap::value_parser!(u64).range(1..))]
    pub delay_ms: u64,
    /// Use the dark theme
    #[arg(long)]
    pub dark: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub button_title: String,
    pub follow_up_delay: Duration,
    pub dark: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            button_title: DEFAULT_TITLE.to_string(),
            follow_up_delay: Duration::from_millis(DEFAULT_DELAY_MS),
            dark: false,
        }
    }
}

impl From<Args> for DemoConfig {
    fn from(args: Args) -> Self {
        Self {
            button_title: args.title,
            follow_up_delay: Duration::from_millis(args.delay_ms),
            dark: args.dark,
        }
    }
}
