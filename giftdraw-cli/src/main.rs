mod app;
mod config;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "giftdraw")]
#[command(about = "Christmas gift exchange draw for the terminal")]
#[command(version)]
struct Cli {
    /// Interface language (zh or en)
    #[arg(short, long, default_value = "zh")]
    lang: String,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "giftdraw={},giftdraw_core={}",
            log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::CliConfig {
        language: config::parse_language(&cli.lang)?,
        verbose: cli.verbose,
    };

    if let Err(e) = app::run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
