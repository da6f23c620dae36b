mod app;
mod assets;
mod config;
mod display;
mod render;

use crate::app::Scoreboard;
use crate::assets::LogoStore;
use crate::config::Config;
use scoreboard_api::aggregator::Aggregator;
use scoreboard_api::client::{LeagueAdapter, MlbApi, NhlApi};

fn main() -> anyhow::Result<()> {
    if handle_cli_args() {
        return Ok(());
    }

    better_panic::install();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let adapters: Vec<Box<dyn LeagueAdapter>> =
        vec![Box::new(NhlApi::new()), Box::new(MlbApi::new())];
    let aggregator = Aggregator::new(adapters);
    let logos = LogoStore::new(config.asset_dir.clone());

    run_with_backend(config, aggregator, logos)
}

#[cfg(feature = "hardware")]
fn run_with_backend(
    config: Config,
    aggregator: Aggregator,
    logos: LogoStore,
) -> anyhow::Result<()> {
    let backend = crate::display::matrix::MatrixBackend::new(&config)?;
    Scoreboard::new(config, aggregator, logos, backend).run()
}

#[cfg(not(feature = "hardware"))]
fn run_with_backend(
    config: Config,
    aggregator: Aggregator,
    logos: LogoStore,
) -> anyhow::Result<()> {
    let backend = crate::display::matrix::HeadlessBackend::new();
    Scoreboard::new(config, aggregator, logos, backend).run()
}

fn handle_cli_args() -> bool {
    let mut args = std::env::args().skip(1);
    let Some(arg) = args.next() else {
        return false;
    };

    match arg.as_str() {
        "-h" | "--help" => {
            println!("{}", usage_text());
            true
        }
        "-V" | "--version" => {
            println!("ledboard {}", env!("CARGO_PKG_VERSION"));
            true
        }
        _ => {
            eprintln!("Unknown argument: {arg}\n\n{}", usage_text());
            std::process::exit(2);
        }
    }
}

fn usage_text() -> &'static str {
    "ledboard - NHL + MLB scores on a Raspberry Pi LED matrix

Usage:
  ledboard
  ledboard --help
  ledboard --version

Environment:
  LEDBOARD_ASSETS   Directory with league and team logo PNGs
                    (default assets/images)
  RUST_LOG          Log filter (default info)

Build with --features hardware to drive a real panel."
}
