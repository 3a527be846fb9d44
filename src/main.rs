mod arena;
mod config;

use config::MatchConfig;
use std::error::Error;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // initialize tracing; core `log` records are bridged in as well
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = std::env::args().nth(1).map_or_else(
        || Ok(MatchConfig::default()),
        |path| {
            MatchConfig::load(Path::new(&path))
                .inspect_err(|e| tracing::error!(%path, "failed to load match config: {e}"))
        },
    )?;
    tracing::info!(
        games = config.games,
        seed = config.seed,
        first = ?config.first.as_ref().map(|c| c.strategy),
        second = ?config.second.as_ref().map(|c| c.strategy),
        "starting match"
    );

    let report = arena::run_match(&config)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
