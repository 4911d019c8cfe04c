//! Headless treasure map runner.
//!
//! Plays the puzzle end to end against a geometric grid, logging every
//! transition. Configured from `PUZZLE_*` environment variables.

mod autoplay;
mod config;
mod feedback;
mod surface;

use config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };
    let seed = config.seed.unwrap_or_else(rand::random);

    match autoplay::run(&config, seed).await {
        Ok(reports) => match serde_json::to_string(&reports) {
            Ok(json) => tracing::info!(seed, reports = %json, "treasure map complete"),
            Err(e) => tracing::warn!(error = %e, "could not encode round reports"),
        },
        Err(e) => {
            tracing::error!(seed, error = %e, "autoplay failed");
            std::process::exit(1);
        }
    }
}
