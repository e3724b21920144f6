pub mod config;
pub mod error;
pub mod event;
pub mod handler;
pub mod slack;
pub mod transport;

use std::env;

use tracing::Level;

const TRACING_DEBUG: &str = "TRACING_DEBUG";

fn max_level<F>(lookup: F) -> Level
where
    F: Fn(&str) -> Option<String>,
{
    if lookup(TRACING_DEBUG).is_some() {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Installs the fmt subscriber at INFO, or DEBUG when `TRACING_DEBUG` is set.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(max_level(|name| env::var(name).ok()))
        // disable printing the name of the module in every log line.
        .with_target(false)
        // CloudWatch adds the ingestion time.
        .without_time()
        .init();
}
