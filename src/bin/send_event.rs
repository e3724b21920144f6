//! Runs the handler once against a local event file, e.g.
//! `cargo run --bin send_event -- demos/spot-interruption-warning.json`.

use std::{env, fs};

use dotenvy::dotenv;
use instance_event_notifier::{
    config::Config, handler::handle, init_tracing, slack::SlackNotifier,
    transport::ReqwestTransport,
};
use serde_json::Value;

const SAMPLE_EVENT: &str = include_str!("../../demos/spot-interruption-warning.json");

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    dotenv().ok();
    init_tracing();
    let raw = match env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => SAMPLE_EVENT.to_string(),
    };
    let event: Value = serde_json::from_str(&raw)?;
    let config = Config::from_env()?;
    let notifier = SlackNotifier::new(config.webhook_url, ReqwestTransport::new());
    handle(&event, &notifier).await?;
    Ok(())
}
