use instance_event_notifier::{
    config::Config, handler::function_handler, init_tracing, slack::SlackNotifier,
    transport::ReqwestTransport,
};
use lambda_runtime::{service_fn, LambdaEvent};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    init_tracing();
    let config = Config::from_env()?;
    let notifier = SlackNotifier::new(config.webhook_url, ReqwestTransport::new());
    let notifier = &notifier;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(event, notifier).await
    }))
    .await?;
    Ok(())
}
