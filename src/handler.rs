use lambda_runtime::LambdaEvent;
use serde_json::Value;
use tracing::{debug, error};

use crate::{error::NotifierError, event::InstanceEvent, slack::SlackNotifier, transport::Transport};

pub async fn handle<T: Transport>(
    event: &Value,
    notifier: &SlackNotifier<T>,
) -> Result<(), NotifierError> {
    let instance_event = InstanceEvent::decode(event)?;
    debug!(?instance_event, "decoded instance event");
    notifier.notify(&instance_event.message()).await
}

pub async fn function_handler<T: Transport>(
    event: LambdaEvent<Value>,
    notifier: &SlackNotifier<T>,
) -> Result<(), lambda_runtime::Error> {
    match handle(&event.payload, notifier).await {
        Ok(_) => Ok(()),
        Err(err) => {
            error!(request_id = %event.context.request_id, "failed to notify: {}", err);
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MissingFieldError;
    use crate::transport::testing::{FailingTransport, RecordingTransport};
    use serde_json::json;

    fn notifier() -> SlackNotifier<RecordingTransport> {
        SlackNotifier::new("https://hooks.slack.com/services/T0/B0/X", RecordingTransport::new())
    }

    #[tokio::test]
    async fn test_handle_posts_message() {
        let notifier = notifier();
        let event = json!({
            "detail-type": "EC2 Instance State-change Notification",
            "detail": {"instance-id": "i-0123", "instance-action": "stop"}
        });
        handle(&event, &notifier).await.unwrap();

        let posts = notifier.transport().posts();
        assert_eq!(posts.len(), 1);
        let body: Value = serde_json::from_str(&posts[0].body).unwrap();
        assert_eq!(
            body["attachments"][0]["text"],
            "EC2 Instance State-change Notification\nresource: i-0123, action: *stop*"
        );
    }

    #[tokio::test]
    async fn test_handle_missing_field_skips_post() {
        let notifier = notifier();
        for event in [
            json!({"detail-type": "x", "detail": {"instance-action": "stop"}}),
            json!({"detail-type": "x", "detail": {"instance-id": "i-0123"}}),
            json!({"detail-type": "x"}),
        ] {
            let result = handle(&event, &notifier).await;
            assert!(matches!(
                result,
                Err(NotifierError::MissingField(MissingFieldError { .. }))
            ));
        }
        assert!(notifier.transport().posts().is_empty());
    }

    #[tokio::test]
    async fn test_function_handler_returns_error_to_runtime() {
        let notifier = notifier();
        let event = LambdaEvent::new(json!({"detail": {}}), Default::default());
        let err = function_handler(event, &notifier).await.unwrap_err();
        assert_eq!(err.to_string(), "missing required field `detail.instance-id`");
    }

    #[tokio::test]
    async fn test_transport_error_reaches_runtime() {
        let notifier =
            SlackNotifier::new("https://hooks.slack.com/services/T0/B0/X", FailingTransport);
        let event = json!({
            "detail-type": "EC2 Spot Instance Interruption Warning",
            "detail": {"instance-id": "i-1", "instance-action": "terminate"}
        });
        assert!(matches!(
            handle(&event, &notifier).await,
            Err(NotifierError::Transport(_))
        ));

        let err = function_handler(LambdaEvent::new(event, Default::default()), &notifier)
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("failed to post notification"));
    }
}
