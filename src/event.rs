use serde_json::{Map, Value};

use crate::error::MissingFieldError;

const DETAIL_TYPE: &str = "detail-type";
const DETAIL: &str = "detail";
const INSTANCE_ID: &str = "instance-id";
const INSTANCE_ACTION: &str = "instance-action";

/// The part of an EC2 instance notification that ends up in the chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceEvent {
    pub detail_type: String,
    pub instance_id: String,
    pub instance_action: String,
}

/// A value that is present but not a string is reported as missing.
fn get_string_from_detail(
    detail: &Map<String, Value>,
    key: &str,
) -> Result<String, MissingFieldError> {
    let value = detail
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| MissingFieldError::new(format!("{}.{}", DETAIL, key)))?;
    Ok(value.to_string())
}

impl InstanceEvent {
    /// `detail-type` falls back to an empty string; the instance fields under
    /// `detail` are mandatory.
    pub fn decode(event: &Value) -> Result<Self, MissingFieldError> {
        let detail_type = event
            .get(DETAIL_TYPE)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let detail = event
            .get(DETAIL)
            .and_then(Value::as_object)
            .ok_or_else(|| MissingFieldError::new(DETAIL))?;
        Ok(Self {
            detail_type,
            instance_id: get_string_from_detail(detail, INSTANCE_ID)?,
            instance_action: get_string_from_detail(detail, INSTANCE_ACTION)?,
        })
    }

    pub fn message(&self) -> String {
        format!(
            "{}\nresource: {}, action: *{}*",
            self.detail_type, self.instance_id, self.instance_action
        )
    }
}
