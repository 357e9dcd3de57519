use portfolio_models::contact::SubmissionPayload;
use serde::Deserialize;
use serde_json::Value;

/// Incoming submission. Fields are not validated: absent and `null` fields
/// are forwarded as empty strings, other non-string values as their JSON
/// text.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSubmissionPayload {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub message: Option<Value>,
}

impl From<ApiSubmissionPayload> for SubmissionPayload {
    fn from(value: ApiSubmissionPayload) -> Self {
        Self {
            name: text(value.name),
            email: text(value.email),
            message: text(value.message),
        }
    }
}

fn text(value: Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(value)) => value,
        Some(value) => value.to_string(),
    }
}
