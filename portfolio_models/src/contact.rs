use nutype::nutype;
use serde::{Deserialize, Serialize};

use crate::email_address::EmailAddress;

/// The name/email/message triple exchanged between the contact form and the
/// relay endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Body of every relay endpoint response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
}

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactAuthorName(String);

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageContent(String);

/// A submission whose fields passed the contact form's required field checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSubmission {
    pub name: ContactAuthorName,
    pub email: EmailAddress,
    pub message: ContactMessageContent,
}

impl From<ValidatedSubmission> for SubmissionPayload {
    fn from(value: ValidatedSubmission) -> Self {
        Self {
            name: value.name.into_inner(),
            email: value.email.as_str().into(),
            message: value.message.into_inner(),
        }
    }
}
