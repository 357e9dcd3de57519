//! Client side of the contact form.
//!
//! [`ContactForm`] holds the field values and the submission state machine:
//!
//! ```text
//! Idle --submit--> Submitting --success--> Submitted --reset--> Idle
//!                       |
//!                       +------failure------> Idle (alert raised)
//! ```

use std::fmt;

use anyhow::anyhow;
use portfolio_extern_contracts::relay::{RelayApiService, RelayReply};
use portfolio_models::{
    contact::{ContactAuthorName, ContactMessageContent, SubmissionPayload, ValidatedSubmission},
    email_address::EmailAddress,
};
use thiserror::Error;
use tracing::{debug, error};

/// Shown to the user whenever a submission fails, regardless of the cause.
pub const FAILURE_ALERT: &str = "Something went wrong. Please try again later.";

/// Shown to the user after the message has been sent.
pub const CONFIRMATION: &str =
    "Thank you for reaching out. I'll get back to you as soon as possible.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// Fields are editable and the form can be submitted.
    #[default]
    Idle,
    /// A request is in flight.
    Submitting,
    /// The message was delivered. Only [`ContactForm::reset`] leaves this
    /// state.
    Submitted,
}

#[derive(Debug)]
pub enum SubmissionOutcome {
    Success,
    /// The cause is logged but never shown to the user.
    Failure(anyhow::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        })
    }
}

/// Reasons for refusing to start a submission. No request is made in any of
/// these cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("A submission is already in progress.")]
    AlreadySubmitting,
    #[error("The message has already been sent.")]
    AlreadySubmitted,
    #[error("Please fill out the {0} field.")]
    MissingField(Field),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// One-shot failure notice for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert {
    pub message: &'static str,
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

#[derive(Debug, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    state: SubmissionState,
    alert: Option<Alert>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Fields can only be edited while the form is idle. Edits in any other
    /// state are ignored.
    pub fn set_name(&mut self, name: impl Into<String>) {
        if self.state == SubmissionState::Idle {
            self.name = name.into();
        }
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        if self.state == SubmissionState::Idle {
            self.email = email.into();
        }
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        if self.state == SubmissionState::Idle {
            self.message = message.into();
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.state == SubmissionState::Idle
    }

    /// Returns the pending alert, if any. Each alert is returned only once.
    pub fn take_alert(&mut self) -> Option<Alert> {
        self.alert.take()
    }

    /// Validates the fields and moves from `Idle` to `Submitting`.
    ///
    /// The returned payload must be sent to the relay and the result passed
    /// to [`complete_submit`](Self::complete_submit).
    pub fn begin_submit(&mut self) -> Result<SubmissionPayload, SubmitRejected> {
        match self.state {
            SubmissionState::Idle => {}
            SubmissionState::Submitting => return Err(SubmitRejected::AlreadySubmitting),
            SubmissionState::Submitted => return Err(SubmitRejected::AlreadySubmitted),
        }

        let submission = self.validate()?;

        self.alert = None;
        self.state = SubmissionState::Submitting;
        Ok(submission.into())
    }

    /// Finishes the submission started by
    /// [`begin_submit`](Self::begin_submit). Does nothing unless the form is
    /// `Submitting`.
    pub fn complete_submit(&mut self, outcome: &SubmissionOutcome) {
        if self.state != SubmissionState::Submitting {
            return;
        }

        match outcome {
            SubmissionOutcome::Success => {
                debug!("contact form submitted");
                self.state = SubmissionState::Submitted;
            }
            SubmissionOutcome::Failure(err) => {
                error!("failed to submit contact form: {err:#}");
                self.alert = Some(Alert {
                    message: FAILURE_ALERT,
                });
                self.state = SubmissionState::Idle;
            }
        }
    }

    /// Sends the form to the relay.
    ///
    /// Holding `&mut self` across the request means a second submission of
    /// the same form cannot start before this one has finished.
    pub async fn submit(
        &mut self,
        relay: &impl RelayApiService,
    ) -> Result<SubmissionOutcome, SubmitRejected> {
        let payload = self.begin_submit()?;

        let outcome = match relay.submit(payload).await {
            Ok(RelayReply::Accepted) => SubmissionOutcome::Success,
            Ok(RelayReply::Rejected { status }) => {
                SubmissionOutcome::Failure(anyhow!("relay answered with status {status}"))
            }
            Err(err) => SubmissionOutcome::Failure(err),
        };

        self.complete_submit(&outcome);
        Ok(outcome)
    }

    /// Leaves the confirmation and returns to an empty form. Does nothing
    /// unless the form is `Submitted`.
    pub fn reset(&mut self) {
        if self.state == SubmissionState::Submitted {
            *self = Self::default();
        }
    }

    fn validate(&self) -> Result<ValidatedSubmission, SubmitRejected> {
        let name = ContactAuthorName::try_new(self.name.clone())
            .map_err(|_| SubmitRejected::MissingField(Field::Name))?;

        if self.email.is_empty() {
            return Err(SubmitRejected::MissingField(Field::Email));
        }
        let email = self
            .email
            .parse::<EmailAddress>()
            .map_err(|_| SubmitRejected::InvalidEmail)?;

        let message = ContactMessageContent::try_new(self.message.clone())
            .map_err(|_| SubmitRejected::MissingField(Field::Message))?;

        Ok(ValidatedSubmission {
            name,
            email,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use portfolio_demo::contact::{JANE, JANE_MULTILINE};
    use portfolio_extern_contracts::relay::MockRelayApiService;
    use portfolio_utils::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn submit_success() {
        // Arrange
        let relay = MockRelayApiService::new().with_submit(JANE.clone(), RelayReply::Accepted);
        let mut sut = filled(&JANE);

        // Act
        let result = sut.submit(&relay).await;

        // Assert
        assert_matches!(result, Ok(SubmissionOutcome::Success));
        assert_eq!(sut.state(), SubmissionState::Submitted);
        assert!(!sut.can_submit());
        assert_eq!(sut.take_alert(), None);
    }

    #[tokio::test]
    async fn submit_multiline_message() {
        // Arrange
        let relay =
            MockRelayApiService::new().with_submit(JANE_MULTILINE.clone(), RelayReply::Accepted);
        let mut sut = filled(&JANE_MULTILINE);

        // Act
        let result = sut.submit(&relay).await;

        // Assert
        assert_matches!(result, Ok(SubmissionOutcome::Success));
    }

    #[tokio::test]
    async fn submit_rejected_by_relay() {
        // Arrange
        let relay = MockRelayApiService::new()
            .with_submit(JANE.clone(), RelayReply::Rejected { status: 500 });
        let mut sut = filled(&JANE);

        // Act
        let result = sut.submit(&relay).await;

        // Assert
        assert_matches!(result, Ok(SubmissionOutcome::Failure(_)));
        assert_failed_and_retained(&mut sut);
    }

    #[tokio::test]
    async fn submit_transport_error() {
        // Arrange
        let relay = MockRelayApiService::new().with_submit_error(JANE.clone(), "timed out");
        let mut sut = filled(&JANE);

        // Act
        let result = sut.submit(&relay).await;

        // Assert
        assert_matches!(result, Ok(SubmissionOutcome::Failure(_)));
        assert_failed_and_retained(&mut sut);
    }

    #[tokio::test]
    async fn retry_after_failure() {
        // Arrange
        let relay = MockRelayApiService::new()
            .with_submit(JANE.clone(), RelayReply::Rejected { status: 500 })
            .with_submit(JANE.clone(), RelayReply::Accepted);
        let mut sut = filled(&JANE);
        sut.submit(&relay).await.unwrap();

        // Act
        let result = sut.submit(&relay).await;

        // Assert
        assert_matches!(result, Ok(SubmissionOutcome::Success));
        assert_eq!(sut.state(), SubmissionState::Submitted);
    }

    #[tokio::test]
    async fn submit_missing_fields() {
        for (payload, field) in [
            (
                SubmissionPayload {
                    name: String::new(),
                    ..JANE.clone()
                },
                Field::Name,
            ),
            (
                SubmissionPayload {
                    email: String::new(),
                    ..JANE.clone()
                },
                Field::Email,
            ),
            (
                SubmissionPayload {
                    message: String::new(),
                    ..JANE.clone()
                },
                Field::Message,
            ),
        ] {
            // Arrange
            let relay = MockRelayApiService::new();
            let mut sut = filled(&payload);

            // Act
            let result = sut.submit(&relay).await;

            // Assert
            assert_matches!(result, Err(SubmitRejected::MissingField(f)) if *f == field);
            assert_eq!(sut.state(), SubmissionState::Idle);
            assert_eq!(sut.take_alert(), None);
        }
    }

    #[tokio::test]
    async fn submit_invalid_email() {
        // Arrange
        let relay = MockRelayApiService::new();
        let mut sut = filled(&SubmissionPayload {
            email: "jane".into(),
            ..JANE.clone()
        });

        // Act
        let result = sut.submit(&relay).await;

        // Assert
        assert_matches!(result, Err(SubmitRejected::InvalidEmail));
        assert_eq!(sut.state(), SubmissionState::Idle);
    }

    #[test]
    fn no_second_submission_while_submitting() {
        // Arrange
        let mut sut = filled(&JANE);
        let payload = sut.begin_submit().unwrap();

        // Act
        let result = sut.begin_submit();

        // Assert
        assert_eq!(payload, *JANE);
        assert_eq!(result, Err(SubmitRejected::AlreadySubmitting));
        assert_eq!(sut.state(), SubmissionState::Submitting);
        assert!(!sut.can_submit());
    }

    #[test]
    fn fields_locked_while_submitting() {
        // Arrange
        let mut sut = filled(&JANE);
        sut.begin_submit().unwrap();

        // Act
        sut.set_name("John Doe");
        sut.set_message("Bye");

        // Assert
        assert_eq!(sut.name(), JANE.name);
        assert_eq!(sut.message(), JANE.message);
    }

    #[test]
    fn no_submission_after_submitted() {
        // Arrange
        let mut sut = filled(&JANE);
        sut.begin_submit().unwrap();
        sut.complete_submit(&SubmissionOutcome::Success);

        // Act
        let result = sut.begin_submit();

        // Assert
        assert_eq!(result, Err(SubmitRejected::AlreadySubmitted));
    }

    #[test]
    fn complete_without_begin_is_ignored() {
        // Arrange
        let mut sut = filled(&JANE);

        // Act
        sut.complete_submit(&SubmissionOutcome::Success);

        // Assert
        assert_eq!(sut.state(), SubmissionState::Idle);
    }

    #[test]
    fn reset_after_submitted() {
        // Arrange
        let mut sut = filled(&JANE);
        sut.begin_submit().unwrap();
        sut.complete_submit(&SubmissionOutcome::Success);

        // Act
        sut.reset();

        // Assert
        assert_eq!(sut.state(), SubmissionState::Idle);
        assert!(sut.can_submit());
        assert_eq!(sut.name(), "");
        assert_eq!(sut.email(), "");
        assert_eq!(sut.message(), "");
    }

    #[test]
    fn reset_while_idle_keeps_fields() {
        // Arrange
        let mut sut = filled(&JANE);

        // Act
        sut.reset();

        // Assert
        assert_eq!(sut.name(), JANE.name);
    }

    #[test]
    fn rejection_messages() {
        assert_eq!(
            SubmitRejected::MissingField(Field::Email).to_string(),
            "Please fill out the email field."
        );
    }

    fn filled(payload: &SubmissionPayload) -> ContactForm {
        let mut form = ContactForm::new();
        form.set_name(payload.name.as_str());
        form.set_email(payload.email.as_str());
        form.set_message(payload.message.as_str());
        form
    }

    fn assert_failed_and_retained(sut: &mut ContactForm) {
        assert_eq!(sut.state(), SubmissionState::Idle);
        assert!(sut.can_submit());
        assert_eq!(
            sut.take_alert(),
            Some(Alert {
                message: FAILURE_ALERT
            })
        );
        assert_eq!(sut.take_alert(), None);
        assert_eq!(sut.name(), JANE.name);
        assert_eq!(sut.email(), JANE.email);
        assert_eq!(sut.message(), JANE.message);
    }
}
