use std::sync::LazyLock;

use portfolio_models::{contact::SubmissionPayload, email_address::EmailAddressWithName};

pub const API_KEY: &str = "re_test_api_key";

pub static SENDER: LazyLock<EmailAddressWithName> =
    LazyLock::new(|| "Contact Form <onboarding@resend.dev>".parse().unwrap());

pub static RECIPIENT: LazyLock<EmailAddressWithName> =
    LazyLock::new(|| "owner@example.com".parse().unwrap());

pub static JANE: LazyLock<SubmissionPayload> = LazyLock::new(|| SubmissionPayload {
    name: "Jane Doe".into(),
    email: "jane@example.com".into(),
    message: "Hello".into(),
});

pub static JANE_MULTILINE: LazyLock<SubmissionPayload> = LazyLock::new(|| SubmissionPayload {
    message: "Hi there,\n\nI liked your <b>projects</b>.\nCheers".into(),
    ..JANE.clone()
});

pub static JANE_WITHOUT_MESSAGE: LazyLock<SubmissionPayload> =
    LazyLock::new(|| SubmissionPayload {
        message: String::new(),
        ..JANE.clone()
    });

pub const JANE_HTML: &str = "<p><strong>Name:</strong> Jane Doe</p>\n\
<p><strong>Email:</strong> jane@example.com</p>\n\
<p><strong>Message:</strong><br>Hello</p>\n";
