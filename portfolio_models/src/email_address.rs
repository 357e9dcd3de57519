use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress(pub lettre::Address);

/// Email address with an optional display name, e.g. `Contact Form <me@example.com>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddressWithName(pub lettre::message::Mailbox);

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }

    pub fn with_name(self, name: String) -> EmailAddressWithName {
        EmailAddressWithName(lettre::message::Mailbox {
            name: Some(name),
            email: self.0,
        })
    }
}

impl EmailAddressWithName {
    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    pub fn email(&self) -> &str {
        self.0.email.as_ref()
    }

    /// Returns the same address with its display name replaced.
    pub fn renamed(&self, name: String) -> Self {
        self.clone().into_email_address().with_name(name)
    }

    pub fn into_email_address(self) -> EmailAddress {
        EmailAddress(self.0.email)
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::fmt::Display for EmailAddressWithName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EmailAddress {
    type Err = <lettre::Address as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl FromStr for EmailAddressWithName {
    type Err = <lettre::message::Mailbox as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = <Self as FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_name() {
        let address = "Contact Form <onboarding@resend.dev>"
            .parse::<EmailAddressWithName>()
            .unwrap();
        assert_eq!(address.name(), Some("Contact Form"));
        assert_eq!(address.email(), "onboarding@resend.dev");
        assert_eq!(address.to_string(), "Contact Form <onboarding@resend.dev>");
    }

    #[test]
    fn parse_without_name() {
        let address = "owner@example.com".parse::<EmailAddressWithName>().unwrap();
        assert_eq!(address.name(), None);
        assert_eq!(address.to_string(), "owner@example.com");
    }

    #[test]
    fn renamed() {
        let address = "Contact Form <onboarding@resend.dev>"
            .parse::<EmailAddressWithName>()
            .unwrap();
        let renamed = address.renamed("Jane Doe".into());
        assert_eq!(renamed.to_string(), "Jane Doe <onboarding@resend.dev>");
    }

    #[test]
    fn invalid() {
        assert!("not an email".parse::<EmailAddress>().is_err());
        assert!("".parse::<EmailAddress>().is_err());
    }
}
