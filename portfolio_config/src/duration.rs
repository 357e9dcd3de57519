use std::{ops::Deref, str::FromStr};

use anyhow::bail;
use serde::Deserialize;

/// Human readable duration like `30s` or `1m 30s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl Deref for Duration {
    type Target = std::time::Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for Duration {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut out = std::time::Duration::default();
        for part in s.split_whitespace() {
            let mut bytes = part.bytes();
            let mut seconds = 0u64;
            for b in bytes.by_ref() {
                let unit = match b {
                    b'0'..=b'9' => {
                        seconds = seconds * 10 + (b - b'0') as u64;
                        continue;
                    }
                    b's' => 1,
                    b'm' => 60,
                    b'h' => 60 * 60,
                    b'd' => 24 * 60 * 60,
                    _ => bail!("Invalid duration: {s:?}"),
                };
                seconds *= unit;
                break;
            }
            if bytes.next().is_some() {
                bail!("Invalid duration: {s:?}");
            }
            out += std::time::Duration::from_secs(seconds);
        }
        Ok(Self(out))
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}
