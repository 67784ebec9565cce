use chrono::{DateTime, Duration, SecondsFormat, Utc};
use std::fmt::Display;
use std::ops::{Deref, Sub};
use std::str::FromStr;
use thiserror::Error;

/// Civic feed timestamps are formatted prescribed from [RFC 3339]
/// with millisecond precision or `YYYY-MM-DDTHH:MM:SS.SSSZ`.
///
/// [RFC 3339]: https://www.rfc-editor.org/rfc/rfc3339
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn parse(input: &str) -> Result<Self, ParseError> {
        DateTime::parse_from_rfc3339(input)
            .map(|v| Self(v.with_timezone(&Utc)))
            .map_err(ParseError)
    }

    /// Describes how long ago this timestamp was compared to `now`
    /// the way the feed shows it next to posts and comments.
    ///
    /// Only whole days count: `Today`, `Yesterday`, `N days ago`
    /// for less than a week and the calendar date after that.
    #[must_use]
    pub fn relative_to(&self, now: Timestamp) -> String {
        let days = (now.0 - self.0).num_days();
        match days {
            i64::MIN..=0 => "Today".into(),
            1 => "Yesterday".into(),
            2..=6 => format!("{days} days ago"),
            _ => self.0.format("%Y-%m-%d").to_string(),
        }
    }
}

impl Sub<Duration> for Timestamp {
    type Output = Timestamp;

    fn sub(self, rhs: Duration) -> Self::Output {
        Self(self.0 - rhs)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.0.to_rfc3339_opts(SecondsFormat::Millis, true);
        s.fmt(f)
    }
}

impl Deref for Timestamp {
    type Target = DateTime<Utc>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for Timestamp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> serde::Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;

        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = Timestamp;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("RFC 3339 timestamp")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Timestamp::parse(v).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

impl serde::Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Error)]
#[error(transparent)]
pub struct ParseError(chrono::ParseError);
