pub mod requests;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Offset-less layouts accepted for stored timestamps, tried in order.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A liveness record submitted by a client.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    pub fn with_parts(id: String, client_name: &str, timestamp: DateTime<Utc>) -> Self {
        StatusCheck {
            id,
            client_name: client_name.to_string(),
            timestamp,
        }
    }
}

/// Persisted form of a [`StatusCheck`].
/// The collection is schema-free, so `timestamp` is stored as RFC 3339 text
/// and may be absent on items not written by this service.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct StatusCheckDocument {
    pub id: String,
    pub client_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl StatusCheckDocument {
    /// Parses the stored timestamp as ISO 8601 with a `T` or space
    /// separator. Offset-less values are read as UTC and a bare date is
    /// midnight UTC.
    pub fn parse_timestamp(&self) -> Option<DateTime<Utc>> {
        let raw = self.timestamp.as_deref()?.trim();
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Utc));
        }
        if let Ok(parsed) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%:z") {
            return Some(parsed.with_timezone(&Utc));
        }
        if let Some(naive) = NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        {
            return Some(naive.and_utc());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .map(|date| date.and_time(NaiveTime::MIN).and_utc())
    }

    pub fn into_status_check(self, timestamp: DateTime<Utc>) -> StatusCheck {
        StatusCheck {
            id: self.id,
            client_name: self.client_name,
            timestamp,
        }
    }
}

impl From<&StatusCheck> for StatusCheckDocument {
    fn from(status_check: &StatusCheck) -> Self {
        StatusCheckDocument {
            id: status_check.id.clone(),
            client_name: status_check.client_name.clone(),
            timestamp: Some(status_check.timestamp.to_rfc3339()),
        }
    }
}
