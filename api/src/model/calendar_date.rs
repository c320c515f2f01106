//! Lenient date input for request schemas.
//!
//! Clients send either a plain `YYYY-MM-DD` day, an RFC 3339 timestamp, or a
//! JavaScript epoch-milliseconds number. All of them are reduced to the UTC
//! calendar day.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{de::Error, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Text(String),
    EpochMillis(i64),
}

pub fn parse(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(day) = raw.parse::<NaiveDate>() {
        return Some(day);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc).date_naive());
    }
    raw.parse::<i64>().ok().and_then(from_epoch_millis)
}

fn from_epoch_millis(millis: i64) -> Option<NaiveDate> {
    DateTime::<Utc>::from_timestamp_millis(millis).map(|ts| ts.date_naive())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let day = match RawDate::deserialize(deserializer)? {
        RawDate::Text(text) => parse(&text),
        RawDate::EpochMillis(millis) => from_epoch_millis(millis),
    };
    day.ok_or_else(|| D::Error::custom("expected a calendar date"))
}
