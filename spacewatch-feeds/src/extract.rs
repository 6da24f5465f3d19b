//! Extraction of the most recent reading from a decoded feed payload.
//!
//! Row feeds are strict: an empty array or a short final row is an error.
//! The X-ray record feed is lenient: missing keys read as
//! [`NOT_AVAILABLE`](spacewatch_types::NOT_AVAILABLE) instead of failing.

use serde_json::{Map, Value};
use spacewatch_types::{Feed, FeedShape, NOT_AVAILABLE};

use crate::FeedError;

/// The most recent data row of one feed.
#[derive(Debug, Clone, PartialEq)]
pub enum Reading {
    /// Positional row, e.g. `[time, density, speed, temperature]`.
    Row(Vec<Value>),
    /// Keyed record, e.g. `{ "time_tag": .., "flux": .. }`.
    Record(Map<String, Value>),
}

impl Reading {
    /// Positional value of a row reading. Always `None` for records.
    pub fn get(&self, index: usize) -> Option<&Value> {
        match self {
            Reading::Row(row) => row.get(index),
            Reading::Record(_) => None,
        }
    }

    /// Named value of a record reading, or the sentinel when absent.
    pub fn field(&self, key: &str) -> Value {
        match self {
            Reading::Record(record) => record
                .get(key)
                .filter(|v| !v.is_null())
                .cloned()
                .unwrap_or_else(|| Value::String(NOT_AVAILABLE.to_string())),
            Reading::Row(_) => Value::String(NOT_AVAILABLE.to_string()),
        }
    }

    /// Display text for a positional value.
    pub fn display(&self, index: usize) -> String {
        self.get(index).map_or_else(|| NOT_AVAILABLE.to_string(), display_value)
    }
}

/// Render a JSON scalar the way a feed means it: strings unquoted, null as N/A.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => NOT_AVAILABLE.to_string(),
        other => other.to_string(),
    }
}

/// Return the most recent reading of `feed` from its decoded payload.
///
/// "Most recent" is the last element in the feed's own order.
pub fn latest(feed: Feed, payload: Value) -> Result<Reading, FeedError> {
    match feed.shape() {
        FeedShape::Rows => latest_row(feed, payload),
        FeedShape::Records => latest_record(feed, payload),
    }
}

fn latest_row(feed: Feed, payload: Value) -> Result<Reading, FeedError> {
    let Value::Array(mut rows) = payload else {
        return Err(FeedError::UnexpectedShape {
            feed: feed.name(),
            expected: "an array of rows",
        });
    };

    let last = rows.pop().ok_or(FeedError::EmptyFeed { feed: feed.name() })?;

    let row = match last {
        Value::Array(row) => row,
        _ => Vec::new(),
    };

    if row.len() < feed.min_fields() {
        return Err(FeedError::MalformedRow {
            feed: feed.name(),
            expected: feed.min_fields(),
            found: row.len(),
        });
    }

    Ok(Reading::Row(row))
}

fn latest_record(feed: Feed, payload: Value) -> Result<Reading, FeedError> {
    let record = match payload {
        Value::Object(record) => record,
        Value::Array(mut records) => match records.pop() {
            Some(Value::Object(record)) => record,
            Some(_) => Map::new(),
            None => return Err(FeedError::EmptyFeed { feed: feed.name() }),
        },
        _ => Map::new(),
    };

    Ok(Reading::Record(record))
}
