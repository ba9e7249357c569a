//! Calendar data API payload types.
//!
//! The calendar data API returns a JSON body with one `items` array; a
//! `type` field on each record distinguishes events, tasks, and time
//! entries. Records are deserialized into a tagged union with explicit
//! optional fields rather than navigated as loose JSON.
//!
//! A record missing its start instant is kept through deserialization and
//! dropped at item construction, so one malformed record never rejects the
//! whole payload.

pub mod client;

pub use client::ApiClient;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One record from the calendar data API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CalendarRecord {
    /// A scheduled calendar event.
    Event {
        id: String,
        title: String,
        #[serde(default)]
        start: Option<DateTime<Utc>>,
        #[serde(default)]
        end: Option<DateTime<Utc>>,
        #[serde(default)]
        color: Option<String>,
        #[serde(default)]
        notes: Option<String>,
    },
    /// A task with a due date (a point in time).
    Task {
        id: String,
        title: String,
        #[serde(default)]
        due: Option<DateTime<Utc>>,
        #[serde(default)]
        color: Option<String>,
        #[serde(default)]
        completed: bool,
    },
    /// A logged span of worked time. An entry without a stop is still
    /// running.
    TimeEntry {
        id: String,
        #[serde(default)]
        description: Option<String>,
        #[serde(default)]
        start: Option<DateTime<Utc>>,
        #[serde(default)]
        stop: Option<DateTime<Utc>>,
        #[serde(default)]
        color: Option<String>,
    },
}

impl CalendarRecord {
    /// Server-assigned record ID.
    pub fn id(&self) -> &str {
        match self {
            Self::Event { id, .. } | Self::Task { id, .. } | Self::TimeEntry { id, .. } => id,
        }
    }
}

/// The JSON body returned by `GET /api/calendar`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarPayload {
    #[serde(default)]
    pub items: Vec<CalendarRecord>,
}

impl CalendarPayload {
    /// Parse a payload from a raw JSON string.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}
