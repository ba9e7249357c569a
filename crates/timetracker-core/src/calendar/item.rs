//! Calendar item model.
//!
//! A `CalendarItem` is the transient, per-render representation of one
//! fetched record: its instants are clipped to the visible day and its
//! visual duration is clamped before layout. Nothing here survives beyond a
//! single render pass.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::api::CalendarRecord;

/// Minutes in one visible day column.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Minimum visual height of a block, in minutes.
pub const MIN_BLOCK_MINUTES: u32 = 30;

/// Kind of calendar item. Determines default color and display template;
/// never affects layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarItemKind {
    Event,
    Task,
    TimeEntry,
}

impl CalendarItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Task => "task",
            Self::TimeEntry => "time_entry",
        }
    }

    /// Fallback block color when the record carries none.
    pub fn default_color(&self) -> &'static str {
        match self {
            Self::Event => "#3b82f6",
            Self::Task => "#f59e0b",
            Self::TimeEntry => "#10b981",
        }
    }
}

/// A single item on the day being rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarItem {
    pub id: String,
    pub kind: CalendarItemKind,
    pub title: String,
    pub color: Option<String>,
    pub notes: Option<String>,
    /// Start instant, clipped to the day.
    pub start: DateTime<Utc>,
    /// End instant, clipped to the day. `start <= end` always holds.
    pub end: DateTime<Utc>,
    /// Minutes since the day start at `start`, in `[0, 1439]`.
    pub top_offset_minutes: u32,
    /// Visual duration: at least [`MIN_BLOCK_MINUTES`], never extending past
    /// the end of the day (the midnight cap wins over the minimum).
    pub duration_minutes: u32,
}

impl CalendarItem {
    /// Build an item from a fetched record for the day starting at
    /// `day_start`.
    ///
    /// Returns `None` for records missing a start instant, records whose
    /// range has a negative length, and records entirely outside
    /// `[day_start, day_start + 24h)` — the layout engine never sees them.
    pub fn from_record(record: &CalendarRecord, day_start: DateTime<Utc>) -> Option<Self> {
        let (id, kind, title, color, notes, start, end) = match record {
            CalendarRecord::Event {
                id,
                title,
                start,
                end,
                color,
                notes,
            } => {
                let start = (*start)?;
                let end = end.unwrap_or(start + Duration::minutes(60));
                (
                    id.clone(),
                    CalendarItemKind::Event,
                    title.clone(),
                    color.clone(),
                    notes.clone(),
                    start,
                    end,
                )
            }
            CalendarRecord::Task {
                id,
                title,
                due,
                color,
                ..
            } => {
                // A due date is a point in time; the minimum-height clamp
                // below turns it into a visible block.
                let due = (*due)?;
                (
                    id.clone(),
                    CalendarItemKind::Task,
                    title.clone(),
                    color.clone(),
                    None,
                    due,
                    due,
                )
            }
            CalendarRecord::TimeEntry {
                id,
                description,
                start,
                stop,
                color,
            } => {
                let start = (*start)?;
                // An entry without a stop is still running.
                let end = stop.unwrap_or(start + Duration::minutes(30));
                (
                    id.clone(),
                    CalendarItemKind::TimeEntry,
                    description.clone().unwrap_or_else(|| "Time entry".into()),
                    color.clone(),
                    None,
                    start,
                    end,
                )
            }
        };

        if end < start {
            return None;
        }

        let day_end = day_start + Duration::days(1);
        let in_day = if end == start {
            start >= day_start && start < day_end
        } else {
            start < day_end && end > day_start
        };
        if !in_day {
            return None;
        }

        let clipped_start = start.max(day_start);
        let clipped_end = end.min(day_end);

        let top_offset_minutes = (clipped_start - day_start).num_minutes() as u32;
        let actual_minutes = (clipped_end - clipped_start).num_minutes() as u32;
        let duration_minutes =
            actual_minutes.max(MIN_BLOCK_MINUTES).min(MINUTES_PER_DAY - top_offset_minutes);

        Some(Self {
            id,
            kind,
            title,
            color,
            notes,
            start: clipped_start,
            end: clipped_end,
            top_offset_minutes,
            duration_minutes,
        })
    }

    /// Build the day's items from a fetched payload, in payload order.
    pub fn day_items(records: &[CalendarRecord], day_start: DateTime<Utc>) -> Vec<Self> {
        records
            .iter()
            .filter_map(|r| Self::from_record(r, day_start))
            .collect()
    }

    /// Start of the effective (clamped) range, epoch milliseconds.
    pub fn start_ms(&self) -> i64 {
        self.start.timestamp_millis()
    }

    /// End of the effective (clamped) range, epoch milliseconds. This is the
    /// range the layout engine colors, so a due-date point occupies its full
    /// 30-minute visual block.
    pub fn effective_end_ms(&self) -> i64 {
        self.start_ms() + i64::from(self.duration_minutes) * 60_000
    }

    /// Check whether the effective ranges of two items intersect.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_ms() < other.effective_end_ms() && other.start_ms() < self.effective_end_ms()
    }
}
