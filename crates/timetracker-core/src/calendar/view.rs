//! Day and week view builders.
//!
//! Turns a fetched payload into positioned render blocks: records are
//! converted into clipped items, the overlap-column engine runs once per day
//! column, and each block carries the geometry plus the `(id, kind)` pair
//! the renderer uses as its detail-navigation key.
//!
//! Views are pure transforms rebuilt from scratch on every call; nothing is
//! cached between renders.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

use super::geometry::{block_geometry, BlockGeometry};
use super::item::{CalendarItem, CalendarItemKind};
use super::layout::assign_columns_by_time;
use crate::api::CalendarRecord;

/// Block colors used when a record carries none.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockPalette {
    pub event: String,
    pub task: String,
    pub time_entry: String,
}

impl Default for BlockPalette {
    fn default() -> Self {
        Self {
            event: CalendarItemKind::Event.default_color().into(),
            task: CalendarItemKind::Task.default_color().into(),
            time_entry: CalendarItemKind::TimeEntry.default_color().into(),
        }
    }
}

impl BlockPalette {
    fn color_for(&self, kind: CalendarItemKind) -> &str {
        match kind {
            CalendarItemKind::Event => &self.event,
            CalendarItemKind::Task => &self.task,
            CalendarItemKind::TimeEntry => &self.time_entry,
        }
    }
}

/// One positioned block, ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarBlock {
    pub id: String,
    pub kind: CalendarItemKind,
    pub title: String,
    pub color: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub geometry: BlockGeometry,
}

/// A laid-out day column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayView {
    pub date: NaiveDate,
    /// Columns active on this day; `0` when the day is empty.
    pub total_columns: usize,
    pub blocks: Vec<CalendarBlock>,
}

/// Seven laid-out day columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekView {
    pub week_start: NaiveDate,
    pub days: Vec<DayView>,
}

/// Builds day and week views from fetched records.
pub struct ViewBuilder {
    palette: BlockPalette,
    week_start: Weekday,
}

impl ViewBuilder {
    /// Create a builder with the default palette and Monday week start.
    pub fn new() -> Self {
        Self {
            palette: BlockPalette::default(),
            week_start: Weekday::Mon,
        }
    }

    /// Override the block palette.
    pub fn with_palette(mut self, palette: BlockPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Override the first day of the week.
    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    /// Build the day view for `date`.
    ///
    /// Records outside the day are dropped here; multi-day records
    /// contribute their clipped segment.
    pub fn day(&self, records: &[CalendarRecord], date: NaiveDate) -> DayView {
        let day_start = date.and_time(NaiveTime::MIN).and_utc();
        let items = CalendarItem::day_items(records, day_start);
        let assignments = assign_columns_by_time(&items);
        let total_columns = assignments.first().map(|a| a.total_columns).unwrap_or(0);

        let blocks = items
            .into_iter()
            .zip(assignments)
            .map(|(item, assignment)| {
                let geometry =
                    block_geometry(assignment, item.top_offset_minutes, item.duration_minutes);
                let color = item
                    .color
                    .unwrap_or_else(|| self.palette.color_for(item.kind).into());
                CalendarBlock {
                    id: item.id,
                    kind: item.kind,
                    title: item.title,
                    color,
                    start: item.start,
                    end: item.end,
                    geometry,
                }
            })
            .collect();

        DayView {
            date,
            total_columns,
            blocks,
        }
    }

    /// Build the week view for the week containing `date`.
    ///
    /// The layout engine runs once per day column; days never influence each
    /// other's column counts.
    pub fn week(&self, records: &[CalendarRecord], date: NaiveDate) -> WeekView {
        let week_start = date.week(self.week_start).first_day();
        let days = (0..7)
            .map(|offset| self.day(records, week_start + Duration::days(offset)))
            .collect();

        WeekView { week_start, days }
    }
}

impl Default for ViewBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience: build a day view with default settings.
pub fn day_view(records: &[CalendarRecord], date: NaiveDate) -> DayView {
    ViewBuilder::new().day(records, date)
}

/// Convenience: build a week view with default settings.
pub fn week_view(records: &[CalendarRecord], date: NaiveDate) -> WeekView {
    ViewBuilder::new().week(records, date)
}
