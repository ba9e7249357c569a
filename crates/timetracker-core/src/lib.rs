//! # TimeTracker Core Library
//!
//! This library provides the calendar presentation core for the TimeTracker
//! time-tracking application. It follows a CLI-first philosophy: all
//! operations are available via a standalone CLI binary, with any GUI being
//! a thin rendering layer over the same core library.
//!
//! ## Architecture
//!
//! - **Overlap Layout Engine**: greedy interval coloring that assigns
//!   side-by-side columns to temporally overlapping calendar blocks
//! - **Views**: pure day/week builders that turn fetched records into
//!   positioned render blocks
//! - **API Client**: async HTTP client for the calendar data API
//! - **Config**: TOML-based user preferences
//!
//! ## Key Components
//!
//! - [`assign_columns_by_time`]: the column layout engine
//! - [`DayView`] / [`WeekView`]: positioned render data
//! - [`ApiClient`]: calendar payload fetching
//! - [`Config`]: application configuration management

pub mod api;
pub mod calendar;
pub mod config;
pub mod error;

pub use api::{ApiClient, CalendarPayload, CalendarRecord};
pub use calendar::{
    assign_columns_by_key, assign_columns_by_position, assign_columns_by_time, block_geometry,
    day_view, week_view, BlockGeometry, BlockPalette, CalendarBlock, CalendarItem,
    CalendarItemKind, ColumnAssignment, DayView, PixelSpan, ViewBuilder, WeekView, MAX_COLUMNS,
};
pub use config::Config;
pub use error::{ApiError, ConfigError, CoreError};
