//! Calendar presentation: item model, overlap-column layout, block
//! geometry, and day/week view builders.

pub mod geometry;
pub mod item;
pub mod layout;
pub mod view;

pub use geometry::{block_geometry, BlockGeometry, COLUMN_GAP_PERCENT};
pub use item::{CalendarItem, CalendarItemKind, MINUTES_PER_DAY, MIN_BLOCK_MINUTES};
pub use layout::{
    assign_columns_by_key, assign_columns_by_position, assign_columns_by_time, ColumnAssignment,
    PixelSpan, MAX_COLUMNS,
};
pub use view::{day_view, week_view, BlockPalette, CalendarBlock, DayView, ViewBuilder, WeekView};
