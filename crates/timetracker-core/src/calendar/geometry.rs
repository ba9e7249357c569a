//! Block geometry for positioned calendar blocks.
//!
//! Maps a column assignment and a clamped time range onto the inline
//! `left`/`width`/`top`/`height` percentages the renderer writes out.

use serde::{Deserialize, Serialize};

use super::item::MINUTES_PER_DAY;
use super::layout::ColumnAssignment;

/// Fixed gap between adjacent columns, percent of the day column width.
pub const COLUMN_GAP_PERCENT: f64 = 1.0;

/// Positioned extent of one block, all values in percent of the day column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockGeometry {
    pub left: f64,
    pub width: f64,
    pub top: f64,
    pub height: f64,
}

/// Horizontal `(left, width)` for a column slot.
///
/// A single-column layout spans the full width; otherwise columns share the
/// width evenly with [`COLUMN_GAP_PERCENT`] between neighbours.
pub fn horizontal_extent(assignment: ColumnAssignment) -> (f64, f64) {
    if assignment.total_columns <= 1 {
        return (0.0, 100.0);
    }

    let total = assignment.total_columns as f64;
    let width = (100.0 - (total - 1.0) * COLUMN_GAP_PERCENT) / total;
    let left = assignment.column as f64 * (width + COLUMN_GAP_PERCENT);
    (left, width)
}

/// Vertical `(top, height)` for a clamped minute range.
pub fn vertical_extent(top_offset_minutes: u32, duration_minutes: u32) -> (f64, f64) {
    let minutes_per_day = f64::from(MINUTES_PER_DAY);
    let top = f64::from(top_offset_minutes) / minutes_per_day * 100.0;
    let height = f64::from(duration_minutes) / minutes_per_day * 100.0;
    (top, height)
}

/// Full geometry for one block.
pub fn block_geometry(
    assignment: ColumnAssignment,
    top_offset_minutes: u32,
    duration_minutes: u32,
) -> BlockGeometry {
    let (left, width) = horizontal_extent(assignment);
    let (top, height) = vertical_extent(top_offset_minutes, duration_minutes);
    BlockGeometry {
        left,
        width,
        top,
        height,
    }
}
