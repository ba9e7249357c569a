//! Overlap-column layout for calendar blocks.
//!
//! Greedy interval coloring, sweeping blocks in start order: each block
//! takes the leftmost column that has been freed by the time it starts,
//! opening new columns as needed up to [`MAX_COLUMNS`]. Overlapping blocks
//! therefore get distinct columns until the cap is hit, after which extra
//! blocks pile into the last column and visual overlap is accepted.
//!
//! The engine is keyed, not typed: the same code lays out time ranges
//! (day and week views) and pre-computed vertical pixel ranges (the legacy
//! month-style layout). It is a pure, synchronous function with no error
//! states; callers filter malformed items before invoking it.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::item::CalendarItem;

/// Hard cap on side-by-side columns in one day column.
pub const MAX_COLUMNS: usize = 8;

/// Column slot assigned to one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAssignment {
    /// Zero-based column index, in `[0, MAX_COLUMNS - 1]`.
    pub column: usize,
    /// Columns active in this layout call, in `[1, MAX_COLUMNS]`.
    ///
    /// One global value per call: disjoint clusters within the same call
    /// share the widest cluster's count, matching the original renderer.
    pub total_columns: usize,
}

/// Assign columns to `items` using `key` to extract each item's
/// `(start, end)` range.
///
/// Assignments come back in the caller's item order, not sorted order.
/// Equal starts are broken by original index, so column assignment is
/// reproducible by contract rather than by sort internals. Empty input
/// yields empty output.
pub fn assign_columns_by_key<T, K, F>(items: &[T], key: F) -> Vec<ColumnAssignment>
where
    K: PartialOrd + Copy,
    F: Fn(&T) -> (K, K),
{
    if items.is_empty() {
        return Vec::new();
    }

    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| {
        let start_a = key(&items[a]).0;
        let start_b = key(&items[b]).0;
        start_a
            .partial_cmp(&start_b)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.cmp(&b))
    });

    // columns_end[c] is the end of the block currently occupying column c.
    let mut columns_end: Vec<K> = Vec::new();
    let mut columns = vec![0usize; items.len()];

    for &idx in &order {
        let (start, end) = key(&items[idx]);
        let column = match columns_end.iter().position(|col_end| *col_end <= start) {
            Some(freed) => freed,
            None if columns_end.len() < MAX_COLUMNS => columns_end.len(),
            None => MAX_COLUMNS - 1,
        };
        if column == columns_end.len() {
            columns_end.push(end);
        } else {
            columns_end[column] = end;
        }
        columns[idx] = column;
    }

    let total_columns = columns_end.len().max(1);
    columns
        .into_iter()
        .map(|column| ColumnAssignment {
            column,
            total_columns,
        })
        .collect()
}

/// Lay out calendar items by their effective time ranges.
///
/// The effective range runs from the clipped start for the clamped visual
/// duration, so a due-date point competes for a column as a full 30-minute
/// block.
pub fn assign_columns_by_time(items: &[CalendarItem]) -> Vec<ColumnAssignment> {
    assign_columns_by_key(items, |item| (item.start_ms(), item.effective_end_ms()))
}

/// Vertical pixel span of an already-positioned block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelSpan {
    pub top: f32,
    pub height: f32,
}

impl PixelSpan {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Lay out blocks by vertical pixel position (legacy month-style layout).
pub fn assign_columns_by_position(spans: &[PixelSpan]) -> Vec<ColumnAssignment> {
    assign_columns_by_key(spans, |span| (span.top, span.bottom()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// `(start, end)` in epoch milliseconds, offsets given in minutes.
    fn range(start_min: i64, end_min: i64) -> (i64, i64) {
        (start_min * 60_000, end_min * 60_000)
    }

    fn overlap(a: (i64, i64), b: (i64, i64)) -> bool {
        a.0 < b.1 && b.0 < a.1
    }

    #[test]
    fn staggered_pair_then_free_column() {
        // 09:00-10:00 and 09:30-10:30 overlap; 11:00-12:00 reuses column 0.
        let items = [range(540, 600), range(570, 630), range(660, 720)];
        let assigned = assign_columns_by_key(&items, |r| *r);

        assert_eq!(assigned[0].column, 0);
        assert_eq!(assigned[1].column, 1);
        assert_eq!(assigned[2].column, 0);
        assert!(assigned.iter().all(|a| a.total_columns == 2));
    }

    #[test]
    fn lone_item_gets_full_width() {
        let items = [range(840, 900)];
        let assigned = assign_columns_by_key(&items, |r| *r);
        assert_eq!(
            assigned[0],
            ColumnAssignment {
                column: 0,
                total_columns: 1
            }
        );
    }

    #[test]
    fn ninth_concurrent_item_is_forced_into_last_column() {
        let items: Vec<_> = (0..9).map(|_| range(480, 540)).collect();
        let assigned = assign_columns_by_key(&items, |r| *r);

        let columns: Vec<usize> = assigned.iter().map(|a| a.column).collect();
        assert_eq!(columns, vec![0, 1, 2, 3, 4, 5, 6, 7, 7]);
        assert!(assigned.iter().all(|a| a.total_columns == MAX_COLUMNS));
    }

    #[test]
    fn empty_input_is_a_no_op() {
        let assigned = assign_columns_by_key(&[] as &[(i64, i64)], |r| *r);
        assert!(assigned.is_empty());
    }

    #[test]
    fn equal_starts_keep_input_order() {
        let items = [range(540, 600), range(540, 660)];
        let assigned = assign_columns_by_key(&items, |r| *r);
        assert_eq!(assigned[0].column, 0);
        assert_eq!(assigned[1].column, 1);
    }

    #[test]
    fn assignments_follow_input_order_not_sorted_order() {
        // Later-starting item listed first still gets its own slot.
        let items = [range(660, 720), range(540, 600)];
        let assigned = assign_columns_by_key(&items, |r| *r);
        // 09:00-10:00 is swept first and takes column 0; 11:00 reuses it.
        assert_eq!(assigned[1].column, 0);
        assert_eq!(assigned[0].column, 0);
        assert!(assigned.iter().all(|a| a.total_columns == 1));
    }

    #[test]
    fn total_columns_is_global_across_disjoint_clusters() {
        // Busy morning cluster, lone evening item: the evening item still
        // reports the morning cluster's width.
        let items = [range(540, 600), range(550, 610), range(1020, 1080)];
        let assigned = assign_columns_by_key(&items, |r| *r);
        assert_eq!(assigned[2].column, 0);
        assert_eq!(assigned[2].total_columns, 2);
    }

    #[test]
    fn back_to_back_blocks_share_a_column() {
        // Half-open ranges: 09:00-10:00 frees its column for 10:00-11:00.
        let items = [range(540, 600), range(600, 660)];
        let assigned = assign_columns_by_key(&items, |r| *r);
        assert_eq!(assigned[0].column, 0);
        assert_eq!(assigned[1].column, 0);
    }

    #[test]
    fn position_variant_matches_time_variant() {
        let spans = [
            PixelSpan::new(100.0, 50.0),
            PixelSpan::new(120.0, 50.0),
            PixelSpan::new(300.0, 40.0),
        ];
        let times = [range(100, 150), range(120, 170), range(300, 340)];

        let by_position: Vec<usize> = assign_columns_by_position(&spans)
            .iter()
            .map(|a| a.column)
            .collect();
        let by_time: Vec<usize> = assign_columns_by_key(&times, |r| *r)
            .iter()
            .map(|a| a.column)
            .collect();
        assert_eq!(by_position, by_time);
    }

    proptest! {
        /// P1: while at most 8 columns are in use, overlapping items never
        /// share a column.
        #[test]
        fn overlapping_items_get_distinct_columns(
            raw in prop::collection::vec((0i64..1380, 1i64..240), 1..=8)
        ) {
            let items: Vec<_> = raw
                .iter()
                .map(|&(start, dur)| range(start, start + dur))
                .collect();
            let assigned = assign_columns_by_key(&items, |r| *r);

            for i in 0..items.len() {
                for j in (i + 1)..items.len() {
                    if overlap(items[i], items[j]) {
                        prop_assert_ne!(assigned[i].column, assigned[j].column);
                    }
                }
            }
        }

        /// P2 and P3: totals track emptiness and nothing escapes the cap.
        #[test]
        fn cap_and_totals_hold(
            raw in prop::collection::vec((0i64..1380, 1i64..240), 0..40)
        ) {
            let items: Vec<_> = raw
                .iter()
                .map(|&(start, dur)| range(start, start + dur))
                .collect();
            let assigned = assign_columns_by_key(&items, |r| *r);

            prop_assert_eq!(assigned.len(), items.len());
            for a in &assigned {
                prop_assert!(a.column < MAX_COLUMNS);
                prop_assert!(a.total_columns >= 1);
                prop_assert!(a.total_columns <= MAX_COLUMNS);
            }
        }

        /// P4: the layout is idempotent over unchanged input.
        #[test]
        fn layout_is_idempotent(
            raw in prop::collection::vec((0i64..1380, 1i64..240), 0..40)
        ) {
            let items: Vec<_> = raw
                .iter()
                .map(|&(start, dur)| range(start, start + dur))
                .collect();
            let first = assign_columns_by_key(&items, |r| *r);
            let second = assign_columns_by_key(&items, |r| *r);
            prop_assert_eq!(first, second);
        }
    }
}
