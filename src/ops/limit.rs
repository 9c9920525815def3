//! Pagination: offset/limit windowing over rows.

use crate::types::DataTable;

/// Keep only `rows[offset .. offset + limit]`.
///
/// A negative offset is treated as 0; a negative limit keeps everything from
/// the offset to the end. The summary row survives only when
/// `keep_summary_row` is non-zero.
pub fn limit(table: &mut DataTable, offset: i64, limit: i64, keep_summary_row: i64) {
    let len = table.row_count();
    let start = usize::try_from(offset.max(0)).unwrap_or(usize::MAX).min(len);
    let end = if limit < 0 {
        len
    } else {
        start.saturating_add(limit as usize).min(len)
    };

    table.rows.truncate(end);
    table.rows.drain(..start);

    if keep_summary_row == 0 {
        table.summary_row = None;
    }
}
