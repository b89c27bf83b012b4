//! Error type for the strict (`try_`) mutation surface.
//!
//! The plain setters on [`PageTable`](crate::PageTable) follow the
//! best-effort contract of a display utility: out-of-range indices are
//! silently ignored. The `try_`-prefixed variants report them instead;
//! both surfaces mutate identically when the index is in range.

use thiserror::Error;

/// Out-of-range index reported by the `try_` setters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// The row index was at or past the current row count.
    #[error("row index {index} out of bounds ({count} rows)")]
    RowOutOfBounds {
        /// The rejected index.
        index: usize,
        /// Row count at the time of the call.
        count: usize,
    },

    /// The column index was at or past the current column count.
    #[error("column index {index} out of bounds ({count} columns)")]
    ColumnOutOfBounds {
        /// The rejected index.
        index: usize,
        /// Column count at the time of the call.
        count: usize,
    },

    /// The header index was at or past the header count for the current
    /// orientation.
    #[error("header index {index} out of bounds ({count} headers)")]
    HeaderOutOfBounds {
        /// The rejected index.
        index: usize,
        /// Header count at the time of the call.
        count: usize,
    },

    /// Header operation on a table whose orientation is `None`.
    #[error("table has no headers (orientation is None)")]
    NoHeaders,
}
