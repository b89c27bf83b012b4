//! The table: rectangular cell grid, header list, and width policy.
//!
//! All mutation goes through the operations here, which keep three pieces
//! of state in lock-step: every row always has exactly `column_count()`
//! cells, the header list always matches the dimension the orientation
//! points at, and there are always `column_count() + 1` width entries.

use crate::border::BorderStyle;
use crate::cell::{Cell, CellValue};
use crate::error::TableError;
use crate::util::text_width;
use crate::widths::ColumnWidths;

/// Whether header labels run across columns, down rows, or are absent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderOrientation {
    /// One label per column, drawn as a header strip above the data.
    Column,
    /// One label per row, drawn as a leading header column.
    Row,
    /// No headers.
    #[default]
    None,
}

/// Minimum columns per page; smaller requests are clamped up.
const MIN_COLUMNS_PER_PAGE: usize = 3;

/// Columns per page for a freshly constructed table.
const DEFAULT_COLUMNS_PER_PAGE: usize = 4;

/// A bordered, fixed-width, horizontally paginated text table.
///
/// The grid, the header list, and the per-column width entries are created
/// together and resized in lock-step; there is no independent lifetime for
/// any part. Unpinned columns auto-fit to the longest text written to them;
/// [`set_column_max_width`](PageTable::set_column_max_width) pins a column
/// at a fixed width and overflowing text is clipped at render time.
///
/// ```rust
/// use pagetable::{HeaderOrientation, PageTable};
///
/// let mut table = PageTable::new("", 0, 0, HeaderOrientation::Column);
/// table.add_headers(["Name", "Qty"]);
/// table.add_row(["apple", "3"]);
/// table.add_row(["pear", "12"]);
///
/// assert_eq!(
///     table.render(),
///     "┌─────┬───┐\n\
///      │Name │Qty│\n\
///      ├─────┼───┤\n\
///      │apple│3  │\n\
///      ├─────┼───┤\n\
///      │pear │12 │\n\
///      └─────┴───┘\n\n",
/// );
/// ```
#[derive(Clone, Debug)]
pub struct PageTable {
    title: String,
    orientation: HeaderOrientation,
    columns_per_page: usize,
    border: BorderStyle,
    pub(crate) widths: ColumnWidths,
    pub(crate) headers: Vec<String>,
    pub(crate) rows: Vec<Vec<Cell>>,
}

impl PageTable {
    /// Creates a table with the given title, initial dimensions, and header
    /// orientation. New cells start empty; headers for the oriented
    /// dimension are auto-named (`Column 1`, `Row 1`, ...).
    pub fn new(
        title: impl Into<String>,
        row_count: usize,
        column_count: usize,
        orientation: HeaderOrientation,
    ) -> Self {
        let mut table = PageTable {
            title: title.into(),
            orientation,
            columns_per_page: DEFAULT_COLUMNS_PER_PAGE,
            border: BorderStyle::default(),
            widths: ColumnWidths::new(),
            headers: Vec::new(),
            rows: Vec::new(),
        };
        table.set_row_count(row_count);
        table.set_column_count(column_count);
        table
    }

    /// A 0×0 table; rows and columns are added afterwards.
    pub fn empty(title: impl Into<String>, orientation: HeaderOrientation) -> Self {
        Self::new(title, 0, 0, orientation)
    }

    /// Sets the border glyph family, consuming style for construction
    /// chaining.
    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// The current border glyph family.
    pub fn border_style(&self) -> BorderStyle {
        self.border
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.widths.column_count()
    }

    /// Grows or shrinks every row to exactly `columns` cells, with the
    /// width entries (and, under `Column` orientation, the header list)
    /// resized in lock-step. Retained cells keep their content; the
    /// operation is a no-op when `columns` equals the current count.
    pub fn set_column_count(&mut self, columns: usize) {
        self.widths.resize(columns);

        if self.orientation == HeaderOrientation::Column {
            while self.headers.len() < columns {
                let label = format!("Column {}", self.headers.len() + 1);
                let width = text_width(&label);
                self.headers.push(label);
                self.widths.update(self.headers.len(), width, true);
            }
            self.headers.truncate(columns);
        }

        for row in &mut self.rows {
            row.resize(columns, Cell::default());
        }
    }

    /// Grows or shrinks the row list to exactly `rows` rows; new rows are
    /// fully populated with empty cells. Under `Row` orientation the header
    /// list follows, auto-named labels feeding width entry 0.
    pub fn set_row_count(&mut self, rows: usize) {
        if self.orientation == HeaderOrientation::Row {
            while self.headers.len() < rows {
                let label = format!("Row {}", self.headers.len() + 1);
                let width = text_width(&label);
                self.headers.push(label);
                // Entry 0 is shared by every row header, so auto-named
                // labels only ratchet it up; a caller-set label keeps its
                // width when the row count grows.
                self.widths.update(0, width, false);
            }
            self.headers.truncate(rows);
        }

        let columns = self.column_count();
        self.rows.resize(rows, vec![Cell::default(); columns]);
    }

    /// Appends one header, growing the oriented dimension by one. No-op
    /// when the orientation is `None`.
    pub fn add_header(&mut self, label: impl Into<String>) {
        let label = label.into();
        let width = text_width(&label);
        match self.orientation {
            HeaderOrientation::Column => {
                self.set_column_count(self.column_count() + 1);
                if let Some(slot) = self.headers.last_mut() {
                    *slot = label;
                }
                self.widths.update(self.column_count(), width, true);
            }
            HeaderOrientation::Row => {
                self.set_row_count(self.row_count() + 1);
                if let Some(slot) = self.headers.last_mut() {
                    *slot = label;
                }
                self.widths.update(0, width, true);
            }
            HeaderOrientation::None => {}
        }
    }

    /// Appends a batch of headers, growing the oriented dimension by the
    /// batch size. No-op when the orientation is `None`.
    pub fn add_headers<S, I>(&mut self, labels: I)
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        for label in labels {
            self.add_header(label);
        }
    }

    /// Replaces one header label. Header text always determines the width
    /// it feeds: the corresponding width entry is set to the new label's
    /// length outright (unless that column is pinned).
    ///
    /// Out-of-range indices are silently ignored; see
    /// [`try_update_header_at`](PageTable::try_update_header_at).
    pub fn update_header_at(&mut self, index: usize, label: impl Into<String>) {
        self.try_update_header_at(index, label).ok();
    }

    /// Strict-bounds variant of [`update_header_at`](PageTable::update_header_at).
    pub fn try_update_header_at(
        &mut self,
        index: usize,
        label: impl Into<String>,
    ) -> Result<(), TableError> {
        let (count, entry) = match self.orientation {
            HeaderOrientation::Column => (self.column_count(), index + 1),
            HeaderOrientation::Row => (self.row_count(), 0),
            HeaderOrientation::None => return Err(TableError::NoHeaders),
        };
        if index >= count {
            return Err(TableError::HeaderOutOfBounds { index, count });
        }

        let label = label.into();
        let width = text_width(&label);
        self.headers[index] = label;
        self.widths.update(entry, width, true);
        Ok(())
    }

    /// The header label at `index`, if the oriented dimension has one.
    pub fn header_at(&self, index: usize) -> Option<&str> {
        self.headers.get(index).map(String::as_str)
    }

    /// Appends one row and fills its leading cells from `values`; values
    /// beyond the column count are dropped, columns beyond the values stay
    /// empty. Each written cell feeds the auto-fit width of its column.
    pub fn add_row<V, I>(&mut self, values: I)
    where
        V: Into<CellValue>,
        I: IntoIterator<Item = V>,
    {
        self.set_row_count(self.row_count() + 1);
        let columns = self.column_count();
        if let Some(row) = self.rows.last_mut() {
            for (i, value) in values.into_iter().take(columns).enumerate() {
                row[i].set(value.into());
                let width = text_width(row[i].text());
                self.widths.update(i + 1, width, false);
            }
        }
    }

    /// Appends one column and fills its leading cells from `values`,
    /// mirroring [`add_row`](PageTable::add_row).
    pub fn add_column<V, I>(&mut self, values: I)
    where
        V: Into<CellValue>,
        I: IntoIterator<Item = V>,
    {
        self.set_column_count(self.column_count() + 1);
        let column = self.column_count() - 1;
        let mut width = 0;
        for (row, value) in self.rows.iter_mut().zip(values) {
            let cell = &mut row[column];
            cell.set(value.into());
            width = width.max(text_width(cell.text()));
        }
        self.widths.update(column + 1, width, false);
    }

    /// Writes one cell, converting `value` to canonical text and feeding
    /// the column's auto-fit width. Out-of-range indices are silently
    /// ignored; see [`try_update_value_at`](PageTable::try_update_value_at).
    pub fn update_value_at(&mut self, row: usize, column: usize, value: impl Into<CellValue>) {
        self.try_update_value_at(row, column, value).ok();
    }

    /// Strict-bounds variant of [`update_value_at`](PageTable::update_value_at).
    pub fn try_update_value_at(
        &mut self,
        row: usize,
        column: usize,
        value: impl Into<CellValue>,
    ) -> Result<(), TableError> {
        if row >= self.row_count() {
            return Err(TableError::RowOutOfBounds {
                index: row,
                count: self.row_count(),
            });
        }
        if column >= self.column_count() {
            return Err(TableError::ColumnOutOfBounds {
                index: column,
                count: self.column_count(),
            });
        }

        let cell = &mut self.rows[row][column];
        cell.set(value.into());
        let width = text_width(cell.text());
        self.widths.update(column + 1, width, false);
        Ok(())
    }

    /// The cell text at `(row, column)`, if in bounds.
    pub fn value_at(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(Cell::text)
    }

    /// Pins a column at a fixed width; later writes no longer grow it and
    /// overflowing text is clipped at render time. Out-of-range indices
    /// are silently ignored.
    pub fn set_column_max_width(&mut self, index: usize, width: usize) {
        self.try_set_column_max_width(index, width).ok();
    }

    /// Strict-bounds variant of
    /// [`set_column_max_width`](PageTable::set_column_max_width).
    pub fn try_set_column_max_width(&mut self, index: usize, width: usize) -> Result<(), TableError> {
        if index >= self.column_count() {
            return Err(TableError::ColumnOutOfBounds {
                index,
                count: self.column_count(),
            });
        }
        self.widths.pin(index + 1, width);
        Ok(())
    }

    /// Un-pins a column and recomputes its width from scratch: the maximum
    /// of the header length (under `Column` orientation) and every current
    /// cell's length. A full rescan is required because no running maximum
    /// is kept while a column is pinned. Out-of-range indices are silently
    /// ignored.
    pub fn set_column_auto_width(&mut self, index: usize) {
        self.try_set_column_auto_width(index).ok();
    }

    /// Strict-bounds variant of
    /// [`set_column_auto_width`](PageTable::set_column_auto_width).
    pub fn try_set_column_auto_width(&mut self, index: usize) -> Result<(), TableError> {
        if index >= self.column_count() {
            return Err(TableError::ColumnOutOfBounds {
                index,
                count: self.column_count(),
            });
        }

        let mut width = if self.orientation == HeaderOrientation::Column {
            text_width(&self.headers[index])
        } else {
            0
        };
        for row in &self.rows {
            width = width.max(text_width(row[index].text()));
        }
        self.widths.unpin(index + 1, width);
        Ok(())
    }

    /// The current rendered width of a data column.
    pub fn column_width(&self, index: usize) -> Option<usize> {
        if index < self.column_count() {
            Some(self.widths.get(index + 1))
        } else {
            None
        }
    }

    /// Whether a data column is pinned.
    pub fn is_column_pinned(&self, index: usize) -> Option<bool> {
        if index < self.column_count() {
            Some(self.widths.is_pinned(index + 1))
        } else {
            None
        }
    }

    /// Width of the row-header column (meaningful under `Row` orientation,
    /// 0 otherwise).
    pub fn row_header_width(&self) -> usize {
        self.widths.get(0)
    }

    pub fn header_orientation(&self) -> HeaderOrientation {
        self.orientation
    }

    /// Switches the orientation and re-runs the corresponding resize pass,
    /// so the header list matches the newly oriented dimension. Labels that
    /// survive the resize are kept; only new slots are auto-named.
    pub fn set_header_orientation(&mut self, orientation: HeaderOrientation) {
        self.orientation = orientation;
        match orientation {
            HeaderOrientation::Column => self.set_column_count(self.column_count()),
            HeaderOrientation::Row => self.set_row_count(self.row_count()),
            HeaderOrientation::None => {}
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn columns_per_page(&self) -> usize {
        self.columns_per_page
    }

    /// Sets the maximum number of data columns per page, clamped up to 3.
    pub fn set_columns_per_page(&mut self, columns: usize) {
        self.columns_per_page = columns.max(MIN_COLUMNS_PER_PAGE);
    }

    /// Number of pages [`render`](PageTable::render) will emit.
    pub fn page_count(&self) -> usize {
        self.column_count().div_ceil(self.columns_per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_table_dimensions() {
        let table = PageTable::new("t", 2, 3, HeaderOrientation::None);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.title(), "t");
        assert_eq!(table.value_at(1, 2), Some(""));
        assert_eq!(table.value_at(2, 0), None);
    }

    #[test]
    fn set_column_count_keeps_retained_cells() {
        let mut table = PageTable::new("", 1, 3, HeaderOrientation::None);
        table.update_value_at(0, 0, "a");
        table.update_value_at(0, 2, "c");
        table.set_column_count(5);
        assert_eq!(table.column_count(), 5);
        assert_eq!(table.value_at(0, 0), Some("a"));
        assert_eq!(table.value_at(0, 2), Some("c"));
        assert_eq!(table.value_at(0, 4), Some(""));
        table.set_column_count(2);
        assert_eq!(table.value_at(0, 0), Some("a"));
        assert_eq!(table.value_at(0, 2), None);
    }

    #[test]
    fn set_row_count_keeps_retained_rows() {
        let mut table = PageTable::new("", 2, 1, HeaderOrientation::None);
        table.update_value_at(0, 0, "first");
        table.update_value_at(1, 0, "second");
        table.set_row_count(4);
        assert_eq!(table.row_count(), 4);
        assert_eq!(table.value_at(0, 0), Some("first"));
        assert_eq!(table.value_at(3, 0), Some(""));
        table.set_row_count(1);
        assert_eq!(table.value_at(0, 0), Some("first"));
        assert_eq!(table.value_at(1, 0), None);
    }

    #[test]
    fn column_headers_auto_named_one_indexed() {
        let table = PageTable::new("", 0, 3, HeaderOrientation::Column);
        assert_eq!(table.header_at(0), Some("Column 1"));
        assert_eq!(table.header_at(2), Some("Column 3"));
        // "Column 3" is 8 codepoints and drives the initial width.
        assert_eq!(table.column_width(2), Some(8));
    }

    #[test]
    fn row_headers_feed_reserved_entry() {
        let mut table = PageTable::new("", 0, 2, HeaderOrientation::Row);
        table.set_row_count(2);
        assert_eq!(table.header_at(0), Some("Row 1"));
        assert_eq!(table.header_at(1), Some("Row 2"));
        assert_eq!(table.row_header_width(), 5);
        // Data column widths are untouched by row headers.
        assert_eq!(table.column_width(0), Some(0));
    }

    #[test]
    fn row_growth_keeps_wider_header_column() {
        let mut table = PageTable::new("", 2, 1, HeaderOrientation::Row);
        table.update_header_at(0, "LongLabel");
        assert_eq!(table.row_header_width(), 9);

        // Auto-named "Row 3" is narrower and must not shrink the shared
        // row-header column.
        table.set_row_count(3);
        assert_eq!(table.row_header_width(), 9);
        assert_eq!(table.header_at(2), Some("Row 3"));

        // The existing label renders untruncated.
        let rendered = table.render();
        assert!(rendered.contains("│LongLabel│"));
    }

    #[test]
    fn add_header_appends_a_column() {
        let mut table = PageTable::new("", 1, 0, HeaderOrientation::Column);
        table.add_header("Status");
        assert_eq!(table.column_count(), 1);
        assert_eq!(table.header_at(0), Some("Status"));
        assert_eq!(table.column_width(0), Some(6));
        // The existing row grew in lock-step.
        assert_eq!(table.value_at(0, 0), Some(""));
    }

    #[test]
    fn add_header_is_a_noop_without_orientation() {
        let mut table = PageTable::new("", 1, 1, HeaderOrientation::None);
        table.add_header("ignored");
        assert_eq!(table.column_count(), 1);
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.header_at(0), None);
    }

    #[test]
    fn update_header_at_replaces_width_outright() {
        let mut table = PageTable::new("", 0, 1, HeaderOrientation::Column);
        assert_eq!(table.column_width(0), Some(8)); // "Column 1"
        table.update_header_at(0, "ID");
        assert_eq!(table.header_at(0), Some("ID"));
        assert_eq!(table.column_width(0), Some(2));
    }

    #[test]
    fn update_header_at_out_of_bounds() {
        let mut table = PageTable::new("", 0, 1, HeaderOrientation::Column);
        table.update_header_at(5, "nope");
        assert_eq!(table.header_at(0), Some("Column 1"));
        assert_eq!(
            table.try_update_header_at(5, "nope"),
            Err(TableError::HeaderOutOfBounds { index: 5, count: 1 }),
        );

        let mut plain = PageTable::new("", 1, 1, HeaderOrientation::None);
        assert_eq!(
            plain.try_update_header_at(0, "nope"),
            Err(TableError::NoHeaders),
        );
    }

    #[test]
    fn add_row_fills_leading_cells() {
        let mut table = PageTable::new("", 0, 3, HeaderOrientation::None);
        table.add_row(["a", "bb"]);
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.value_at(0, 0), Some("a"));
        assert_eq!(table.value_at(0, 1), Some("bb"));
        assert_eq!(table.value_at(0, 2), Some(""));
        assert_eq!(table.column_width(1), Some(2));
    }

    #[test]
    fn add_row_drops_excess_values() {
        let mut table = PageTable::new("", 0, 2, HeaderOrientation::None);
        table.add_row([1, 2, 3, 4]);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.value_at(0, 1), Some("2"));
    }

    #[test]
    fn add_column_fills_leading_cells() {
        let mut table = PageTable::new("", 2, 0, HeaderOrientation::None);
        table.add_column(["one", "two", "three"]);
        assert_eq!(table.column_count(), 1);
        assert_eq!(table.value_at(0, 0), Some("one"));
        assert_eq!(table.value_at(1, 0), Some("two"));
        assert_eq!(table.column_width(0), Some(3));
    }

    #[test]
    fn update_value_at_converts_and_is_bounds_checked() {
        let mut table = PageTable::new("", 1, 1, HeaderOrientation::None);
        table.update_value_at(0, 0, true);
        assert_eq!(table.value_at(0, 0), Some("true"));
        assert_eq!(table.column_width(0), Some(4));

        // Silent ignore out of bounds.
        table.update_value_at(3, 0, "x");
        table.update_value_at(0, 9, "x");
        assert_eq!(table.value_at(0, 0), Some("true"));

        assert_eq!(
            table.try_update_value_at(3, 0, "x"),
            Err(TableError::RowOutOfBounds { index: 3, count: 1 }),
        );
        assert_eq!(
            table.try_update_value_at(0, 9, "x"),
            Err(TableError::ColumnOutOfBounds { index: 9, count: 1 }),
        );
    }

    #[test]
    fn auto_fit_tracks_running_maximum() {
        let mut table = PageTable::new("", 3, 1, HeaderOrientation::None);
        table.update_value_at(0, 0, "abcdef");
        table.update_value_at(1, 0, "ab");
        assert_eq!(table.column_width(0), Some(6));
        table.update_value_at(2, 0, "abcdefghij");
        assert_eq!(table.column_width(0), Some(10));
    }

    #[test]
    fn pinned_column_ignores_writes() {
        let mut table = PageTable::new("", 1, 1, HeaderOrientation::None);
        table.set_column_max_width(0, 3);
        assert_eq!(table.is_column_pinned(0), Some(true));
        table.update_value_at(0, 0, "much longer text");
        assert_eq!(table.column_width(0), Some(3));
    }

    #[test]
    fn auto_width_rescans_header_and_cells() {
        let mut table = PageTable::new("", 2, 1, HeaderOrientation::Column);
        table.update_header_at(0, "ID");
        table.set_column_max_width(0, 1);
        table.update_value_at(0, 0, "abcde");
        table.update_value_at(1, 0, "xyz");
        assert_eq!(table.column_width(0), Some(1));

        table.set_column_auto_width(0);
        assert_eq!(table.is_column_pinned(0), Some(false));
        assert_eq!(table.column_width(0), Some(5));
    }

    #[test]
    fn auto_width_without_column_headers_uses_cells_only() {
        let mut table = PageTable::new("", 1, 1, HeaderOrientation::None);
        table.set_column_max_width(0, 9);
        table.update_value_at(0, 0, "ab");
        table.set_column_auto_width(0);
        assert_eq!(table.column_width(0), Some(2));
    }

    #[test]
    fn pin_out_of_bounds() {
        let mut table = PageTable::new("", 0, 1, HeaderOrientation::None);
        table.set_column_max_width(4, 2);
        assert_eq!(table.is_column_pinned(0), Some(false));
        assert_eq!(
            table.try_set_column_max_width(4, 2),
            Err(TableError::ColumnOutOfBounds { index: 4, count: 1 }),
        );
        assert_eq!(
            table.try_set_column_auto_width(4),
            Err(TableError::ColumnOutOfBounds { index: 4, count: 1 }),
        );
    }

    #[test]
    fn orientation_switch_resizes_headers() {
        let mut table = PageTable::new("", 2, 3, HeaderOrientation::None);
        table.set_header_orientation(HeaderOrientation::Column);
        assert_eq!(table.header_at(2), Some("Column 3"));

        // Switching to Row truncates to the row count, keeping surviving
        // labels in place.
        table.set_header_orientation(HeaderOrientation::Row);
        assert_eq!(table.header_at(0), Some("Column 1"));
        assert_eq!(table.header_at(1), Some("Column 2"));
        assert_eq!(table.header_at(2), None);

        table.set_row_count(3);
        assert_eq!(table.header_at(2), Some("Row 3"));
    }

    #[test]
    fn columns_per_page_clamped_to_three() {
        let mut table = PageTable::new("", 0, 0, HeaderOrientation::None);
        assert_eq!(table.columns_per_page(), 4);
        table.set_columns_per_page(1);
        assert_eq!(table.columns_per_page(), 3);
        table.set_columns_per_page(9);
        assert_eq!(table.columns_per_page(), 9);
    }

    #[test]
    fn page_count_is_ceiling_division() {
        let mut table = PageTable::new("", 0, 9, HeaderOrientation::None);
        assert_eq!(table.page_count(), 3);
        table.set_columns_per_page(9);
        assert_eq!(table.page_count(), 1);
        table.set_column_count(0);
        assert_eq!(table.page_count(), 0);
    }

    #[test]
    fn value_round_trip_canonical_text() {
        let mut table = PageTable::new("", 1, 6, HeaderOrientation::None);
        table.update_value_at(0, 0, 42);
        table.update_value_at(0, 1, true);
        table.update_value_at(0, 2, 1.5);
        table.update_value_at(0, 3, 'q');
        table.update_value_at(0, 4, "text");
        table.update_value_at(0, 5, -7i64);
        assert_eq!(table.value_at(0, 0), Some("42"));
        assert_eq!(table.value_at(0, 1), Some("true"));
        assert_eq!(table.value_at(0, 2), Some("1.5"));
        assert_eq!(table.value_at(0, 3), Some("q"));
        assert_eq!(table.value_at(0, 4), Some("text"));
        assert_eq!(table.value_at(0, 5), Some("-7"));
    }
}
