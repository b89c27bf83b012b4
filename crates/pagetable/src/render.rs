//! The paginated renderer.
//!
//! A table wider than `columns_per_page` data columns is split into
//! vertical strips ("pages"), each rendered as a complete bordered block:
//! its own top border, title bar (page 0 only), header strip, data rows,
//! and bottom border. Pages are separated by one blank line.

use crate::border::{BorderChars, LineGlyphs};
use crate::table::{HeaderOrientation, PageTable};
use crate::util::{cell_text, text_width};

impl PageTable {
    /// Renders every page, left to right, as one string.
    ///
    /// Takes `&mut self` because title layout is allowed to write through
    /// to the shared width entries: a title wider than page 0's natural
    /// width widens every visible column, and the widened widths remain
    /// observable through [`column_width`](PageTable::column_width) after
    /// this call returns. That shared layout state is intentional; later
    /// pages and later renders reuse it.
    ///
    /// Returns an empty string for a 0×0 table.
    pub fn render(&mut self) -> String {
        let mut out = String::new();
        if self.row_count() == 0 && self.column_count() == 0 {
            return out;
        }
        for page in 0..self.page_count() {
            self.render_page(page, &mut out);
        }
        out
    }

    /// Writes the full paginated render to standard output.
    pub fn print(&mut self) {
        print!("{}", self.render());
    }

    fn render_page(&mut self, page: usize, out: &mut String) {
        let chars = self.border_style().chars();
        let begin = page * self.columns_per_page();
        let end = (begin + self.columns_per_page()).min(self.column_count());
        let visible = end - begin;
        let has_row_headers = self.header_orientation() == HeaderOrientation::Row;

        // Page width: visible column widths, the row-header column when
        // present, and one separator per interior boundary.
        let separators = if has_row_headers { visible } else { visible - 1 };
        let mut page_width = self.widths.get(0) + separators;
        for column in begin..end {
            page_width += self.widths.get(column + 1);
        }

        if page == 0 && !self.title().is_empty() {
            let title_width = text_width(self.title());
            if title_width > page_width {
                // Widen every visible column so the title fits; the extra
                // space is split evenly after reserving the row-header
                // column. Pinned widths are overwritten too.
                let row_header = self.widths.get(0);
                let per_column = (title_width - row_header) / visible;
                page_width = row_header + separators;
                for column in begin..end {
                    self.widths.set_width(column + 1, per_column);
                    page_width += per_column;
                }
            }

            out.push(chars.top.left);
            for _ in 0..page_width {
                out.push(chars.horizontal);
            }
            out.push(chars.top.right);
            out.push('\n');

            out.push(chars.vertical);
            out.push_str(&cell_text(self.title(), page_width));
            out.push(chars.vertical);
            out.push('\n');

            // The line closing the title bar opens the column grid, so it
            // pairs the separator row's ends with the top row's junctions.
            self.horizontal_line(
                out,
                begin,
                end,
                &chars,
                LineGlyphs {
                    left: chars.middle.left,
                    middle: chars.top.middle,
                    right: chars.middle.right,
                },
            );
        } else {
            self.horizontal_line(out, begin, end, &chars, chars.top);
        }

        if self.header_orientation() == HeaderOrientation::Column {
            for column in begin..end {
                out.push(chars.vertical);
                out.push_str(&cell_text(&self.headers[column], self.widths.get(column + 1)));
            }
            out.push(chars.vertical);
            out.push('\n');
            self.horizontal_line(out, begin, end, &chars, chars.middle);
        }

        for row in 0..self.row_count() {
            if has_row_headers {
                out.push(chars.vertical);
                out.push_str(&cell_text(&self.headers[row], self.widths.get(0)));
            }
            for column in begin..end {
                out.push(chars.vertical);
                out.push_str(&cell_text(
                    self.rows[row][column].text(),
                    self.widths.get(column + 1),
                ));
            }
            out.push(chars.vertical);
            out.push('\n');

            if row + 1 < self.row_count() {
                self.horizontal_line(out, begin, end, &chars, chars.middle);
            }
        }

        self.horizontal_line(out, begin, end, &chars, chars.bottom);
        out.push('\n');
    }

    /// One horizontal border line over the page's visible columns.
    fn horizontal_line(
        &self,
        out: &mut String,
        begin: usize,
        end: usize,
        chars: &BorderChars,
        glyphs: LineGlyphs,
    ) {
        out.push(glyphs.left);
        if self.header_orientation() == HeaderOrientation::Row {
            for _ in 0..self.widths.get(0) {
                out.push(chars.horizontal);
            }
            out.push(glyphs.middle);
        }
        for column in begin..end {
            for _ in 0..self.widths.get(column + 1) {
                out.push(chars.horizontal);
            }
            if column + 1 < end {
                out.push(glyphs.middle);
            }
        }
        out.push(glyphs.right);
        out.push('\n');
    }
}
