//! Row extraction from serializable values.
//!
//! Structs whose field names match the table's column header labels can be
//! appended directly, without spelling the values out positionally.

use serde::Serialize;

use crate::cell::CellValue;
use crate::table::{HeaderOrientation, PageTable};
use crate::util::text_width;

impl PageTable {
    /// Appends one row populated from a serializable value.
    ///
    /// The value is serialized to JSON and each column whose header label
    /// matches a field name receives that field's canonical text (`null`
    /// becomes empty text, nested values their compact JSON form). This is
    /// best-effort, like the rest of the mutation surface: unmatched
    /// columns stay empty, and a value that is not a struct/map (or a
    /// table without `Column` orientation headers) appends an empty row.
    ///
    /// ```rust
    /// use pagetable::{HeaderOrientation, PageTable};
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct Part {
    ///     sku: String,
    ///     stock: u32,
    /// }
    ///
    /// let mut table = PageTable::new("", 0, 0, HeaderOrientation::Column);
    /// table.add_headers(["sku", "stock"]);
    /// table.add_row_from(&Part { sku: "B-17".into(), stock: 4 });
    ///
    /// assert_eq!(table.value_at(0, 0), Some("B-17"));
    /// assert_eq!(table.value_at(0, 1), Some("4"));
    /// ```
    pub fn add_row_from<T: Serialize>(&mut self, value: &T) {
        self.set_row_count(self.row_count() + 1);
        if self.header_orientation() != HeaderOrientation::Column {
            return;
        }
        let Ok(serde_json::Value::Object(fields)) = serde_json::to_value(value) else {
            return;
        };

        let row = self.row_count() - 1;
        for column in 0..self.column_count() {
            let Some(field) = self.headers.get(column).and_then(|label| fields.get(label))
            else {
                continue;
            };
            let text = json_text(field);
            let width = text_width(&text);
            self.rows[row][column].set(CellValue::Text(text));
            self.widths.update(column + 1, width, false);
        }
    }
}

/// Canonical text for an extracted JSON value.
fn json_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
