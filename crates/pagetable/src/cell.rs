//! Cell storage and the closed set of value kinds a cell accepts.
//!
//! A cell holds exactly one string, never absent. Writing any supported
//! scalar converts it to canonical text immediately, so rendering never
//! formats values; it only pads and clips text that is already final.

/// A single grid cell. Defaults to empty text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Cell {
    text: String,
}

impl Cell {
    pub(crate) fn set(&mut self, value: CellValue) {
        self.text = value.into_text();
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }
}

/// A value that can be written into a table cell.
///
/// This is the full set of supported source kinds; each converts to its
/// canonical textual form at write time (`true`/`false` for booleans,
/// decimal `Display` form for numbers).
///
/// Callers rarely name this type directly: every write operation takes
/// `impl Into<CellValue>`, so plain Rust scalars and strings work:
///
/// ```rust
/// use pagetable::CellValue;
///
/// assert_eq!(CellValue::from(42).into_text(), "42");
/// assert_eq!(CellValue::from(1.5).into_text(), "1.5");
/// assert_eq!(CellValue::from(true).into_text(), "true");
/// assert_eq!(CellValue::from('x').into_text(), "x");
/// assert_eq!(CellValue::from("plain").into_text(), "plain");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    /// Signed integer, rendered in decimal.
    Int(i64),
    /// Unsigned integer, rendered in decimal.
    UInt(u64),
    /// Floating point, rendered in shortest `Display` form.
    Float(f64),
    /// Boolean, rendered as `true` / `false`.
    Bool(bool),
    /// Single character.
    Char(char),
    /// Text, stored as-is.
    Text(String),
}

impl CellValue {
    /// Consumes the value, producing its canonical text.
    pub fn into_text(self) -> String {
        match self {
            CellValue::Int(v) => v.to_string(),
            CellValue::UInt(v) => v.to_string(),
            CellValue::Float(v) => v.to_string(),
            CellValue::Bool(v) => v.to_string(),
            CellValue::Char(v) => v.to_string(),
            CellValue::Text(v) => v,
        }
    }
}

macro_rules! cell_value_from_int {
    ($variant:ident: $($ty:ty),+) => {
        $(
            impl From<$ty> for CellValue {
                fn from(value: $ty) -> Self {
                    CellValue::$variant(value as _)
                }
            }
        )+
    };
}

cell_value_from_int!(Int: i8, i16, i32, i64, isize);
cell_value_from_int!(UInt: u8, u16, u32, u64, usize);

impl From<f32> for CellValue {
    fn from(value: f32) -> Self {
        CellValue::Float(value as f64)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<char> for CellValue {
    fn from(value: char) -> Self {
        CellValue::Char(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&String> for CellValue {
    fn from(value: &String) -> Self {
        CellValue::Text(value.clone())
    }
}
