//! # pagetable: paginated plain-text tables
//!
//! `pagetable` turns a 2-D grid of textual cell values into a bordered,
//! fixed-width, horizontally paginated table for plain fixed-width sinks:
//! terminals, log files, text reports.
//!
//! ## Core Concepts
//!
//! - [`PageTable`]: the grid, its headers, and the renderer in one owned
//!   structure
//! - [`HeaderOrientation`]: labels across columns, down rows, or absent
//! - [`CellValue`]: the closed set of scalar kinds a cell accepts; values
//!   convert to canonical text at write time
//! - [`BorderStyle`]: border glyph family (light box-drawing by default)
//! - Auto-fit widths: an unpinned column tracks the longest text written
//!   to it; [`PageTable::set_column_max_width`] pins a column and overflow
//!   is clipped instead
//! - Pages: tables wider than [`PageTable::columns_per_page`] data columns
//!   split into side-by-side blocks, each fully bordered
//!
//! ## Quick Start
//!
//! ```rust
//! use pagetable::{HeaderOrientation, PageTable};
//!
//! let mut table = PageTable::new("Stock", 0, 0, HeaderOrientation::Column);
//! table.add_headers(["Item", "Qty", "Fresh"]);
//! table.add_row(["apple", "3", "true"]);
//! table.update_value_at(1, 0, "out of range is ignored");
//!
//! println!("{}", table.render());
//! ```
//!
//! ## Error Handling
//!
//! The mutation surface is best-effort by default: out-of-range indices
//! are silently ignored, matching how a display utility is typically
//! driven. Every bounds-checked setter also has a `try_` variant returning
//! [`TableError`] for callers that want strict feedback.
//!
//! ## Width Measurement
//!
//! Widths are codepoint counts ([`text_width`]), not terminal display
//! columns; CJK-aware measurement is out of scope.

mod border;
mod cell;
mod error;
mod extract;
mod render;
mod table;
mod util;
mod widths;

pub use border::BorderStyle;
pub use cell::CellValue;
pub use error::TableError;
pub use table::{HeaderOrientation, PageTable};
pub use util::{clip, pad_right, text_width};
