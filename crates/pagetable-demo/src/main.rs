//! Demonstration harness: populates two sample tables and prints them.
//!
//! The library is the product; this binary only drives its public surface.

use std::io::Write;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use pagetable::{BorderStyle, HeaderOrientation, PageTable};
use serde::Serialize;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Border {
    Ascii,
    Light,
    Heavy,
    Double,
    Rounded,
}

impl From<Border> for BorderStyle {
    fn from(border: Border) -> Self {
        match border {
            Border::Ascii => BorderStyle::Ascii,
            Border::Light => BorderStyle::Light,
            Border::Heavy => BorderStyle::Heavy,
            Border::Double => BorderStyle::Double,
            Border::Rounded => BorderStyle::Rounded,
        }
    }
}

#[derive(Parser)]
#[command(name = "pagetable-demo", about = "Render sample paginated tables")]
struct Cli {
    /// Border glyph family.
    #[arg(long, value_enum, default_value_t = Border::Light)]
    border: Border,

    /// Maximum data columns per page (clamped to at least 3).
    #[arg(long, default_value_t = 4)]
    columns_per_page: usize,
}

#[derive(Serialize)]
struct Part {
    sku: String,
    name: String,
    stock: u32,
    reorder: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    // A row-labelled grid wide enough to paginate at the default setting.
    let mut grid = PageTable::new("", 0, 9, HeaderOrientation::Row).border(cli.border.into());
    grid.set_columns_per_page(cli.columns_per_page);
    grid.add_row(['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I']);
    grid.add_row(1..=9);
    grid.add_row(['N', 'A', 'A', 'A', 'A', 'B', 'F', 'F', 'H']);
    grid.update_header_at(0, "Vi");
    grid.update_header_at(1, "Di");
    grid.update_header_at(2, "Pi");
    write!(stdout, "{}", grid.render())?;

    // A titled, column-labelled table fed from serializable records.
    let mut inventory =
        PageTable::new("Inventory Audit Sheet", 0, 0, HeaderOrientation::Column)
            .border(cli.border.into());
    inventory.set_columns_per_page(cli.columns_per_page);
    inventory.add_headers(["sku", "name", "stock", "reorder"]);
    inventory.add_row_from(&Part {
        sku: "B-17".into(),
        name: "hex bolt".into(),
        stock: 412,
        reorder: false,
    });
    inventory.add_row_from(&Part {
        sku: "W-02".into(),
        name: "lock washer".into(),
        stock: 3,
        reorder: true,
    });
    write!(stdout, "{}", inventory.render())?;

    Ok(())
}
