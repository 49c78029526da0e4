// src/table/extract.rs

use anyhow::{bail, Result};
use scraper::ElementRef;
use tracing::{debug, instrument, trace};

use super::cell::{cell_text, is_cell, Cell};
use super::record::{Record, Table};

/// Turn a located `<table>` element into records keyed by its header row.
///
/// The first row supplies the header names; every later row becomes one
/// record. Fails only when the table has no rows to read.
#[instrument(level = "debug", skip_all)]
pub fn extract(table: ElementRef<'_>) -> Result<Table> {
    let rows = table_rows(table)?;
    let (header_row, data_rows) = match rows.split_first() {
        Some(split) => split,
        None => bail!("table has no rows"),
    };

    let headers: Vec<String> = child_cells(*header_row)
        .map(cell_text)
        .filter(|h| !h.is_empty())
        .collect();
    debug!(headers = ?headers, rows = data_rows.len(), "Read header row");

    let cells: Vec<Vec<Cell>> = data_rows
        .iter()
        .map(|row| child_cells(*row).map(Cell::from_element).collect())
        .collect();

    Ok(tabulate(headers, cells))
}

/// Assign cells to headers, expanding row spans downwards.
///
/// Cells of a row are consumed left to right, one per header whose slot is
/// still unset in that row's record. A consumed cell fills the same header in
/// the following `rowspan - 1` records, stopping at the end of the table and
/// leaving already-populated slots alone.
pub fn tabulate(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Table {
    let len = rows.len();
    let mut records = vec![Record::default(); len];

    for (index, row) in rows.into_iter().enumerate() {
        let mut cells = row.into_iter();
        for header in &headers {
            if records[index].field(header).is_some() {
                continue;
            }
            let Some(cell) = cells.next() else {
                break;
            };
            let end = cell.rowspan.end(index, len);
            trace!(row = index, header = %header, value = %cell.value, end, "Fill");
            for record in &mut records[index..end] {
                record.fill(header, &cell.value);
            }
        }
    }

    Table { headers, records }
}

/// The `tr` rows of `table`, taken from its `thead`, `tbody` and `tfoot`
/// sections in document order.
pub fn table_rows(table: ElementRef<'_>) -> Result<Vec<ElementRef<'_>>> {
    let sections: Vec<ElementRef<'_>> = table
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| matches!(el.value().name(), "thead" | "tbody" | "tfoot"))
        .collect();
    if sections.is_empty() {
        bail!("table has no body");
    }

    let rows: Vec<ElementRef<'_>> = sections
        .into_iter()
        .flat_map(|section| section.children().filter_map(ElementRef::wrap))
        .filter(|el| el.value().name() == "tr")
        .collect();
    if rows.is_empty() {
        bail!("table body has no rows");
    }
    Ok(rows)
}

fn child_cells(row: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    row.children().filter_map(ElementRef::wrap).filter(is_cell)
}
