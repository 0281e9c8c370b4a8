//! Reads the input file into a `Table`.

use crate::config::{Config, InputFormat};
use crate::error::Result;
use crate::fs;
use crate::model::{Cell, Table};
use anyhow::{bail, Context};
use calamine::{open_workbook_auto_from_rs, Reader};
use std::io::Cursor;
use tracing::debug;

/// Loads the table described by `config`.
///
/// # Errors
/// - `Error::NotFound` if the input file does not exist.
/// - `Error::Schema` if the header row lacks `Category` or `Amount`.
/// - `Error::Unexpected` for anything else: unreadable files, corrupt or unsupported workbooks,
///   malformed CSV, or a `--sheet` that does not exist.
pub fn load(config: &Config) -> Result<Table> {
    let path = config.input();
    let format = config.format();
    debug!("Loading {} as {format}", path.display());

    // The file is fully in memory from here on; no handle outlives this call
    let bytes = fs::read(path)?;

    let table = match format {
        InputFormat::Csv => {
            if let Some(sheet) = config.sheet() {
                debug!("Ignoring sheet '{sheet}' for CSV input");
            }
            Table::new(csv_rows(&bytes)?)?
        }
        InputFormat::Workbook | InputFormat::Auto => {
            Table::new(workbook_rows(bytes, config.sheet())?)?
        }
    };

    debug!("Loaded {} rows from {}", table.len(), path.display());
    Ok(table)
}

fn csv_rows(bytes: &[u8]) -> anyhow::Result<Vec<Vec<Cell>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for (ix, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("Unable to parse CSV record {}", ix + 1))?;
        rows.push(record.iter().map(Cell::from_field).collect());
    }
    Ok(rows)
}

fn workbook_rows(bytes: Vec<u8>, sheet: Option<&str>) -> anyhow::Result<Vec<Vec<Cell>>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .context("Unable to open the input as a spreadsheet workbook")?;

    let range = match sheet {
        Some(name) => {
            if !workbook.sheet_names().iter().any(|s| s == name) {
                bail!("The workbook has no sheet named '{name}'");
            }
            workbook
                .worksheet_range(name)
                .with_context(|| format!("Failed to read sheet '{name}'"))?
        }
        None => match workbook.worksheet_range_at(0) {
            Some(range) => range.context("Failed to read the first sheet")?,
            None => bail!("The workbook has no sheets"),
        },
    };

    Ok(range
        .rows()
        .map(|row| row.iter().map(Cell::from).collect())
        .collect())
}
