use crate::error::Result;
use crate::model::mapping::Mapping;
use crate::model::{Amount, Cell, Header};
use tracing::trace;

/// Represents the rows of the input sheet, reduced to the two columns that matter.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Builds a table from raw sheet data. The first row is the header row.
    ///
    /// Fails with `Error::Schema` when the header row lacks a required column, including when
    /// there is no header row at all. Rows with no content in any cell are skipped.
    pub fn new<R>(sheet_data: impl IntoIterator<Item = R>) -> Result<Self>
    where
        R: IntoIterator<Item = Cell>,
    {
        let mut rows = sheet_data.into_iter();
        let headers: Vec<Header> = match rows.next() {
            Some(header_row) => header_row
                .into_iter()
                .map(|cell| Header::from(cell.to_string()))
                .collect(),
            None => Vec::new(),
        };
        let mapping = Mapping::new(headers)?;

        let mut data = Vec::new();
        for (row_ix, row) in rows.enumerate() {
            let cells: Vec<Cell> = row.into_iter().collect();
            if cells.iter().all(Cell::is_empty) {
                trace!("Skipping blank row {}", row_ix + 2);
                continue;
            }
            data.push(Row::from_cells(&mapping, cells));
        }

        Ok(Self { rows: data })
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl IntoIterator for Table {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

/// A single data row: its grouping key and its raw, not yet coerced, amount.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Row {
    category: String,
    amount: Cell,
}

impl Row {
    pub fn new(category: impl Into<String>, amount: Cell) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }

    fn from_cells(mapping: &Mapping, mut cells: Vec<Cell>) -> Self {
        let mut take = |ix: usize| cells.get_mut(ix).map(std::mem::take).unwrap_or_default();
        let category = take(mapping.category()).to_string();
        let amount = take(mapping.amount());
        Self { category, amount }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> &Cell {
        &self.amount
    }
}

/// A row whose amount has been coerced to a number.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct NormalizedRow {
    category: String,
    amount: Amount,
}

impl NormalizedRow {
    pub fn new(category: impl Into<String>, amount: Amount) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn into_parts(self) -> (String, Amount) {
        (self.category, self.amount)
    }
}
