use calamine::Data;
use std::fmt;
use std::fmt::{Display, Formatter};

/// A single raw value as it was read from the input, before any coercion.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Dates, durations and spreadsheet error values, kept in their display form.
    Other(String),
}

impl Cell {
    /// Builds a cell from a CSV field. CSV has no types, so everything non-empty is text.
    pub fn from_field(field: &str) -> Self {
        if field.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(field.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

/// The text of the cell as it would be shown in a spreadsheet, used for grouping keys.
impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) | Cell::Other(s) => f.write_str(s),
            Cell::Int(i) => write!(f, "{i}"),
            Cell::Float(v) => write!(f, "{v}"),
            Cell::Bool(b) => f.write_str(if *b { "TRUE" } else { "FALSE" }),
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::Empty,
            Data::String(s) => Cell::from_field(s),
            Data::Int(i) => Cell::Int(*i),
            Data::Float(f) => Cell::Float(*f),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(_) | Data::DateTimeIso(_) | Data::DurationIso(_) | Data::Error(_) => {
                Cell::Other(data.to_string())
            }
        }
    }
}
