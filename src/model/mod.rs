//! Types that represent the data model, from raw `Cell` values through to `CategoryTotal`.
mod amount;
mod category;
mod cell;
mod mapping;
mod table;

pub use amount::{Amount, AmountError};
pub use category::CategoryTotal;
pub use cell::Cell;
pub use mapping::{Header, Mapping, AMOUNT, CATEGORY, REQUIRED_HEADERS};
pub use table::{NormalizedRow, Row, Table};
