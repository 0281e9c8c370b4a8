use crate::error::Error;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// The header of the grouping column.
pub const CATEGORY: &str = "Category";

/// The header of the numeric column.
pub const AMOUNT: &str = "Amount";

/// Headers that must be present in the input, in the order they are reported when missing.
pub const REQUIRED_HEADERS: [&str; 2] = [CATEGORY, AMOUNT];

/// Represents a header in the input sheet, for example, `Category`
#[derive(Default, Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Header(String);

impl AsRef<str> for Header {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl<S: Into<String>> From<S> for Header {
    fn from(value: S) -> Self {
        Self(value.into())
    }
}

impl Display for Header {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Locates the required columns within a header row.
///
/// Matching is exact and case-sensitive. When the same header appears more than once, the first
/// occurrence wins.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Mapping {
    category: usize,
    amount: usize,
}

impl Mapping {
    /// Builds the mapping from a header row, or returns `Error::Schema` listing every required
    /// header that is absent.
    pub fn new<S, I>(headers: I) -> Result<Self, Error>
    where
        S: Into<Header>,
        I: IntoIterator<Item = S>,
    {
        let mut header_map: HashMap<Header, usize> = HashMap::new();
        for (ix, header) in headers.into_iter().map(Into::into).enumerate() {
            header_map.entry(header).or_insert(ix);
        }

        let find = |name: &str| header_map.get(&Header::from(name)).copied();
        let missing: Vec<String> = REQUIRED_HEADERS
            .into_iter()
            .filter(|&name| find(name).is_none())
            .map(|name| name.to_string())
            .collect();

        match (find(CATEGORY), find(AMOUNT)) {
            (Some(category), Some(amount)) => Ok(Self { category, amount }),
            _ => Err(Error::Schema { missing }),
        }
    }

    /// The column index of `Category`.
    pub fn category(&self) -> usize {
        self.category
    }

    /// The column index of `Amount`.
    pub fn amount(&self) -> usize {
        self.amount
    }
}
