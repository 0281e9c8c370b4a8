//! These structs provide the CLI interface for the category-totals CLI.

use crate::config::{InputFormat, DEFAULT_INPUT};
use clap::Parser;
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;

/// category-totals: Sums the Amount column of a spreadsheet by Category.
///
/// Reads the first sheet of the input (or the sheet named by --sheet), coerces every Amount that
/// is not a number to 0, and prints one {"Category", "TotalAmount"} object per distinct category
/// as a JSON array on stdout, sorted by category. Errors are reported on stderr with a non-zero
/// exit code and nothing is printed on stdout.
#[derive(Debug, Parser, Clone)]
#[command(version)]
pub struct Args {
    /// The spreadsheet to read. Workbooks (xlsx, xlsm, xlsb, xls, ods) and CSV are supported.
    #[arg(env = "CATEGORY_TOTALS_INPUT", default_value_t = DisplayPath::from(PathBuf::from(DEFAULT_INPUT)))]
    input: DisplayPath,

    /// The worksheet to read. Defaults to the first sheet. Ignored for CSV input.
    #[arg(long, env = "CATEGORY_TOTALS_SHEET")]
    sheet: Option<String>,

    /// How to parse the input. `auto` treats a .csv extension as CSV and anything else as a
    /// workbook.
    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    format: InputFormat,

    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. Logs are written to stderr.
    #[arg(long, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,
}

impl Args {
    pub fn input(&self) -> &DisplayPath {
        &self.input
    }

    pub fn sheet(&self) -> Option<&str> {
        self.sheet.as_deref()
    }

    pub fn format(&self) -> InputFormat {
        self.format
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn path(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["category-totals"]).unwrap();
        // CATEGORY_TOTALS_INPUT may be set in the environment, so only check the others
        assert_eq!(args.format(), InputFormat::Auto);
        assert_eq!(args.log_level(), LevelFilter::WARN);
    }

    #[test]
    fn test_all_options() {
        let args = Args::try_parse_from([
            "category-totals",
            "sales.csv",
            "--sheet",
            "Q1",
            "--format",
            "csv",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.input().path(), Path::new("sales.csv"));
        assert_eq!(args.sheet(), Some("Q1"));
        assert_eq!(args.format(), InputFormat::Csv);
        assert_eq!(args.log_level(), LevelFilter::DEBUG);
    }

    #[test]
    fn test_bad_format_is_rejected() {
        let result = Args::try_parse_from(["category-totals", "--format", "json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_display_path() {
        let path: DisplayPath = "dir/data.xlsx".parse().unwrap();
        assert_eq!(path.to_string(), "dir/data.xlsx");
        assert_eq!(path.extension().unwrap(), "xlsx");
    }
}
