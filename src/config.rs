//! Runtime configuration.
//!
//! A `Config` is resolved once from the command line (with environment variable fallbacks) and
//! tells the loader which file to read, how to parse it, and which sheet to use.

use crate::args::Args;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The input path used when none is given.
pub const DEFAULT_INPUT: &str = "data.xlsx";

/// How the input file should be parsed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Decide by file extension: `.csv` is CSV, anything else is a workbook.
    #[default]
    Auto,
    /// Comma separated values with a header row.
    Csv,
    /// A spreadsheet workbook (xlsx, xlsm, xlsb, xls or ods).
    Workbook,
}

serde_plain::derive_display_from_serialize!(InputFormat);
serde_plain::derive_fromstr_from_deserialize!(InputFormat);

impl InputFormat {
    /// Resolves `Auto` against `path`. Never returns `Auto`.
    pub fn resolve(self, path: &Path) -> InputFormat {
        match self {
            InputFormat::Auto => {
                let is_csv = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
                if is_csv {
                    InputFormat::Csv
                } else {
                    InputFormat::Workbook
                }
            }
            other => other,
        }
    }
}

/// The `Config` object represents the settings of a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    input: PathBuf,
    format: InputFormat,
    sheet: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT)
    }
}

impl Config {
    /// Creates a config that reads `input`, detecting its format, from the first sheet.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            format: InputFormat::Auto,
            sheet: None,
        }
    }

    pub fn from_args(args: &Args) -> Self {
        Self::new(args.input().path())
            .with_format(args.format())
            .with_sheet(args.sheet().map(str::to_string))
    }

    pub fn with_format(mut self, format: InputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_sheet(mut self, sheet: Option<String>) -> Self {
        self.sheet = sheet;
        self
    }

    /// The path to the input file.
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// The input format with `Auto` already resolved.
    pub fn format(&self) -> InputFormat {
        self.format.resolve(&self.input)
    }

    /// The sheet to read, or `None` for the first one.
    pub fn sheet(&self) -> Option<&str> {
        self.sheet.as_deref()
    }
}
