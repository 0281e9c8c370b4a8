//! Sums the `Amount` column of a spreadsheet by `Category` and renders the totals as JSON.
//!
//! The pipeline is strictly sequential: [`load`] → [`normalize`] → [`aggregate`] → [`emit`].
//! [`run`] composes the four phases.

mod aggregate;
pub mod args;
mod config;
mod emit;
mod error;
mod fs;
mod load;
pub mod model;
mod normalize;


pub use aggregate::aggregate;
pub use config::{Config, InputFormat, DEFAULT_INPUT};
pub use emit::{emit, to_json};
pub use error::{Error, Result};
pub use load::load;
pub use normalize::normalize;

use model::CategoryTotal;
use std::io::Write;
use tracing::debug;

/// Loads, normalizes and aggregates the input described by `config`.
pub fn summarize(config: &Config) -> Result<Vec<CategoryTotal>> {
    let table = load(config)?;
    let rows = normalize(table);
    Ok(aggregate(rows))
}

/// Runs the whole pipeline and writes the JSON document to `out`.
///
/// Nothing is written to `out` unless every phase succeeded.
pub fn run(config: &Config, out: impl Write) -> Result<()> {
    let totals = summarize(config)?;
    emit(&totals, out)?;
    debug!("Wrote {} category totals", totals.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::TestEnv;
    use std::str::FromStr;

    fn scenario_totals() -> Vec<(String, f64)> {
        vec![
            ("Books".to_string(), 125.0),
            ("Electronics".to_string(), 300.0),
            ("Food".to_string(), 20.0),
        ]
    }

    fn as_pairs(totals: &[CategoryTotal]) -> Vec<(String, f64)> {
        totals
            .iter()
            .map(|t| (t.category().to_string(), t.total_amount().to_f64()))
            .collect()
    }

    #[test]
    fn test_scenario_xlsx() {
        let env = TestEnv::new();
        let path = env.write_xlsx("data.xlsx", TestEnv::scenario());
        let totals = summarize(&Config::new(path)).unwrap();
        assert_eq!(as_pairs(&totals), scenario_totals());
    }

    #[test]
    fn test_scenario_csv() {
        let env = TestEnv::new();
        let path = env.write_csv("data.csv", TestEnv::scenario());
        let totals = summarize(&Config::new(path)).unwrap();
        assert_eq!(as_pairs(&totals), scenario_totals());
    }

    #[test]
    fn test_run_scenario_output() {
        let env = TestEnv::new();
        let path = env.write_xlsx("data.xlsx", TestEnv::scenario());
        let mut out = Vec::new();
        run(&Config::new(path), &mut out).unwrap();
        let expected = r#"[
    {
        "Category": "Books",
        "TotalAmount": 125.0
    },
    {
        "Category": "Electronics",
        "TotalAmount": 300.0
    },
    {
        "Category": "Food",
        "TotalAmount": 20.0
    }
]
"#;
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_run_is_idempotent() {
        let env = TestEnv::new();
        let path = env.write_xlsx("data.xlsx", TestEnv::scenario());
        let config = Config::new(path);
        let mut first = Vec::new();
        let mut second = Vec::new();
        run(&config, &mut first).unwrap();
        run(&config, &mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sum_conservation_and_completeness() {
        let env = TestEnv::new();
        let data: &[&[&str]] = &[
            &["Category", "Amount", "Note"],
            &["a", "1.25", "x"],
            &["b", "oops", ""],
            &["a", "-0.25", ""],
            &["c", "", "only a note"],
            &["b", "1e1", ""],
            &["A", "2", ""],
        ];
        let path = env.write_csv("data.csv", data);
        let totals = summarize(&Config::new(path)).unwrap();

        let categories: Vec<&str> = totals.iter().map(|t| t.category()).collect();
        assert_eq!(categories, vec!["A", "a", "b", "c"]);

        let sum: model::Amount = totals.iter().map(|t| t.total_amount()).sum();
        assert_eq!(sum, model::Amount::from_str("13").unwrap());
    }

    #[test]
    fn test_amounts_beyond_decimal_range() {
        let env = TestEnv::new();
        let data: &[&[&str]] = &[
            &["Category", "Amount"],
            &["Big", "100000000000000000000000000000"],
            &["Sci", "1e40"],
            &["Ok", "5"],
        ];
        let path = env.write_csv("data.csv", data);
        let totals = summarize(&Config::new(path)).unwrap();
        assert_eq!(
            as_pairs(&totals),
            vec![
                ("Big".to_string(), 1e29),
                ("Ok".to_string(), 5.0),
                ("Sci".to_string(), 1e40),
            ]
        );
    }

    #[test]
    fn test_run_writes_nothing_on_schema_error() {
        let env = TestEnv::new();
        let data: &[&[&str]] = &[&["Category", "Value"], &["a", "1"]];
        let path = env.write_csv("data.csv", data);
        let mut out = Vec::new();
        let result = run(&Config::new(path), &mut out);
        match result {
            Err(Error::Schema { missing }) => assert_eq!(missing, vec!["Amount"]),
            other => panic!("expected Schema, got {other:?}"),
        }
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_writes_nothing_on_missing_file() {
        let env = TestEnv::new();
        let mut out = Vec::new();
        let result = run(&Config::new(env.path("absent.xlsx")), &mut out);
        assert!(matches!(result, Err(Error::NotFound { .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn test_header_only_gives_empty_array() {
        let env = TestEnv::new();
        let data: &[&[&str]] = &[&["Category", "Amount"]];
        let path = env.write_xlsx("data.xlsx", data);
        let mut out = Vec::new();
        run(&Config::new(path), &mut out).unwrap();
        assert_eq!(out, b"[]\n");
    }
}
