use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// The ways a run can fail. Every variant is fatal; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file does not exist.
    #[error("NotFound: input file does not exist: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The header row is missing one or more required columns.
    #[error("SchemaError: missing required column(s): {}", .missing.join(", "))]
    Schema { missing: Vec<String> },

    /// Anything else that went wrong while reading or parsing the input.
    #[error("UnexpectedError: {0:#}")]
    Unexpected(#[from] anyhow::Error),
}

impl Error {
    /// The process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::NotFound { .. } | Error::Schema { .. } | Error::Unexpected(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let e = Error::NotFound {
            path: PathBuf::from("missing.xlsx"),
        };
        assert_eq!(e.to_string(), "NotFound: input file does not exist: missing.xlsx");
    }

    #[test]
    fn test_schema_message_lists_every_column() {
        let e = Error::Schema {
            missing: vec!["Category".into(), "Amount".into()],
        };
        assert_eq!(
            e.to_string(),
            "SchemaError: missing required column(s): Category, Amount"
        );
    }

    #[test]
    fn test_unexpected_message_is_one_line() {
        let inner = anyhow::anyhow!("bad zip header").context("Unable to open workbook");
        let e = Error::from(inner);
        let msg = e.to_string();
        assert_eq!(msg, "UnexpectedError: Unable to open workbook: bad zip header");
        assert!(!msg.contains('\n'));
    }

    #[test]
    fn test_exit_codes_are_non_zero() {
        let errors = [
            Error::NotFound {
                path: PathBuf::from("x"),
            },
            Error::Schema { missing: vec![] },
            Error::Unexpected(anyhow::anyhow!("boom")),
        ];
        for e in errors {
            assert_ne!(e.exit_code(), 0);
        }
    }
}
