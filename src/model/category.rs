use crate::model::Amount;
use serde::Serialize;

/// The summed amount of one category. Serializes as `{"Category": ..., "TotalAmount": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CategoryTotal {
    category: String,
    total_amount: Amount,
}

impl CategoryTotal {
    pub fn new(category: impl Into<String>, total_amount: Amount) -> Self {
        Self {
            category: category.into(),
            total_amount,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn total_amount(&self) -> Amount {
        self.total_amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_serialize_field_names() {
        let total = CategoryTotal::new("Books", Amount::from_str("125").unwrap());
        let json = serde_json::to_string(&total).unwrap();
        assert_eq!(json, r#"{"Category":"Books","TotalAmount":125.0}"#);
    }
}
