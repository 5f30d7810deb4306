//! Failed assertion as handed over by the test runner.

use serde::{Deserialize, Serialize};

use crate::core::operator::{self, OperatorCategory};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assertion {
    pub operator: String,
    /// Raw source of the asserted operand (identifier or value reference).
    pub subject: String,
    /// Raw source of the comparison operand; comparisons only.
    #[serde(default)]
    pub value: Option<String>,
}

impl Assertion {
    pub fn existence(subject: impl Into<String>, operator: impl Into<String>) -> Self {
        Self {
            operator: operator.into(),
            subject: subject.into(),
            value: None,
        }
    }

    pub fn comparison(
        subject: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            operator: operator.into(),
            subject: subject.into(),
            value: Some(value.into()),
        }
    }

    pub fn is_comparison(&self) -> bool {
        self.value.is_some()
    }

    pub fn category(&self) -> OperatorCategory {
        operator::category(&self.operator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_flag_follows_value() {
        assert!(!Assertion::existence(r#"$".a""#, "exists").is_comparison());
        assert!(Assertion::comparison(r#"$".a""#, "is", r#""x""#).is_comparison());
    }

    #[test]
    fn deserializes_without_value() {
        let assertion: Assertion =
            serde_json::from_str(r#"{"operator":"is-regexp","subject":"$data.pattern"}"#)
                .expect("parse");
        assert_eq!(assertion.value, None);
        assert_eq!(assertion.category(), OperatorCategory::Regexp);
    }
}
