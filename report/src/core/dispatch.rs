//! Selection of the summary variant for a failed assertion.
//!
//! An assertion is classified once into a [`Shape`] from the operator category
//! and whether its subject and comparison value resolve to identifiers. The
//! shape decides which builder produces the [`Summary`].

use tracing::debug;

use crate::core::assertion::Assertion;
use crate::core::identifier::Identifier;
use crate::core::identifier_parser::IdentifierParser;
use crate::core::operator::OperatorCategory;
use crate::core::renderable::Renderable;
use crate::core::summary::{
    ElementalIsRegExpSummary, ElementalToElementalComparisonSummary,
    ElementalToScalarComparisonSummary, ExistenceSummary, ScalarIsRegExpSummary,
    ScalarToElementalComparisonSummary, ScalarToScalarComparisonSummary,
};

/// Classified assertion, carrying the resolved identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Existence {
        subject: Identifier,
    },
    ElementalIsRegExp {
        subject: Identifier,
    },
    ScalarIsRegExp,
    ElementalToScalar {
        subject: Identifier,
    },
    ScalarToElemental {
        value: Identifier,
    },
    ElementalToElemental {
        subject: Identifier,
        value: Identifier,
    },
    ScalarToScalar,
}

/// Classify `assertion`, or `None` when no summary fits.
///
/// The comparison value is only resolved for comparisons.
pub fn classify(assertion: &Assertion, parser: &dyn IdentifierParser) -> Option<Shape> {
    let subject = parser.parse(&assertion.subject);
    let value = match &assertion.value {
        Some(value) if assertion.is_comparison() => parser.parse(value),
        _ => None,
    };
    let category = assertion.category();

    let shape = match (subject, value, category) {
        (Some(subject), Some(value), OperatorCategory::Comparison) => {
            Shape::ElementalToElemental { subject, value }
        }
        (None, Some(value), OperatorCategory::Comparison) => Shape::ScalarToElemental { value },
        (Some(subject), None, OperatorCategory::Existence) => Shape::Existence { subject },
        (Some(subject), None, OperatorCategory::Regexp) => Shape::ElementalIsRegExp { subject },
        (Some(subject), None, OperatorCategory::Comparison) => {
            Shape::ElementalToScalar { subject }
        }
        (None, None, OperatorCategory::Regexp) => Shape::ScalarIsRegExp,
        (None, None, OperatorCategory::Comparison) => Shape::ScalarToScalar,
        (subject, value, category) => {
            debug!(
                operator = assertion.operator.as_str(),
                subject_elemental = subject.is_some(),
                value_elemental = value.is_some(),
                ?category,
                "no summary for assertion shape"
            );
            return None;
        }
    };
    Some(shape)
}

/// A built failure summary.
pub enum Summary {
    Existence(ExistenceSummary),
    ElementalIsRegExp(ElementalIsRegExpSummary),
    ScalarIsRegExp(ScalarIsRegExpSummary),
    ElementalToScalar(ElementalToScalarComparisonSummary),
    ScalarToElemental(ScalarToElementalComparisonSummary),
    ElementalToElemental(ElementalToElementalComparisonSummary),
    ScalarToScalar(ScalarToScalarComparisonSummary),
}

impl Summary {
    /// Build the summary for an already classified assertion.
    ///
    /// For `is-regexp` the offending regular expression is the actual value.
    pub fn build(shape: &Shape, operator: &str, expected: &str, actual: &str) -> Self {
        match shape {
            Shape::Existence { subject } => {
                Summary::Existence(ExistenceSummary::new(subject, operator))
            }
            Shape::ElementalIsRegExp { subject } => {
                Summary::ElementalIsRegExp(ElementalIsRegExpSummary::new(subject, actual))
            }
            Shape::ScalarIsRegExp => Summary::ScalarIsRegExp(ScalarIsRegExpSummary::new(actual)),
            Shape::ElementalToScalar { subject } => Summary::ElementalToScalar(
                ElementalToScalarComparisonSummary::new(subject, operator, expected, actual),
            ),
            Shape::ScalarToElemental { value } => Summary::ScalarToElemental(
                ScalarToElementalComparisonSummary::new(value, operator, expected, actual),
            ),
            Shape::ElementalToElemental { subject, value } => Summary::ElementalToElemental(
                ElementalToElementalComparisonSummary::new(
                    subject, value, operator, expected, actual,
                ),
            ),
            Shape::ScalarToScalar => Summary::ScalarToScalar(
                ScalarToScalarComparisonSummary::new(operator, expected, actual),
            ),
        }
    }
}

impl Renderable for Summary {
    fn render(&self) -> String {
        match self {
            Summary::Existence(summary) => summary.render(),
            Summary::ElementalIsRegExp(summary) => summary.render(),
            Summary::ScalarIsRegExp(summary) => summary.render(),
            Summary::ElementalToScalar(summary) => summary.render(),
            Summary::ScalarToElemental(summary) => summary.render(),
            Summary::ElementalToElemental(summary) => summary.render(),
            Summary::ScalarToScalar(summary) => summary.render(),
        }
    }
}

/// Classify and build in one step. `None` means no diagnostic is available.
pub fn summarize(
    assertion: &Assertion,
    expected: &str,
    actual: &str,
    parser: &dyn IdentifierParser,
) -> Option<Summary> {
    let shape = classify(assertion, parser)?;
    Some(Summary::build(&shape, &assertion.operator, expected, actual))
}
