//! Failure summary builders, one per assertion shape.
//!
//! Every builder composes a [`RenderableCollection`] from identifier blocks and
//! literal lines. Comparison summaries end with a blank line and a
//! [`ScalarTail`] restating the outcome on one line.

use crate::core::identifier::Identifier;
use crate::core::identifier_render::{AncestorHierarchy, IdentifierProperties};
use crate::core::markup::Comment;
use crate::core::operator::{self, INVALID_REGEXP_OUTCOME, OutcomeContext};
use crate::core::renderable::{Indented, Literal, Renderable, RenderableCollection};

macro_rules! render_block {
    ($($summary:ty),+ $(,)?) => {
        $(
            impl Renderable for $summary {
                fn render(&self) -> String {
                    self.block.render()
                }
            }
        )+
    };
}

render_block!(
    ScalarTail,
    ExistenceSummary,
    ElementalToScalarComparisonSummary,
    ScalarToElementalComparisonSummary,
    ElementalToElementalComparisonSummary,
    ScalarToScalarComparisonSummary,
    ElementalIsRegExpSummary,
    ScalarIsRegExpSummary,
);

/// `* <actual> <outcome> <expected>`.
pub struct ScalarTail {
    block: RenderableCollection,
}

impl ScalarTail {
    pub fn new(operator: &str, expected: &str, actual: &str) -> Self {
        let line = format!(
            "* {} {} {}",
            Comment::new(actual),
            comparison_phrase(operator),
            Comment::new(expected)
        );
        Self {
            block: RenderableCollection::new(vec![Box::new(Literal::new(line))]),
        }
    }
}

/// Element or attribute that does (not) exist.
pub struct ExistenceSummary {
    block: RenderableCollection,
}

impl ExistenceSummary {
    pub fn new(identifier: &Identifier, operator: &str) -> Self {
        let mut items = subject_header(identifier);
        items.push(Box::new(Literal::indented(
            operator::outcome_phrase(operator, OutcomeContext::Existence),
            1,
        )));
        Self {
            block: RenderableCollection::new(items),
        }
    }
}

/// Identified subject compared against a plain value.
pub struct ElementalToScalarComparisonSummary {
    block: RenderableCollection,
}

impl ElementalToScalarComparisonSummary {
    pub fn new(identifier: &Identifier, operator: &str, expected: &str, actual: &str) -> Self {
        let mut items = subject_header(identifier);
        items.push(Box::new(Literal::indented(
            format!(
                "with value {} {} {}",
                Comment::new(actual),
                comparison_phrase(operator),
                Comment::new(expected)
            ),
            1,
        )));
        push_tail(&mut items, operator, expected, actual);
        Self {
            block: RenderableCollection::new(items),
        }
    }
}

/// Plain subject compared against the value of an identified element.
pub struct ScalarToElementalComparisonSummary {
    block: RenderableCollection,
}

impl ScalarToElementalComparisonSummary {
    pub fn new(value: &Identifier, operator: &str, expected: &str, actual: &str) -> Self {
        let mut items: Vec<Box<dyn Renderable>> = Vec::new();
        items.push(Box::new(Literal::new(format!(
            "* {} {} the value of {}",
            Comment::new(actual),
            comparison_phrase(operator),
            identified_by(value)
        ))));
        push_identifier_detail(&mut items, value);
        items.push(Box::new(Literal::indented(
            format!("with value {}", Comment::new(expected)),
            1,
        )));
        push_tail(&mut items, operator, expected, actual);
        Self {
            block: RenderableCollection::new(items),
        }
    }
}

/// Identified subject compared against the value of another identified
/// element.
pub struct ElementalToElementalComparisonSummary {
    block: RenderableCollection,
}

impl ElementalToElementalComparisonSummary {
    pub fn new(
        identifier: &Identifier,
        value: &Identifier,
        operator: &str,
        expected: &str,
        actual: &str,
    ) -> Self {
        let mut value_items: Vec<Box<dyn Renderable>> = Vec::new();
        value_items.push(Box::new(Literal::new(format!(
            "with value {} {} {} {}",
            Comment::new(actual),
            comparison_phrase(operator),
            value_connector(operator),
            identified_by(value)
        ))));
        push_identifier_detail(&mut value_items, value);
        value_items.push(Box::new(Literal::indented(
            format!("with value {}", Comment::new(expected)),
            1,
        )));

        let mut items = subject_header(identifier);
        items.push(Box::new(RenderableCollection::indented(value_items, 1)));
        push_tail(&mut items, operator, expected, actual);
        Self {
            block: RenderableCollection::new(items),
        }
    }
}

/// Two plain values; the report is the tail alone.
pub struct ScalarToScalarComparisonSummary {
    block: RenderableCollection,
}

impl ScalarToScalarComparisonSummary {
    pub fn new(operator: &str, expected: &str, actual: &str) -> Self {
        Self {
            block: RenderableCollection::new(vec![Box::new(ScalarTail::new(
                operator, expected, actual,
            ))]),
        }
    }
}

/// Value of an identified element that is not a valid regular expression.
pub struct ElementalIsRegExpSummary {
    block: RenderableCollection,
}

impl ElementalIsRegExpSummary {
    pub fn new(identifier: &Identifier, regexp: &str) -> Self {
        let mut items: Vec<Box<dyn Renderable>> = Vec::new();
        items.push(Box::new(Literal::new(format!(
            "* The value of {}",
            identified_by(identifier)
        ))));
        push_identifier_detail(&mut items, identifier);
        items.push(Box::new(Literal::indented(INVALID_REGEXP_OUTCOME, 1)));
        items.push(Box::new(Literal::blank()));
        items.push(Box::new(ScalarIsRegExpSummary::new(regexp)));
        Self {
            block: RenderableCollection::new(items),
        }
    }
}

/// Plain value that is not a valid regular expression.
pub struct ScalarIsRegExpSummary {
    block: RenderableCollection,
}

impl ScalarIsRegExpSummary {
    pub fn new(regexp: &str) -> Self {
        let line = format!("* {} {}", Comment::new(regexp), INVALID_REGEXP_OUTCOME);
        Self {
            block: RenderableCollection::new(vec![Box::new(Literal::new(line))]),
        }
    }
}

fn comparison_phrase(operator: &str) -> &'static str {
    operator::outcome_phrase(operator, OutcomeContext::Comparison)
}

/// Regular expression containment of an element's value reads "within the
/// value of".
fn value_connector(operator: &str) -> &'static str {
    if operator == operator::MATCHES {
        "within the value of"
    } else {
        "the value of"
    }
}

/// `element <comment>$".selector"</comment> identified by:`
fn identified_by(identifier: &Identifier) -> String {
    format!(
        "{} {} identified by:",
        identifier.type_label(),
        Comment::new(identifier.to_string())
    )
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Header line plus property and ancestor blocks for an identified subject.
fn subject_header(identifier: &Identifier) -> Vec<Box<dyn Renderable>> {
    let mut items: Vec<Box<dyn Renderable>> = Vec::new();
    items.push(Box::new(Literal::new(format!(
        "* {}",
        capitalize(&identified_by(identifier))
    ))));
    push_identifier_detail(&mut items, identifier);
    items
}

fn push_identifier_detail(items: &mut Vec<Box<dyn Renderable>>, identifier: &Identifier) {
    items.push(Box::new(Indented::new(
        IdentifierProperties::new(identifier),
        1,
    )));
    if let Some(hierarchy) = AncestorHierarchy::new(identifier) {
        items.push(Box::new(Indented::new(hierarchy, 1)));
    }
}

fn push_tail(items: &mut Vec<Box<dyn Renderable>>, operator: &str, expected: &str, actual: &str) {
    items.push(Box::new(Literal::blank()));
    items.push(Box::new(ScalarTail::new(operator, expected, actual)));
}
