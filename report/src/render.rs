//! Report rendering for `report render`, `report explain` and
//! `report identifier`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::assertion::Assertion;
use crate::core::dispatch::summarize;
use crate::core::identifier_parser::IdentifierParser;
use crate::core::identifier_render::{AncestorHierarchy, IdentifierProperties};
use crate::core::markup::{Comment, Markup};
use crate::core::renderable::{Indented, Literal, Renderable, RenderableCollection};
use crate::io::failures::{FailureRecord, load_failures};

/// One rendered failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFailure {
    pub text: String,
    /// False when no diagnostic was available and only the statement is shown.
    pub explained: bool,
}

/// Rendered failure file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    /// Markup text for all failures, separated by blank lines.
    pub text: String,
    pub explained: usize,
    pub unexplained: usize,
}

/// Render one failure: the statement line, then its summary one level deeper.
///
/// Without `show_statement` the summary stands alone. Failures without a
/// diagnostic always fall back to the statement.
pub fn render_failure(
    record: &FailureRecord,
    parser: &dyn IdentifierParser,
    show_statement: bool,
) -> RenderedFailure {
    let summary = summarize(&record.assertion, &record.expected, &record.actual, parser);
    let explained = summary.is_some();
    if !explained {
        debug!(
            statement = record.statement.as_str(),
            "no diagnostic available"
        );
    }

    let mut items: Vec<Box<dyn Renderable>> = Vec::new();
    if show_statement || !explained {
        items.push(Box::new(statement_line(&record.statement)));
    }
    if let Some(summary) = summary {
        let depth = usize::from(show_statement);
        items.push(Box::new(Indented::new(summary, depth)));
    }

    RenderedFailure {
        text: RenderableCollection::new(items).render(),
        explained,
    }
}

/// Render every failure, blank line between each.
///
/// A file without failures renders as a single success line.
pub fn render_failures(
    records: &[FailureRecord],
    parser: &dyn IdentifierParser,
    show_statement: bool,
) -> RenderedReport {
    if records.is_empty() {
        return RenderedReport {
            text: success_line(),
            explained: 0,
            unexplained: 0,
        };
    }
    let mut blocks = Vec::with_capacity(records.len());
    let mut explained = 0;
    for record in records {
        let rendered = render_failure(record, parser, show_statement);
        if rendered.explained {
            explained += 1;
        }
        blocks.push(rendered.text);
    }
    RenderedReport {
        text: blocks.join("\n\n"),
        explained,
        unexplained: records.len() - explained,
    }
}

/// Load a failure file and render it.
pub fn render_file(
    path: &Path,
    parser: &dyn IdentifierParser,
    show_statement: bool,
) -> Result<RenderedReport> {
    let records = load_failures(path).context("load failures for rendering")?;
    let report = render_failures(&records, parser, show_statement);
    info!(
        failures = records.len(),
        explained = report.explained,
        unexplained = report.unexplained,
        "rendered failures"
    );
    Ok(report)
}

/// Render a single assertion's summary, or `None` if no diagnostic applies.
pub fn explain(
    assertion: &Assertion,
    expected: &str,
    actual: &str,
    parser: &dyn IdentifierParser,
) -> Option<String> {
    summarize(assertion, expected, actual, parser).map(|summary| summary.render())
}

/// Describe an identifier: header, properties and ancestor hierarchy.
///
/// Returns `None` when `source` is not an identifier.
pub fn describe_identifier(source: &str, parser: &dyn IdentifierParser) -> Option<String> {
    let identifier = parser.parse(source)?;
    let label = if identifier.is_attribute() {
        "Attribute"
    } else {
        "Element"
    };

    let mut items: Vec<Box<dyn Renderable>> = Vec::new();
    items.push(Box::new(Literal::new(format!(
        "{label} {}",
        Comment::new(identifier.to_string())
    ))));
    items.push(Box::new(IdentifierProperties::new(&identifier)));
    if let Some(hierarchy) = AncestorHierarchy::new(&identifier) {
        items.push(Box::new(hierarchy));
    }
    Some(RenderableCollection::new(items).render())
}

fn success_line() -> String {
    format!(
        "{} {}",
        Markup::Success.decorate("✓"),
        Markup::Success.decorate("no failures")
    )
}

fn statement_line(statement: &str) -> Literal {
    Literal::new(format!(
        "{} {}",
        Markup::Failure.decorate("✗"),
        Markup::Failure.decorate(statement)
    ))
}
