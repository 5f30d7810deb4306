//! Assertion operators and their failure outcome phrases.

pub const EXISTS: &str = "exists";
pub const NOT_EXISTS: &str = "not-exists";
pub const IS: &str = "is";
pub const IS_NOT: &str = "is-not";
pub const INCLUDES: &str = "includes";
pub const EXCLUDES: &str = "excludes";
pub const MATCHES: &str = "matches";
pub const IS_REGEXP: &str = "is-regexp";

/// Fixed outcome for `is-regexp` failures.
pub const INVALID_REGEXP_OUTCOME: &str = "is not a valid regular expression";

const EXISTENCE_OUTCOMES: &[(&str, &str)] =
    &[(EXISTS, "does not exist"), (NOT_EXISTS, "does exist")];

const COMPARISON_OUTCOMES: &[(&str, &str)] = &[
    (IS, "is not equal to"),
    (IS_NOT, "is equal to"),
    (INCLUDES, "does not include"),
    (EXCLUDES, "does not exclude"),
    (MATCHES, "does not match regular expression"),
];

/// Which outcome table an operator is looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeContext {
    Existence,
    Comparison,
}

/// Coarse operator classification used by the summary dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorCategory {
    Existence,
    Regexp,
    Comparison,
}

/// Classify `operator`. Anything that is neither an existence operator nor
/// `is-regexp` is treated as a comparison.
pub fn category(operator: &str) -> OperatorCategory {
    match operator {
        EXISTS | NOT_EXISTS => OperatorCategory::Existence,
        IS_REGEXP => OperatorCategory::Regexp,
        _ => OperatorCategory::Comparison,
    }
}

/// Natural-language failure phrase for `operator`.
///
/// Unknown operators yield an empty phrase.
pub fn outcome_phrase(operator: &str, context: OutcomeContext) -> &'static str {
    let table = match context {
        OutcomeContext::Existence => EXISTENCE_OUTCOMES,
        OutcomeContext::Comparison => COMPARISON_OUTCOMES,
    };
    match table.iter().find(|(candidate, _)| *candidate == operator) {
        Some((_, phrase)) => *phrase,
        None => {
            tracing::debug!(operator, ?context, "no outcome phrase for operator");
            ""
        }
    }
}
