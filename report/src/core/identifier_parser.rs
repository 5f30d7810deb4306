//! Resolution of identifier source text into [`Identifier`] values.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::identifier::Identifier;

/// Resolves assertion operands into DOM identifiers.
///
/// Returns `None` for anything that is not a DOM identifier expression: quoted
/// literals and page, environment, data or browser references are scalars.
pub trait IdentifierParser {
    fn parse(&self, source: &str) -> Option<Identifier>;
}

static ELEMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\$"((?:[^"\\]|\\.)+)"(?::(-?\d+|first|last))?"#)
        .expect("element identifier pattern should be valid")
});

static DESCENDANT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*>>\s*").expect("descendant separator pattern should be valid")
});

static ATTRIBUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\.([A-Za-z_][A-Za-z0-9_:-]*)$").expect("attribute pattern should be valid")
});

/// Parser for the DSL's DOM identifier syntax.
///
/// - `$".selector"` or `$"//xpath"`
/// - `$".selector":2`, `:first`, `:last`
/// - `$".parent" >> $".child"`
/// - `$".selector".attribute_name`
#[derive(Debug, Clone, Copy, Default)]
pub struct DomIdentifierParser;

impl IdentifierParser for DomIdentifierParser {
    fn parse(&self, source: &str) -> Option<Identifier> {
        parse_identifier(source)
    }
}

/// Parse `source` as a DOM identifier, outermost ancestor first.
pub fn parse_identifier(source: &str) -> Option<Identifier> {
    let mut rest = source.trim();
    let mut segments: Vec<(String, Option<i64>)> = Vec::new();
    let mut attribute_name = None;

    loop {
        let caps = ELEMENT_RE.captures(rest)?;
        let locator = unescape_locator(caps.get(1)?.as_str());
        let position = match caps.get(2) {
            Some(raw) => Some(parse_position(raw.as_str())?),
            None => None,
        };
        segments.push((locator, position));
        rest = &rest[caps.get(0)?.end()..];

        if rest.is_empty() {
            break;
        }
        if let Some(separator) = DESCENDANT_RE.find(rest) {
            rest = &rest[separator.end()..];
            continue;
        }
        let caps = ATTRIBUTE_RE.captures(rest)?;
        attribute_name = Some(caps.get(1)?.as_str().to_string());
        break;
    }

    let mut identifier: Option<Identifier> = None;
    for (locator, position) in segments {
        let mut segment = Identifier::element(locator);
        segment.ordinal_position = position;
        segment.parent = identifier.map(Box::new);
        identifier = Some(segment);
    }

    let mut identifier = identifier?;
    identifier.attribute_name = attribute_name;
    Some(identifier)
}

fn parse_position(raw: &str) -> Option<i64> {
    match raw {
        "first" => Some(1),
        "last" => Some(-1),
        other => other.parse().ok(),
    }
}

fn unescape_locator(raw: &str) -> String {
    raw.replace("\\\"", "\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identifier::LocatorKind;

    #[test]
    fn parses_css_element() {
        let identifier = parse_identifier(r#"$".selector""#).expect("identifier");
        assert_eq!(identifier, Identifier::element(".selector"));
        assert_eq!(identifier.kind, LocatorKind::Css);
    }

    #[test]
    fn parses_xpath_element() {
        let identifier = parse_identifier(r#"$"//h1[@id='title']""#).expect("identifier");
        assert_eq!(identifier.kind, LocatorKind::XPath);
        assert_eq!(identifier.locator, "//h1[@id='title']");
    }

    #[test]
    fn parses_positions() {
        let second = parse_identifier(r#"$".item":2"#).expect("identifier");
        assert_eq!(second.ordinal_position, Some(2));
        let first = parse_identifier(r#"$".item":first"#).expect("identifier");
        assert_eq!(first.ordinal_position, Some(1));
        let last = parse_identifier(r#"$".item":last"#).expect("identifier");
        assert_eq!(last.ordinal_position, Some(-1));
        let negative = parse_identifier(r#"$".item":-3"#).expect("identifier");
        assert_eq!(negative.ordinal_position, Some(-3));
    }

    #[test]
    fn parses_attribute() {
        let identifier = parse_identifier(r#"$".link".href"#).expect("identifier");
        assert_eq!(identifier, Identifier::attribute(".link", "href"));
    }

    #[test]
    fn parses_positioned_attribute() {
        let identifier = parse_identifier(r#"$"a":3.data-id"#).expect("identifier");
        assert_eq!(identifier.ordinal_position, Some(3));
        assert_eq!(identifier.attribute_name.as_deref(), Some("data-id"));
    }

    #[test]
    fn parses_descendant_chain() {
        let identifier =
            parse_identifier(r#"$".grandparent" >> $".parent":2 >> $".child".title"#)
                .expect("identifier");
        let expected = Identifier::attribute(".child", "title").with_parent(
            Identifier::element(".parent")
                .with_position(2)
                .with_parent(Identifier::element(".grandparent")),
        );
        assert_eq!(identifier, expected);
    }

    #[test]
    fn unescapes_quotes() {
        let identifier = parse_identifier(r#"$"input[name=\"q\"]""#).expect("identifier");
        assert_eq!(identifier.locator, r#"input[name="q"]"#);
    }

    #[test]
    fn display_round_trips_through_parser() {
        let source = r#"$"//main" >> $".item":2.href"#;
        let identifier = parse_identifier(source).expect("identifier");
        assert_eq!(identifier.to_string(), source);
    }

    #[test]
    fn scalars_are_not_identifiers() {
        for source in [
            r#""literal value""#,
            "$page.url",
            "$env.KEY",
            "$data.username",
            "$browser.size",
            "",
            r#"$"""#,
            r#"$".a":second"#,
            r#"$".a" trailing"#,
            r#"$".a".href.extra"#,
        ] {
            assert_eq!(parse_identifier(source), None, "source: {source}");
        }
    }

    #[test]
    fn trait_object_delegates_to_parser() {
        let parser: &dyn IdentifierParser = &DomIdentifierParser;
        assert!(parser.parse(r#"$".a""#).is_some());
        assert!(parser.parse("$page.title").is_none());
    }
}
