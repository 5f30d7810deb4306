//! End-to-end summary scenarios through the public API: identifier parsing,
//! dispatch and rendering of every assertion shape.

use report::core::assertion::Assertion;
use report::core::dispatch::{Summary, summarize};
use report::core::identifier::Identifier;
use report::core::identifier_parser::DomIdentifierParser;
use report::core::identifier_render::AncestorHierarchy;
use report::core::renderable::Renderable;
use report::core::summary::{
    ElementalToScalarComparisonSummary, ExistenceSummary, ScalarToScalarComparisonSummary,
};

fn summary(assertion: &Assertion) -> Summary {
    summarize(assertion, "expected", "actual", &DomIdentifierParser).expect("summary")
}

#[test]
fn existence_scenario() {
    let rendered = ExistenceSummary::new(&Identifier::element(".selector"), "exists").render();
    assert_eq!(
        rendered,
        "* Element <comment>$\".selector\"</comment> identified by:\n    - CSS selector: <comment>.selector</comment>\n    - ordinal position: <comment>1</comment>\n  does not exist"
    );
}

#[test]
fn scalar_to_scalar_scenario() {
    let rendered = ScalarToScalarComparisonSummary::new("is", "expected", "actual").render();
    assert_eq!(
        rendered,
        "* <comment>actual</comment> is not equal to <comment>expected</comment>"
    );
}

#[test]
fn ancestor_hierarchy_scenario() {
    let identifier = Identifier::element(".child").with_parent(Identifier::element(".parent"));
    let rendered = AncestorHierarchy::new(&identifier)
        .expect("hierarchy")
        .render();
    assert_eq!(
        rendered,
        "with parent:\n  - CSS selector: <comment>.parent</comment>\n  - ordinal position: <comment>1</comment>"
    );
}

#[test]
fn attribute_comparison_scenario() {
    let rendered = ElementalToScalarComparisonSummary::new(
        &Identifier::attribute(".selector", "attr"),
        "is",
        "expected",
        "actual",
    )
    .render();
    assert!(rendered.contains("attribute name: <comment>attr</comment>"));
    assert!(rendered.ends_with(
        "\n\n* <comment>actual</comment> is not equal to <comment>expected</comment>"
    ));
}

#[test]
fn every_shape_dispatches_to_its_variant() {
    let element = r#"$".selector""#;
    let other = r#"$".value""#;
    let scalar = r#""value""#;

    assert!(matches!(
        summary(&Assertion::existence(element, "exists")),
        Summary::Existence(_)
    ));
    assert!(matches!(
        summary(&Assertion::existence(element, "not-exists")),
        Summary::Existence(_)
    ));
    assert!(matches!(
        summary(&Assertion::existence(element, "is-regexp")),
        Summary::ElementalIsRegExp(_)
    ));
    assert!(matches!(
        summary(&Assertion::existence("$data.pattern", "is-regexp")),
        Summary::ScalarIsRegExp(_)
    ));
    for operator in ["is", "is-not", "includes", "excludes", "matches"] {
        assert!(matches!(
            summary(&Assertion::comparison(element, operator, scalar)),
            Summary::ElementalToScalar(_)
        ));
        assert!(matches!(
            summary(&Assertion::comparison("$page.title", operator, other)),
            Summary::ScalarToElemental(_)
        ));
        assert!(matches!(
            summary(&Assertion::comparison(element, operator, other)),
            Summary::ElementalToElemental(_)
        ));
        assert!(matches!(
            summary(&Assertion::comparison("$page.title", operator, scalar)),
            Summary::ScalarToScalar(_)
        ));
    }
}

#[test]
fn rendering_twice_is_identical() {
    let assertion = Assertion::comparison(
        r#"$"form" >> $".field":2.value"#,
        "excludes",
        r#"$"//footer" >> $"p""#,
    );
    let built = summary(&assertion);
    assert_eq!(built.render(), built.render());
}

#[test]
fn deep_chains_render_every_ancestor_in_order() {
    let assertion = Assertion::existence(r#"$"html" >> $"body" >> $"main" >> $".card""#, "exists");
    let rendered = summary(&assertion).render();
    let parents: Vec<&str> = rendered
        .lines()
        .filter(|line| line.trim_start().starts_with("- CSS selector"))
        .collect();
    assert_eq!(
        parents,
        vec![
            "    - CSS selector: <comment>.card</comment>",
            "    - CSS selector: <comment>main</comment>",
            "    - CSS selector: <comment>body</comment>",
            "    - CSS selector: <comment>html</comment>",
        ]
    );
    assert_eq!(rendered.matches("  with parent:").count(), 3);
    assert!(rendered.ends_with("  does not exist"));
}
