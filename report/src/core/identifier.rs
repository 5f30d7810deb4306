//! DOM identifier model.
//!
//! An [`Identifier`] describes how an element or attribute was located: a
//! locator (CSS selector or XPath expression), an optional attribute name, an
//! optional 1-based ordinal position, and an optional parent for descendant
//! lookups. Identifiers are immutable once built.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Upper bound on ancestor traversal depth.
///
/// Real chains are a handful of levels deep; anything beyond this is treated
/// as malformed and traversal stops.
pub const MAX_ANCESTOR_DEPTH: usize = 64;

/// Ordinal position shown when an identifier carries none.
pub const DEFAULT_ORDINAL_POSITION: i64 = 1;

/// How a locator string is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocatorKind {
    Css,
    XPath,
}

impl LocatorKind {
    /// Infer the kind from the locator text: XPath expressions start with
    /// `/` or `(/`, everything else is a CSS selector.
    pub fn detect(locator: &str) -> Self {
        if locator.starts_with('/') || locator.starts_with("(/") {
            LocatorKind::XPath
        } else {
            LocatorKind::Css
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LocatorKind::Css => "CSS selector",
            LocatorKind::XPath => "XPath expression",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub locator: String,
    pub kind: LocatorKind,
    pub attribute_name: Option<String>,
    pub ordinal_position: Option<i64>,
    pub parent: Option<Box<Identifier>>,
}

impl Identifier {
    /// Element identifier with the locator kind inferred from `locator`.
    pub fn element(locator: impl Into<String>) -> Self {
        let locator = locator.into();
        let kind = LocatorKind::detect(&locator);
        Self {
            locator,
            kind,
            attribute_name: None,
            ordinal_position: None,
            parent: None,
        }
    }

    /// Attribute identifier: an element identifier plus attribute name.
    pub fn attribute(locator: impl Into<String>, attribute_name: impl Into<String>) -> Self {
        Self::element(locator).with_attribute(attribute_name)
    }

    pub fn with_attribute(mut self, attribute_name: impl Into<String>) -> Self {
        self.attribute_name = Some(attribute_name.into());
        self
    }

    pub fn with_position(mut self, position: i64) -> Self {
        self.ordinal_position = Some(position);
        self
    }

    pub fn with_parent(mut self, parent: Identifier) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    pub fn is_attribute(&self) -> bool {
        self.attribute_name.is_some()
    }

    /// Lowercase noun used in summary text: `element` or `attribute`.
    pub fn type_label(&self) -> &'static str {
        if self.is_attribute() {
            "attribute"
        } else {
            "element"
        }
    }

    pub fn position_or_default(&self) -> i64 {
        self.ordinal_position.unwrap_or(DEFAULT_ORDINAL_POSITION)
    }

    /// Ancestors, nearest first, bounded by [`MAX_ANCESTOR_DEPTH`].
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors {
            next: self.parent.as_deref(),
            visited: 0,
        }
    }
}

/// Iterator over an identifier's parent chain.
pub struct Ancestors<'a> {
    next: Option<&'a Identifier>,
    visited: usize,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Identifier;

    fn next(&mut self) -> Option<Self::Item> {
        if self.visited >= MAX_ANCESTOR_DEPTH {
            return None;
        }
        let current = self.next?;
        self.visited += 1;
        self.next = current.parent.as_deref();
        Some(current)
    }
}

/// Serializes back to identifier source syntax, outermost ancestor first:
/// `$".parent" >> $".child":2.attr`.
impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chain: Vec<&Identifier> = self.ancestors().collect();
        chain.reverse();
        chain.push(self);

        for (i, segment) in chain.iter().enumerate() {
            if i > 0 {
                f.write_str(" >> ")?;
            }
            write!(f, "$\"{}\"", segment.locator.replace('"', "\\\""))?;
            if let Some(position) = segment.ordinal_position {
                write!(f, ":{position}")?;
            }
        }
        if let Some(attribute_name) = &self.attribute_name {
            write!(f, ".{attribute_name}")?;
        }
        Ok(())
    }
}
