//! Property and ancestor blocks for a single identifier.

use crate::core::identifier::Identifier;
use crate::core::renderable::{Literal, Property, Renderable, RenderableCollection};

/// Locator, optional attribute name and ordinal position of one identifier,
/// ignoring its ancestors.
pub struct IdentifierProperties {
    block: RenderableCollection,
}

impl IdentifierProperties {
    pub fn new(identifier: &Identifier) -> Self {
        let mut items: Vec<Box<dyn Renderable>> = Vec::with_capacity(3);
        items.push(Box::new(Property::new(
            identifier.kind.label(),
            identifier.locator.as_str(),
        )));
        if let Some(attribute_name) = &identifier.attribute_name {
            items.push(Box::new(Property::new(
                "attribute name",
                attribute_name.as_str(),
            )));
        }
        items.push(Box::new(Property::new(
            "ordinal position",
            identifier.position_or_default().to_string(),
        )));
        Self {
            block: RenderableCollection::new(items),
        }
    }
}

impl Renderable for IdentifierProperties {
    fn render(&self) -> String {
        self.block.render()
    }
}

/// `with parent:` blocks for every ancestor, nearest first.
pub struct AncestorHierarchy {
    block: RenderableCollection,
}

impl AncestorHierarchy {
    /// Returns `None` for identifiers without a parent so callers can omit the
    /// block entirely.
    pub fn new(identifier: &Identifier) -> Option<Self> {
        let mut items: Vec<Box<dyn Renderable>> = Vec::new();
        for ancestor in identifier.ancestors() {
            items.push(Box::new(Literal::new("with parent:")));
            items.push(Box::new(IdentifierProperties::new(ancestor)));
        }
        if items.is_empty() {
            return None;
        }
        Some(Self {
            block: RenderableCollection::new(items),
        })
    }
}

impl Renderable for AncestorHierarchy {
    fn render(&self) -> String {
        self.block.render()
    }
}
