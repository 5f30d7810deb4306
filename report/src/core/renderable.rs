//! Renderable text primitives.
//!
//! Reports are trees of [`Renderable`] nodes built bottom-up and rendered
//! once. Leaves are literal lines and property lines; inner nodes are ordered
//! collections carrying an indent depth fixed at construction.

use crate::core::markup::Comment;

/// One level of indentation.
pub const INDENT_UNIT: &str = "  ";

pub trait Renderable {
    /// Render to text. Lines are separated by `\n`, with no trailing newline.
    fn render(&self) -> String;
}

/// Prefix every non-empty line of `content` with `depth` indent units.
///
/// Empty lines stay empty so blank separators carry no trailing whitespace.
pub fn indent(content: &str, depth: usize) -> String {
    if depth == 0 {
        return content.to_string();
    }
    let prefix = INDENT_UNIT.repeat(depth);
    content
        .split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Literal text at an indent depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    content: String,
    indent: usize,
}

impl Literal {
    pub fn new(content: impl Into<String>) -> Self {
        Self::indented(content, 0)
    }

    pub fn indented(content: impl Into<String>, indent: usize) -> Self {
        Self {
            content: content.into(),
            indent,
        }
    }

    /// Empty line separating report sections.
    pub fn blank() -> Self {
        Self::new("")
    }
}

impl Renderable for Literal {
    fn render(&self) -> String {
        indent(&self.content, self.indent)
    }
}

/// `- key: <comment>value</comment>` line, one indent level deep by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    key: String,
    value: Comment,
    indent: usize,
}

impl Property {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Comment::new(value),
            indent: 1,
        }
    }
}

impl Renderable for Property {
    fn render(&self) -> String {
        indent(&format!("- {}: {}", self.key, self.value), self.indent)
    }
}

impl Renderable for Comment {
    fn render(&self) -> String {
        self.to_string()
    }
}

/// Ordered children joined by newlines, sharing one indent depth.
pub struct RenderableCollection {
    items: Vec<Box<dyn Renderable>>,
    indent: usize,
}

impl RenderableCollection {
    pub fn new(items: Vec<Box<dyn Renderable>>) -> Self {
        Self::indented(items, 0)
    }

    pub fn indented(items: Vec<Box<dyn Renderable>>, indent: usize) -> Self {
        Self { items, indent }
    }
}

impl Renderable for RenderableCollection {
    fn render(&self) -> String {
        let joined = self
            .items
            .iter()
            .map(|item| item.render())
            .collect::<Vec<_>>()
            .join("\n");
        indent(&joined, self.indent)
    }
}

/// Re-indents an arbitrary sub-tree.
pub struct Indented {
    inner: Box<dyn Renderable>,
    indent: usize,
}

impl Indented {
    pub fn new(inner: impl Renderable + 'static, indent: usize) -> Self {
        Self {
            inner: Box::new(inner),
            indent,
        }
    }
}

impl Renderable for Indented {
    fn render(&self) -> String {
        indent(&self.inner.render(), self.indent)
    }
}
