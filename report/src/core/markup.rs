//! Markup tags consumed by the terminal pass.
//!
//! Decorated text is wrapped in a `<tag>`...`</tag>` pair. The core only
//! produces tags; turning them into escape sequences happens in
//! [`crate::terminal`]. A `<` inside decorated text is written as `\<` so page
//! values can never open or close a tag.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    Comment,
    Failure,
    Success,
}

impl Markup {
    pub const ALL: [Markup; 3] = [Markup::Comment, Markup::Failure, Markup::Success];

    pub fn tag(self) -> &'static str {
        match self {
            Markup::Comment => "comment",
            Markup::Failure => "failure",
            Markup::Success => "success",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|markup| markup.tag() == tag)
    }

    pub fn decorate(self, text: &str) -> String {
        let tag = self.tag();
        format!("<{tag}>{}</{tag}>", escape(text))
    }
}

/// Escape `<` so the terminal pass writes it literally.
pub fn escape(text: &str) -> String {
    text.replace('<', "\\<")
}

/// Comment-decorated text, usable directly in `format!` arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment(String);

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Markup::Comment.decorate(&self.0))
    }
}
