//! Markup-to-terminal pass.
//!
//! Converts `<comment>`, `<failure>` and `<success>` tags into color spans on
//! any [`WriteColor`]. Writers without color support drop the tags. Unknown
//! or unbalanced tags are written as literal text, and an escaped `\<` is
//! written as `<`.

use std::io::{self, Write};
use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;
use termcolor::{ColorSpec, WriteColor};

use crate::core::markup::Markup;
use crate::io::config::StyleConfig;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\<|<(/?)([a-z]+)>").expect("markup tag pattern should be valid")
});

/// Resolved color specs per markup tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalStyles {
    comment: ColorSpec,
    failure: ColorSpec,
    success: ColorSpec,
}

impl TerminalStyles {
    pub fn from_config(styles: &StyleConfig) -> Result<Self> {
        let mut comment = ColorSpec::new();
        comment.set_fg(Some(styles.comment_color()?));
        let mut failure = ColorSpec::new();
        failure.set_fg(Some(styles.failure_color()?)).set_bold(true);
        let mut success = ColorSpec::new();
        success.set_fg(Some(styles.success_color()?));
        Ok(Self {
            comment,
            failure,
            success,
        })
    }

    pub fn spec(&self, markup: Markup) -> &ColorSpec {
        match markup {
            Markup::Comment => &self.comment,
            Markup::Failure => &self.failure,
            Markup::Success => &self.success,
        }
    }
}

impl Default for TerminalStyles {
    fn default() -> Self {
        Self::from_config(&StyleConfig::default()).unwrap_or_else(|_| Self {
            comment: ColorSpec::new(),
            failure: ColorSpec::new(),
            success: ColorSpec::new(),
        })
    }
}

/// Write `text` to `writer`, turning markup tags into color changes.
pub fn write_markup(
    writer: &mut impl WriteColor,
    text: &str,
    styles: &TerminalStyles,
) -> io::Result<()> {
    let mut open: Vec<Markup> = Vec::new();
    let mut cursor = 0;

    for caps in TAG_RE.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let (Some(slash), Some(name)) = (caps.get(1), caps.get(2)) else {
            writer.write_all(text[cursor..whole.start()].as_bytes())?;
            writer.write_all(b"<")?;
            cursor = whole.end();
            continue;
        };
        let Some(markup) = Markup::from_tag(name.as_str()) else {
            continue;
        };
        let closing = !slash.as_str().is_empty();
        if closing && open.last() != Some(&markup) {
            continue;
        }

        writer.write_all(text[cursor..whole.start()].as_bytes())?;
        cursor = whole.end();

        if closing {
            open.pop();
            writer.reset()?;
            if let Some(outer) = open.last() {
                writer.set_color(styles.spec(*outer))?;
            }
        } else {
            open.push(markup);
            writer.set_color(styles.spec(markup))?;
        }
    }

    writer.write_all(text[cursor..].as_bytes())?;
    writer.reset()?;
    Ok(())
}

/// Write `text` followed by a newline.
pub fn writeln_markup(
    writer: &mut impl WriteColor,
    text: &str,
    styles: &TerminalStyles,
) -> io::Result<()> {
    write_markup(writer, text, styles)?;
    writeln!(writer)
}
