//! Report configuration stored in `report.toml`.

use std::fs;
use std::io::IsTerminal;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use termcolor::{Color, ColorChoice};

/// When to emit terminal colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn choice(self) -> ColorChoice {
        match self {
            ColorMode::Auto if std::io::stdout().is_terminal() => ColorChoice::Auto,
            ColorMode::Auto => ColorChoice::Never,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

/// Report configuration (TOML).
///
/// Missing fields default to sensible values; a missing file is the same as an
/// empty one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    pub color: ColorMode,

    /// Print the raw failed statement above each summary.
    pub show_statement: bool,

    pub styles: StyleConfig,
}

/// Terminal color names per markup tag (`black`, `blue`, `green`, `red`,
/// `cyan`, `magenta`, `yellow`, `white`, or an ANSI number).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StyleConfig {
    pub comment: String,
    pub failure: String,
    pub success: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            comment: "yellow".to_string(),
            failure: "red".to_string(),
            success: "green".to_string(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            show_statement: true,
            styles: StyleConfig::default(),
        }
    }
}

impl StyleConfig {
    pub fn comment_color(&self) -> Result<Color> {
        parse_color("styles.comment", &self.comment)
    }

    pub fn failure_color(&self) -> Result<Color> {
        parse_color("styles.failure", &self.failure)
    }

    pub fn success_color(&self) -> Result<Color> {
        parse_color("styles.success", &self.success)
    }
}

impl ReportConfig {
    pub fn validate(&self) -> Result<()> {
        self.styles.comment_color()?;
        self.styles.failure_color()?;
        self.styles.success_color()?;
        Ok(())
    }
}

fn parse_color(field: &str, raw: &str) -> Result<Color> {
    raw.trim()
        .parse::<Color>()
        .map_err(|err| anyhow!("{field} must be a terminal color: {err}"))
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ReportConfig::default()`.
pub fn load_config(path: &Path) -> Result<ReportConfig> {
    if !path.exists() {
        let cfg = ReportConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ReportConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
