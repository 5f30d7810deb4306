//! Failed DOM assertion explainer.
//!
//! Renders failure files (or single assertions) as indented, human-readable
//! summaries describing which element or attribute was examined and why the
//! assertion did not hold.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use termcolor::StandardStream;

use report::core::assertion::Assertion;
use report::core::identifier_parser::DomIdentifierParser;
use report::exit_codes;
use report::io::config::{ColorMode, ReportConfig, load_config};
use report::render::{describe_identifier, explain, render_file};
use report::terminal::{TerminalStyles, writeln_markup};

#[derive(Parser)]
#[command(
    name = "report",
    version,
    about = "Explain why DOM assertions failed"
)]
struct Cli {
    /// Path to the TOML config file.
    #[arg(long, global = true, default_value = "report.toml")]
    config: PathBuf,

    /// Override the configured color mode.
    #[arg(long, global = true, value_enum)]
    color: Option<ColorMode>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every failure in a JSON failure file.
    Render {
        /// Path to the failure file.
        file: PathBuf,
    },
    /// Render the summary for a single failed assertion.
    Explain {
        #[arg(long)]
        operator: String,
        /// Raw source of the asserted operand, e.g. `$".selector"`.
        #[arg(long)]
        subject: String,
        /// Raw source of the comparison operand.
        #[arg(long)]
        value: Option<String>,
        #[arg(long, default_value = "")]
        expected: String,
        #[arg(long, default_value = "")]
        actual: String,
    },
    /// Print an identifier's properties and ancestor hierarchy.
    Identifier {
        /// Identifier source, e.g. `$".parent" >> $".child".href`.
        source: String,
    },
}

fn main() {
    report::logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    let output = Output::new(&config, cli.color)?;
    let parser = DomIdentifierParser;

    match cli.command {
        Command::Render { file } => cmd_render(&output, &config, &file, &parser),
        Command::Explain {
            operator,
            subject,
            value,
            expected,
            actual,
        } => {
            let assertion = Assertion {
                operator,
                subject,
                value,
            };
            output.print_or_no_diagnostic(explain(&assertion, &expected, &actual, &parser))
        }
        Command::Identifier { source } => {
            output.print_or_no_diagnostic(describe_identifier(&source, &parser))
        }
    }
}

fn cmd_render(
    output: &Output,
    config: &ReportConfig,
    file: &Path,
    parser: &DomIdentifierParser,
) -> Result<i32> {
    let report = render_file(file, parser, config.show_statement)?;
    output.print(&report.text)?;
    Ok(exit_codes::OK)
}

/// Colored stdout writer.
struct Output {
    mode: ColorMode,
    styles: TerminalStyles,
}

impl Output {
    fn new(config: &ReportConfig, color_override: Option<ColorMode>) -> Result<Self> {
        Ok(Self {
            mode: color_override.unwrap_or(config.color),
            styles: TerminalStyles::from_config(&config.styles)?,
        })
    }

    fn print(&self, text: &str) -> Result<()> {
        let mut stdout = StandardStream::stdout(self.mode.choice());
        writeln_markup(&mut stdout, text, &self.styles).context("write to stdout")
    }

    fn print_or_no_diagnostic(&self, text: Option<String>) -> Result<i32> {
        match text {
            Some(text) => {
                self.print(&text)?;
                Ok(exit_codes::OK)
            }
            None => {
                eprintln!("no diagnostic available");
                Ok(exit_codes::NO_DIAGNOSTIC)
            }
        }
    }
}
