mod fields;
mod parse;
mod serve;
mod stocks;

use screener_core::{Dataset, LoadReport, SkipReason, Stock};
use serde::Serialize;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub use parse::ParsedQuery;

/// Typed payload produced by a command.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CommandData {
    Stocks(Vec<Stock>),
    Parsed(ParsedQuery),
    Fields(Vec<&'static str>),
}

pub struct CommandResult {
    pub data: CommandData,
    pub warnings: Vec<String>,
}

impl CommandResult {
    pub fn ok(data: CommandData) -> Self {
        Self {
            data,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }
}

/// Run the selected command. `serve` produces no output and returns `None`.
pub async fn run(cli: &Cli) -> Result<Option<CommandResult>, CliError> {
    let result = match &cli.command {
        Command::Serve(args) => {
            serve::run(args, &cli.dataset).await?;
            return Ok(None);
        }
        Command::Stocks => stocks::list(&Dataset::from_path(&cli.dataset)?),
        Command::Filter(args) => stocks::filter(&Dataset::from_path(&cli.dataset)?, &args.query),
        Command::Parse(args) => parse::run(&args.query),
        Command::Fields => fields::run(),
    };
    Ok(Some(result))
}

fn load_warnings(report: &LoadReport) -> Vec<String> {
    report
        .skipped
        .iter()
        .map(|skipped| match &skipped.reason {
            SkipReason::TooFewColumns { found } => {
                format!("skipped dataset row {}: only {found} columns", skipped.row)
            }
            SkipReason::InvalidMarketCap { value } => format!(
                "skipped dataset row {}: invalid market capitalization '{value}'",
                skipped.row
            ),
        })
        .collect()
}
