use std::io::{self, Write};

use screener_core::{Field, Stock};

use crate::cli::OutputFormat;
use crate::commands::{CommandData, CommandResult};
use crate::error::CliError;

pub fn render(
    result: &CommandResult,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    for warning in &result.warnings {
        eprintln!("warning: {warning}");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(&result.data)?
            } else {
                serde_json::to_string(&result.data)?
            };
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Ndjson => render_ndjson(&mut out, &result.data)?,
        OutputFormat::Table => render_table(&mut out, &result.data)?,
    }

    Ok(())
}

fn render_ndjson(out: &mut impl Write, data: &CommandData) -> Result<(), CliError> {
    match data {
        CommandData::Stocks(stocks) => {
            for stock in stocks {
                writeln!(out, "{}", serde_json::to_string(stock)?)?;
            }
        }
        CommandData::Parsed(parsed) => {
            for condition in &parsed.conditions {
                writeln!(out, "{}", serde_json::to_string(condition)?)?;
            }
        }
        CommandData::Fields(fields) => {
            for field in fields {
                writeln!(out, "{}", serde_json::to_string(field)?)?;
            }
        }
    }
    Ok(())
}

fn render_table(out: &mut impl Write, data: &CommandData) -> Result<(), CliError> {
    match data {
        CommandData::Stocks(stocks) => write_stock_table(out, stocks)?,
        CommandData::Parsed(parsed) => {
            writeln!(out, "query  : {}", parsed.normalized)?;
            for condition in &parsed.conditions {
                let marker = if condition.known_field { "" } else { "  (unknown field)" };
                writeln!(
                    out,
                    "  - {} {} {}{marker}",
                    condition.field, condition.operator, condition.value
                )?;
            }
            if !parsed.dropped.is_empty() {
                writeln!(out, "dropped:")?;
                for dropped in &parsed.dropped {
                    writeln!(out, "  - '{}' ({:?})", dropped.segment, dropped.reason)?;
                }
            }
        }
        CommandData::Fields(fields) => {
            for field in fields {
                writeln!(out, "{field}")?;
            }
        }
    }
    Ok(())
}

fn write_stock_table(out: &mut impl Write, stocks: &[Stock]) -> io::Result<()> {
    let mut header = vec![String::from("Stock Name")];
    header.extend(Field::ALL.iter().map(|field| field.as_str().to_owned()));

    let rows: Vec<Vec<String>> = stocks
        .iter()
        .map(|stock| {
            let mut row = vec![stock.name().to_owned()];
            row.extend(stock.metrics().map(|(_, value)| value.to_string()));
            row
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|column| {
            rows.iter()
                .map(|row| row[column].chars().count())
                .chain(std::iter::once(header[column].chars().count()))
                .max()
                .unwrap_or_default()
        })
        .collect();

    write_row(out, &header, &widths)?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

fn write_row(out: &mut impl Write, cells: &[String], widths: &[usize]) -> io::Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", line.trim_end())
}
