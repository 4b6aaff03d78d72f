//! Load-once, read-only stock dataset.
//!
//! The source is a CSV file with a header row followed by one row per stock:
//! the stock name, then one numeric column per [`Field`] in
//! [`Field::ALL`] order.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use csv::{ReaderBuilder, StringRecord};
use serde::Serialize;
use tracing::{info, warn};

use crate::domain::{Field, Stock};
use crate::filter;
use crate::query::{self, Query};
use crate::DatasetError;

const COLUMN_COUNT: usize = Field::ALL.len() + 1;

/// Why a data row was left out of the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    TooFewColumns { found: usize },
    InvalidMarketCap { value: String },
}

/// A data row that was skipped during load. `row` is 1-based and excludes
/// the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    pub row: usize,
    pub reason: SkipReason,
}

/// Summary of a dataset load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: Vec<SkippedRow>,
}

/// Immutable stock collection shared across requests.
///
/// Cloning is cheap: the records live behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Dataset {
    stocks: Arc<[Stock]>,
    report: LoadReport,
}

impl Dataset {
    pub fn from_stocks(stocks: Vec<Stock>) -> Self {
        let report = LoadReport {
            loaded: stocks.len(),
            skipped: Vec::new(),
        };
        Self {
            stocks: stocks.into(),
            report,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            loaded = dataset.report.loaded,
            skipped = dataset.report.skipped.len(),
            "stock dataset loaded"
        );
        Ok(dataset)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        if reader.headers()?.is_empty() {
            return Err(DatasetError::MissingHeader);
        }

        let mut stocks = Vec::new();
        let mut report = LoadReport::default();

        for (index, record) in reader.records().enumerate() {
            let row = index + 1;
            match parse_row(&record?) {
                Ok(stock) => stocks.push(stock),
                Err(reason) => {
                    warn!(row, ?reason, "skipping dataset row");
                    report.skipped.push(SkippedRow { row, reason });
                }
            }
        }

        report.loaded = stocks.len();
        Ok(Self {
            stocks: stocks.into(),
            report,
        })
    }

    pub fn stocks(&self) -> &[Stock] {
        &self.stocks
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }

    pub fn filter(&self, query: &Query) -> Vec<&Stock> {
        filter::filter(&self.stocks, query)
    }

    /// Parse `query_text` and filter with it.
    pub fn screen(&self, query_text: &str) -> Vec<&Stock> {
        self.filter(&query::parse(query_text))
    }
}

/// Market capitalization must parse; any other unparseable metric reads as
/// zero.
fn parse_row(record: &StringRecord) -> Result<Stock, SkipReason> {
    if record.len() < COLUMN_COUNT {
        return Err(SkipReason::TooFewColumns {
            found: record.len(),
        });
    }

    let cell = move |field: Field| record.get(field.index() + 1).unwrap_or_default().trim();

    let market_cap_raw = cell(Field::MarketCap);
    let market_cap = market_cap_raw
        .parse::<f64>()
        .map_err(|_| SkipReason::InvalidMarketCap {
            value: market_cap_raw.to_owned(),
        })?;

    let mut stock =
        Stock::new(record.get(0).unwrap_or_default()).with(Field::MarketCap, market_cap);
    for field in Field::ALL.into_iter().skip(1) {
        stock = stock.with(field, cell(field).parse::<f64>().unwrap_or(0.0));
    }
    Ok(stock)
}
