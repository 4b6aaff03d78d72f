use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Numeric attributes carried by every stock record.
///
/// The display names returned by [`Field::as_str`] are the single source of
/// truth for JSON keys, CSV column order, and query field resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "Market Capitalization")]
    MarketCap,
    #[serde(rename = "P/E Ratio")]
    PeRatio,
    #[serde(rename = "ROE")]
    Roe,
    #[serde(rename = "Debt/Equity Ratio")]
    DebtEquityRatio,
    #[serde(rename = "Dividend Yield")]
    DividendYield,
    #[serde(rename = "Revenue Growth")]
    RevenueGrowth,
    #[serde(rename = "EPS Growth")]
    EpsGrowth,
    #[serde(rename = "Current Ratio")]
    CurrentRatio,
    #[serde(rename = "Gross Margin")]
    GrossMargin,
}

impl Field {
    /// All fields, in dataset column order.
    pub const ALL: [Self; 9] = [
        Self::MarketCap,
        Self::PeRatio,
        Self::Roe,
        Self::DebtEquityRatio,
        Self::DividendYield,
        Self::RevenueGrowth,
        Self::EpsGrowth,
        Self::CurrentRatio,
        Self::GrossMargin,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MarketCap => "Market Capitalization",
            Self::PeRatio => "P/E Ratio",
            Self::Roe => "ROE",
            Self::DebtEquityRatio => "Debt/Equity Ratio",
            Self::DividendYield => "Dividend Yield",
            Self::RevenueGrowth => "Revenue Growth",
            Self::EpsGrowth => "EPS Growth",
            Self::CurrentRatio => "Current Ratio",
            Self::GrossMargin => "Gross Margin",
        }
    }

    /// Exact, case-sensitive lookup by display name.
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::lookup(value).ok_or_else(|| ValidationError::UnknownField {
            value: value.to_owned(),
            expected: Self::ALL
                .iter()
                .map(|field| field.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}
