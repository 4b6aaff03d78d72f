use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Comparison applied between a record value and a condition threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = ">=")]
    GreaterOrEqual,
    #[serde(rename = "<=")]
    LessOrEqual,
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = "<")]
    Less,
    #[serde(rename = "=")]
    Equal,
}

impl Operator {
    /// Detection order. Two-character operators come first so `>=` is never
    /// read as `>` followed by a stray `=`.
    pub const PRIORITY: [Self; 5] = [
        Self::GreaterOrEqual,
        Self::LessOrEqual,
        Self::Greater,
        Self::Less,
        Self::Equal,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GreaterOrEqual => ">=",
            Self::LessOrEqual => "<=",
            Self::Greater => ">",
            Self::Less => "<",
            Self::Equal => "=",
        }
    }

    /// First operator in [`Operator::PRIORITY`] order contained in `segment`.
    pub fn detect(segment: &str) -> Option<Self> {
        Self::PRIORITY
            .into_iter()
            .find(|operator| segment.contains(operator.as_str()))
    }

    /// Compare `actual` against `threshold`. Equality is exact.
    ///
    /// Each bound is checked in its negated form, so a NaN on either side
    /// passes every ordering bound and fails equality.
    #[allow(clippy::float_cmp, clippy::neg_cmp_op_on_partial_ord)]
    pub fn compare(self, actual: f64, threshold: f64) -> bool {
        match self {
            Self::GreaterOrEqual => !(actual < threshold),
            Self::LessOrEqual => !(actual > threshold),
            Self::Greater => !(actual <= threshold),
            Self::Less => !(actual >= threshold),
            Self::Equal => actual == threshold,
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            ">=" => Ok(Self::GreaterOrEqual),
            "<=" => Ok(Self::LessOrEqual),
            ">" => Ok(Self::Greater),
            "<" => Ok(Self::Less),
            "=" => Ok(Self::Equal),
            other => Err(ValidationError::InvalidOperator {
                value: other.to_owned(),
            }),
        }
    }
}
