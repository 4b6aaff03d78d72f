//! # Query Language
//!
//! Free-text screening queries such as `P/E Ratio < 20 AND ROE > 0.15`.
//!
//! A query is a flat conjunction: segments are separated by the literal,
//! case-sensitive token `AND`, and each segment is `<field> <op> <number>`
//! where `<op>` is one of `>=`, `<=`, `>`, `<`, `=`. There is no `OR`, no
//! negation, and no grouping.
//!
//! ```rust
//! use screener_core::query::{self, Operator};
//!
//! let query = query::parse("P/E Ratio < 20 AND ROE>=0.15 AND garbage");
//! assert_eq!(query.len(), 2);
//! assert_eq!(query.conditions()[1].operator, Operator::GreaterOrEqual);
//! ```

mod condition;
mod operator;
mod parser;

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub use condition::Condition;
pub use operator::Operator;
pub use parser::{parse, parse_report, DropReason, DroppedSegment, ParseReport, CONJUNCTION};

/// Ordered, implicitly AND-ed list of conditions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Query {
    conditions: Vec<Condition>,
}

impl Query {
    pub fn new(conditions: Vec<Condition>) -> Self {
        Self { conditions }
    }

    pub fn push(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Condition> {
        self.conditions.iter()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl From<Vec<Condition>> for Query {
    fn from(conditions: Vec<Condition>) -> Self {
        Self::new(conditions)
    }
}

impl FromIterator<Condition> for Query {
    fn from_iter<I: IntoIterator<Item = Condition>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Query {
    type Item = &'a Condition;
    type IntoIter = std::slice::Iter<'a, Condition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, condition) in self.conditions.iter().enumerate() {
            if index > 0 {
                write!(f, " {CONJUNCTION} ")?;
            }
            write!(f, "{condition}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_normalized_query_text() {
        let query = parse("P/E Ratio<20   AND ROE >=0.15");
        assert_eq!(query.to_string(), "P/E Ratio < 20 AND ROE >= 0.15");
    }

    #[test]
    fn serializes_as_condition_list() {
        let query = parse("ROE = 0.2");
        let json = serde_json::to_value(&query).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!([{ "field": "ROE", "operator": "=", "value": 0.2 }])
        );
    }
}
