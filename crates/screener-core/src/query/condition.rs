use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::Operator;
use crate::domain::{Field, Metrics};

/// A single `field operator threshold` comparison.
///
/// The field name is kept verbatim from the query. It is resolved against
/// [`Field`] only at evaluation time, where an unknown name rejects the
/// whole record rather than just this condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub field: String,
    pub operator: Operator,
    pub value: f64,
}

impl Condition {
    pub fn new(field: impl Into<String>, operator: Operator, value: f64) -> Self {
        Self {
            field: field.into(),
            operator,
            value,
        }
    }

    /// Known field this condition refers to, if any.
    pub fn resolve(&self) -> Option<Field> {
        Field::lookup(&self.field)
    }

    /// `None` when the field name is unknown.
    pub fn evaluate<M: Metrics + ?Sized>(&self, record: &M) -> Option<bool> {
        let field = self.resolve()?;
        Some(self.operator.compare(record.metric(field), self.value))
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.field, self.operator, self.value)
    }
}
