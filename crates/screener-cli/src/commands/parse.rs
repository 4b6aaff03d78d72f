use screener_core::query::{self, DroppedSegment};
use screener_core::Operator;
use serde::Serialize;

use super::{CommandData, CommandResult};

/// A parsed condition annotated with whether its field is known.
#[derive(Debug, Serialize)]
pub struct ParsedCondition {
    pub field: String,
    pub operator: Operator,
    pub value: f64,
    pub known_field: bool,
}

#[derive(Debug, Serialize)]
pub struct ParsedQuery {
    pub normalized: String,
    pub conditions: Vec<ParsedCondition>,
    pub dropped: Vec<DroppedSegment>,
}

pub fn run(query_text: &str) -> CommandResult {
    let report = query::parse_report(query_text);

    let conditions = report
        .query
        .iter()
        .map(|condition| ParsedCondition {
            field: condition.field.clone(),
            operator: condition.operator,
            value: condition.value,
            known_field: condition.resolve().is_some(),
        })
        .collect();

    CommandResult::ok(CommandData::Parsed(ParsedQuery {
        normalized: report.query.to_string(),
        conditions,
        dropped: report.dropped,
    }))
}
