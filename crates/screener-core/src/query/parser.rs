use serde::Serialize;
use tracing::debug;

use super::{Condition, Operator, Query};

/// Literal, case-sensitive conjunction token.
pub const CONJUNCTION: &str = "AND";

/// Why a query segment produced no condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    NoOperator,
    RepeatedOperator,
    InvalidValue,
}

/// A segment the parser skipped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DroppedSegment {
    pub segment: String,
    pub reason: DropReason,
}

/// Parsed conditions plus the segments that were skipped along the way.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseReport {
    pub query: Query,
    pub dropped: Vec<DroppedSegment>,
}

/// Parse free text into an AND-conjoined list of conditions.
///
/// Best-effort: segments without an operator, with the operator repeated,
/// or with a non-numeric threshold are skipped. Never fails.
pub fn parse(input: &str) -> Query {
    parse_report(input).query
}

/// Like [`parse`], but also reports every skipped segment.
pub fn parse_report(input: &str) -> ParseReport {
    let mut report = ParseReport::default();

    for raw in input.split(CONJUNCTION) {
        let segment = raw.trim();
        match parse_segment(segment) {
            Ok(condition) => report.query.push(condition),
            Err(reason) => {
                debug!(segment, ?reason, "dropping query segment");
                report.dropped.push(DroppedSegment {
                    segment: segment.to_owned(),
                    reason,
                });
            }
        }
    }

    report
}

fn parse_segment(segment: &str) -> Result<Condition, DropReason> {
    let operator = Operator::detect(segment).ok_or(DropReason::NoOperator)?;

    let mut parts = segment.split(operator.as_str());
    let (Some(field), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(DropReason::RepeatedOperator);
    };

    let text = value.trim();
    let value = text.parse::<f64>().map_err(|_| DropReason::InvalidValue)?;
    if value.is_infinite() && !is_infinity_literal(text) {
        return Err(DropReason::InvalidValue);
    }

    Ok(Condition::new(field.trim(), operator, value))
}

/// Out-of-range numbers such as `1e400` overflow to infinity; only spelled
/// out `inf`/`infinity` may produce one.
fn is_infinity_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
