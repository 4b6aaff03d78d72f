use screener_core::{query, Dataset};

use super::{load_warnings, CommandData, CommandResult};

pub fn list(dataset: &Dataset) -> CommandResult {
    CommandResult::ok(CommandData::Stocks(dataset.stocks().to_vec()))
        .with_warnings(load_warnings(dataset.report()))
}

pub fn filter(dataset: &Dataset, query_text: &str) -> CommandResult {
    let report = query::parse_report(query_text);
    let matched = dataset.filter(&report.query).into_iter().cloned().collect();

    let mut warnings = load_warnings(dataset.report());
    warnings.extend(report.dropped.iter().map(|dropped| {
        format!(
            "ignored query segment '{}' ({:?})",
            dropped.segment, dropped.reason
        )
    }));
    warnings.extend(
        report
            .query
            .iter()
            .filter(|condition| condition.resolve().is_none())
            .map(|condition| format!("unknown field '{}' matches no stock", condition.field)),
    );

    CommandResult::ok(CommandData::Stocks(matched)).with_warnings(warnings)
}
