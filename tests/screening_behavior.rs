//! Behavior-driven tests for query screening
//!
//! These tests verify WHAT a user gets back for a query: which stocks match,
//! in which order, and how malformed input degrades.

use screener_core::{Condition, Operator};
use screener_tests::{filter, names, query, sample_stocks, stock, Query};

// =============================================================================
// Screening: Conjunctions
// =============================================================================

#[test]
fn when_user_screens_with_single_bound_only_matching_stock_is_returned() {
    // Given: Two stocks on either side of the P/E bound
    let stocks = vec![stock("A", 15.0, 0.2), stock("B", 25.0, 0.3)];

    // When: The user screens for P/E under 20
    let matched = filter::filter_cloned(&stocks, &query::parse("P/E Ratio < 20"));

    // Then: Only the cheaper stock comes back, unchanged
    assert_eq!(matched, vec![stock("A", 15.0, 0.2)]);
}

#[test]
fn when_user_combines_conditions_with_and_every_bound_must_hold() {
    // Given: A universe where each bound alone matches two stocks
    let stocks = sample_stocks();

    // When: Both bounds are combined
    let matched = filter::filter(&stocks, &query::parse("P/E Ratio < 20 AND ROE > 0.1"));

    // Then: Only the stock satisfying both survives
    assert_eq!(names(&matched), ["Alpha Corp"]);
}

#[test]
fn when_conditions_are_written_without_spaces_they_still_apply() {
    let stocks = sample_stocks();

    let matched = filter::filter(&stocks, &query::parse("P/E Ratio<=15AND ROE>=0.05"));

    assert_eq!(names(&matched), ["Alpha Corp", "Gamma Holdings"]);
}

// =============================================================================
// Screening: Ordering
// =============================================================================

#[test]
fn when_several_stocks_match_they_keep_dataset_order() {
    // Given: A universe whose file order is not sorted by any metric
    let stocks = sample_stocks();

    // When: A loose bound matches everything
    let matched = filter::filter(&stocks, &query::parse("ROE > 0"));

    // Then: Results are in the original order
    assert_eq!(names(&matched), ["Alpha Corp", "Beta Industries", "Gamma Holdings"]);
}

// =============================================================================
// Screening: Degraded Input
// =============================================================================

#[test]
fn when_query_has_no_valid_segments_every_stock_is_returned() {
    let stocks = sample_stocks();

    for text in ["", "   ", "cheap stocks please", "ROE > lots", "ROE > 1 > 2"] {
        // When: A query with nothing usable is applied
        let parsed = query::parse(text);
        let matched = filter::filter(&stocks, &parsed);

        // Then: It behaves as the identity filter
        assert!(parsed.is_empty(), "{text:?} should parse to no conditions");
        assert_eq!(matched.len(), stocks.len(), "{text:?} should match everything");
    }
}

#[test]
fn when_one_segment_is_malformed_the_rest_still_filter() {
    let stocks = sample_stocks();

    let matched = filter::filter(&stocks, &query::parse("ROE ~ 0.1 AND P/E Ratio > 20"));

    assert_eq!(names(&matched), ["Beta Industries"]);
}

#[test]
fn when_lowercase_and_is_used_the_query_is_not_split() {
    // Given: A user writes the connective in lowercase
    let parsed = query::parse("ROE > 0.1 and P/E Ratio < 20");

    // Then: The whole text is one segment whose value is not a number
    assert!(parsed.is_empty());
}

// =============================================================================
// Screening: Unknown Fields
// =============================================================================

#[test]
fn when_query_names_unknown_field_no_stock_matches() {
    // Given: A query mixing a satisfiable bound with an unknown field
    let stocks = sample_stocks();
    let parsed = query::parse("ROE > 0 AND Beta < 1");

    // When: It is applied
    let matched = filter::filter(&stocks, &parsed);

    // Then: Every stock is rejected, not just the unknown condition skipped
    assert_eq!(parsed.len(), 2);
    assert!(matched.is_empty());
}

#[test]
fn when_field_name_has_wrong_case_it_is_unknown() {
    let stocks = sample_stocks();

    let matched = filter::filter(&stocks, &query::parse("roe > 0"));

    assert!(matched.is_empty());
}

// =============================================================================
// Screening: Operators
// =============================================================================

#[test]
fn when_operator_is_two_characters_it_is_not_split_early() {
    let parsed = query::parse("ROE>=0.1");

    assert_eq!(
        parsed.conditions(),
        &[Condition::new("ROE", Operator::GreaterOrEqual, 0.1)]
    );
}

#[test]
fn when_user_asks_for_equality_it_is_exact() {
    // Given: Two stocks differing only in the eighth decimal of ROE
    let stocks = vec![stock("Near", 10.0, 0.150_000_01), stock("Exact", 10.0, 0.15)];

    // When: The user screens for ROE equal to 0.15
    let matched = filter::filter(&stocks, &query::parse("ROE = 0.15"));

    // Then: Only the exact value matches
    assert_eq!(names(&matched), ["Exact"]);
}

#[test]
fn when_threshold_is_nan_equality_matches_nothing_and_bounds_match_everything() {
    // Given: The sample universe
    let stocks = sample_stocks();

    // When: The user screens against a NaN threshold
    let equal = filter::filter(&stocks, &query::parse("ROE = NaN"));
    let bounded = filter::filter(&stocks, &query::parse("ROE > NaN AND P/E Ratio < NaN"));

    // Then: Equality never holds while every ordering bound passes
    assert!(equal.is_empty());
    assert_eq!(names(&bounded), ["Alpha Corp", "Beta Industries", "Gamma Holdings"]);
}

#[test]
fn when_threshold_overflows_the_segment_is_dropped() {
    // Given: The sample universe
    let stocks = sample_stocks();

    // When: The only other bound is an out-of-range number
    let matched = filter::filter(&stocks, &query::parse("ROE > 1e400 AND P/E Ratio < 20"));

    // Then: Only the in-range bound filters
    assert_eq!(names(&matched), ["Alpha Corp", "Gamma Holdings"]);
}

#[test]
fn inclusive_and_strict_bounds_differ_only_at_the_threshold() {
    let stocks = sample_stocks();

    let strict = filter::filter(&stocks, &query::parse("P/E Ratio > 15"));
    let inclusive = filter::filter(&stocks, &query::parse("P/E Ratio >= 15"));

    assert_eq!(names(&strict), ["Beta Industries"]);
    assert_eq!(names(&inclusive), ["Alpha Corp", "Beta Industries"]);
}

#[test]
fn programmatic_queries_behave_like_parsed_ones() {
    let stocks = sample_stocks();
    let built = Query::new(vec![Condition::new("P/E Ratio", Operator::Less, 20.0)]);

    assert_eq!(
        filter::filter(&stocks, &built),
        filter::filter(&stocks, &query::parse("P/E Ratio < 20"))
    );
}
