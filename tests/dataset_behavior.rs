//! Behavior-driven tests for dataset loading
//!
//! These tests verify HOW the CSV source becomes the in-memory stock set and
//! which rows are kept or skipped.

use screener_core::{DatasetError, SkipReason};
use screener_tests::{names, write_csv, Dataset, Field};

#[test]
fn when_dataset_file_is_loaded_stocks_keep_file_order_and_values() {
    // Given: A CSV with two well-formed rows
    let file = write_csv(&[
        "Alpha Corp,2500000000,18.5,0.22,0.4,0.015,0.12,0.1,1.8,0.55",
        "Beta Industries,900000000,31.2,0.08,1.6,0.0,0.03,-0.02,0.9,0.21",
    ]);

    // When: The dataset is loaded
    let dataset = Dataset::from_path(file.path()).expect("dataset should load");

    // Then: Both stocks are present in order with their metrics
    assert_eq!(dataset.len(), 2);
    let alpha = &dataset.stocks()[0];
    assert_eq!(alpha.name(), "Alpha Corp");
    assert_eq!(alpha.value(Field::MarketCap), 2_500_000_000.0);
    assert_eq!(alpha.value(Field::CurrentRatio), 1.8);
    assert_eq!(dataset.stocks()[1].value(Field::EpsGrowth), -0.02);
    assert!(dataset.report().skipped.is_empty());
}

#[test]
fn when_market_cap_is_not_numeric_the_row_is_skipped_and_reported() {
    let file = write_csv(&[
        "Alpha Corp,2500000000,18.5,0.22,0.4,0.015,0.12,0.1,1.8,0.55",
        "Broken Co,unknown,10,0.1,0.1,0.1,0.1,0.1,0.1,0.1",
        "Gamma Holdings,400000000,12,0.05,0.2,0.03,0.01,0.02,2.1,0.3",
    ]);

    let dataset = Dataset::from_path(file.path()).expect("dataset should load");

    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.report().loaded, 2);
    assert_eq!(dataset.report().skipped.len(), 1);
    assert_eq!(dataset.report().skipped[0].row, 2);
    assert!(matches!(
        dataset.report().skipped[0].reason,
        SkipReason::InvalidMarketCap { .. }
    ));
}

#[test]
fn when_a_secondary_metric_is_blank_it_reads_as_zero() {
    let file = write_csv(&["Alpha Corp,2500000000, ,0.22,0.4,,0.12,0.1,1.8,0.55"]);

    let dataset = Dataset::from_path(file.path()).expect("dataset should load");

    let alpha = &dataset.stocks()[0];
    assert_eq!(alpha.value(Field::PeRatio), 0.0);
    assert_eq!(alpha.value(Field::DividendYield), 0.0);
    assert_eq!(alpha.value(Field::Roe), 0.22);
}

#[test]
fn when_dataset_is_loaded_it_can_be_screened_directly() {
    let file = write_csv(&[
        "Alpha Corp,2500000000,18.5,0.22,0.4,0.015,0.12,0.1,1.8,0.55",
        "Beta Industries,900000000,31.2,0.08,1.6,0.0,0.03,-0.02,0.9,0.21",
    ]);
    let dataset = Dataset::from_path(file.path()).expect("dataset should load");

    let matched = dataset.screen("Debt/Equity Ratio < 1 AND Gross Margin >= 0.5");

    assert_eq!(names(&matched), ["Alpha Corp"]);
}

#[test]
fn when_dataset_file_is_missing_loading_fails_with_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("StockDataset.csv");

    let error = Dataset::from_path(&missing).expect_err("missing file should fail");

    assert!(matches!(error, DatasetError::Open { .. }));
    assert!(error.to_string().contains("StockDataset.csv"));
}

#[test]
fn cloned_dataset_shares_the_same_records() {
    let file = write_csv(&["Alpha Corp,2500000000,18.5,0.22,0.4,0.015,0.12,0.1,1.8,0.55"]);
    let dataset = Dataset::from_path(file.path()).expect("dataset should load");

    let clone = dataset.clone();

    assert!(std::ptr::eq(dataset.stocks(), clone.stocks()));
}
