//! # Screener Core
//!
//! Stock records, the screening query language, and the filter engine.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | [`Stock`] records and the [`Field`] vocabulary |
//! | [`query`] | Query parser producing AND-conjoined [`Condition`]s |
//! | [`filter`] | Applies a [`Query`] to a record collection |
//! | [`dataset`] | CSV ingestion into an immutable [`Dataset`] |
//! | [`error`] | Core error types |
//!
//! ## Quick Start
//!
//! ```rust
//! use screener_core::{filter, query, Field, Stock};
//!
//! let stocks = vec![
//!     Stock::new("A").with(Field::PeRatio, 15.0).with(Field::Roe, 0.2),
//!     Stock::new("B").with(Field::PeRatio, 25.0).with(Field::Roe, 0.3),
//! ];
//!
//! let matched = filter::filter(&stocks, &query::parse("P/E Ratio < 20"));
//! assert_eq!(matched.len(), 1);
//! assert_eq!(matched[0].name(), "A");
//! ```
//!
//! ## Semantics
//!
//! Parsing never fails: malformed segments are skipped. Evaluation never
//! fails either, but a condition naming an unknown field rejects the record
//! it is evaluated against, regardless of the other conditions.

pub mod dataset;
pub mod domain;
pub mod error;
pub mod filter;
pub mod query;

pub use dataset::{Dataset, LoadReport, SkipReason, SkippedRow};
pub use domain::{Field, Metrics, Stock};
pub use error::{DatasetError, ValidationError};
pub use query::{Condition, Operator, ParseReport, Query};
