//! # Domain Models
//!
//! The stock record and the fixed vocabulary of numeric fields it carries.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Field`] | Known numeric attribute and its display name |
//! | [`Stock`] | Immutable record: name plus one value per [`Field`] |
//! | [`Metrics`] | Field-to-value access used by the filter engine |

mod field;
mod stock;

pub use field::Field;
pub use stock::{Metrics, Stock};
