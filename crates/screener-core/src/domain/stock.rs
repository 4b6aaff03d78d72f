use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Field;

const NAME_KEY: &str = "Stock Name";

/// Read access to the numeric attributes of a record.
///
/// The filter engine evaluates conditions through this trait, so any record
/// type that can resolve a [`Field`] to a number can be screened.
pub trait Metrics {
    fn metric(&self, field: Field) -> f64;
}

/// One stock's fixed-schema financial attributes.
///
/// Serializes as a flat JSON object keyed by `"Stock Name"` and the
/// [`Field`] display names, in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Stock {
    name: String,
    values: [f64; Field::ALL.len()],
}

impl Stock {
    /// Create a record with every metric set to zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: [0.0; Field::ALL.len()],
        }
    }

    /// Return the record with `field` set to `value`.
    #[must_use]
    pub fn with(mut self, field: Field, value: f64) -> Self {
        self.values[field.index()] = value;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self, field: Field) -> f64 {
        self.values[field.index()]
    }

    /// `(field, value)` pairs in column order.
    pub fn metrics(&self) -> impl Iterator<Item = (Field, f64)> + '_ {
        Field::ALL.into_iter().map(|field| (field, self.value(field)))
    }
}

impl Metrics for Stock {
    fn metric(&self, field: Field) -> f64 {
        self.value(field)
    }
}

impl<T: Metrics + ?Sized> Metrics for &T {
    fn metric(&self, field: Field) -> f64 {
        (**self).metric(field)
    }
}

impl Serialize for Stock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Field::ALL.len() + 1))?;
        map.serialize_entry(NAME_KEY, &self.name)?;
        for (field, value) in self.metrics() {
            map.serialize_entry(field.as_str(), &value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Stock {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StockVisitor)
    }
}

struct StockVisitor;

impl<'de> Visitor<'de> for StockVisitor {
    type Value = Stock;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a stock record keyed by display field names")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut name: Option<String> = None;
        let mut values = [None; Field::ALL.len()];

        while let Some(key) = access.next_key::<String>()? {
            if key == NAME_KEY {
                if name.is_some() {
                    return Err(de::Error::duplicate_field(NAME_KEY));
                }
                name = Some(access.next_value()?);
                continue;
            }

            let field = Field::lookup(&key)
                .ok_or_else(|| de::Error::custom(format!("unknown field '{key}'")))?;
            if values[field.index()].is_some() {
                return Err(de::Error::duplicate_field(field.as_str()));
            }
            values[field.index()] = Some(access.next_value::<f64>()?);
        }

        let mut stock = Stock::new(name.ok_or_else(|| de::Error::missing_field(NAME_KEY))?);
        for field in Field::ALL {
            let value = values[field.index()]
                .ok_or_else(|| de::Error::missing_field(field.as_str()))?;
            stock = stock.with(field, value);
        }
        Ok(stock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Stock {
        Stock::new("ACME")
            .with(Field::MarketCap, 1_500_000.0)
            .with(Field::PeRatio, 15.0)
            .with(Field::Roe, 0.2)
    }

    #[test]
    fn unset_metrics_default_to_zero() {
        let stock = Stock::new("ACME");
        assert!(stock.metrics().all(|(_, value)| value == 0.0));
    }

    #[test]
    fn serializes_with_display_names_in_column_order() {
        let json = serde_json::to_string(&sample()).expect("serialize");
        assert!(json.starts_with("{\"Stock Name\":\"ACME\",\"Market Capitalization\":1500000.0"));
        assert!(json.contains("\"P/E Ratio\":15.0"));
        assert!(json.ends_with("\"Gross Margin\":0.0}"));
    }

    #[test]
    fn deserializes_what_it_serializes() {
        let json = serde_json::to_value(sample()).expect("serialize");
        let parsed: Stock = serde_json::from_value(json).expect("deserialize");
        assert_eq!(parsed, sample());
    }

    #[test]
    fn rejects_record_missing_a_metric() {
        let err = serde_json::from_str::<Stock>(r#"{"Stock Name":"ACME","ROE":0.1}"#)
            .expect_err("must fail");
        assert!(err.to_string().contains("missing field"));
    }
}
