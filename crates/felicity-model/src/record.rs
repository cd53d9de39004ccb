// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const FIELD_COUNTRY: &str = "country";
pub const FIELD_REGION: &str = "region";
pub const FIELD_SCORE: &str = "happiness_score";

/// One row of the happiness dataset, keyed by CSV header column.
///
/// Every header column is present as a key. Fields that parse as finite
/// numbers are stored as JSON numbers; everything else stays text. Records
/// are immutable once constructed and serialize directly as JSON objects in
/// column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HappinessRecord(Map<String, Value>);

impl HappinessRecord {
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Builds a record from raw `(header, field)` text pairs, coercing each
    /// field.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut fields = Map::new();
        for (header, raw) in pairs {
            fields.insert(header.to_string(), coerce_field(raw));
        }
        Self(fields)
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    #[must_use]
    pub fn text(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    #[must_use]
    pub fn number(&self, field: &str) -> Option<f64> {
        self.0.get(field).and_then(Value::as_f64)
    }

    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.text(FIELD_COUNTRY)
    }

    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.text(FIELD_REGION)
    }

    #[must_use]
    pub fn happiness_score(&self) -> Option<f64> {
        self.number(FIELD_SCORE)
    }
}

/// Parse-or-keep coercion applied to every CSV field: a field whose full
/// text is a finite number becomes a JSON number, anything else (including
/// the empty string) stays text.
#[must_use]
pub fn coerce_field(raw: &str) -> Value {
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => Value::from(n),
        _ => Value::String(raw.to_string()),
    }
}
