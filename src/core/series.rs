use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ChartError, ChartResult};

/// Ordered category labels paired with their numeric values.
///
/// Insertion order is display order along the category/time axis. Labels and
/// values always have the same length; an empty series is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Series {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl Series {
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> ChartResult<Self> {
        if labels.len() != values.len() {
            return Err(ChartError::MalformedPayload(format!(
                "`labels` has {} entries but `data` has {}",
                labels.len(),
                values.len()
            )));
        }
        Ok(Self { labels, values })
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    #[must_use]
    pub fn into_parts(self) -> (Vec<String>, Vec<f64>) {
        (self.labels, self.values)
    }
}

#[derive(Debug, Deserialize)]
struct PayloadWire {
    labels: Vec<String>,
    data: Vec<f64>,
}

/// Decodes an element's chart payload attribute into a [`Series`].
///
/// The payload must be a JSON object with a `labels` array of strings and a
/// `data` array of numbers of the same length. Other fields are ignored.
/// Nothing is coerced: any structural violation yields
/// [`ChartError::MalformedPayload`].
pub fn decode_payload(raw: &str) -> ChartResult<Series> {
    let object: Map<String, Value> = serde_json::from_str(raw).map_err(|e| {
        ChartError::MalformedPayload(format!("payload is not a JSON object: {e}"))
    })?;
    let wire = PayloadWire::deserialize(Value::Object(object))
        .map_err(|e| ChartError::MalformedPayload(e.to_string()))?;
    Series::new(wire.labels, wire.data)
}
