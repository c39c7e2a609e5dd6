use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

/// Host-facing binding configuration.
///
/// Every field has a default so hosts may persist partial JSON documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingConfig {
    #[serde(default = "default_payload_attribute")]
    pub payload_attribute: String,
    #[serde(default = "default_true")]
    pub responsive: bool,
    #[serde(default = "default_true")]
    pub maintain_aspect_ratio: bool,
    #[serde(default)]
    pub viewport: Viewport,
}

impl BindingConfig {
    pub const DEFAULT_PAYLOAD_ATTRIBUTE: &'static str = "data-chart-data";

    #[must_use]
    pub fn with_payload_attribute(mut self, name: impl Into<String>) -> Self {
        self.payload_attribute = name.into();
        self
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to parse binding config: {e}"))
        })?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize binding config: {e}"))
        })
    }

    fn validate(self) -> ChartResult<Self> {
        if self.payload_attribute.is_empty() {
            return Err(ChartError::InvalidConfig(
                "payload attribute name must not be empty".to_owned(),
            ));
        }
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidConfig(format!(
                "viewport must be non-empty, got {}x{}",
                self.viewport.width, self.viewport.height
            )));
        }
        Ok(self)
    }
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            payload_attribute: default_payload_attribute(),
            responsive: true,
            maintain_aspect_ratio: true,
            viewport: Viewport::default(),
        }
    }
}

fn default_payload_attribute() -> String {
    BindingConfig::DEFAULT_PAYLOAD_ATTRIBUTE.to_owned()
}

fn default_true() -> bool {
    true
}
