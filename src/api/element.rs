use indexmap::IndexMap;

use super::{BindingConfig, HostElement};

/// In-memory [`HostElement`] for hosts that mirror DOM state themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartElement {
    id: String,
    attributes: IndexMap<String, String>,
}

impl ChartElement {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: IndexMap::new(),
        }
    }

    /// Element carrying `payload` under the default payload attribute.
    #[must_use]
    pub fn with_payload(id: impl Into<String>, payload: impl Into<String>) -> Self {
        Self::new(id).with_attribute(BindingConfig::DEFAULT_PAYLOAD_ATTRIBUTE, payload)
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Replaces the default payload attribute, as a server re-render would.
    pub fn set_payload(&mut self, payload: impl Into<String>) {
        self.set_attribute(BindingConfig::DEFAULT_PAYLOAD_ATTRIBUTE, payload);
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.shift_remove(name)
    }
}

impl HostElement for ChartElement {
    fn id(&self) -> &str {
        &self.id
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}
