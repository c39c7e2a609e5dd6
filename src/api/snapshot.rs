use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::ChartKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingStateKind {
    Unbound,
    Bound,
}

/// Serializable view of one binding for host diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingSnapshot {
    pub kind: ChartKind,
    pub state: BindingStateKind,
    pub point_count: usize,
    /// Refreshes applied to the live instance since the binding was created.
    pub refresh_count: u64,
}

impl BindingSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize binding snapshot: {e}"))
        })
    }
}
